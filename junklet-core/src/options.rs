//! Options accepted by `junk`.

use std::fmt;

use crate::value::Value;

/// Default digit count for hex junk.
pub const DEFAULT_HEX_LEN: usize = 32;

/// Default upper bound for `Spec::Int`.
pub const DEFAULT_INT_MAX: i64 = (1 << 62) - 2;

/// Candidates tried before an exclusion is declared unsatisfiable.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1024;

/// Values a candidate must not be.
pub enum Exclude<'a> {
    /// Reject this one value.
    One(Value),

    /// Reject any of these values.
    AnyOf(Vec<Value>),

    /// Reject candidates for which the predicate returns true.
    Matching(Box<dyn Fn(&Value) -> bool + 'a>),
}

impl<'a> Exclude<'a> {
    /// Build a predicate exclusion. The predicate may borrow locals.
    pub fn matching<F>(pred: F) -> Self
    where
        F: Fn(&Value) -> bool + 'a,
    {
        Exclude::Matching(Box::new(pred))
    }

    /// True when `candidate` must be rejected.
    pub fn rejects(&self, candidate: &Value) -> bool {
        match self {
            Exclude::One(value) => value == candidate,
            Exclude::AnyOf(values) => values.contains(candidate),
            Exclude::Matching(pred) => pred(candidate),
        }
    }
}

/// A list excludes each of its elements; anything else excludes itself.
impl From<Value> for Exclude<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::List(values) => Exclude::AnyOf(values),
            value => Exclude::One(value),
        }
    }
}

impl fmt::Debug for Exclude<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclude::One(value) => f.debug_tuple("One").field(value).finish(),
            Exclude::AnyOf(values) => f.debug_tuple("AnyOf").field(values).finish(),
            Exclude::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}

/// Options for one `junk` call.
///
/// ```
/// use junklet_core::JunkOptions;
///
/// let opts = JunkOptions::new().min(0).max(10).exclude_if(|v| v.as_int() == Some(3));
/// assert_eq!(opts.minimum, Some(0));
/// ```
#[derive(Debug, Default)]
pub struct JunkOptions<'a> {
    /// Inclusive lower bound for `Spec::Int`.
    pub minimum: Option<i64>,
    /// Inclusive upper bound for `Spec::Int`.
    pub maximum: Option<i64>,
    /// Hex length for `Spec::Hex`, digit count for `Spec::Int`, repetition
    /// count for every other spec.
    pub size: Option<usize>,
    pub exclude: Option<Exclude<'a>>,
    /// Retry budget for `exclude`. Defaults to [`DEFAULT_MAX_ATTEMPTS`];
    /// zero is treated as one.
    pub max_attempts: Option<usize>,
}

impl<'a> JunkOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn max(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Exclude a value, or every element of a list.
    pub fn exclude(mut self, value: impl Into<Value>) -> Self {
        self.exclude = Some(Exclude::from(value.into()));
        self
    }

    /// Exclude each of `values`.
    pub fn exclude_any<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.exclude = Some(Exclude::AnyOf(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Exclude candidates matching `pred`.
    pub fn exclude_if<F>(mut self, pred: F) -> Self
    where
        F: Fn(&Value) -> bool + 'a,
    {
        self.exclude = Some(Exclude::matching(pred));
        self
    }

    /// Retry budget for `exclude`. At least one candidate is always drawn.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub(crate) fn attempt_budget(&self) -> usize {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS).max(1)
    }
}
