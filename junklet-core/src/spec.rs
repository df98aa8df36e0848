//! Generation specs.
//!
//! A [`Spec`] says what kind of junk to produce. Callers either build one
//! directly (`Spec::Int`, `Spec::sequence(..)`, `Spec::thunk(..)`) or hand a
//! loosely-typed [`Value`] to `Spec::try_from`, which classifies it with a
//! fixed, ordered set of checks.

use std::fmt;

use phf::phf_map;

use crate::error::JunkError;
use crate::value::Value;

/// Tag names accepted for symbolic specs.
static TAGS: phf::Map<&'static str, Tag> = phf_map! {
    "int" => Tag::Int,
    "bool" => Tag::Bool,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Int,
    Bool,
}

/// What to generate.
pub enum Spec<'a> {
    /// No spec: a hex string, `size` digits long (default 32).
    Hex,

    /// A hex string of exactly this many digits. Not an integer value.
    Length(usize),

    /// Sample one element uniformly.
    Sequence(Vec<Value>),

    /// Sample one element uniformly from a lazily produced collection.
    Enumerable(Box<dyn Iterator<Item = Value> + 'a>),

    /// Call it and use the return value.
    Thunk(Box<dyn FnMut() -> Value + 'a>),

    /// Random integer, bounded by `minimum`/`maximum`, digit count by `size`.
    Int,

    /// Fair coin.
    Bool,
}

impl<'a> Spec<'a> {
    /// Sample from a finite, already materialized collection.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Spec::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Sample from a range or any other finite iterator.
    pub fn range<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value> + 'a,
        I::IntoIter: 'a,
    {
        Spec::Enumerable(Box::new(iter.into_iter().map(Into::into)))
    }

    /// Call `f` once per generated value.
    pub fn thunk<F, V>(mut f: F) -> Self
    where
        F: FnMut() -> V + 'a,
        V: Into<Value>,
    {
        Spec::Thunk(Box::new(move || f().into()))
    }

    /// Look up a symbolic tag (`int`, `bool`).
    pub fn from_tag(tag: &str) -> Result<Self, JunkError> {
        match TAGS.get(tag) {
            Some(Tag::Int) => Ok(Spec::Int),
            Some(Tag::Bool) => Ok(Spec::Bool),
            None => Err(JunkError::UnsupportedSpecKind(format!("unknown tag :{}", tag))),
        }
    }

    /// Short variant name, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Spec::Hex => "hex",
            Spec::Length(_) => "length",
            Spec::Sequence(_) => "sequence",
            Spec::Enumerable(_) => "enumerable",
            Spec::Thunk(_) => "thunk",
            Spec::Int => "int",
            Spec::Bool => "bool",
        }
    }
}

impl Default for Spec<'_> {
    fn default() -> Self {
        Spec::Hex
    }
}

impl fmt::Debug for Spec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Hex => f.write_str("Hex"),
            Spec::Length(n) => f.debug_tuple("Length").field(n).finish(),
            Spec::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Spec::Enumerable(_) => f.write_str("Enumerable(..)"),
            Spec::Thunk(_) => f.write_str("Thunk(..)"),
            Spec::Int => f.write_str("Int"),
            Spec::Bool => f.write_str("Bool"),
        }
    }
}

/// Classify a loosely-typed value.
///
/// Checks run in order: nil, length, list, tag. Everything else is
/// unsupported.
impl TryFrom<Value> for Spec<'static> {
    type Error = JunkError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Nil => Ok(Spec::Hex),
            Value::Int(n) => usize::try_from(n).map(Spec::Length).map_err(|_| {
                JunkError::UnsupportedSpecKind(format!("negative length {}", n))
            }),
            Value::List(items) => Ok(Spec::Sequence(items)),
            Value::Sym(tag) => Spec::from_tag(&tag),
            other => Err(JunkError::UnsupportedSpecKind(format!(
                "{} spec {}",
                other.kind(),
                other
            ))),
        }
    }
}

impl From<usize> for Spec<'_> {
    fn from(len: usize) -> Self {
        Spec::Length(len)
    }
}
