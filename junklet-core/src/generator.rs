//! The junk engine.
//!
//! [`Generator::junk`] dispatches on the [`Spec`] variant, wraps each single
//! draw in the exclusion filter, and repeats the whole cycle when a
//! repetition `size` applies.
//!
//! # Size
//!
//! `size` means different things per spec:
//!
//! | spec                                  | `size` means                |
//! |---------------------------------------|-----------------------------|
//! | `Hex`                                 | number of hex digits        |
//! | `Int`                                 | number of decimal digits    |
//! | `Length`, `Sequence`, `Enumerable`, `Thunk`, `Bool` | repetition count |

use rand::rngs::ThreadRng;

use crate::error::{JunkError, Result};
use crate::options::{JunkOptions, DEFAULT_HEX_LEN, DEFAULT_INT_MAX};
use crate::random::{RandomSource, SeededSource};
use crate::spec::Spec;
use crate::value::Value;

/// Largest digit count an `i64` can hold.
const MAX_INT_DIGITS: usize = 19;

/// Junk generator over a [`RandomSource`].
///
/// ```
/// use junklet_core::{Generator, JunkOptions, Spec};
///
/// let mut gen = Generator::seeded(7);
/// let coin = gen.junk(Spec::Int, JunkOptions::new().max(1).exclude(1)).unwrap();
/// assert_eq!(coin.as_int(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R = ThreadRng> {
    source: R,
}

impl Generator<ThreadRng> {
    /// Generator over the thread-local RNG.
    pub fn new() -> Self {
        Self {
            source: rand::thread_rng(),
        }
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SeededSource> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed))
    }

    /// Seed from `JUNKLET_SEED`, or pick one at random.
    pub fn from_env_or_random() -> Self {
        Self::with_source(SeededSource::from_env_or_random())
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// `len` random lowercase hex digits. Never filtered, never fails.
    pub fn hex(&mut self, len: usize) -> String {
        self.source.hex(len)
    }

    /// Generate one piece of junk, or a list of them when `size` repeats.
    pub fn junk(&mut self, spec: Spec<'_>, options: JunkOptions<'_>) -> Result<Value> {
        let kind = spec.kind();
        tracing::trace!(spec = kind, "generating junk");

        match spec {
            Spec::Hex => {
                let len = options.size.unwrap_or(DEFAULT_HEX_LEN);
                self.filtered(kind, &options, |src| Value::Str(src.hex(len)))
            }
            Spec::Length(len) => self.sized(kind, &options, |src| Value::Str(src.hex(len))),
            Spec::Sequence(items) => self.sample(kind, &options, &items),
            Spec::Enumerable(iter) => {
                let items: Vec<Value> = iter.collect();
                self.sample(kind, &options, &items)
            }
            Spec::Thunk(mut f) => self.sized(kind, &options, |_| f()),
            Spec::Int => {
                let (minimum, maximum) = int_bounds(&options)?;
                self.filtered(kind, &options, |src| {
                    Value::Int(src.int_between(minimum, maximum))
                })
            }
            Spec::Bool => self.sized(kind, &options, |src| Value::Bool(src.coin())),
        }
    }

    /// Exclusion filter: draw candidates until one is not excluded.
    ///
    /// Always draws at least once. Gives up after `options.max_attempts`
    /// rejections.
    pub fn filtered<F>(
        &mut self,
        kind: &'static str,
        options: &JunkOptions<'_>,
        mut candidate: F,
    ) -> Result<Value>
    where
        F: FnMut(&mut R) -> Value,
    {
        let Some(exclude) = &options.exclude else {
            return Ok(candidate(&mut self.source));
        };

        let budget = options.attempt_budget();
        for attempt in 1..=budget {
            let value = candidate(&mut self.source);
            if !exclude.rejects(&value) {
                return Ok(value);
            }
            tracing::trace!(spec = kind, attempt, %value, "candidate excluded");
        }

        tracing::debug!(spec = kind, attempts = budget, ?exclude, "exclusion budget exhausted");
        Err(JunkError::ExclusionUnsatisfiable {
            spec: kind,
            attempts: budget,
        })
    }

    /// Size controller: run `cycle` `n` times, collecting a list.
    pub fn repeat<F>(&mut self, n: usize, mut cycle: F) -> Result<Value>
    where
        F: FnMut(&mut Self) -> Result<Value>,
    {
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            items.push(cycle(self)?);
        }
        Ok(Value::List(items))
    }

    fn sized<F>(
        &mut self,
        kind: &'static str,
        options: &JunkOptions<'_>,
        mut candidate: F,
    ) -> Result<Value>
    where
        F: FnMut(&mut R) -> Value,
    {
        match options.size {
            Some(n) => self.repeat(n, |gen| gen.filtered(kind, options, &mut candidate)),
            None => self.filtered(kind, options, candidate),
        }
    }

    fn sample(
        &mut self,
        kind: &'static str,
        options: &JunkOptions<'_>,
        items: &[Value],
    ) -> Result<Value> {
        if items.is_empty() {
            return Err(JunkError::EmptyCollection(kind));
        }
        self.sized(kind, options, |src| items[src.index(items.len())].clone())
    }
}

/// Inclusive bounds for `Spec::Int`, narrowed by a digit count.
fn int_bounds(options: &JunkOptions<'_>) -> Result<(i64, i64)> {
    let mut minimum = options.minimum.unwrap_or(0);
    let mut maximum = options.maximum.unwrap_or(DEFAULT_INT_MAX);

    if let Some(digits) = options.size {
        let (lo, hi) = digit_bounds(digits)?;
        minimum = minimum.max(lo);
        maximum = maximum.min(hi);
    }

    if minimum > maximum {
        return Err(JunkError::InvalidBounds { minimum, maximum });
    }
    Ok((minimum, maximum))
}

/// Smallest and largest integers with exactly `digits` decimal digits.
fn digit_bounds(digits: usize) -> Result<(i64, i64)> {
    if digits == 0 || digits > MAX_INT_DIGITS {
        return Err(JunkError::InvalidDigits(digits));
    }
    let exp = digits as u32;
    let lo = if digits == 1 { 0 } else { 10i64.pow(exp - 1) };
    let hi = 10i64.checked_pow(exp).map_or(i64::MAX, |p| p - 1);
    Ok((lo, hi))
}
