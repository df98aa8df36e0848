//! Junklet Core
//!
//! Random placeholder values for tests, so assertions never lean on a
//! hardcoded literal that happens to hide a value-dependent bug.
//!
//! # Architecture
//!
//! - **random.rs** - RandomSource trait, seeded source
//! - **value.rs** - Generated value type
//! - **spec.rs** - Spec tagged union and classification
//! - **options.rs** - JunkOptions, exclusions, defaults
//! - **generator.rs** - Dispatch, exclusion filter, size controller
//! - **accessor.rs** - Memoized junklet accessors and scopes
//! - **macros.rs** - `junklet!` accessor structs
//!
//! # Example
//!
//! ```
//! use junklet_core::{junk, JunkOptions, Spec, Value};
//!
//! let id = junk(Spec::Hex, JunkOptions::new()).unwrap();
//! assert_eq!(id.as_str().map(str::len), Some(32));
//!
//! let letter = junk(
//!     Spec::sequence([Value::sym("a"), Value::sym("b"), Value::sym("c")]),
//!     JunkOptions::new().exclude(vec![Value::sym("a"), Value::sym("b")]),
//! )
//! .unwrap();
//! assert_eq!(letter, Value::sym("c"));
//! ```

pub mod accessor;
pub mod error;
pub mod generator;
mod macros;
pub mod options;
pub mod random;
pub mod spec;
pub mod value;

pub use accessor::{Binding, Declarations, Junklet, Scope};
pub use error::{JunkError, Result};
pub use generator::Generator;
pub use options::{Exclude, JunkOptions};
pub use random::{RandomSource, SeededSource};
pub use spec::Spec;
pub use value::Value;

/// Generate junk with the thread RNG. Never cached.
pub fn junk(spec: Spec<'_>, options: JunkOptions<'_>) -> Result<Value> {
    Generator::new().junk(spec, options)
}

/// Declare memoized accessors; register with [`Declarations::declare`] or
/// [`Scope::install`].
pub fn junklet<I, S>(names: I) -> Junklet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Junklet::new(names)
}
