//! Error types for junk generation and fixture accessors.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JunkError>;

/// Everything that can go wrong while generating junk.
///
/// Errors are never retried internally except for exclusion rejections,
/// which are bounded and surface as [`JunkError::ExclusionUnsatisfiable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JunkError {
    #[error("unsupported spec kind: {0}")]
    UnsupportedSpecKind(String),

    #[error("invalid int bounds: minimum {minimum} exceeds maximum {maximum}")]
    InvalidBounds { minimum: i64, maximum: i64 },

    #[error("invalid int digit count {0}: expected 1..=19")]
    InvalidDigits(usize),

    #[error("exclusion unsatisfiable: every {spec} candidate rejected after {attempts} attempts")]
    ExclusionUnsatisfiable { spec: &'static str, attempts: usize },

    #[error("cannot sample from an empty {0}")]
    EmptyCollection(&'static str),

    #[error("invalid junklet name `{0}`: must be an identifier")]
    InvalidName(String),

    #[error("no junklet named `{0}` in this scope")]
    UnknownJunklet(String),
}
