//! Test infrastructure for junklet
//!
//! Seeded generators (replay with `JUNKLET_SEED`) and shape assertions.

#![allow(dead_code)]

use regex::Regex;
use junklet_core::{Generator, SeededSource, Value};

/// Seeded generator from `JUNKLET_SEED` or a random seed.
///
/// Include `gen.seed()` in assertion messages so failures can be replayed.
pub fn generator() -> Generator<SeededSource> {
    Generator::from_env_or_random()
}

/// Regex for exactly `len` lowercase hex digits.
pub fn hex_regex(len: usize) -> Regex {
    Regex::new(&format!("^[0-9a-f]{{{}}}$", len)).expect("valid regex")
}

/// Regex for an accessor value: escaped prefix, then 32 hex digits.
pub fn accessor_regex(prefix: &str) -> Regex {
    Regex::new(&format!("^{}[0-9a-f]{{32}}$", regex::escape(prefix))).expect("valid regex")
}

/// Unwrap a string value.
pub fn string(value: &Value) -> &str {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected string junk, got {:?}", value))
}

/// Unwrap an integer value.
pub fn int(value: &Value) -> i64 {
    value
        .as_int()
        .unwrap_or_else(|| panic!("expected int junk, got {:?}", value))
}

/// Unwrap a list value.
pub fn list(value: Value) -> Vec<Value> {
    match value {
        Value::List(items) => items,
        other => panic!("expected list junk, got {:?}", other),
    }
}
