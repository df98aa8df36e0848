//! Behaviour of `junk`: every spec shape, sizing and exclusion.
//!
//! Most checks run many draws; a seeded generator keeps failures replayable.

mod common;

use std::collections::HashSet;

use common::{generator, hex_regex, int, list, string};
use junklet_core::{junk, JunkError, JunkOptions, Spec, Value};
use pretty_assertions::assert_eq;
use rand::Rng;

const TRIALS: usize = 200;

// =============================================================================
// Hex
// =============================================================================

#[test]
fn default_junk_is_32_hex_digits() {
    let re = hex_regex(32);
    for _ in 0..TRIALS {
        let value = junk(Spec::Hex, JunkOptions::new()).unwrap();
        assert!(re.is_match(string(&value)), "{:?}", value);
    }
}

#[test]
fn junk_is_not_cached() {
    let seen: HashSet<String> = (0..1000)
        .map(|_| string(&junk(Spec::Hex, JunkOptions::new()).unwrap()).to_string())
        .collect();
    assert_eq!(seen.len(), 1000);
}

#[test]
fn default_spec_is_hex() {
    let mut gen = generator();
    let value = gen.junk(Spec::default(), JunkOptions::new()).unwrap();
    assert!(hex_regex(32).is_match(string(&value)), "seed {}", gen.seed());
}

#[test]
fn hex_size_sets_length() {
    let mut gen = generator();
    let value = gen.junk(Spec::Hex, JunkOptions::new().size(3)).unwrap();
    assert!(hex_regex(3).is_match(string(&value)), "seed {}", gen.seed());
}

#[test]
fn integer_spec_sizes_the_string() {
    let mut gen = generator();
    let little = gen.junk(Spec::Length(5), JunkOptions::new()).unwrap();
    let big = gen.junk(Spec::Length(100), JunkOptions::new()).unwrap();

    assert!(hex_regex(5).is_match(string(&little)), "seed {}", gen.seed());
    assert!(hex_regex(100).is_match(string(&big)), "seed {}", gen.seed());
}

#[test]
fn classified_integer_spec_sizes_the_string() {
    let spec = Spec::try_from(Value::Int(5)).unwrap();
    let value = junk(spec, JunkOptions::new()).unwrap();
    assert!(hex_regex(5).is_match(string(&value)));
}

#[test]
fn length_with_size_repeats() {
    let mut gen = generator();
    let values = list(gen.junk(Spec::Length(4), JunkOptions::new().size(3)).unwrap());
    assert_eq!(values.len(), 3);
    for value in &values {
        assert!(hex_regex(4).is_match(string(value)), "seed {}", gen.seed());
    }
}

#[test]
fn hex_excludes_values() {
    let mut gen = generator();
    let not_f: Vec<String> = "0123456789abcde".chars().map(String::from).collect();
    for _ in 0..TRIALS {
        let value = gen
            .junk(Spec::Hex, JunkOptions::new().size(1).exclude_any(not_f.clone()))
            .unwrap();
        assert_eq!(value, Value::from("f"), "seed {}", gen.seed());
    }
}

#[test]
fn length_excludes_values() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen
            .junk(Spec::Length(1), JunkOptions::new().exclude_if(|v| string(v) != "a"))
            .unwrap();
        assert_eq!(value, Value::from("a"), "seed {}", gen.seed());
    }
}

#[test]
fn length_with_size_filters_each_element() {
    let mut gen = generator();
    let values = list(
        gen.junk(
            Spec::Length(1),
            JunkOptions::new().size(5).exclude_if(|v| string(v) != "0"),
        )
        .unwrap(),
    );
    assert_eq!(values, vec![Value::from("0"); 5], "seed {}", gen.seed());
}

// =============================================================================
// Sequences and enumerables
// =============================================================================

fn abc() -> Vec<Value> {
    vec![Value::sym("a"), Value::sym("b"), Value::sym("c")]
}

#[test]
fn sequence_samples_an_element() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen.junk(Spec::sequence(abc()), JunkOptions::new()).unwrap();
        assert!(abc().contains(&value), "seed {}: {:?}", gen.seed(), value);
    }
}

#[test]
fn sequence_excludes_values() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen
            .junk(
                Spec::sequence(abc()),
                JunkOptions::new().exclude(vec![Value::sym("a"), Value::sym("b")]),
            )
            .unwrap();
        assert_eq!(value, Value::sym("c"), "seed {}", gen.seed());
    }
}

#[test]
fn sequence_with_size_repeats() {
    let mut gen = generator();
    let values = list(gen.junk(Spec::sequence([0, 1, 2]), JunkOptions::new().size(3)).unwrap());
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| (0..=2).contains(&int(v))), "seed {}", gen.seed());
}

#[test]
fn empty_sequence_fails() {
    let err = junk(Spec::sequence(Vec::<Value>::new()), JunkOptions::new()).unwrap_err();
    assert_eq!(err, JunkError::EmptyCollection("sequence"));
}

#[test]
fn range_samples_an_element() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen.junk(Spec::range(0..=2), JunkOptions::new()).unwrap();
        assert!((0..=2).contains(&int(&value)), "seed {}", gen.seed());
    }
}

#[test]
fn range_with_size_repeats() {
    let mut gen = generator();
    let values = list(gen.junk(Spec::range(0..=2), JunkOptions::new().size(3)).unwrap());
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| (0..=2).contains(&int(v))), "seed {}", gen.seed());
}

#[test]
fn lazy_iterator_is_materialized() {
    let mut gen = generator();
    let evens = (0..10).filter(|i| i % 2 == 0);
    let value = gen.junk(Spec::range(evens), JunkOptions::new()).unwrap();
    assert_eq!(int(&value) % 2, 0, "seed {}", gen.seed());
}

#[test]
fn range_excludes_values() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen.junk(Spec::range(0..3), JunkOptions::new().exclude(2)).unwrap();
        assert!((0..2).contains(&int(&value)), "seed {}", gen.seed());
    }
}

#[test]
fn range_with_size_filters_each_element() {
    let mut gen = generator();
    let values = list(
        gen.junk(Spec::range(0..3), JunkOptions::new().size(4).exclude(2))
            .unwrap(),
    );
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|v| (0..2).contains(&int(v))), "seed {}", gen.seed());
}

#[test]
fn empty_range_fails() {
    let err = junk(Spec::range(0..0), JunkOptions::new()).unwrap_err();
    assert_eq!(err, JunkError::EmptyCollection("enumerable"));
}

// =============================================================================
// Thunks
// =============================================================================

#[test]
fn thunk_is_called() {
    let value = junk(
        Spec::thunk(|| rand::thread_rng().gen_range(0..3)),
        JunkOptions::new(),
    )
    .unwrap();
    assert!((0..3).contains(&int(&value)));
}

#[test]
fn thunk_with_size_is_called_size_times() {
    let mut calls = 0;
    let values = list(
        junk(
            Spec::thunk(|| {
                calls += 1;
                rand::thread_rng().gen_range(0..3)
            }),
            JunkOptions::new().size(3),
        )
        .unwrap(),
    );
    assert_eq!(values.len(), 3);
    assert_eq!(calls, 3);
    assert!(values.iter().all(|v| (0..3).contains(&int(v))));
}

#[test]
fn thunk_results_are_filtered_individually() {
    let mut gen = generator();
    let mut next = 0;
    let values = list(
        gen.junk(
            Spec::thunk(|| {
                next += 1;
                next % 3
            }),
            JunkOptions::new().size(4).exclude(0),
        )
        .unwrap(),
    );
    assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(1), Value::Int(2)]);
}

// =============================================================================
// Int
// =============================================================================

#[test]
fn int_is_non_negative_by_default() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen.junk(Spec::Int, JunkOptions::new()).unwrap();
        assert!(int(&value) >= 0, "seed {}", gen.seed());
    }
}

#[test]
fn int_respects_min_and_max() {
    let mut gen = generator();
    let coins: HashSet<i64> = (0..TRIALS)
        .map(|_| int(&gen.junk(Spec::Int, JunkOptions::new().min(0).max(1)).unwrap()))
        .collect();
    assert_eq!(coins, HashSet::from([0, 1]), "seed {}", gen.seed());
}

#[test]
fn int_size_limits_digits() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let digit = int(&gen.junk(Spec::Int, JunkOptions::new().size(1)).unwrap());
        assert!((0..10).contains(&digit), "seed {}", gen.seed());

        let three = int(&gen.junk(Spec::Int, JunkOptions::new().size(3)).unwrap());
        assert!((100..1000).contains(&three), "seed {}", gen.seed());
    }
}

#[test]
fn int_exclude_predicate() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen
            .junk(
                Spec::Int,
                JunkOptions::new()
                    .min(0)
                    .max(10)
                    .exclude_if(|v| v.as_int().map_or(false, |i| i % 2 == 1)),
            )
            .unwrap();
        assert_eq!(int(&value) % 2, 0, "seed {}", gen.seed());
    }
}

#[test]
fn int_exclude_value_forces_the_other() {
    let mut gen = generator();
    let heads = 0;
    let tails = 1;
    for _ in 0..TRIALS {
        let coin_heads = gen.junk(Spec::Int, JunkOptions::new().max(1).exclude(tails)).unwrap();
        let coin_tails = gen.junk(Spec::Int, JunkOptions::new().max(1).exclude(heads)).unwrap();
        assert_eq!(int(&coin_heads), heads, "seed {}", gen.seed());
        assert_eq!(int(&coin_tails), tails, "seed {}", gen.seed());
    }
}

#[test]
fn int_min_above_max_fails() {
    let err = junk(Spec::Int, JunkOptions::new().min(5).max(1)).unwrap_err();
    assert_eq!(err, JunkError::InvalidBounds { minimum: 5, maximum: 1 });
}

#[test]
fn int_zero_digits_fails() {
    let err = junk(Spec::Int, JunkOptions::new().size(0)).unwrap_err();
    assert_eq!(err, JunkError::InvalidDigits(0));
}

#[test]
fn int_from_tag() {
    let spec = Spec::try_from(Value::sym("int")).unwrap();
    let value = junk(spec, JunkOptions::new().min(3).max(3)).unwrap();
    assert_eq!(value, Value::Int(3));
}

// =============================================================================
// Bool
// =============================================================================

#[test]
fn bool_is_true_or_false() {
    let mut gen = generator();
    let seen: HashSet<bool> = (0..TRIALS)
        .map(|_| gen.junk(Spec::Bool, JunkOptions::new()).unwrap().as_bool().unwrap())
        .collect();
    assert_eq!(seen, HashSet::from([true, false]), "seed {}", gen.seed());
}

#[test]
fn bool_exclude_true_is_false() {
    let mut gen = generator();
    for _ in 0..TRIALS {
        let value = gen.junk(Spec::Bool, JunkOptions::new().exclude(true)).unwrap();
        assert_eq!(value, Value::Bool(false), "seed {}", gen.seed());
    }
}

#[test]
fn bool_with_size_repeats() {
    let values = list(junk(Spec::Bool, JunkOptions::new().size(5)).unwrap());
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|v| v.as_bool().is_some()));
}

// =============================================================================
// Exclusion budget and classification errors
// =============================================================================

#[test]
fn excluding_everything_is_unsatisfiable() {
    let err = junk(
        Spec::Int,
        JunkOptions::new().min(0).max(1).exclude_any([0, 1]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        JunkError::ExclusionUnsatisfiable {
            spec: "int",
            attempts: junklet_core::options::DEFAULT_MAX_ATTEMPTS,
        }
    );
}

#[test]
fn attempt_budget_is_configurable() {
    let err = junk(
        Spec::Bool,
        JunkOptions::new().exclude_if(|_| true).max_attempts(3),
    )
    .unwrap_err();
    assert_eq!(err, JunkError::ExclusionUnsatisfiable { spec: "bool", attempts: 3 });
}

#[test]
fn zero_attempt_budget_still_draws_once() {
    let value = junk(
        Spec::Bool,
        JunkOptions::new().exclude(Value::Nil).max_attempts(0),
    )
    .unwrap();
    assert!(value.as_bool().is_some());

    let err = junk(
        Spec::Bool,
        JunkOptions::new().exclude_if(|_| true).max_attempts(0),
    )
    .unwrap_err();
    assert_eq!(err, JunkError::ExclusionUnsatisfiable { spec: "bool", attempts: 1 });
}

#[test]
fn exclusion_predicate_borrows_locals() {
    let mut gen = generator();
    let taken: HashSet<Value> = (0..9).map(Value::Int).collect();
    for _ in 0..TRIALS {
        let value = gen
            .junk(
                Spec::Int,
                JunkOptions::new().max(9).exclude_if(|v| taken.contains(v)),
            )
            .unwrap();
        assert_eq!(int(&value), 9, "seed {}", gen.seed());
    }
}

#[test]
fn unsatisfiable_element_fails_whole_list() {
    let err = junk(
        Spec::sequence([1]),
        JunkOptions::new().size(3).exclude(1).max_attempts(10),
    )
    .unwrap_err();
    assert_eq!(err, JunkError::ExclusionUnsatisfiable { spec: "sequence", attempts: 10 });
}

#[test]
fn unsupported_specs_are_rejected() {
    for value in [Value::Str("hex".into()), Value::Bool(false), Value::sym("float")] {
        assert!(matches!(
            Spec::try_from(value),
            Err(JunkError::UnsupportedSpecKind(_))
        ));
    }
}

#[test]
fn junk_at_definition_time() {
    // Values may be generated outside any test body and captured later.
    let metaname = junk(Spec::Hex, JunkOptions::new()).unwrap();
    let captured = move || metaname.clone();
    assert!(hex_regex(32).is_match(string(&captured())));
}
