// cowl-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for cowl integration tests.
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

pub use cowl_core::Value;
use cowl_core::iterable;

/// Build a sequence of integers.
pub fn int_vec(ns: &[i64]) -> Value {
    Value::vector(ns.iter().copied().map(Value::int).collect())
}

/// Build an ordered list of integers.
pub fn int_list(ns: &[i64]) -> Value {
    Value::list(ns.iter().copied().map(Value::int).collect())
}

/// Build a set of integers.
pub fn int_set(ns: &[i64]) -> Value {
    Value::set(ns.iter().copied().map(Value::int).collect())
}

/// Build a mapping of integer keys to integer values.
pub fn int_map(pairs: &[(i64, i64)]) -> Value {
    Value::map(
        pairs
            .iter()
            .map(|(k, v)| (Value::int(*k), Value::int(*v)))
            .collect(),
    )
}

/// Drain any value through the iteration normalizer.
pub fn drain(coll: &Value) -> Vec<Value> {
    iterable(coll).collect()
}

/// Drain a collection of integers into a plain vec, panicking on anything
/// that is not an integer.
pub fn ints(coll: &Value) -> Vec<i64> {
    iterable(coll)
        .map(|v| match v {
            Value::Int(n) => n,
            other => panic!("expected int, got {}", other),
        })
        .collect()
}

/// Drain a sequence-of-sequences into nested integer vecs.
pub fn int_windows(coll: &Value) -> Vec<Vec<i64>> {
    iterable(coll).map(|w| ints(&w)).collect()
}
