// cowl-core - Property-based tests for collection operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for collection and sequence invariants:
//!
//! - assoc/get round-trips and non-mutation
//! - conj/count and set membership
//! - distinct never yields duplicates and preserves first-occurrence order
//! - take/drop and partition_all recompose to the source
//! - frequencies counts sum to the element count

mod common;

use common::*;
use cowl_core::{
    assoc, concat, conj, count, distinct, drop, frequencies, get, get_or, iterable, partition_all,
    reduce_with, take, vec as to_vec,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Small integers for collection elements
fn arb_small_int() -> impl Strategy<Value = i64> {
    -100i64..100i64
}

/// Small integer vectors
fn arb_ints(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(arb_small_int(), 0..=max_len)
}

/// Small key/value pair lists with possibly colliding keys
fn arb_pairs(max_len: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..10, arb_small_int()), 0..=max_len)
}

// =============================================================================
// assoc/get round-trips
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// get(assoc(m, k, v), k) == v
    #[test]
    fn assoc_get_roundtrip(pairs in arb_pairs(8), k in 0i64..10, v in arb_small_int()) {
        let m = int_map(&pairs);
        let out = assoc(&m, &[Value::int(k), Value::int(v)]).unwrap();
        prop_assert_eq!(get(&out, &Value::int(k)), Value::int(v));
    }

    /// assoc never mutates its input
    #[test]
    fn assoc_preserves_original(pairs in arb_pairs(8), k in 0i64..10, v in arb_small_int()) {
        let m = int_map(&pairs);
        let before = m.clone();
        let _ = assoc(&m, &[Value::int(k), Value::int(v)]).unwrap();
        prop_assert_eq!(m, before);
    }

    /// get_or falls back exactly when the key is absent
    #[test]
    fn get_or_default_iff_absent(pairs in arb_pairs(8), k in 0i64..20) {
        let m = int_map(&pairs);
        let sentinel = Value::string("missing");
        let out = get_or(&m, &Value::int(k), &sentinel);
        let expected_absent = !pairs.iter().any(|(pk, _)| *pk == k);
        prop_assert_eq!(out == sentinel, expected_absent);
    }

    /// conj on a set: membership for every added item, count bounded
    #[test]
    fn conj_set_membership(base in arb_ints(8), added in arb_ints(4)) {
        let s = int_set(&base);
        let items: Vec<Value> = added.iter().copied().map(Value::int).collect();
        let out = conj(&s, &items).unwrap();
        for x in &added {
            prop_assert!(get(&out, &Value::int(*x)) == Value::int(*x));
        }
        prop_assert!(count(&out) <= base.len() + added.len());
        // Original set unchanged
        prop_assert_eq!(count(&s), count(&int_set(&base)));
    }
}

// =============================================================================
// Sequence invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// distinct yields no duplicates and is order-preserving
    #[test]
    fn distinct_dedups_in_order(xs in arb_ints(16)) {
        let out = ints(&distinct(&int_vec(&xs)));
        let mut expected = Vec::new();
        for x in &xs {
            if !expected.contains(x) {
                expected.push(*x);
            }
        }
        prop_assert_eq!(out, expected);
    }

    /// take(n) followed by drop(n) recomposes the source
    #[test]
    fn take_drop_recompose(xs in arb_ints(16), n in 0i64..20) {
        let v = int_vec(&xs);
        let recomposed = concat(&[take(n, &v), drop(n, &v)]);
        prop_assert_eq!(ints(&recomposed), xs);
    }

    /// concatenating partition_all windows recomposes the source
    #[test]
    fn partition_all_recomposes(xs in arb_ints(16), n in 1i64..6) {
        let v = int_vec(&xs);
        let windows: Vec<Value> = iterable(&partition_all(n, &v)).collect();
        let recomposed = concat(&windows);
        prop_assert_eq!(ints(&recomposed), xs);
        // Every window but the last has exactly n elements
        for w in windows.iter().rev().skip(1) {
            prop_assert_eq!(count(w) as i64, n);
        }
    }

    /// frequencies counts sum to the source length
    #[test]
    fn frequencies_total(xs in arb_ints(16)) {
        let freqs = frequencies(&int_vec(&xs));
        let total = reduce_with(
            |acc, entry| {
                match (acc, cowl_core::second(&entry)) {
                    (Value::Int(a), Value::Int(b)) => Ok(Value::int(a + b)),
                    (acc, _) => Ok(acc),
                }
            },
            Value::int(0),
            &freqs,
        ).unwrap();
        prop_assert_eq!(total, Value::int(xs.len() as i64));
    }

    /// draining a lazy pipeline twice gives identical results
    #[test]
    fn lazy_results_are_stable(xs in arb_ints(12), n in 0i64..6) {
        let s = take(n, &distinct(&int_vec(&xs)));
        prop_assert_eq!(to_vec(&s), to_vec(&s));
    }
}
