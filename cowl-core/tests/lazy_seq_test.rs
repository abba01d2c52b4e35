// cowl-core - Lazy sequence integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for lazy sequence restartability, pull-driven
//! evaluation order, and pipeline composition.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::*;
use cowl_core::{
    cons, filter, first, iterable, lazy, map, range, range_from, rest, seq, take, vec,
};

fn is_even(v: &Value) -> bool {
    matches!(v, Value::Int(n) if n % 2 == 0)
}

fn double(v: Value) -> Value {
    match v {
        Value::Int(n) => Value::int(n * 2),
        other => other,
    }
}

// =============================================================================
// Restartability
// =============================================================================

#[test]
fn test_lazy_seq_is_restartable() {
    let s = map(double, &int_vec(&[1, 2, 3]));
    assert_eq!(ints(&s), vec![2, 4, 6]);
    // A second full iteration of the same object reproduces the sequence
    assert_eq!(ints(&s), vec![2, 4, 6]);
}

#[test]
fn test_pipeline_is_restartable_end_to_end() {
    let s = take(3, &filter(is_even, &map(double, &range_from(1))));
    assert_eq!(ints(&s), vec![2, 4, 6]);
    assert_eq!(ints(&s), vec![2, 4, 6]);
}

#[test]
fn test_producer_reruns_on_each_iteration() {
    let runs = Rc::new(Cell::new(0));
    let runs2 = runs.clone();
    let s = lazy(move || {
        runs2.set(runs2.get() + 1);
        Box::new((0..2).map(Value::int))
    });
    assert_eq!(ints(&s), vec![0, 1]);
    assert_eq!(ints(&s), vec![0, 1]);
    assert_eq!(runs.get(), 2);
}

#[test]
fn test_independent_iterations_do_not_interfere() {
    let s = map(double, &range(5));
    let mut a = iterable(&s);
    let mut b = iterable(&s);
    assert_eq!(a.next(), Some(Value::int(0)));
    assert_eq!(a.next(), Some(Value::int(2)));
    // The second cursor still starts from the beginning
    assert_eq!(b.next(), Some(Value::int(0)));
    assert_eq!(a.next(), Some(Value::int(4)));
    assert_eq!(b.next(), Some(Value::int(2)));
}

// =============================================================================
// Pull-driven evaluation
// =============================================================================

#[test]
fn test_elements_are_produced_only_when_pulled() {
    let produced = Rc::new(Cell::new(0));
    let p = produced.clone();
    let counted = map(
        move |x| {
            p.set(p.get() + 1);
            x
        },
        &range_from(0),
    );
    // Building the pipeline runs nothing
    assert_eq!(produced.get(), 0);
    let out = vec(&take(3, &counted));
    assert_eq!(ints(&out), vec![0, 1, 2]);
    // Only the pulled elements were produced
    assert_eq!(produced.get(), 3);
}

#[test]
fn test_side_effects_happen_in_pull_order() {
    let log = Rc::new(std::cell::RefCell::new(Vec::new()));
    let l = log.clone();
    let tagged = map(
        move |x| {
            if let Value::Int(n) = &x {
                l.borrow_mut().push(*n);
            }
            x
        },
        &int_vec(&[1, 2, 3]),
    );
    let mut it = iterable(&tagged);
    it.next();
    assert_eq!(*log.borrow(), vec![1]);
    it.next();
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn test_seq_probes_a_single_element() {
    let produced = Rc::new(Cell::new(0));
    let p = produced.clone();
    let counted = map(
        move |x| {
            p.set(p.get() + 1);
            x
        },
        &range_from(0),
    );
    assert!(seq(&counted).is_some());
    assert_eq!(produced.get(), 1);
}

#[test]
fn test_abandoning_iteration_is_cancellation() {
    let produced = Rc::new(Cell::new(0));
    let p = produced.clone();
    let counted = map(
        move |x| {
            p.set(p.get() + 1);
            x
        },
        &range_from(0),
    );
    {
        let mut it = iterable(&counted);
        it.next();
        it.next();
        // Consumer simply stops pulling; no cancel signal exists
    }
    assert_eq!(produced.get(), 2);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_cons_and_rest_over_lazy() {
    let s = range(3);
    let c = cons(Value::int(-1), &s);
    assert_eq!(ints(&c), vec![-1, 0, 1, 2]);
    assert_eq!(ints(&rest(&c)), vec![0, 1, 2]);
    assert_eq!(first(&rest(&s)), Value::int(1));
}

#[test]
fn test_empty_lazy_seq() {
    let e = Value::empty_lazy();
    assert!(seq(&e).is_none());
    assert_eq!(first(&e), Value::Nil);
    assert_eq!(vec(&e), Value::empty_vector());
}

#[test]
fn test_lazy_over_time_varying_source() {
    // A producer over external state sees fresh state on each restart
    let source = Rc::new(Cell::new(10));
    let src = source.clone();
    let s = lazy(move || {
        let base = src.get();
        Box::new((base..base + 2).map(Value::int))
    });
    assert_eq!(ints(&s), vec![10, 11]);
    source.set(20);
    assert_eq!(ints(&s), vec![20, 21]);
}
