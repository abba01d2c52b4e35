// cowl-core - Higher-order operations and the reduction engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order operations: map, filter, remove, keep, the reduction engine
//! with its early-termination protocol, and collection predicates.

use std::rc::Rc;

use cowl_value::{Value, ValueIter};

use crate::error::Result;
use crate::iter::iterable;

// ============================================================================
// Lazy element-wise transforms
// ============================================================================

/// Lazily apply `f` to each element of the normalized source.
pub fn map<F>(f: F, coll: &Value) -> Value
where
    F: Fn(Value) -> Value + 'static,
{
    let f = Rc::new(f);
    let src = coll.clone();
    Value::lazy(move || {
        let f = f.clone();
        Box::new(iterable(&src).map(move |x| f(x)))
    })
}

/// Lazily apply `f` across several sources in lockstep, stopping at the
/// shortest.
pub fn map_many<F>(f: F, colls: &[Value]) -> Value
where
    F: Fn(&[Value]) -> Value + 'static,
{
    let f = Rc::new(f);
    let colls = colls.to_vec();
    Value::lazy(move || {
        let f = f.clone();
        let mut iters: Vec<ValueIter> = colls.iter().map(iterable).collect();
        Box::new(std::iter::from_fn(move || {
            let mut args = Vec::with_capacity(iters.len());
            for it in iters.iter_mut() {
                match it.next() {
                    Some(v) => args.push(v),
                    None => return None,
                }
            }
            Some(f(&args))
        }))
    })
}

/// Lazily keep elements satisfying the predicate.
pub fn filter<P>(pred: P, coll: &Value) -> Value
where
    P: Fn(&Value) -> bool + 'static,
{
    let pred = Rc::new(pred);
    let src = coll.clone();
    Value::lazy(move || {
        let pred = pred.clone();
        Box::new(iterable(&src).filter(move |x| pred(x)))
    })
}

/// Lazily drop elements satisfying the predicate.
pub fn remove<P>(pred: P, coll: &Value) -> Value
where
    P: Fn(&Value) -> bool + 'static,
{
    filter(move |x| !pred(x), coll)
}

/// Lazily yield the truthy results of `f` (not the elements themselves).
pub fn keep<F>(f: F, coll: &Value) -> Value
where
    F: Fn(&Value) -> Value + 'static,
{
    let f = Rc::new(f);
    let src = coll.clone();
    Value::lazy(move || {
        let f = f.clone();
        Box::new(iterable(&src).filter_map(move |x| {
            let res = f(&x);
            if res.is_truthy() { Some(res) } else { None }
        }))
    })
}

// ============================================================================
// Reduction Engine
// ============================================================================

/// Wrap a value in the early-termination sentinel.
pub fn reduced(x: Value) -> Value {
    Value::reduced(x)
}

/// True if `x` is the early-termination sentinel.
pub fn is_reduced(x: &Value) -> bool {
    matches!(x, Value::Reduced(_))
}

/// Unwrap one sentinel layer, or return `x` unchanged.
pub fn unreduced(x: Value) -> Value {
    match x {
        Value::Reduced(v) => *v,
        v => v,
    }
}

/// Wrap `x` in the sentinel unless it already is one.
pub fn ensure_reduced(x: Value) -> Value {
    if is_reduced(&x) { x } else { Value::reduced(x) }
}

fn fold<F>(mut f: F, acc: Value, iter: ValueIter) -> Result<Value>
where
    F: FnMut(Value, Value) -> Result<Value>,
{
    // A pre-reduced accumulator terminates before anything is pulled
    let mut acc = match acc {
        Value::Reduced(v) => return Ok(*v),
        v => v,
    };
    for x in iter {
        acc = f(acc, x)?;
        if let Value::Reduced(v) = acc {
            return Ok(*v);
        }
    }
    Ok(acc)
}

/// Fold the source left to right, seeding the accumulator with the first
/// element. An empty source yields nil. `f` returning a `Reduced` value
/// stops the fold immediately; no further elements are pulled.
pub fn reduce<F>(f: F, coll: &Value) -> Result<Value>
where
    F: FnMut(Value, Value) -> Result<Value>,
{
    let mut iter = iterable(coll);
    match iter.next() {
        None => Ok(Value::Nil),
        Some(seed) => fold(f, seed, iter),
    }
}

/// Fold the source left to right from an explicit seed. A seed that is
/// already `Reduced` returns immediately without touching the source, so
/// an infinite source is safe.
pub fn reduce_with<F>(f: F, init: Value, coll: &Value) -> Result<Value>
where
    F: FnMut(Value, Value) -> Result<Value>,
{
    if let Value::Reduced(v) = init {
        return Ok(*v);
    }
    fold(f, init, iterable(coll))
}

// ============================================================================
// Predicates over Collections
// ============================================================================

/// True if the predicate holds for every element.
pub fn every<P>(pred: P, coll: &Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    iterable(coll).all(|x| pred(&x))
}

/// True if the predicate fails for at least one element.
pub fn not_every<P>(pred: P, coll: &Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    !every(pred, coll)
}

/// First truthy result of `f` over the source, or nil.
pub fn some<F>(f: F, coll: &Value) -> Value
where
    F: Fn(&Value) -> Value,
{
    for x in iterable(coll) {
        let res = f(&x);
        if res.is_truthy() {
            return res;
        }
    }
    Value::Nil
}

/// True if the predicate fails for every element.
pub fn not_any<P>(pred: P, coll: &Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    !iterable(coll).any(|x| pred(&x))
}
