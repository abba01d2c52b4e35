// cowl-core - Sequence operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: first, rest, cons, count, nth, take, drop,
//! partition, range, and the other lazy pipeline stages.
//!
//! Every lazy operator returns a new `LazySeq` wrapping a fresh production
//! routine that pulls from its upstream source through the iteration
//! normalizer. Nothing is buffered beyond what one in-flight consumer
//! needs, and re-iterating any result restarts the whole pipeline.

use std::rc::Rc;

use cowl_value::{OrdSet, Value, ValueIter};

use crate::iter::{iterable, seq};

// ============================================================================
// Core Sequence Operations
// ============================================================================

/// Wrap a production routine as a lazy sequence value.
pub fn lazy<F>(producer: F) -> Value
where
    F: Fn() -> ValueIter + 'static,
{
    Value::lazy(producer)
}

/// First element of the normalized source, or nil.
pub fn first(coll: &Value) -> Value {
    iterable(coll).next().unwrap_or(Value::Nil)
}

/// Second element, or nil.
pub fn second(coll: &Value) -> Value {
    iterable(coll).nth(1).unwrap_or(Value::Nil)
}

/// First of the first element.
pub fn ffirst(coll: &Value) -> Value {
    first(&first(coll))
}

/// Everything but the first element, lazily.
pub fn rest(coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || Box::new(iterable(&src).skip(1)))
}

/// Lazily prepend `x` to the normalized source.
pub fn cons(x: Value, coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || Box::new(std::iter::once(x.clone()).chain(iterable(&src))))
}

/// Last element, or nil. Drains lazy sources.
pub fn last(coll: &Value) -> Value {
    match coll {
        Value::Vector(items) | Value::List(items) => {
            items.back().cloned().unwrap_or(Value::Nil)
        }
        other => iterable(other).last().unwrap_or(Value::Nil),
    }
}

/// All elements but the last, eagerly; nil when that leaves nothing.
pub fn butlast(coll: &Value) -> Value {
    let mut items: Vec<Value> = iterable(coll).collect();
    items.pop();
    if items.is_empty() {
        Value::Nil
    } else {
        Value::vector(items)
    }
}

/// Element at index `idx`, or the caller-supplied default. Strings index
/// per character; lazy sequences are walked one element at a time.
pub fn nth(coll: &Value, idx: i64, not_found: &Value) -> Value {
    if idx < 0 {
        return not_found.clone();
    }
    match coll {
        Value::Vector(items) | Value::List(items) => items
            .get(idx as usize)
            .cloned()
            .unwrap_or_else(|| not_found.clone()),
        Value::Str(s) => s
            .chars()
            .nth(idx as usize)
            .map(|c| Value::string(c.to_string()))
            .unwrap_or_else(|| not_found.clone()),
        Value::LazySeq(_) => iterable(coll)
            .nth(idx as usize)
            .unwrap_or_else(|| not_found.clone()),
        _ => not_found.clone(),
    }
}

/// Number of elements. Nil and scalar leaves count zero; lazy sequences
/// are drained (never terminates for infinite sources).
pub fn count(coll: &Value) -> usize {
    match coll {
        Value::Nil => 0,
        Value::Vector(items) | Value::List(items) => items.len(),
        Value::Map(map) => map.len(),
        Value::Set(set) => set.len(),
        Value::Record(fields) => fields.len(),
        Value::Str(s) => s.chars().count(),
        other => iterable(other).count(),
    }
}

/// True when the normalized source has no elements.
pub fn is_empty(coll: &Value) -> bool {
    seq(coll).is_none()
}

/// Drain the normalized source into a sequence.
pub fn vec(coll: &Value) -> Value {
    Value::Vector(iterable(coll).collect())
}

/// Eagerly reverse the normalized source into a sequence.
pub fn reverse(coll: &Value) -> Value {
    let mut items: Vec<Value> = iterable(coll).collect();
    items.reverse();
    Value::vector(items)
}

// ============================================================================
// Subsequences
// ============================================================================

/// Lazily take the first `n` elements; `n <= 0` yields nothing.
pub fn take(n: i64, coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        if n <= 0 {
            Box::new(std::iter::empty())
        } else {
            Box::new(iterable(&src).take(n as usize))
        }
    })
}

/// Lazily take elements while the predicate holds.
pub fn take_while<P>(pred: P, coll: &Value) -> Value
where
    P: Fn(&Value) -> bool + 'static,
{
    let pred = Rc::new(pred);
    let src = coll.clone();
    Value::lazy(move || {
        let pred = pred.clone();
        Box::new(iterable(&src).take_while(move |x| pred(x)))
    })
}

/// Lazily take every `n`th element. A non-positive `n` degenerates to
/// repeating the first element forever.
pub fn take_nth(n: i64, coll: &Value) -> Value {
    if n <= 0 {
        return repeat(first(coll));
    }
    let src = coll.clone();
    Value::lazy(move || Box::new(iterable(&src).step_by(n as usize)))
}

/// Lazily skip the first `n` elements; `n <= 0` yields the source
/// unchanged.
pub fn drop(n: i64, coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || Box::new(iterable(&src).skip(n.max(0) as usize)))
}

/// Lazily skip elements while the predicate holds.
pub fn drop_while<P>(pred: P, coll: &Value) -> Value
where
    P: Fn(&Value) -> bool + 'static,
{
    let pred = Rc::new(pred);
    let src = coll.clone();
    Value::lazy(move || {
        let pred = pred.clone();
        Box::new(iterable(&src).skip_while(move |x| pred(x)))
    })
}

/// Lazily drop the last `n` elements, by pacing the source against a
/// second run of itself advanced by `n`.
pub fn drop_last(n: i64, coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        let lead = iterable(&src).skip(n.max(0) as usize);
        Box::new(iterable(&src).zip(lead).map(|(x, _)| x))
    })
}

/// Split into `(take n, drop n)` without realizing either half.
pub fn split_at(n: i64, coll: &Value) -> (Value, Value) {
    (take(n, coll), drop(n, coll))
}

/// Split into `(take_while pred, drop_while pred)`.
pub fn split_with<P>(pred: P, coll: &Value) -> (Value, Value)
where
    P: Fn(&Value) -> bool + 'static,
{
    let pred = Rc::new(pred);
    let p1 = pred.clone();
    let taken = take_while(move |x| p1(x), coll);
    let dropped = drop_while(move |x| pred(x), coll);
    (taken, dropped)
}

// ============================================================================
// Combining and reshaping
// ============================================================================

/// Lazily concatenate the normalized sources in order.
pub fn concat(colls: &[Value]) -> Value {
    let colls = colls.to_vec();
    Value::lazy(move || Box::new(colls.clone().into_iter().flat_map(|c| iterable(&c))))
}

/// Lazily map `f` over the source and concatenate the resulting
/// collections.
pub fn mapcat<F>(f: F, coll: &Value) -> Value
where
    F: Fn(Value) -> Value + 'static,
{
    let f = Rc::new(f);
    let src = coll.clone();
    Value::lazy(move || {
        let f = f.clone();
        Box::new(iterable(&src).flat_map(move |x| iterable(&f(x))))
    })
}

/// Round-robin one element from each source per cycle, stopping as soon as
/// any source is exhausted (a partial final cycle is discarded).
pub fn interleave(colls: &[Value]) -> Value {
    let colls = colls.to_vec();
    Value::lazy(move || {
        let mut iters: Vec<ValueIter> = colls.iter().map(iterable).collect();
        let mut pending: std::vec::IntoIter<Value> = Vec::new().into_iter();
        let mut done = iters.is_empty();
        Box::new(std::iter::from_fn(move || {
            loop {
                if let Some(v) = pending.next() {
                    return Some(v);
                }
                if done {
                    return None;
                }
                let mut cycle = Vec::with_capacity(iters.len());
                for it in iters.iter_mut() {
                    match it.next() {
                        Some(v) => cycle.push(v),
                        None => {
                            done = true;
                            return None;
                        }
                    }
                }
                pending = cycle.into_iter();
            }
        }))
    })
}

/// Lazily insert `sep` between consecutive elements.
pub fn interpose(sep: Value, coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        let sep = sep.clone();
        let mut first = true;
        Box::new(iterable(&src).flat_map(move |x| {
            let expanded = if first {
                first = false;
                vec![x]
            } else {
                vec![sep.clone(), x]
            };
            expanded.into_iter()
        }))
    })
}

/// Lazily yield the first occurrence of each element, tracking seen
/// elements in a set.
pub fn distinct(coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        let mut seen: OrdSet<Value> = OrdSet::new();
        Box::new(iterable(&src).filter(move |x| {
            if seen.contains(x) {
                false
            } else {
                seen.insert(x.clone());
                true
            }
        }))
    })
}

// ============================================================================
// Sequence Generators
// ============================================================================

/// Lazily cycle through the source forever. An empty source terminates
/// immediately instead of spinning.
pub fn cycle(coll: &Value) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        let src = src.clone();
        let mut it = iterable(&src);
        Box::new(std::iter::from_fn(move || match it.next() {
            Some(v) => Some(v),
            None => {
                it = iterable(&src);
                it.next()
            }
        }))
    })
}

/// Infinitely repeat `x`.
pub fn repeat(x: Value) -> Value {
    Value::lazy(move || Box::new(std::iter::repeat(x.clone())))
}

/// Repeat `x` exactly `n` times.
pub fn repeat_n(n: i64, x: Value) -> Value {
    Value::lazy(move || Box::new(std::iter::repeat(x.clone()).take(n.max(0) as usize)))
}

/// Infinitely call `f`, yielding its results in pull order.
pub fn repeatedly<F>(f: F) -> Value
where
    F: Fn() -> Value + 'static,
{
    let f = Rc::new(f);
    Value::lazy(move || {
        let f = f.clone();
        Box::new(std::iter::repeat_with(move || f()))
    })
}

/// Call `f` exactly `n` times, lazily.
pub fn repeatedly_n<F>(n: i64, f: F) -> Value
where
    F: Fn() -> Value + 'static,
{
    let f = Rc::new(f);
    Value::lazy(move || {
        let f = f.clone();
        Box::new(std::iter::repeat_with(move || f()).take(n.max(0) as usize))
    })
}

/// Arithmetic progression from `start`, stepping by `step`, up to an
/// exclusive `end` (`None` for unbounded). A zero step with a bounded end
/// never terminates if fully consumed; that is the caller's lookout.
pub fn range_step(start: i64, end: Option<i64>, step: i64) -> Value {
    Value::lazy(move || {
        let mut i = start;
        Box::new(std::iter::from_fn(move || match end {
            Some(e) if step > 0 && i >= e => None,
            Some(e) if step < 0 && i <= e => None,
            _ => {
                let v = i;
                i += step;
                Some(Value::int(v))
            }
        }))
    })
}

/// `0..end` with step 1.
pub fn range(end: i64) -> Value {
    range_step(0, Some(end), 1)
}

/// Unbounded progression from `start` with step 1.
pub fn range_from(start: i64) -> Value {
    range_step(start, None, 1)
}

// ============================================================================
// Partitioning
// ============================================================================

fn partition_internal(
    n: i64,
    step: i64,
    pad: Option<Vec<Value>>,
    coll: &Value,
    all: bool,
) -> Value {
    let src = coll.clone();
    Value::lazy(move || {
        let mut it = iterable(&src);
        let pad = pad.clone();
        let mut window: Vec<Value> = Vec::new();
        let mut i: i64 = 0;
        let mut done = false;
        Box::new(std::iter::from_fn(move || {
            if done {
                return None;
            }
            for x in it.by_ref() {
                let mut out = None;
                if i < n {
                    window.push(x);
                    if window.len() as i64 == n {
                        out = Some(Value::vector(window.clone()));
                        window = if step < n {
                            window[step.max(0) as usize..].to_vec()
                        } else {
                            Vec::new()
                        };
                    }
                }
                i += 1;
                if i == step {
                    i = 0;
                }
                if out.is_some() {
                    return out;
                }
            }
            done = true;
            if !window.is_empty() {
                if window.len() as i64 == n || all {
                    return Some(Value::vector(std::mem::take(&mut window)));
                }
                if let Some(pad_items) = &pad {
                    let needed = (n as usize).saturating_sub(window.len());
                    window.extend(pad_items.iter().take(needed).cloned());
                    if window.len() as i64 == n {
                        return Some(Value::vector(std::mem::take(&mut window)));
                    }
                }
            }
            None
        }))
    })
}

/// Sliding windows of size `n` advancing by `n`; a short trailing window is
/// dropped.
pub fn partition(n: i64, coll: &Value) -> Value {
    partition_internal(n, n, None, coll, false)
}

/// Sliding windows of size `n` advancing by `step`.
pub fn partition_step(n: i64, step: i64, coll: &Value) -> Value {
    partition_internal(n, step, None, coll, false)
}

/// Sliding windows with a pad source: the trailing window is filled from
/// `pad` (as far as it goes) and kept only if that reaches size `n`.
pub fn partition_pad(n: i64, step: i64, pad: &Value, coll: &Value) -> Value {
    // At most n pad elements can ever be used, so an unbounded pad is fine
    let pad_items: Vec<Value> = iterable(pad).take(n.max(0) as usize).collect();
    partition_internal(n, step, Some(pad_items), coll, false)
}

/// Like `partition`, but the final short window is yielded as-is.
pub fn partition_all(n: i64, coll: &Value) -> Value {
    partition_internal(n, n, None, coll, true)
}

/// Like `partition_step`, but the final short window is yielded as-is.
pub fn partition_all_step(n: i64, step: i64, coll: &Value) -> Value {
    partition_internal(n, step, None, coll, true)
}
