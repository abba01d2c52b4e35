// cowl-core - Eager sequence operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Eager sequence operations: sort, sort-by, map-indexed, mapv, filterv,
//! replace, group-by, frequencies.

use cowl_value::{OrdMap, Value};

use crate::collections::lookup;
use crate::iter::iterable;

/// Sort the normalized source by the natural value ordering.
pub fn sort(coll: &Value) -> Value {
    let mut items: Vec<Value> = iterable(coll).collect();
    items.sort();
    Value::vector(items)
}

/// Sort the normalized source by a key function.
pub fn sort_by<F>(keyfn: F, coll: &Value) -> Value
where
    F: Fn(&Value) -> Value,
{
    let mut keyed: Vec<(Value, Value)> = iterable(coll)
        .map(|item| (keyfn(&item), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Value::vector(keyed.into_iter().map(|(_, v)| v).collect())
}

/// Eagerly apply `f` to each element with its index.
pub fn map_indexed<F>(f: F, coll: &Value) -> Value
where
    F: Fn(i64, Value) -> Value,
{
    Value::vector(
        iterable(coll)
            .enumerate()
            .map(|(i, x)| f(i as i64, x))
            .collect(),
    )
}

/// Eager `map` into a sequence.
pub fn mapv<F>(f: F, coll: &Value) -> Value
where
    F: Fn(Value) -> Value,
{
    Value::vector(iterable(coll).map(f).collect())
}

/// Eager `filter` into a sequence.
pub fn filterv<P>(pred: P, coll: &Value) -> Value
where
    P: Fn(&Value) -> bool,
{
    Value::vector(iterable(coll).filter(|x| pred(x)).collect())
}

/// Replace elements found as keys in `smap` with their mapped values,
/// leaving everything else untouched.
pub fn replace(smap: &Value, coll: &Value) -> Value {
    let smap = smap.clone();
    Value::vector(
        iterable(coll)
            .map(|x| lookup(&smap, &x).unwrap_or(x))
            .collect(),
    )
}

/// Accumulate elements into a mapping keyed by `f(x)`, each bucket a
/// sequence of the elements that mapped there, in encounter order.
pub fn group_by<F>(f: F, coll: &Value) -> Value
where
    F: Fn(&Value) -> Value,
{
    let mut groups: OrdMap<Value, Value> = OrdMap::new();
    for item in iterable(coll) {
        let key = f(&item);
        // Fill absent buckets with a fresh empty sequence before appending
        let bucket = groups
            .get(&key)
            .cloned()
            .unwrap_or_else(Value::empty_vector);
        let new_bucket = match bucket {
            Value::Vector(mut items) => {
                items.push_back(item);
                Value::Vector(items)
            }
            _ => Value::vector(vec![item]),
        };
        groups.insert(key, new_bucket);
    }
    Value::Map(groups)
}

/// Count occurrences of each distinct element into a mapping.
pub fn frequencies(coll: &Value) -> Value {
    let mut counts: OrdMap<Value, Value> = OrdMap::new();
    for item in iterable(coll) {
        let count = match counts.get(&item) {
            Some(Value::Int(n)) => *n,
            _ => 0,
        };
        counts.insert(item, Value::int(count + 1));
    }
    Value::Map(counts)
}
