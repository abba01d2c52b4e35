// cowl-core - Collection utility operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Collection utilities: empty, select-keys, merge, into, update, and the
//! nested path operations get-in, assoc-in, update-in.

use cowl_value::{Kind, Value};

use crate::collections::{assoc, assoc_mut, conj, conj_mut, get, lookup};
use crate::error::{Error, Result};
use crate::iter::iterable;

// ============================================================================
// Empty-Value Factory
// ============================================================================

/// Return a freshly constructed, empty instance of the given kind.
pub fn empty_of(kind: Kind) -> Value {
    match kind {
        Kind::Mapping => Value::empty_map(),
        Kind::Sequence => Value::empty_vector(),
        Kind::Set => Value::empty_set(),
        Kind::OrderedList => Value::empty_list(),
        Kind::Record => Value::empty_record(),
        Kind::LazySeq => Value::empty_lazy(),
    }
}

/// Return an empty collection of the same kind as `coll`.
/// Nil passes through; a kindless value is an illegal-kind error.
pub fn empty(coll: &Value) -> Result<Value> {
    match coll {
        Value::Nil => Ok(Value::Nil),
        Value::Str(_) => Ok(Value::string("")),
        other => match other.kind() {
            Some(kind) => Ok(empty_of(kind)),
            None => Err(Error::type_error_in(
                "empty",
                "collection",
                other.type_name(),
            )),
        },
    }
}

// ============================================================================
// select-keys / merge / into
// ============================================================================

/// Return a collection of the same kind as `coll` containing only the named
/// keys. Missing keys are skipped; a stored nil is kept.
pub fn select_keys(coll: &Value, keys: &[Value]) -> Result<Value> {
    if coll.is_nil() {
        return Ok(Value::Nil);
    }
    let mut result = empty(coll)?;
    for key in keys {
        if let Some(v) = lookup(coll, key) {
            assoc_mut(&mut result, &[key.clone(), v])?;
        }
    }
    Ok(result)
}

/// Merge collections left to right: later entries win. A nil (or absent)
/// first argument coerces to an empty record; the first collection is
/// rebuilt through `into` so the result never shares structure with it.
pub fn merge(colls: &[Value]) -> Result<Value> {
    let Some((first, rest)) = colls.split_first() else {
        return Ok(Value::empty_record());
    };

    let mut acc = if first.is_nil() {
        Value::empty_record()
    } else {
        into(&empty(first)?, first)?
    };
    for coll in rest {
        conj_mut(&mut acc, std::slice::from_ref(coll))?;
    }
    Ok(acc)
}

/// Drain the normalized `source` into `target` via `conj`. A nil target
/// becomes a fresh sequence.
pub fn into(target: &Value, source: &Value) -> Result<Value> {
    let items: Vec<Value> = iterable(source).collect();
    conj(target, &items)
}

// ============================================================================
// update / update_mut
// ============================================================================

/// Copying update: `assoc` of `f` applied to the current value at `key`
/// (nil when absent).
pub fn update<F>(coll: &Value, key: &Value, f: F) -> Result<Value>
where
    F: FnOnce(Value) -> Value,
{
    let current = get(coll, key);
    assoc(coll, &[key.clone(), f(current)])
}

/// In-place update: `assoc_mut` of `f` applied to the current value.
pub fn update_mut<F>(coll: &mut Value, key: &Value, f: F) -> Result<()>
where
    F: FnOnce(Value) -> Value,
{
    let current = get(coll, key);
    assoc_mut(coll, &[key.clone(), f(current)])
}

// ============================================================================
// Path Operations
// ============================================================================

/// Walk nested containers key by key; any absent step short-circuits to the
/// caller-supplied default.
pub fn get_in(coll: &Value, path: &[Value], not_found: &Value) -> Value {
    let mut current = coll.clone();
    for key in path {
        match lookup(&current, key) {
            Some(v) => current = v,
            None => return not_found.clone(),
        }
    }
    current
}

/// The shared chain walk behind assoc-in and assoc-in!.
///
/// Collects the containers along the path, synthesizing an empty container
/// of the *root's* kind for any absent intermediate, then rebuilds each
/// level bottom-up so outer levels see the newly built inner value.
fn assoc_in_chain(name: &'static str, coll: &Value, path: &[Value], value: Value) -> Result<Value> {
    let root_kind = match coll.kind() {
        Some(k @ (Kind::Mapping | Kind::Sequence | Kind::Record)) => k,
        _ => {
            return Err(Error::type_error_in(
                name,
                "map, vector, or record",
                coll.type_name(),
            ));
        }
    };

    if path.is_empty() {
        return Ok(value);
    }

    let mut chain: Vec<Value> = Vec::with_capacity(path.len() + 1);
    chain.push(coll.clone());
    let mut last = coll.clone();
    for key in &path[..path.len() - 1] {
        let next = match lookup(&last, key) {
            Some(v) if !v.is_nil() => v,
            _ => empty_of(root_kind),
        };
        chain.push(next.clone());
        last = next;
    }
    chain.push(value);

    for i in (0..path.len()).rev() {
        let child = chain[i + 1].clone();
        let mut parent = chain[i].clone();
        assoc_mut(&mut parent, &[path[i].clone(), child])?;
        chain[i] = parent;
    }

    Ok(chain[0].clone())
}

/// Copying nested associate along a key path, auto-vivifying absent
/// intermediates as empties of the root's kind.
pub fn assoc_in(coll: &Value, path: &[Value], value: Value) -> Result<Value> {
    assoc_in_chain("assoc-in", coll, path, value)
}

/// In-place nested associate along a key path.
pub fn assoc_in_mut(coll: &mut Value, path: &[Value], value: Value) -> Result<()> {
    let result = assoc_in_chain("assoc-in!", coll, path, value)?;
    *coll = result;
    Ok(())
}

/// Nested update: `assoc_in` of `f` applied to the current value at the
/// path (nil when absent).
pub fn update_in<F>(coll: &Value, path: &[Value], f: F) -> Result<Value>
where
    F: FnOnce(Value) -> Value,
{
    let current = get_in(coll, path, &Value::Nil);
    assoc_in(coll, path, f(current))
}
