// cowl-core - Collection update operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keyed lookup plus the paired update operations: in-place mutation
//! primitives (`assoc_mut`, `conj_mut`, `dissoc_mut`, `disj_mut`) and their
//! copy-then-mutate counterparts (`assoc`, `conj`, `dissoc`, `disj`).
//!
//! Each pair shares one per-kind update core; the copying entry point
//! shallow-copies the receiver first, so the original container is never
//! disturbed.

use cowl_value::{Value, Vector};

use crate::error::{Error, Result};
use crate::iter::iterable;

// ============================================================================
// Lookup Operations
// ============================================================================

/// Single-key lookup distinguishing "absent" from a stored nil.
pub(crate) fn lookup(coll: &Value, key: &Value) -> Option<Value> {
    match coll {
        Value::Map(map) => map.get(key).cloned(),
        Value::Vector(items) | Value::List(items) => match key {
            Value::Int(idx) if *idx >= 0 && (*idx as usize) < items.len() => {
                Some(items[*idx as usize].clone())
            }
            _ => None,
        },
        Value::Set(set) => {
            if set.contains(key) {
                Some(key.clone())
            } else {
                None
            }
        }
        Value::Record(fields) => match key {
            Value::Str(k) => fields.get(k).cloned(),
            _ => None,
        },
        _ => None,
    }
}

/// Get the value at `key`, or nil when the key is absent or the value
/// supports no keyed lookup. Sets return the element itself when present.
pub fn get(coll: &Value, key: &Value) -> Value {
    lookup(coll, key).unwrap_or(Value::Nil)
}

/// Get the value at `key`, or the caller-supplied default when absent.
/// A stored nil is returned as nil, not replaced by the default.
pub fn get_or(coll: &Value, key: &Value, not_found: &Value) -> Value {
    lookup(coll, key).unwrap_or_else(|| not_found.clone())
}

/// True if the key (index for sequences, element for sets) is present.
/// Values with no keyed structure simply report false.
pub fn contains(coll: &Value, key: &Value) -> bool {
    match coll {
        Value::Map(map) => map.contains_key(key),
        Value::Set(set) => set.contains(key),
        Value::Vector(items) | Value::List(items) => match key {
            Value::Int(idx) => *idx >= 0 && (*idx as usize) < items.len(),
            _ => false,
        },
        Value::Record(fields) => match key {
            Value::Str(k) => fields.contains_key(k),
            _ => false,
        },
        _ => false,
    }
}

// ============================================================================
// assoc / assoc_mut
// ============================================================================

fn set_index(
    name: &'static str,
    items: &mut Vector<Value>,
    key: &Value,
    val: Value,
) -> Result<()> {
    match key {
        Value::Int(idx) => {
            if *idx < 0 || (*idx as usize) > items.len() {
                Err(Error::IndexOutOfBounds {
                    index: *idx,
                    length: items.len(),
                })
            } else if (*idx as usize) == items.len() {
                items.push_back(val);
                Ok(())
            } else {
                items.set(*idx as usize, val);
                Ok(())
            }
        }
        other => Err(Error::type_error_in(name, "integer index", other.type_name())),
    }
}

fn assoc_impl(name: &'static str, coll: &mut Value, kvs: &[Value]) -> Result<()> {
    if kvs.is_empty() || !kvs.len().is_multiple_of(2) {
        return Err(Error::illegal_argument(
            name,
            "expects a non-empty, even-length list of key/value pairs",
        ));
    }

    match coll {
        Value::Map(map) => {
            for pair in kvs.chunks(2) {
                map.insert(pair[0].clone(), pair[1].clone());
            }
            Ok(())
        }
        Value::Vector(items) => {
            for pair in kvs.chunks(2) {
                set_index(name, items, &pair[0], pair[1].clone())?;
            }
            Ok(())
        }
        Value::Record(fields) => {
            for pair in kvs.chunks(2) {
                match &pair[0] {
                    Value::Str(k) => {
                        fields.insert(k.clone(), pair[1].clone());
                    }
                    other => {
                        return Err(Error::type_error_in(name, "string key", other.type_name()));
                    }
                }
            }
            Ok(())
        }
        other => Err(Error::type_error_in(
            name,
            "map, vector, or record",
            other.type_name(),
        )),
    }
}

/// Set key/value pairs in place. `kvs` is a flat `[k1 v1 k2 v2 ...]` list;
/// later writes to the same key win. Mappings insert by key, sequences set
/// by integer index (index == length appends), records set string fields.
pub fn assoc_mut(coll: &mut Value, kvs: &[Value]) -> Result<()> {
    assoc_impl("assoc!", coll, kvs)
}

/// Copying `assoc`: shallow-copies the receiver, then applies the same
/// update core. A nil receiver defaults to an empty record.
pub fn assoc(coll: &Value, kvs: &[Value]) -> Result<Value> {
    let mut copy = if coll.is_nil() {
        Value::empty_record()
    } else {
        coll.clone()
    };
    assoc_impl("assoc", &mut copy, kvs)?;
    Ok(copy)
}

// ============================================================================
// conj / conj_mut
// ============================================================================

fn merge_entry(name: &'static str, map: &mut Value, item: &Value) -> Result<()> {
    // A two-element vector/list is a single key/value pair; a mapping or
    // record item merges all of its entries.
    match (map, item) {
        (Value::Map(m), Value::Vector(p) | Value::List(p)) if p.len() == 2 => {
            m.insert(p[0].clone(), p[1].clone());
            Ok(())
        }
        (Value::Map(m), Value::Map(other)) => {
            for (k, v) in other.iter() {
                m.insert(k.clone(), v.clone());
            }
            Ok(())
        }
        (Value::Map(m), Value::Record(fields)) => {
            for (k, v) in fields.iter() {
                m.insert(Value::Str(k.clone()), v.clone());
            }
            Ok(())
        }
        (Value::Record(fields), Value::Vector(p) | Value::List(p)) if p.len() == 2 => {
            match &p[0] {
                Value::Str(k) => {
                    fields.insert(k.clone(), p[1].clone());
                    Ok(())
                }
                other => Err(Error::type_error_in(name, "string key", other.type_name())),
            }
        }
        (Value::Record(fields), Value::Record(other)) => {
            for (k, v) in other.iter() {
                fields.insert(k.clone(), v.clone());
            }
            Ok(())
        }
        (Value::Record(fields), Value::Map(other)) => {
            for (k, v) in other.iter() {
                match k {
                    Value::Str(s) => {
                        fields.insert(s.clone(), v.clone());
                    }
                    other_key => {
                        return Err(Error::type_error_in(
                            name,
                            "string key",
                            other_key.type_name(),
                        ));
                    }
                }
            }
            Ok(())
        }
        (_, other) => Err(Error::type_error_in(
            name,
            "key-value pair or mergeable collection",
            other.type_name(),
        )),
    }
}

fn conj_impl(name: &'static str, coll: &mut Value, items: &[Value]) -> Result<()> {
    if coll.is_nil() {
        // An absent container yields a fresh sequence
        *coll = Value::empty_vector();
    }

    match coll {
        Value::Set(set) => {
            for item in items {
                set.insert(item.clone());
            }
            Ok(())
        }
        Value::List(list) => {
            // Prepend: the first listed item ends up nearest the old head
            for item in items {
                list.push_front(item.clone());
            }
            Ok(())
        }
        Value::Vector(vec) => {
            for item in items {
                vec.push_back(item.clone());
            }
            Ok(())
        }
        map_like @ (Value::Map(_) | Value::Record(_)) => {
            for item in items {
                merge_entry(name, map_like, item)?;
            }
            Ok(())
        }
        other => Err(Error::type_error_in(
            name,
            "set, list, vector, map, or record",
            other.type_name(),
        )),
    }
}

/// Add items in place: sets insert, ordered lists prepend, sequences
/// append, mappings/records merge pairs or whole entry sources. A nil
/// receiver (with or without items) becomes a fresh sequence.
pub fn conj_mut(coll: &mut Value, items: &[Value]) -> Result<()> {
    conj_impl("conj!", coll, items)
}

/// Copying `conj`. A lazy-sequence receiver yields a new lazy sequence with
/// the items prepended ahead of the upstream elements.
pub fn conj(coll: &Value, items: &[Value]) -> Result<Value> {
    if matches!(coll, Value::LazySeq(_)) {
        let front = items.to_vec();
        let src = coll.clone();
        return Ok(Value::lazy(move || {
            Box::new(front.clone().into_iter().chain(iterable(&src)))
        }));
    }

    let mut copy = if coll.is_nil() {
        Value::empty_vector()
    } else {
        coll.clone()
    };
    conj_impl("conj", &mut copy, items)?;
    Ok(copy)
}

// ============================================================================
// dissoc / dissoc_mut
// ============================================================================

fn dissoc_impl(name: &'static str, coll: &mut Value, keys: &[Value]) -> Result<()> {
    match coll {
        Value::Nil => Ok(()),
        Value::Map(map) => {
            for key in keys {
                map.remove(key);
            }
            Ok(())
        }
        Value::Record(fields) => {
            for key in keys {
                if let Value::Str(k) = key {
                    fields.remove(k);
                }
                // Non-string keys are absent by definition: a no-op
            }
            Ok(())
        }
        other => Err(Error::type_error_in(
            name,
            "map or record",
            other.type_name(),
        )),
    }
}

/// Remove keys in place from a record or mapping. Removing an absent key is
/// a no-op; nil stays nil.
pub fn dissoc_mut(coll: &mut Value, keys: &[Value]) -> Result<()> {
    dissoc_impl("dissoc!", coll, keys)
}

/// Copying `dissoc`.
pub fn dissoc(coll: &Value, keys: &[Value]) -> Result<Value> {
    let mut copy = coll.clone();
    dissoc_impl("dissoc", &mut copy, keys)?;
    Ok(copy)
}

// ============================================================================
// disj / disj_mut
// ============================================================================

fn disj_impl(name: &'static str, coll: &mut Value, items: &[Value]) -> Result<()> {
    match coll {
        Value::Nil => Ok(()),
        Value::Set(set) => {
            for item in items {
                set.remove(item);
            }
            Ok(())
        }
        other => Err(Error::type_error_in(name, "set", other.type_name())),
    }
}

/// Remove elements in place from a set. Removing an absent element is a
/// no-op; nil stays nil.
pub fn disj_mut(coll: &mut Value, items: &[Value]) -> Result<()> {
    disj_impl("disj!", coll, items)
}

/// Copying `disj`.
pub fn disj(coll: &Value, items: &[Value]) -> Result<Value> {
    let mut copy = coll.clone();
    disj_impl("disj", &mut copy, items)?;
    Ok(copy)
}
