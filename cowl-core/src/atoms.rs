// cowl-core - Atom operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atom operations: atom, deref, reset, swap, compare-and-set.

use cowl_value::Value;

use crate::error::{Error, Result};

/// Create an atom holding an initial value.
pub fn atom(value: Value) -> Value {
    Value::atom(value)
}

/// Read the atom's current value.
pub fn deref(v: &Value) -> Result<Value> {
    match v {
        Value::Atom(a) => Ok(a.deref()),
        other => Err(Error::type_error_in("deref", "atom", other.type_name())),
    }
}

/// Replace the atom's value, returning the new value.
pub fn reset(v: &Value, new_val: Value) -> Result<Value> {
    match v {
        Value::Atom(a) => Ok(a.reset(new_val)),
        other => Err(Error::type_error_in("reset!", "atom", other.type_name())),
    }
}

/// Read-modify-write: apply `f` to the current value, store and return the
/// result.
pub fn swap<F>(v: &Value, f: F) -> Result<Value>
where
    F: FnOnce(Value) -> Value,
{
    match v {
        Value::Atom(a) => Ok(a.swap(f)),
        other => Err(Error::type_error_in("swap!", "atom", other.type_name())),
    }
}

/// Set the atom to `new_val` only if it currently holds `old_val`.
/// Returns whether the swap happened.
pub fn compare_and_set(v: &Value, old_val: &Value, new_val: Value) -> Result<bool> {
    match v {
        Value::Atom(a) => Ok(a.compare_and_set(old_val, new_val)),
        other => Err(Error::type_error_in(
            "compare-and-set!",
            "atom",
            other.type_name(),
        )),
    }
}
