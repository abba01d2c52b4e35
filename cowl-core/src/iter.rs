// cowl-core - Iteration normalizer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The iteration normalizer: `iterable` and `seq`.
//!
//! Every consuming operator in the runtime goes through `iterable`, which is
//! what guarantees uniform behavior for nil, records, and native containers.

use std::rc::Rc;

use cowl_value::{Value, ValueIter};

/// Build the `[key value]` entry pair used when iterating mappings/records.
pub(crate) fn entry_pair(k: Value, v: Value) -> Value {
    Value::vector(vec![k, v])
}

/// Per-character iteration over a shared string, yielding one-character
/// string values.
struct StrChars {
    s: Rc<str>,
    pos: usize,
}

impl Iterator for StrChars {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let c = self.s[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(Value::string(c.to_string()))
    }
}

/// Convert any value into a uniform ordered iteration source.
///
/// Nil and scalar leaves pun to an empty source, so `first`, `rest`,
/// `reduce`, etc. accept them without special-casing. Strings iterate
/// per character, mappings and records as `[key value]` pairs, and a lazy
/// sequence starts a fresh producer run.
pub fn iterable(v: &Value) -> ValueIter {
    match v {
        Value::Nil
        | Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Reduced(_)
        | Value::Atom(_) => Box::new(std::iter::empty()),
        Value::Str(s) => Box::new(StrChars {
            s: s.clone(),
            pos: 0,
        }),
        Value::List(items) => Box::new(items.clone().into_iter()),
        Value::Vector(items) => Box::new(items.clone().into_iter()),
        Value::Set(set) => Box::new(set.clone().into_iter()),
        Value::Map(map) => Box::new(map.clone().into_iter().map(|(k, v)| entry_pair(k, v))),
        Value::Record(fields) => Box::new(
            fields
                .clone()
                .into_iter()
                .map(|(k, v)| entry_pair(Value::Str(k), v)),
        ),
        Value::LazySeq(ls) => ls.iter(),
    }
}

/// Return the value unchanged when its normalized source is non-empty,
/// `None` otherwise.
///
/// This is the idiomatic emptiness/termination check for loops driving a
/// sequence by repeated `rest`. For a lazy sequence the check pulls one
/// element from a fresh producer run.
pub fn seq(v: &Value) -> Option<Value> {
    if iterable(v).next().is_some() {
        Some(v.clone())
    } else {
        None
    }
}
