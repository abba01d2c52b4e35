// cowl-core - Collection and sequence operations for the cowl runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # cowl-core
//!
//! Operations over the cowl value model: copy-on-write collection updates,
//! a uniform iteration protocol, composable lazy sequences, path-based
//! nested updates, and a reduction engine with early termination.
//!
//! The in-place primitives (`assoc_mut`, `conj_mut`, `dissoc_mut`,
//! `disj_mut`, and friends) mutate through `&mut Value` and are the only
//! operations that touch an existing container; every other operation is
//! referentially transparent given the same inputs. Lazy operators return
//! restartable sequences: iterating a result twice re-runs the whole
//! pipeline from its sources.

// Allow mutable key types - Value has interior mutability for Atoms by design
#![allow(clippy::mutable_key_type)]

pub mod atoms;
pub mod collection_utils;
pub mod collections;
pub mod eager;
pub mod error;
pub mod higher_order;
pub mod iter;
pub mod sequences;

pub use atoms::{atom, compare_and_set, deref, reset, swap};
pub use collection_utils::{
    assoc_in, assoc_in_mut, empty, empty_of, get_in, into, merge, select_keys, update, update_in,
    update_mut,
};
pub use collections::{
    assoc, assoc_mut, conj, conj_mut, contains, disj, disj_mut, dissoc, dissoc_mut, get, get_or,
};
pub use eager::{filterv, frequencies, group_by, map_indexed, mapv, replace, sort, sort_by};
pub use error::{Error, Result};
pub use higher_order::{
    ensure_reduced, every, filter, is_reduced, keep, map, map_many, not_any, not_every, reduce,
    reduce_with, reduced, remove, some, unreduced,
};
pub use iter::{iterable, seq};
pub use sequences::{
    butlast, concat, cons, count, cycle, distinct, drop, drop_last, drop_while, ffirst, first,
    interleave, interpose, is_empty, last, lazy, mapcat, nth, partition, partition_all,
    partition_all_step, partition_pad, partition_step, range, range_from, range_step, repeat,
    repeat_n, repeatedly, repeatedly_n, rest, reverse, second, split_at, split_with, take,
    take_nth, take_while, vec,
};

// Re-export the value model for convenience
pub use cowl_value::{Atom, Kind, LazySeq, Value, ValueIter};
