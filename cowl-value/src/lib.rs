// cowl-value - Value types for the cowl collection runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # cowl-value
//!
//! Value model for the cowl collection runtime: the `Value` enum with one
//! case per semantic container kind, the `Kind` classifier tag, restartable
//! lazy sequences, and the atom reference cell.

pub mod value;

pub use im::{OrdMap, OrdSet, Vector};
pub use value::{Atom, FieldMap, Kind, LazySeq, Value, ValueIter};
