//! Core BOM line-item data structures.
//!
//! A BOM is represented as a plain list of [`BomLineItem`] records. The
//! diff engine, mapping heuristic, and pricing aggregator all operate on
//! this one shape; callers own the lists and the core only reads them.

mod item;
mod key;

pub use item::*;
pub use key::*;
