//! Comparison keys for line items.
//!
//! Items are identified by `ref|mpn` when both fields are present and
//! non-empty. Items without that identity fall back to their list
//! position, which means a reordered list of identity-less items diffs
//! as full remove+add. The [`ItemKeyer`] seam lets callers with better
//! identity data (e.g. stable database ids) replace the default.

use crate::model::BomLineItem;
use serde::Serialize;
use std::fmt;

/// Comparison key for one line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemKey {
    /// Stable identity from schematic reference + MPN.
    Identity { reference: String, mpn: String },
    /// Positional last-resort fallback.
    Positional(usize),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity { reference, mpn } => write!(f, "{reference}|{mpn}"),
            Self::Positional(index) => write!(f, "index_{index}"),
        }
    }
}

impl ItemKey {
    /// Whether this key carries real identity rather than list position.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Identity { .. })
    }
}

/// Strategy for deriving an [`ItemKey`] from an item and its position.
pub trait ItemKeyer {
    fn key(&self, item: &BomLineItem, index: usize) -> ItemKey;
}

/// Default keyer: `ref|mpn` when both are non-empty, positional otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefMpnKeyer;

impl ItemKeyer for RefMpnKeyer {
    fn key(&self, item: &BomLineItem, index: usize) -> ItemKey {
        match (nonempty(item.reference.as_deref()), nonempty(item.mpn.as_deref())) {
            (Some(reference), Some(mpn)) => ItemKey::Identity {
                reference: reference.to_string(),
                mpn: mpn.to_string(),
            },
            _ => ItemKey::Positional(index),
        }
    }
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
