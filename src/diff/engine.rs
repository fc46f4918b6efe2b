//! Diff engine implementation.

use super::result::{find_item_changes, BomDiff, ItemChange};
use crate::model::{content_hash, BomLineItem, ItemKey, ItemKeyer, RefMpnKeyer};
use indexmap::IndexMap;

/// Diff engine for comparing two BOM item lists.
///
/// Comparison keys come from the configured [`ItemKeyer`]; the default
/// keys on `ref|mpn` with a positional fallback. Duplicate keys follow
/// last-wins semantics while keeping the first occurrence's position, so
/// iteration order stays deterministic.
pub struct DiffEngine {
    keyer: Box<dyn ItemKeyer>,
}

impl DiffEngine {
    /// Create a new diff engine with the default `ref|mpn` keyer
    pub fn new() -> Self {
        Self {
            keyer: Box::new(RefMpnKeyer),
        }
    }

    /// Set a custom item keyer.
    pub fn with_keyer(mut self, keyer: Box<dyn ItemKeyer>) -> Self {
        self.keyer = keyer;
        self
    }

    /// Compare two item lists and return the diff.
    ///
    /// This is a total function: degenerate inputs produce empty diff
    /// sections, never errors.
    pub fn diff(&self, old_items: &[BomLineItem], new_items: &[BomLineItem]) -> BomDiff {
        let mut diff = BomDiff::default();

        // Quick check: identical content hashes mean identical lists
        let old_hash = content_hash(old_items);
        if old_hash != 0 && old_hash == content_hash(new_items) {
            return diff;
        }

        let old_map = self.keyed_items(old_items, "old");
        let new_map = self.keyed_items(new_items, "new");

        for (key, new_item) in &new_map {
            if !old_map.contains_key(key) {
                diff.added.push(new_item.clone());
            }
        }

        for (key, old_item) in &old_map {
            if !new_map.contains_key(key) {
                diff.removed.push(old_item.clone());
            }
        }

        for (key, new_item) in &new_map {
            let Some(old_item) = old_map.get(key) else {
                continue;
            };
            let (before, after) = find_item_changes(old_item, new_item);
            if !before.is_empty() {
                let id = old_item
                    .id
                    .clone()
                    .or_else(|| new_item.id.clone())
                    .unwrap_or_else(|| key.to_string());
                diff.changed.push(ItemChange { id, before, after });
            }
        }

        diff
    }

    /// Build the key→item map for one side, assigning synthetic ids
    /// (`old_N` / `new_N`) to items that have none.
    fn keyed_items(&self, items: &[BomLineItem], side: &str) -> IndexMap<ItemKey, BomLineItem> {
        let mut map = IndexMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let key = self.keyer.key(item, index);
            let mut entry = item.clone();
            if entry.id.is_none() {
                entry.id = Some(format!("{side}_{index}"));
            }
            map.insert(key, entry);
        }
        map
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKey;

    fn item(reference: &str, mpn: &str, quantity: i64) -> BomLineItem {
        BomLineItem {
            reference: Some(reference.to_string()),
            mpn: Some(mpn.to_string()),
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_lists_produce_empty_diff() {
        let items = vec![item("R1", "A", 2), item("C1", "B", 1)];
        let diff = DiffEngine::new().diff(&items, &items);
        assert!(!diff.has_changes());
    }

    #[test]
    fn test_synthetic_ids_assigned_per_side() {
        let old = vec![item("R1", "A", 1)];
        let new = vec![item("C9", "Z", 1)];
        let diff = DiffEngine::new().diff(&old, &new);
        assert_eq!(diff.added[0].id.as_deref(), Some("new_0"));
        assert_eq!(diff.removed[0].id.as_deref(), Some("old_0"));
    }

    #[test]
    fn test_custom_keyer_is_used() {
        struct MpnOnly;
        impl ItemKeyer for MpnOnly {
            fn key(&self, item: &BomLineItem, index: usize) -> ItemKey {
                match item.mpn.clone().filter(|m| !m.is_empty()) {
                    Some(mpn) => ItemKey::Identity {
                        reference: String::new(),
                        mpn,
                    },
                    None => ItemKey::Positional(index),
                }
            }
        }

        // Same MPN under a different designator: a change, not remove+add
        let old = vec![item("R1", "A", 1)];
        let new = vec![item("R2", "A", 3)];
        let diff = DiffEngine::new().with_keyer(Box::new(MpnOnly)).diff(&old, &new);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.changed.len(), 1);
    }
}
