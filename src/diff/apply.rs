//! Replay a diff onto a base item list.

use super::result::BomDiff;
use crate::model::BomLineItem;

/// Apply a diff to `base`, producing a new list.
///
/// Order of operations: remove, then append added items, then merge each
/// change's `after` patch onto the item with the matching id. A patch
/// whose id is not present in the working set is a silent no-op.
#[must_use]
pub fn apply_diff(base: &[BomLineItem], diff: &BomDiff) -> Vec<BomLineItem> {
    let mut result: Vec<BomLineItem> = base
        .iter()
        .filter(|item| !diff.removed.iter().any(|removed| matches_removed(item, removed)))
        .cloned()
        .collect();

    result.extend(diff.added.iter().cloned());

    for change in &diff.changed {
        if let Some(item) = result
            .iter_mut()
            .find(|item| item.id.as_deref() == Some(change.id.as_str()))
        {
            change.after.apply_to(item);
        }
    }

    result
}

/// An item matches a removal by ref+mpn pair or by id; either condition
/// is sufficient. Both comparisons require the fields to actually be
/// present and non-empty on both sides.
fn matches_removed(item: &BomLineItem, removed: &BomLineItem) -> bool {
    let pair_match = match (
        nonempty(&item.reference),
        nonempty(&removed.reference),
        nonempty(&item.mpn),
        nonempty(&removed.mpn),
    ) {
        (Some(item_ref), Some(rem_ref), Some(item_mpn), Some(rem_mpn)) => {
            item_ref == rem_ref && item_mpn == rem_mpn
        }
        _ => false,
    };

    let id_match = match (&item.id, &removed.id) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    pair_match || id_match
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
