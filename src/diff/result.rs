//! Diff result structures.

use crate::model::{BomLineItem, Supplier};
use serde::Serialize;
use serde_json::{Map, Value};

/// Result of comparing two BOM item lists.
///
/// `added` and `changed` follow new-list order, `removed` follows old-list
/// order; no other sort is applied.
#[derive(Debug, Clone, Default, Serialize)]
#[must_use]
pub struct BomDiff {
    pub added: Vec<BomLineItem>,
    pub removed: Vec<BomLineItem>,
    pub changed: Vec<ItemChange>,
}

impl BomDiff {
    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.changed.is_empty()
    }

    /// Total number of change entries across all sections
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// A modified item: only the differing fields are populated in
/// `before` / `after`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemChange {
    pub id: String,
    pub before: ItemPatch,
    pub after: ItemPatch,
}

/// Partial view of a line item.
///
/// Outer `None` means "field unchanged"; an inner `None` records that the
/// field was (or becomes) absent, so clearing a value round-trips through
/// [`ItemPatch::apply_to`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<Supplier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

impl ItemPatch {
    /// True when no field differs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of populated fields, in comparison order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.quantity.is_some() {
            fields.push("quantity");
        }
        if self.unit_price.is_some() {
            fields.push("unitPrice");
        }
        if self.currency.is_some() {
            fields.push("currency");
        }
        if self.footprint.is_some() {
            fields.push("footprint");
        }
        if self.notes.is_some() {
            fields.push("notes");
        }
        if self.image_url.is_some() {
            fields.push("imageUrl");
        }
        if self.datasheet_url.is_some() {
            fields.push("datasheetUrl");
        }
        if self.suppliers.is_some() {
            fields.push("suppliers");
        }
        if self.attributes.is_some() {
            fields.push("attributes");
        }
        fields
    }

    /// Merge the populated fields onto `item`.
    pub fn apply_to(&self, item: &mut BomLineItem) {
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = &self.unit_price {
            item.unit_price = *unit_price;
        }
        if let Some(currency) = &self.currency {
            item.currency.clone_from(currency);
        }
        if let Some(footprint) = &self.footprint {
            item.footprint.clone_from(footprint);
        }
        if let Some(notes) = &self.notes {
            item.notes.clone_from(notes);
        }
        if let Some(image_url) = &self.image_url {
            item.image_url.clone_from(image_url);
        }
        if let Some(datasheet_url) = &self.datasheet_url {
            item.datasheet_url.clone_from(datasheet_url);
        }
        if let Some(suppliers) = &self.suppliers {
            item.suppliers.clone_from(suppliers);
        }
        if let Some(attributes) = &self.attributes {
            item.attributes.clone_from(attributes);
        }
    }
}

/// Compute the field-level difference between two items.
///
/// Scalar fields use strict inequality; `suppliers` and `attributes` use
/// canonical (order-insensitive for maps, order-sensitive for lists)
/// deep equality.
pub(crate) fn find_item_changes(old: &BomLineItem, new: &BomLineItem) -> (ItemPatch, ItemPatch) {
    let mut before = ItemPatch::default();
    let mut after = ItemPatch::default();

    if old.quantity != new.quantity {
        before.quantity = Some(old.quantity);
        after.quantity = Some(new.quantity);
    }
    if old.unit_price != new.unit_price {
        before.unit_price = Some(old.unit_price);
        after.unit_price = Some(new.unit_price);
    }
    if old.currency != new.currency {
        before.currency = Some(old.currency.clone());
        after.currency = Some(new.currency.clone());
    }
    if old.footprint != new.footprint {
        before.footprint = Some(old.footprint.clone());
        after.footprint = Some(new.footprint.clone());
    }
    if old.notes != new.notes {
        before.notes = Some(old.notes.clone());
        after.notes = Some(new.notes.clone());
    }
    if old.image_url != new.image_url {
        before.image_url = Some(old.image_url.clone());
        after.image_url = Some(new.image_url.clone());
    }
    if old.datasheet_url != new.datasheet_url {
        before.datasheet_url = Some(old.datasheet_url.clone());
        after.datasheet_url = Some(new.datasheet_url.clone());
    }
    if old.suppliers != new.suppliers {
        before.suppliers = Some(old.suppliers.clone());
        after.suppliers = Some(new.suppliers.clone());
    }
    if old.attributes != new.attributes {
        before.attributes = Some(old.attributes.clone());
        after.attributes = Some(new.attributes.clone());
    }

    (before, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_lists_differing_fields() {
        let old = BomLineItem {
            quantity: 2,
            unit_price: Some(0.5),
            notes: Some("hand-solder".to_string()),
            ..Default::default()
        };
        let new = BomLineItem {
            quantity: 5,
            unit_price: Some(0.5),
            notes: None,
            ..Default::default()
        };

        let (before, after) = find_item_changes(&old, &new);
        assert_eq!(before.changed_fields(), vec!["quantity", "notes"]);
        assert_eq!(before.quantity, Some(2));
        assert_eq!(after.quantity, Some(5));
        assert_eq!(after.notes, Some(None));
    }

    #[test]
    fn test_apply_to_clears_field() {
        let mut item = BomLineItem {
            notes: Some("old".to_string()),
            ..Default::default()
        };
        let patch = ItemPatch {
            notes: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut item);
        assert_eq!(item.notes, None);
    }

    #[test]
    fn test_serialized_patch_omits_unchanged_fields() {
        let patch = ItemPatch {
            quantity: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).expect("serialize");
        assert_eq!(json, r#"{"quantity":3}"#);
    }
}
