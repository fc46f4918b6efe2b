//! BOM line-item records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use xxhash_rust::xxh3::xxh3_64;

/// Nominal reporting currency used when a line item declares none.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// One row of a bill of materials.
///
/// Field names serialize in camelCase so BOM files interoperate with the
/// JSON records exported by the CircuitHub web application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLineItem {
    /// Opaque identifier assigned by the caller or storage layer.
    /// Freshly parsed CSV rows have none; the diff engine assigns a
    /// synthetic one for result identification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Schematic reference / designator (e.g. "R1", "C3,C4").
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Manufacturer part number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    /// Package / footprint string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<String>,

    /// Quantity needed. Items with `quantity <= 0` are excluded from cost
    /// and count aggregations but still participate in diffs.
    #[serde(default)]
    pub quantity: i64,

    /// Effective unit price. Override-vs-catalog resolution happens before
    /// records reach this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// ISO-like currency code; [`DEFAULT_CURRENCY`] applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Ordered supplier list; the first entry is the primary supplier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppliers: Vec<Supplier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,

    /// Free-form technical attributes (resistance, tolerance, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BomLineItem {
    /// Resolved currency code for this item.
    #[must_use]
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Primary supplier name, if the item has a supplier with a non-empty name.
    #[must_use]
    pub fn primary_supplier(&self) -> Option<&str> {
        self.suppliers
            .first()
            .map(|s| s.name.as_str())
            .filter(|n| !n.is_empty())
    }
}

/// A supplier entry on a line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Supplier {
    /// Supplier with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            sku: None,
        }
    }
}

/// Content hash over a full item list for quick identical-input checks.
///
/// Returns 0 when serialization fails, which callers treat as "no hash".
#[must_use]
pub fn content_hash(items: &[BomLineItem]) -> u64 {
    match serde_json::to_vec(items) {
        Ok(bytes) => xxh3_64(&bytes),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_round_trip() {
        let json = r#"{
            "ref": "R1",
            "mpn": "RC0603FR-0710KL",
            "quantity": 4,
            "unitPrice": 0.013,
            "suppliers": [{"name": "LCSC", "sku": "C98220"}],
            "attributes": {"resistance": "10k"}
        }"#;
        let item: BomLineItem = serde_json::from_str(json).expect("valid item JSON");
        assert_eq!(item.reference.as_deref(), Some("R1"));
        assert_eq!(item.quantity, 4);
        assert_eq!(item.primary_supplier(), Some("LCSC"));

        let out = serde_json::to_string(&item).expect("serialize");
        assert!(out.contains("\"ref\""));
        assert!(out.contains("\"unitPrice\""));
        assert!(!out.contains("\"id\""));
    }

    #[test]
    fn test_primary_supplier_skips_empty_name() {
        let mut item = BomLineItem {
            suppliers: vec![Supplier::named("")],
            ..Default::default()
        };
        assert_eq!(item.primary_supplier(), None);

        item.suppliers = vec![Supplier::named("Mouser"), Supplier::named("Digi-Key")];
        assert_eq!(item.primary_supplier(), Some("Mouser"));
    }

    #[test]
    fn test_content_hash_detects_difference() {
        let a = vec![BomLineItem {
            quantity: 1,
            ..Default::default()
        }];
        let b = vec![BomLineItem {
            quantity: 2,
            ..Default::default()
        }];
        assert_eq!(content_hash(&a), content_hash(&a));
        assert_ne!(content_hash(&a), content_hash(&b));
    }
}
