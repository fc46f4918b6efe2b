//! Cost totals and per-supplier breakdowns.

use crate::model::{BomLineItem, DEFAULT_CURRENCY};
use indexmap::IndexMap;
use serde::Serialize;

/// Supplier bucket label for items without a usable primary supplier.
const UNKNOWN_SUPPLIER: &str = "Unknown";

/// Cost roll-up over a BOM.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Sum of `quantity * unit price` over countable items, 4 decimals.
    pub total_cost: f64,
    /// Nominal reporting currency; line items in other currencies are
    /// summed as-is (no conversion).
    pub currency: String,
    /// Number of countable (quantity > 0) items.
    pub item_count: usize,
    /// Per-supplier subtotals, sorted by cost descending.
    pub supplier_breakdown: Vec<SupplierCost>,
}

/// One supplier's share of the total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCost {
    pub supplier: String,
    /// 4-decimal subtotal.
    pub cost: f64,
    /// Summed quantity across this supplier's items.
    pub item_count: i64,
    /// Share of total cost, 2 decimals; 0 when the total is 0.
    pub percentage: f64,
}

/// Compute the cost breakdown with the default reporting currency.
#[must_use]
pub fn calculate_total_cost(items: &[BomLineItem]) -> CostBreakdown {
    calculate_total_cost_in(items, DEFAULT_CURRENCY)
}

/// Compute the cost breakdown with a caller-supplied reporting currency.
///
/// Items with `quantity <= 0` are excluded. The effective unit price is
/// the item's `unit_price` or 0; override-vs-catalog resolution happens
/// before items reach this function.
#[must_use]
pub fn calculate_total_cost_in(items: &[BomLineItem], currency: &str) -> CostBreakdown {
    let mut total_cost = 0.0;
    let mut item_count = 0;
    let mut suppliers: IndexMap<String, (f64, i64)> = IndexMap::new();

    for item in items {
        if item.quantity <= 0 {
            continue;
        }
        item_count += 1;

        let unit_price = item.unit_price.unwrap_or(0.0);
        let line_cost = item.quantity as f64 * unit_price;
        total_cost += line_cost;

        let supplier = item
            .primary_supplier()
            .unwrap_or(UNKNOWN_SUPPLIER)
            .to_string();
        let entry = suppliers.entry(supplier).or_insert((0.0, 0));
        entry.0 += line_cost;
        entry.1 += item.quantity;
    }

    let mut supplier_breakdown: Vec<SupplierCost> = suppliers
        .into_iter()
        .map(|(supplier, (cost, count))| SupplierCost {
            supplier,
            cost: round4(cost),
            item_count: count,
            percentage: if total_cost == 0.0 {
                0.0
            } else {
                round2(cost / total_cost * 100.0)
            },
        })
        .collect();
    supplier_breakdown.sort_by(|a, b| b.cost.total_cmp(&a.cost));

    CostBreakdown {
        total_cost: round4(total_cost),
        currency: currency.to_string(),
        item_count,
        supplier_breakdown,
    }
}

/// Cost of a single line: 0 for non-positive quantities, otherwise
/// `quantity * unit price` at 4 decimals.
#[must_use]
pub fn calculate_line_cost(item: &BomLineItem) -> f64 {
    if item.quantity <= 0 {
        return 0.0;
    }
    round4(item.quantity as f64 * item.unit_price.unwrap_or(0.0))
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Supplier;

    fn item(quantity: i64, unit_price: Option<f64>, supplier: Option<&str>) -> BomLineItem {
        BomLineItem {
            quantity,
            unit_price,
            suppliers: supplier.map(|n| vec![Supplier::named(n)]).unwrap_or_default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_quantity_items_excluded() {
        let items = vec![
            item(2, Some(1.5), None),
            item(0, Some(100.0), None),
            item(3, Some(2.0), None),
        ];
        let breakdown = calculate_total_cost(&items);
        assert_eq!(breakdown.total_cost, 9.0);
        assert_eq!(breakdown.item_count, 2);
        assert_eq!(breakdown.currency, "EUR");
    }

    #[test]
    fn test_supplier_bucketing_and_percentage() {
        let items = vec![
            item(2, Some(1.0), Some("LCSC")),
            item(3, Some(1.0), Some("LCSC")),
        ];
        let breakdown = calculate_total_cost(&items);
        assert_eq!(breakdown.supplier_breakdown.len(), 1);
        let lcsc = &breakdown.supplier_breakdown[0];
        assert_eq!(lcsc.supplier, "LCSC");
        assert_eq!(lcsc.cost, 5.0);
        assert_eq!(lcsc.item_count, 5);
        assert_eq!(lcsc.percentage, 100.0);
    }

    #[test]
    fn test_missing_supplier_buckets_as_unknown() {
        let items = vec![item(1, Some(2.0), None), item(1, Some(1.0), Some("Mouser"))];
        let breakdown = calculate_total_cost(&items);
        // Sorted by cost descending: Unknown (2.0) before Mouser (1.0)
        assert_eq!(breakdown.supplier_breakdown[0].supplier, "Unknown");
        assert_eq!(breakdown.supplier_breakdown[1].supplier, "Mouser");
    }

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let items = vec![item(2, None, Some("LCSC"))];
        let breakdown = calculate_total_cost(&items);
        assert_eq!(breakdown.total_cost, 0.0);
        assert_eq!(breakdown.supplier_breakdown[0].percentage, 0.0);
    }

    #[test]
    fn test_line_cost() {
        assert_eq!(calculate_line_cost(&item(3, Some(0.1234), None)), 0.3702);
        assert_eq!(calculate_line_cost(&item(0, Some(5.0), None)), 0.0);
        assert_eq!(calculate_line_cost(&item(-2, Some(5.0), None)), 0.0);
        assert_eq!(calculate_line_cost(&item(4, None, None)), 0.0);
    }
}
