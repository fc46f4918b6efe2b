//! Pricing sanity checks, completeness metrics, and currency display.

use crate::error::ValidationReport;
use crate::model::{BomLineItem, DEFAULT_CURRENCY};
use serde::Serialize;
use std::collections::HashSet;

/// Unit prices above this are flagged as suspicious. A heuristic sanity
/// check, not a business rule.
const UNUSUALLY_HIGH_PRICE: f64 = 10_000.0;

/// Sanity-check line items before costing. Findings use 1-indexed row
/// numbers and are reported, never thrown.
#[must_use]
pub fn validate_pricing(items: &[BomLineItem]) -> ValidationReport {
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let row = index + 1;

        if item.quantity <= 0 {
            errors.push(format!("Row {row}: Quantity must be positive"));
        }

        if let Some(price) = item.unit_price {
            if price < 0.0 {
                errors.push(format!("Row {row}: Unit price cannot be negative"));
            }
            if price > UNUSUALLY_HIGH_PRICE {
                errors.push(format!("Row {row}: Unit price seems unusually high"));
            }
        }
    }

    ValidationReport::from_errors(errors)
}

/// Shape summary of a BOM.
///
/// Unlike [`calculate_total_cost`](crate::pricing::calculate_total_cost),
/// `total_items` counts every line including zero-quantity ones: "how
/// many lines exist" versus "how many lines contribute cost". The two
/// counts are deliberately distinct.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_items: usize,
    /// Sum of all quantities; non-positive quantities reduce the sum.
    pub total_quantity: i64,
    /// Distinct non-empty supplier names across every item's full
    /// supplier list, not just the primary.
    pub unique_suppliers: usize,
    /// True when any item has a positive unit price.
    pub has_pricing: bool,
}

/// Compute the shape summary.
#[must_use]
pub fn get_cost_summary(items: &[BomLineItem]) -> CostSummary {
    let mut suppliers: HashSet<&str> = HashSet::new();
    let mut has_pricing = false;

    for item in items {
        if item.unit_price.is_some_and(|p| p > 0.0) {
            has_pricing = true;
        }
        for supplier in &item.suppliers {
            if !supplier.name.is_empty() {
                suppliers.insert(supplier.name.as_str());
            }
        }
    }

    CostSummary {
        total_items: items.len(),
        total_quantity: items.iter().map(|item| item.quantity).sum(),
        unique_suppliers: suppliers.len(),
        has_pricing,
    }
}

/// Project-level BOM statistics for dashboards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BomStats {
    pub total_items: usize,
    pub total_quantity: i64,
    /// Raw sum over all lines (zero-quantity lines included), unrounded.
    pub total_cost: f64,
    pub currency: String,
    /// Percentage of lines with a positive unit price, rounded to the
    /// nearest integer; 0 for an empty BOM.
    pub price_completeness: u32,
}

/// Compute dashboard statistics with the default reporting currency.
#[must_use]
pub fn bom_stats(items: &[BomLineItem]) -> BomStats {
    let total_items = items.len();
    let total_cost: f64 = items
        .iter()
        .map(|item| item.quantity as f64 * item.unit_price.unwrap_or(0.0))
        .sum();
    let with_price = items
        .iter()
        .filter(|item| item.unit_price.is_some_and(|p| p > 0.0))
        .count();
    let price_completeness = if total_items > 0 {
        (with_price as f64 / total_items as f64 * 100.0).round() as u32
    } else {
        0
    };

    BomStats {
        total_items,
        total_quantity: items.iter().map(|item| item.quantity).sum(),
        total_cost,
        currency: DEFAULT_CURRENCY.to_string(),
        price_completeness,
    }
}

/// Format an amount for display: at least 2 and at most 4 fractional
/// digits, followed by the currency code.
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let mut digits = format!("{amount:.4}");
    while digits.ends_with('0') {
        let without = digits.len() - 1;
        // Stop once only two decimals remain
        let decimals = digits.len() - digits.find('.').unwrap_or(without) - 1;
        if decimals <= 2 {
            break;
        }
        digits.truncate(without);
    }
    format!("{digits} {currency}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Supplier;

    fn item(quantity: i64, unit_price: Option<f64>) -> BomLineItem {
        BomLineItem {
            quantity,
            unit_price,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_pricing_flags_rows() {
        let items = vec![
            item(2, Some(1.0)),
            item(0, Some(1.0)),
            item(1, Some(-0.5)),
            item(1, Some(20_000.0)),
        ];
        let report = validate_pricing(&items);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                "Row 2: Quantity must be positive".to_string(),
                "Row 3: Unit price cannot be negative".to_string(),
                "Row 4: Unit price seems unusually high".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_counts_all_lines() {
        let items = vec![item(2, Some(1.0)), item(0, None), item(-1, None)];
        let summary = get_cost_summary(&items);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_quantity, 1);
        assert!(summary.has_pricing);
    }

    #[test]
    fn test_summary_counts_all_suppliers_not_just_primary() {
        let mut a = item(1, None);
        a.suppliers = vec![Supplier::named("LCSC"), Supplier::named("Mouser")];
        let mut b = item(1, None);
        b.suppliers = vec![Supplier::named("LCSC"), Supplier::named("")];

        let summary = get_cost_summary(&[a, b]);
        assert_eq!(summary.unique_suppliers, 2);
        assert!(!summary.has_pricing);
    }

    #[test]
    fn test_stats_completeness() {
        let items = vec![item(2, Some(1.0)), item(1, None), item(1, Some(0.0))];
        let stats = bom_stats(&items);
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.price_completeness, 33);
        assert_eq!(stats.total_cost, 2.0);

        assert_eq!(bom_stats(&[]).price_completeness, 0);
    }

    #[test]
    fn test_format_currency_digits() {
        assert_eq!(format_currency(9.0, "EUR"), "9.00 EUR");
        assert_eq!(format_currency(0.1234, "EUR"), "0.1234 EUR");
        assert_eq!(format_currency(1.25, "USD"), "1.25 USD");
        assert_eq!(format_currency(1.2, "EUR"), "1.20 EUR");
    }
}
