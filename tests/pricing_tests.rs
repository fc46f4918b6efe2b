//! Pricing aggregation integration tests.

use bom_tools::{
    calculate_line_cost, calculate_total_cost, get_cost_summary, validate_pricing, BomLineItem,
    Supplier,
};
use bom_tools::pricing::{bom_stats, calculate_total_cost_in};

fn item(quantity: i64, unit_price: Option<f64>) -> BomLineItem {
    BomLineItem {
        quantity,
        unit_price,
        ..Default::default()
    }
}

fn supplied(quantity: i64, unit_price: Option<f64>, supplier: &str) -> BomLineItem {
    BomLineItem {
        suppliers: vec![Supplier::named(supplier)],
        ..item(quantity, unit_price)
    }
}

// ============================================================================
// Totals
// ============================================================================

#[test]
fn zero_quantity_items_are_excluded_from_totals() {
    let items = vec![
        item(2, Some(1.5)),
        item(0, Some(100.0)),
        item(3, Some(2.0)),
    ];
    let breakdown = calculate_total_cost(&items);
    assert_eq!(breakdown.total_cost, 9.0);
    assert_eq!(breakdown.item_count, 2);
    assert_eq!(breakdown.currency, "EUR");
}

#[test]
fn missing_prices_count_as_zero() {
    let items = vec![item(5, None), item(2, Some(0.5))];
    let breakdown = calculate_total_cost(&items);
    assert_eq!(breakdown.total_cost, 1.0);
    assert_eq!(breakdown.item_count, 2);
}

#[test]
fn caller_supplied_currency_is_nominal_only() {
    let mut items = vec![item(1, Some(3.0))];
    items[0].currency = Some("USD".to_string());
    // No conversion happens; the reporting currency is whatever the
    // caller asks for
    let breakdown = calculate_total_cost_in(&items, "GBP");
    assert_eq!(breakdown.currency, "GBP");
    assert_eq!(breakdown.total_cost, 3.0);
}

#[test]
fn supplier_breakdown_buckets_and_sorts() {
    let items = vec![
        supplied(2, Some(1.0), "LCSC"),
        supplied(3, Some(1.0), "LCSC"),
        supplied(1, Some(10.0), "Mouser"),
        item(1, Some(0.5)),
    ];
    let breakdown = calculate_total_cost(&items);

    let names: Vec<_> = breakdown
        .supplier_breakdown
        .iter()
        .map(|s| s.supplier.as_str())
        .collect();
    assert_eq!(names, vec!["Mouser", "LCSC", "Unknown"]);

    let lcsc = &breakdown.supplier_breakdown[1];
    assert_eq!(lcsc.cost, 5.0);
    assert_eq!(lcsc.item_count, 5);
    // 5 / 15.5 * 100 = 32.258... -> 32.26
    assert_eq!(lcsc.percentage, 32.26);
}

#[test]
fn single_supplier_gets_full_percentage() {
    let items = vec![supplied(2, Some(1.0), "LCSC"), supplied(3, Some(1.0), "LCSC")];
    let breakdown = calculate_total_cost(&items);
    assert_eq!(breakdown.supplier_breakdown.len(), 1);
    let lcsc = &breakdown.supplier_breakdown[0];
    assert_eq!((lcsc.cost, lcsc.item_count, lcsc.percentage), (5.0, 5, 100.0));
}

#[test]
fn zero_total_cost_produces_zero_percentages_not_nan() {
    let items = vec![supplied(4, None, "LCSC"), item(2, None)];
    let breakdown = calculate_total_cost(&items);
    assert_eq!(breakdown.total_cost, 0.0);
    for supplier in &breakdown.supplier_breakdown {
        assert_eq!(supplier.percentage, 0.0);
        assert!(supplier.percentage.is_finite());
    }
}

#[test]
fn line_cost_rounds_to_four_decimals() {
    let line = item(3, Some(0.33333));
    assert_eq!(calculate_line_cost(&line), 1.0);
    assert_eq!(calculate_line_cost(&item(-1, Some(5.0))), 0.0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn pricing_validation_reports_row_numbers() {
    let items = vec![
        item(1, Some(1.0)),
        item(-2, Some(1.0)),
        item(1, Some(-3.0)),
        item(1, Some(10_001.0)),
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
fn clean_pricing_passes() {
    let items = vec![item(1, Some(1.0)), item(2, None)];
    let report = validate_pricing(&items);
    // Missing prices are allowed; only present-and-bad values are flagged
    assert!(report.is_valid);
}

// ============================================================================
// Summary vs totals asymmetry
// ============================================================================

#[test]
fn summary_counts_lines_while_totals_count_contributors() {
    let items = vec![item(2, Some(1.0)), item(0, Some(1.0)), item(-1, None)];

    let summary = get_cost_summary(&items);
    let breakdown = calculate_total_cost(&items);

    // totalItems counts every line; itemCount only quantity > 0 lines
    assert_eq!(summary.total_items, 3);
    assert_eq!(breakdown.item_count, 1);
    assert_ne!(summary.total_items, breakdown.item_count);

    // Negative quantities reduce the summed quantity
    assert_eq!(summary.total_quantity, 1);
}

#[test]
fn summary_supplier_count_spans_full_lists() {
    let mut a = item(1, None);
    a.suppliers = vec![Supplier::named("LCSC"), Supplier::named("Mouser")];
    let b = supplied(1, Some(0.1), "LCSC");

    let summary = get_cost_summary(&[a, b]);
    assert_eq!(summary.unique_suppliers, 2);
    assert!(summary.has_pricing);
}

// ============================================================================
// Dashboard stats
// ============================================================================

#[test]
fn stats_completeness_rounds_to_whole_percent() {
    let items = vec![item(1, Some(1.0)), item(1, None), item(1, None)];
    let stats = bom_stats(&items);
    assert_eq!(stats.price_completeness, 33);
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.currency, "EUR");
}

#[test]
fn stats_on_empty_bom_are_all_zero() {
    let stats = bom_stats(&[]);
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.total_quantity, 0);
    assert_eq!(stats.total_cost, 0.0);
    assert_eq!(stats.price_completeness, 0);
}

#[test]
fn stats_total_includes_zero_quantity_lines() {
    // getStats sums every line, unlike calculateTotalCost
    let items = vec![item(2, Some(1.0)), item(0, Some(9.0))];
    let stats = bom_stats(&items);
    assert_eq!(stats.total_cost, 2.0);
    assert_eq!(stats.total_quantity, 2);
}
