//! Compact text summary reporter.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::{format_diff, BomDiff};
use crate::model::BomLineItem;
use crate::pricing::{format_currency, get_cost_summary, CostBreakdown};
use std::fmt::Write as _;

/// Shell-friendly summary reporter.
pub struct SummaryReporter;

impl SummaryReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(&self, diff: &BomDiff) -> Result<String, ReportError> {
        if !diff.has_changes() {
            return Ok("No changes detected.".to_string());
        }
        Ok(format_diff(diff))
    }

    fn generate_bom_report(&self, items: &[BomLineItem]) -> Result<String, ReportError> {
        let summary = get_cost_summary(items);
        let mut out = String::new();
        writeln!(out, "Items:            {}", summary.total_items)?;
        writeln!(out, "Total quantity:   {}", summary.total_quantity)?;
        writeln!(out, "Unique suppliers: {}", summary.unique_suppliers)?;
        writeln!(
            out,
            "Pricing data:     {}",
            if summary.has_pricing { "yes" } else { "no" }
        )?;
        Ok(out)
    }

    fn generate_pricing_report(&self, breakdown: &CostBreakdown) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(
            out,
            "Total cost: {} ({} countable items)",
            format_currency(breakdown.total_cost, &breakdown.currency),
            breakdown.item_count
        )?;
        for supplier in &breakdown.supplier_breakdown {
            writeln!(
                out,
                "  {:<20} {:>12}  x{:<6} {:>6.2}%",
                supplier.supplier,
                format_currency(supplier.cost, &breakdown.currency),
                supplier.item_count,
                supplier.percentage
            )?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate_total_cost;

    #[test]
    fn test_empty_diff_summary() {
        let report = SummaryReporter::new()
            .generate_diff_report(&BomDiff::default())
            .expect("report");
        assert_eq!(report, "No changes detected.");
    }

    #[test]
    fn test_pricing_summary_lists_suppliers() {
        let items = vec![BomLineItem {
            quantity: 2,
            unit_price: Some(1.5),
            ..Default::default()
        }];
        let breakdown = calculate_total_cost(&items);
        let report = SummaryReporter::new()
            .generate_pricing_report(&breakdown)
            .expect("report");
        assert!(report.contains("Total cost: 3.00 EUR"));
        assert!(report.contains("Unknown"));
    }
}
