//! CSV report generator and BOM export format.
//!
//! Export rows use the fixed 9-column layout the project exporter has
//! always produced; every cell is double-quote-wrapped.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::BomDiff;
use crate::model::BomLineItem;
use crate::pricing::CostBreakdown;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_diff_report(&self, diff: &BomDiff) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str("Change,Id,Reference,MPN,Quantity,Fields\n");

        for item in &diff.added {
            write_item_line(&mut content, "Added", item);
        }
        for item in &diff.removed {
            write_item_line(&mut content, "Removed", item);
        }
        for change in &diff.changed {
            content.push_str(&format!(
                "Modified,\"{}\",\"-\",\"-\",\"-\",\"{}\"\n",
                escape_csv(&change.id),
                change.before.changed_fields().join("; ")
            ));
        }

        Ok(content)
    }

    fn generate_bom_report(&self, items: &[BomLineItem]) -> Result<String, ReportError> {
        let headers = [
            "Reference",
            "MPN",
            "Footprint",
            "Quantity",
            "Unit Price",
            "Currency",
            "Total Price",
            "Supplier",
            "Notes",
        ];
        let mut content = String::new();
        content.push_str(&quote_row(&headers.map(String::from)));
        content.push('\n');

        for item in items {
            let unit_price = item.unit_price.unwrap_or(0.0);
            let total_price = item.quantity as f64 * unit_price;
            let cells = [
                item.reference.clone().unwrap_or_default(),
                item.mpn.clone().unwrap_or_default(),
                item.footprint.clone().unwrap_or_default(),
                item.quantity.to_string(),
                format!("{unit_price}"),
                item.currency_or_default().to_string(),
                format!("{total_price:.2}"),
                item.primary_supplier().unwrap_or_default().to_string(),
                item.notes.clone().unwrap_or_default(),
            ];
            content.push_str(&quote_row(&cells));
            content.push('\n');
        }

        Ok(content)
    }

    fn generate_pricing_report(&self, breakdown: &CostBreakdown) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str("Supplier,Cost,Currency,Items,Percentage\n");
        for supplier in &breakdown.supplier_breakdown {
            content.push_str(&format!(
                "\"{}\",{},\"{}\",{},{}\n",
                escape_csv(&supplier.supplier),
                supplier.cost,
                breakdown.currency,
                supplier.item_count,
                supplier.percentage
            ));
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn write_item_line(content: &mut String, change: &str, item: &BomLineItem) {
    content.push_str(&format!(
        "{},\"{}\",\"{}\",\"{}\",{},\"-\"\n",
        change,
        item.id.as_deref().map(escape_csv).unwrap_or_default(),
        item.reference.as_deref().map(escape_csv).unwrap_or_default(),
        item.mpn.as_deref().map(escape_csv).unwrap_or_default(),
        item.quantity
    ));
}

fn quote_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", escape_csv(cell)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape a string for CSV embedding: double-quote doubling, plus newline
/// flattening since fields are wrapped in double quotes.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}

/// Default export filename: `{project}_BOM_{YYYY-MM-DD}.csv`.
#[must_use]
pub fn export_filename(project: &str) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    format!("{project}_BOM_{date}.csv")
}
