//! Stats command handler.

use crate::config::StatsConfig;
use crate::pipeline::{exit_codes, load_bom, write_output, OutputTarget};
use crate::pricing::{bom_stats, format_currency, get_cost_summary};
use crate::reports::ReportFormat;
use anyhow::Result;
use std::fmt::Write as _;

/// Run the stats command, returning the desired exit code.
pub fn run_stats(config: StatsConfig) -> Result<i32> {
    let items = load_bom(&config.bom)?;

    let stats = bom_stats(&items);
    let summary = get_cost_summary(&items);

    let content = match config.output.format {
        ReportFormat::Json => {
            let combined = serde_json::json!({
                "stats": stats,
                "summary": summary,
            });
            serde_json::to_string_pretty(&combined)?
        }
        ReportFormat::Csv => {
            let mut out = String::new();
            out.push_str("Metric,Value\n");
            writeln!(out, "Total items,{}", stats.total_items)?;
            writeln!(out, "Total quantity,{}", stats.total_quantity)?;
            writeln!(out, "Total cost,{}", stats.total_cost)?;
            writeln!(out, "Currency,{}", stats.currency)?;
            writeln!(out, "Price completeness,{}%", stats.price_completeness)?;
            writeln!(out, "Unique suppliers,{}", summary.unique_suppliers)?;
            out
        }
        ReportFormat::Summary => {
            let mut out = String::new();
            writeln!(out, "Items:              {}", stats.total_items)?;
            writeln!(out, "Total quantity:     {}", stats.total_quantity)?;
            writeln!(
                out,
                "Total cost:         {}",
                format_currency(stats.total_cost, &stats.currency)
            )?;
            writeln!(out, "Price completeness: {}%", stats.price_completeness)?;
            writeln!(out, "Unique suppliers:   {}", summary.unique_suppliers)?;
            writeln!(
                out,
                "Pricing data:       {}",
                if summary.has_pricing { "yes" } else { "no" }
            )?;
            out
        }
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &content)?;

    Ok(exit_codes::SUCCESS)
}
