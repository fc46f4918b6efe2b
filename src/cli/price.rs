//! Price command handler.

use crate::config::PriceConfig;
use crate::pipeline::{exit_codes, load_bom, write_output, OutputTarget};
use crate::pricing::{calculate_total_cost, calculate_total_cost_in, validate_pricing};
use crate::reports::{reporter_for, ReportGenerator as _};
use anyhow::Result;

/// Run the price command, returning the desired exit code.
///
/// Sanity findings are warnings by default; `--check` promotes them to
/// exit code 2 while still printing the breakdown.
pub fn run_price(config: PriceConfig) -> Result<i32> {
    let items = load_bom(&config.bom)?;

    let findings = validate_pricing(&items);
    for error in &findings.errors {
        tracing::warn!("{error}");
    }

    let breakdown = match &config.currency {
        Some(currency) => calculate_total_cost_in(&items, currency),
        None => calculate_total_cost(&items),
    };

    let reporter = reporter_for(config.output.format);
    let report = reporter.generate_pricing_report(&breakdown)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &report)?;

    if config.check && !findings.is_valid {
        return Ok(exit_codes::VALIDATION_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}
