//! Diff command handler.

use crate::config::DiffConfig;
use crate::diff::DiffEngine;
use crate::pipeline::{exit_codes, load_bom, write_output, OutputTarget};
use crate::reports::{reporter_for, ReportGenerator as _};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let old_items = load_bom(&config.old)?;
    let new_items = load_bom(&config.new)?;

    if !config.quiet {
        tracing::info!(
            "Comparing {} old items against {} new items",
            old_items.len(),
            new_items.len()
        );
    }

    let diff = DiffEngine::new().diff(&old_items, &new_items);

    let reporter = reporter_for(config.output.format);
    let report = reporter.generate_diff_report(&diff)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &report)?;

    if config.fail_on_change && diff.has_changes() {
        return Ok(exit_codes::CHANGES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}
