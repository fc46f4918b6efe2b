//! Export command handler.

use crate::config::ExportConfig;
use crate::pipeline::{exit_codes, load_bom, write_output, OutputTarget};
use crate::reports::{export_filename, CsvReporter, ReportGenerator};
use anyhow::Result;

/// Run the export command, returning the desired exit code.
///
/// Always emits the fixed 9-column CSV export format.
pub fn run_export(config: ExportConfig) -> Result<i32> {
    let items = load_bom(&config.bom)?;

    let content = CsvReporter::new().generate_bom_report(&items)?;

    if config.output.file.is_none() {
        if let Some(project) = &config.project {
            tracing::info!("Suggested filename: {}", export_filename(project));
        }
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &content)?;

    Ok(exit_codes::SUCCESS)
}
