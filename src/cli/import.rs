//! Import command handler.

use crate::config::ImportConfig;
use crate::csv::{
    get_mapping_preview, get_unmapped_columns, import_rows, suggest_column_mapping,
    validate_csv_data, validate_mapping,
};
use crate::pipeline::{exit_codes, load_csv, load_mapping, write_output, OutputTarget};
use crate::reports::{reporter_for, ReportFormat, ReportGenerator as _};
use anyhow::Result;

/// Run the import command, returning the desired exit code.
///
/// The CSV is shape-checked, a mapping is loaded or suggested and
/// validated, and rows are converted to line items. Validation findings
/// exit with code 2; numeric parse fallbacks are warnings only.
pub fn run_import(config: ImportConfig) -> Result<i32> {
    let parsed = load_csv(&config.csv)?;

    let shape = validate_csv_data(&parsed);
    if !shape.is_valid {
        for error in &shape.errors {
            tracing::error!("{error}");
        }
        return Ok(exit_codes::VALIDATION_FAILED);
    }

    let mapping = match &config.mapping {
        Some(path) => load_mapping(path)?,
        None => {
            let suggested = suggest_column_mapping(&parsed.headers);
            if !config.quiet {
                for (header, field) in &suggested {
                    tracing::info!("Mapped column \"{header}\" -> {field}");
                }
            }
            suggested
        }
    };

    let mapping_report = validate_mapping(&mapping);
    if !mapping_report.is_valid {
        for error in &mapping_report.errors {
            tracing::error!("{error}");
        }
        return Ok(exit_codes::VALIDATION_FAILED);
    }

    let unmapped = get_unmapped_columns(&parsed.headers, &mapping);
    if !unmapped.is_empty() && !config.quiet {
        tracing::warn!("Ignoring unmapped columns: {}", unmapped.join(", "));
    }

    let target = OutputTarget::from_option(config.output.file.clone());

    if config.preview {
        let preview = get_mapping_preview(&parsed.rows, &mapping, config.preview_rows);
        let content = serde_json::to_string_pretty(&preview)?;
        write_output(&target, &content)?;
        return Ok(exit_codes::SUCCESS);
    }

    let outcome = import_rows(&parsed.rows, &mapping);

    if !outcome.warnings.is_empty() {
        tracing::warn!(
            "{} values could not be parsed and were set to 0",
            outcome.warnings.len()
        );
        for warning in &outcome.warnings {
            tracing::debug!("{warning}");
        }
    }
    if !config.quiet {
        tracing::info!(
            "Imported {} items ({} rows skipped)",
            outcome.items.len(),
            outcome.skipped
        );
    }

    let content = match config.output.format {
        ReportFormat::Summary => format!(
            "Imported {} items ({} rows skipped, {} parse warnings)\n",
            outcome.items.len(),
            outcome.skipped,
            outcome.warnings.len()
        ),
        format => reporter_for(format).generate_bom_report(&outcome.items)?,
    };
    write_output(&target, &content)?;

    Ok(exit_codes::SUCCESS)
}
