//! Shared orchestration for CLI handlers: BOM/mapping/CSV loading and
//! output routing.

use crate::csv::{parse_csv_str, ColumnMapping, ParsedCsv};
use crate::error::{BomToolsError, Result};
use crate::model::BomLineItem;
use std::path::{Path, PathBuf};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - nothing notable
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// Validation failed (mapping, CSV shape, or pricing checks)
    pub const VALIDATION_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Where report output goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }
}

/// Write report content to the target.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{content}");
            if !content.ends_with('\n') && !content.is_empty() {
                println!();
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| BomToolsError::io(path.clone(), e))?;
            tracing::info!("Report written to {}", path.display());
            Ok(())
        }
    }
}

/// Load a BOM file: a JSON array of line items.
pub fn load_bom(path: &Path) -> Result<Vec<BomLineItem>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BomToolsError::io(path.to_path_buf(), e))?;
    let items: Vec<BomLineItem> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} line items from {}", items.len(), path.display());
    Ok(items)
}

/// Load a column-mapping file: a JSON object of header → canonical field.
pub fn load_mapping(path: &Path) -> Result<ColumnMapping> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BomToolsError::io(path.to_path_buf(), e))?;
    let mapping: ColumnMapping = serde_json::from_str(&content)?;
    Ok(mapping)
}

/// Read and parse a CSV file. Parsing itself is total; only I/O fails.
pub fn load_csv(path: &Path) -> Result<ParsedCsv> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BomToolsError::io(path.to_path_buf(), e))?;
    Ok(parse_csv_str(&content))
}
