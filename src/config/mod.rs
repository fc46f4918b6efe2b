//! Configuration types for bom-tools operations.
//!
//! `main.rs` assembles these from CLI arguments and passes them to the
//! testable `cli::run_*` handlers.

use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Output routing shared by every command.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
}

/// Configuration for the `diff` command.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Path to the old/baseline BOM (JSON line-item list)
    pub old: PathBuf,
    /// Path to the new BOM
    pub new: PathBuf,
    pub output: OutputConfig,
    /// Exit with code 1 when any changes are detected
    pub fail_on_change: bool,
    pub quiet: bool,
}

/// Configuration for the `import` command.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Path to the CSV file
    pub csv: PathBuf,
    /// Optional mapping file (JSON header→field object); headers are
    /// auto-mapped when absent
    pub mapping: Option<PathBuf>,
    /// Show a mapped preview of the first rows instead of importing
    pub preview: bool,
    /// Rows shown in preview mode
    pub preview_rows: usize,
    pub output: OutputConfig,
    pub quiet: bool,
}

/// Configuration for the `export` command.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the BOM (JSON line-item list)
    pub bom: PathBuf,
    /// Project name used for the suggested export filename
    pub project: Option<String>,
    pub output: OutputConfig,
}

/// Configuration for the `price` command.
#[derive(Debug, Clone)]
pub struct PriceConfig {
    /// Path to the BOM (JSON line-item list)
    pub bom: PathBuf,
    /// Reporting currency override
    pub currency: Option<String>,
    /// Exit with code 2 when pricing sanity checks fail
    pub check: bool,
    pub output: OutputConfig,
}

/// Configuration for the `stats` command.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Path to the BOM (JSON line-item list)
    pub bom: PathBuf,
    pub output: OutputConfig,
}
