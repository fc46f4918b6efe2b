//! Report generation for diff, pricing, and export output.
//!
//! Three output formats are supported:
//! - Summary: compact shell-friendly text
//! - JSON: structured data for programmatic integration
//! - CSV: spreadsheet import and the project BOM export format

mod csv;
mod json;
mod summary;

pub use csv::{export_filename, CsvReporter};
pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::diff::BomDiff;
use crate::model::BomLineItem;
use crate::pricing::CostBreakdown;
use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Summary,
    Json,
    Csv,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Summary => "summary",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a diff result
    fn generate_diff_report(&self, diff: &BomDiff) -> Result<String, ReportError>;

    /// Render a full BOM (view/export mode)
    fn generate_bom_report(&self, items: &[BomLineItem]) -> Result<String, ReportError>;

    /// Render a cost breakdown
    fn generate_pricing_report(&self, breakdown: &CostBreakdown) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Look up the reporter for a format.
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
