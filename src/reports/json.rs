//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::BomDiff;
use crate::model::BomLineItem;
use crate::pricing::CostBreakdown;
use serde::Serialize;

/// JSON report generator (pretty-printed).
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    fn pretty<T: Serialize>(value: &T) -> Result<String, ReportError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(&self, diff: &BomDiff) -> Result<String, ReportError> {
        Self::pretty(diff)
    }

    fn generate_bom_report(&self, items: &[BomLineItem]) -> Result<String, ReportError> {
        Self::pretty(&items)
    }

    fn generate_pricing_report(&self, breakdown: &CostBreakdown) -> Result<String, ReportError> {
        Self::pretty(breakdown)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
