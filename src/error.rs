//! Unified error types for bom-tools.
//!
//! Hard failures (I/O, malformed JSON) are errors; data-quality findings
//! (mapping problems, pricing sanity checks, CSV shape issues) are reported
//! as [`ValidationReport`] values so the caller decides whether to block
//! or warn.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bom-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomToolsError {
    /// Errors while reading persisted BOM or mapping data
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors promoted to hard failures by the caller
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid column mapping: {0}")]
    InvalidMapping(String),
}

/// Convenient Result type for bom-tools operations
pub type Result<T> = std::result::Result<T, BomToolsError>;

impl BomToolsError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for BomToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BomToolsError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Structured validation outcome.
///
/// Mapping validation, pricing sanity checks, and CSV shape checks all
/// report through this type instead of returning `Err`; degenerate data
/// is a finding, not a failure.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A report with no findings.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a report from collected error messages.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BomToolsError::parse(
            "mapping file",
            ParseErrorKind::InvalidMapping("unknown field".to_string()),
        );
        assert!(err.to_string().contains("mapping file"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BomToolsError::io("/path/to/bom.json", io_err);
        assert!(err.to_string().contains("/path/to/bom.json"));
    }

    #[test]
    fn test_validation_report_from_errors() {
        let ok = ValidationReport::from_errors(Vec::new());
        assert!(ok.is_valid);

        let bad = ValidationReport::from_errors(vec!["Quantity field is required".to_string()]);
        assert!(!bad.is_valid);
        assert_eq!(bad.errors.len(), 1);
    }
}
