//! Naive CSV parsing and shape validation.

use crate::error::ValidationReport;
use indexmap::IndexMap;

/// One data row, keyed by header. Cells missing from short rows are
/// simply absent.
pub type CsvRow = IndexMap<String, String>;

/// Parsed CSV text: trimmed headers plus header-keyed rows.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

/// Parse CSV text with naive splitting: lines on `\n` (blank lines
/// dropped), cells on `,`, everything trimmed. No quoted-field or
/// embedded-comma handling. Total over any input.
#[must_use]
pub fn parse_csv_str(text: &str) -> ParsedCsv {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return ParsedCsv::default();
    };

    let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

    let rows = lines
        .map(|line| {
            headers
                .iter()
                .zip(line.split(','))
                .map(|(header, cell)| (header.clone(), cell.trim().to_string()))
                .collect()
        })
        .collect();

    ParsedCsv { headers, rows }
}

/// Validate parsed CSV shape before mapping: headers present, data rows
/// present, and at least one quantity-like header.
#[must_use]
pub fn validate_csv_data(data: &ParsedCsv) -> ValidationReport {
    let mut errors = Vec::new();

    if data.headers.is_empty() {
        errors.push("CSV file has no headers".to_string());
    }

    if data.rows.is_empty() {
        errors.push("CSV file has no data rows".to_string());
    }

    let has_quantity = data.headers.iter().any(|h| {
        let lower = h.to_lowercase();
        lower.contains("qty") || lower.contains("quantity")
    });

    if !has_quantity {
        errors.push(
            "No quantity column found. Expected headers containing \"qty\" or \"quantity\""
                .to_string(),
        );
    }

    ValidationReport::from_errors(errors)
}
