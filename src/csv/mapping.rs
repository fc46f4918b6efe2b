//! Column-mapping heuristics for CSV import.
//!
//! [`suggest_column_mapping`] guesses a header→field mapping from an
//! ordered substring predicate chain. The chain order is behavior, not
//! style: "Unit Cost Notes" maps to `unitPrice` because price-like tokens
//! are tested before note-like tokens.

use super::parse::CsvRow;
use crate::error::ValidationReport;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows shown by [`get_mapping_preview`] by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Canonical BOM fields a CSV column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BomField {
    Reference,
    Mpn,
    Footprint,
    Quantity,
    UnitPrice,
    Currency,
    Supplier,
    Notes,
    Datasheet,
    Image,
}

impl BomField {
    /// Wire name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Mpn => "mpn",
            Self::Footprint => "footprint",
            Self::Quantity => "quantity",
            Self::UnitPrice => "unitPrice",
            Self::Currency => "currency",
            Self::Supplier => "supplier",
            Self::Notes => "notes",
            Self::Datasheet => "datasheet",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for BomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from raw CSV header to canonical field, in header order.
pub type ColumnMapping = IndexMap<String, BomField>;

/// Suggest a mapping for the given headers.
///
/// Each header is lowercased and trimmed, then tested against an ordered
/// predicate chain; the first match wins and unmatched headers are left
/// unmapped.
#[must_use]
pub fn suggest_column_mapping(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();

    for header in headers {
        let normalized = header.to_lowercase().trim().to_string();
        let n = normalized.as_str();

        let field = if n.contains("ref") || n.contains("designator") || n == "r" {
            Some(BomField::Reference)
        } else if n.contains("mpn") || n.contains("part") || n.contains("number") {
            Some(BomField::Mpn)
        } else if n.contains("footprint") || n.contains("package") || n.contains("case") {
            Some(BomField::Footprint)
        } else if n.contains("qty") || n.contains("quantity") || n == "q" {
            Some(BomField::Quantity)
        } else if n.contains("price") || n.contains("cost") || n.contains("unit") {
            Some(BomField::UnitPrice)
        } else if n.contains("currency") || n.contains("curr") {
            Some(BomField::Currency)
        } else if n.contains("supplier") || n.contains("vendor") || n.contains("mfg") {
            Some(BomField::Supplier)
        } else if n.contains("note") || n.contains("comment") || n.contains("desc") {
            Some(BomField::Notes)
        } else if n.contains("datasheet") || n.contains("spec") {
            Some(BomField::Datasheet)
        } else if n.contains("image") || n.contains("photo") || n.contains("pic") {
            Some(BomField::Image)
        } else {
            None
        };

        if let Some(field) = field {
            mapping.insert(header.clone(), field);
        }
    }

    mapping
}

/// Validate a mapping: a `quantity` target is required and no canonical
/// field may be the target of more than one header.
#[must_use]
pub fn validate_mapping(mapping: &ColumnMapping) -> ValidationReport {
    let mut errors = Vec::new();

    if !mapping.values().any(|field| *field == BomField::Quantity) {
        errors.push("Quantity field is required".to_string());
    }

    let mut counts: IndexMap<BomField, usize> = IndexMap::new();
    for field in mapping.values() {
        *counts.entry(*field).or_insert(0) += 1;
    }
    for (field, count) in &counts {
        if *count > 1 {
            errors.push(format!("Field \"{field}\" is mapped to multiple columns"));
        }
    }

    ValidationReport::from_errors(errors)
}

/// A typed record produced by applying a mapping to one CSV row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A numeric cell that could not be parsed and fell back to 0.
///
/// The fallback itself is deliberate import leniency; the warning keeps
/// the signal so a UI can report "N values could not be parsed and were
/// set to 0" instead of silently admitting zero-cost items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellWarning {
    /// 1-indexed data row number.
    pub row: usize,
    pub column: String,
    pub field: BomField,
    pub value: String,
}

impl fmt::Display for CellWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: column \"{}\" value \"{}\" could not be parsed as {}; defaulting to 0",
            self.row,
            self.column,
            self.value,
            if self.field == BomField::Quantity {
                "an integer"
            } else {
                "a number"
            }
        )
    }
}

/// Result of applying a mapping: typed records plus per-cell warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappedRows {
    pub records: Vec<MappedRecord>,
    pub warnings: Vec<CellWarning>,
}

/// Apply a mapping to the given rows.
///
/// Missing and empty cells are skipped. `quantity` parses as an integer
/// and `unitPrice` as a float, both with a 0 fallback on parse failure
/// (recorded in `warnings`); all other fields pass through as trimmed
/// strings.
#[must_use]
pub fn apply_mapping(rows: &[CsvRow], mapping: &ColumnMapping) -> MappedRows {
    let mut result = MappedRows::default();

    for (index, row) in rows.iter().enumerate() {
        let mut record = MappedRecord::default();

        for (column, field) in mapping {
            let Some(value) = row.get(column) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            match field {
                BomField::Quantity => {
                    let parsed = parse_int_prefix(value);
                    if parsed.is_none() {
                        result.warnings.push(CellWarning {
                            row: index + 1,
                            column: column.clone(),
                            field: *field,
                            value: value.clone(),
                        });
                    }
                    record.quantity = Some(parsed.unwrap_or(0));
                }
                BomField::UnitPrice => {
                    let parsed = parse_float_prefix(value);
                    if parsed.is_none() {
                        result.warnings.push(CellWarning {
                            row: index + 1,
                            column: column.clone(),
                            field: *field,
                            value: value.clone(),
                        });
                    }
                    record.unit_price = Some(parsed.unwrap_or(0.0));
                }
                BomField::Reference => record.reference = Some(value.trim().to_string()),
                BomField::Mpn => record.mpn = Some(value.trim().to_string()),
                BomField::Footprint => record.footprint = Some(value.trim().to_string()),
                BomField::Currency => record.currency = Some(value.trim().to_string()),
                BomField::Supplier => record.supplier = Some(value.trim().to_string()),
                BomField::Notes => record.notes = Some(value.trim().to_string()),
                BomField::Datasheet => record.datasheet = Some(value.trim().to_string()),
                BomField::Image => record.image = Some(value.trim().to_string()),
            }
        }

        result.records.push(record);
    }

    result
}

/// Headers the mapping leaves unmapped.
#[must_use]
pub fn get_unmapped_columns(headers: &[String], mapping: &ColumnMapping) -> Vec<String> {
    headers
        .iter()
        .filter(|header| !mapping.contains_key(*header))
        .cloned()
        .collect()
}

/// Apply the mapping to only the first `max_rows` rows, for UI feedback.
#[must_use]
pub fn get_mapping_preview(
    rows: &[CsvRow],
    mapping: &ColumnMapping,
    max_rows: usize,
) -> MappedRows {
    let end = rows.len().min(max_rows);
    apply_mapping(&rows[..end], mapping)
}

/// Parse the leading integer prefix of a cell, the way spreadsheet
/// imports tolerate trailing units ("5 pcs" parses as 5). Returns `None`
/// when no digits lead the value.
fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// Parse the leading decimal prefix of a cell ("1.25 EUR" parses as
/// 1.25). Returns `None` when no numeric prefix exists.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let has_int_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
        } else if !has_int_digits {
            return None;
        }
    } else if !has_int_digits {
        return None;
    }
    trimmed[..end].parse().ok()
}
