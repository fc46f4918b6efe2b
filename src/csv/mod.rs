//! Lenient CSV import: naive parsing, column-mapping heuristics, and
//! conversion of mapped rows into line items.
//!
//! The parser intentionally performs naive comma splitting with no
//! quoted-field handling; that is the import wire behavior, matched by
//! the quote-wrapping exporter in [`crate::reports`].

mod import;
mod mapping;
mod parse;

pub use import::{import_rows, ImportOutcome};
pub use mapping::{
    apply_mapping, get_mapping_preview, get_unmapped_columns, suggest_column_mapping,
    validate_mapping, BomField, CellWarning, ColumnMapping, MappedRecord, MappedRows,
    DEFAULT_PREVIEW_ROWS,
};
pub use parse::{parse_csv_str, validate_csv_data, CsvRow, ParsedCsv};
