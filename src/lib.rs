//! **A library for working with electronics Bills of Materials (BOMs).**
//!
//! `bom-tools` provides structural diffing of BOM line-item lists, lenient
//! CSV import with column-mapping heuristics, and pricing roll-ups. It
//! powers both a command-line interface and a Rust library for embedding
//! BOM analysis into other applications.
//!
//! ## Key Features
//!
//! - **Structural Diffing**: Compares two line-item lists keyed by
//!   schematic reference + MPN and reports added, removed, and changed
//!   items with field-level before/after patches.
//! - **Lenient CSV Import**: Guesses a header→field mapping from common
//!   column names, validates it, and coerces cells with a zero fallback
//!   plus per-cell warnings so bad data stays visible.
//! - **Pricing Roll-ups**: Cost totals, per-supplier breakdowns with
//!   percentages, sanity checks, and completeness metrics.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The central [`BomLineItem`] record every operation
//!   consumes and produces. Lists are plain `Vec`s owned by the caller;
//!   the core only reads them and returns fresh collections.
//! - **[`diff`]**: Home of the [`DiffEngine`], plus [`apply_diff`] to
//!   replay a diff and [`format_diff`] for text summaries.
//! - **[`csv`]**: Naive CSV parsing, the mapping heuristic, and row→item
//!   import.
//! - **[`pricing`]**: Cost aggregation and validation.
//! - **[`reports`]**: Summary, JSON, and CSV output generators.
//!
//! ## Getting Started: Diffing Two BOMs
//!
//! ```
//! use bom_tools::{BomLineItem, DiffEngine};
//!
//! let old = vec![BomLineItem {
//!     reference: Some("R1".to_string()),
//!     mpn: Some("RC0603FR-0710KL".to_string()),
//!     quantity: 4,
//!     ..Default::default()
//! }];
//! let mut new = old.clone();
//! new[0].quantity = 8;
//!
//! let diff = DiffEngine::new().diff(&old, &new);
//! assert_eq!(diff.changed.len(), 1);
//! ```
//!
//! ## Importing a CSV
//!
//! ```
//! use bom_tools::csv::{import_rows, parse_csv_str, suggest_column_mapping};
//!
//! let parsed = parse_csv_str("Designator,Qty,Unit Price\nR1,4,0.013\n");
//! let mapping = suggest_column_mapping(&parsed.headers);
//! let outcome = import_rows(&parsed.rows, &mapping);
//! assert_eq!(outcome.items.len(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: i64/usize↔f64 casts are pervasive in cost math and
    // all values are interactive-scale in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors sections are aspirational for handler fns
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod config;
pub mod csv;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod pricing;
pub mod reports;

// Re-export main types for convenience
pub use config::{DiffConfig, ExportConfig, ImportConfig, OutputConfig, PriceConfig, StatsConfig};
pub use diff::{apply_diff, format_diff, BomDiff, DiffEngine, ItemChange, ItemPatch};
pub use error::{BomToolsError, Result, ValidationReport};
pub use model::{BomLineItem, ItemKey, ItemKeyer, RefMpnKeyer, Supplier, DEFAULT_CURRENCY};
pub use pricing::{
    calculate_line_cost, calculate_total_cost, get_cost_summary, validate_pricing, CostBreakdown,
    CostSummary, SupplierCost,
};
pub use reports::{ReportFormat, ReportGenerator};
