//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each returns the desired process
//! exit code and leaves calling `std::process::exit` to the binary.

mod diff;
mod export;
mod import;
mod price;
mod stats;

pub use diff::run_diff;
pub use export::run_export;
pub use import::run_import;
pub use price::run_price;
pub use stats::run_stats;
