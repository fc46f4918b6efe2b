//! Pricing roll-ups over line-item lists.
//!
//! All functions here are pure aggregations: no price resolution (the
//! caller supplies effective unit prices) and no currency conversion (a
//! single nominal reporting currency is assumed).

mod summary;
mod total;

pub use summary::{bom_stats, format_currency, get_cost_summary, validate_pricing, BomStats, CostSummary};
pub use total::{
    calculate_line_cost, calculate_total_cost, calculate_total_cost_in, CostBreakdown, SupplierCost,
};
