//! Human-readable diff rendering.

use super::result::BomDiff;
use crate::model::BomLineItem;

/// Render a diff as a deterministic text summary: section counts, one
/// line per added/removed item (ref, mpn, quantity), one line per changed
/// item listing the changed field names.
#[must_use]
pub fn format_diff(diff: &BomDiff) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !diff.added.is_empty() {
        lines.push(format!("Added {} items:", diff.added.len()));
        for item in &diff.added {
            lines.push(format!("  + {}", item_line(item)));
        }
    }

    if !diff.removed.is_empty() {
        lines.push(format!("Removed {} items:", diff.removed.len()));
        for item in &diff.removed {
            lines.push(format!("  - {}", item_line(item)));
        }
    }

    if !diff.changed.is_empty() {
        lines.push(format!("Modified {} items:", diff.changed.len()));
        for change in &diff.changed {
            lines.push(format!(
                "  ~ {}: {}",
                change.id,
                change.before.changed_fields().join(", ")
            ));
        }
    }

    lines.join("\n")
}

fn item_line(item: &BomLineItem) -> String {
    format!(
        "{} ({}) x{}",
        item.reference.as_deref().unwrap_or("N/A"),
        item.mpn.as_deref().unwrap_or("N/A"),
        item.quantity
    )
}
