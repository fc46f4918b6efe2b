//! Conversion of mapped CSV rows into line items.

use super::mapping::{apply_mapping, CellWarning, ColumnMapping, MappedRecord};
use super::parse::CsvRow;
use crate::model::{BomLineItem, Supplier};

/// Result of importing mapped rows.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub items: Vec<BomLineItem>,
    /// Records dropped for missing or zero quantity.
    pub skipped: usize,
    pub warnings: Vec<CellWarning>,
}

/// Map rows and build line items. Records without a usable quantity
/// (missing or 0 after coercion) are skipped, not imported as empty
/// lines.
#[must_use]
pub fn import_rows(rows: &[CsvRow], mapping: &ColumnMapping) -> ImportOutcome {
    let mapped = apply_mapping(rows, mapping);
    let mut outcome = ImportOutcome {
        warnings: mapped.warnings,
        ..Default::default()
    };

    for record in mapped.records {
        match line_item_from_record(record) {
            Some(item) => outcome.items.push(item),
            None => outcome.skipped += 1,
        }
    }

    outcome
}

/// Build a line item from one mapped record; `None` when the record has
/// no usable quantity.
fn line_item_from_record(record: MappedRecord) -> Option<BomLineItem> {
    let quantity = record.quantity.filter(|q| *q != 0)?;

    let suppliers = record
        .supplier
        .filter(|name| !name.is_empty())
        .map(|name| vec![Supplier::named(name)])
        .unwrap_or_default();

    Some(BomLineItem {
        id: None,
        reference: record.reference,
        mpn: record.mpn,
        footprint: record.footprint,
        quantity,
        unit_price: record.unit_price,
        currency: record.currency,
        suppliers,
        image_url: record.image,
        datasheet_url: record.datasheet,
        attributes: serde_json::Map::new(),
        notes: record.notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{parse_csv_str, suggest_column_mapping};

    #[test]
    fn test_import_skips_zero_quantity_rows() {
        let parsed = parse_csv_str(
            "Ref,Qty,Unit Price,Supplier\nR1,2,0.10,LCSC\nC1,0,1.00,LCSC\nD1,,0.50,Mouser\n",
        );
        let mapping = suggest_column_mapping(&parsed.headers);
        let outcome = import_rows(&parsed.rows, &mapping);

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.skipped, 2);
        let item = &outcome.items[0];
        assert_eq!(item.reference.as_deref(), Some("R1"));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Some(0.10));
        assert_eq!(item.primary_supplier(), Some("LCSC"));
    }

    #[test]
    fn test_import_carries_parse_warnings() {
        let parsed = parse_csv_str("Ref,Qty\nR1,two\n");
        let mapping = suggest_column_mapping(&parsed.headers);
        let outcome = import_rows(&parsed.rows, &mapping);

        // Unparsable quantity becomes 0, so the row is skipped but the
        // warning survives for the caller to surface.
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_import_links_urls() {
        let parsed = parse_csv_str(
            "Qty,Datasheet,Image\n3,https://ds.example/a.pdf,https://img.example/a.png\n",
        );
        let mapping = suggest_column_mapping(&parsed.headers);
        let outcome = import_rows(&parsed.rows, &mapping);
        let item = &outcome.items[0];
        assert_eq!(item.datasheet_url.as_deref(), Some("https://ds.example/a.pdf"));
        assert_eq!(item.image_url.as_deref(), Some("https://img.example/a.png"));
    }
}
