// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Export engine - renders an order through a file template
//!
//! Composes field resolution, related-entity expansion, formatting and the
//! record writer into one pass over the order's line items. Output is
//! deterministic: repeated exports of unchanged inputs produce identical
//! bytes.

use crate::adapters::reference::ReferenceDataLookup;
use crate::config::ExportConfig;
use crate::core::export::format::format_value;
use crate::core::export::resolver::{resolve_column, RelatedEntityResolver};
use crate::core::export::writer::{write_header, write_row};
use crate::domain::errors::WaybillError;
use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::template::{ColumnSource, FileTemplate};
use std::io::Write;
use std::sync::Arc;

/// Renders orders into the delimited export format
pub struct ExportEngine {
    related: RelatedEntityResolver,
    include_zero_quantity: bool,
}

impl ExportEngine {
    /// Creates an engine using the given reference data collaborator
    pub fn new(lookup: Arc<dyn ReferenceDataLookup>, export: &ExportConfig) -> Self {
        Self {
            related: RelatedEntityResolver::new(lookup),
            include_zero_quantity: export.include_zero_quantity,
        }
    }

    /// Renders `order` through `template` into `out`
    ///
    /// Included columns are emitted in ascending position order; excluded
    /// columns take no separator slot. Line items are walked in their
    /// stored order, each producing one row. Line items with an ordered
    /// quantity of zero are skipped unless `include_zero_quantity` is set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown key paths, a reference
    /// error when a related lookup fails, and an I/O error when `out`
    /// cannot be written.
    pub async fn write_order<W: Write>(
        &self,
        order: &Order,
        template: &FileTemplate,
        out: &mut W,
    ) -> Result<()> {
        let columns = template.output_columns();

        if template.header_in_file {
            write_header(&columns, out)
                .map_err(|e| WaybillError::Io(format!("writing header row: {e}")))?;
        }

        let mut line_number = 1;
        for line_item in &order.line_items {
            if !self.include_zero_quantity && line_item.ordered_quantity == 0 {
                continue;
            }

            let mut cells = Vec::with_capacity(columns.len());
            for column in &columns {
                // Blank columns emit an empty cell and never expand.
                if column.source() == ColumnSource::Blank {
                    cells.push(String::new());
                    continue;
                }

                let mut value = resolve_column(column, order, line_item, line_number)?;

                if column.has_related() {
                    let related_tag = column.related.as_deref().unwrap_or_default();
                    let related_path = column.related_key_path.as_deref().unwrap_or_default();
                    value = self.related.expand(value, related_tag, related_path).await?;
                }

                cells.push(format_value(&value, column.format.as_deref()));
            }

            write_row(&cells, out)
                .map_err(|e| WaybillError::Io(format!("writing data row: {e}")))?;
            line_number += 1;
        }

        tracing::debug!(
            order_code = %order.order_code,
            template_id = %template.id,
            rows = line_number - 1,
            "Rendered order export"
        );

        Ok(())
    }

    /// Renders `order` through `template` into an in-memory byte buffer
    pub async fn export(&self, order: &Order, template: &FileTemplate) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_order(order, template, &mut buffer).await?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reference::InMemoryReferenceData;
    use crate::domain::order::{OrderLineItem, OrderStatus};
    use crate::domain::reference::OrderableDto;
    use crate::domain::template::FileColumn;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn engine_with(reference: InMemoryReferenceData, include_zero: bool) -> ExportEngine {
        ExportEngine::new(
            Arc::new(reference),
            &ExportConfig {
                include_zero_quantity: include_zero,
            },
        )
    }

    fn column(position: i32, label: &str, nested: &str, key_path: &str) -> FileColumn {
        FileColumn {
            id: Uuid::new_v4(),
            column_label: Some(label.to_string()),
            include: true,
            position,
            format: None,
            nested: nested.to_string(),
            key_path: key_path.to_string(),
            related: None,
            related_key_path: None,
        }
    }

    fn order_with_items(items: Vec<OrderLineItem>) -> Order {
        Order {
            id: Uuid::new_v4(),
            external_id: None,
            emergency: false,
            facility_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            processing_period_id: Uuid::new_v4(),
            requesting_facility_id: None,
            receiving_facility_id: None,
            supplying_facility_id: None,
            order_code: "ORD-1".to_string(),
            quoted_cost: 0.0,
            status: OrderStatus::Ordered,
            created_date: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap(),
            created_by_id: Uuid::new_v4(),
            line_items: items,
        }
    }

    fn line_item(ordered: i64, approved: i64) -> OrderLineItem {
        OrderLineItem {
            id: Uuid::new_v4(),
            orderable_id: Uuid::new_v4(),
            ordered_quantity: ordered,
            filled_quantity: 0,
            approved_quantity: approved,
            packs_to_ship: None,
        }
    }

    #[tokio::test]
    async fn test_header_and_row_example() {
        let engine = engine_with(InMemoryReferenceData::new(), true);
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: true,
            columns: vec![
                column(1, "Order number", "order", "orderCode"),
                column(2, "Approved quantity", "lineItem", "approvedQuantity"),
            ],
        };
        let order = order_with_items(vec![line_item(5, 5)]);

        let bytes = engine.export(&order, &template).await.unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Order number,Approved quantity\r\nORD-1,5\r\n"
        );
    }

    #[tokio::test]
    async fn test_header_gated_by_flag() {
        let engine = engine_with(InMemoryReferenceData::new(), true);
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![column(1, "Order number", "order", "orderCode")],
        };
        let order = order_with_items(vec![line_item(5, 5)]);

        let bytes = engine.export(&order, &template).await.unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "ORD-1\r\n");
    }

    #[tokio::test]
    async fn test_excluded_column_takes_no_separator_slot() {
        let engine = engine_with(InMemoryReferenceData::new(), true);
        let mut excluded = column(2, "Hidden", "order", "status");
        excluded.include = false;
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: true,
            columns: vec![
                column(3, "Approved quantity", "lineItem", "approvedQuantity"),
                excluded,
                column(1, "Order number", "order", "orderCode"),
            ],
        };
        let order = order_with_items(vec![line_item(5, 7)]);

        let text = String::from_utf8(engine.export(&order, &template).await.unwrap()).unwrap();
        assert_eq!(text, "Order number,Approved quantity\r\nORD-1,7\r\n");
        assert!(!text.contains("Hidden"));
    }

    #[tokio::test]
    async fn test_line_number_counts_emitted_rows() {
        let engine = engine_with(InMemoryReferenceData::new(), false);
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![
                column(1, "No.", "line_no", ""),
                column(2, "Approved", "lineItem", "approvedQuantity"),
            ],
        };
        // The zero-quantity item is skipped and must not consume a number.
        let order = order_with_items(vec![line_item(10, 1), line_item(0, 2), line_item(4, 3)]);

        let text = String::from_utf8(engine.export(&order, &template).await.unwrap()).unwrap();
        assert_eq!(text, "1,1\r\n2,3\r\n");
    }

    #[tokio::test]
    async fn test_zero_quantity_items_kept_by_default() {
        let engine = engine_with(InMemoryReferenceData::new(), true);
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![column(1, "Ordered", "lineItem", "orderedQuantity")],
        };
        let order = order_with_items(vec![line_item(0, 0), line_item(3, 3)]);

        let text = String::from_utf8(engine.export(&order, &template).await.unwrap()).unwrap();
        assert_eq!(text, "0\r\n3\r\n");
    }

    #[tokio::test]
    async fn test_related_expansion_in_row() {
        let orderable = OrderableDto {
            id: Uuid::new_v4(),
            product_code: "P100".to_string(),
            name: "Paracetamol 500mg".to_string(),
            pack_size: 10,
        };
        let reference = InMemoryReferenceData::new();
        reference.add_orderable(orderable.clone());
        let engine = engine_with(reference, true);

        let mut product = column(1, "Product", "lineItem", "orderableId");
        product.related = Some("Orderable".to_string());
        product.related_key_path = Some("productCode".to_string());
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![product],
        };

        let mut item = line_item(5, 5);
        item.orderable_id = orderable.id;
        let order = order_with_items(vec![item]);

        let text = String::from_utf8(engine.export(&order, &template).await.unwrap()).unwrap();
        assert_eq!(text, "P100\r\n");
    }

    #[tokio::test]
    async fn test_determinism() {
        let engine = engine_with(InMemoryReferenceData::new(), true);
        let template = FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: true,
            columns: vec![
                column(1, "Order number", "order", "orderCode"),
                column(2, "Created", "order", "createdDate"),
            ],
        };
        let order = order_with_items(vec![line_item(5, 5), line_item(2, 2)]);

        let first = engine.export(&order, &template).await.unwrap();
        let second = engine.export(&order, &template).await.unwrap();
        assert_eq!(first, second);
    }
}
