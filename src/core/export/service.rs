// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Export request service
//!
//! Entry point for on-demand export requests keyed by order id and an
//! output kind. Only the delimited-text kind is produced here; other kinds
//! belong to the reporting subsystem and are rejected up front.

use crate::adapters::repository::{OrderRepository, TemplateRepository};
use crate::core::export::engine::ExportEngine;
use crate::domain::errors::WaybillError;
use crate::domain::result::Result;
use std::sync::Arc;
use uuid::Uuid;

/// The only export kind this service produces
pub const EXPORT_TYPE_CSV: &str = "csv";

/// A produced export artifact, ready to hand to a caller or a transport
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// `{file_prefix}{order_code}.csv`
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Serves export requests against the active file template
pub struct OrderExportService {
    orders: Arc<dyn OrderRepository>,
    templates: Arc<dyn TemplateRepository>,
    engine: Arc<ExportEngine>,
}

impl OrderExportService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        templates: Arc<dyn TemplateRepository>,
        engine: Arc<ExportEngine>,
    ) -> Self {
        Self {
            orders,
            templates,
            engine,
        }
    }

    /// Exports the order with `order_id` in the requested `kind`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedExportType` for any kind other than `csv`
    /// (checked before any lookup, with no state touched),
    /// `OrderNotFound` when the order does not exist, and a configuration
    /// error when no active template is registered.
    pub async fn export(&self, order_id: Uuid, kind: &str) -> Result<ExportedFile> {
        if kind != EXPORT_TYPE_CSV {
            tracing::warn!(order_id = %order_id, kind = %kind, "Rejected export request");
            return Err(WaybillError::UnsupportedExportType(kind.to_string()));
        }

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(WaybillError::OrderNotFound(order_id))?;

        let template = self.templates.current().await?.ok_or_else(|| {
            WaybillError::Configuration("no active order file template".to_string())
        })?;

        let content = self.engine.export(&order, &template).await?;

        tracing::info!(
            order_code = %order.order_code,
            bytes = content.len(),
            "Exported order"
        );

        Ok(ExportedFile {
            file_name: template.file_name(&order.order_code),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reference::InMemoryReferenceData;
    use crate::adapters::repository::{InMemoryOrderRepository, InMemoryTemplateRepository};
    use crate::config::ExportConfig;
    use crate::domain::order::{Order, OrderLineItem, OrderStatus};
    use crate::domain::template::{FileColumn, FileTemplate};
    use chrono::{TimeZone, Utc};

    fn service(
        orders: Arc<InMemoryOrderRepository>,
        templates: Arc<InMemoryTemplateRepository>,
    ) -> OrderExportService {
        let engine = Arc::new(ExportEngine::new(
            Arc::new(InMemoryReferenceData::new()),
            &ExportConfig::default(),
        ));
        OrderExportService::new(orders, templates, engine)
    }

    fn sample_order() -> Order {
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
            order_code: "ORD-77".to_string(),
            quoted_cost: 10.0,
            status: OrderStatus::Ordered,
            created_date: Utc.with_ymd_and_hms(2025, 4, 1, 6, 0, 0).unwrap(),
            created_by_id: Uuid::new_v4(),
            line_items: vec![OrderLineItem {
                id: Uuid::new_v4(),
                orderable_id: Uuid::new_v4(),
                ordered_quantity: 3,
                filled_quantity: 3,
                approved_quantity: 3,
                packs_to_ship: None,
            }],
        }
    }

    fn sample_template() -> FileTemplate {
        FileTemplate {
            id: Uuid::new_v4(),
            file_prefix: "O".to_string(),
            header_in_file: false,
            columns: vec![FileColumn {
                id: Uuid::new_v4(),
                column_label: Some("Order number".to_string()),
                include: true,
                position: 1,
                format: None,
                nested: "order".to_string(),
                key_path: "orderCode".to_string(),
                related: None,
                related_key_path: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_unsupported_kind_rejected_before_lookup() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let templates = Arc::new(InMemoryTemplateRepository::new());
        let service = service(orders, templates);

        let err = service.export(Uuid::new_v4(), "pdf").await.unwrap_err();
        assert!(matches!(err, WaybillError::UnsupportedExportType(_)));
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let templates = Arc::new(InMemoryTemplateRepository::new());
        templates.set_current(sample_template()).await;
        let service = service(orders, templates);

        let err = service.export(Uuid::new_v4(), "csv").await.unwrap_err();
        assert!(matches!(err, WaybillError::OrderNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_template_is_configuration_error() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let order = sample_order();
        orders.save(&order).await.unwrap();
        let templates = Arc::new(InMemoryTemplateRepository::new());
        let service = service(orders, templates);

        let err = service.export(order.id, "csv").await.unwrap_err();
        assert!(matches!(err, WaybillError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_export_produces_named_artifact() {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let order = sample_order();
        orders.save(&order).await.unwrap();
        let templates = Arc::new(InMemoryTemplateRepository::new());
        templates.set_current(sample_template()).await;
        let service = service(orders, templates);

        let file = service.export(order.id, "csv").await.unwrap();
        assert_eq!(file.file_name, "OORD-77.csv");
        assert_eq!(String::from_utf8(file.content).unwrap(), "ORD-77\r\n");
    }
}
