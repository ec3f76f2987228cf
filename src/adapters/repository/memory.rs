// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! In-memory repository implementations
//!
//! Back the CLI (seeded from JSON files) and the test suites. Not durable.

use crate::adapters::repository::traits::{
    OrderRepository, TemplateRepository, TransferPropertiesRepository,
};
use crate::domain::errors::WaybillError;
use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::template::FileTemplate;
use crate::domain::transfer::TransferProperties;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`OrderRepository`]
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn find_by_external_id(&self, external_id: Uuid) -> Result<Option<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .find(|order| order.external_id == Some(external_id))
            .cloned())
    }

    async fn save(&self, order: &Order) -> Result<()> {
        self.orders.write().await.insert(order.id, order.clone());
        Ok(())
    }
}

/// In-memory [`TemplateRepository`] holding at most one active template
#[derive(Default)]
pub struct InMemoryTemplateRepository {
    template: RwLock<Option<FileTemplate>>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `template` as the active template
    pub async fn set_current(&self, template: FileTemplate) {
        *self.template.write().await = Some(template);
    }

    /// Removes the active template
    pub async fn clear_current(&self) {
        *self.template.write().await = None;
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn current(&self) -> Result<Option<FileTemplate>> {
        Ok(self.template.read().await.clone())
    }
}

/// In-memory [`TransferPropertiesRepository`]
#[derive(Default)]
pub struct InMemoryTransferPropertiesRepository {
    by_facility: RwLock<HashMap<Uuid, TransferProperties>>,
}

impl InMemoryTransferPropertiesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransferPropertiesRepository for InMemoryTransferPropertiesRepository {
    async fn find_by_facility_id(&self, facility_id: Uuid) -> Result<Option<TransferProperties>> {
        Ok(self.by_facility.read().await.get(&facility_id).cloned())
    }

    async fn save(&self, properties: &TransferProperties) -> Result<()> {
        let mut map = self.by_facility.write().await;
        if let Some(existing) = map.get(&properties.facility_id()) {
            if existing.id() != properties.id() {
                return Err(WaybillError::DuplicateTransferProperties(
                    properties.facility_id(),
                ));
            }
        }
        map.insert(properties.facility_id(), properties.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use crate::domain::transfer::LocalTransferProperties;
    use chrono::{TimeZone, Utc};

    fn local(id: Uuid, facility_id: Uuid) -> TransferProperties {
        TransferProperties::Local(LocalTransferProperties {
            id,
            facility_id,
            path: "/tmp/waybill".to_string(),
        })
    }

    #[tokio::test]
    async fn test_duplicate_facility_rejected() {
        let repo = InMemoryTransferPropertiesRepository::new();
        let facility_id = Uuid::new_v4();

        repo.save(&local(Uuid::new_v4(), facility_id)).await.unwrap();
        let err = repo
            .save(&local(Uuid::new_v4(), facility_id))
            .await
            .unwrap_err();
        assert!(matches!(err, WaybillError::DuplicateTransferProperties(_)));
    }

    #[tokio::test]
    async fn test_same_record_resave_allowed() {
        let repo = InMemoryTransferPropertiesRepository::new();
        let record = local(Uuid::new_v4(), Uuid::new_v4());

        repo.save(&record).await.unwrap();
        repo.save(&record).await.unwrap();
    }

    #[tokio::test]
    async fn test_find_order_by_external_id() {
        let repo = InMemoryOrderRepository::new();
        let external_id = Uuid::new_v4();
        let order = Order {
            id: Uuid::new_v4(),
            external_id: Some(external_id),
            emergency: false,
            facility_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            processing_period_id: Uuid::new_v4(),
            requesting_facility_id: None,
            receiving_facility_id: None,
            supplying_facility_id: None,
            order_code: "ORD-8".to_string(),
            quoted_cost: 0.0,
            status: OrderStatus::Ordered,
            created_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            created_by_id: Uuid::new_v4(),
            line_items: vec![],
        };
        repo.save(&order).await.unwrap();

        let found = repo.find_by_external_id(external_id).await.unwrap().unwrap();
        assert_eq!(found.id, order.id);
        assert!(repo
            .find_by_external_id(Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }
}
