// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Persistence abstraction traits
//!
//! Entity persistence is a collaborator of this crate, not part of it.
//! These traits define the boundary the export and delivery layers consume;
//! the in-memory implementations in [`super::memory`] back tests and the
//! CLI. Callers are expected to serialize operations on the same order
//! externally - this boundary offers no per-order coordination.

use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::template::FileTemplate;
use crate::domain::transfer::TransferProperties;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage for the order aggregate
///
/// Orders and their line items are loaded and saved together; there is no
/// partial persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads an order by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>>;

    /// Loads an order by the requisition it was converted from
    async fn find_by_external_id(&self, external_id: Uuid) -> Result<Option<Order>>;

    /// Saves an order, replacing any stored state for the same id
    async fn save(&self, order: &Order) -> Result<()>;
}

/// Registry of file templates
///
/// Template definitions are maintained elsewhere and assumed validated;
/// one template is active per export kind at a time.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// The currently active template, if one is registered
    async fn current(&self) -> Result<Option<FileTemplate>>;
}

/// Storage for per-facility delivery destinations
#[async_trait]
pub trait TransferPropertiesRepository: Send + Sync {
    /// Loads the destination configured for a facility
    async fn find_by_facility_id(&self, facility_id: Uuid) -> Result<Option<TransferProperties>>;

    /// Saves a destination record
    ///
    /// Implementations enforce the unique-per-facility constraint:
    /// saving properties for a facility that already has a record with a
    /// different id fails with `DuplicateTransferProperties`.
    async fn save(&self, properties: &TransferProperties) -> Result<()>;
}
