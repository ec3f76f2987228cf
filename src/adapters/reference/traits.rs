// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Reference data lookup boundary
//!
//! Related-entity expansion resolves foreign identifiers through this
//! trait. The closed set of entity types matches what template columns may
//! name: facilities, orderables and processing periods.

use crate::domain::reference::{FacilityDto, OrderableDto, ProcessingPeriodDto};
use crate::domain::result::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Resolves reference data entities by identifier
///
/// `Ok(None)` means the service answered and the entity does not exist;
/// transport or protocol failures are errors.
#[async_trait]
pub trait ReferenceDataLookup: Send + Sync {
    /// Finds a facility by id
    async fn find_facility(&self, id: Uuid) -> Result<Option<FacilityDto>>;

    /// Finds an orderable (product) by id
    async fn find_orderable(&self, id: Uuid) -> Result<Option<OrderableDto>>;

    /// Finds a processing period by id
    async fn find_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>>;
}
