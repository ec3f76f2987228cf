// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Transfer properties service
//!
//! Guards the one-destination-per-facility invariant in front of the
//! repository: saving a record for a facility that already has one with a
//! different identity is rejected.

use crate::adapters::repository::TransferPropertiesRepository;
use crate::domain::errors::WaybillError;
use crate::domain::result::Result;
use crate::domain::transfer::TransferProperties;
use std::sync::Arc;
use uuid::Uuid;

/// Manages per-facility delivery destinations
pub struct TransferPropertiesService {
    repository: Arc<dyn TransferPropertiesRepository>,
}

impl TransferPropertiesService {
    pub fn new(repository: Arc<dyn TransferPropertiesRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves the destination configured for a facility
    pub async fn get_by_facility(&self, facility_id: Uuid) -> Result<Option<TransferProperties>> {
        self.repository.find_by_facility_id(facility_id).await
    }

    /// Saves a destination record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTransferProperties` when the facility already has
    /// a record with a different id. Updating the existing record (same
    /// id) is allowed.
    pub async fn save(&self, properties: &TransferProperties) -> Result<()> {
        if let Some(existing) = self.get_by_facility(properties.facility_id()).await? {
            if existing.id() != properties.id() {
                return Err(WaybillError::DuplicateTransferProperties(
                    properties.facility_id(),
                ));
            }
        }

        self.repository.save(properties).await
    }
}
