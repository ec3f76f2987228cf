// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! In-memory reference data for tests and offline CLI runs

use crate::adapters::reference::traits::ReferenceDataLookup;
use crate::domain::reference::{FacilityDto, OrderableDto, ProcessingPeriodDto};
use crate::domain::result::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// [`ReferenceDataLookup`] backed by in-process maps
#[derive(Default)]
pub struct InMemoryReferenceData {
    facilities: Mutex<HashMap<Uuid, FacilityDto>>,
    orderables: Mutex<HashMap<Uuid, OrderableDto>>,
    periods: Mutex<HashMap<Uuid, ProcessingPeriodDto>>,
}

impl InMemoryReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_facility(&self, facility: FacilityDto) {
        self.facilities.lock().unwrap().insert(facility.id, facility);
    }

    pub fn add_orderable(&self, orderable: OrderableDto) {
        self.orderables.lock().unwrap().insert(orderable.id, orderable);
    }

    pub fn add_period(&self, period: ProcessingPeriodDto) {
        self.periods.lock().unwrap().insert(period.id, period);
    }
}

#[async_trait]
impl ReferenceDataLookup for InMemoryReferenceData {
    async fn find_facility(&self, id: Uuid) -> Result<Option<FacilityDto>> {
        Ok(self.facilities.lock().unwrap().get(&id).cloned())
    }

    async fn find_orderable(&self, id: Uuid) -> Result<Option<OrderableDto>> {
        Ok(self.orderables.lock().unwrap().get(&id).cloned())
    }

    async fn find_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>> {
        Ok(self.periods.lock().unwrap().get(&id).cloned())
    }
}
