// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! HTTP reference data client
//!
//! Talks to the reference data service's REST API. Lookups are plain GETs
//! by id; a 404 answer maps to `Ok(None)` so that a dangling foreign id in
//! an order renders as an empty cell instead of failing the export.
//! HTTP client errors never leak - every failure is mapped into
//! [`ReferenceError`].

use crate::adapters::reference::traits::ReferenceDataLookup;
use crate::config::ReferenceConfig;
use crate::domain::errors::{ReferenceError, WaybillError};
use crate::domain::reference::{FacilityDto, OrderableDto, ProcessingPeriodDto};
use crate::domain::result::Result;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

/// Reference data client over the service's REST API
pub struct HttpReferenceDataClient {
    base_url: String,
    client: Client,
    username: Option<String>,
    password: Option<String>,
}

impl HttpReferenceDataClient {
    /// Creates a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ReferenceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                WaybillError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_by_id<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: Uuid,
    ) -> Result<Option<T>> {
        let url = format!("{}/api/{resource}/{id}", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ReferenceError::Timeout(e.to_string())
            } else {
                ReferenceError::ConnectionFailed(e.to_string())
            }
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ReferenceError::AuthenticationFailed(format!(
                    "{} answered {}",
                    url,
                    response.status()
                ))
                .into())
            }
            status if status.is_server_error() => Err(ReferenceError::ServerError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }
            .into()),
            status if status.is_client_error() => Err(ReferenceError::ClientError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }
            .into()),
            _ => {
                let entity = response
                    .json::<T>()
                    .await
                    .map_err(|e| ReferenceError::InvalidResponse(e.to_string()))?;
                Ok(Some(entity))
            }
        }
    }
}

#[async_trait]
impl ReferenceDataLookup for HttpReferenceDataClient {
    async fn find_facility(&self, id: Uuid) -> Result<Option<FacilityDto>> {
        self.get_by_id("facilities", id).await
    }

    async fn find_orderable(&self, id: Uuid) -> Result<Option<OrderableDto>> {
        self.get_by_id("orderables", id).await
    }

    async fn find_period(&self, id: Uuid) -> Result<Option<ProcessingPeriodDto>> {
        self.get_by_id("processingPeriods", id).await
    }
}
