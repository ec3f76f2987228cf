// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Delivery coordinator and state machine
//!
//! Evaluated once when an order is created and again on each manual retry:
//!
//! 1. No supplying facility, or no transfer properties configured for it:
//!    the order becomes `TransferFailed`. No transport exists, so nothing
//!    is stored or sent.
//! 2. FTP-family destination with sending enabled: the order becomes
//!    `InRoute`, the artifact is stored locally and one send is attempted.
//!    Success deletes the local artifact and leaves the order `InRoute`
//!    (further progression is driven by downstream acknowledgement).
//!    Failure marks the order `TransferFailed` and keeps the artifact for
//!    the retry.
//! 3. Local destination - or an FTP destination while sending is disabled:
//!    the order becomes `ReadyToPack` and the artifact is stored locally;
//!    no network attempt is made.
//!
//! Send failures are converted into order status, never propagated to the
//! caller: order creation still succeeds with a visible degraded state.
//! Storage I/O failures do propagate.

use crate::adapters::repository::{
    OrderRepository, TemplateRepository, TransferPropertiesRepository,
};
use crate::adapters::transport::DeliveryChannel;
use crate::config::DeliveryConfig;
use crate::core::delivery::storage::ArtifactStorage;
use crate::domain::errors::WaybillError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::result::Result;
use crate::domain::template::FileTemplate;
use crate::domain::transfer::TransferProperties;
use std::sync::Arc;
use uuid::Uuid;

/// Runs the delivery state machine for orders
pub struct DeliveryCoordinator {
    orders: Arc<dyn OrderRepository>,
    templates: Arc<dyn TemplateRepository>,
    transfer_properties: Arc<dyn TransferPropertiesRepository>,
    storage: ArtifactStorage,
    channel: Arc<dyn DeliveryChannel>,
    ftp_send_enabled: bool,
}

impl DeliveryCoordinator {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        templates: Arc<dyn TemplateRepository>,
        transfer_properties: Arc<dyn TransferPropertiesRepository>,
        storage: ArtifactStorage,
        channel: Arc<dyn DeliveryChannel>,
        config: &DeliveryConfig,
    ) -> Self {
        Self {
            orders,
            templates,
            transfer_properties,
            storage,
            channel,
            ftp_send_enabled: config.ftp_send_enabled,
        }
    }

    /// Runs the state machine for `order`, mutating its status and saving it
    ///
    /// Called by order creation and by [`retry`](Self::retry). Concurrent
    /// deliveries of the same order are not coordinated here; callers
    /// serialize per-order operations externally.
    ///
    /// # Errors
    ///
    /// Returns storage and configuration errors; a failed network send is
    /// not an error (the order is saved as `TransferFailed` instead).
    pub async fn deliver(&self, order: &mut Order) -> Result<()> {
        let destination = match order.supplying_facility_id {
            Some(facility_id) => {
                self.transfer_properties
                    .find_by_facility_id(facility_id)
                    .await?
            }
            None => None,
        };

        let Some(properties) = destination else {
            tracing::warn!(
                order_code = %order.order_code,
                supplying_facility_id = ?order.supplying_facility_id,
                "No delivery destination configured; marking transfer failed"
            );
            order.status = OrderStatus::TransferFailed;
            self.orders.save(order).await?;
            return Ok(());
        };

        let template = self.templates.current().await?.ok_or_else(|| {
            WaybillError::Configuration("no active order file template".to_string())
        })?;

        match &properties {
            TransferProperties::Local(_) => {
                order.status = OrderStatus::ReadyToPack;
                self.storage.store(order, &template, &properties).await?;
            }
            TransferProperties::Ftp(_) if !self.ftp_send_enabled => {
                // Sending is switched off: treat the destination like a
                // local drop and leave the order for local fulfillment.
                order.status = OrderStatus::ReadyToPack;
                self.storage.store(order, &template, &properties).await?;
            }
            TransferProperties::Ftp(ftp) => {
                order.status = OrderStatus::InRoute;
                let path = self.storage.store(order, &template, &properties).await?;

                match self.channel.send(&path, ftp).await {
                    Ok(()) => {
                        ArtifactStorage::delete(order, &template, &properties).await?;
                        tracing::info!(
                            order_code = %order.order_code,
                            host = %ftp.server_host,
                            "Order file transferred"
                        );
                    }
                    Err(err) => {
                        // Keep the artifact so the retry can resend it.
                        tracing::warn!(
                            order_code = %order.order_code,
                            error = %err,
                            "Order file transfer failed"
                        );
                        order.status = OrderStatus::TransferFailed;
                    }
                }
            }
        }

        self.orders.save(order).await?;

        tracing::info!(
            order_code = %order.order_code,
            status = %order.status,
            "Delivery evaluated"
        );

        Ok(())
    }

    /// Manually retries a previously failed transfer
    ///
    /// Only orders in `TransferFailed` may be retried - retrying from any
    /// other state could double-send a delivered file. The state machine
    /// is re-evaluated in full, so a facility reconfigured from FTP to a
    /// local destination retries into `ReadyToPack`.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` when no order has `order_id`, and
    /// `InvalidStatusForRetry` (with no state mutation) when the order is
    /// not in `TransferFailed`.
    pub async fn retry(&self, order_id: Uuid) -> Result<Order> {
        let mut order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(WaybillError::OrderNotFound(order_id))?;

        if order.status != OrderStatus::TransferFailed {
            return Err(WaybillError::InvalidStatusForRetry {
                actual: order.status,
            });
        }

        tracing::info!(order_code = %order.order_code, "Retrying order transfer");
        self.deliver(&mut order).await?;
        Ok(order)
    }

    /// The template the coordinator would currently export with
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no template is registered.
    pub async fn active_template(&self) -> Result<FileTemplate> {
        self.templates.current().await?.ok_or_else(|| {
            WaybillError::Configuration("no active order file template".to_string())
        })
    }
}
