// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Deliver command implementation
//!
//! Runs the delivery state machine for one order: stores the artifact in
//! the destination's local directory and, for FTP-family destinations,
//! attempts the send. Prints the resulting order status. Exits non-zero
//! when the order ends in `TRANSFER_FAILED`, so scripts can react.

use crate::adapters::reference::{
    HttpReferenceDataClient, InMemoryReferenceData, ReferenceDataLookup,
};
use crate::adapters::repository::{
    InMemoryOrderRepository, InMemoryTemplateRepository,
    InMemoryTransferPropertiesRepository, TransferPropertiesRepository,
};
use crate::adapters::transport::FtpDeliveryChannel;
use crate::cli::commands::export::read_json;
use crate::config::load_config;
use crate::core::delivery::{ArtifactStorage, DeliveryCoordinator};
use crate::core::export::{validate_template, ExportEngine};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::template::FileTemplate;
use crate::domain::transfer::TransferProperties;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the deliver command
#[derive(Args, Debug)]
pub struct DeliverArgs {
    /// Path to the order JSON file
    #[arg(long)]
    pub order: PathBuf,

    /// Path to the file template JSON file
    #[arg(long)]
    pub template: PathBuf,

    /// Path to a JSON array of per-facility transfer properties
    #[arg(long)]
    pub transfer_properties: PathBuf,

    /// Resolve related entities from an empty in-memory store instead of
    /// the configured reference data service
    #[arg(long)]
    pub offline: bool,
}

impl DeliverArgs {
    /// Execute the deliver command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;

        let mut order: Order = read_json(&self.order)?;
        let template: FileTemplate = read_json(&self.template)?;
        validate_template(&template)?;
        let destinations: Vec<TransferProperties> = read_json(&self.transfer_properties)?;

        let orders = Arc::new(InMemoryOrderRepository::new());
        let templates = Arc::new(InMemoryTemplateRepository::new());
        templates.set_current(template).await;
        let transfer_properties = Arc::new(InMemoryTransferPropertiesRepository::new());
        for destination in &destinations {
            transfer_properties.save(destination).await?;
        }

        let lookup: Arc<dyn ReferenceDataLookup> = if self.offline {
            Arc::new(InMemoryReferenceData::new())
        } else {
            Arc::new(HttpReferenceDataClient::new(&config.reference)?)
        };

        let engine = Arc::new(ExportEngine::new(lookup, &config.export));
        let coordinator = DeliveryCoordinator::new(
            orders,
            templates,
            transfer_properties,
            ArtifactStorage::new(engine),
            Arc::new(FtpDeliveryChannel::new()),
            &config.delivery,
        );

        coordinator.deliver(&mut order).await?;

        println!("{}", order.status);

        Ok(if order.status == OrderStatus::TransferFailed {
            1
        } else {
            0
        })
    }
}
