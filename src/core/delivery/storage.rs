// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Local artifact storage
//!
//! Renders an order through the export engine and stores the artifact at
//! the deterministic path `{local_dir}/{file_prefix}{order_code}.csv`,
//! where the directory comes from the facility's transfer properties.
//!
//! Store and delete are idempotent: storing overwrites any existing file
//! at the path, and deleting a file that is already gone is a no-op. A
//! failed send leaves the stored artifact in place so a retry can resend
//! or regenerate it.

use crate::core::export::ExportEngine;
use crate::domain::errors::WaybillError;
use crate::domain::order::Order;
use crate::domain::result::Result;
use crate::domain::template::FileTemplate;
use crate::domain::transfer::TransferProperties;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stores and removes export artifacts in the destination's local directory
pub struct ArtifactStorage {
    engine: Arc<ExportEngine>,
}

impl ArtifactStorage {
    pub fn new(engine: Arc<ExportEngine>) -> Self {
        Self { engine }
    }

    /// The deterministic artifact path for this order and destination
    pub fn artifact_path(
        template: &FileTemplate,
        order: &Order,
        properties: &TransferProperties,
    ) -> PathBuf {
        Path::new(properties.local_directory()).join(template.file_name(&order.order_code))
    }

    /// Renders the order and writes the artifact, overwriting any
    /// previous file at the same path
    ///
    /// # Errors
    ///
    /// Returns a storage error carrying the I/O cause when the directory
    /// cannot be created or the file cannot be written; export failures
    /// propagate unchanged.
    pub async fn store(
        &self,
        order: &Order,
        template: &FileTemplate,
        properties: &TransferProperties,
    ) -> Result<PathBuf> {
        let directory = PathBuf::from(properties.local_directory());
        let path = Self::artifact_path(template, order, properties);

        let content = self.engine.export(order, template).await?;

        tokio::fs::create_dir_all(&directory).await.map_err(|e| {
            WaybillError::storage(
                format!("creating artifact directory {}", directory.display()),
                e,
            )
        })?;

        tokio::fs::write(&path, &content).await.map_err(|e| {
            WaybillError::storage(format!("writing order file {}", path.display()), e)
        })?;

        tracing::debug!(
            order_code = %order.order_code,
            path = %path.display(),
            bytes = content.len(),
            "Stored order file"
        );

        Ok(path)
    }

    /// Removes the stored artifact; a missing file is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error carrying the I/O cause for any failure
    /// other than the file not existing.
    pub async fn delete(
        order: &Order,
        template: &FileTemplate,
        properties: &TransferProperties,
    ) -> Result<()> {
        let path = Self::artifact_path(template, order, properties);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Deleted order file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WaybillError::storage(
                format!("deleting order file {}", path.display()),
                e,
            )),
        }
    }
}
