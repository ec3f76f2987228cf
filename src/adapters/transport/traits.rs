// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Delivery channel boundary
//!
//! The network send primitive: hand a local file path to a transport and
//! receive success or a typed failure. One call is one attempt - there is
//! no internal retry or timeout loop, and once a send begins it runs to
//! completion or failure. The coordinator owns what a failure means for
//! the order's lifecycle.

use crate::domain::errors::TransferError;
use crate::domain::transfer::FtpTransferProperties;
use async_trait::async_trait;
use std::path::Path;

/// Sends a locally stored artifact to a remote destination
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Sends the file at `local_file` to the destination in `properties`
    ///
    /// The remote file name is the local file name.
    async fn send(
        &self,
        local_file: &Path,
        properties: &FtpTransferProperties,
    ) -> std::result::Result<(), TransferError>;
}
