// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Delivery pipeline
//!
//! Stores the export artifact and attempts the send for a configured
//! destination, recording the outcome in the order's lifecycle status:
//!
//! - [`storage`] - idempotent local artifact store/delete
//! - [`coordinator`] - the delivery state machine and manual retry
//! - [`transfer_properties`] - destination management

pub mod coordinator;
pub mod storage;
pub mod transfer_properties;

pub use coordinator::DeliveryCoordinator;
pub use storage::ArtifactStorage;
pub use transfer_properties::TransferPropertiesService;
