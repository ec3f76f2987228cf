// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! External integrations
//!
//! Every collaborator this crate consumes lives behind a trait in one of
//! these modules:
//!
//! - [`repository`] - entity persistence (orders, templates, transfer
//!   properties)
//! - [`reference`] - related-entity lookups (facilities, orderables,
//!   processing periods)
//! - [`transport`] - the delivery-channel send primitive

pub mod reference;
pub mod repository;
pub mod transport;
