// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Business logic
//!
//! - [`export`] - templated rendering of orders into delimited files
//! - [`delivery`] - artifact storage, transports and the delivery state
//!   machine

pub mod delivery;
pub mod export;
