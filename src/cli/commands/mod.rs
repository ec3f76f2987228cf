// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Command implementations

pub mod deliver;
pub mod export;
pub mod validate;
