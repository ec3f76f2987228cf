// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Result type alias for Waybill operations

use super::errors::WaybillError;

/// Convenience alias used by all fallible Waybill operations
pub type Result<T> = std::result::Result<T, WaybillError>;
