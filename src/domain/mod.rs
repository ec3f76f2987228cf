// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Domain models and types for Waybill
//!
//! This module contains the core domain models, types, and business rules:
//!
//! - **Order aggregate** ([`Order`], [`OrderLineItem`], [`OrderStatus`])
//! - **Export templates** ([`FileTemplate`], [`FileColumn`])
//! - **Delivery destinations** ([`TransferProperties`], [`FtpProtocol`])
//! - **Reference data views** ([`FacilityDto`], [`OrderableDto`],
//!   [`ProcessingPeriodDto`])
//! - **Error types** ([`WaybillError`], [`ReferenceError`], [`TransferError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations return [`Result<T>`]; errors are domain-specific
//! and never expose third-party types.

pub mod errors;
pub mod order;
pub mod reference;
pub mod result;
pub mod template;
pub mod transfer;

// Re-export commonly used types for convenience
pub use errors::{ReferenceError, TransferError, WaybillError};
pub use order::{Order, OrderLineItem, OrderStatus};
pub use reference::{FacilityDto, OrderableDto, ProcessingPeriodDto};
pub use result::Result;
pub use template::{ColumnSource, FileColumn, FileTemplate, RelatedEntity};
pub use transfer::{
    FtpProtocol, FtpTransferProperties, LocalTransferProperties, TransferProperties,
};
