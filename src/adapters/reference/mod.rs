// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Reference data boundary: lookup trait, HTTP client, in-memory store

pub mod client;
pub mod memory;
pub mod traits;

pub use client::HttpReferenceDataClient;
pub use memory::InMemoryReferenceData;
pub use traits::ReferenceDataLookup;
