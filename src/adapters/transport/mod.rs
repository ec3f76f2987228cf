// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Transport boundary: the delivery channel trait and its FTP-family
//! implementation

pub mod ftp;
pub mod traits;

pub use ftp::FtpDeliveryChannel;
pub use traits::DeliveryChannel;
