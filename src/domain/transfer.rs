// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Per-facility delivery destination configuration
//!
//! [`TransferProperties`] is a tagged variant selected by an explicit
//! `type` discriminator - `local` for a filesystem drop directory, `ftp`
//! for an FTP-family endpoint. Exactly one record may exist per facility;
//! the delivery coordinator matches on the variant to pick a transport.

use crate::config::secret::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Protocol family for remote transfer endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FtpProtocol {
    Ftp,
    Sftp,
    Ftps,
}

impl FtpProtocol {
    fn as_str(&self) -> &'static str {
        match self {
            FtpProtocol::Ftp => "FTP",
            FtpProtocol::Sftp => "SFTP",
            FtpProtocol::Ftps => "FTPS",
        }
    }
}

impl fmt::Display for FtpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FtpProtocol {
    type Err = String;

    /// Parses a protocol name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FTP" => Ok(FtpProtocol::Ftp),
            "SFTP" => Ok(FtpProtocol::Sftp),
            "FTPS" => Ok(FtpProtocol::Ftps),
            other => Err(format!("unknown transfer protocol: {other}")),
        }
    }
}

/// Local filesystem destination: the artifact is stored and left in `path`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalTransferProperties {
    pub id: Uuid,
    pub facility_id: Uuid,
    /// Drop directory for produced artifacts
    pub path: String,
}

/// Remote FTP-family destination
///
/// The artifact is first stored in `local_directory`, then sent to
/// `remote_directory` on the configured server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtpTransferProperties {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub protocol: FtpProtocol,
    pub username: String,
    /// Never logged; exposed only when opening the transfer session
    pub password: SecretString,
    pub server_host: String,
    pub server_port: u16,
    pub remote_directory: String,
    pub local_directory: String,
    pub passive_mode: bool,
}

/// Delivery destination configuration, unique per facility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransferProperties {
    Local(LocalTransferProperties),
    Ftp(FtpTransferProperties),
}

impl TransferProperties {
    /// Record identity
    pub fn id(&self) -> Uuid {
        match self {
            TransferProperties::Local(p) => p.id,
            TransferProperties::Ftp(p) => p.id,
        }
    }

    /// Facility this destination belongs to
    pub fn facility_id(&self) -> Uuid {
        match self {
            TransferProperties::Local(p) => p.facility_id,
            TransferProperties::Ftp(p) => p.facility_id,
        }
    }

    /// Directory where the artifact is stored locally before (or instead
    /// of) any network send
    pub fn local_directory(&self) -> &str {
        match self {
            TransferProperties::Local(p) => &p.path,
            TransferProperties::Ftp(p) => &p.local_directory,
        }
    }
}
