// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! FTP-family delivery channel
//!
//! Implements [`DeliveryChannel`] for the FTP and FTPS protocols using
//! suppaftp. The session is connect, optional TLS upgrade, login, mode
//! select, cwd into the remote directory, upload, quit. The library is
//! blocking, so each send runs on the blocking thread pool.
//!
//! SFTP is a different protocol family (SSH); selecting it yields
//! [`TransferError::UnsupportedProtocol`], which the delivery coordinator
//! records as a failed transfer like any other.

use crate::adapters::transport::traits::DeliveryChannel;
use crate::domain::errors::TransferError;
use crate::domain::transfer::{FtpProtocol, FtpTransferProperties};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::io::Cursor;
use std::path::Path;
use suppaftp::native_tls::TlsConnector;
use suppaftp::{FtpStream, Mode, NativeTlsConnector, NativeTlsFtpStream};

/// [`DeliveryChannel`] for FTP and FTPS endpoints
#[derive(Default)]
pub struct FtpDeliveryChannel;

impl FtpDeliveryChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryChannel for FtpDeliveryChannel {
    async fn send(
        &self,
        local_file: &Path,
        properties: &FtpTransferProperties,
    ) -> std::result::Result<(), TransferError> {
        let file_name = local_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                TransferError::ArtifactUnavailable(format!(
                    "{} has no usable file name",
                    local_file.display()
                ))
            })?
            .to_string();

        let bytes = tokio::fs::read(local_file)
            .await
            .map_err(|e| TransferError::ArtifactUnavailable(e.to_string()))?;

        let properties = properties.clone();
        let host = properties.server_host.clone();
        let port = properties.server_port;

        tracing::info!(
            host = %host,
            port = port,
            protocol = %properties.protocol,
            file_name = %file_name,
            "Sending order file"
        );

        let result = tokio::task::spawn_blocking(move || match properties.protocol {
            FtpProtocol::Ftp => send_plain(&properties, &file_name, &bytes),
            FtpProtocol::Ftps => send_secure(&properties, &file_name, &bytes),
            FtpProtocol::Sftp => Err(TransferError::UnsupportedProtocol(
                FtpProtocol::Sftp.to_string(),
            )),
        })
        .await
        .map_err(|e| TransferError::UploadFailed {
            file_name: local_file.display().to_string(),
            message: format!("send task aborted: {e}"),
        })?;

        if let Err(ref err) = result {
            tracing::error!(host = %host, port = port, error = %err, "Order file send failed");
        }

        result
    }
}

fn transfer_mode(properties: &FtpTransferProperties) -> Mode {
    if properties.passive_mode {
        Mode::Passive
    } else {
        Mode::Active
    }
}

fn send_plain(
    properties: &FtpTransferProperties,
    file_name: &str,
    bytes: &[u8],
) -> std::result::Result<(), TransferError> {
    let address = format!("{}:{}", properties.server_host, properties.server_port);
    let mut stream =
        FtpStream::connect(&address).map_err(|e| TransferError::ConnectionFailed {
            host: properties.server_host.clone(),
            port: properties.server_port,
            message: e.to_string(),
        })?;

    stream.set_mode(transfer_mode(properties));

    stream
        .login(
            properties.username.as_str(),
            properties.password.expose_secret().as_str(),
        )
        .map_err(|e| TransferError::LoginFailed {
            username: properties.username.clone(),
            message: e.to_string(),
        })?;

    stream
        .cwd(&properties.remote_directory)
        .map_err(|e| TransferError::UploadFailed {
            file_name: file_name.to_string(),
            message: format!("cwd {}: {e}", properties.remote_directory),
        })?;

    let mut reader = Cursor::new(bytes);
    stream
        .put_file(file_name, &mut reader)
        .map_err(|e| TransferError::UploadFailed {
            file_name: file_name.to_string(),
            message: e.to_string(),
        })?;

    // Best-effort close; the upload already succeeded.
    let _ = stream.quit();
    Ok(())
}

fn send_secure(
    properties: &FtpTransferProperties,
    file_name: &str,
    bytes: &[u8],
) -> std::result::Result<(), TransferError> {
    let address = format!("{}:{}", properties.server_host, properties.server_port);
    let connection_failed = |message: String| TransferError::ConnectionFailed {
        host: properties.server_host.clone(),
        port: properties.server_port,
        message,
    };

    let stream =
        NativeTlsFtpStream::connect(&address).map_err(|e| connection_failed(e.to_string()))?;

    let connector = TlsConnector::new().map_err(|e| connection_failed(e.to_string()))?;
    let mut stream = stream
        .into_secure(
            NativeTlsConnector::from(connector),
            &properties.server_host,
        )
        .map_err(|e| connection_failed(e.to_string()))?;

    stream.set_mode(transfer_mode(properties));

    stream
        .login(
            properties.username.as_str(),
            properties.password.expose_secret().as_str(),
        )
        .map_err(|e| TransferError::LoginFailed {
            username: properties.username.clone(),
            message: e.to_string(),
        })?;

    stream
        .cwd(&properties.remote_directory)
        .map_err(|e| TransferError::UploadFailed {
            file_name: file_name.to_string(),
            message: format!("cwd {}: {e}", properties.remote_directory),
        })?;

    let mut reader = Cursor::new(bytes);
    stream
        .put_file(file_name, &mut reader)
        .map_err(|e| TransferError::UploadFailed {
            file_name: file_name.to_string(),
            message: e.to_string(),
        })?;

    let _ = stream.quit();
    Ok(())
}
