//! # Printer Capability Trait
//!
//! The fixed contract every printer implementation satisfies. Callers hold
//! an `Arc<dyn PrinterPort>` chosen once at startup and never ask which
//! implementation is behind it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PrinterResult;

/// A paired printer device as presented to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedDevice {
    /// Display name, e.g. `rfcomm0`.
    pub name: String,

    /// Address handed back to [`PrinterPort::connect`].
    pub address: String,
}

/// The printer capability.
///
/// ## Contract
/// - `connect` reports `Ok(false)` when the device refuses or is absent;
///   hard I/O faults are errors
/// - `print_text` receives a fully formatted text block and sends it
///   unmodified; it requires a prior successful `connect`
/// - `disconnect` reports whether a connection was actually open
#[async_trait]
pub trait PrinterPort: Send + Sync {
    /// Lists devices available for connection.
    async fn list_paired_devices(&self) -> PrinterResult<Vec<PairedDevice>>;

    /// Connects to a device by address. `Ok(false)` means the device was
    /// not usable; the previous connection, if any, is kept.
    async fn connect(&self, address: &str) -> PrinterResult<bool>;

    /// Drops the current connection. `Ok(true)` if one was open.
    async fn disconnect(&self) -> PrinterResult<bool>;

    /// Sends a pre-formatted text block to the connected device.
    async fn print_text(&self, text: &str) -> PrinterResult<bool>;
}
