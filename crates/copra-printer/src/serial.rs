//! # Serial Printer
//!
//! Drives a paired Bluetooth-serial thermal printer through its device
//! node. A printer paired over SPP shows up as `/dev/rfcomm<N>`; writing
//! plain text to that node is all a line printer needs, so no vendor
//! library is involved.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{PrinterError, PrinterResult};
use crate::gateway::{PairedDevice, PrinterPort};

/// Blank lines pushed after the receipt so the tear-off line clears the
/// print head.
const PAPER_FEED: &str = "\n\n\n";

/// Printer gateway writing to serial device nodes.
pub struct SerialPrinter {
    /// Directory scanned for `rfcomm*` nodes. `/dev` in production,
    /// a temp directory in tests.
    device_dir: PathBuf,

    /// Open handle to the connected device, if any.
    connection: Mutex<Option<File>>,
}

impl SerialPrinter {
    /// Creates a gateway scanning `/dev` for paired devices.
    pub fn new() -> Self {
        Self::with_device_dir("/dev")
    }

    /// Creates a gateway scanning a custom directory.
    pub fn with_device_dir(device_dir: impl Into<PathBuf>) -> Self {
        SerialPrinter {
            device_dir: device_dir.into(),
            connection: Mutex::new(None),
        }
    }
}

impl Default for SerialPrinter {
    fn default() -> Self {
        SerialPrinter::new()
    }
}

#[async_trait]
impl PrinterPort for SerialPrinter {
    /// Lists `rfcomm*` nodes in the device directory.
    async fn list_paired_devices(&self) -> PrinterResult<Vec<PairedDevice>> {
        let mut devices = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.device_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("rfcomm") {
                devices.push(PairedDevice {
                    name,
                    address: entry.path().display().to_string(),
                });
            }
        }

        devices.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = devices.len(), "paired devices listed");
        Ok(devices)
    }

    /// Opens the device node for writing.
    ///
    /// An unusable device reports `Ok(false)` and leaves any existing
    /// connection in place, matching the gateway contract.
    async fn connect(&self, address: &str) -> PrinterResult<bool> {
        match OpenOptions::new().write(true).open(address).await {
            Ok(file) => {
                *self.connection.lock().await = Some(file);
                info!(address, "printer connected");
                Ok(true)
            }
            Err(err) => {
                warn!(address, error = %err, "printer connect failed");
                Ok(false)
            }
        }
    }

    async fn disconnect(&self) -> PrinterResult<bool> {
        let had_connection = self.connection.lock().await.take().is_some();
        if had_connection {
            info!("printer disconnected");
        }
        Ok(had_connection)
    }

    /// Writes the text block followed by a paper feed.
    async fn print_text(&self, text: &str) -> PrinterResult<bool> {
        let mut guard = self.connection.lock().await;
        let file = guard.as_mut().ok_or(PrinterError::NotConnected)?;

        file.write_all(text.as_bytes()).await?;
        file.write_all(PAPER_FEED.as_bytes()).await?;
        file.flush().await?;

        debug!(bytes = text.len(), "receipt text sent to printer");
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_only_rfcomm_nodes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rfcomm0"), b"").unwrap();
        std::fs::write(dir.path().join("rfcomm1"), b"").unwrap();
        std::fs::write(dir.path().join("ttyS0"), b"").unwrap();

        let printer = SerialPrinter::with_device_dir(dir.path());
        let devices = printer.list_paired_devices().await.unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "rfcomm0");
        assert_eq!(devices[1].name, "rfcomm1");
    }

    #[tokio::test]
    async fn test_connect_print_disconnect_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("rfcomm0");
        std::fs::write(&device, b"").unwrap();

        let printer = SerialPrinter::with_device_dir(dir.path());
        let address = device.display().to_string();

        assert!(printer.connect(&address).await.unwrap());
        assert!(printer.print_text("TOTAL  8175.00\n").await.unwrap());
        assert!(printer.disconnect().await.unwrap());

        // Second disconnect reports no open connection.
        assert!(!printer.disconnect().await.unwrap());

        let written = std::fs::read_to_string(&device).unwrap();
        assert!(written.starts_with("TOTAL  8175.00\n"));
        assert!(written.ends_with(PAPER_FEED));
    }

    #[tokio::test]
    async fn test_connect_missing_device_reports_false() {
        let dir = tempfile::tempdir().unwrap();
        let printer = SerialPrinter::with_device_dir(dir.path());

        let missing = dir.path().join("rfcomm9").display().to_string();
        assert!(!printer.connect(&missing).await.unwrap());
    }

    #[tokio::test]
    async fn test_print_without_connection_errors() {
        let dir = tempfile::tempdir().unwrap();
        let printer = SerialPrinter::with_device_dir(dir.path());

        let err = printer.print_text("anything").await.unwrap_err();
        assert!(matches!(err, PrinterError::NotConnected));
    }
}
