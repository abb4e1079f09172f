//! # Mock Printer
//!
//! In-memory implementation of [`PrinterPort`] for development machines
//! without a paired printer and for tests. Printed text is captured and
//! can be inspected afterwards.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PrinterError, PrinterResult};
use crate::gateway::{PairedDevice, PrinterPort};

/// Printer gateway that keeps everything in memory.
///
/// Behaves like the real gateway: printing requires a prior `connect`,
/// so caller code exercised against the mock follows the same sequence
/// it would in production.
pub struct MockPrinter {
    devices: Vec<PairedDevice>,
    connected: Mutex<Option<String>>,
    printed: Mutex<Vec<String>>,
}

impl MockPrinter {
    /// Creates a mock with one scripted paired device.
    pub fn new() -> Self {
        MockPrinter::with_devices(vec![PairedDevice {
            name: "mock-printer".to_string(),
            address: "mock:00".to_string(),
        }])
    }

    /// Creates a mock with a custom scripted device list.
    pub fn with_devices(devices: Vec<PairedDevice>) -> Self {
        MockPrinter {
            devices,
            connected: Mutex::new(None),
            printed: Mutex::new(Vec::new()),
        }
    }

    /// Returns everything printed so far, in order.
    pub fn printed(&self) -> Vec<String> {
        self.printed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the address of the currently connected device, if any.
    pub fn connected_address(&self) -> Option<String> {
        self.connected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockPrinter {
    fn default() -> Self {
        MockPrinter::new()
    }
}

#[async_trait]
impl PrinterPort for MockPrinter {
    async fn list_paired_devices(&self) -> PrinterResult<Vec<PairedDevice>> {
        Ok(self.devices.clone())
    }

    /// Accepts any address from the scripted device list.
    async fn connect(&self, address: &str) -> PrinterResult<bool> {
        let known = self.devices.iter().any(|d| d.address == address);
        if known {
            *self
                .connected
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(address.to_string());
        }
        Ok(known)
    }

    async fn disconnect(&self) -> PrinterResult<bool> {
        Ok(self
            .connected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some())
    }

    async fn print_text(&self, text: &str) -> PrinterResult<bool> {
        if self.connected_address().is_none() {
            return Err(PrinterError::NotConnected);
        }

        debug!(bytes = text.len(), "mock printer captured text");
        self.printed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
