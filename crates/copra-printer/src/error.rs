//! # Printer Error Types

use thiserror::Error;

/// Printer gateway errors.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// `print_text` or `disconnect` was called with no device connected.
    #[error("No printer connected")]
    NotConnected,

    /// The target device exists but could not be used.
    #[error("Printer device unavailable: {address}")]
    DeviceUnavailable { address: String },

    /// Underlying I/O failure while talking to the device.
    #[error("Printer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations.
pub type PrinterResult<T> = Result<T, PrinterError>;
