//! # copra-printer: Printer Gateway for Copra POS
//!
//! The receipt printer behind a fixed capability trait. The rest of the
//! application renders the receipt text (`copra_core::receipt_text`) and
//! hands the finished block to [`PrinterPort::print_text`]; nothing above
//! this crate touches transport-level concerns.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Printer Selection                                │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COPRA_PRINTER env flag ── "serial" ──► SerialPrinter                  │
//! │       │                                 writes to /dev/rfcomm*         │
//! │       │                                                                 │
//! │       └────── "mock" / unset ─────────► MockPrinter                    │
//! │                                         captures text in memory        │
//! │                                                                         │
//! │  The choice happens ONCE, here. No runtime probing, no silent          │
//! │  fallback from a broken device to the mock.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod mock;
pub mod serial;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{PrinterError, PrinterResult};
pub use gateway::{PairedDevice, PrinterPort};
pub use mock::MockPrinter;
pub use serial::SerialPrinter;

use std::sync::Arc;
use tracing::{info, warn};

/// Environment flag that selects the printer implementation at startup.
pub const PRINTER_ENV_VAR: &str = "COPRA_PRINTER";

/// Selects the printer implementation from [`PRINTER_ENV_VAR`].
///
/// - `serial` → [`SerialPrinter`] over paired serial device nodes
/// - `mock`, unset, or unrecognized → [`MockPrinter`]
pub fn printer_from_env() -> Arc<dyn PrinterPort> {
    match std::env::var(PRINTER_ENV_VAR).as_deref() {
        Ok("serial") => {
            info!("using serial printer gateway");
            Arc::new(SerialPrinter::new())
        }
        Ok("mock") | Err(_) => {
            info!("using mock printer gateway");
            Arc::new(MockPrinter::new())
        }
        Ok(other) => {
            warn!(value = other, "unrecognized printer selection, using mock");
            Arc::new(MockPrinter::new())
        }
    }
}
