//! # copra-core: Pure Business Logic for Copra POS
//!
//! This crate is the **heart** of Copra POS, a small trading application for
//! a copra (dried coconut) buying station. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Copra POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     UI Shell (out of scope)                     │   │
//! │  │    Login ──► Transaction Form ──► Receipt View ──► Settings     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ copra-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────────┐  ┌─────────┐ │   │
//! │  │   │   types   │  │ settlement │  │ receipt_text │  │validation││   │
//! │  │   │ Operator  │  │ total math │  │ printable    │  │  rules  │ │   │
//! │  │   │ Receipt   │  │ formatting │  │ rendering    │  │  checks │ │   │
//! │  │   └───────────┘  └────────────┘  └──────────────┘  └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO HARDWARE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌───────────────▼──────────┐  ┌──────────▼──────────────┐             │
//! │  │   copra-db (Store)       │  │   copra-printer         │             │
//! │  │   SQLite access layer    │  │   Serial / mock gateway │             │
//! │  └──────────────────────────┘  └─────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Operator, Setting, Receipt, Defaults)
//! - [`settlement`] - Total computation and amount/receipt-number formatting
//! - [`receipt_text`] - Plain-text receipt rendering for the line printer
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod receipt_text;
pub mod settlement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use receipt_text::ReceiptLayout;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Settings key for the default purchase price per kilogram.
pub const SETTING_UNIT_PRICE: &str = "unit_price";

/// Settings key for the default transport fee per transaction.
pub const SETTING_TRANSPORT_FEE: &str = "transport_fee";

/// The full set of recognized settings keys.
///
/// The settings table holds at most one row per key; reads of a missing key
/// fall back to [`DEFAULT_SETTING_VALUE`].
pub const SETTING_KEYS: &[&str] = &[SETTING_UNIT_PRICE, SETTING_TRANSPORT_FEE];

/// Fallback value for a settings key that has no stored row.
pub const DEFAULT_SETTING_VALUE: &str = "0";

/// Prefix for every receipt number.
pub const RECEIPT_NUMBER_PREFIX: &str = "RCT-";

/// Minimum digit width of the sequential part of a receipt number.
///
/// Sequence 1 renders as `RCT-0001`; sequences past 9999 simply widen.
pub const RECEIPT_NUMBER_WIDTH: usize = 4;

/// Operators inserted when the store is seeded on first run.
///
/// Passwords listed here are hashed before they reach the store; the clear
/// text never persists.
pub const DEFAULT_OPERATORS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("cashier", "cashier123"),
];
