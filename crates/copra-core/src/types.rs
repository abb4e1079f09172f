//! # Domain Types
//!
//! Core domain types used throughout Copra POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Operator     │   │     Setting     │   │     Receipt     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  key (fixed)    │   │  id (UUID)      │       │
//! │  │  username       │   │  value (string) │   │  receipt_number │       │
//! │  │  password_hash  │   │                 │   │  weights, total │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Operator and Receipt both carry:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID: (username, receipt_number) - human-readable, unique

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Operator
// =============================================================================

/// An authenticated user of the application (shift worker or admin).
///
/// Operators are created at first-run seeding or by explicit registration;
/// they are never updated and never deleted except by a full store reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Operator {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Login name. Unique and case-sensitive.
    pub username: String,

    /// Argon2 hash of the operator's password (PHC string format).
    ///
    /// The clear-text password is never persisted.
    pub password_hash: String,

    /// When the operator record was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Setting
// =============================================================================

/// A named default value applied to new transactions unless overridden.
///
/// Keys come from the fixed set in [`crate::SETTING_KEYS`]; the store holds
/// at most one row per key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// The operational defaults presented to a new transaction form.
///
/// Values are kept as strings exactly as the operator entered them; missing
/// rows self-heal to [`crate::DEFAULT_SETTING_VALUE`] on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Default purchase price per kilogram.
    pub unit_price: String,

    /// Default transport fee per transaction.
    pub transport_fee: String,
}

// =============================================================================
// Receipt
// =============================================================================

/// An immutable record of one completed copra purchase transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business identifier, e.g. `RCT-0001`. Unique, assigned sequentially.
    pub receipt_number: String,

    /// Name of the selling customer.
    pub customer_name: String,

    /// Customer address, free text. Empty for legacy records.
    pub address: String,

    /// Agreed price per kilogram.
    pub unit_price: f64,

    /// Scale reading in kilograms.
    pub gross_weight: f64,

    /// Weight deducted for moisture, sacks, and debris, in kilograms.
    pub deduction_weight: f64,

    /// Flat transport fee added on top of the weight settlement.
    pub transport_fee: f64,

    /// Settlement total as computed by the caller.
    ///
    /// The store persists this value as provided and never recomputes it;
    /// see [`crate::settlement::settlement_total`] for the caller-side math.
    pub total: f64,

    /// When the transaction was finalized. Assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied portion of a receipt, handed to the store when a
/// transaction is finalized.
///
/// The store assigns `id` and `created_at` at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptDraft {
    pub receipt_number: String,
    pub customer_name: String,
    pub address: String,
    pub unit_price: f64,
    pub gross_weight: f64,
    pub deduction_weight: f64,
    pub transport_fee: f64,
    pub total: f64,
}

impl ReceiptDraft {
    /// Returns the net weight after deduction, in kilograms.
    #[inline]
    pub fn net_weight(&self) -> f64 {
        self.gross_weight - self.deduction_weight
    }
}

impl Receipt {
    /// Returns the net weight after deduction, in kilograms.
    #[inline]
    pub fn net_weight(&self) -> f64 {
        self.gross_weight - self.deduction_weight
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_weight() {
        let draft = ReceiptDraft {
            receipt_number: "RCT-0001".to_string(),
            customer_name: "Juan Cruz".to_string(),
            address: String::new(),
            unit_price: 8.5,
            gross_weight: 1000.0,
            deduction_weight: 50.0,
            transport_fee: 100.0,
            total: 8175.0,
        };
        assert!((draft.net_weight() - 950.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defaults_equality() {
        let a = Defaults {
            unit_price: "8.50".to_string(),
            transport_fee: "50".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
