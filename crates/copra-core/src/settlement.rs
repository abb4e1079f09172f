//! # Settlement Module
//!
//! Pure settlement math and formatting for copra purchases.
//!
//! ## The Settlement Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Copra Purchase Settlement                          │
//! │                                                                         │
//! │  Scale reading (gross)          1000.00 kg                              │
//! │  Deduction (moisture, sacks)  −   50.00 kg                              │
//! │                               ────────────                              │
//! │  Net weight                      950.00 kg                              │
//! │  × Unit price                      8.50 /kg                             │
//! │                               ────────────                              │
//! │  Weight settlement              8075.00                                 │
//! │  + Transport fee                 100.00                                 │
//! │                               ────────────                              │
//! │  TOTAL                          8175.00                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store persists the total exactly as the caller computed it; keeping
//! this function as the single computation path is what makes the stored
//! value trustworthy.

use crate::error::ValidationError;
use crate::{RECEIPT_NUMBER_PREFIX, RECEIPT_NUMBER_WIDTH};

/// Computes the settlement total for one purchase.
///
/// `total = (gross_weight − deduction_weight) × unit_price + transport_fee`
///
/// ## Example
/// ```rust
/// use copra_core::settlement::settlement_total;
///
/// let total = settlement_total(1000.0, 50.0, 8.5, 100.0);
/// assert!((total - 8175.0).abs() < 1e-9);
/// ```
#[inline]
pub fn settlement_total(
    gross_weight: f64,
    deduction_weight: f64,
    unit_price: f64,
    transport_fee: f64,
) -> f64 {
    (gross_weight - deduction_weight) * unit_price + transport_fee
}

/// Formats an amount for display and storage-facing strings, always with
/// two decimal places.
///
/// ## Example
/// ```rust
/// use copra_core::settlement::format_amount;
///
/// assert_eq!(format_amount(8175.0), "8175.00");
/// assert_eq!(format_amount(8.5), "8.50");
/// ```
#[inline]
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Parses an operator-entered amount string into a number.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - Must parse as a finite number
/// - Must not be negative (weights, prices and fees are all non-negative)
pub fn parse_amount(field: &str, value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let parsed: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a number", trimmed),
    })?;

    if !parsed.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if parsed < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(parsed)
}

/// Formats a receipt sequence number as a prefixed, zero-padded string.
///
/// Sequence 1 becomes `RCT-0001`. Sequences that outgrow the pad width are
/// not truncated, they simply widen (`RCT-10000`).
///
/// ## Example
/// ```rust
/// use copra_core::settlement::format_receipt_number;
///
/// assert_eq!(format_receipt_number(1), "RCT-0001");
/// assert_eq!(format_receipt_number(42), "RCT-0042");
/// assert_eq!(format_receipt_number(10000), "RCT-10000");
/// ```
#[inline]
pub fn format_receipt_number(seq: u64) -> String {
    format!(
        "{}{:0width$}",
        RECEIPT_NUMBER_PREFIX,
        seq,
        width = RECEIPT_NUMBER_WIDTH
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_total_reference_case() {
        // 1000 kg gross, 50 kg deduction, 8.50/kg, 100 fee → 8175.00
        let total = settlement_total(1000.0, 50.0, 8.5, 100.0);
        assert!((total - 8175.0).abs() < 1e-9);
        assert_eq!(format_amount(total), "8175.00");
    }

    #[test]
    fn test_settlement_total_zero_fee() {
        let total = settlement_total(120.0, 0.0, 10.0, 0.0);
        assert!((total - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_settlement_total_fee_only() {
        // Degenerate case: nothing weighed, fee still charged.
        let total = settlement_total(0.0, 0.0, 8.5, 35.0);
        assert!((total - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(8.5), "8.50");
        assert_eq!(format_amount(8175.004), "8175.00");
        assert_eq!(format_amount(8175.006), "8175.01");
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("unit_price", "8.50").unwrap(), 8.5);
        assert_eq!(parse_amount("transport_fee", " 50 ").unwrap(), 50.0);
        assert_eq!(parse_amount("unit_price", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("unit_price", "").is_err());
        assert!(parse_amount("unit_price", "  ").is_err());
        assert!(parse_amount("unit_price", "abc").is_err());
        assert!(parse_amount("unit_price", "-5").is_err());
        assert!(parse_amount("unit_price", "NaN").is_err());
        assert!(parse_amount("unit_price", "inf").is_err());
    }

    #[test]
    fn test_format_receipt_number() {
        assert_eq!(format_receipt_number(1), "RCT-0001");
        assert_eq!(format_receipt_number(999), "RCT-0999");
        assert_eq!(format_receipt_number(9999), "RCT-9999");
        assert_eq!(format_receipt_number(10000), "RCT-10000");
    }
}
