//! # Validation Module
//!
//! Input validation utilities for Copra POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI Shell (out of scope)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (SQLite)                                               │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE constraints (username, receipt_number)                     │
//! │                                                                         │
//! │  Defense in depth: the store never sees a negative fee or an empty     │
//! │  username, but constraints still back the invariants up.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// Field length bounds. Generous for a single-station app; mostly here to
// stop pathological input from a misbehaving form.
const MAX_USERNAME_LEN: usize = 32;
const MIN_PASSWORD_LEN: usize = 4;
const MAX_PASSWORD_LEN: usize = 64;
const MAX_CUSTOMER_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;

// =============================================================================
// Credential Validators
// =============================================================================

/// Validates an operator username.
///
/// ## Rules
/// - Must not be empty
/// - At most 32 characters
/// - Letters, digits, dots, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use copra_core::validation::validate_username;
///
/// assert!(validate_username("admin").is_ok());
/// assert!(validate_username("").is_err());
/// assert!(validate_username("has space").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.len() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, numbers, dots, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a password before it is hashed.
///
/// ## Rules
/// - Between 4 and 64 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    if password.len() > MAX_PASSWORD_LEN {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: MAX_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Transaction Validators
// =============================================================================

/// Validates a customer name.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_name".to_string(),
        });
    }

    if name.len() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer_name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer address. Empty is allowed.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    if address.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(())
}

/// Validates the weight pair of a transaction.
///
/// ## Rules
/// - Both weights must be finite and non-negative
/// - The deduction cannot exceed the gross weight
///
/// ## Example
/// ```rust
/// use copra_core::validation::validate_weights;
///
/// assert!(validate_weights(1000.0, 50.0).is_ok());
/// assert!(validate_weights(50.0, 1000.0).is_err());
/// assert!(validate_weights(-1.0, 0.0).is_err());
/// ```
pub fn validate_weights(gross_weight: f64, deduction_weight: f64) -> ValidationResult<()> {
    validate_non_negative("gross_weight", gross_weight)?;
    validate_non_negative("deduction_weight", deduction_weight)?;

    if deduction_weight > gross_weight {
        return Err(ValidationError::DeductionExceedsGross {
            gross: gross_weight,
            deduction: deduction_weight,
        });
    }

    Ok(())
}

/// Validates a unit price.
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<()> {
    validate_non_negative("unit_price", unit_price)
}

/// Validates a transport fee.
pub fn validate_transport_fee(transport_fee: f64) -> ValidationResult<()> {
    validate_non_negative("transport_fee", transport_fee)
}

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
