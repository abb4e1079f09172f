//! # Error Types
//!
//! Domain-specific error types for copra-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  copra-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  copra-db errors (separate crate)                                      │
//! │  └── DbError          - Store initialization / query failures          │
//! │                                                                         │
//! │  copra-printer errors (separate crate)                                 │
//! │  └── PrinterError     - Device connection / write failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → surfaced by the UI shell          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (username, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-friendly messages above this layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller-supplied field failed a business rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A numeric settings value could not be parsed.
    ///
    /// ## When This Occurs
    /// - A stored settings string was edited by hand into garbage
    /// - A form field reached the settlement path unvalidated
    #[error("Invalid amount for {field}: '{value}'")]
    InvalidAmount { field: String, value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before a write reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not a finite number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The deduction cannot exceed the gross weight it is taken from.
    #[error("deduction {deduction} kg exceeds gross weight {gross} kg")]
    DeductionExceedsGross { gross: f64, deduction: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::DeductionExceedsGross {
            gross: 100.0,
            deduction: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "deduction 150 kg exceeds gross weight 100 kg"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customer_name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
