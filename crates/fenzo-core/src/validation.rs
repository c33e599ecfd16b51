//! # Validation Module
//!
//! Field-level checks shared by catalog validation and the storefront forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load (host)                                          │
//! │  └── Product::validate → THIS MODULE → ValidationError                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shopper forms (selection, checkout)                          │
//! │  └── is_blank → per-field boolean flags, never an Err                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// True when the value is empty after trimming whitespace.
///
/// ## Example
/// ```rust
/// use fenzo_core::validation::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   \n"));
/// assert!(!is_blank(" Dhaka "));
/// ```
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a required text field is present.
///
/// ## Example
/// ```rust
/// use fenzo_core::validation::validate_required;
///
/// assert!(validate_required("name", "Classic Tee").is_ok());
/// assert!(validate_required("name", "  ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if is_blank(value) {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free item, free delivery)
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank("a"));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("phone", "01700000000").is_ok());

        let err = validate_required("phone", " ").unwrap_err();
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", Money::zero()).is_ok());
        assert!(validate_amount("price", Money::from_major(500)).is_ok());
        assert!(validate_amount("price", Money::from_minor(-1)).is_err());
    }
}
