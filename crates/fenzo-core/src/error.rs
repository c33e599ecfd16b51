//! # Error Types
//!
//! Domain-specific error types for fenzo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fenzo-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Malformed catalog data                         │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the views see (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error here
//! An incomplete selection or checkout form is ordinary state, reported as
//! per-field flags (`SelectionErrors`, `CheckoutErrors`). Removing a line
//! item that is already gone is a no-op. Neither ever produces an `Err`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the loaded catalog.
    ///
    /// ## When This Occurs
    /// - A view asks for a product id that the catalog never supplied
    /// - The catalog was reloaded and the product disappeared
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was requested while the cart holds no line items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Catalog data failed validation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog data validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A monetary or count field is negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two catalog products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::ProductNotFound("p-42".to_string());
        assert_eq!(err.to_string(), "Product not found: p-42");
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "id 'p-1' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
