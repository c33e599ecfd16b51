//! # API Error Type
//!
//! Unified error type for storefront controller actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storefront method ── Result<T, ApiError>                               │
//! │       │                                                                 │
//! │       ├── CoreError (unknown product, empty cart) ──► ApiError          │
//! │       ├── SubmitError (order transport failed) ─────► ApiError          │
//! │       └── serde_json::Error (bad catalog file) ─────► ApiError          │
//! │                                                                         │
//! │  An incomplete form is NOT an ApiError: it comes back as data           │
//! │  (SelectionOutcome / CheckoutOutcome) so the view can flag fields.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The view receives both a machine-readable `code` and a human-readable
//! `message`:
//! ```json
//! { "code": "NOT_FOUND", "message": "Product not found: p-42" }
//! ```

use fenzo_core::CoreError;
use serde::Serialize;

use crate::ports::SubmitError;

/// Error returned from storefront actions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for view responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Catalog or config data failed validation
    ValidationError,

    /// Action not allowed in the current cart state
    CartError,

    /// The order-submission collaborator rejected or failed the order
    OrderSubmission,

    /// Unexpected internal failure
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::EmptyCart => ApiError::cart("Your cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts order transport failures to API errors.
impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Rejected(reason) => ApiError::new(
                ErrorCode::OrderSubmission,
                format!("Order was rejected: {}", reason),
            ),
            SubmitError::Unavailable(detail) => {
                // Log the transport detail but show a generic message
                tracing::error!("Order submission unavailable: {}", detail);
                ApiError::new(
                    ErrorCode::OrderSubmission,
                    "Could not place the order, please try again",
                )
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Malformed catalog data: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use fenzo_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound("p-42".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-42");

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_submit_error_mapping() {
        let err: ApiError = SubmitError::Rejected("address outside delivery area".into()).into();
        assert_eq!(err.code, ErrorCode::OrderSubmission);
        assert!(err.message.contains("outside delivery area"));

        let err: ApiError = SubmitError::Unavailable("connection reset".into()).into();
        assert!(!err.message.contains("connection reset"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "p-1");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: p-1");
    }
}
