//! # Checkout Form
//!
//! Collects contact details and a payment method, and only releases an
//! [`OrderRequest`] once all four are complete.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Place Order clicked                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit(cart items) ──► validate()                                      │
//! │       │                    │                                            │
//! │       │      ┌─────────────┴─────────────┐                              │
//! │       │      ▼                           ▼                              │
//! │       │   all fields ok              any field missing                 │
//! │       │      │                           │                              │
//! │       │      ▼                           ▼                              │
//! │       │   Some(OrderRequest)          None; every missing field        │
//! │       │   → host sends it once        flagged at the same time         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::types::{CheckoutData, PaymentMethod};
use crate::validation::is_blank;

/// Free-text checkout fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    Name,
    Phone,
    Address,
}

/// Per-field error flags from the last validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutErrors {
    pub name: bool,
    pub phone: bool,
    pub address: bool,
    pub payment_method: bool,
}

impl CheckoutErrors {
    pub fn any(&self) -> bool {
        self.name || self.phone || self.address || self.payment_method
    }

    fn clear(&mut self, field: CheckoutField) {
        match field {
            CheckoutField::Name => self.name = false,
            CheckoutField::Phone => self.phone = false,
            CheckoutField::Address => self.address = false,
        }
    }
}

/// Result of [`CheckoutForm::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutOutcome {
    pub valid: bool,
    pub errors: CheckoutErrors,
}

/// What the order-submission collaborator receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub checkout_data: CheckoutData,
    pub cart_items: Vec<CartLineItem>,
}

/// Checkout draft plus the error flags shown next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    data: CheckoutData,
    errors: CheckoutErrors,
}

impl CheckoutForm {
    /// Empty draft, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates a text field and clears its error flag.
    pub fn set_field(&mut self, field: CheckoutField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckoutField::Name => self.data.name = value,
            CheckoutField::Phone => self.data.phone = value,
            CheckoutField::Address => self.data.address = value,
        }
        self.errors.clear(field);
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.data.payment_method = Some(method);
        self.errors.payment_method = false;
    }

    pub fn data(&self) -> &CheckoutData {
        &self.data
    }

    pub fn errors(&self) -> CheckoutErrors {
        self.errors
    }

    /// Flags every incomplete field at once and records the flags.
    pub fn validate(&mut self) -> CheckoutOutcome {
        self.errors = CheckoutErrors {
            name: is_blank(&self.data.name),
            phone: is_blank(&self.data.phone),
            address: is_blank(&self.data.address),
            payment_method: self.data.payment_method.is_none(),
        };

        CheckoutOutcome {
            valid: !self.errors.any(),
            errors: self.errors,
        }
    }

    /// Validates, and on success builds the order hand-off.
    ///
    /// `None` means the form is incomplete; [`CheckoutForm::errors`] says
    /// which fields. No transport call should be made in that case.
    pub fn submit(&mut self, cart_items: &[CartLineItem]) -> Option<OrderRequest> {
        if !self.validate().valid {
            return None;
        }

        Some(OrderRequest {
            checkout_data: self.data.clone(),
            cart_items: cart_items.to_vec(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
