//! # Domain Types
//!
//! Core domain types shared by the cart, pricing, and form modules.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  CheckoutData   │   │ DeliveryPolicy  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, code       │   │  name           │   │  free_delivery_ │       │
//! │  │  price          │   │  phone          │   │    threshold    │       │
//! │  │  delivery_charge│   │  address        │   └─────────────────┘       │
//! │  │  sizes, colors  │   │  payment_method │                             │
//! │  └─────────────────┘   └─────────────────┘   ┌─────────────────┐       │
//! │                                              │ PaymentMethod   │       │
//! │                                              │  bKash, Nagad,  │       │
//! │                                              │  Cash on Deliv. │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Products belong to the catalog collaborator and are read-only here.
//! The line items derived from them are owned by [`crate::cart::Cart`].

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_amount, validate_required, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
///
/// Amounts are in minor units (see [`Money`]). Every collection field
/// defaults to empty, so a sparse catalog entry still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    /// Display name.
    pub name: String,

    /// Merchant product code shown on the product and cart views.
    #[serde(default)]
    pub code: String,

    pub price: Money,

    /// Per-line-item delivery cost.
    #[serde(default)]
    pub delivery_charge: Money,

    /// Image URLs in gallery order. May be empty.
    #[serde(default)]
    pub images: Vec<String>,

    /// Size options. Empty means the product has no size dimension.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Color options. Empty means the product has no color dimension.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Units in stock. Informational only, never decremented.
    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// First gallery image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Checks catalog data before it reaches a view.
    ///
    /// ## Rules
    /// - `id` and `name` must not be blank
    /// - `price` and `delivery_charge` must not be negative
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("id", &self.id)?;
        validate_required("name", &self.name)?;
        validate_amount("price", self.price)?;
        validate_amount("deliveryCharge", self.delivery_charge)?;
        Ok(())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// The fixed set of payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// bKash mobile wallet.
    #[serde(rename = "bKash")]
    BKash,
    /// Nagad mobile wallet.
    #[serde(rename = "Nagad")]
    Nagad,
    /// Pay the courier on delivery.
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// All methods, in the order the checkout view lists them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::BKash,
        PaymentMethod::Nagad,
        PaymentMethod::CashOnDelivery,
    ];

    /// Name shown to the shopper and sent with the order.
    pub const fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::BKash => "bKash",
            PaymentMethod::Nagad => "Nagad",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Checkout Data
// =============================================================================

/// Contact and payment details collected on the checkout view.
///
/// ## Lifecycle
/// ```text
/// enter checkout ──► empty draft ──► edited field by field
///                                          │
///                     ┌────────────────────┴──────────────┐
///                     ▼                                   ▼
///          submitted (read-only copy)          navigate away (discarded)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutData {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: Option<PaymentMethod>,
}

// =============================================================================
// Delivery Policy
// =============================================================================

/// Store-wide delivery rule, supplied once by the host configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    /// Subtotal at or above which delivery is free. `None` disables the
    /// free-delivery rule entirely.
    pub free_delivery_threshold: Option<Money>,
}

impl DeliveryPolicy {
    /// Policy with a free-delivery threshold.
    pub const fn with_threshold(threshold: Money) -> Self {
        DeliveryPolicy {
            free_delivery_threshold: Some(threshold),
        }
    }

    /// Policy where delivery is always charged.
    pub const fn none() -> Self {
        DeliveryPolicy {
            free_delivery_threshold: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Classic Tee".to_string(),
            code: "TEE-01".to_string(),
            price: Money::from_major(500),
            delivery_charge: Money::from_major(50),
            images: vec!["https://cdn.example/tee-front.jpg".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            colors: vec!["Black".to_string()],
            stock: 12,
            description: None,
        }
    }

    #[test]
    fn test_product_primary_image_tolerates_empty_gallery() {
        let mut product = tee();
        assert_eq!(
            product.primary_image(),
            Some("https://cdn.example/tee-front.jpg")
        );

        product.images.clear();
        assert_eq!(product.primary_image(), None);
    }

    #[test]
    fn test_product_validate() {
        assert!(tee().validate().is_ok());

        let mut blank_name = tee();
        blank_name.name = "  ".to_string();
        assert!(blank_name.validate().is_err());

        let mut negative = tee();
        negative.delivery_charge = Money::from_minor(-1);
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_product_deserializes_sparse_entry() {
        let json = r#"{ "id": "p-9", "name": "Gift Card", "price": 100000 }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Money::from_major(1000));
        assert!(product.delivery_charge.is_zero());
        assert!(product.images.is_empty());
        assert!(product.sizes.is_empty());
        assert!(product.colors.is_empty());
    }

    #[test]
    fn test_payment_method_wire_names() {
        let json = serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(json, "\"Cash on Delivery\"");

        let method: PaymentMethod = serde_json::from_str("\"bKash\"").unwrap();
        assert_eq!(method, PaymentMethod::BKash);

        for method in PaymentMethod::ALL {
            assert_eq!(
                serde_json::to_string(&method).unwrap(),
                format!("\"{}\"", method.display_name())
            );
        }
    }

    #[test]
    fn test_checkout_data_default_is_empty() {
        let data = CheckoutData::default();
        assert!(data.name.is_empty());
        assert_eq!(data.payment_method, None);
    }

    #[test]
    fn test_delivery_policy_default_has_no_threshold() {
        assert_eq!(DeliveryPolicy::default(), DeliveryPolicy::none());
        assert_eq!(
            DeliveryPolicy::with_threshold(Money::from_major(1000)).free_delivery_threshold,
            Some(Money::from_major(1000))
        );
    }
}
