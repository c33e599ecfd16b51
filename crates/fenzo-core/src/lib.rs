//! # fenzo-core: Order-Assembly Logic for the Fenzo Storefront
//!
//! This crate holds the parts of the storefront with real invariants: the
//! cart, the pricing rules, and the two forms that gate cart and order
//! actions. Everything is synchronous and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fenzo Storefront                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (web front-end)                        │   │
//! │  │   Home ──► Product ──► Cart ──► Checkout                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            Storefront controller (apps/storefront)              │   │
//! │  │   catalog, navigation, order submission ports                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fenzo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌───────────┐  ┌──────────┐        │   │
//! │  │   │  cart   │  │ pricing │  │ selection │  │ checkout │        │   │
//! │  │   │  Cart   │  │ totals  │  │ size/color│  │ contact/ │        │   │
//! │  │   │ LineItem│  │ delivery│  │   gate    │  │ payment  │        │   │
//! │  │   └─────────┘  └─────────┘  └───────────┘  └──────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, PaymentMethod, CheckoutData, DeliveryPolicy
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart aggregate and line items
//! - [`pricing`] - Subtotal, delivery waiver, grand total
//! - [`selection`] - Size/color gate before adding to cart
//! - [`checkout`] - Contact/payment gate before placing an order
//! - [`notice`] - Self-expiring "added to cart" banner
//! - [`validation`] - Field checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fenzo_core::{pricing, Cart, DeliveryPolicy, Money, Product};
//!
//! let product = Product {
//!     id: "p-1".into(),
//!     name: "Classic Tee".into(),
//!     code: "TEE-01".into(),
//!     price: Money::from_major(500),
//!     delivery_charge: Money::from_major(50),
//!     images: vec![],
//!     sizes: vec![],
//!     colors: vec![],
//!     stock: 10,
//!     description: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&product, "", "");
//!
//! let policy = DeliveryPolicy::with_threshold(Money::from_major(1000));
//! assert_eq!(pricing::grand_total(cart.items(), &policy), Money::from_major(550));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod notice;
pub mod pricing;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartId, CartLineItem};
pub use checkout::{CheckoutErrors, CheckoutField, CheckoutForm, CheckoutOutcome, OrderRequest};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notice::SuccessNotice;
pub use pricing::CartTotals;
pub use selection::{ProductSelectionForm, SelectionErrors, SelectionOutcome};
pub use types::*;
