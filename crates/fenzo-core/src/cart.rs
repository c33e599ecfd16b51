//! # Cart
//!
//! The shopper's cart: an ordered list of line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Cart Method             Cart State Change     │
//! │  ───────────              ───────────             ─────────────────     │
//! │                                                                         │
//! │  Add to Cart / Order Now ► add() ────────────────► items.push(item)    │
//! │                                                                         │
//! │  Click Remove ───────────► remove(cart_id) ──────► items.retain(..)    │
//! │                                                                         │
//! │  Order placed ───────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Render cart / summary ──► items(), totals() ────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Line items are keyed by [`CartId`], never by product id: the same product
//! added twice (or in two variants) yields two independent line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing::CartTotals;
use crate::types::{DeliveryPolicy, Product};

// =============================================================================
// Cart Id
// =============================================================================

/// Identity of one line item, unique among the items a cart holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    fn generate() -> Self {
        CartId(Uuid::new_v4())
    }
}

impl From<Uuid> for CartId {
    fn from(id: Uuid) -> Self {
        CartId(id)
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One cart entry: a single product + variant added by one add action.
///
/// ## Snapshot Semantics
/// `name`, `code`, `images`, `price` and `delivery_charge` are frozen copies
/// taken at add time. A later catalog change does not alter items already
/// in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    #[ts(as = "String")]
    pub cart_id: CartId,

    /// Catalog product this item was created from.
    pub product_id: String,

    pub name: String,
    pub code: String,
    pub images: Vec<String>,

    /// Empty when the product has no size dimension.
    pub selected_size: String,

    /// Empty when the product has no color dimension.
    pub selected_color: String,

    pub price: Money,
    pub delivery_charge: Money,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn from_product(
        cart_id: CartId,
        product: &Product,
        selected_size: String,
        selected_color: String,
    ) -> Self {
        CartLineItem {
            cart_id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            code: product.code.clone(),
            images: product.images.clone(),
            selected_size,
            selected_color,
            price: product.price,
            delivery_charge: product.delivery_charge,
            added_at: Utc::now(),
        }
    }

    /// Image for list rows; `None` lets the view show its placeholder.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Every held item has a distinct `cart_id`
/// - Items stay in insertion order (display and summary order follow it)
/// - No merging: one line item per add action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a new line item for `product` in the chosen variant.
    ///
    /// Always succeeds. Adding the same product and variant twice yields
    /// two line items with different ids.
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::{Cart, Money, Product};
    ///
    /// let product = Product {
    ///     id: "p-1".into(),
    ///     name: "Classic Tee".into(),
    ///     code: "TEE-01".into(),
    ///     price: Money::from_major(500),
    ///     delivery_charge: Money::from_major(50),
    ///     images: vec![],
    ///     sizes: vec!["M".into()],
    ///     colors: vec!["Black".into()],
    ///     stock: 3,
    ///     description: None,
    /// };
    ///
    /// let mut cart = Cart::new();
    /// let first = cart.add(&product, "M", "Black");
    /// let second = cart.add(&product, "M", "Black");
    ///
    /// assert_eq!(cart.len(), 2);
    /// assert_ne!(first.cart_id, second.cart_id);
    /// ```
    pub fn add(
        &mut self,
        product: &Product,
        selected_size: impl Into<String>,
        selected_color: impl Into<String>,
    ) -> CartLineItem {
        let cart_id = self.fresh_id();
        let item = CartLineItem::from_product(
            cart_id,
            product,
            selected_size.into(),
            selected_color.into(),
        );
        self.items.push(item.clone());
        item
    }

    /// Removes the line item with `cart_id`.
    ///
    /// An id that is not (or no longer) in the cart is ignored, so a stale
    /// double click is harmless. Returns whether an item was removed.
    pub fn remove(&mut self, cart_id: CartId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.cart_id != cart_id);
        self.items.len() != initial_len
    }

    /// Current line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, cart_id: CartId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.cart_id == cart_id)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pricing summary for the current items.
    pub fn totals(&self, policy: &DeliveryPolicy) -> CartTotals {
        CartTotals::compute(&self.items, policy)
    }

    fn fresh_id(&self) -> CartId {
        loop {
            let id = CartId::generate();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
