//! # Collaborator Ports
//!
//! Traits for the parts of the storefront that live outside this crate:
//! where products come from, how views switch, and how orders leave.
//!
//! ```text
//! ┌──────────────┐    products()     ┌──────────────┐
//! │   Catalog    │ ────────────────► │              │
//! └──────────────┘                   │              │   navigate(View)   ┌──────────────┐
//!                                    │  Storefront  │ ─────────────────► │  Navigator   │
//! ┌──────────────┐  submit(order)    │              │                    └──────────────┘
//! │OrderSubmitter│ ◄──────────────── │              │
//! └──────────────┘                   └──────────────┘
//! ```

use std::future::Future;

use chrono::{DateTime, Utc};
use fenzo_core::{OrderRequest, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Views
// =============================================================================

/// The storefront's views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "productId", rename_all = "camelCase")]
pub enum View {
    Home,
    Product(String),
    Cart,
    Checkout,
}

/// Switches the active view.
pub trait Navigator {
    fn navigate(&mut self, view: View);
}

/// Navigator that just remembers where the shopper has been.
///
/// Used by the demo binary and by hosts that render from `current()`.
#[derive(Debug, Clone)]
pub struct ViewHistory {
    visited: Vec<View>,
}

impl ViewHistory {
    pub fn new() -> Self {
        ViewHistory {
            visited: vec![View::Home],
        }
    }

    pub fn current(&self) -> &View {
        // `visited` starts with Home and is only ever pushed to.
        self.visited.last().unwrap_or(&View::Home)
    }

    pub fn visited(&self) -> &[View] {
        &self.visited
    }
}

impl Default for ViewHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ViewHistory {
    fn navigate(&mut self, view: View) {
        self.visited.push(view);
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only product source, already loaded.
pub trait Catalog {
    /// All products in display order.
    fn products(&self) -> &[Product];

    fn find(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

// =============================================================================
// Order Submission
// =============================================================================

/// Acknowledgement from the order-submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    pub fn new() -> Self {
        OrderReceipt {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
        }
    }
}

impl Default for OrderReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Why an order did not go through.
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The shop refused the order (business reason, shown to the shopper).
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The transport failed; the detail is for logs only.
    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// Sends a validated order somewhere (HTTP, queue, ...).
///
/// Called at most once per successful checkout submission.
pub trait OrderSubmitter: Send + Sync {
    fn submit(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<OrderReceipt, SubmitError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenzo_core::Money;

    struct Shelf(Vec<Product>);

    impl Catalog for Shelf {
        fn products(&self) -> &[Product] {
            &self.0
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_uppercase(),
            code: String::new(),
            price: Money::from_major(100),
            delivery_charge: Money::zero(),
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: 1,
            description: None,
        }
    }

    #[test]
    fn test_catalog_find_default() {
        let shelf = Shelf(vec![product("a"), product("b")]);
        assert_eq!(shelf.find("b").map(|p| p.name.as_str()), Some("B"));
        assert!(shelf.find("zzz").is_none());
    }

    #[test]
    fn test_view_history() {
        let mut history = ViewHistory::new();
        assert_eq!(history.current(), &View::Home);

        history.navigate(View::Product("a".to_string()));
        history.navigate(View::Cart);

        assert_eq!(history.current(), &View::Cart);
        assert_eq!(history.visited().len(), 3);
    }

    #[test]
    fn test_view_serialization() {
        let json = serde_json::to_value(View::Product("p-1".to_string())).unwrap();
        assert_eq!(json["view"], "product");
        assert_eq!(json["productId"], "p-1");

        let json = serde_json::to_value(View::Checkout).unwrap();
        assert_eq!(json["view"], "checkout");
    }
}
