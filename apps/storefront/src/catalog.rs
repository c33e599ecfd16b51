//! # JSON Catalog
//!
//! A [`Catalog`] backed by a JSON array of products, as exported by the
//! shop's admin.
//!
//! ## File Format
//! Amounts are minor units (poisha):
//! ```json
//! [
//!   {
//!     "id": "p-1",
//!     "name": "Classic Tee",
//!     "code": "TEE-01",
//!     "price": 50000,
//!     "deliveryCharge": 5000,
//!     "images": ["https://cdn.example/tee.jpg"],
//!     "sizes": ["M", "L"],
//!     "colors": ["Black"],
//!     "stock": 12
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use fenzo_core::{CoreError, Product, ValidationError};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::ports::Catalog;

/// Products loaded once from JSON and validated.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    products: Vec<Product>,
}

impl JsonCatalog {
    /// Parses and validates a catalog document.
    ///
    /// ## Errors
    /// - Malformed JSON
    /// - A product failing [`Product::validate`]
    /// - Two products sharing an id
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Reads a catalog file from disk.
    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        debug!(?path, "Reading catalog file");
        let json = std::fs::read_to_string(path).map_err(|e| {
            ApiError::internal(format!("Cannot read catalog {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, ApiError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate().map_err(CoreError::from)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::from(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                })
                .into());
            }
        }

        info!(count = products.len(), "Catalog loaded");
        Ok(JsonCatalog { products })
    }
}

impl Catalog for JsonCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
