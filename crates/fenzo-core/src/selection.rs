//! # Product Selection Form
//!
//! Gates "Add to Cart" / "Order Now" on the product view until the shopper
//! has picked every variant dimension the product offers.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field values            Error flags (last validate, then cleared)     │
//! │  ────────────            ─────────────────────────────────────────     │
//! │  size:  "" | "M" ...     size:  false ──validate()──► true (if unset   │
//! │  color: "" | "Red" ...   color: false ──validate()──► true  or not     │
//! │                                                             offered)   │
//! │                                                                         │
//! │  set_size(..)  ──► size error cleared immediately                      │
//! │  set_color(..) ──► color error cleared immediately                     │
//! │                                                                         │
//! │  validate() ok  ──► caller adds to cart, then reset_errors()           │
//! │  validate() err ──► flags shown, cart untouched                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors never appear while the shopper is still choosing; only an explicit
//! [`ProductSelectionForm::validate`] raises them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::validation::is_blank;

/// Per-dimension error flags from the last validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionErrors {
    pub size: bool,
    pub color: bool,
}

impl SelectionErrors {
    pub fn any(&self) -> bool {
        self.size || self.color
    }
}

/// Result of [`ProductSelectionForm::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionOutcome {
    pub valid: bool,
    pub errors: SelectionErrors,
}

/// Variant picker state for one product view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSelectionForm {
    offered_sizes: Vec<String>,
    offered_colors: Vec<String>,
    size: String,
    color: String,
    errors: SelectionErrors,
}

impl ProductSelectionForm {
    /// Fresh form for `product`; nothing selected, no errors.
    ///
    /// A dimension the product does not offer (empty option list) is
    /// never required.
    pub fn for_product(product: &Product) -> Self {
        ProductSelectionForm {
            offered_sizes: product.sizes.clone(),
            offered_colors: product.colors.clone(),
            ..Default::default()
        }
    }

    pub fn set_size(&mut self, value: impl Into<String>) {
        self.size = value.into();
        self.errors.size = false;
    }

    pub fn set_color(&mut self, value: impl Into<String>) {
        self.color = value.into();
        self.errors.color = false;
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Error flags as of the last validation, minus fields edited since.
    pub fn errors(&self) -> SelectionErrors {
        self.errors
    }

    /// Checks the selection and records the resulting error flags.
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::{Money, Product, ProductSelectionForm};
    ///
    /// let product = Product {
    ///     id: "p-1".into(),
    ///     name: "Classic Tee".into(),
    ///     code: String::new(),
    ///     price: Money::from_major(500),
    ///     delivery_charge: Money::zero(),
    ///     images: vec![],
    ///     sizes: vec!["M".into(), "L".into()],
    ///     colors: vec!["Black".into()],
    ///     stock: 3,
    ///     description: None,
    /// };
    ///
    /// let mut form = ProductSelectionForm::for_product(&product);
    /// let outcome = form.validate();
    /// assert!(!outcome.valid);
    /// assert!(outcome.errors.size && outcome.errors.color);
    /// ```
    pub fn validate(&mut self) -> SelectionOutcome {
        self.errors = SelectionErrors {
            size: !is_chosen(&self.offered_sizes, &self.size),
            color: !is_chosen(&self.offered_colors, &self.color),
        };

        SelectionOutcome {
            valid: !self.errors.any(),
            errors: self.errors,
        }
    }

    /// Clears all error flags; called after a successful add.
    pub fn reset_errors(&mut self) {
        self.errors = SelectionErrors::default();
    }
}

/// A dimension with no options needs no choice; otherwise the value must
/// be one of the options.
fn is_chosen(offered: &[String], value: &str) -> bool {
    offered.is_empty() || (!is_blank(value) && offered.iter().any(|o| o == value))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(sizes: &[&str], colors: &[&str]) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Panjabi".to_string(),
            code: "PNJ-7".to_string(),
            price: Money::from_major(1800),
            delivery_charge: Money::from_major(60),
            images: Vec::new(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            stock: 4,
            description: None,
        }
    }

    #[test]
    fn test_no_errors_before_validation() {
        let form = ProductSelectionForm::for_product(&product(&["M"], &["Red"]));
        assert_eq!(form.errors(), SelectionErrors::default());
    }

    #[test]
    fn test_missing_size_and_color() {
        let mut form = ProductSelectionForm::for_product(&product(&["M", "L"], &["Red", "Blue"]));

        let outcome = form.validate();
        assert_eq!(
            outcome,
            SelectionOutcome {
                valid: false,
                errors: SelectionErrors {
                    size: true,
                    color: true
                },
            }
        );

        form.set_size("M");
        let outcome = form.validate();
        assert_eq!(
            outcome,
            SelectionOutcome {
                valid: false,
                errors: SelectionErrors {
                    size: false,
                    color: true
                },
            }
        );
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ProductSelectionForm::for_product(&product(&["M"], &["Red"]));
        form.validate();

        form.set_color("Red");
        assert_eq!(
            form.errors(),
            SelectionErrors {
                size: true,
                color: false
            }
        );
    }

    #[test]
    fn test_complete_selection_is_valid() {
        let mut form = ProductSelectionForm::for_product(&product(&["M"], &["Red"]));
        form.set_size("M");
        form.set_color("Red");

        let outcome = form.validate();
        assert!(outcome.valid);
        assert!(!outcome.errors.any());
        assert_eq!(form.size(), "M");
        assert_eq!(form.color(), "Red");
    }

    #[test]
    fn test_dimension_not_offered_is_not_required() {
        let mut sizes_only = ProductSelectionForm::for_product(&product(&["40", "42"], &[]));
        sizes_only.set_size("42");
        assert!(sizes_only.validate().valid);

        let mut neither = ProductSelectionForm::for_product(&product(&[], &[]));
        assert!(neither.validate().valid);
    }

    #[test]
    fn test_value_not_offered_counts_as_unselected() {
        let mut form = ProductSelectionForm::for_product(&product(&["M", "L"], &["Red"]));
        form.set_size("XXL");
        form.set_color("Red");

        let outcome = form.validate();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.errors,
            SelectionErrors {
                size: true,
                color: false
            }
        );

        form.set_size("L");
        assert!(form.validate().valid);
    }

    #[test]
    fn test_reset_errors() {
        let mut form = ProductSelectionForm::for_product(&product(&["M"], &["Red"]));
        form.validate();
        assert!(form.errors().any());

        form.reset_errors();
        assert!(!form.errors().any());
    }
}
