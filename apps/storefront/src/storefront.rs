//! # Storefront Controller
//!
//! Owns the cart and the forms of the active view, and turns view actions
//! into core calls.
//!
//! ## Shopper Journey
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Home ──open_product──► Product ──add_to_cart──► Product (+ notice)    │
//! │   ▲                        │                                            │
//! │   │                        └──order_now──► Cart ◄──open_cart── (any)   │
//! │   │                                          │                          │
//! │   │                               proceed_to_checkout                   │
//! │   │                                          ▼                          │
//! │   └──────────── place_order (success) ── Checkout                      │
//! │                                                                         │
//! │  Leaving Product cancels its notice. Leaving Checkout drops the draft. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is created once by the application and handed to views;
//! there is no global cart.

use chrono::{DateTime, Utc};
use fenzo_core::{
    Cart, CartId, CartLineItem, CartTotals, CheckoutErrors, CheckoutField, CheckoutForm,
    CoreError, PaymentMethod, Product, ProductSelectionForm, SelectionErrors, SelectionOutcome,
    SuccessNotice,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::ports::{Catalog, Navigator, OrderReceipt, OrderSubmitter, View};

/// Cart contents plus computed totals, as rendered by the cart view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

/// Result of a "Place Order" click.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOrderOutcome {
    /// Some fields are missing; nothing was sent.
    Incomplete(CheckoutErrors),
    /// The order went through; cart and draft are cleared.
    Placed(OrderReceipt),
}

/// State of an open product view.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    pub form: ProductSelectionForm,
    pub notice: SuccessNotice,
}

/// The application controller.
pub struct Storefront<C, N, S> {
    config: StoreConfig,
    catalog: C,
    navigator: N,
    submitter: S,
    cart: Cart,
    product_view: Option<ProductView>,
    checkout: Option<CheckoutForm>,
}

impl<C, N, S> Storefront<C, N, S>
where
    C: Catalog,
    N: Navigator,
    S: OrderSubmitter,
{
    pub fn new(config: StoreConfig, catalog: C, navigator: N, submitter: S) -> Self {
        Storefront {
            config,
            catalog,
            navigator,
            submitter,
            cart: Cart::new(),
            product_view: None,
            checkout: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Products for the home view, in catalog order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn product_view(&self) -> Option<&ProductView> {
        self.product_view.as_ref()
    }

    pub fn checkout(&self) -> Option<&CheckoutForm> {
        self.checkout.as_ref()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn back_home(&mut self) {
        debug!("back_home");
        self.leave_current_view();
        self.navigator.navigate(View::Home);
    }

    pub fn open_cart(&mut self) -> CartResponse {
        debug!("open_cart");
        self.leave_current_view();
        self.navigator.navigate(View::Cart);
        self.cart_summary()
    }

    // -------------------------------------------------------------------------
    // Product view
    // -------------------------------------------------------------------------

    /// Opens the product view with an empty selection.
    pub fn open_product(&mut self, product_id: &str) -> Result<&ProductView, ApiError> {
        debug!(product_id = %product_id, "open_product");

        let product = self.catalog.find(product_id).cloned().ok_or_else(|| {
            warn!(product_id = %product_id, "Unknown product requested");
            CoreError::ProductNotFound(product_id.to_string())
        })?;

        self.leave_current_view();
        self.navigator.navigate(View::Product(product.id.clone()));

        let view = self.product_view.insert(ProductView {
            form: ProductSelectionForm::for_product(&product),
            product,
            notice: SuccessNotice::new(),
        });
        Ok(&*view)
    }

    pub fn select_size(&mut self, size: &str) -> Result<SelectionErrors, ApiError> {
        let view = self.product_view_mut()?;
        view.form.set_size(size);
        Ok(view.form.errors())
    }

    pub fn select_color(&mut self, color: &str) -> Result<SelectionErrors, ApiError> {
        let view = self.product_view_mut()?;
        view.form.set_color(color);
        Ok(view.form.errors())
    }

    /// "Add to Cart": stays on the product view and shows the notice.
    pub fn add_to_cart(&mut self, now: DateTime<Utc>) -> Result<SelectionOutcome, ApiError> {
        let view = self.product_view.as_mut().ok_or_else(no_product_view)?;

        let outcome = view.form.validate();
        if !outcome.valid {
            debug!(errors = ?outcome.errors, "add_to_cart: selection incomplete");
            return Ok(outcome);
        }

        let item = self
            .cart
            .add(&view.product, view.form.size(), view.form.color());
        view.form.reset_errors();
        view.notice.show_at(now);

        debug!(cart_id = %item.cart_id, product_id = %item.product_id, "add_to_cart");
        Ok(outcome)
    }

    /// "Order Now": adds the selection and goes straight to the cart.
    pub fn order_now(&mut self) -> Result<SelectionOutcome, ApiError> {
        let view = self.product_view.as_mut().ok_or_else(no_product_view)?;

        let outcome = view.form.validate();
        if !outcome.valid {
            debug!(errors = ?outcome.errors, "order_now: selection incomplete");
            return Ok(outcome);
        }

        let item = self
            .cart
            .add(&view.product, view.form.size(), view.form.color());
        view.form.reset_errors();
        debug!(cart_id = %item.cart_id, product_id = %item.product_id, "order_now");

        self.leave_current_view();
        self.navigator.navigate(View::Cart);
        Ok(outcome)
    }

    /// Whether the "added to cart" banner should render at `now`.
    pub fn notice_visible(&self, now: DateTime<Utc>) -> bool {
        self.product_view
            .as_ref()
            .is_some_and(|view| view.notice.is_visible_at(now))
    }

    // -------------------------------------------------------------------------
    // Cart view
    // -------------------------------------------------------------------------

    pub fn cart_summary(&self) -> CartResponse {
        CartResponse {
            items: self.cart.items().to_vec(),
            totals: self.cart.totals(&self.config.delivery_policy()),
        }
    }

    /// Removes a line item; unknown ids are ignored.
    pub fn remove_from_cart(&mut self, cart_id: CartId) -> CartResponse {
        let removed = self.cart.remove(cart_id);
        debug!(cart_id = %cart_id, removed, "remove_from_cart");
        self.cart_summary()
    }

    pub fn proceed_to_checkout(&mut self) -> Result<(), ApiError> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        debug!(items = self.cart.len(), "proceed_to_checkout");
        self.leave_current_view();
        self.checkout = Some(CheckoutForm::new());
        self.navigator.navigate(View::Checkout);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Checkout view
    // -------------------------------------------------------------------------

    pub fn set_checkout_field(
        &mut self,
        field: CheckoutField,
        value: &str,
    ) -> Result<CheckoutErrors, ApiError> {
        let form = self.checkout_mut()?;
        form.set_field(field, value);
        Ok(form.errors())
    }

    pub fn select_payment_method(
        &mut self,
        method: PaymentMethod,
    ) -> Result<CheckoutErrors, ApiError> {
        let form = self.checkout_mut()?;
        form.select_payment_method(method);
        Ok(form.errors())
    }

    /// "Place Order".
    ///
    /// ## Behavior
    /// - Incomplete form: every missing field flagged, nothing sent
    /// - Submitter succeeds: cart cleared, draft dropped, back to Home
    /// - Submitter fails: cart and draft kept so the shopper can retry
    pub async fn place_order(&mut self) -> Result<PlaceOrderOutcome, ApiError> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let form = self.checkout.as_mut().ok_or_else(no_checkout_view)?;
        let Some(request) = form.submit(self.cart.items()) else {
            debug!(errors = ?form.errors(), "place_order: checkout incomplete");
            return Ok(PlaceOrderOutcome::Incomplete(form.errors()));
        };

        let totals = self.cart.totals(&self.config.delivery_policy());
        let receipt = self.submitter.submit(&request).await.map_err(|e| {
            warn!(error = %e, "Order submission failed");
            ApiError::from(e)
        })?;

        info!(
            order_id = %receipt.order_id,
            items = request.cart_items.len(),
            grand_total = %totals.grand_total,
            payment_method = ?request.checkout_data.payment_method,
            "Order placed"
        );

        self.cart.clear();
        self.checkout = None;
        self.navigator.navigate(View::Home);
        Ok(PlaceOrderOutcome::Placed(receipt))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Tears down per-view state: the notice stops, the draft is discarded.
    fn leave_current_view(&mut self) {
        if let Some(mut view) = self.product_view.take() {
            view.notice.cancel();
        }
        self.checkout = None;
    }

    fn product_view_mut(&mut self) -> Result<&mut ProductView, ApiError> {
        self.product_view.as_mut().ok_or_else(no_product_view)
    }

    fn checkout_mut(&mut self) -> Result<&mut CheckoutForm, ApiError> {
        self.checkout.as_mut().ok_or_else(no_checkout_view)
    }
}

fn no_product_view() -> ApiError {
    ApiError::internal("No product view is open")
}

fn no_checkout_view() -> ApiError {
    ApiError::internal("Checkout is not open")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JsonCatalog;
    use crate::error::ErrorCode;
    use crate::ports::{SubmitError, ViewHistory};
    use chrono::Duration;
    use fenzo_core::{Money, OrderRequest};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSubmitter {
        orders: Mutex<Vec<OrderRequest>>,
        fail: bool,
    }

    impl RecordingSubmitter {
        fn failing() -> Self {
            RecordingSubmitter {
                fail: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<OrderRequest> {
            self.orders.lock().unwrap().clone()
        }
    }

    impl OrderSubmitter for RecordingSubmitter {
        async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt, SubmitError> {
            self.orders.lock().unwrap().push(order.clone());
            if self.fail {
                return Err(SubmitError::Unavailable("connection reset".to_string()));
            }
            Ok(OrderReceipt::new())
        }
    }

    const CATALOG: &str = r#"[
        {
            "id": "tee", "name": "Classic Tee", "code": "TEE-01",
            "price": 50000, "deliveryCharge": 5000,
            "sizes": ["M", "L"], "colors": ["Black", "White"], "stock": 8
        },
        { "id": "cap", "name": "Cap", "code": "CAP-02", "price": 30000, "colors": ["Navy"] },
        { "id": "tote", "name": "Tote Bag", "code": "TOT-03", "price": 25000 }
    ]"#;

    type TestStorefront = Storefront<JsonCatalog, ViewHistory, RecordingSubmitter>;

    fn storefront_with(submitter: RecordingSubmitter) -> TestStorefront {
        Storefront::new(
            StoreConfig::default(),
            JsonCatalog::from_json(CATALOG).unwrap(),
            ViewHistory::new(),
            submitter,
        )
    }

    fn storefront() -> TestStorefront {
        storefront_with(RecordingSubmitter::default())
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn fill_checkout(store: &mut TestStorefront) {
        store
            .set_checkout_field(CheckoutField::Name, "Rahim Uddin")
            .unwrap();
        store
            .set_checkout_field(CheckoutField::Phone, "01711000000")
            .unwrap();
        store
            .set_checkout_field(CheckoutField::Address, "House 4, Road 7, Dhanmondi")
            .unwrap();
        store
            .select_payment_method(PaymentMethod::CashOnDelivery)
            .unwrap();
    }

    /// Tee (M/Black) + Cap (Navy) in the cart, checkout open.
    fn at_checkout(store: &mut TestStorefront) {
        store.open_product("tee").unwrap();
        store.select_size("M").unwrap();
        store.select_color("Black").unwrap();
        store.add_to_cart(now()).unwrap();

        store.open_product("cap").unwrap();
        store.select_color("Navy").unwrap();
        store.order_now().unwrap();

        store.proceed_to_checkout().unwrap();
    }

    #[test]
    fn test_open_unknown_product() {
        let mut store = storefront();
        let err = store.open_product("nope").err().unwrap();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(store.navigator().current(), &View::Home);
    }

    #[test]
    fn test_add_to_cart_requires_selection() {
        let mut store = storefront();
        store.open_product("tee").unwrap();

        let outcome = store.add_to_cart(now()).unwrap();
        assert!(!outcome.valid);
        assert!(outcome.errors.size && outcome.errors.color);
        assert!(store.cart().is_empty());
        assert!(!store.notice_visible(now()));

        let errors = store.select_size("L").unwrap();
        assert!(!errors.size);
        assert!(errors.color);
    }

    #[test]
    fn test_add_to_cart_stays_and_shows_notice() {
        let mut store = storefront();
        store.open_product("tee").unwrap();
        store.select_size("M").unwrap();
        store.select_color("White").unwrap();

        let t0 = now();
        let outcome = store.add_to_cart(t0).unwrap();

        assert!(outcome.valid);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.navigator().current(), &View::Product("tee".to_string()));
        assert!(store.notice_visible(t0 + Duration::seconds(1)));
        assert!(!store.notice_visible(t0 + Duration::seconds(3)));
        assert!(!store.product_view().unwrap().form.errors().any());

        // Same selection again: a second, independent line item.
        store.add_to_cart(t0 + Duration::seconds(2)).unwrap();
        assert_eq!(store.cart().len(), 2);
        assert!(store.notice_visible(t0 + Duration::seconds(4)));
    }

    #[test]
    fn test_product_without_sizes_needs_only_color() {
        let mut store = storefront();
        store.open_product("cap").unwrap();
        store.select_color("Navy").unwrap();
        assert!(store.add_to_cart(now()).unwrap().valid);

        store.open_product("tote").unwrap();
        assert!(store.add_to_cart(now()).unwrap().valid);
        assert_eq!(store.cart().items()[1].selected_size, "");
    }

    #[test]
    fn test_order_now_navigates_to_cart() {
        let mut store = storefront();
        store.open_product("tee").unwrap();
        store.select_size("M").unwrap();
        store.select_color("Black").unwrap();

        assert!(store.order_now().unwrap().valid);
        assert_eq!(store.navigator().current(), &View::Cart);
        assert!(store.product_view().is_none());
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_leaving_product_view_cancels_notice() {
        let mut store = storefront();
        store.open_product("tote").unwrap();
        let t0 = now();
        store.add_to_cart(t0).unwrap();
        assert!(store.notice_visible(t0));

        store.back_home();
        assert!(!store.notice_visible(t0));
    }

    #[test]
    fn test_cart_summary_and_remove() {
        let mut store = storefront();
        store.open_product("tee").unwrap();
        store.select_size("M").unwrap();
        store.select_color("Black").unwrap();
        store.add_to_cart(now()).unwrap();
        store.open_product("cap").unwrap();
        store.select_color("Navy").unwrap();
        store.add_to_cart(now()).unwrap();

        let summary = store.open_cart();
        assert_eq!(summary.totals.item_count, 2);
        assert_eq!(summary.totals.subtotal, Money::from_major(800));
        assert_eq!(summary.totals.effective_delivery_charge, Money::from_major(50));
        assert_eq!(summary.totals.grand_total, Money::from_major(850));
        assert_eq!(
            summary.totals.amount_to_free_delivery,
            Some(Money::from_major(200))
        );

        let tee_id = summary.items[0].cart_id;
        let after = store.remove_from_cart(tee_id);
        assert_eq!(after.items.len(), 1);
        assert_eq!(after.items[0].product_id, "cap");

        // Double click on the same remove button.
        let again = store.remove_from_cart(tee_id);
        assert_eq!(again.items.len(), 1);
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut store = storefront();
        let err = store.proceed_to_checkout().unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(store.checkout().is_none());
    }

    #[tokio::test]
    async fn test_place_order_incomplete_makes_no_transport_call() {
        let mut store = storefront();
        at_checkout(&mut store);
        store
            .set_checkout_field(CheckoutField::Name, "Rahim Uddin")
            .unwrap();
        store
            .set_checkout_field(CheckoutField::Phone, "01711000000")
            .unwrap();

        let outcome = store.place_order().await.unwrap();

        assert_eq!(
            outcome,
            PlaceOrderOutcome::Incomplete(CheckoutErrors {
                name: false,
                phone: false,
                address: true,
                payment_method: true,
            })
        );
        assert!(store.submitter.calls().is_empty());
        assert_eq!(store.cart().len(), 2);
    }

    #[tokio::test]
    async fn test_place_order_submits_once_and_resets() {
        let mut store = storefront();
        at_checkout(&mut store);
        fill_checkout(&mut store);
        let expected_items = store.cart().items().to_vec();

        let outcome = store.place_order().await.unwrap();

        assert!(matches!(outcome, PlaceOrderOutcome::Placed(_)));
        let calls = store.submitter.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cart_items, expected_items);
        assert_eq!(calls[0].checkout_data.address, "House 4, Road 7, Dhanmondi");
        assert_eq!(
            calls[0].checkout_data.payment_method,
            Some(PaymentMethod::CashOnDelivery)
        );

        assert!(store.cart().is_empty());
        assert!(store.checkout().is_none());
        assert_eq!(store.navigator().current(), &View::Home);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_cart_and_draft() {
        let mut store = storefront_with(RecordingSubmitter::failing());
        at_checkout(&mut store);
        fill_checkout(&mut store);

        let err = store.place_order().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OrderSubmission);
        assert_eq!(store.submitter.calls().len(), 1);
        assert_eq!(store.cart().len(), 2);
        assert_eq!(store.checkout().unwrap().data().name, "Rahim Uddin");
        assert_eq!(store.navigator().current(), &View::Checkout);
    }

    #[test]
    fn test_leaving_checkout_discards_draft() {
        let mut store = storefront();
        at_checkout(&mut store);
        fill_checkout(&mut store);

        store.open_cart();
        assert!(store.checkout().is_none());

        store.proceed_to_checkout().unwrap();
        assert_eq!(store.checkout().unwrap().data().name, "");
    }
}
