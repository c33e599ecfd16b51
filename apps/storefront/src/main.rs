//! # Fenzo Storefront Demo
//!
//! Walks one shopper through the storefront against the configured
//! catalog and logs every step.
//!
//! ## Usage
//! ```bash
//! # Bundled sample catalog, free delivery from ৳1000
//! cargo run -p fenzo-storefront
//!
//! # Own catalog and threshold
//! FENZO_CATALOG_PATH=./catalog.json FENZO_FREE_DELIVERY_THRESHOLD=1500 \
//!     cargo run -p fenzo-storefront
//! ```
//!
//! Orders are not sent anywhere: [`LoggingSubmitter`] logs the payload and
//! acknowledges it.

use chrono::Utc;
use fenzo_core::{CheckoutField, OrderRequest, PaymentMethod};
use fenzo_storefront::{
    init_tracing, ApiError, JsonCatalog, OrderReceipt, OrderSubmitter, PlaceOrderOutcome,
    StoreConfig, Storefront, SubmitError, ViewHistory,
};
use tracing::{info, warn};

const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// Order "transport" that only logs.
struct LoggingSubmitter;

impl OrderSubmitter for LoggingSubmitter {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt, SubmitError> {
        let payload = serde_json::to_string_pretty(order)
            .map_err(|e| SubmitError::Unavailable(e.to_string()))?;
        info!(%payload, "Submitting order");
        Ok(OrderReceipt::new())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Starting Fenzo storefront demo");

    let catalog = match &config.catalog_path {
        Some(path) => JsonCatalog::from_path(path)?,
        None => JsonCatalog::from_json(SAMPLE_CATALOG)?,
    };

    let mut store = Storefront::new(config, catalog, ViewHistory::new(), LoggingSubmitter);
    shop(&mut store)?;

    store.proceed_to_checkout()?;

    // First attempt with the address forgotten.
    store.set_checkout_field(CheckoutField::Name, "Rahim Uddin")?;
    store.set_checkout_field(CheckoutField::Phone, "01711000000")?;
    if let PlaceOrderOutcome::Incomplete(errors) = store.place_order().await? {
        warn!(?errors, "Checkout incomplete");
    }

    store.set_checkout_field(CheckoutField::Address, "House 4, Road 7, Dhanmondi, Dhaka")?;
    store.select_payment_method(PaymentMethod::CashOnDelivery)?;
    match store.place_order().await? {
        PlaceOrderOutcome::Placed(receipt) => {
            info!(order_id = %receipt.order_id, "Thank you for your order")
        }
        PlaceOrderOutcome::Incomplete(errors) => warn!(?errors, "Checkout still incomplete"),
    }

    Ok(())
}

/// Adds every catalog product in its first variant, then shows the cart.
fn shop(
    store: &mut Storefront<JsonCatalog, ViewHistory, LoggingSubmitter>,
) -> Result<(), ApiError> {
    let ids: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();

    for id in &ids {
        let view = store.open_product(id)?;
        let size = view.product.sizes.first().cloned();
        let color = view.product.colors.first().cloned();

        if let Some(size) = size {
            store.select_size(&size)?;
        }
        if let Some(color) = color {
            store.select_color(&color)?;
        }

        let outcome = store.add_to_cart(Utc::now())?;
        info!(product_id = %id, valid = outcome.valid, "Add to cart");
    }

    let summary = store.open_cart();
    let config = store.config();
    for item in &summary.items {
        info!(
            name = %item.name,
            size = %item.selected_size,
            color = %item.selected_color,
            price = %config.format_money(item.price),
            "Cart item"
        );
    }
    info!(
        subtotal = %config.format_money(summary.totals.subtotal),
        delivery = %config.format_money(summary.totals.effective_delivery_charge),
        grand_total = %config.format_money(summary.totals.grand_total),
        free_delivery = summary.totals.free_delivery,
        "Cart summary"
    );

    Ok(())
}
