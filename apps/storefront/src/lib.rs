//! # Fenzo Storefront Library
//!
//! The host side of the storefront: it owns the cart and checkout state,
//! wires the core logic to the catalog, navigation and order-submission
//! collaborators, and sets up logging.
//!
//! ## Module Organization
//! ```text
//! fenzo_storefront/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── storefront.rs   ◄─── Application controller (view actions)
//! ├── ports.rs        ◄─── Catalog / Navigator / OrderSubmitter traits
//! ├── catalog.rs      ◄─── JSON-backed catalog
//! ├── config.rs       ◄─── Store configuration
//! └── error.rs        ◄─── API error type for view actions
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront (one per running app, handed to the views)                 │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────────┐ ┌──────────────────────┐        │
//! │  │    Cart      │ │  ProductView     │ │  CheckoutForm        │        │
//! │  │ (whole app)  │ │ (product view    │ │ (checkout view only) │        │
//! │  │              │ │  only)           │ │                      │        │
//! │  └──────────────┘ └──────────────────┘ └──────────────────────┘        │
//! │                                                                         │
//! │  Single-threaded: every action runs to completion before the next.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ports;
pub mod storefront;

use tracing_subscriber::EnvFilter;

pub use catalog::JsonCatalog;
pub use config::StoreConfig;
pub use error::{ApiError, ErrorCode};
pub use ports::{Catalog, Navigator, OrderReceipt, OrderSubmitter, SubmitError, View, ViewHistory};
pub use storefront::{CartResponse, PlaceOrderOutcome, ProductView, Storefront};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fenzo_storefront=trace` - Trace this crate only
/// - Default: INFO, DEBUG for fenzo crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fenzo_storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
