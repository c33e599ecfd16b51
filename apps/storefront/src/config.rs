//! # Store Configuration
//!
//! Settings loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FENZO_*`)
//! 2. Defaults (this file)

use std::path::PathBuf;

use fenzo_core::money::MINOR_PER_MAJOR;
use fenzo_core::{DeliveryPolicy, Money};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for amounts
    pub currency_decimals: u8,

    /// Subtotal at which delivery becomes free; `None` disables the rule
    pub free_delivery_threshold: Option<Money>,

    /// Catalog JSON file; the bundled sample catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "Fenzo"
    /// - Currency: BDT (৳), two decimals
    /// - Free delivery: from ৳1000
    fn default() -> Self {
        StoreConfig {
            store_name: "Fenzo".to_string(),
            currency_symbol: "৳".to_string(),
            currency_decimals: 2,
            free_delivery_threshold: Some(Money::from_major(1000)),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FENZO_STORE_NAME`: Override store name
    /// - `FENZO_CURRENCY_SYMBOL`: Override currency symbol
    /// - `FENZO_FREE_DELIVERY_THRESHOLD`: Threshold in taka (e.g. "1500"),
    ///   or "off" to always charge delivery
    /// - `FENZO_CATALOG_PATH`: Catalog JSON file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("FENZO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("FENZO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("FENZO_FREE_DELIVERY_THRESHOLD") {
            match parse_threshold(&raw) {
                Some(threshold) => config.free_delivery_threshold = threshold,
                None => warn!(value = %raw, "Ignoring invalid FENZO_FREE_DELIVERY_THRESHOLD"),
            }
        }

        if let Some(path) = lookup("FENZO_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// The delivery rule handed to the pricing functions.
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy {
            free_delivery_threshold: self.free_delivery_threshold,
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::Money;
    /// use fenzo_storefront::config::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_money(Money::from_minor(123_456)), "৳1234.56");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let cents = amount.minor();
        let whole = cents / MINOR_PER_MAJOR;
        let frac = format!("{:02}", (cents % MINOR_PER_MAJOR).abs());
        let places = self.currency_decimals as usize;

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if places > 0 {
                // Poisha carry two digits; fewer places truncate, more pad.
                format!(
                    "{}.{:0<width$}",
                    whole.abs(),
                    &frac[..places.min(frac.len())],
                    width = places
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

/// `Some(None)` for "off", `Some(Some(t))` for a non-negative taka amount
/// that fits in [`Money`].
fn parse_threshold(raw: &str) -> Option<Option<Money>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("off") || raw.eq_ignore_ascii_case("none") {
        return Some(None);
    }

    match raw.parse::<i64>() {
        Ok(taka) if taka >= 0 => Money::checked_from_major(taka).map(Some),
        _ => None,
    }
}
