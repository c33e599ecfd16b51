//! # Pricing
//!
//! Subtotal, delivery charge, free-delivery threshold and grand total.
//!
//! Every function is pure and recomputed from the current line items on
//! each read; nothing here caches, so totals cannot go stale after an add
//! or a remove.
//!
//! ## Calculation Flow
//! ```text
//! items ──┬──► subtotal ─────────────────────────────┬──► grand_total
//!         │                                          │
//!         └──► delivery_charge (raw sum) ──┐         │
//!                                          ▼         │
//!              subtotal >= threshold ? 0 : raw ──────┘
//!                   (effective_delivery_charge)
//! ```
//!
//! The waiver applies to the whole order, never per line item.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::money::Money;
use crate::types::DeliveryPolicy;

/// Sum of line-item prices. Each line item counts once.
pub fn subtotal(items: &[CartLineItem]) -> Money {
    items.iter().map(|i| i.price).sum()
}

/// Raw sum of line-item delivery charges, before any waiver.
pub fn delivery_charge(items: &[CartLineItem]) -> Money {
    items.iter().map(|i| i.delivery_charge).sum()
}

/// Delivery charge the shopper actually pays.
///
/// Zero when the policy has a threshold and the subtotal reaches it,
/// otherwise the raw [`delivery_charge`].
pub fn effective_delivery_charge(items: &[CartLineItem], policy: &DeliveryPolicy) -> Money {
    match policy.free_delivery_threshold {
        Some(threshold) if subtotal(items) >= threshold => Money::zero(),
        _ => delivery_charge(items),
    }
}

/// Subtotal plus effective delivery charge.
pub fn grand_total(items: &[CartLineItem], policy: &DeliveryPolicy) -> Money {
    subtotal(items) + effective_delivery_charge(items, policy)
}

/// How much more the shopper must add for free delivery.
///
/// `None` when the policy has no threshold; never negative.
pub fn amount_to_free_delivery(items: &[CartLineItem], policy: &DeliveryPolicy) -> Option<Money> {
    policy
        .free_delivery_threshold
        .map(|threshold| threshold.saturating_sub(subtotal(items)))
}

/// Progress-bar fill toward free delivery, in `0.0..=1.0`.
///
/// `None` when the policy has no threshold. A zero threshold is always
/// reached.
pub fn free_delivery_progress(items: &[CartLineItem], policy: &DeliveryPolicy) -> Option<f64> {
    policy.free_delivery_threshold.map(|threshold| {
        subtotal(items)
            .ratio_of(threshold)
            .map_or(1.0, |ratio| ratio.min(1.0))
    })
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart summary handed to the cart and checkout views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub subtotal: Money,
    /// Raw delivery sum before the threshold waiver.
    pub delivery_charge: Money,
    /// The "Delivery Charge" line shown to the shopper.
    pub effective_delivery_charge: Money,
    pub grand_total: Money,
    pub amount_to_free_delivery: Option<Money>,
    pub free_delivery_progress: Option<f64>,
    /// Drives the "Free Delivery!" message.
    pub free_delivery: bool,
}

impl CartTotals {
    pub fn compute(items: &[CartLineItem], policy: &DeliveryPolicy) -> Self {
        let subtotal = subtotal(items);
        let effective = effective_delivery_charge(items, policy);

        CartTotals {
            item_count: items.len(),
            subtotal,
            delivery_charge: delivery_charge(items),
            effective_delivery_charge: effective,
            grand_total: subtotal + effective,
            amount_to_free_delivery: amount_to_free_delivery(items, policy),
            free_delivery_progress: free_delivery_progress(items, policy),
            free_delivery: effective.is_zero() && subtotal.is_positive(),
        }
    }

    /// Whether the "add X more for free delivery" progress block applies.
    pub fn show_free_delivery_progress(&self) -> bool {
        self.effective_delivery_charge.is_positive() && self.amount_to_free_delivery.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
