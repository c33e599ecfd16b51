//! # Money Module
//!
//! Provides the `Money` type for storefront amounts (prices, delivery
//! charges, totals).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A free-delivery threshold compared against a float subtotal can flip  │
//! │  on a rounding artifact. Integer minor units (poisha) cannot.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fenzo_core::money::Money;
//!
//! let price = Money::from_major(500);        // ৳500.00
//! let delivery = Money::from_minor(5_000);   // ৳50.00
//! assert_eq!((price + delivery).minor(), 55_000);
//! ```
//!
//! ## Overflow
//! Arithmetic saturates at the `i64` bounds instead of wrapping, so a sum
//! of non-negative amounts never turns negative. Values coming from
//! untrusted input go through [`Money::checked_from_major`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Minor units per major unit (100 poisha = 1 taka).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Product.price ──────────► CartLineItem.price ──► subtotal             │
/// │  Product.delivery_charge ► CartLineItem.delivery_charge ► delivery     │
/// │                                                                         │
/// │  subtotal + effective delivery ──► grand total ──► order request       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (poisha).
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // ৳10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units (taka), saturating at
    /// the `i64` bounds.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Like [`Money::from_major`], but `None` when the amount does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_major(15), Some(Money::from_minor(1500)));
    /// assert_eq!(Money::checked_from_major(i64::MAX / 10), None);
    /// ```
    #[inline]
    pub const fn checked_from_major(major: i64) -> Option<Self> {
        match major.checked_mul(MINOR_PER_MAJOR) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtracts, clamping at zero.
    ///
    /// Used for "amount left until free delivery", which never goes
    /// negative once the threshold is passed.
    ///
    /// ## Example
    /// ```rust
    /// use fenzo_core::money::Money;
    ///
    /// let threshold = Money::from_major(1000);
    /// assert_eq!(threshold.saturating_sub(Money::from_major(800)), Money::from_major(200));
    /// assert_eq!(threshold.saturating_sub(Money::from_major(1200)), Money::zero());
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Ratio `self / of`, for presentation only (progress bars).
    ///
    /// Returns `None` when `of` is not positive.
    pub fn ratio_of(&self, of: Money) -> Option<f64> {
        if of.0 <= 0 {
            return None;
        }
        Some(self.0 as f64 / of.0 as f64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display with the taka sign; the host formats for the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}৳{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
