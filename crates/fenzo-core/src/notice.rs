//! # Success Notice
//!
//! The "Added to cart successfully!" banner on the product view.
//!
//! The banner is an expiry timestamp, not a timer: the view asks
//! [`SuccessNotice::is_visible_at`] on each render tick. Showing it again
//! while visible restarts the window; there is never more than one.

use chrono::{DateTime, Duration, Utc};

/// How long the banner stays up after a successful add.
pub const SUCCESS_NOTICE_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuccessNotice {
    expires_at: Option<DateTime<Utc>>,
}

impl SuccessNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the visibility window at `now`.
    pub fn show_at(&mut self, now: DateTime<Utc>) {
        self.expires_at = Some(now + Duration::seconds(SUCCESS_NOTICE_SECS));
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| now < expires)
    }

    /// Hides the banner; used when the product view is torn down.
    pub fn cancel(&mut self) {
        self.expires_at = None;
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
