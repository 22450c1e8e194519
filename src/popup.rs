//! Transient overlay state.
//!
//! Only one popup is visible at a time; a newer one replaces the older.

use std::time::Instant;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// A pending scan was cancelled with `Escape`.
    Cancelled(Instant),
    /// A pending scan was superseded by a new request.
    Restarted(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Cancelled(t) | Self::Restarted(t) => *t,
        }
    }

    /// Text shown in the overlay.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Cancelled(_) => "SCAN CANCELLED",
            Self::Restarted(_) => "SCAN RESTARTED",
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_popup_messages() {
        let now = Instant::now();
        assert_eq!(Popup::Cancelled(now).message(), "SCAN CANCELLED");
        assert_eq!(Popup::Restarted(now).message(), "SCAN RESTARTED");
    }

    #[test]
    fn test_fresh_popup_not_expired() {
        assert!(!Popup::Cancelled(Instant::now()).is_expired());
    }

    #[test]
    fn test_old_popup_expired() {
        let Some(past) = Instant::now().checked_sub(POPUP_DURATION + Duration::from_millis(1)) else {
            return; // Monotonic clock too close to its origin on this host.
        };
        assert!(Popup::Restarted(past).is_expired());
    }
}
