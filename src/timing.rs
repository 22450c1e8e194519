//! Frame and overlay timing.
//!
//! Layout and scan delays live in `aerosense_common::config`; the values
//! here are `Duration`s because they are compared against `std::time::Instant`.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long popups stay on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// Pause on the last boot line before the dashboard appears.
pub const BOOT_SETTLE: Duration = Duration::from_millis(600);
