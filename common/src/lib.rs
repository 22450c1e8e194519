//! Core logic for the AeroSense air quality dashboard.
//!
//! Everything here is platform-agnostic and free of clocks; the desktop app
//! feeds in a monotonic millisecond counter and a wall-clock timestamp.
//!
//! - [`aqi`]: AQI to severity, category, color, message, mood, and glow
//! - [`tint`]: hex color parsing and channel scaling
//! - [`scan`]: input text and the simulated scan state machine
//! - [`animations`]: avatar, particle, and color-fade math
//! - [`colors`]: severity palette and UI colors
//! - [`config`]: layout, input, and timing constants
//! - [`thresholds`]: AQI category bounds
//! - [`event_log`]: on-screen log ring buffer
//! - [`pages`]: page navigation enum
//! - [`text`]: monospace word wrapping
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Logging goes through the `log`
//! facade; the binary decides where it ends up.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod aqi;
pub mod colors;
pub mod config;
pub mod event_log;
pub mod pages;
pub mod scan;
pub mod text;
pub mod thresholds;
pub mod tint;

// Re-export commonly used items
pub use aqi::{AqiState, Severity, classify, classify_text};
pub use colors::*;
pub use config::*;
pub use pages::Page;
pub use scan::{ScanOutcome, ScanSession};
pub use tint::{TintedColor, tint};
