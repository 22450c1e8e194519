//! Widget components for the AeroSense dashboard.
//!
//! - [`background`]: particle field and scan sweep behind everything
//! - [`header`]: title bar and copyright footer
//! - [`readout`]: avatar, category, advisory message, and metric cards
//! - [`input`]: AQI entry field and scan button
//! - [`tips`]: static eco tips
//! - [`popups`]: status overlay
//! - [`primitives`]: shared low-level drawing utilities
//!
//! # Architecture
//!
//! Every widget is generic over `DrawTarget<Color = Rgb565>` and draws
//! into its own fixed rectangle from `aerosense_common::config`. Colors that
//! follow the severity come from a shared `ColorTransition` so they fade
//! together. The whole frame is redrawn each tick since the avatar, the
//! particles, and the caret all animate continuously.

mod avatar;
mod background;
mod header;
mod input;
mod popups;
mod primitives;
mod readout;
mod tips;

pub use background::{draw_particles, draw_sweep};
pub use header::{draw_footer, draw_header};
pub use input::{draw_input, hit_scan_button};
pub use popups::draw_popup;
pub use readout::{Readout, draw_readout};
pub use tips::draw_tips;
