//! Full-screen views outside the dashboard.
//!
//! - **Boot** ([`boot`]): console-style startup messages with a spinner.
//!   Returns `false` if the window is closed, so the app can exit without
//!   entering the main loop.
//! - **Diagnostics** ([`diagnostics`]): frame timing, scan counters, session
//!   state, and the event log terminal (`Tab` from the dashboard).

mod boot;
mod diagnostics;

pub use boot::run_boot_screen;
pub use diagnostics::draw_diagnostics_page;
