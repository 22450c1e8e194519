//! Application configuration constants.
//!
//! Layout values are pre-computed at compile time so drawing code never
//! recalculates panel geometry per frame. Timing values are plain
//! milliseconds because this crate has no clock of its own; the caller
//! supplies a monotonic millisecond counter.

// =============================================================================
// Display Configuration
// =============================================================================

/// Logical display width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Logical display height in pixels.
pub const SCREEN_HEIGHT: u32 = 360;

/// Window scale factor for the desktop simulator.
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Input Configuration
// =============================================================================

/// Maximum number of digits accepted in the AQI input field.
/// The AQI scale tops out at 500, so six digits leaves plenty of headroom.
pub const MAX_INPUT_DIGITS: usize = 6;

// =============================================================================
// Scan Timing
// =============================================================================

/// Delay before a scan with a valid reading commits.
pub const SCAN_DELAY_MS: u64 = 1200;

/// Delay before a scan with an invalid reading ends.
/// Longer than [`SCAN_DELAY_MS`] so the failed scan pulses a little longer.
pub const SCAN_INVALID_DELAY_MS: u64 = 1600;

const _: () = assert!(SCAN_DELAY_MS < SCAN_INVALID_DELAY_MS);

// =============================================================================
// Decoration
// =============================================================================

/// Number of particles in the background field.
pub const PARTICLE_COUNT: usize = 24;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 28;

/// Footer strip height in pixels.
pub const FOOTER_HEIGHT: u32 = 18;

/// Outer margin around panels.
pub const MARGIN: u32 = 6;

/// Top edge of the panel area.
pub const PANEL_TOP: u32 = HEADER_HEIGHT + MARGIN;

/// Height shared by the readout panel and the right-hand column.
pub const PANEL_HEIGHT: u32 = SCREEN_HEIGHT - PANEL_TOP - FOOTER_HEIGHT - MARGIN;

/// Width of the readout panel (avatar, category, metric cards).
pub const READOUT_WIDTH: u32 = 292;

/// Left edge of the right-hand column (input and tips panels).
pub const SIDE_X: u32 = MARGIN * 2 + READOUT_WIDTH;

/// Width of the right-hand column.
pub const SIDE_WIDTH: u32 = SCREEN_WIDTH - SIDE_X - MARGIN;

/// Height of the input panel; the tips panel takes the rest of the column.
pub const INPUT_PANEL_HEIGHT: u32 = 128;

/// Screen center X coordinate. Used for centering popups and boot text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

const _: () = assert!(SIDE_WIDTH >= 150);
const _: () = assert!(PANEL_HEIGHT > INPUT_PANEL_HEIGHT + 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_fit_on_screen() {
        assert_eq!(SIDE_X + SIDE_WIDTH + MARGIN, SCREEN_WIDTH);
        assert!(PANEL_TOP + PANEL_HEIGHT + FOOTER_HEIGHT <= SCREEN_HEIGHT);
    }

    #[test]
    fn test_scan_delays_differ_by_pulse() {
        assert_eq!(SCAN_INVALID_DELAY_MS - SCAN_DELAY_MS, 400);
    }
}
