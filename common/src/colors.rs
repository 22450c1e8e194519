//! Color constants for the AeroSense dashboard.
//!
//! Two kinds of colors live here:
//!
//! - **Severity palette**: hex strings, one per AQI category. They stay as
//!   text because the glow colors are derived from them with
//!   [`tint`](crate::tint::tint), which operates on hex input.
//! - **UI colors**: `Rgb565` constants for chrome (background, panels,
//!   borders, accent gradient), ready to hand to the display.
//!
//! `Rgb565` is the display's native format; conversion from 8-bit channels
//! goes through [`to_rgb565`].

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Severity Palette (hex, tint input)
// =============================================================================

/// Slate gray for "Unknown" (no valid reading yet).
pub const UNKNOWN_HEX: &str = "#94a3b8";

/// Green for "Good".
pub const GOOD_HEX: &str = "#22c55e";

/// Yellow for "Moderate".
pub const MODERATE_HEX: &str = "#eab308";

/// Amber for "Unhealthy for Sensitive".
pub const SENSITIVE_HEX: &str = "#f59e0b";

/// Red for "Unhealthy".
pub const UNHEALTHY_HEX: &str = "#ef4444";

/// Purple for "Very Unhealthy".
pub const VERY_UNHEALTHY_HEX: &str = "#a855f7";

/// Maroon for "Hazardous".
pub const HAZARDOUS_HEX: &str = "#7f1d1d";

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Used for primary text on the dark background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Night-sky background (#070815).
pub const BACKGROUND: Rgb565 = Rgb565::new(0, 2, 2);

/// Slightly lifted panel fill, the "glass" behind readouts.
pub const PANEL: Rgb565 = Rgb565::new(2, 5, 5);

/// Panel and card border color.
pub const BORDER: Rgb565 = Rgb565::new(6, 13, 8);

/// Dimmed text for labels, hints, and placeholders.
pub const MUTED: Rgb565 = Rgb565::new(18, 38, 21);

/// Cyan end of the accent gradient (#06b6d4).
pub const ACCENT_CYAN: Rgb565 = Rgb565::new(0, 45, 26);

/// Fuchsia end of the accent gradient (#d946ef).
pub const ACCENT_FUCHSIA: Rgb565 = Rgb565::new(27, 17, 29);

/// Gray for diagnostics dividers and section headers.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Green for diagnostics headers and the log prompt.
pub const TERMINAL_GREEN: Rgb565 = Rgb565::GREEN;

/// Yellow highlight for min/max/avg values on the diagnostics page.
pub const HIGHLIGHT: Rgb565 = Rgb565::YELLOW;

/// Popup background (matches the unhealthy red).
pub const ALERT: Rgb565 = Rgb565::new(29, 17, 8);

/// Convert an 8-bit-per-channel color to the display format.
#[inline]
pub fn to_rgb565(color: Rgb888) -> Rgb565 { Rgb565::from(color) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb565_extremes() {
        assert_eq!(to_rgb565(Rgb888::BLACK), BLACK);
        assert_eq!(to_rgb565(Rgb888::WHITE), WHITE);
    }

    #[test]
    fn test_palette_is_hex() {
        for hex in [
            UNKNOWN_HEX,
            GOOD_HEX,
            MODERATE_HEX,
            SENSITIVE_HEX,
            UNHEALTHY_HEX,
            VERY_UNHEALTHY_HEX,
            HAZARDOUS_HEX,
        ] {
            assert_eq!(hex.len(), 7, "{hex} should be #rrggbb");
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{hex} has non-hex digits");
        }
    }
}
