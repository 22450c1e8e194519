//! Hex color parsing and uniform channel tinting.
//!
//! The avatar glow is drawn as a gradient between two tints of the severity
//! color: a brighter one (`factor > 1`) and a darker one (`factor < 1`).
//! [`tint`] never fails. A color it cannot parse is handed back untouched as
//! [`TintedColor::Passthrough`], so callers always have something to render.
//!
//! ```ignore
//! let glow = tint("#22c55e", 1.35);
//! assert_eq!(format!("{glow}"), "rgb(46, 255, 127)");
//!
//! let junk = tint("zzzzzz", 1.35);
//! assert_eq!(format!("{junk}"), "zzzzzz");
//! ```

use core::fmt;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

use crate::colors::to_rgb565;

/// Why a hex color string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// Nothing left after stripping the optional `#`.
    #[error("color string is empty")]
    Empty,
    /// Only 3 (`#rgb`) and 6 (`#rrggbb`) digit forms are accepted.
    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Result of [`tint`]: either scaled channels or the untouched input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintedColor<'a> {
    /// Successfully parsed and scaled color.
    Rgb(Rgb888),
    /// Input that could not be parsed, returned as-is.
    Passthrough(&'a str),
}

impl TintedColor<'_> {
    /// The scaled channels, if the input parsed.
    #[inline]
    pub const fn rgb(&self) -> Option<Rgb888> {
        match self {
            Self::Rgb(c) => Some(*c),
            Self::Passthrough(_) => None,
        }
    }

    /// Display color, or `fallback` when the input did not parse.
    #[inline]
    pub fn to_rgb565_or(&self, fallback: Rgb565) -> Rgb565 { self.rgb().map_or(fallback, to_rgb565) }
}

impl fmt::Display for TintedColor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => write!(f, "rgb({}, {}, {})", c.r(), c.g(), c.b()),
            Self::Passthrough(original) => f.write_str(original),
        }
    }
}

/// Parse a 3- or 6-digit hex color. The leading `#` is optional.
///
/// Short form digits are doubled (`#abc` is `#aabbcc`).
pub fn parse_hex(hex: &str) -> Result<Rgb888, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let mut nibbles = [0u8; 6];
    match digits.chars().count() {
        3 => {
            for (i, c) in digits.chars().enumerate() {
                let n = nibble(c)?;
                nibbles[i * 2] = n;
                nibbles[i * 2 + 1] = n;
            }
        }
        6 => {
            for (i, c) in digits.chars().enumerate() {
                nibbles[i] = nibble(c)?;
            }
        }
        len => return Err(ColorParseError::InvalidLength(len)),
    }

    Ok(Rgb888::new(
        (nibbles[0] << 4) | nibbles[1],
        (nibbles[2] << 4) | nibbles[3],
        (nibbles[4] << 4) | nibbles[5],
    ))
}

/// Scale every channel of `hex` by `factor`.
///
/// Channels are rounded to the nearest integer and clamped to 0-255.
/// Malformed input comes back unchanged as [`TintedColor::Passthrough`].
pub fn tint(hex: &str, factor: f32) -> TintedColor<'_> {
    match parse_hex(hex) {
        Ok(color) => TintedColor::Rgb(Rgb888::new(
            scale_channel(color.r(), factor),
            scale_channel(color.g(), factor),
            scale_channel(color.b(), factor),
        )),
        Err(err) => {
            log::debug!("tint fallback for {hex:?}: {err}");
            TintedColor::Passthrough(hex)
        }
    }
}

#[inline]
fn nibble(c: char) -> Result<u8, ColorParseError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorParseError::InvalidDigit(c))
}

/// Multiply, round half up, clamp. NaN collapses to 0.
#[inline]
fn scale_channel(channel: u8, factor: f32) -> u8 {
    let v = f32::from(channel) * factor;
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        (v + 0.5) as u8
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(parse_hex("#22c55e"), Ok(Rgb888::new(0x22, 0xc5, 0x5e)));
        assert_eq!(parse_hex("22C55E"), Ok(Rgb888::new(0x22, 0xc5, 0x5e)), "# and case are optional");
    }

    #[test]
    fn test_parse_three_digit_doubles() {
        assert_eq!(parse_hex("#abc"), Ok(Rgb888::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex("f00"), Ok(Rgb888::new(0xff, 0x00, 0x00)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("#1234"), Err(ColorParseError::InvalidLength(4)));
        assert_eq!(parse_hex("zzzzzz"), Err(ColorParseError::InvalidDigit('z')));
        assert_eq!(parse_hex("#12345g"), Err(ColorParseError::InvalidDigit('g')));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ColorParseError::InvalidLength(4).to_string(), "expected 3 or 6 hex digits, found 4");
        assert_eq!(ColorParseError::InvalidDigit('z').to_string(), "invalid hex digit 'z'");
    }

    // -------------------------------------------------------------------------
    // Tinting
    // -------------------------------------------------------------------------

    #[test]
    fn test_tint_identity_factor() {
        for hex in ["#22c55e", "#7f1d1d", "#94a3b8", "#fff", "000"] {
            let parsed = parse_hex(hex).unwrap();
            assert_eq!(tint(hex, 1.0).rgb(), Some(parsed), "factor 1.0 should keep {hex}");
        }
    }

    #[test]
    fn test_tint_black_stays_black() {
        for factor in [0.0, 0.7, 1.0, 1.35, 10.0, -2.0] {
            assert_eq!(
                tint("#000000", factor).rgb(),
                Some(Rgb888::BLACK),
                "black scaled by {factor} should stay black"
            );
        }
    }

    #[test]
    fn test_tint_invalid_passes_through() {
        let tinted = tint("zzzzzz", 1.35);
        assert_eq!(tinted, TintedColor::Passthrough("zzzzzz"));
        assert_eq!(tinted.to_string(), "zzzzzz");
        assert_eq!(tint("", 0.7).to_string(), "");
        assert_eq!(tint("#12", 0.7).to_string(), "#12");
    }

    #[test]
    fn test_tint_rounds_and_clamps() {
        // 0x22 = 34 * 1.35 = 45.9 -> 46; 0xc5 = 197 * 1.35 = 265.95 -> 255; 0x5e = 94 * 1.35 = 126.9 -> 127
        assert_eq!(tint("#22c55e", 1.35).to_string(), "rgb(46, 255, 127)");
        // 34 * 0.7 = 23.8 -> 24; 197 * 0.7 = 137.9 -> 138; 94 * 0.7 = 65.8 -> 66
        assert_eq!(tint("#22c55e", 0.7).to_string(), "rgb(24, 138, 66)");
    }

    #[test]
    fn test_tint_negative_and_nan_factor() {
        assert_eq!(tint("#ffffff", -1.0).rgb(), Some(Rgb888::BLACK));
        assert_eq!(tint("#ffffff", f32::NAN).rgb(), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_to_rgb565_or_fallback() {
        use crate::colors::WHITE;
        assert_eq!(tint("nope", 1.0).to_rgb565_or(WHITE), WHITE);
        assert_eq!(tint("#000", 1.0).to_rgb565_or(WHITE), Rgb565::BLACK);
    }
}
