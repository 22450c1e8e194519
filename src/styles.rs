//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder` are const fn in
//! embedded-graphics 0.8, so fixed-color styles are built at compile time.
//! Severity-colored text changes with the reading; for those, callers build
//! `MonoTextStyle::new(FONT, color)` from the exposed font references.

use aerosense_common::colors::{BLACK, MUTED, WHITE};
use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Popups, boot title, button label, avatar.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Header tag and diagnostics FPS.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Category headline (`ProFont` 18pt).
pub const CATEGORY_FONT: &MonoFont = &PROFONT_18_POINT;

/// Metric card values and the input field (`ProFont` 14pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_14_POINT;

/// Mood glyphs drawn inside the avatar (`ProFont` 24pt).
pub const FACE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for labels and body copy.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Dimmed labels, hints, and placeholders.
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MUTED);

/// Dark text on the bright scan button.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Input field text.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Input placeholder.
pub const VALUE_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, MUTED);

/// Horizontal advance of one character in `font`, in pixels.
#[inline]
pub const fn char_advance(font: &MonoFont) -> u32 { font.character_size.width + font.character_spacing }

/// How many characters of `font` fit in `width` pixels.
#[inline]
pub const fn columns(
    font: &MonoFont,
    width: u32,
) -> usize {
    (width / char_advance(font)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_font_columns() {
        assert_eq!(char_advance(LABEL_FONT), 6);
        assert_eq!(columns(LABEL_FONT, 60), 10);
        assert_eq!(columns(LABEL_FONT, 5), 0, "narrower than one glyph");
    }
}
