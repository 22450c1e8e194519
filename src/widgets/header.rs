//! Header bar and footer strip.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ▣ AeroSense  The Air Quality Guardian          Ready for 2030 │  28px
//! ├──────────────────────────────────────────────────────────────┤
//! │                          ...                                 │
//! │     (c) 2030 AeroSense - Futuristic air insights.            │  18px
//! └──────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use aerosense_common::{
    colors::{ACCENT_CYAN, ACCENT_FUCHSIA, BORDER},
    config::{CENTER_X, FOOTER_HEIGHT, HEADER_HEIGHT, MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH},
};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use super::primitives::draw_gradient;
use crate::styles::{CENTERED, LABEL_STYLE_MUTED, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Gradient logo tile.
const LOGO: Rectangle = Rectangle::new(Point::new(MARGIN as i32, 6), Size::new(16, 16));

const TITLE_POS: Point = Point::new(MARGIN as i32 + 22, 20);

/// Subtitle follows the 9-character title in the 10px title font.
const SUBTITLE_POS: Point = Point::new(TITLE_POS.x + 9 * 10 + 8, 19);

const TAG_POS: Point = Point::new((SCREEN_WIDTH - MARGIN) as i32, 19);

const DIVIDER_START: Point = Point::new(0, HEADER_HEIGHT as i32 - 1);
const DIVIDER_END: Point = Point::new(SCREEN_WIDTH as i32 - 1, HEADER_HEIGHT as i32 - 1);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BORDER, 1);

// =============================================================================
// Footer Layout Constants
// =============================================================================

const FOOTER_POS: Point = Point::new(CENTER_X, (SCREEN_HEIGHT - FOOTER_HEIGHT / 2 + 3) as i32);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Logo, title, subtitle, and the tag line on the right.
pub fn draw_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient(display, LOGO, ACCENT_CYAN, ACCENT_FUCHSIA);

    Text::with_text_style("AeroSense", TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("The Air Quality Guardian", SUBTITLE_POS, LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("Ready for 2030", TAG_POS, LABEL_STYLE_MUTED, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

/// Copyright line for `year`.
pub fn footer_text(year: i32) -> String<64> {
    let mut s = String::new();
    let _ = write!(s, "(c) {year} AeroSense - Futuristic air insights.");
    s
}

pub fn draw_footer<D>(
    display: &mut D,
    year: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(&footer_text(year), FOOTER_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}
