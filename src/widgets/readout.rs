//! Readout panel: avatar, category, advisory message, and metric cards.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ AERO                   ● SCANNING  │
//! │             ( avatar )             │
//! │              Moderate              │  category, severity color
//! │ Air is acceptable, but be mindful  │  message, wrapped
//! │ ┌────────┐ ┌──────────┐ ┌─────────┐│
//! │ │AQI     │ │CATEGORY  │ │LAST     ││  metric cards
//! │ │87      │ │Moderate  │ │Mar 07.. ││
//! │ └────────┘ └──────────┘ └─────────┘│
//! └────────────────────────────────────┘
//! ```

use core::fmt::Write;

use aerosense_common::{
    animations::{ColorSlot, ColorTransition, blend_rgb565, halo_opacity},
    aqi::AqiState,
    colors::{ALERT, BACKGROUND, BORDER},
    config::{MARGIN, PANEL_HEIGHT, PANEL_TOP, READOUT_WIDTH},
    thresholds::is_alarming,
};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};
use heapless::String;

use super::{
    avatar::draw_avatar,
    primitives::{draw_panel, draw_wrapped, fill_rounded},
};
use crate::styles::{
    CATEGORY_FONT, CENTERED, LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, VALUE_FONT,
};

// =============================================================================
// Layout Constants
// =============================================================================

pub const READOUT_PANEL: Rectangle = Rectangle::new(
    Point::new(MARGIN as i32, PANEL_TOP as i32),
    Size::new(READOUT_WIDTH, PANEL_HEIGHT),
);

const PANEL_X: i32 = MARGIN as i32;
const PANEL_CENTER_X: i32 = PANEL_X + (READOUT_WIDTH / 2) as i32;

const NAME_POS: Point = Point::new(PANEL_X + 10, PANEL_TOP as i32 + 16);
const BADGE_POS: Point = Point::new(PANEL_X + READOUT_WIDTH as i32 - 10, PANEL_TOP as i32 + 16);

const CATEGORY_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP as i32 + 186);
const MESSAGE_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP as i32 + 204);
const MESSAGE_WIDTH: u32 = READOUT_WIDTH - 20;
const MESSAGE_LINE_HEIGHT: i32 = 11;

const CARD_GAP: u32 = 6;
const CARD_HEIGHT: u32 = 58;
const CARD_WIDTH: u32 = (READOUT_WIDTH - CARD_GAP * 4) / 3;
const CARD_Y: i32 = (PANEL_TOP + PANEL_HEIGHT - CARD_GAP - CARD_HEIGHT) as i32;
const CARD_INNER_WIDTH: u32 = CARD_WIDTH - 8;

const _: () = assert!(CARD_WIDTH >= 80);

/// Fill behind the metric cards.
const CARD_FILL: Rgb565 = Rgb565::new(2, 5, 5);

// =============================================================================
// Formatting
// =============================================================================

/// Value of the AQI card: the committed reading or `-`.
pub fn aqi_text(committed: Option<f32>) -> String<16> {
    let mut s = String::new();
    match committed {
        Some(v) => {
            let _ = write!(s, "{v}");
        }
        None => {
            let _ = s.push('-');
        }
    }
    s
}

// =============================================================================
// Drawing
// =============================================================================

/// Everything the readout shows for one frame.
pub struct Readout<'a> {
    pub state: &'a AqiState,
    pub committed: Option<f32>,
    /// Formatted timestamp of the last scan request.
    pub last_read: Option<&'a str>,
    pub scanning: bool,
    pub t_ms: u64,
}

pub fn draw_readout<D>(
    display: &mut D,
    colors: &ColorTransition,
    readout: &Readout<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let base = colors.get(ColorSlot::Base);

    draw_panel(display, READOUT_PANEL);

    Text::with_text_style("AERO", NAME_POS, LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    if readout.scanning {
        draw_scanning_badge(display, base, readout.t_ms);
    }

    draw_avatar(display, colors, readout.state.severity, readout.scanning, readout.t_ms);

    Text::with_text_style(
        readout.state.category,
        CATEGORY_POS,
        MonoTextStyle::new(CATEGORY_FONT, base),
        CENTERED,
    )
    .draw(display)
    .ok();

    draw_wrapped(
        display,
        readout.state.message,
        MESSAGE_POS,
        MESSAGE_WIDTH,
        MESSAGE_LINE_HEIGHT,
        2,
        LABEL_STYLE_WHITE,
        CENTERED,
    );

    draw_metric_cards(display, base, readout);
}

/// Pulsing dot and label in the panel corner.
fn draw_scanning_badge<D>(
    display: &mut D,
    base: Rgb565,
    t_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("SCANNING...", BADGE_POS, MonoTextStyle::new(LABEL_STYLE_WHITE.font, base), RIGHT_ALIGNED)
        .draw(display)
        .ok();
    let dot = blend_rgb565(BACKGROUND, base, halo_opacity(t_ms, true));
    Circle::with_center(BADGE_POS + Point::new(-(11 * 6) - 8, -3), 6)
        .into_styled(PrimitiveStyle::with_fill(dot))
        .draw(display)
        .ok();
}

fn draw_metric_cards<D>(
    display: &mut D,
    base: Rgb565,
    readout: &Readout<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let alarming = readout.committed.is_some_and(is_alarming);

    for i in 0..3u32 {
        let x = PANEL_X + (CARD_GAP + i * (CARD_WIDTH + CARD_GAP)) as i32;
        let card = Rectangle::new(Point::new(x, CARD_Y), Size::new(CARD_WIDTH, CARD_HEIGHT));
        fill_rounded(display, card, 5, CARD_FILL);

        let border = if i == 0 && alarming { ALERT } else { BORDER };
        RoundedRectangle::with_equal_corners(card, Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_stroke(border, 1))
            .draw(display)
            .ok();

        let label_pos = Point::new(x + 5, CARD_Y + 13);
        let value_pos = Point::new(x + 5, CARD_Y + 32);

        match i {
            0 => {
                Text::with_text_style("AQI", label_pos, LABEL_STYLE_MUTED, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
                Text::with_text_style(
                    &aqi_text(readout.committed),
                    value_pos + Point::new(0, 4),
                    MonoTextStyle::new(VALUE_FONT, base),
                    LEFT_ALIGNED,
                )
                .draw(display)
                .ok();
            }
            1 => {
                Text::with_text_style("CATEGORY", label_pos, LABEL_STYLE_MUTED, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
                draw_wrapped(
                    display,
                    readout.state.category,
                    value_pos,
                    CARD_INNER_WIDTH,
                    MESSAGE_LINE_HEIGHT,
                    2,
                    LABEL_STYLE_WHITE,
                    LEFT_ALIGNED,
                );
            }
            _ => {
                Text::with_text_style("LAST READING", label_pos, LABEL_STYLE_MUTED, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
                draw_wrapped(
                    display,
                    readout.last_read.unwrap_or("-"),
                    value_pos,
                    CARD_INNER_WIDTH,
                    MESSAGE_LINE_HEIGHT,
                    2,
                    LABEL_STYLE_WHITE,
                    LEFT_ALIGNED,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use aerosense_common::text::wrap;

    use super::*;
    use crate::styles::{LABEL_FONT, columns};

    #[test]
    fn test_aqi_text() {
        assert_eq!(aqi_text(None).as_str(), "-");
        assert_eq!(aqi_text(Some(87.0)).as_str(), "87");
        assert_eq!(aqi_text(Some(999_999.0)).as_str(), "999999");
    }

    #[test]
    fn test_cards_fit_in_panel() {
        let right = PANEL_X as u32 + CARD_GAP + 3 * (CARD_WIDTH + CARD_GAP);
        assert!(right <= MARGIN + READOUT_WIDTH);
        assert!(CARD_Y > MESSAGE_POS.y + MESSAGE_LINE_HEIGHT, "cards overlap the message");
    }

    #[test]
    fn test_card_text_fits_two_lines() {
        let cols = columns(LABEL_FONT, CARD_INNER_WIDTH);
        assert!(wrap("Unhealthy for Sensitive", cols).count() <= 2);
        assert!(wrap("Mar 07, 2030, 02:05:09 PM", cols).count() <= 2);
    }

    #[test]
    fn test_messages_fit_two_lines() {
        let cols = columns(LABEL_FONT, MESSAGE_WIDTH);
        for severity in aerosense_common::Severity::ALL {
            assert!(
                wrap(severity.message(), cols).count() <= 2,
                "{severity} message needs more than two lines"
            );
        }
    }
}
