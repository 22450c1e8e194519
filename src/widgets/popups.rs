//! Non-modal popup overlay for scan status messages.
//!
//! The popup appears centered with a white border around an alert-colored
//! body. Only one displays at a time (most recent wins). Input is still
//! processed while it is visible.

use aerosense_common::{
    colors::{ALERT, WHITE},
    config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH},
};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    popup::Popup,
    styles::{CENTERED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Layout Constants
// =============================================================================

const POPUP_WIDTH: u32 = 200;
const POPUP_HEIGHT: u32 = 50;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Longest message, in the 10px title font.
const _: () = assert!(14 * 10 < POPUP_WIDTH);

const TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const ALERT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ALERT);

const BORDER_RECT: Rectangle = Rectangle::new(
    Point::new(POPUP_X - 3, POPUP_Y - 3),
    Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6),
);
const BODY_RECT: Rectangle = Rectangle::new(Point::new(POPUP_X, POPUP_Y), Size::new(POPUP_WIDTH, POPUP_HEIGHT));

// =============================================================================
// Drawing
// =============================================================================

pub fn draw_popup<D>(
    display: &mut D,
    popup: &Popup,
) where
    D: DrawTarget<Color = Rgb565>,
{
    BORDER_RECT.into_styled(WHITE_FILL).draw(display).ok();
    BODY_RECT.into_styled(ALERT_FILL).draw(display).ok();

    Text::with_text_style(popup.message(), TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
