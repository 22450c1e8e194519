//! Input panel: AQI entry field and the scan button.
//!
//! ```text
//! ┌──────────────────────┐
//! │ Enter AQI            │
//! │ ┌──────────────────┐ │
//! │ │ 87|              │ │  field, blinking caret
//! │ └──────────────────┘ │
//! │ ▐ Scan Air Quality ▌ │  gradient button / scan progress
//! │ Aero will analyze... │
//! └──────────────────────┘
//! ```

use aerosense_common::{
    animations::{blend_rgb565, caret_visible},
    colors::{ACCENT_CYAN, ACCENT_FUCHSIA, BACKGROUND, BORDER, PANEL},
    config::{INPUT_PANEL_HEIGHT, PANEL_TOP, SIDE_WIDTH, SIDE_X},
    scan::PendingScan,
};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};

use super::primitives::{draw_gradient, draw_panel, draw_wrapped, fill_rounded};
use crate::styles::{
    CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, LEFT_ALIGNED, VALUE_FONT, VALUE_STYLE_MUTED,
    VALUE_STYLE_WHITE, char_advance,
};

// =============================================================================
// Layout Constants
// =============================================================================

pub const INPUT_PANEL: Rectangle = Rectangle::new(
    Point::new(SIDE_X as i32, PANEL_TOP as i32),
    Size::new(SIDE_WIDTH, INPUT_PANEL_HEIGHT),
);

const INNER_X: i32 = SIDE_X as i32 + 8;
const INNER_WIDTH: u32 = SIDE_WIDTH - 16;

const TITLE_POS: Point = Point::new(INNER_X, PANEL_TOP as i32 + 16);

/// Text entry box.
pub const FIELD: Rectangle = Rectangle::new(Point::new(INNER_X, PANEL_TOP as i32 + 26), Size::new(INNER_WIDTH, 28));

/// Clickable scan button.
pub const SCAN_BUTTON: Rectangle =
    Rectangle::new(Point::new(INNER_X, PANEL_TOP as i32 + 62), Size::new(INNER_WIDTH, 26));

const FIELD_TEXT_POS: Point = Point::new(INNER_X + 8, FIELD.top_left.y + 19);
const BUTTON_TEXT_POS: Point = Point::new(INNER_X + (INNER_WIDTH / 2) as i32, SCAN_BUTTON.top_left.y + 16);

const HINT_POS: Point = Point::new(INNER_X, PANEL_TOP as i32 + 102);
const HINT_LINE_HEIGHT: i32 = 10;
const HINT_MAX_LINES: usize = 3;

const _: () = assert!(HINT_POS.y + HINT_LINE_HEIGHT * (HINT_MAX_LINES as i32 - 1) < (PANEL_TOP + INPUT_PANEL_HEIGHT) as i32);

pub const PLACEHOLDER: &str = "e.g., 87";
pub const HINT: &str = "Aero will analyze and display the environment mood.";

/// Idle button gradient is dimmed by this much behind the progress bar.
const TRACK_DIM: f32 = 0.35;

// =============================================================================
// Drawing
// =============================================================================

/// Draw the input panel.
///
/// `pending` is the scan in flight, if any; the button then shows how far
/// along it is at `now_ms`.
pub fn draw_input<D>(
    display: &mut D,
    raw_input: &str,
    pending: Option<&PendingScan>,
    now_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, INPUT_PANEL);

    Text::with_text_style("Enter AQI", TITLE_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    draw_field(display, raw_input, now_ms);

    match pending {
        Some(scan) => draw_progress_button(display, scan.progress(now_ms)),
        None => {
            draw_gradient(display, SCAN_BUTTON, ACCENT_CYAN, ACCENT_FUCHSIA);
            Text::with_text_style("Scan Air Quality", BUTTON_TEXT_POS, LABEL_STYLE_BLACK, CENTERED)
                .draw(display)
                .ok();
        }
    }

    draw_wrapped(
        display,
        HINT,
        HINT_POS,
        INNER_WIDTH,
        HINT_LINE_HEIGHT,
        HINT_MAX_LINES,
        LABEL_STYLE_MUTED,
        LEFT_ALIGNED,
    );
}

fn draw_field<D>(
    display: &mut D,
    raw_input: &str,
    now_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rounded(display, FIELD, 4, PANEL);
    RoundedRectangle::with_equal_corners(FIELD, Size::new(4, 4))
        .into_styled(PrimitiveStyle::with_stroke(BORDER, 1))
        .draw(display)
        .ok();

    if raw_input.is_empty() {
        Text::with_text_style(PLACEHOLDER, FIELD_TEXT_POS, VALUE_STYLE_MUTED, LEFT_ALIGNED)
            .draw(display)
            .ok();
    } else {
        Text::with_text_style(raw_input, FIELD_TEXT_POS, VALUE_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    if caret_visible(now_ms) {
        let x = FIELD_TEXT_POS.x + (raw_input.chars().count() as u32 * char_advance(VALUE_FONT)) as i32 + 1;
        Line::new(Point::new(x, FIELD.top_left.y + 6), Point::new(x, FIELD.top_left.y + 21))
            .into_styled(PrimitiveStyle::with_stroke(ACCENT_CYAN, 1))
            .draw(display)
            .ok();
    }
}

/// Dimmed track with the bright gradient filling up to `progress`.
fn draw_progress_button<D>(
    display: &mut D,
    progress: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient(
        display,
        SCAN_BUTTON,
        blend_rgb565(BACKGROUND, ACCENT_CYAN, TRACK_DIM),
        blend_rgb565(BACKGROUND, ACCENT_FUCHSIA, TRACK_DIM),
    );

    let filled = progress_width(progress);
    if filled > 0 {
        let fill = Rectangle::new(SCAN_BUTTON.top_left, Size::new(filled, SCAN_BUTTON.size.height));
        let end = blend_rgb565(ACCENT_CYAN, ACCENT_FUCHSIA, progress.clamp(0.0, 1.0));
        draw_gradient(display, fill, ACCENT_CYAN, end);
    }

    Text::with_text_style("Scanning...", BUTTON_TEXT_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Width in pixels of the progress fill.
fn progress_width(progress: f32) -> u32 { (progress.clamp(0.0, 1.0) * INNER_WIDTH as f32) as u32 }

/// Whether a click at `point` lands on the scan button.
#[inline]
pub fn hit_scan_button(point: Point) -> bool { SCAN_BUTTON.contains(point) }

#[cfg(test)]
mod tests {
    use aerosense_common::{config::MAX_INPUT_DIGITS, text::wrap};

    use super::*;
    use crate::styles::{LABEL_FONT, columns};

    #[test]
    fn test_hit_scan_button() {
        let center = SCAN_BUTTON.center();
        assert!(hit_scan_button(center));
        assert!(hit_scan_button(SCAN_BUTTON.top_left));
        assert!(!hit_scan_button(FIELD.center()), "field is not the button");
        assert!(!hit_scan_button(Point::new(0, 0)));
    }

    #[test]
    fn test_progress_width() {
        assert_eq!(progress_width(0.0), 0);
        assert_eq!(progress_width(1.0), INNER_WIDTH);
        assert_eq!(progress_width(2.0), INNER_WIDTH, "progress is clamped");
        assert_eq!(progress_width(0.5), INNER_WIDTH / 2);
    }

    #[test]
    fn test_layout_inside_panel() {
        let bottom = INPUT_PANEL.top_left.y + INPUT_PANEL.size.height as i32;
        assert!(FIELD.top_left.y + FIELD.size.height as i32 <= SCAN_BUTTON.top_left.y);
        assert!(SCAN_BUTTON.top_left.y + (SCAN_BUTTON.size.height as i32) < HINT_POS.y - 8);
        assert!(wrap(HINT, columns(LABEL_FONT, INNER_WIDTH)).count() <= HINT_MAX_LINES);
        assert!(HINT_POS.y + HINT_LINE_HEIGHT * (HINT_MAX_LINES as i32 - 1) < bottom);
    }

    #[test]
    fn test_max_input_fits_field() {
        let width = MAX_INPUT_DIGITS as u32 * char_advance(VALUE_FONT) + 8;
        assert!(width < FIELD.size.width, "{MAX_INPUT_DIGITS} digits overflow the field");
    }
}
