//! Low-level drawing primitives shared across widgets.
//!
//! # Glass Panels
//!
//! Panels are outlined, not filled: the particle field behind them stays
//! visible, which stands in for the frosted-glass look on a display with no
//! alpha channel.
//!
//! # Wrapped Text
//!
//! [`draw_wrapped`] breaks text on word boundaries to fit a pixel width.
//! With a monospace font the column count is just width over glyph advance.

use aerosense_common::{animations::blend_rgb565, colors::BORDER, text::wrap};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Text, TextStyle},
};

use crate::styles::columns;

/// Corner radius for panels and cards.
const PANEL_RADIUS: u32 = 6;

/// Outline a glass panel.
pub fn draw_panel<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(PANEL_RADIUS, PANEL_RADIUS))
        .into_styled(PrimitiveStyle::with_stroke(BORDER, 1))
        .draw(display)
        .ok();
}

/// Fill a rounded rectangle.
pub fn fill_rounded<D>(
    display: &mut D,
    area: Rectangle,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Left-to-right gradient, one vertical line per column.
pub fn draw_gradient<D>(
    display: &mut D,
    area: Rectangle,
    from: Rgb565,
    to: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let w = area.size.width;
    if w == 0 || area.size.height == 0 {
        return;
    }
    let top = area.top_left.y;
    let bottom = top + area.size.height as i32 - 1;
    for i in 0..w {
        let t = if w > 1 { i as f32 / (w - 1) as f32 } else { 0.0 };
        let x = area.top_left.x + i as i32;
        Line::new(Point::new(x, top), Point::new(x, bottom))
            .into_styled(PrimitiveStyle::with_stroke(blend_rgb565(from, to, t), 1))
            .draw(display)
            .ok();
    }
}

/// Draw `text` wrapped to `width` pixels, one line every `line_height`.
///
/// `origin` is the baseline of the first line; its x is interpreted by
/// `alignment`. Returns the baseline just below the last line.
#[allow(clippy::too_many_arguments)]
pub fn draw_wrapped<D>(
    display: &mut D,
    text: &str,
    origin: Point,
    width: u32,
    line_height: i32,
    max_lines: usize,
    style: MonoTextStyle<'_, Rgb565>,
    alignment: TextStyle,
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = origin.y;
    let cols = columns(style.font, width);
    for line in wrap(text, cols).take(max_lines) {
        Text::with_text_style(line, Point::new(origin.x, y), style, alignment)
            .draw(display)
            .ok();
        y += line_height;
    }
    y
}
