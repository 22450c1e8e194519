//! Eco tips panel below the input panel.

use aerosense_common::config::{INPUT_PANEL_HEIGHT, MARGIN, PANEL_HEIGHT, PANEL_TOP, SIDE_WIDTH, SIDE_X};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::Text,
};

use super::primitives::{draw_panel, draw_wrapped};
use crate::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED};

pub const ECO_TIPS: [&str; 5] = [
    "Switch to public transport today.",
    "Plant a tree; clean the air.",
    "Avoid idling your car engine.",
    "Use energy-efficient appliances.",
    "Carry a reusable mask on high AQI days.",
];

const TIPS_TOP: u32 = PANEL_TOP + INPUT_PANEL_HEIGHT + MARGIN;

pub const TIPS_PANEL: Rectangle = Rectangle::new(
    Point::new(SIDE_X as i32, TIPS_TOP as i32),
    Size::new(SIDE_WIDTH, PANEL_TOP + PANEL_HEIGHT - TIPS_TOP),
);

const TITLE_POS: Point = Point::new(SIDE_X as i32 + 8, TIPS_TOP as i32 + 16);
const BULLET_X: i32 = SIDE_X as i32 + 12;
const TEXT_X: i32 = SIDE_X as i32 + 20;
const TEXT_WIDTH: u32 = SIDE_WIDTH - 26;
const FIRST_TIP_Y: i32 = TIPS_TOP as i32 + 34;
const LINE_HEIGHT: i32 = 10;
const TIP_GAP: i32 = 6;

/// Title and bulleted tips; bullets take the severity color.
pub fn draw_tips<D>(
    display: &mut D,
    base: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel(display, TIPS_PANEL);

    Text::with_text_style("Eco Tips", TITLE_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut y = FIRST_TIP_Y;
    for tip in ECO_TIPS {
        Circle::with_center(Point::new(BULLET_X, y - 3), 4)
            .into_styled(PrimitiveStyle::with_fill(base))
            .draw(display)
            .ok();
        y = draw_wrapped(
            display,
            tip,
            Point::new(TEXT_X, y),
            TEXT_WIDTH,
            LINE_HEIGHT,
            3,
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        ) + TIP_GAP;
    }
}

#[cfg(test)]
mod tests {
    use aerosense_common::text::wrap;

    use super::*;
    use crate::styles::{LABEL_FONT, columns};

    #[test]
    fn test_tips_fit_panel() {
        let cols = columns(LABEL_FONT, TEXT_WIDTH);
        let lines: usize = ECO_TIPS.iter().map(|tip| wrap(tip, cols).count()).sum();
        let last_baseline = FIRST_TIP_Y + (lines as i32 - 1) * LINE_HEIGHT + (ECO_TIPS.len() as i32 - 1) * TIP_GAP;
        let bottom = TIPS_PANEL.top_left.y + TIPS_PANEL.size.height as i32;
        assert!(last_baseline + 4 < bottom, "tips end at {last_baseline}, panel ends at {bottom}");
    }

    #[test]
    fn test_panel_below_input() {
        assert!(TIPS_PANEL.top_left.y > super::super::input::INPUT_PANEL.bottom_right().map_or(0, |p| p.y));
    }
}
