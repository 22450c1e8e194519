//! Aero, the animated avatar.
//!
//! Layers, back to front:
//!
//! 1. **Halo**: radial glow in `glow_from`, breathing while a scan runs.
//! 2. **Ring**: expanding outline in the base color, only while scanning.
//! 3. **Orb**: `glow_to` body with a `glow_from` highlight toward the upper
//!    left, bobbing up and down.
//! 4. **Face**: eyes, mouth, and an optional mark, chosen per severity.
//!
//! The mood emoji of each severity is rendered as a drawn expression since
//! the bitmap fonts have no emoji glyphs.

use aerosense_common::{
    animations::{ColorSlot, ColorTransition, blend_rgb565, bob_offset, halo_opacity, ring},
    aqi::Severity,
    colors::{ALERT, BACKGROUND, WHITE},
    config::{MARGIN, PANEL_TOP, READOUT_WIDTH},
};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::Text,
};

use crate::styles::{CENTERED, FACE_FONT};

// =============================================================================
// Geometry
// =============================================================================

/// Avatar center at rest.
pub const AVATAR_CENTER: Point = Point::new((MARGIN + READOUT_WIDTH / 2) as i32, PANEL_TOP as i32 + 84);

/// Outer radius of the halo; the ring scales relative to this.
pub const HALO_RADIUS: u32 = 66;

const ORB_RADIUS: u32 = 48;

/// Number of bands in the halo gradient.
const HALO_BANDS: u32 = 6;

/// Eye offset from the orb center.
const EYE_DX: i32 = 16;
const EYE_DY: i32 = -8;

/// Dark ink for facial features.
const FACE_INK: Rgb565 = Rgb565::new(2, 4, 6);

const _: () = assert!(ORB_RADIUS < HALO_RADIUS);

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eyes {
    Dots,
    /// Closed, content arcs.
    Happy,
    /// Open circles with pupils.
    Wide,
    Crossed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mouth {
    Flat,
    Smile,
    Mask,
    Frown,
    Open,
}

/// Symbol floating next to the avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Question,
    Warning,
    Siren,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expression {
    pub eyes: Eyes,
    pub mouth: Mouth,
    pub mark: Option<Mark>,
}

/// Face for a severity, following its mood symbol.
pub const fn expression(severity: Severity) -> Expression {
    let (eyes, mouth, mark) = match severity {
        Severity::Unknown => (Eyes::Dots, Mouth::Flat, Some(Mark::Question)),
        Severity::Good => (Eyes::Happy, Mouth::Smile, None),
        Severity::Moderate => (Eyes::Dots, Mouth::Smile, None),
        Severity::UnhealthySensitive => (Eyes::Dots, Mouth::Mask, None),
        Severity::Unhealthy => (Eyes::Wide, Mouth::Frown, None),
        Severity::VeryUnhealthy => (Eyes::Wide, Mouth::Frown, Some(Mark::Warning)),
        Severity::Hazardous => (Eyes::Crossed, Mouth::Open, Some(Mark::Siren)),
    };
    Expression { eyes, mouth, mark }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the avatar for one frame.
pub fn draw_avatar<D>(
    display: &mut D,
    colors: &ColorTransition,
    severity: Severity,
    scanning: bool,
    t_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let base = colors.get(ColorSlot::Base);
    let glow_from = colors.get(ColorSlot::GlowFrom);
    let glow_to = colors.get(ColorSlot::GlowTo);

    draw_halo(display, glow_from, halo_opacity(t_ms, scanning));

    if scanning {
        let (scale, opacity) = ring(t_ms);
        let diameter = (2.0 * HALO_RADIUS as f32 * scale) as u32;
        Circle::with_center(AVATAR_CENTER, diameter)
            .into_styled(PrimitiveStyle::with_stroke(
                blend_rgb565(BACKGROUND, base, (opacity * 1.6).min(1.0)),
                2,
            ))
            .draw(display)
            .ok();
    }

    let center = AVATAR_CENTER + Point::new(0, bob_offset(t_ms, scanning));
    draw_orb(display, center, glow_from, glow_to);

    let face = expression(severity);
    draw_eyes(display, center, face.eyes);
    draw_mouth(display, center, face.mouth);
    if let Some(mark) = face.mark {
        draw_mark(display, mark, base, t_ms);
    }
}

/// Concentric bands fading from `glow` at the core to the background at 70%
/// of the radius and beyond.
fn draw_halo<D>(
    display: &mut D,
    glow: Rgb565,
    opacity: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for band in 0..HALO_BANDS {
        let k = band as f32 / HALO_BANDS as f32;
        let radius = HALO_RADIUS as f32 * (1.0 - 0.7 * k);
        let alpha = opacity * 0.5 * (k + 1.0 / HALO_BANDS as f32);
        Circle::with_center(AVATAR_CENTER, (radius * 2.0) as u32)
            .into_styled(PrimitiveStyle::with_fill(blend_rgb565(BACKGROUND, glow, alpha)))
            .draw(display)
            .ok();
    }
}

fn draw_orb<D>(
    display: &mut D,
    center: Point,
    glow_from: Rgb565,
    glow_to: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, ORB_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(glow_to))
        .draw(display)
        .ok();

    // Highlight centered at 30%/30% of the orb box.
    let highlight = center + Point::new(-(ORB_RADIUS as i32) / 4, -(ORB_RADIUS as i32) / 4);
    Circle::with_center(highlight, ORB_RADIUS * 3 / 2)
        .into_styled(PrimitiveStyle::with_fill(blend_rgb565(glow_to, glow_from, 0.5)))
        .draw(display)
        .ok();
    Circle::with_center(highlight, ORB_RADIUS * 9 / 10)
        .into_styled(PrimitiveStyle::with_fill(glow_from))
        .draw(display)
        .ok();

    Circle::with_center(center, ORB_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_stroke(blend_rgb565(glow_to, WHITE, 0.25), 1))
        .draw(display)
        .ok();
}

fn draw_eyes<D>(
    display: &mut D,
    center: Point,
    eyes: Eyes,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let ink = PrimitiveStyle::with_fill(FACE_INK);
    let stroke = PrimitiveStyle::with_stroke(FACE_INK, 2);

    for dx in [-EYE_DX, EYE_DX] {
        let eye = center + Point::new(dx, EYE_DY);
        match eyes {
            Eyes::Dots => {
                Circle::with_center(eye, 8).into_styled(ink).draw(display).ok();
            }
            Eyes::Happy => {
                Arc::with_center(eye + Point::new(0, 3), 12, 180.0_f32.deg(), 180.0_f32.deg())
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
            Eyes::Wide => {
                Circle::with_center(eye, 12).into_styled(stroke).draw(display).ok();
                Circle::with_center(eye, 4).into_styled(ink).draw(display).ok();
            }
            Eyes::Crossed => {
                Line::new(eye + Point::new(-4, -4), eye + Point::new(4, 4))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
                Line::new(eye + Point::new(-4, 4), eye + Point::new(4, -4))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
        }
    }
}

fn draw_mouth<D>(
    display: &mut D,
    center: Point,
    mouth: Mouth,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(FACE_INK, 2);

    match mouth {
        Mouth::Flat => {
            Line::new(center + Point::new(-9, 16), center + Point::new(9, 14))
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        Mouth::Smile => {
            Arc::with_center(center + Point::new(0, 6), 24, 20.0_f32.deg(), 140.0_f32.deg())
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        Mouth::Frown => {
            Arc::with_center(center + Point::new(0, 26), 24, 200.0_f32.deg(), 140.0_f32.deg())
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        Mouth::Open => {
            Circle::with_center(center + Point::new(0, 16), 12)
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        Mouth::Mask => {
            let mask = Rectangle::with_center(center + Point::new(0, 14), Size::new(40, 18));
            RoundedRectangle::with_equal_corners(mask, Size::new(5, 5))
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(display)
                .ok();
            for dx in [-1, 1] {
                Line::new(
                    center + Point::new(dx * 20, 8),
                    center + Point::new(dx * (ORB_RADIUS as i32 - 4), 0),
                )
                .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
                .draw(display)
                .ok();
            }
            Line::new(center + Point::new(-14, 14), center + Point::new(14, 14))
                .into_styled(PrimitiveStyle::with_stroke(blend_rgb565(WHITE, FACE_INK, 0.3), 1))
                .draw(display)
                .ok();
        }
    }
}

/// Marks float at the upper right of the halo.
fn draw_mark<D>(
    display: &mut D,
    mark: Mark,
    base: Rgb565,
    t_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let anchor = AVATAR_CENTER + Point::new(HALO_RADIUS as i32 - 6, -(HALO_RADIUS as i32) + 14);

    match mark {
        Mark::Question => {
            Text::with_text_style("?", anchor + Point::new(0, 8), MonoTextStyle::new(FACE_FONT, base), CENTERED)
                .draw(display)
                .ok();
        }
        Mark::Warning => {
            Triangle::new(
                anchor + Point::new(0, -10),
                anchor + Point::new(-11, 9),
                anchor + Point::new(11, 9),
            )
            .into_styled(PrimitiveStyle::with_fill(base))
            .draw(display)
            .ok();
            Line::new(anchor + Point::new(0, -3), anchor + Point::new(0, 3))
                .into_styled(PrimitiveStyle::with_stroke(FACE_INK, 2))
                .draw(display)
                .ok();
            Circle::with_center(anchor + Point::new(0, 6), 2)
                .into_styled(PrimitiveStyle::with_fill(FACE_INK))
                .draw(display)
                .ok();
        }
        Mark::Siren => {
            // Beacon flashes at 2 Hz.
            let lit = (t_ms / 250) % 2 == 0;
            let lamp = if lit { ALERT } else { blend_rgb565(BACKGROUND, ALERT, 0.4) };
            Circle::with_center(anchor, 14)
                .into_styled(PrimitiveStyle::with_fill(lamp))
                .draw(display)
                .ok();
            Rectangle::new(anchor + Point::new(-9, 6), Size::new(18, 4))
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(display)
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use aerosense_common::config::{PANEL_HEIGHT, SCREEN_WIDTH};

    use super::*;

    #[test]
    fn test_each_severity_has_distinct_face() {
        for (i, a) in Severity::ALL.iter().enumerate() {
            for b in &Severity::ALL[i + 1..] {
                assert_ne!(expression(*a), expression(*b), "{a} and {b} share a face");
            }
        }
    }

    #[test]
    fn test_expression_examples() {
        assert_eq!(expression(Severity::Good).mouth, Mouth::Smile);
        assert_eq!(expression(Severity::UnhealthySensitive).mouth, Mouth::Mask);
        assert_eq!(expression(Severity::Unknown).mark, Some(Mark::Question));
        assert_eq!(expression(Severity::Hazardous).eyes, Eyes::Crossed);
    }

    #[test]
    fn test_ring_fits_in_readout_panel() {
        let max_radius = (HALO_RADIUS as f32 * 1.05) as i32 + 2;
        let top = AVATAR_CENTER.y - max_radius;
        let left = AVATAR_CENTER.x - max_radius;
        assert!(top > PANEL_TOP as i32, "ring clips the panel top");
        assert!(left > MARGIN as i32);
        assert!(AVATAR_CENTER.x + max_radius < SCREEN_WIDTH as i32);
        assert!(AVATAR_CENTER.y + max_radius < (PANEL_TOP + PANEL_HEIGHT) as i32);
    }
}
