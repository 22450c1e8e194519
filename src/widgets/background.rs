//! Particle field and scan sweep drawn behind the panels.

use aerosense_common::{
    animations::{PARTICLES, blend_rgb565, field_opacity, sweep_row},
    colors::{ACCENT_CYAN, BACKGROUND},
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

/// Sweep line strength against the background.
const SWEEP_OPACITY: f32 = 0.45;

/// Twinkling dots tinted toward `base`.
pub fn draw_particles<D>(
    display: &mut D,
    base: Rgb565,
    scanning: bool,
    t_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let field = field_opacity(scanning);
    for particle in &PARTICLES {
        let (x, y) = particle.position(SCREEN_WIDTH, SCREEN_HEIGHT);
        let color = blend_rgb565(BACKGROUND, base, field * particle.twinkle(t_ms));
        Rectangle::new(Point::new(x, y), Size::new(particle.size, particle.size))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Horizontal line travelling down the screen while a scan runs.
pub fn draw_sweep<D>(
    display: &mut D,
    scanning: bool,
    t_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if !scanning {
        return;
    }
    let y = sweep_row(t_ms, SCREEN_HEIGHT);
    Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(blend_rgb565(BACKGROUND, ACCENT_CYAN, SWEEP_OPACITY), 1))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_on_screen() {
        for p in &PARTICLES {
            let (x, y) = p.position(SCREEN_WIDTH, SCREEN_HEIGHT);
            assert!(x >= 0 && (x as u32 + p.size) <= SCREEN_WIDTH, "particle x {x} off screen");
            assert!(y >= 0 && (y as u32 + p.size) <= SCREEN_HEIGHT, "particle y {y} off screen");
        }
    }
}
