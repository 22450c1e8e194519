//! Animation math for the avatar, particle field, and scan effects.
//!
//! Every effect here is a pure function of a millisecond clock, so the
//! renderer can call them each frame without keeping per-effect state. The
//! one exception is [`ColorTransition`], which fades the severity colors
//! over several frames when the classification changes.
//!
//! # Avatar
//!
//! - **Bob**: the core orb floats up and back down once per period. The
//!   motion is smoother and bigger while a scan is pending:
//!   ```text
//!   offset = -amplitude * (1 - cos(2*pi*phase)) / 2
//!   ```
//! - **Halo pulse**: the glow halo breathes between 60% and 100% while
//!   scanning and rests at 70% otherwise.
//! - **Ring**: while scanning, a ring expands from 60% to 105% of the avatar
//!   radius and fades out (ease-out), restarting every period.
//!
//! # Background
//!
//! - **Particles**: 24 fixed dots spread with co-prime strides so they never
//!   line up. Each twinkles with its own phase delay.
//! - **Sweep**: a horizontal scan line that crosses the screen while scanning.
//!
//! Trigonometry goes through `micromath` since this crate is `no_std`.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};
use micromath::F32;

use crate::config::PARTICLE_COUNT;

const TAU: f32 = core::f32::consts::TAU;

// =============================================================================
// Avatar Constants
// =============================================================================

/// Bob height while scanning, in pixels.
pub const SCAN_BOB_AMPLITUDE: f32 = 6.0;

/// Bob period while scanning.
pub const SCAN_BOB_PERIOD_MS: u64 = 1400;

/// Bob height while idle, in pixels.
pub const IDLE_BOB_AMPLITUDE: f32 = 4.0;

/// Bob period while idle. Slow drift.
pub const IDLE_BOB_PERIOD_MS: u64 = 4000;

/// Halo breathing period while scanning.
pub const HALO_PERIOD_MS: u64 = 2200;

/// Halo opacity bounds while scanning.
const HALO_MIN: f32 = 0.6;
const HALO_MAX: f32 = 1.0;

/// Halo opacity at rest.
pub const HALO_IDLE: f32 = 0.7;

/// Ring expansion period.
pub const RING_PERIOD_MS: u64 = 1200;

/// Ring scale at the start of each cycle.
pub const RING_SCALE_MIN: f32 = 0.6;

/// Ring scale at the end of each cycle.
pub const RING_SCALE_MAX: f32 = 1.05;

/// Ring opacity at the start of each cycle; fades to zero.
const RING_OPACITY_START: f32 = 0.6;

const _: () = assert!(SCAN_BOB_PERIOD_MS < IDLE_BOB_PERIOD_MS);
const _: () = assert!(RING_SCALE_MIN < RING_SCALE_MAX);

// =============================================================================
// Background Constants
// =============================================================================

/// Full twinkle cycle of one particle.
pub const TWINKLE_PERIOD_MS: u64 = 3000;

/// Stagger between particle phases; twelve groups.
pub const PARTICLE_DELAY_STEP_MS: u64 = 250;

/// Particle field opacity while scanning and at rest.
const FIELD_OPACITY_SCANNING: f32 = 0.6;
const FIELD_OPACITY_IDLE: f32 = 0.2;

/// Time for the sweep line to cross the screen once.
pub const SWEEP_PERIOD_MS: u64 = 1600;

/// Input caret blink period (half on, half off).
pub const CARET_PERIOD_MS: u64 = 1000;

// =============================================================================
// Color Transition Constants
// =============================================================================

/// Speed of color interpolation (0.0-1.0).
/// At 0.15 a full color change takes about 15-20 frames (~300ms at 50 FPS).
const COLOR_LERP_SPEED: f32 = 0.15;

/// Fixed-point `COLOR_LERP_SPEED` (8 fractional bits).
#[cfg(test)]
const COLOR_LERP_T_FIXED: i32 = 38;

/// Manhattan distance under which a fading color snaps to its target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Timing Helpers
// =============================================================================

/// Position inside a repeating cycle, in 0.0..1.0.
#[inline]
pub fn cycle_phase(t_ms: u64, period_ms: u64) -> f32 {
    if period_ms == 0 {
        return 0.0;
    }
    (t_ms % period_ms) as f32 / period_ms as f32
}

/// Raised cosine: 0 at both ends of the cycle, 1 at the middle.
#[inline]
fn raised_cosine(phase: f32) -> f32 { (1.0 - F32(TAU * phase).cos().0) * 0.5 }

// =============================================================================
// Avatar
// =============================================================================

/// Vertical orb offset in pixels. Negative is up.
pub fn bob_offset(
    t_ms: u64,
    scanning: bool,
) -> i32 {
    let (amplitude, period) = if scanning {
        (SCAN_BOB_AMPLITUDE, SCAN_BOB_PERIOD_MS)
    } else {
        (IDLE_BOB_AMPLITUDE, IDLE_BOB_PERIOD_MS)
    };
    let lift = amplitude * raised_cosine(cycle_phase(t_ms, period));
    -((lift + 0.5) as i32)
}

/// Halo opacity, 0.0-1.0.
pub fn halo_opacity(
    t_ms: u64,
    scanning: bool,
) -> f32 {
    if !scanning {
        return HALO_IDLE;
    }
    HALO_MIN + (HALO_MAX - HALO_MIN) * raised_cosine(cycle_phase(t_ms, HALO_PERIOD_MS))
}

/// Ring scale and opacity for the current frame (ease-out).
pub fn ring(t_ms: u64) -> (f32, f32) {
    let p = cycle_phase(t_ms, RING_PERIOD_MS);
    let eased = 1.0 - (1.0 - p) * (1.0 - p);
    let scale = RING_SCALE_MIN + (RING_SCALE_MAX - RING_SCALE_MIN) * eased;
    let opacity = RING_OPACITY_START * (1.0 - eased);
    (scale, opacity)
}

/// Caret visibility for a blinking cursor.
#[inline]
pub fn caret_visible(t_ms: u64) -> bool { t_ms % CARET_PERIOD_MS < CARET_PERIOD_MS / 2 }

// =============================================================================
// Particles
// =============================================================================

/// One background dot. Position is a percentage of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub x_pct: u32,
    pub y_pct: u32,
    /// Diameter in pixels.
    pub size: u32,
    /// Twinkle phase delay.
    pub delay_ms: u64,
}

impl Particle {
    /// The `index`-th dot of the field.
    pub const fn nth(index: usize) -> Self {
        let i = index as u32;
        Self {
            x_pct: (i * 53) % 100,
            y_pct: (i * 37) % 100,
            size: 2 + i % 3,
            delay_ms: (index as u64 % 12) * PARTICLE_DELAY_STEP_MS,
        }
    }

    /// Top-left pixel inside a `width` x `height` field.
    pub const fn position(
        &self,
        width: u32,
        height: u32,
    ) -> (i32, i32) {
        ((width * self.x_pct / 100) as i32, (height * self.y_pct / 100) as i32)
    }

    /// Brightness multiplier, 0.3-1.0, cycling with this dot's delay.
    pub fn twinkle(
        &self,
        t_ms: u64,
    ) -> f32 {
        let p = cycle_phase(t_ms + TWINKLE_PERIOD_MS - self.delay_ms % TWINKLE_PERIOD_MS, TWINKLE_PERIOD_MS);
        1.0 - 0.7 * raised_cosine(p)
    }
}

/// The whole particle field, computed at compile time.
pub const PARTICLES: [Particle; PARTICLE_COUNT] = {
    let mut out = [Particle::nth(0); PARTICLE_COUNT];
    let mut i = 1;
    while i < PARTICLE_COUNT {
        out[i] = Particle::nth(i);
        i += 1;
    }
    out
};

/// Overall field opacity; the field brightens during a scan.
#[inline]
pub const fn field_opacity(scanning: bool) -> f32 {
    if scanning {
        FIELD_OPACITY_SCANNING
    } else {
        FIELD_OPACITY_IDLE
    }
}

/// Row of the sweep line on a screen `height` pixels tall.
pub fn sweep_row(
    t_ms: u64,
    height: u32,
) -> i32 {
    (cycle_phase(t_ms, SWEEP_PERIOD_MS) * height as f32) as i32
}

// =============================================================================
// Color Transition State
// =============================================================================

/// Slots faded by the dashboard's [`ColorTransition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSlot {
    /// Severity base color (category text, ring, bullets, particles).
    Base = 0,
    /// Brightened glow (halo, orb highlight).
    GlowFrom = 1,
    /// Darkened glow (orb rim).
    GlowTo = 2,
}

/// Number of [`ColorSlot`] variants.
pub const COLOR_SLOTS: usize = 3;

/// Smoothly fades a fixed set of colors toward their targets.
///
/// Each slot has a current color that moves a fraction of the way toward its
/// target every frame.
pub struct ColorTransition {
    current: [Rgb565; COLOR_SLOTS],
    target: [Rgb565; COLOR_SLOTS],
    transitioning: [bool; COLOR_SLOTS],
}

impl ColorTransition {
    /// All slots start at `initial` with no active fades.
    pub const fn new(initial: Rgb565) -> Self {
        Self {
            current: [initial; COLOR_SLOTS],
            target: [initial; COLOR_SLOTS],
            transitioning: [false; COLOR_SLOTS],
        }
    }

    /// Jump a slot straight to `color`, cancelling any fade.
    pub fn snap(
        &mut self,
        slot: ColorSlot,
        color: Rgb565,
    ) {
        let i = slot as usize;
        self.current[i] = color;
        self.target[i] = color;
        self.transitioning[i] = false;
    }

    /// Set a slot's target. Returns `true` if a new fade started.
    pub fn set_target(
        &mut self,
        slot: ColorSlot,
        target: Rgb565,
    ) -> bool {
        let i = slot as usize;
        if self.target[i] == target {
            false
        } else {
            self.target[i] = target;
            self.transitioning[i] = true;
            true
        }
    }

    /// Color to draw for a slot this frame.
    #[inline]
    pub const fn get(
        &self,
        slot: ColorSlot,
    ) -> Rgb565 {
        self.current[slot as usize]
    }

    /// Whether any slot is still fading.
    #[inline]
    pub fn is_active(&self) -> bool { self.transitioning.iter().any(|t| *t) }

    /// Advance all fades by one frame.
    ///
    /// Returns a bitmask of the slots that changed color.
    pub fn update(&mut self) -> u8 {
        let mut changed: u8 = 0;

        for i in 0..COLOR_SLOTS {
            if !self.transitioning[i] {
                continue;
            }
            let current = self.current[i];
            let target = self.target[i];

            if current == target {
                self.transitioning[i] = false;
                continue;
            }

            let next = lerp_rgb565(current, target, COLOR_LERP_SPEED);
            if colors_close_enough(next, target) {
                self.current[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current[i] = next;
            }

            changed |= 1 << i;
        }

        changed
    }
}

// =============================================================================
// Color Helpers
// =============================================================================

#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

#[inline]
fn from_channels(
    r: i32,
    g: i32,
    b: i32,
) -> Rgb565 {
    Rgb565::new(r.clamp(0, 31) as u8, g.clamp(0, 63) as u8, b.clamp(0, 31) as u8)
}

/// One fade step from `from` toward `to` with fixed-point factor `t`.
///
/// A non-zero delta always moves at least one unit so fades cannot stall
/// short of the snap threshold.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (fr, fg, fb) = channels(from);
    let (tr, tg, tb) = channels(to);
    let t_fixed = (t * 256.0) as i32;

    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            match (delta * t_fixed) >> 8 {
                0 if delta > 0 => 1,
                0 => -1,
                s => s,
            }
        }
    };

    from_channels(fr + step(tr - fr), fg + step(tg - fg), fb + step(tb - fb))
}

/// Mix `fg` over `bg` at `alpha` (0.0-1.0). Stands in for opacity on a
/// display without an alpha channel.
pub fn blend_rgb565(
    bg: Rgb565,
    fg: Rgb565,
    alpha: f32,
) -> Rgb565 {
    let a = (alpha.clamp(0.0, 1.0) * 256.0) as i32;
    let (br, bgc, bb) = channels(bg);
    let (fr, fgc, fb) = channels(fg);
    let mix = |b: i32, f: i32| b + (((f - b) * a) >> 8);
    from_channels(mix(br, fr), mix(bgc, fgc), mix(bb, fb))
}

fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (ar, ag, ab) = channels(a);
    let (br, bg, bb) = channels(b);
    (ar - br).abs() + (ag - bg).abs() + (ab - bb).abs() <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================
