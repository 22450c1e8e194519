// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! AeroSense: an air quality guardian for the desktop.
//!
//! Type an AQI reading, press `Enter`, and Aero "scans" for a moment before
//! committing the value. The dashboard then shows the severity category,
//! an advisory message, and an avatar whose face and glow follow the
//! severity color.
//!
//! # Scan Protocol
//!
//! A scan request records the wall-clock time right away and switches the
//! session to `Scanning`. The reading is committed after 1.2 s, or after
//! 1.6 s when the input does not parse (the committed value is then
//! cleared). A new request while a scan is pending cancels the old one and
//! restarts the timer. See `aerosense_common::scan`.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `0`-`9` | Type digits |
//! | `Backspace` | Delete the last character |
//! | `Delete` | Clear the input |
//! | `Enter` / click the button | Scan |
//! | `Escape` | Cancel a pending scan |
//! | `Tab` | Switch between Dashboard and Diagnostics |
//!
//! Key repeat is ignored for everything but editing keys.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ▣ AeroSense  The Air Quality Guardian          Ready for 2030 │  28px
//! ├──────────────────────────────────────┬───────────────────────┤
//! │  READOUT                             │  INPUT                │
//! │  avatar, category, message           │  field, scan button   │
//! │                                      ├───────────────────────┤
//! │  ┌ AQI ┐ ┌ CATEGORY ┐ ┌ LAST ┐       │  ECO TIPS             │
//! ├──────────────────────────────────────┴───────────────────────┤
//! │        (c) 2030 AeroSense - Futuristic air insights.         │  18px
//! └──────────────────────────────────────────────────────────────┘
//!            292px                               170px
//! ```

mod clock;
mod popup;
mod profiling;
mod screens;
mod styles;
mod timing;
mod widgets;

use std::thread;
use std::time::Instant;

use aerosense_common::{
    BACKGROUND,
    MUTED,
    Page,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    ScanOutcome,
    ScanSession,
    WINDOW_SCALE,
    animations::{ColorSlot, ColorTransition},
    aqi::AqiState,
    colors::to_rgb565,
    event_log::EventLog,
    tint::parse_hex,
};
use chrono::{DateTime, Local};
use clock::{MonotonicClock, current_year, format_timestamp};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::{debug, info};
use popup::Popup;
use profiling::ProfilingMetrics;
use screens::{draw_diagnostics_page, run_boot_screen};
use timing::FRAME_TIME;
use widgets::{
    Readout,
    draw_footer,
    draw_header,
    draw_input,
    draw_particles,
    draw_popup,
    draw_readout,
    draw_sweep,
    draw_tips,
    hit_scan_button,
};

// =============================================================================
// Input Mapping
// =============================================================================

/// Digit typed by `keycode`, from the number row or the keypad.
fn digit_for(keycode: Keycode) -> Option<char> {
    let digit = match keycode {
        Keycode::NUM_0 | Keycode::KP_0 => 0,
        Keycode::NUM_1 | Keycode::KP_1 => 1,
        Keycode::NUM_2 | Keycode::KP_2 => 2,
        Keycode::NUM_3 | Keycode::KP_3 => 3,
        Keycode::NUM_4 | Keycode::KP_4 => 4,
        Keycode::NUM_5 | Keycode::KP_5 => 5,
        Keycode::NUM_6 | Keycode::KP_6 => 6,
        Keycode::NUM_7 | Keycode::KP_7 => 7,
        Keycode::NUM_8 | Keycode::KP_8 => 8,
        Keycode::NUM_9 | Keycode::KP_9 => 9,
        _ => return None,
    };
    char::from_digit(digit, 10)
}

/// Base color of a state as RGB565.
fn base_color(state: &AqiState) -> Rgb565 { parse_hex(state.color).map_or(MUTED, to_rgb565) }

/// Point every color slot at `state`'s palette. Returns `true` if a fade
/// started.
fn retarget(
    colors: &mut ColorTransition,
    state: &AqiState,
) -> bool {
    let base = base_color(state);
    let from = colors.set_target(ColorSlot::Base, base);
    let glow_from = colors.set_target(ColorSlot::GlowFrom, state.glow_from.to_rgb565_or(base));
    let glow_to = colors.set_target(ColorSlot::GlowTo, state.glow_to.to_rgb565_or(base));
    from | glow_from | glow_to
}

// =============================================================================
// Scan Actions
// =============================================================================

/// Everything a scan request touches besides the session.
struct Bookkeeping {
    metrics: ProfilingMetrics,
    events: EventLog,
    popup: Option<Popup>,
}

fn request_scan(
    session: &mut ScanSession<DateTime<Local>>,
    timer: &MonotonicClock,
    book: &mut Bookkeeping,
) {
    let ticket = session.start_scan(timer.now_ms(), clock::now());
    book.metrics.scans.record_start(&ticket);
    let generation = ticket.pending.generation;
    if let Some(old) = ticket.superseded {
        book.popup = Some(Popup::Restarted(Instant::now()));
        book.events.push_fmt(format_args!("scan #{generation} restarted (drop #{old})"));
    } else {
        book.events.push_fmt(format_args!(
            "scan #{generation} started ({})",
            if session.raw_input().is_empty() {
                "empty"
            } else {
                session.raw_input()
            }
        ));
    }
}

fn record_outcome(
    outcome: &ScanOutcome,
    book: &mut Bookkeeping,
) {
    book.metrics.scans.record_outcome(outcome);
    match outcome {
        ScanOutcome::Committed { generation, aqi } => {
            book.events.push_fmt(format_args!("scan #{generation} committed AQI {aqi}"));
        }
        ScanOutcome::Invalid { generation } => {
            book.events.push_fmt(format_args!("scan #{generation} invalid, cleared"));
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("AeroSense", &output_settings);

    display.clear(BACKGROUND).ok();
    window.update(&display);

    if !run_boot_screen(&mut display, &mut window) {
        return;
    }

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let timer = MonotonicClock::new();
    let year = current_year();
    let mut session: ScanSession<DateTime<Local>> = ScanSession::new();

    let initial = session.display_state();
    let mut colors = ColorTransition::new(base_color(&initial));
    colors.snap(ColorSlot::GlowFrom, initial.glow_from.to_rgb565_or(base_color(&initial)));
    colors.snap(ColorSlot::GlowTo, initial.glow_to.to_rgb565_or(base_color(&initial)));

    let mut current_page = Page::default();

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut book = Bookkeeping {
        metrics: ProfilingMetrics::new(),
        events: EventLog::new(),
        popup: None,
    };
    book.events.push("AeroSense online");
    info!("dashboard ready, {SCREEN_WIDTH}x{SCREEN_HEIGHT} at {WINDOW_SCALE}x");

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed after {} frames", book.metrics.total_frames);
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if let Some(digit) = digit_for(keycode) {
                        if !session.push_char(digit) {
                            debug!("input full, dropped {digit}");
                        }
                        continue;
                    }
                    match keycode {
                        Keycode::BACKSPACE => {
                            session.backspace();
                        }
                        _ if repeat => {}
                        Keycode::DELETE => session.clear_input(),
                        Keycode::RETURN | Keycode::KP_ENTER => request_scan(&mut session, &timer, &mut book),
                        Keycode::ESCAPE => {
                            if session.cancel() {
                                book.metrics.scans.record_cancel();
                                book.popup = Some(Popup::Cancelled(Instant::now()));
                                book.events.push_fmt(format_args!("scan #{} cancelled", session.generation()));
                            }
                        }
                        Keycode::TAB => {
                            current_page = current_page.toggle();
                            book.popup = None;
                            book.events.push_fmt(format_args!("page: {}", current_page.name()));
                            info!("page switched to {}", current_page.name());
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } if current_page == Page::Dashboard && hit_scan_button(point) => {
                    request_scan(&mut session, &timer, &mut book);
                }
                _ => {}
            }
        }

        let now_ms = timer.now_ms();
        if let Some(outcome) = session.poll(now_ms) {
            record_outcome(&outcome, &mut book);
        }

        if let Some(ref popup) = book.popup
            && popup.is_expired()
        {
            book.popup = None;
        }

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Render
        // ======================================================================

        let state = session.display_state();
        if retarget(&mut colors, &state) {
            debug!("fading to {}", state.severity.key());
        }
        if colors.update() != 0 {
            book.metrics.color_transitions += 1;
        }

        match current_page {
            Page::Dashboard => {
                let scanning = session.is_scanning();
                let base = colors.get(ColorSlot::Base);
                let last_read = session.last_read_at().map(format_timestamp);

                display.clear(BACKGROUND).ok();
                draw_particles(&mut display, base, scanning, now_ms);
                draw_sweep(&mut display, scanning, now_ms);
                draw_header(&mut display);
                draw_readout(
                    &mut display,
                    &colors,
                    &Readout {
                        state: &state,
                        committed: session.committed_aqi(),
                        last_read: last_read.as_deref(),
                        scanning,
                        t_ms: now_ms,
                    },
                );
                draw_input(&mut display, session.raw_input(), session.pending(), now_ms);
                draw_tips(&mut display, base);
                draw_footer(&mut display, year);

                if let Some(ref popup) = book.popup {
                    draw_popup(&mut display, popup);
                }
            }
            Page::Diagnostics => {
                draw_diagnostics_page(&mut display, &book.metrics, &session, &book.events, current_fps, now_ms);
            }
        }

        let render_time = frame_start.elapsed();
        window.update(&display);

        // ======================================================================
        // Frame Rate Limiting
        // ======================================================================

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        book.metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

#[cfg(test)]
mod tests {
    use aerosense_common::{Severity, classify};

    use super::*;

    #[test]
    fn test_digit_for_number_row_and_keypad() {
        assert_eq!(digit_for(Keycode::NUM_0), Some('0'));
        assert_eq!(digit_for(Keycode::NUM_7), Some('7'));
        assert_eq!(digit_for(Keycode::KP_9), Some('9'));
        assert_eq!(digit_for(Keycode::A), None);
        assert_eq!(digit_for(Keycode::RETURN), None);
    }

    #[test]
    fn test_base_color_per_severity() {
        for severity in Severity::ALL {
            let state = AqiState::for_severity(severity);
            assert_ne!(base_color(&state), MUTED, "{severity} color failed to parse");
        }
    }

    #[test]
    fn test_retarget_reports_new_fades_only() {
        let unknown = ScanSession::<()>::new().display_state();
        let mut colors = ColorTransition::new(base_color(&unknown));
        colors.snap(ColorSlot::GlowFrom, unknown.glow_from.to_rgb565_or(MUTED));
        colors.snap(ColorSlot::GlowTo, unknown.glow_to.to_rgb565_or(MUTED));

        assert!(!retarget(&mut colors, &unknown), "same palette starts no fade");
        assert!(retarget(&mut colors, &classify(250.0)));
        assert!(!retarget(&mut colors, &classify(260.0)), "target already set");
    }
}
