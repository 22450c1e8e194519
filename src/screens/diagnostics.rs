//! Diagnostics page: frame timing, scan counters, session state, event log.
//!
//! Toggled from the dashboard with `Tab`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DIAGNOSTICS                          UP 00:12:34          50 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ SCANS              │ SESSION               │
//! │ Frame:  20.0ms      │ Started:   7       │ Phase: Scanning 42%   │
//! │ Render: 0.5ms       │ Committed: 4       │ Gen:   7              │
//! │ Sleep:  19.5ms      │ Invalid:   1       │ Input: 87             │
//! │ Min:    19.8ms      │ Superseded:1       │ AQI:   87             │
//! │ Max:    25.1ms      │ Cancelled: 1       │ Level: moderate       │
//! │ Avg:    20.1ms      │ Fades:     34      │                       │
//! │ Frames: 12847       │                    │                       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > scan #7 started (87)                                           │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use aerosense_common::{
    colors::{BLACK, GRAY, HIGHLIGHT, TERMINAL_GREEN, WHITE},
    config::{SCREEN_HEIGHT, SCREEN_WIDTH},
    event_log::EventLog,
    scan::{ScanPhase, ScanSession},
};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{profiling::ProfilingMetrics, styles::LABEL_FONT};

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: i32 = 14;
const HEADER_DIVIDER_Y: i32 = 22;
const SECTION_HEADER_Y: i32 = 36;
const STATS_Y: i32 = 52;
const STAT_LINE_HEIGHT: i32 = 14;

const LOG_DIVIDER_Y: i32 = 150;
const LOG_Y: i32 = 166;
const LOG_LINE_HEIGHT: i32 = 14;

const COL1_X: i32 = 6;
const COL2_X: i32 = 166;
const COL3_X: i32 = 326;

const UPTIME_X: i32 = 220;
const FPS_X: i32 = 410;

// =============================================================================
// Styles
// =============================================================================

const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, TERMINAL_GREEN);
const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, GRAY);
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT);
const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const TERMINAL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1));

const _: () = assert!(LOG_Y + LOG_LINE_HEIGHT * 8 < SCREEN_HEIGHT as i32);
const _: () = assert!(STATS_Y + STAT_LINE_HEIGHT * 6 < LOG_DIVIDER_Y);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the diagnostics page over a cleared screen.
pub fn draw_diagnostics_page<D, T>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    session: &ScanSession<T>,
    log: &EventLog,
    fps: f32,
    now_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_title(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    for (label, x) in [("TIMING", COL1_X), ("SCANS", COL2_X), ("SESSION", COL3_X)] {
        Text::new(label, Point::new(x, SECTION_HEADER_Y), SECTION_STYLE)
            .draw(display)
            .ok();
    }

    draw_timing_column(display, metrics);
    draw_scan_column(display, metrics);
    draw_session_column(display, session, now_ms);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_title<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("DIAGNOSTICS", Point::new(COL1_X, HEADER_Y), HEADER_STYLE)
        .draw(display)
        .ok();

    let mut uptime: String<24> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(UPTIME_X, HEADER_Y), VALUE_STYLE)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(FPS_X, HEADER_Y), VALUE_STYLE)
        .draw(display)
        .ok();
}

/// Draw `lines` one under another starting at the stats row.
fn draw_column<D>(
    display: &mut D,
    x: i32,
    lines: &[(String<28>, MonoTextStyle<'static, Rgb565>)],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = STATS_Y;
    for (text, style) in lines {
        Text::new(text, Point::new(x, y), *style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn line(args: core::fmt::Arguments<'_>) -> String<28> {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    s
}

fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let ms = |us: u32| us as f32 / 1000.0;
    draw_column(
        display,
        COL1_X,
        &[
            (line(format_args!("Frame:  {:.1}ms", ms(metrics.frame_time_us))), VALUE_STYLE),
            (line(format_args!("Render: {:.1}ms", ms(metrics.render_time_us))), VALUE_STYLE),
            (line(format_args!("Sleep:  {:.1}ms", ms(metrics.sleep_time_us))), VALUE_STYLE),
            (line(format_args!("Min:    {:.1}ms", metrics.frame_time_min_ms())), HIGHLIGHT_STYLE),
            (line(format_args!("Max:    {:.1}ms", ms(metrics.frame_time_max_us))), HIGHLIGHT_STYLE),
            (line(format_args!("Avg:    {:.1}ms", ms(metrics.frame_time_avg_us()))), HIGHLIGHT_STYLE),
            (line(format_args!("Frames: {}", metrics.total_frames)), VALUE_STYLE),
        ],
    );
}

fn draw_scan_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let scans = &metrics.scans;
    draw_column(
        display,
        COL2_X,
        &[
            (line(format_args!("Started:    {}", scans.started)), VALUE_STYLE),
            (line(format_args!("Committed:  {}", scans.committed)), VALUE_STYLE),
            (line(format_args!("Invalid:    {}", scans.invalid)), VALUE_STYLE),
            (line(format_args!("Superseded: {}", scans.superseded)), HIGHLIGHT_STYLE),
            (line(format_args!("Cancelled:  {}", scans.cancelled)), HIGHLIGHT_STYLE),
            (line(format_args!("Fades:      {}", metrics.color_transitions)), VALUE_STYLE),
        ],
    );
}

fn draw_session_column<D, T>(
    display: &mut D,
    session: &ScanSession<T>,
    now_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let state = session.display_state();
    draw_column(
        display,
        COL3_X,
        &[
            (phase_text(&session.phase(), now_ms), HIGHLIGHT_STYLE),
            (line(format_args!("Gen:   {}", session.generation())), VALUE_STYLE),
            (line(format_args!("Input: {}", session.raw_input())), VALUE_STYLE),
            (committed_text(session.committed_aqi()), VALUE_STYLE),
            (line(format_args!("Level: {}", state.severity.key())), VALUE_STYLE),
        ],
    );
}

/// `Phase: Idle` or `Phase: Scanning NN%`.
fn phase_text(
    phase: &ScanPhase,
    now_ms: u64,
) -> String<28> {
    match phase {
        ScanPhase::Idle => line(format_args!("Phase: Idle")),
        ScanPhase::Scanning(pending) => line(format_args!(
            "Phase: Scanning {:.0}%",
            pending.progress(now_ms) * 100.0
        )),
    }
}

fn committed_text(committed: Option<f32>) -> String<28> {
    match committed {
        Some(v) => line(format_args!("AQI:   {v}")),
        None => line(format_args!("AQI:   -")),
    }
}

fn draw_log_terminal<D>(
    display: &mut D,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(TERMINAL_FILL)
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for entry in log.iter() {
        Text::new(">", Point::new(COL1_X, y), HEADER_STYLE).draw(display).ok();
        Text::new(entry, Point::new(COL1_X + 12, y), LOG_TEXT_STYLE)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), HEADER_STYLE).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 3, y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use aerosense_common::scan::PendingScan;

    use super::*;

    #[test]
    fn test_phase_text() {
        assert_eq!(phase_text(&ScanPhase::Idle, 0).as_str(), "Phase: Idle");
        let pending = PendingScan {
            generation: 1,
            started_at_ms: 1000,
            due_at_ms: 2200,
            reading: Some(87.0),
        };
        assert_eq!(phase_text(&ScanPhase::Scanning(pending), 1600).as_str(), "Phase: Scanning 50%");
        assert_eq!(phase_text(&ScanPhase::Scanning(pending), 9000).as_str(), "Phase: Scanning 100%");
    }

    #[test]
    fn test_committed_text() {
        assert_eq!(committed_text(None).as_str(), "AQI:   -");
        assert_eq!(committed_text(Some(312.5)).as_str(), "AQI:   312.5");
    }

    #[test]
    fn test_log_section_fits() {
        let last = LOG_Y + LOG_LINE_HEIGHT * aerosense_common::event_log::LOG_BUFFER_SIZE as i32;
        assert!(last < SCREEN_HEIGHT as i32, "cursor line off screen");
    }
}
