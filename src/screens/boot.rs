//! Boot screen with console-style startup messages.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │      |  AeroSense booting  /       │  title with spinners
//! │────────────────────────────────────│
//! │   Calibrating particle sensors...  │
//! │   Loading severity palette...      │  console output
//! │ > Aero is awake.                   │  current line
//! └────────────────────────────────────┘
//! ```
//!
//! Each message stays up for its own duration while the spinners turn.
//! Older lines scroll off once the console is full.

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use aerosense_common::{
    colors::{ACCENT_CYAN, BACKGROUND, BORDER, TERMINAL_GREEN},
    config::{CENTER_X, SCREEN_WIDTH},
};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use log::info;

use crate::{
    styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, TITLE_STYLE_WHITE},
    timing::BOOT_SETTLE,
};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(CENTER_X, 40);
const LINE_START: Point = Point::new(20, 52);
const LINE_END: Point = Point::new(SCREEN_WIDTH as i32 - 20, 52);

const CONSOLE_X: i32 = 20;
const CONSOLE_START_Y: i32 = 72;
const CONSOLE_LINE_HEIGHT: i32 = 14;
const CONSOLE_MAX_LINES: usize = 16;

const CONSOLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, TERMINAL_GREEN);
const CURRENT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, ACCENT_CYAN);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BORDER, 1);

/// Startup messages and how long each stays current, in ms.
const BOOT_MESSAGES: [(&str, u64); 6] = [
    ("Initializing AeroSense core...", 500),
    ("Calibrating particle sensors...", 700),
    ("Loading severity palette...", 400),
    ("Syncing clock...", 300),
    ("Waking Aero...", 500),
    ("Aero is awake.", 300),
];

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Frames per spinner step.
const SPINNER_DIVIDER: u32 = 6;

// =============================================================================
// Boot Screen
// =============================================================================

/// Visible slice of the console once `current` is the newest line.
fn visible_lines(current: usize) -> &'static [(&'static str, u64)] {
    let end = (current + 1).min(BOOT_MESSAGES.len());
    let start = end.saturating_sub(CONSOLE_MAX_LINES);
    &BOOT_MESSAGES[start..end]
}

/// Run the boot sequence.
///
/// Returns `false` if the window is closed, `true` when the sequence ends.
pub fn run_boot_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) -> bool {
    let mut spinner_idx = 0;
    let mut frame = 0u32;

    for (current, (msg, duration_ms)) in BOOT_MESSAGES.iter().enumerate() {
        info!("boot: {msg}");
        let msg_start = Instant::now();
        let msg_duration = Duration::from_millis(*duration_ms);

        while msg_start.elapsed() < msg_duration {
            for ev in window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    return false;
                }
            }

            display.clear(BACKGROUND).ok();

            frame = frame.wrapping_add(1);
            if frame.is_multiple_of(SPINNER_DIVIDER) {
                spinner_idx = (spinner_idx + 1) % SPINNER.len();
            }
            let left = SPINNER[spinner_idx];
            let right = SPINNER[(spinner_idx + 2) % SPINNER.len()];

            let mut title: String<32> = String::new();
            let _ = write!(title, "{left}  AeroSense booting  {right}");
            Text::with_text_style(&title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
                .draw(display)
                .ok();

            Line::new(LINE_START, LINE_END)
                .into_styled(DIVIDER_STYLE)
                .draw(display)
                .ok();

            let lines = visible_lines(current);
            for (i, (line, _)) in lines.iter().enumerate() {
                let y = CONSOLE_START_Y + i as i32 * CONSOLE_LINE_HEIGHT;
                let is_current = i == lines.len() - 1;
                let (prefix, style) = if is_current { ("> ", CURRENT_STYLE) } else { ("  ", CONSOLE_STYLE) };
                let mut full: String<64> = String::new();
                let _ = write!(full, "{prefix}{line}");
                Text::with_text_style(&full, Point::new(CONSOLE_X, y), style, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }

            window.update(display);
            thread::sleep(Duration::from_millis(16));
        }
    }

    thread::sleep(BOOT_SETTLE);
    true
}

#[cfg(test)]
mod tests {
    use aerosense_common::config::SCREEN_HEIGHT;

    use super::*;

    #[test]
    fn test_visible_lines_grow_then_scroll() {
        assert_eq!(visible_lines(0).len(), 1);
        assert_eq!(visible_lines(2).len(), 3);
        assert_eq!(visible_lines(2).last().map(|(m, _)| *m), Some(BOOT_MESSAGES[2].0));
        assert_eq!(visible_lines(99).len(), BOOT_MESSAGES.len().min(CONSOLE_MAX_LINES));
    }

    #[test]
    fn test_console_fits_screen() {
        let last = CONSOLE_START_Y + (CONSOLE_MAX_LINES as i32 - 1) * CONSOLE_LINE_HEIGHT;
        assert!(last < SCREEN_HEIGHT as i32);
        for (msg, _) in BOOT_MESSAGES {
            assert!(msg.len() + 2 <= 64, "{msg} overflows the line buffer");
        }
    }
}
