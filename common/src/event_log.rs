//! On-screen event log.
//!
//! Ring buffer of short lines shown in the diagnostics terminal. It mirrors
//! the user-visible scan events that also go to the `log` facade, so the
//! history can be read without a console attached.
//!
//! ```ignore
//! let mut events = EventLog::new();
//! events.push("> AeroSense online");
//! events.push_fmt(format_args!("scan #{} committed {}", 3, 87));
//!
//! for line in events.iter() {
//!     println!("{line}");
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Configuration
// =============================================================================

/// Lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per line, including the truncation marker.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Line Buffer
// =============================================================================

type Line = String<LOG_LINE_LENGTH>;

/// `fmt::Write` sink that silently drops what does not fit.
struct Truncating<'a> {
    line: &'a mut Line,
    truncated: bool,
}

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            // Keep one slot for the marker.
            if self.line.len() + c.len_utf8() > LOG_LINE_LENGTH - 1 {
                self.truncated = true;
                break;
            }
            self.line.push(c).ok();
        }
        Ok(())
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of the last [`LOG_BUFFER_SIZE`] events, oldest first.
pub struct EventLog {
    buffer: Deque<Line, LOG_BUFFER_SIZE>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Append a line, dropping the oldest when full. Long lines end in `~`.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        self.push_fmt(format_args!("{msg}"));
    }

    /// Append a formatted line without allocating.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line = Line::new();
        let mut sink = Truncating { line: &mut line, truncated: false };
        sink.write_fmt(args).ok();
        if sink.truncated {
            line.push('~').ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("AeroSense online");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("AeroSense online"));
    }

    #[test]
    fn test_event_log_ring_buffer() {
        let mut log = EventLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            log.push_fmt(format_args!("{i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE, "buffer stays at capacity");
        assert_eq!(log.iter().next(), Some("1"), "oldest line was dropped");
        assert_eq!(log.last(), Some("New"));
    }

    #[test]
    fn test_event_log_truncation() {
        let mut log = EventLog::new();
        log.push("This is a very long message that exceeds the maximum line length limit");

        let stored = log.last().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.ends_with('~'), "truncated lines are marked");
    }

    #[test]
    fn test_event_log_formats() {
        let mut log = EventLog::new();
        log.push_fmt(format_args!("scan #{} committed AQI {}", 2, 87));
        assert_eq!(log.last(), Some("scan #2 committed AQI 87"));
    }

    #[test]
    fn test_event_log_clear() {
        let mut log = EventLog::new();
        log.push("a");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }
}
