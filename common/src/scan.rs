//! Scan session: input text, committed reading, and the simulated scan.
//!
//! A scan is a two-state machine:
//!
//! ```text
//!            start_scan                     complete_scan / poll(due)
//!   Idle ───────────────▶ Scanning(pending) ─────────────────────────▶ Idle
//!     ▲                      │    ▲
//!     │       cancel         │    │ start_scan (cancel-and-restart)
//!     └──────────────────────┘    └──┘
//! ```
//!
//! - `start_scan` stamps `last_read_at` immediately, parses the input, and
//!   schedules the commit `SCAN_DELAY_MS` later (`SCAN_INVALID_DELAY_MS` when
//!   the input does not parse).
//! - A second `start_scan` while scanning supersedes the pending one: the
//!   delay restarts, `last_read_at` is overwritten, and the first commit never
//!   happens.
//! - `poll` is the timer. It is called once per frame with a monotonic
//!   millisecond clock and completes the scan once its deadline passes.
//!
//! The session is generic over the wall-clock timestamp type so it stays
//! `no_std`; the desktop app uses `chrono::DateTime<Local>`.

use heapless::String;

use crate::aqi::{AqiState, classify, classify_text, parse_reading};
use crate::config::{MAX_INPUT_DIGITS, SCAN_DELAY_MS, SCAN_INVALID_DELAY_MS};

/// A scheduled commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingScan {
    /// Which request this commit belongs to.
    pub generation: u32,
    /// Monotonic time the request was made.
    pub started_at_ms: u64,
    /// Monotonic time the commit becomes due.
    pub due_at_ms: u64,
    /// Parsed input captured at request time; `None` if it did not parse.
    pub reading: Option<f32>,
}

impl PendingScan {
    /// Total delay of this scan.
    #[inline]
    pub const fn duration_ms(&self) -> u64 { self.due_at_ms - self.started_at_ms }

    /// Fraction of the delay elapsed at `now_ms`, in 0.0..=1.0.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        let duration = self.duration_ms().max(1);
        (elapsed.min(duration) as f32) / (duration as f32)
    }
}

/// Where the session is in the scan protocol.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning(PendingScan),
}

/// What `start_scan` scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanTicket {
    pub pending: PendingScan,
    /// A previous scan was still pending and has been dropped.
    pub superseded: Option<u32>,
}

/// What a completed scan did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanOutcome {
    /// The reading is now the committed AQI.
    Committed { generation: u32, aqi: f32 },
    /// The input did not parse; the committed AQI was cleared.
    Invalid { generation: u32 },
}

impl ScanOutcome {
    /// Request the outcome belongs to.
    pub const fn generation(&self) -> u32 {
        match self {
            Self::Committed { generation, .. } | Self::Invalid { generation } => *generation,
        }
    }
}

/// Transient dashboard state owned by the controller.
#[derive(Debug)]
pub struct ScanSession<T> {
    raw_input: String<MAX_INPUT_DIGITS>,
    committed_aqi: Option<f32>,
    phase: ScanPhase,
    last_read_at: Option<T>,
    generation: u32,
}

impl<T> ScanSession<T> {
    /// Empty session: no input, nothing committed, idle, never scanned.
    pub const fn new() -> Self {
        Self {
            raw_input: String::new(),
            committed_aqi: None,
            phase: ScanPhase::Idle,
            last_read_at: None,
            generation: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current input text (digits only).
    #[inline]
    pub fn raw_input(&self) -> &str { self.raw_input.as_str() }

    /// Reading committed by the last completed scan.
    #[inline]
    pub const fn committed_aqi(&self) -> Option<f32> { self.committed_aqi }

    /// Whether a scan is pending.
    #[inline]
    pub const fn is_scanning(&self) -> bool { matches!(self.phase, ScanPhase::Scanning(_)) }

    #[inline]
    pub const fn phase(&self) -> ScanPhase { self.phase }

    /// Pending scan, if any.
    #[inline]
    pub const fn pending(&self) -> Option<&PendingScan> {
        match &self.phase {
            ScanPhase::Scanning(pending) => Some(pending),
            ScanPhase::Idle => None,
        }
    }

    /// Wall-clock instant of the most recent scan request.
    #[inline]
    pub const fn last_read_at(&self) -> Option<&T> { self.last_read_at.as_ref() }

    /// Number of scan requests made so far.
    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    /// State to display: the committed reading if there is one, otherwise
    /// the live input text. While scanning this still reflects the previous
    /// commit.
    pub fn display_state(&self) -> AqiState {
        self.committed_aqi
            .map_or_else(|| classify_text(self.raw_input.as_str()), classify)
    }

    // -------------------------------------------------------------------------
    // Input editing
    // -------------------------------------------------------------------------

    /// Append one character. Non-digits and digits past the cap are dropped.
    ///
    /// Returns `true` if the character was accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            log::trace!("input: ignored {c:?}");
            return false;
        }
        let accepted = self.raw_input.push(c).is_ok();
        if accepted {
            log::debug!("input: {:?}", self.raw_input.as_str());
        }
        accepted
    }

    /// Replace the input, keeping only its digits.
    pub fn set_input(&mut self, text: &str) {
        self.raw_input.clear();
        for c in text.chars().filter(char::is_ascii_digit) {
            if self.raw_input.push(c).is_err() {
                break;
            }
        }
        log::debug!("input: {:?}", self.raw_input.as_str());
    }

    /// Remove the last digit. Returns `false` if the input was already empty.
    pub fn backspace(&mut self) -> bool { self.raw_input.pop().is_some() }

    pub fn clear_input(&mut self) { self.raw_input.clear(); }

    // -------------------------------------------------------------------------
    // Scan protocol
    // -------------------------------------------------------------------------

    /// Request a scan (Idle/Scanning -> Scanning).
    ///
    /// `timestamp` becomes `last_read_at` right away, even if the input does
    /// not parse. A scan that is already pending is superseded.
    pub fn start_scan(
        &mut self,
        now_ms: u64,
        timestamp: T,
    ) -> ScanTicket {
        let superseded = self.pending().map(|p| p.generation);
        let reading = parse_reading(self.raw_input.as_str());
        let delay = if reading.is_some() {
            SCAN_DELAY_MS
        } else {
            SCAN_INVALID_DELAY_MS
        };

        self.generation = self.generation.wrapping_add(1);
        let pending = PendingScan {
            generation: self.generation,
            started_at_ms: now_ms,
            due_at_ms: now_ms.saturating_add(delay),
            reading,
        };
        self.phase = ScanPhase::Scanning(pending);
        self.last_read_at = Some(timestamp);

        if let Some(old) = superseded {
            log::info!("scan #{}: restarted, superseding #{old}", pending.generation);
        } else {
            log::info!(
                "scan #{}: started, input {:?}, due in {delay} ms",
                pending.generation,
                self.raw_input.as_str()
            );
        }

        ScanTicket { pending, superseded }
    }

    /// Commit the pending scan now (Scanning -> Idle).
    ///
    /// Returns `None` when no scan is pending.
    pub fn complete_scan(&mut self) -> Option<ScanOutcome> {
        let ScanPhase::Scanning(pending) = self.phase else {
            return None;
        };
        self.phase = ScanPhase::Idle;
        self.committed_aqi = pending.reading;

        let outcome = match pending.reading {
            Some(aqi) => {
                log::info!("scan #{}: committed AQI {aqi}", pending.generation);
                ScanOutcome::Committed {
                    generation: pending.generation,
                    aqi,
                }
            }
            None => {
                log::info!("scan #{}: no valid reading, cleared", pending.generation);
                ScanOutcome::Invalid {
                    generation: pending.generation,
                }
            }
        };
        Some(outcome)
    }

    /// Timer tick. Completes the pending scan once `now_ms` reaches its
    /// deadline.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScanOutcome> {
        match self.phase {
            ScanPhase::Scanning(pending) if now_ms >= pending.due_at_ms => self.complete_scan(),
            _ => None,
        }
    }

    /// Drop the pending scan without committing anything.
    ///
    /// `last_read_at` keeps the instant of the cancelled request.
    /// Returns `false` if nothing was pending.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            ScanPhase::Scanning(pending) => {
                self.phase = ScanPhase::Idle;
                log::info!("scan #{}: cancelled", pending.generation);
                true
            }
            ScanPhase::Idle => false,
        }
    }

    /// Back to the startup state.
    pub fn reset(&mut self) {
        self.cancel();
        self.raw_input.clear();
        self.committed_aqi = None;
        self.last_read_at = None;
    }
}

impl<T> Default for ScanSession<T> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::Severity;

    /// Fake wall clock: seconds since some epoch.
    type Session = ScanSession<u64>;

    fn typed(text: &str) -> Session {
        let mut session = Session::new();
        session.set_input(text);
        session
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.raw_input(), "");
        assert_eq!(session.committed_aqi(), None);
        assert!(!session.is_scanning());
        assert_eq!(session.last_read_at(), None);
        assert_eq!(session.display_state().severity, Severity::Unknown);
    }

    #[test]
    fn test_push_char_keeps_digits_only() {
        let mut session = Session::new();
        assert!(session.push_char('8'));
        assert!(!session.push_char('a'));
        assert!(!session.push_char('-'));
        assert!(!session.push_char('.'));
        assert!(session.push_char('7'));
        assert_eq!(session.raw_input(), "87");
    }

    #[test]
    fn test_set_input_strips_non_digits() {
        assert_eq!(typed("a1b2c3").raw_input(), "123");
        assert_eq!(typed("-42.5").raw_input(), "425");
        assert_eq!(typed("AQI: ").raw_input(), "");
    }

    #[test]
    fn test_input_is_capped() {
        let mut session = typed("1234567890");
        assert_eq!(session.raw_input().len(), MAX_INPUT_DIGITS);
        assert_eq!(session.raw_input(), "123456");
        assert!(!session.push_char('7'), "digits past the cap are dropped");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut session = typed("87");
        assert!(session.backspace());
        assert_eq!(session.raw_input(), "8");
        assert!(session.backspace());
        assert!(!session.backspace(), "empty input has nothing to delete");
        session.set_input("150");
        session.clear_input();
        assert_eq!(session.raw_input(), "");
    }

    #[test]
    fn test_display_follows_raw_input_until_commit() {
        let mut session = typed("87");
        assert_eq!(session.display_state().severity, Severity::Moderate);
        session.set_input("250");
        assert_eq!(session.display_state().severity, Severity::VeryUnhealthy);
    }

    // -------------------------------------------------------------------------
    // Scan protocol
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_scan_commits_after_delay() {
        let mut session = typed("87");
        let ticket = session.start_scan(1_000, 42);

        assert!(session.is_scanning());
        assert_eq!(ticket.pending.due_at_ms, 1_000 + SCAN_DELAY_MS);
        assert_eq!(ticket.superseded, None);
        assert_eq!(session.last_read_at(), Some(&42), "stamped at initiation");
        assert_eq!(session.committed_aqi(), None, "nothing committed yet");

        assert_eq!(session.poll(1_000 + SCAN_DELAY_MS - 1), None, "not due yet");
        assert!(session.is_scanning());

        let outcome = session.poll(1_000 + SCAN_DELAY_MS);
        assert_eq!(outcome, Some(ScanOutcome::Committed { generation: 1, aqi: 87.0 }));
        assert!(!session.is_scanning());
        assert_eq!(session.committed_aqi(), Some(87.0));
        assert_eq!(session.display_state().severity, Severity::Moderate);
        assert_eq!(session.last_read_at(), Some(&42), "not re-stamped on completion");
    }

    #[test]
    fn test_empty_scan_uses_longer_delay_and_stays_unknown() {
        let mut session = Session::new();
        let ticket = session.start_scan(0, 7);
        assert_eq!(ticket.pending.due_at_ms, SCAN_INVALID_DELAY_MS);
        assert_eq!(ticket.pending.reading, None);
        assert_eq!(session.last_read_at(), Some(&7), "stamped even though parse fails");

        assert_eq!(session.poll(SCAN_DELAY_MS), None, "invalid scans pulse longer");
        let outcome = session.poll(SCAN_INVALID_DELAY_MS);
        assert_eq!(outcome, Some(ScanOutcome::Invalid { generation: 1 }));
        assert_eq!(session.committed_aqi(), None);
        assert!(!session.is_scanning());
        assert_eq!(session.display_state().severity, Severity::Unknown);
    }

    #[test]
    fn test_invalid_scan_clears_previous_commit() {
        let mut session = typed("40");
        session.start_scan(0, 1);
        session.complete_scan();
        assert_eq!(session.committed_aqi(), Some(40.0));

        session.clear_input();
        session.start_scan(10_000, 2);
        session.poll(10_000 + SCAN_INVALID_DELAY_MS);
        assert_eq!(session.committed_aqi(), None);
        assert_eq!(session.display_state().severity, Severity::Unknown);
    }

    #[test]
    fn test_display_keeps_last_commit_while_scanning() {
        let mut session = typed("30");
        session.start_scan(0, 1);
        session.poll(SCAN_DELAY_MS);

        session.set_input("450");
        session.start_scan(5_000, 2);
        assert!(session.is_scanning());
        assert_eq!(
            session.display_state().severity,
            Severity::Good,
            "pending scan does not change the displayed state"
        );

        session.poll(5_000 + SCAN_DELAY_MS);
        assert_eq!(session.display_state().severity, Severity::Hazardous);
    }

    #[test]
    fn test_double_trigger_restarts_and_supersedes() {
        let mut session = typed("87");
        session.start_scan(0, 100);

        session.set_input("250");
        let second = session.start_scan(500, 200);
        assert_eq!(second.superseded, Some(1));
        assert_eq!(second.pending.generation, 2);
        assert_eq!(second.pending.due_at_ms, 500 + SCAN_DELAY_MS);
        assert_eq!(session.last_read_at(), Some(&200), "second request overwrites the stamp");

        // The first deadline passes without committing anything.
        assert_eq!(session.poll(SCAN_DELAY_MS), None);
        assert_eq!(session.committed_aqi(), None);
        assert!(session.is_scanning());

        let outcome = session.poll(500 + SCAN_DELAY_MS);
        assert_eq!(outcome, Some(ScanOutcome::Committed { generation: 2, aqi: 250.0 }));
        assert_eq!(session.committed_aqi(), Some(250.0));

        // Nothing left to fire.
        assert_eq!(session.poll(10_000), None);
    }

    #[test]
    fn test_restart_reparses_input() {
        let mut session = typed("87");
        session.start_scan(0, 1);
        session.clear_input();
        let ticket = session.start_scan(100, 2);
        assert_eq!(ticket.pending.reading, None);
        assert_eq!(ticket.pending.due_at_ms, 100 + SCAN_INVALID_DELAY_MS);
    }

    #[test]
    fn test_cancel_drops_pending_commit() {
        let mut session = typed("120");
        session.start_scan(0, 9);
        assert!(session.cancel());
        assert!(!session.is_scanning());
        assert_eq!(session.poll(SCAN_DELAY_MS * 2), None);
        assert_eq!(session.committed_aqi(), None);
        assert_eq!(session.last_read_at(), Some(&9), "cancel keeps the request stamp");
        assert!(!session.cancel(), "nothing left to cancel");
    }

    #[test]
    fn test_cancel_keeps_existing_commit() {
        let mut session = typed("120");
        session.start_scan(0, 1);
        session.complete_scan();
        session.set_input("5");
        session.start_scan(2_000, 2);
        session.cancel();
        assert_eq!(session.committed_aqi(), Some(120.0));
    }

    #[test]
    fn test_complete_scan_when_idle() {
        let mut session = Session::new();
        assert_eq!(session.complete_scan(), None);
    }

    #[test]
    fn test_reset_returns_to_startup_state() {
        let mut session = typed("60");
        session.start_scan(0, 1);
        session.complete_scan();
        session.start_scan(10, 2);
        session.reset();
        assert_eq!(session.raw_input(), "");
        assert_eq!(session.committed_aqi(), None);
        assert_eq!(session.last_read_at(), None);
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_pending_progress() {
        let mut session = typed("10");
        session.start_scan(1_000, 1);
        let pending = *session.pending().unwrap();
        assert_eq!(pending.duration_ms(), SCAN_DELAY_MS);
        assert_eq!(pending.progress(1_000), 0.0);
        assert_eq!(pending.progress(1_600), 0.5);
        assert_eq!(pending.progress(5_000), 1.0, "progress saturates");
        assert_eq!(pending.progress(0), 0.0, "clock before start counts as zero");
    }

    #[test]
    fn test_outcome_generation() {
        assert_eq!(ScanOutcome::Invalid { generation: 3 }.generation(), 3);
        assert_eq!(ScanOutcome::Committed { generation: 4, aqi: 1.0 }.generation(), 4);
    }
}
