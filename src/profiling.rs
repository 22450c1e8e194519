//! Profiling metrics for the diagnostics page.
//!
//! Frame timing statistics, uptime, and counters for what the scan
//! controller did. The on-screen event log lives in
//! `aerosense_common::event_log`, since it has no time dependency.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//!
//! // Scan events:
//! metrics.scans.record_outcome(&outcome);
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use aerosense_common::scan::{ScanOutcome, ScanTicket};
use heapless::String;

// =============================================================================
// Scan Counters
// =============================================================================

/// What the scan controller has done since startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Every `start_scan` call.
    pub started: u32,
    /// Scans that committed a reading.
    pub committed: u32,
    /// Scans that finished without a valid reading.
    pub invalid: u32,
    /// Pending scans replaced by a newer request.
    pub superseded: u32,
    /// Pending scans dropped with `Escape`.
    pub cancelled: u32,
}

impl ScanCounters {
    pub fn record_start(
        &mut self,
        ticket: &ScanTicket,
    ) {
        self.started += 1;
        if ticket.superseded.is_some() {
            self.superseded += 1;
        }
    }

    pub fn record_outcome(
        &mut self,
        outcome: &ScanOutcome,
    ) {
        match outcome {
            ScanOutcome::Committed { .. } => self.committed += 1,
            ScanOutcome::Invalid { .. } => self.invalid += 1,
        }
    }

    #[inline]
    pub const fn record_cancel(&mut self) { self.cancelled += 1; }
}

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and scan statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent rendering (drawing to display buffer)
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Exponential moving average of the frame time
    frame_time_avg_us: f32,

    /// Total frames rendered since startup
    pub total_frames: u64,
    /// Frames in which a severity color was still fading
    pub color_transitions: u32,
    pub scans: ScanCounters,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new profiling metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            color_transitions: 0,
            scans: ScanCounters::default(),
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Smallest frame time in ms, 0 before the first frame.
    pub fn frame_time_min_ms(&self) -> f32 {
        if self.frame_time_min_us == u32::MAX {
            0.0
        } else {
            self.frame_time_min_us as f32 / 1000.0
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn format_hms(total_secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    );
    s
}

// =============================================================================
// Tests
// =============================================================================
