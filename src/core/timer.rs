//! Elapsed-time reporter.
//!
//! [`ElapsedTimer`] is a cooperative, self-rescheduling timer. The frame loop
//! polls it with the current time; when a firing is due it writes the number
//! of seconds since start to a [`DisplaySink`] and re-arms one period later.

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

/// Default interval between label refreshes.
pub const DEFAULT_PERIOD_MS: u64 = 5000;

/// Shortest interval accepted from settings.
pub const MIN_PERIOD_MS: u64 = 100;

/// Longest interval accepted, one day.
pub const MAX_PERIOD_MS: u64 = 24 * 60 * 60 * 1000;

/// Surface that renders a line of text.
pub trait DisplaySink {
    /// Replace the displayed text.
    fn show(&mut self, text: String);
}

impl DisplaySink for String {
    fn show(&mut self, text: String) {
        *self = text;
    }
}

/// Reporter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Firing every period
    Running,
    /// Cancelled, never fires again
    Stopped,
}

/// Periodically reports the whole seconds elapsed since construction.
#[derive(Debug, Clone)]
pub struct ElapsedTimer {
    /// Captured once, never changes
    start: DateTime<Local>,
    period: TimeDelta,
    /// `None` when the next firing is past the representable range
    next_due: Option<DateTime<Local>>,
    state: TimerState,
}

impl ElapsedTimer {
    /// Start a timer at `start`. The first firing is due one period later.
    ///
    /// Periods longer than [`MAX_PERIOD_MS`] are shortened to it.
    pub fn new(start: DateTime<Local>, period: Duration) -> Self {
        let period = period.min(Duration::from_millis(MAX_PERIOD_MS));
        let period = TimeDelta::from_std(period).unwrap_or_else(|_| TimeDelta::days(1));
        Self {
            start,
            period,
            next_due: start.checked_add_signed(period),
            state: TimerState::Running,
        }
    }

    /// Text shown before the first firing.
    pub fn initial_text(&self) -> String {
        render_elapsed(0)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whole seconds between start and `now`, floored and never negative.
    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> u64 {
        (now - self.start).num_seconds().max(0) as u64
    }

    /// Fire if a refresh is due at `now`.
    ///
    /// Writes the elapsed text to `sink` and re-arms one period after `now`.
    /// At most one firing happens per call. Returns true if the timer fired.
    pub fn poll(&mut self, now: DateTime<Local>, sink: &mut dyn DisplaySink) -> bool {
        let due = match (self.state, self.next_due) {
            (TimerState::Running, Some(due)) => due,
            _ => return false,
        };
        if now < due {
            return false;
        }

        let elapsed = self.elapsed_seconds(now);
        sink.show(render_elapsed(elapsed));
        self.next_due = now.checked_add_signed(self.period);
        tracing::trace!(elapsed, "elapsed timer fired");
        true
    }

    /// Time left until the next firing, zero if overdue. `None` once stopped.
    pub fn time_until_next(&self, now: DateTime<Local>) -> Option<Duration> {
        match (self.state, self.next_due) {
            (TimerState::Running, Some(due)) => {
                Some((due - now).to_std().unwrap_or(Duration::ZERO))
            }
            _ => None,
        }
    }

    /// Cancel the timer. A stopped timer never writes to a sink again.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            tracing::debug!("elapsed timer stopped");
        }
        self.state = TimerState::Stopped;
    }
}

/// Label text for `seconds` since start.
pub fn render_elapsed(seconds: u64) -> String {
    format!("С момента запуска прошло: {} секунд", seconds)
}
