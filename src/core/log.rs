//! Event log data structures.
//!
//! This module defines the append-only log of timestamped user interactions
//! and the [`EventSink`] port every notification source reports to.

use std::fmt;

use super::clock::{Clock, SystemClock};
use super::progress::{self, ProgressIndicator, ProgressSink};

/// Time format used for record prefixes.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Message logged once the application has started.
pub const STARTUP_MESSAGE: &str = "Приложение запущено";

/// Receiver of human-readable notifications.
///
/// Widgets, the pointer filter and the application shell all report through
/// this port instead of holding the log directly.
pub trait EventSink {
    /// Record one notification.
    fn record(&mut self, message: &str);
}

/// A single timestamped entry in the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Wall-clock time of the append, formatted as `HH:MM:SS`
    timestamp: String,
    /// Notification text as given by the caller
    message: String,
}

impl LogRecord {
    /// Time of the append as `HH:MM:SS`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The notification text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of non-blank lines this record occupies once rendered.
    fn line_count(&self) -> usize {
        count_non_empty_lines(&self.to_string())
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Append-only log of user interactions with a derived fill ratio.
///
/// Every append pushes the new ratio into the progress sink `P` before
/// returning. Fullness is measured in non-blank rendered lines, so a message
/// spanning several lines counts once per line.
pub struct EventLog<P: ProgressSink = ProgressIndicator> {
    records: Vec<LogRecord>,
    /// Non-blank lines across all rendered records
    line_count: usize,
    capacity: usize,
    clock: Box<dyn Clock>,
    progress: P,
}

impl EventLog {
    /// Create an empty log using the system clock and a fresh indicator.
    pub fn new(capacity: usize) -> Self {
        Self::with_parts(capacity, Box::new(SystemClock), ProgressIndicator::new())
    }
}

impl<P: ProgressSink> EventLog<P> {
    /// Create an empty log from an explicit clock and progress sink.
    pub fn with_parts(capacity: usize, clock: Box<dyn Clock>, mut progress: P) -> Self {
        progress.set(0.0);
        Self {
            records: Vec::new(),
            line_count: 0,
            capacity: capacity.max(1),
            clock,
            progress,
        }
    }

    /// Append a message stamped with the current time.
    pub fn append(&mut self, message: impl Into<String>) {
        let record = LogRecord {
            timestamp: self.clock.now().format(TIMESTAMP_FORMAT).to_string(),
            message: message.into(),
        };
        self.line_count += record.line_count();
        tracing::debug!(target: "event_log", "{}", record);
        self.records.push(record);
        self.progress.set(self.fill_ratio());
    }

    /// Fraction of the capacity filled, within `[0.0, 1.0]`.
    pub fn fill_ratio(&self) -> f32 {
        progress::fill_ratio(self.line_count, self.capacity)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-blank lines in the rendered log.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Number of lines that counts as a full log.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The progress sink driven by this log.
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// The whole log rendered as text, one record per line.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for record in &self.records {
            text.push_str(&record.to_string());
            text.push('\n');
        }
        text
    }
}

impl<P: ProgressSink> EventSink for EventLog<P> {
    fn record(&mut self, message: &str) {
        self.append(message);
    }
}

/// Count lines that contain something other than whitespace.
fn count_non_empty_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use chrono::{Local, TimeDelta, TimeZone};

    /// Progress sink that remembers every value pushed into it.
    #[derive(Default)]
    struct RecordingSink {
        values: Vec<f32>,
    }

    impl ProgressSink for RecordingSink {
        fn set(&mut self, ratio: f32) {
            self.values.push(ratio);
        }
    }

    fn fixed_clock() -> ManualClock {
        let start = Local
            .with_ymd_and_hms(2024, 3, 1, 9, 5, 7)
            .single()
            .expect("unambiguous local time");
        ManualClock::new(start)
    }

    fn is_hh_mm_ss(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 8
            && bytes[2] == b':'
            && bytes[5] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = EventLog::new(1000);
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.fill_ratio(), 0.0);
        assert_eq!(log.progress().value(), 0.0);
        assert!(log.text().is_empty());
    }

    #[test]
    fn test_button_press_scenario() {
        let mut log = EventLog::new(1000);
        log.append("Нажата кнопка: 'Кнопка'");

        assert!(log.fill_ratio() > 0.0);
        assert_eq!(log.len(), 1);
        let record = &log.records()[0];
        assert_eq!(record.message(), "Нажата кнопка: 'Кнопка'");
        assert!(is_hh_mm_ss(record.timestamp()));
    }

    #[test]
    fn test_record_formatting_uses_clock() {
        let clock = fixed_clock();
        let mut log = EventLog::with_parts(1000, Box::new(clock.clone()), ProgressIndicator::new());

        log.append("first");
        clock.advance(TimeDelta::seconds(61));
        log.append("second");

        assert_eq!(log.records()[0].to_string(), "[09:05:07] first");
        assert_eq!(log.records()[1].to_string(), "[09:06:08] second");
        assert_eq!(log.text(), "[09:05:07] first\n[09:06:08] second\n");
    }

    #[test]
    fn test_records_preserve_call_order() {
        let mut log = EventLog::new(1000);
        for i in 0..25 {
            log.append(format!("event {}", i));
        }

        assert_eq!(log.len(), 25);
        for (i, record) in log.records().iter().enumerate() {
            assert_eq!(record.message(), format!("event {}", i));
        }
    }

    #[test]
    fn test_fill_ratio_half_and_full() {
        let mut log = EventLog::new(1000);
        for _ in 0..500 {
            log.append("tick");
        }
        assert!((log.fill_ratio() - 0.5).abs() < 1e-6);

        for _ in 0..500 {
            log.append("tick");
        }
        assert_eq!(log.fill_ratio(), 1.0);

        log.append("overflow");
        assert_eq!(log.fill_ratio(), 1.0);
        assert_eq!(log.progress().value(), 1.0);
    }

    #[test]
    fn test_progress_pushed_on_every_append() {
        let mut log = EventLog::with_parts(4, Box::new(fixed_clock()), RecordingSink::default());
        for _ in 0..6 {
            log.append("x");
        }

        // First value is the reset at construction
        assert_eq!(
            log.progress().values,
            vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0]
        );
        assert!(log.progress().values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_message_still_counts() {
        let mut log = EventLog::new(1000);
        log.append("");

        assert_eq!(log.len(), 1);
        assert_eq!(log.line_count(), 1);
        assert_eq!(log.records()[0].message(), "");
    }

    #[test]
    fn test_multiline_message_counts_each_line() {
        let mut log = EventLog::new(1000);
        log.append("first\n\n   \nsecond\n");

        assert_eq!(log.len(), 1);
        assert_eq!(log.line_count(), 2);
        assert_eq!(log.line_count(), count_non_empty_lines(&log.text()));
    }

    #[test]
    fn test_line_count_matches_rendered_text() {
        let mut log = EventLog::new(1000);
        log.append(STARTUP_MESSAGE);
        log.append("a\nb");
        log.append("");
        log.append("  \n c");

        assert_eq!(log.line_count(), count_non_empty_lines(&log.text()));
        assert_eq!(log.line_count(), 6);
    }

    #[test]
    fn test_startup_message_gives_one_per_mille() {
        let mut log = EventLog::new(1000);
        log.append(STARTUP_MESSAGE);
        assert_eq!(log.fill_ratio(), 0.001);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut log = EventLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.append("only");
        assert_eq!(log.fill_ratio(), 1.0);
    }

    #[test]
    fn test_event_sink_appends() {
        let mut log = EventLog::new(1000);
        {
            let sink: &mut dyn EventSink = &mut log;
            sink.record("through the port");
        }
        assert_eq!(log.records()[0].message(), "through the port");
    }
}
