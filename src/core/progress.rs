//! Log fullness indicator.
//!
//! The event log pushes its fill ratio into a [`ProgressSink`] on every append.
//! [`ProgressIndicator`] is the sink the GUI renders as a progress bar.

/// Default number of log lines that counts as a full log.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Receives a fractional progress value.
pub trait ProgressSink {
    /// Set the displayed value. Implementations clamp instead of failing.
    fn set(&mut self, ratio: f32);
}

/// Progress value bounded to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressIndicator {
    value: f32,
}

impl ProgressIndicator {
    /// Create an empty indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value set, always within `[0.0, 1.0]`.
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl ProgressSink for ProgressIndicator {
    fn set(&mut self, ratio: f32) {
        self.value = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
    }
}

/// Fraction of `capacity` filled by `lines`, capped at 1.0.
///
/// A capacity of zero is treated as one.
pub fn fill_ratio(lines: usize, capacity: usize) -> f32 {
    let capacity = capacity.max(1);
    (lines as f32 / capacity as f32).min(1.0)
}
