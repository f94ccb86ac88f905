//! Pointer position change filter.
//!
//! Pointer movement arrives every frame. [`PositionFilter`] forwards a
//! notification only while enabled and only when the position differs from
//! the last one it accepted.

use super::log::EventSink;

/// Logged when tracking is switched on.
pub const ENABLED_MESSAGE: &str = "Включено отслеживание мыши";

/// Logged when tracking is switched off.
pub const DISABLED_MESSAGE: &str = "Отключено отслеживание мыши";

/// A pointer position in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Suppresses repeated pointer notifications for an unchanged position.
#[derive(Debug, Clone, Default)]
pub struct PositionFilter {
    enabled: bool,
    last: Option<Position>,
}

impl PositionFilter {
    /// Create a disabled filter with no known position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if observations are forwarded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last accepted position, if any.
    pub fn last_position(&self) -> Option<Position> {
        self.last
    }

    /// Switch tracking on or off, logging the transition.
    ///
    /// Requesting the current state again does nothing.
    pub fn set_enabled(&mut self, enabled: bool, sink: &mut dyn EventSink) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        tracing::info!(enabled, "pointer tracking toggled");
        sink.record(if enabled {
            ENABLED_MESSAGE
        } else {
            DISABLED_MESSAGE
        });
    }

    /// Report a pointer position.
    ///
    /// Ignored while disabled. Otherwise logs and remembers the position if it
    /// changed since the last accepted one.
    pub fn observe(&mut self, x: i32, y: i32, sink: &mut dyn EventSink) {
        if !self.enabled {
            return;
        }
        let position = Position { x, y };
        if self.last == Some(position) {
            return;
        }
        self.last = Some(position);
        sink.record(&format!("Курсор: X={}, Y={}", x, y));
    }
}
