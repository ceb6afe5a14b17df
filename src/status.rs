//! Periodic caps-lock status display

use crossterm::event::{KeyEvent, KeyEventState};
use std::time::{Duration, Instant};

/// Default refresh interval of the status label
pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks the caps-lock state reported by the terminal and republishes it on a
/// fixed interval.
///
/// The lock state only reaches us when the terminal speaks the keyboard
/// enhancement protocol; otherwise the label stays "unknown".
#[derive(Debug)]
pub struct ModifierStatus {
    enhanced: bool,
    observed: Option<bool>,
    shown: Option<bool>,
    interval: Duration,
    last_refresh: Instant,
}

impl ModifierStatus {
    pub fn new(enhanced: bool, interval: Duration, now: Instant) -> Self {
        Self {
            enhanced,
            observed: None,
            shown: None,
            interval,
            last_refresh: now,
        }
    }

    /// Records the lock state carried by a key event
    pub fn observe(&mut self, key: &KeyEvent) {
        if self.enhanced {
            self.observed = Some(key.state.contains(KeyEventState::CAPS_LOCK));
        }
    }

    /// Publishes the latest observation once the interval has elapsed.
    /// Returns true when a refresh happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_refresh) < self.interval {
            return false;
        }
        self.last_refresh = now;
        self.shown = self.observed;
        true
    }

    /// Time left until the next refresh
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.duration_since(self.last_refresh))
    }

    pub fn caps_lock(&self) -> Option<bool> {
        self.shown
    }

    pub fn label(&self) -> &'static str {
        match self.shown {
            Some(true) => "Caps Lock is ON",
            Some(false) => "Caps Lock is OFF",
            None => "Caps Lock: unknown",
        }
    }
}
