use chrono::{DateTime, FixedOffset};

use super::model::{CLOCK_PLACEHOLDER, format_clock};

/// Last rendered clock reading.
#[derive(Debug)]
pub(super) struct StatusBarState {
    clock: String,
}

impl StatusBarState {
    pub(super) fn clock(&self) -> &str {
        &self.clock
    }

    /// Refresh the clock. Returns `true` when the reading changed.
    pub(super) fn tick(&mut self, now: &DateTime<FixedOffset>) -> bool {
        let clock = format_clock(now);
        if clock == self.clock {
            return false;
        }
        self.clock = clock;
        true
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            clock: String::from(CLOCK_PLACEHOLDER),
        }
    }
}
