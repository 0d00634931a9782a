// SPDX-License-Identifier: MPL-2.0
//! A cancellable, deadline-based hide timer.
//!
//! The popup owns one of these instead of sharing a global timeout
//! handle. Arming replaces any previous deadline; cancelling disarms it.
//! The timer never fires on its own: the periodic tick subscription asks
//! it whether the deadline has passed.

use super::HideDelay;
use std::time::Instant;

/// Pending-hide state owned by the popup controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HideTimer {
    deadline: Option<Instant>,
}

impl HideTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to expire `delay` after `now`, replacing any
    /// earlier deadline.
    pub fn arm(&mut self, now: Instant, delay: HideDelay) {
        self.deadline = Some(now + delay.as_duration());
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed,
    /// disarming the timer in the process.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
