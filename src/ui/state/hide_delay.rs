// SPDX-License-Identifier: MPL-2.0
//! Hide-delay domain type for the user-card popup.
//!
//! This module provides a type-safe wrapper for the popup auto-hide
//! delay in milliseconds.

use crate::config::{MAX_HIDE_DELAY_MS, MIN_HIDE_DELAY_MS};
use std::time::Duration;

/// Popup hide delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the configurable range.
///
/// # Example
///
/// ```
/// use iced_feed::ui::state::HideDelay;
///
/// let delay = HideDelay::new(300);
/// assert_eq!(delay.value(), 300);
///
/// // Values outside range are clamped
/// let too_low = HideDelay::new(0);
/// assert_eq!(too_low.value(), 100); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_HIDE_DELAY_MS, MAX_HIDE_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(crate::config::DEFAULT_HOVER_HIDE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_HOVER_HIDE_DELAY_MS, DEFAULT_TOUCH_HIDE_DELAY_MS};

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(HideDelay::new(0).value(), MIN_HIDE_DELAY_MS);
        assert_eq!(HideDelay::new(u64::MAX).value(), MAX_HIDE_DELAY_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(
            HideDelay::new(DEFAULT_HOVER_HIDE_DELAY_MS).value(),
            DEFAULT_HOVER_HIDE_DELAY_MS
        );
        assert_eq!(
            HideDelay::new(DEFAULT_TOUCH_HIDE_DELAY_MS).value(),
            DEFAULT_TOUCH_HIDE_DELAY_MS
        );
    }

    #[test]
    fn default_is_hover_delay() {
        assert_eq!(HideDelay::default().value(), DEFAULT_HOVER_HIDE_DELAY_MS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            HideDelay::new(300).as_duration(),
            Duration::from_millis(300)
        );
    }
}
