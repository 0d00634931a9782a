// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Backend base URL
//! - **Popup**: Hide delays for the user-card popup
//! - **Tick**: Timer resolution for deadline checks

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default base URL of the SocialFeed server (the Flask dev server port).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

// ==========================================================================
// Popup Defaults
// ==========================================================================

/// Delay before hiding the popup after the pointer leaves an avatar or
/// the popup itself is abandoned (milliseconds).
pub const DEFAULT_HOVER_HIDE_DELAY_MS: u64 = 300;

/// Delay before hiding the popup after a touch release, long enough to
/// read the card on touch devices (milliseconds).
pub const DEFAULT_TOUCH_HIDE_DELAY_MS: u64 = 2000;

/// Minimum configurable hide delay (milliseconds).
pub const MIN_HIDE_DELAY_MS: u64 = 100;

/// Maximum configurable hide delay (milliseconds).
pub const MAX_HIDE_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Period of the timer subscription that checks popup hide deadlines and
/// toast auto-dismiss (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Hide delay validation
    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(MAX_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HOVER_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HOVER_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);
    assert!(DEFAULT_TOUCH_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_TOUCH_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);
    assert!(DEFAULT_TOUCH_HIDE_DELAY_MS > DEFAULT_HOVER_HIDE_DELAY_MS);

    // The tick must be able to observe the shortest deadline
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS <= MIN_HIDE_DELAY_MS);
};
