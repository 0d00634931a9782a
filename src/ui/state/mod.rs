// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state types.

pub mod hide_delay;
pub mod hide_timer;

pub use hide_delay::HideDelay;
pub use hide_timer::HideTimer;
