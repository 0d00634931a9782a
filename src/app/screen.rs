// SPDX-License-Identifier: MPL-2.0
//! The application's top-level screens.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The feed with the composer on top.
    #[default]
    Feed,
    /// The settings form.
    Settings,
}
