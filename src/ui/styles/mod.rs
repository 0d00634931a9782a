// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for widgets.

pub mod button;
pub mod container;
