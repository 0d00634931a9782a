// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent.
//!
//! Locale resolution order: CLI flag, config file, OS locale, `en-US`.

pub mod fluent;

pub use fluent::I18n;
