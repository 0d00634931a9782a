// SPDX-License-Identifier: MPL-2.0
//! `iced_feed` is a desktop client for the SocialFeed server, built with
//! the Iced GUI framework.
//!
//! It renders the feed, composes text/image/video posts with submit-time
//! validation, uploads a new profile picture straight from the avatar,
//! and shows a small user card when hovering other users' avatars. It
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
