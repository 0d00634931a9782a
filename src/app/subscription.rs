// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions exist: raw cursor tracking (the popup anchors to the
//! pointer position at hover time), and a periodic tick that only runs
//! while a hide deadline or a toast is pending.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, mouse, time, touch, Subscription};
use std::time::Duration;

/// Tracks the pointer so avatar hovers know where to anchor the popup.
///
/// Touch positions feed the same channel: a tap anchors the card exactly
/// like a hover does.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Touch(
            touch::Event::FingerPressed { position, .. }
            | touch::Event::FingerMoved { position, .. },
        ) => Some(Message::CursorMoved(position)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for popup auto-hide and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    popup_waiting: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if popup_waiting || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
