// SPDX-License-Identifier: MPL-2.0
//! The user-card popup shown when hovering another user's avatar.
//!
//! The controller is an explicit state machine: hidden, looking up, or
//! showing a card, with a single owned [`HideTimer`] for the pending-hide
//! phase. Every lookup carries a monotonically increasing sequence
//! number; a response whose sequence is not the latest one is discarded,
//! so a slow lookup can never overwrite a newer card. Hiding the popup
//! also invalidates any in-flight lookup: once the interaction ended,
//! its result must not resurface the card.

use crate::domain::UserId;
use crate::i18n::I18n;
use crate::ui::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{HideDelay, HideTimer};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Point};
use std::time::Instant;

/// Messages emitted by the popup surface itself.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pointer entered the popup; any pending hide is cancelled.
    CursorEntered,
    /// The pointer left the popup; it hides immediately.
    CursorExited,
}

/// A lookup the application should issue on behalf of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub seq: u64,
    pub user: UserId,
}

/// The rendered content of the popup once a lookup resolved.
#[derive(Debug, Clone)]
pub struct UserCard {
    pub username: String,
    /// `None` renders the localized "no description" placeholder.
    pub bio: Option<String>,
    pub picture: Option<Handle>,
}

/// Popup controller state.
#[derive(Debug)]
pub struct State {
    next_seq: u64,
    /// The lookup whose response we are still willing to render.
    pending: Option<Lookup>,
    card: Option<UserCard>,
    anchor: Point,
    hide_timer: HideTimer,
    hover_delay: HideDelay,
    touch_delay: HideDelay,
}

impl Default for State {
    fn default() -> Self {
        Self::new(HideDelay::default(), HideDelay::new(
            crate::config::DEFAULT_TOUCH_HIDE_DELAY_MS,
        ))
    }
}

impl State {
    /// Creates a hidden popup with the given hide delays.
    #[must_use]
    pub fn new(hover_delay: HideDelay, touch_delay: HideDelay) -> Self {
        Self {
            next_seq: 0,
            pending: None,
            card: None,
            anchor: Point::ORIGIN,
            hide_timer: HideTimer::new(),
            hover_delay,
            touch_delay,
        }
    }

    /// The pointer entered an avatar: cancel any pending hide, remember
    /// the anchor, and hand back the lookup to issue. User info is never
    /// cached; every hover fetches again.
    pub fn avatar_entered(&mut self, user: UserId, anchor: Point) -> Lookup {
        self.hide_timer.cancel();
        self.anchor = anchor;
        self.next_seq += 1;
        let lookup = Lookup {
            seq: self.next_seq,
            user,
        };
        self.pending = Some(lookup);
        lookup
    }

    /// The pointer left the avatar: schedule a hide unless something
    /// cancels it first.
    pub fn avatar_left(&mut self, now: Instant) {
        self.hide_timer.arm(now, self.hover_delay);
    }

    /// A touch was released on an avatar: schedule the longer,
    /// readable-on-touch hide.
    pub fn touch_released(&mut self, now: Instant) {
        self.hide_timer.arm(now, self.touch_delay);
    }

    /// Handles messages from the popup surface.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::CursorEntered => self.hide_timer.cancel(),
            Message::CursorExited => self.hide_now(),
        }
    }

    /// A lookup resolved with a card. Returns `false` (and renders
    /// nothing) when the sequence is stale.
    pub fn lookup_succeeded(&mut self, seq: u64, card: UserCard) -> bool {
        match self.pending {
            Some(lookup) if lookup.seq == seq => {
                self.pending = None;
                self.card = Some(card);
                true
            }
            _ => false,
        }
    }

    /// A lookup failed. The popup stays as it was; the caller logs the
    /// reason. Returns `false` when the sequence is stale.
    pub fn lookup_failed(&mut self, seq: u64) -> bool {
        match self.pending {
            Some(lookup) if lookup.seq == seq => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Periodic tick; hides the popup when the deadline passed.
    /// Returns `true` if the popup hid on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hide_timer.fire_if_due(now) {
            self.hide_now();
            true
        } else {
            false
        }
    }

    /// Hides immediately and forgets any in-flight lookup.
    pub fn hide_now(&mut self) {
        self.card = None;
        self.pending = None;
        self.hide_timer.cancel();
    }

    /// Whether a card is currently rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.card.is_some()
    }

    /// Whether the tick subscription needs to run.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.hide_timer.is_armed()
    }

    /// Anchor point the card is positioned under.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn card(&self) -> Option<&UserCard> {
        self.card.as_ref()
    }

    /// Renders the card, or `None` while hidden.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let card = self.card.as_ref()?;

        let picture = avatar::widget(card.picture.as_ref(), &card.username, sizing::AVATAR_MD);
        let username = Text::new(card.username.as_str()).size(typography::TITLE_SM);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(picture)
            .push(username);

        let bio = Text::new(bio_text(card, i18n)).size(typography::BODY);

        let content = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(bio)
            .width(Length::Fixed(sizing::POPUP_WIDTH));

        Some(
            mouse_area(
                Container::new(content)
                    .padding(spacing::SM)
                    .style(styles::container::popup),
            )
            .on_enter(Message::CursorEntered)
            .on_exit(Message::CursorExited)
            .into(),
        )
    }
}

/// The bio line, falling back to the localized placeholder when the user
/// has none. A missing bio must never render as "null".
fn bio_text(card: &UserCard, i18n: &I18n) -> String {
    match &card.bio {
        Some(bio) if !bio.is_empty() => bio.clone(),
        _ => i18n.tr("popup-no-bio"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn card(name: &str) -> UserCard {
        UserCard {
            username: name.to_string(),
            bio: None,
            picture: None,
        }
    }

    fn state() -> State {
        State::new(HideDelay::new(300), HideDelay::new(2000))
    }

    #[test]
    fn starts_hidden() {
        let state = state();
        assert!(!state.is_visible());
        assert!(!state.needs_tick());
    }

    #[test]
    fn lookup_resolution_shows_card() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::new(10.0, 20.0));

        assert!(state.lookup_succeeded(lookup.seq, card("ana")));
        assert!(state.is_visible());
        assert_eq!(state.card().unwrap().username, "ana");
        assert_eq!(state.anchor(), Point::new(10.0, 20.0));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = state();
        let first = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        let second = state.avatar_entered(UserId::new(3), Point::ORIGIN);

        // The slow first response arrives after the second was issued
        assert!(!state.lookup_succeeded(first.seq, card("stale")));
        assert!(!state.is_visible());

        assert!(state.lookup_succeeded(second.seq, card("fresh")));
        assert_eq!(state.card().unwrap().username, "fresh");
    }

    #[test]
    fn failed_lookup_keeps_popup_hidden() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);

        assert!(state.lookup_failed(lookup.seq));
        assert!(!state.is_visible());
    }

    #[test]
    fn leaving_avatar_hides_after_delay() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));

        let now = Instant::now();
        state.avatar_left(now);
        assert!(state.needs_tick());

        assert!(!state.tick(now + Duration::from_millis(299)));
        assert!(state.is_visible());

        assert!(state.tick(now + Duration::from_millis(301)));
        assert!(!state.is_visible());
    }

    #[test]
    fn entering_popup_cancels_pending_hide() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));

        let now = Instant::now();
        state.avatar_left(now);
        state.update(Message::CursorEntered);

        assert!(!state.tick(now + Duration::from_secs(10)));
        assert!(state.is_visible());
    }

    #[test]
    fn leaving_popup_hides_immediately() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));

        state.update(Message::CursorExited);
        assert!(!state.is_visible());
    }

    #[test]
    fn re_entering_avatar_cancels_pending_hide() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));

        let now = Instant::now();
        state.avatar_left(now);
        let _ = state.avatar_entered(UserId::new(2), Point::ORIGIN);

        assert!(!state.tick(now + Duration::from_secs(10)));
        assert!(state.is_visible());
    }

    #[test]
    fn touch_release_uses_longer_delay() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));

        let now = Instant::now();
        state.touch_released(now);

        assert!(!state.tick(now + Duration::from_millis(500)));
        assert!(state.is_visible());
        assert!(state.tick(now + Duration::from_millis(2001)));
        assert!(!state.is_visible());
    }

    #[test]
    fn hiding_invalidates_inflight_lookup() {
        let mut state = state();
        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);

        let now = Instant::now();
        state.avatar_left(now);
        state.tick(now + Duration::from_millis(301));

        // The response lands after the interaction already ended
        assert!(!state.lookup_succeeded(lookup.seq, card("late")));
        assert!(!state.is_visible());
    }

    #[test]
    fn null_bio_renders_placeholder_not_null() {
        let i18n = I18n::default();
        let rendered = bio_text(&card("ana"), &i18n);
        assert_ne!(rendered, "null");
        assert!(!rendered.is_empty());
    }

    #[test]
    fn present_bio_renders_verbatim() {
        let i18n = I18n::default();
        let mut c = card("ana");
        c.bio = Some("Fotógrafa".to_string());
        assert_eq!(bio_text(&c, &i18n), "Fotógrafa");
    }

    #[test]
    fn view_renders_only_when_visible() {
        let i18n = I18n::default();
        let mut state = state();
        assert!(state.view(&i18n).is_none());

        let lookup = state.avatar_entered(UserId::new(2), Point::ORIGIN);
        state.lookup_succeeded(lookup.seq, card("ana"));
        assert!(state.view(&i18n).is_some());
    }
}
