// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the application title, feed refresh and settings
//! buttons, and the session user's avatar. Clicking that avatar opens
//! the file chooser for a new profile picture; while an upload is in
//! flight the avatar shows a busy cursor and ignores clicks.

use crate::i18n::I18n;
use crate::ui::avatar;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, mouse_area, Container, Row, Text};
use iced::{
    alignment::Vertical,
    mouse::Interaction,
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Session user's display name, when one is configured.
    pub username: Option<&'a str>,
    /// Session user's avatar image, once fetched.
    pub avatar: Option<&'a Handle>,
    /// Whether a profile picture upload is in flight.
    pub uploading: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    RefreshFeed,
    OpenSettings,
    AvatarClicked,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    RefreshFeed,
    OpenSettings,
    /// Open the profile-picture file chooser.
    UploadRequested,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::RefreshFeed => Event::RefreshFeed,
        Message::OpenSettings => Event::OpenSettings,
        Message::AvatarClicked => Event::UploadRequested,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let refresh = button(Text::new(ctx.i18n.tr("navbar-refresh-button")).size(typography::BODY))
        .on_press(Message::RefreshFeed)
        .style(styles::button::unselected);

    let settings = button(Text::new(ctx.i18n.tr("navbar-settings-button")).size(typography::BODY))
        .on_press(Message::OpenSettings)
        .style(styles::button::unselected);

    let name = ctx.username.unwrap_or("");
    let own_avatar = avatar::widget(ctx.avatar, name, sizing::AVATAR_MD);

    // The wait cursor is the busy affordance; it is restored on every
    // completion path because `uploading` is cleared there.
    let avatar_area = if ctx.uploading {
        mouse_area(dimmed(own_avatar)).interaction(Interaction::Wait)
    } else {
        mouse_area(own_avatar)
            .interaction(Interaction::Pointer)
            .on_press(Message::AvatarClicked)
    };

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(horizontal_space());

    if let Some(username) = ctx.username {
        row = row.push(Text::new(username.to_string()).size(typography::BODY));
    }

    row = row.push(refresh).push(settings).push(avatar_area);

    Container::new(row)
        .width(Length::Fill)
        .style(toolbar_style)
        .into()
}

/// Washes out the avatar while the upload is in flight.
fn dimmed<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(iced::Color {
                a: opacity::OVERLAY_MEDIUM,
                ..theme.extended_palette().background.strong.color
            })),
            ..Default::default()
        })
        .into()
}

/// Style function for the bar surface.
fn toolbar_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();
    iced::widget::container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}
