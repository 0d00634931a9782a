// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base layer is the navbar plus the active screen; the popup and
//! the toast overlay float above it in a `Stack`. The popup is placed
//! with padding offsets computed from its anchor point, horizontally
//! centered on the anchor like the original card.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::composer;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::popup;
use crate::ui::settings;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length, Padding, Point};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub composer: &'a composer::State,
    pub popup: &'a popup::State,
    pub settings: &'a settings::State,
    pub posts: &'a [crate::api::Post],
    pub session_user: Option<crate::domain::UserId>,
    pub session_username: Option<&'a str>,
    pub own_avatar: Option<&'a Handle>,
    pub images: &'a HashMap<String, Handle>,
    pub feed_loading: bool,
    pub uploading: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        username: ctx.session_username,
        avatar: ctx.own_avatar,
        uploading: ctx.uploading,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Feed => view_feed(&ctx),
        Screen::Settings => ctx
            .settings
            .view(settings::ViewContext { i18n: ctx.i18n })
            .map(Message::Settings),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(base);

    if let Some(card) = ctx.popup.view(ctx.i18n) {
        stack = stack.push(positioned(card.map(Message::Popup), ctx.popup.anchor()));
    }

    stack = stack.push(
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
    );

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn view_feed<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let composer_view = ctx
        .composer
        .view(composer::ViewContext { i18n: ctx.i18n })
        .map(Message::Composer);

    let feed_view = feed::view(feed::ViewContext {
        i18n: ctx.i18n,
        posts: ctx.posts,
        session_user: ctx.session_user,
        images: ctx.images,
        loading: ctx.feed_loading,
    })
    .map(Message::Feed);

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(
            Container::new(composer_view)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .push(feed_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Floats `content` below the anchor, horizontally centered on it.
fn positioned(content: Element<'_, Message>, anchor: Point) -> Element<'_, Message> {
    let left = (anchor.x - sizing::POPUP_WIDTH / 2.0).max(0.0);
    let top = anchor.y + sizing::POPUP_ANCHOR_GAP;

    Container::new(content)
        .padding(Padding {
            top,
            left,
            right: 0.0,
            bottom: 0.0,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
