// SPDX-License-Identifier: MPL-2.0
//! Feed rendering: a scrollable column of post cards.
//!
//! Every other user's avatar is wrapped in a mouse area that reports
//! hover and press events upward; the application forwards them to the
//! popup controller. The session user's own avatars stay inert here,
//! because their avatar in the navbar is the uploader trigger instead.

use crate::api::Post;
use crate::domain::UserId;
use crate::i18n::I18n;
use crate::ui::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Messages emitted by avatar interactions inside the feed.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pointer entered another user's avatar.
    AvatarEntered(UserId),
    /// The pointer left the avatar.
    AvatarExited,
    /// A press (tap) started on the avatar.
    AvatarPressed(UserId),
    /// The press (tap) was released.
    AvatarReleased,
}

/// Contextual data needed to render the feed.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub posts: &'a [Post],
    /// The session user; their avatars do not open the popup.
    pub session_user: Option<UserId>,
    /// Fetched images, keyed by the server path they were fetched from.
    pub images: &'a HashMap<String, Handle>,
    pub loading: bool,
}

/// Render the feed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.posts.is_empty() {
        let key = if ctx.loading { "feed-loading" } else { "feed-empty" };
        return Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    }

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FEED_WIDTH));

    for post in ctx.posts {
        column = column.push(post_card(post, &ctx));
    }

    Container::new(
        Scrollable::new(
            Container::new(column)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::MD),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .into()
}

/// Build one post card: author header, content, optional attachment.
fn post_card<'a>(post: &'a Post, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let author = UserId::new(post.user_id);
    let picture = post
        .profile_pic
        .as_ref()
        .and_then(|path| ctx.images.get(path));

    let avatar_widget = avatar::widget(picture, &post.username, sizing::AVATAR_SM);

    // The session user's avatar hover affordance is purely decorative;
    // everyone else's drives the popup.
    let avatar_area: Element<'a, Message> = if ctx.session_user == Some(author) {
        avatar_widget
    } else {
        mouse_area(avatar_widget)
            .interaction(iced::mouse::Interaction::Pointer)
            .on_enter(Message::AvatarEntered(author))
            .on_exit(Message::AvatarExited)
            .on_press(Message::AvatarPressed(author))
            .on_release(Message::AvatarReleased)
            .into()
    };

    let timestamp = post.created_at.format("%Y-%m-%d %H:%M").to_string();
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar_area)
        .push(
            Column::new()
                .push(Text::new(post.username.as_str()).size(typography::BODY_LG))
                .push(Text::new(timestamp).size(typography::CAPTION)),
        );

    let mut card = Column::new().spacing(spacing::XS).push(header);

    if !post.content.is_empty() {
        card = card.push(Text::new(post.content.as_str()).size(typography::BODY));
    }

    if let Some(attachment) = attachment_view(post, ctx) {
        card = card.push(attachment);
    }

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

/// Inline image for image posts whose bytes already arrived; a caption
/// line for everything else that carries media.
fn attachment_view<'a>(post: &'a Post, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let media_path = post.media_path.as_ref()?;

    if post.post_type() == Some(crate::domain::PostType::Image) {
        if let Some(handle) = ctx.images.get(media_path) {
            return Some(Image::new(handle.clone()).width(Length::Fill).into());
        }
    }

    let name = media_path
        .rsplit('/')
        .next()
        .unwrap_or(media_path.as_str());
    Some(
        Text::new(
            ctx.i18n
                .tr_with_args("feed-media-attachment", &[("name", name)]),
        )
        .size(typography::CAPTION)
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: u64, user_id: u64, kind: &str) -> Post {
        Post {
            id,
            user_id,
            username: format!("user-{user_id}"),
            content: "hello".to_string(),
            kind: kind.to_string(),
            media_path: None,
            profile_pic: Some(format!("/static/uploads/{user_id}.png")),
            created_at: chrono::Utc.with_ymd_and_hms(2025, 11, 2, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn feed_view_renders_empty_state() {
        let i18n = I18n::default();
        let images = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &[],
            session_user: None,
            images: &images,
            loading: false,
        });
    }

    #[test]
    fn feed_view_renders_loading_state() {
        let i18n = I18n::default();
        let images = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &[],
            session_user: None,
            images: &images,
            loading: true,
        });
    }

    #[test]
    fn feed_view_renders_posts() {
        let i18n = I18n::default();
        let images = HashMap::new();
        let posts = vec![post(1, 2, "text"), post(2, 3, "image")];
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &posts,
            session_user: Some(UserId::new(2)),
            images: &images,
            loading: false,
        });
    }

    #[test]
    fn feed_view_renders_media_attachment() {
        let i18n = I18n::default();
        let images = HashMap::new();
        let mut p = post(1, 2, "video");
        p.media_path = Some("uploads/2_clip.mp4".to_string());
        let posts = [p];
        let _element = view(ViewContext {
            i18n: &i18n,
            posts: &posts,
            session_user: None,
            images: &images,
            loading: false,
        });
    }
}
