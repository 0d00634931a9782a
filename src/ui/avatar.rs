// SPDX-License-Identifier: MPL-2.0
//! Round-ish avatar rendering shared by the navbar, the feed and the
//! user-card popup.
//!
//! Avatars render from a fetched image handle when one is available and
//! fall back to an initial-letter placeholder while the image is still
//! loading (or failed to load).

use crate::ui::design_tokens::{palette, radius, typography};
use iced::widget::image::{Handle, Image};
use iced::widget::{container, Container, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Renders an avatar of `size` logical pixels.
pub fn widget<'a, M: 'a>(handle: Option<&Handle>, name: &str, size: f32) -> Element<'a, M> {
    match handle {
        Some(handle) => Container::new(
            Image::new(handle.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size)),
        )
        .into(),
        None => placeholder(name, size),
    }
}

/// Initial-letter placeholder shown until the picture arrives.
fn placeholder<'a, M: 'a>(name: &str, size: f32) -> Element<'a, M> {
    let initial: String = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    Container::new(
        Text::new(initial)
            .size(typography::TITLE_SM)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(placeholder_style)
    .into()
}

fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_400)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_renders_for_missing_handle() {
        let _element: Element<'_, ()> = widget(None, "ana", 48.0);
    }

    #[test]
    fn image_renders_for_present_handle() {
        let handle = Handle::from_bytes(vec![0u8; 4]);
        let _element: Element<'_, ()> = widget(Some(&handle), "ana", 48.0);
    }

    #[test]
    fn placeholder_tolerates_empty_name() {
        let _element: Element<'_, ()> = widget(None, "", 32.0);
    }
}
