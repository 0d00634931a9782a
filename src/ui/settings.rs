// SPDX-License-Identifier: MPL-2.0
//! The settings screen: display language and server URL.
//!
//! Saving hands the chosen values back to the application, which applies
//! them and persists `settings.toml`.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Settings form state, seeded from the active configuration.
#[derive(Debug, Default, Clone)]
pub struct State {
    language: Option<String>,
    server_url: String,
}

/// Messages emitted by the settings form.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(String),
    ServerUrlChanged(String),
    Save,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Persist and apply the edited values.
    Saved,
    /// Leave the screen without saving.
    Back,
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Seeds the form from the current configuration values.
    #[must_use]
    pub fn new(language: Option<String>, server_url: String) -> Self {
        Self {
            language,
            server_url,
        }
    }

    /// The chosen language, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The edited server URL.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Process a settings message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(language) => {
                self.language = Some(language);
                Event::None
            }
            Message::ServerUrlChanged(url) => {
                self.server_url = url;
                Event::None
            }
            Message::Save => Event::Saved,
            Message::Back => Event::Back,
        }
    }

    /// Render the settings screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

        let mut language_column = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("settings-language-label")).size(typography::BODY_LG));

        for locale in &i18n.available_locales {
            let locale_str = locale.to_string();
            let is_selected = self.language.as_deref() == Some(locale_str.as_str());
            let label = Text::new(locale_str.clone()).size(typography::BODY);
            let styled = if is_selected {
                button(label).style(styles::button::selected)
            } else {
                button(label).style(styles::button::unselected)
            };
            language_column = language_column.push(
                styled.on_press(Message::LanguageSelected(locale_str)),
            );
        }

        let server_column = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("settings-server-url-label")).size(typography::BODY_LG))
            .push(
                text_input("http://", &self.server_url)
                    .on_input(Message::ServerUrlChanged)
                    .padding(spacing::XS)
                    .size(typography::BODY_LG),
            );

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("settings-back-button")).size(typography::BODY))
                    .on_press(Message::Back)
                    .style(styles::button::unselected),
            )
            .push(
                button(Text::new(i18n.tr("settings-save-button")).size(typography::BODY))
                    .on_press(Message::Save)
                    .style(styles::button::selected),
            );

        let form = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fixed(sizing::FEED_WIDTH))
            .push(title)
            .push(language_column)
            .push(server_column)
            .push(buttons);

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_selection_updates_state() {
        let mut state = State::new(None, "http://localhost:5000".to_string());
        let event = state.update(Message::LanguageSelected("pt-BR".to_string()));
        assert!(matches!(event, Event::None));
        assert_eq!(state.language(), Some("pt-BR"));
    }

    #[test]
    fn url_edit_updates_state() {
        let mut state = State::new(None, String::new());
        state.update(Message::ServerUrlChanged("http://feed.example".to_string()));
        assert_eq!(state.server_url(), "http://feed.example");
    }

    #[test]
    fn save_and_back_emit_events() {
        let mut state = State::default();
        assert!(matches!(state.update(Message::Save), Event::Saved));
        assert!(matches!(state.update(Message::Back), Event::Back));
    }

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let state = State::new(Some("en-US".to_string()), "http://localhost:5000".to_string());
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
