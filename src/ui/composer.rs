// SPDX-License-Identifier: MPL-2.0
//! The post composer: kind selector, content input, media picker and
//! submit button.
//!
//! Picking a kind drives the rest of the form: text posts hide the media
//! row and change the placeholder, image and video posts show it, require
//! a file and narrow the picker to matching extensions. Validation runs
//! at submit time and refuses empty text posts and media posts without a
//! file; everything else is handed to the application to publish.

use crate::domain::{PostDraft, PostType, ValidationError};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Id, Row, Text};
use iced::{Element, Length};
use std::path::PathBuf;

/// Widget id of the content input, used to return focus on validation
/// failure.
pub const CONTENT_INPUT_ID: &str = "composer-content";

/// Messages emitted by the composer form.
#[derive(Debug, Clone)]
pub enum Message {
    TypeSelected(PostType),
    ContentChanged(String),
    ChooseMedia,
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the media file dialog filtered for the given kind.
    MediaDialogRequested(PostType),
    /// The draft passed validation and should be published.
    SubmitRequested(PostDraft),
    /// The draft was refused; surface the reason and restore focus.
    ValidationFailed(ValidationError),
}

/// Composer form state.
#[derive(Debug, Default)]
pub struct State {
    draft: PostDraft,
    submitting: bool,
}

/// Contextual data needed to render the composer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft under construction.
    #[must_use]
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Process a composer message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TypeSelected(post_type) => {
                self.draft.set_post_type(post_type);
                Event::None
            }
            Message::ContentChanged(content) => {
                self.draft.set_content(content);
                Event::None
            }
            Message::ChooseMedia => Event::MediaDialogRequested(self.draft.post_type()),
            Message::Submit => {
                if self.submitting {
                    return Event::None;
                }
                match self.draft.validate() {
                    Ok(()) => Event::SubmitRequested(self.draft.clone()),
                    Err(error) => Event::ValidationFailed(error),
                }
            }
        }
    }

    /// Stores the result of the media file dialog. `None` (dialog
    /// cancelled) leaves the previous selection untouched.
    pub fn media_picked(&mut self, path: Option<PathBuf>) {
        if path.is_some() {
            self.draft.set_media(path);
        }
    }

    /// Marks the draft as being published.
    pub fn submit_started(&mut self) {
        self.submitting = true;
    }

    /// A submission finished; on success the form clears for the next
    /// post.
    pub fn submit_finished(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.draft.reset();
        }
    }

    /// Render the composer form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let active = self.draft.post_type();

        // Kind selector: exactly one button renders selected
        let mut type_row = Row::new().spacing(spacing::XS);
        for kind in PostType::ALL {
            let label = Text::new(i18n.tr(kind.label_key())).size(typography::BODY);
            let styled = if kind == active {
                button(label).style(styles::button::selected)
            } else {
                button(label).style(styles::button::unselected)
            };
            type_row = type_row.push(styled.on_press(Message::TypeSelected(kind)));
        }

        let placeholder = i18n.tr(active.placeholder_key());
        let content_input = text_input(&placeholder, self.draft.content())
            .id(Id::new(CONTENT_INPUT_ID))
            .on_input(Message::ContentChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY_LG);

        let mut form = Column::new()
            .spacing(spacing::SM)
            .push(type_row)
            .push(content_input);

        // Media row only exists for image and video posts
        if active.requires_media() {
            form = form.push(self.media_row(i18n));
        }

        let submit_label = Text::new(i18n.tr("composer-submit-button")).size(typography::BODY);
        let submit = if self.submitting {
            button(submit_label).style(styles::button::disabled())
        } else {
            button(submit_label)
                .on_press(Message::Submit)
                .style(styles::button::selected)
        };
        form = form.push(submit);

        Container::new(form)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }

    fn media_row<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let choose = button(Text::new(i18n.tr("composer-media-button")).size(typography::BODY))
            .on_press(Message::ChooseMedia)
            .style(styles::button::unselected);

        let file_label = match self.draft.media() {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => i18n.tr("composer-media-none"),
        };

        Row::new()
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center)
            .push(choose)
            .push(Text::new(file_label).size(typography::CAPTION))
            .into()
    }
}
