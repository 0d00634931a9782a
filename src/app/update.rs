// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function, the component event
//! routing, and the async task constructors (lookups, uploads, dialogs,
//! feed fetches).

use super::{App, Message, Screen};
use crate::api::{self, FilePayload};
use crate::config;
use crate::domain::{post, PostDraft, UserId, ValidationError};
use crate::error::{ApiError, Error};
use crate::i18n::I18n;
use crate::ui::composer::{self, Event as ComposerEvent};
use crate::ui::feed;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::popup;
use crate::ui::settings::Event as SettingsEvent;
use iced::widget::image::Handle;
use iced::widget::{operation, Id};
use iced::Task;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

/// Main update entrypoint, called by `App::update`.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Composer(message) => {
            let event = app.composer.update(message);
            handle_composer_event(app, event)
        }
        Message::Feed(message) => handle_feed_message(app, message),
        Message::Popup(message) => {
            app.popup.update(message);
            Task::none()
        }
        Message::Navbar(message) => handle_navbar_event(app, navbar::update(message)),
        Message::Settings(message) => {
            let event = app.settings.update(message);
            handle_settings_event(app, event)
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::CursorMoved(position) => {
            app.cursor = position;
            Task::none()
        }
        Message::Tick(now) => {
            app.popup.tick(now);
            app.notifications.tick();
            Task::none()
        }
        Message::SessionInfoLoaded(result) => handle_session_info(app, result),
        Message::FeedLoaded(result) => handle_feed_loaded(app, result),
        Message::UserInfoLoaded { seq, result } => handle_user_info(app, seq, result),
        Message::ImageFetched { path, result } => {
            match result {
                Ok(bytes) => {
                    app.images.insert(path, Handle::from_bytes(bytes));
                }
                Err(error) => log::warn!("image fetch failed for {path}: {error}"),
            }
            Task::none()
        }
        Message::ProfilePicDialogResult(path) => match path {
            Some(path) if !app.uploading => {
                let Some(client) = app.client.clone() else {
                    return Task::none();
                };
                app.uploading = true;
                upload_task(client, path)
            }
            _ => Task::none(),
        },
        Message::UploadFinished(result) => handle_upload_finished(app, result),
        Message::MediaDialogResult(path) => {
            app.composer.media_picked(path);
            Task::none()
        }
        Message::PostSubmitted(result) => handle_post_submitted(app, result),
    }
}

/// Routes composer events: file dialogs, validated submissions, and
/// validation failures.
fn handle_composer_event(app: &mut App, event: ComposerEvent) -> Task<Message> {
    match event {
        ComposerEvent::None => Task::none(),
        ComposerEvent::MediaDialogRequested(kind) => {
            let Some(extensions) = kind.media_extensions() else {
                return Task::none();
            };
            let title = app.i18n.tr("media-dialog-title");
            let filter_name = app.i18n.tr(match kind {
                crate::domain::PostType::Video => "media-filter-video",
                _ => "media-filter-image",
            });
            Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_title(&title)
                        .add_filter(&filter_name, extensions)
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::MediaDialogResult,
            )
        }
        ComposerEvent::SubmitRequested(draft) => {
            let Some(client) = app.client.clone() else {
                return Task::none();
            };
            app.composer.submit_started();
            submit_task(client, draft)
        }
        ComposerEvent::ValidationFailed(error) => {
            app.notifications
                .push(validation_notification(error, &app.i18n));
            match error {
                ValidationError::EmptyTextContent => {
                    // Return focus to the content input, like the page did
                    operation::focus(Id::new(composer::CONTENT_INPUT_ID))
                }
                ValidationError::MissingMedia(_) => Task::none(),
            }
        }
    }
}

/// Builds the blocking-alert replacement for a refused draft.
fn validation_notification(error: ValidationError, i18n: &I18n) -> Notification {
    match error {
        ValidationError::EmptyTextContent => Notification::error(error.i18n_key()),
        ValidationError::MissingMedia(kind) => {
            Notification::error(error.i18n_key()).with_arg("kind", i18n.tr(kind.kind_key()))
        }
    }
}

/// Routes avatar hover/touch events from the feed into the popup
/// controller and issues lookups.
fn handle_feed_message(app: &mut App, message: feed::Message) -> Task<Message> {
    match message {
        feed::Message::AvatarEntered(user) | feed::Message::AvatarPressed(user) => {
            if app.session_user == Some(user) {
                return Task::none();
            }
            let Some(client) = app.client.clone() else {
                return Task::none();
            };
            let lookup = app.popup.avatar_entered(user, app.cursor);
            lookup_task(client, lookup)
        }
        feed::Message::AvatarExited => {
            app.popup.avatar_left(Instant::now());
            Task::none()
        }
        feed::Message::AvatarReleased => {
            app.popup.touch_released(Instant::now());
            Task::none()
        }
    }
}

fn handle_navbar_event(app: &mut App, event: NavbarEvent) -> Task<Message> {
    match event {
        NavbarEvent::RefreshFeed => refresh_feed(app),
        NavbarEvent::OpenSettings => {
            app.settings = crate::ui::settings::State::new(
                app.config.general.language.clone(),
                app.config.server.url.clone().unwrap_or_default(),
            );
            app.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::UploadRequested => {
            if app.uploading || app.client.is_none() {
                return Task::none();
            }
            let title = app.i18n.tr("avatar-dialog-title");
            let filter_name = app.i18n.tr("avatar-filter-name");
            Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_title(&title)
                        .add_filter(&filter_name, post::IMAGE_EXTENSIONS)
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::ProfilePicDialogResult,
            )
        }
    }
}

fn handle_settings_event(app: &mut App, event: SettingsEvent) -> Task<Message> {
    match event {
        SettingsEvent::None => Task::none(),
        SettingsEvent::Back => {
            app.screen = Screen::Feed;
            Task::none()
        }
        SettingsEvent::Saved => {
            app.config.general.language = app.settings.language().map(str::to_string);

            let url = app.settings.server_url().trim().to_string();
            if !url.is_empty() {
                app.config.server.url = Some(url);
            }

            if let Some(lang) = &app.config.general.language {
                if let Ok(locale) = lang.parse() {
                    app.i18n.set_locale(locale);
                }
            }

            app.client = app
                .config
                .server
                .url
                .as_deref()
                .and_then(|url| api::Client::new(url).ok());

            match config::save(&app.config) {
                Ok(()) => app
                    .notifications
                    .push(Notification::success("notification-settings-saved")),
                Err(error) => {
                    log::error!("failed to save settings: {error}");
                    app.notifications
                        .push(Notification::error("notification-config-save-error"));
                }
            }

            app.screen = Screen::Feed;
            refresh_feed(app)
        }
    }
}

fn handle_session_info(app: &mut App, result: Result<api::UserInfo, ApiError>) -> Task<Message> {
    match result {
        Ok(info) => {
            app.session_username = Some(info.username);
            app.own_pic_path = Some(info.profile_pic.clone());
            match app.client.clone() {
                Some(client) => image_task(client, info.profile_pic),
                None => Task::none(),
            }
        }
        Err(error) => {
            log::warn!("session user lookup failed: {error}");
            Task::none()
        }
    }
}

fn handle_feed_loaded(app: &mut App, result: Result<Vec<api::Post>, ApiError>) -> Task<Message> {
    app.feed_loading = false;
    match result {
        Ok(posts) => {
            app.posts = posts;
            fetch_feed_images(app)
        }
        Err(error) => {
            app.notifications.push(
                Notification::error("notification-feed-error")
                    .with_arg("reason", api_reason(&error, &app.i18n)),
            );
            Task::none()
        }
    }
}

fn handle_user_info(
    app: &mut App,
    seq: u64,
    result: Result<(api::UserInfo, Option<Vec<u8>>), ApiError>,
) -> Task<Message> {
    match result {
        Ok((info, picture)) => {
            let card = popup::UserCard {
                username: info.username,
                bio: info.bio,
                picture: picture.map(Handle::from_bytes),
            };
            if !app.popup.lookup_succeeded(seq, card) {
                log::debug!("discarding stale user info response (seq {seq})");
            }
        }
        Err(error) => {
            // Lookup failures never surface to the user; the popup just
            // does not appear.
            log::warn!("user info lookup failed: {error}");
            app.popup.lookup_failed(seq);
        }
    }
    Task::none()
}

fn handle_upload_finished(app: &mut App, result: Result<String, Error>) -> Task<Message> {
    app.uploading = false;
    match result {
        Ok(new_pic_url) => {
            app.notifications
                .push(Notification::success("notification-upload-success"));
            app.own_pic_path = Some(new_pic_url.clone());
            match app.client.clone() {
                Some(client) => image_task(client, new_pic_url),
                None => Task::none(),
            }
        }
        Err(error) => {
            log::error!("profile picture upload failed: {error}");
            app.notifications.push(
                Notification::error("notification-upload-error")
                    .with_arg("reason", error_reason(&error, &app.i18n)),
            );
            Task::none()
        }
    }
}

fn handle_post_submitted(app: &mut App, result: Result<(), Error>) -> Task<Message> {
    match result {
        Ok(()) => {
            app.composer.submit_finished(true);
            app.notifications
                .push(Notification::success("notification-post-success"));
            refresh_feed(app)
        }
        Err(error) => {
            app.composer.submit_finished(false);
            log::error!("post submission failed: {error}");
            app.notifications.push(
                Notification::error("notification-post-error")
                    .with_arg("reason", error_reason(&error, &app.i18n)),
            );
            Task::none()
        }
    }
}

/// The user-facing reason for a failed request, preferring the
/// server-supplied message when one exists.
fn api_reason(error: &ApiError, i18n: &I18n) -> String {
    match error.server_message() {
        Some(message) => message.to_string(),
        None => i18n.tr(error.i18n_key()),
    }
}

fn error_reason(error: &Error, i18n: &I18n) -> String {
    match error {
        Error::Api(api_error) => api_reason(api_error, i18n),
        Error::Io(message) | Error::Config(message) => message.clone(),
    }
}

// =============================================================================
// Task constructors
// =============================================================================

/// Starts (or restarts) a feed fetch.
pub fn refresh_feed(app: &mut App) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return Task::none();
    };
    app.feed_loading = true;
    feed_task(client)
}

pub fn feed_task(client: api::Client) -> Task<Message> {
    Task::perform(
        async move { client.fetch_feed().await },
        Message::FeedLoaded,
    )
}

pub fn session_info_task(client: api::Client, user: UserId) -> Task<Message> {
    Task::perform(
        async move { client.get_user_info(user).await },
        Message::SessionInfoLoaded,
    )
}

/// Fetches user info and the avatar bytes for one popup lookup.
fn lookup_task(client: api::Client, lookup: popup::Lookup) -> Task<Message> {
    Task::perform(
        async move {
            let info = client.get_user_info(lookup.user).await?;
            // A missing picture only degrades the card, it does not
            // suppress it
            let picture = client.fetch_image(&info.profile_pic).await.ok();
            Ok((info, picture))
        },
        move |result| Message::UserInfoLoaded {
            seq: lookup.seq,
            result,
        },
    )
}

fn image_task(client: api::Client, path: String) -> Task<Message> {
    Task::perform(
        {
            let path = path.clone();
            async move { client.fetch_image(&path).await }
        },
        move |result| Message::ImageFetched {
            path: path.clone(),
            result,
        },
    )
}

/// Fetches every image the feed references that is not cached yet:
/// author avatars and inline image attachments.
fn fetch_feed_images(app: &App) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return Task::none();
    };

    let mut wanted: HashSet<String> = HashSet::new();
    for post in &app.posts {
        if let Some(pic) = &post.profile_pic {
            wanted.insert(pic.clone());
        }
        if post.post_type() == Some(crate::domain::PostType::Image) {
            if let Some(media) = &post.media_path {
                wanted.insert(media.clone());
            }
        }
    }

    let tasks: Vec<Task<Message>> = wanted
        .into_iter()
        .filter(|path| !app.images.contains_key(path))
        .map(|path| image_task(client.clone(), path))
        .collect();

    Task::batch(tasks)
}

fn upload_task(client: api::Client, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| Error::Io(e.to_string()))?;
            let file_name = file_name_of(&path);
            client
                .upload_profile_pic(FilePayload { file_name, bytes })
                .await
                .map_err(Error::from)
        },
        Message::UploadFinished,
    )
}

fn submit_task(client: api::Client, draft: PostDraft) -> Task<Message> {
    Task::perform(
        async move {
            let media = match draft.media() {
                Some(path) => {
                    let bytes = tokio::fs::read(path)
                        .await
                        .map_err(|e| Error::Io(e.to_string()))?;
                    Some(FilePayload {
                        file_name: file_name_of(path),
                        bytes,
                    })
                }
                None => None,
            };
            client
                .create_post(draft.post_type(), draft.content(), media)
                .await
                .map_err(Error::from)
        },
        Message::PostSubmitted,
    )
}

fn file_name_of(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}
