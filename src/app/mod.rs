// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (feed, composer, popup,
//! localization, settings) and translates messages into side effects like
//! network requests, file dialogs, and config persistence. Policy
//! decisions (window sizing, startup fetches, session identity) stay
//! close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api;
use crate::config::{self, Config};
use crate::domain::UserId;
use crate::i18n::I18n;
use crate::ui::composer;
use crate::ui::notifications::{self, Notification};
use crate::ui::popup;
use crate::ui::settings;
use crate::ui::state::HideDelay;
use iced::widget::image::Handle;
use iced::{window, Element, Point, Subscription, Task};
use std::collections::HashMap;
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Backend client; `None` when the configured URL is unusable.
    client: Option<api::Client>,
    /// The logged-in user; their avatar triggers the uploader.
    session_user: Option<UserId>,
    session_username: Option<String>,
    /// Server path of the session user's current picture.
    own_pic_path: Option<String>,
    /// Whether a profile picture upload is in flight.
    uploading: bool,
    composer: composer::State,
    popup: popup::State,
    settings: settings::State,
    posts: Vec<api::Post>,
    feed_loading: bool,
    /// Fetched images keyed by the server path they came from.
    images: HashMap<String, Handle>,
    /// Last known pointer position; popup lookups anchor to it.
    cursor: Point,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("posts", &self.posts.len())
            .field("uploading", &self.uploading)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Feed,
            config: Config::default(),
            client: None,
            session_user: None,
            session_username: None,
            own_pic_path: None,
            uploading: false,
            composer: composer::State::new(),
            popup: popup::State::default(),
            settings: settings::State::default(),
            posts: Vec::new(),
            feed_loading: false,
            images: HashMap::new(),
            cursor: Point::ORIGIN,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup fetches
    /// (session user info, feed) based on `Flags` received from the
    /// launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();

        // CLI flags override the persisted configuration for this run
        if let Some(server) = flags.server.clone() {
            config.server.url = Some(server);
        }
        if let Some(user_id) = flags.user_id {
            config.server.user_id = Some(user_id);
        }
        if let Some(username) = flags.username.clone() {
            config.server.username = Some(username);
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let client = config.server.url.as_deref().and_then(|url| {
            match api::Client::new(url) {
                Ok(client) => Some(client),
                Err(error) => {
                    log::error!("could not build HTTP client for {url}: {error}");
                    None
                }
            }
        });

        let hover_delay = HideDelay::new(
            config
                .popup
                .hover_hide_delay_ms
                .unwrap_or(config::DEFAULT_HOVER_HIDE_DELAY_MS),
        );
        let touch_delay = HideDelay::new(
            config
                .popup
                .touch_hide_delay_ms
                .unwrap_or(config::DEFAULT_TOUCH_HIDE_DELAY_MS),
        );

        let session_user = config.server.user_id.map(UserId::new);
        let session_username = config.server.username.clone();

        let mut app = App {
            i18n,
            config,
            client,
            session_user,
            session_username,
            popup: popup::State::new(hover_delay, touch_delay),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::error(warning));
        }

        let mut tasks = Vec::new();
        if let Some(client) = app.client.clone() {
            tasks.push(update::refresh_feed(&mut app));
            if let Some(user) = app.session_user {
                tasks.push(update::session_info_task(client, user));
            }
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            composer: &self.composer,
            popup: &self.popup,
            settings: &self.settings,
            posts: &self.posts,
            session_user: self.session_user,
            session_username: self.session_username.as_deref(),
            own_avatar: self
                .own_pic_path
                .as_ref()
                .and_then(|path| self.images.get(path)),
            images: &self.images,
            feed_loading: self.feed_loading,
            uploading: self.uploading,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.popup.needs_tick(),
                self.notifications.has_notifications(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Error};

    #[test]
    fn default_app_starts_on_feed() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Feed);
        assert!(app.posts.is_empty());
        assert!(!app.uploading);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "SocialFeed");
    }

    #[test]
    fn default_view_renders() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn successful_upload_updates_avatar_source_and_clears_busy() {
        let mut app = App::default();
        app.uploading = true;

        let _task = app.update(Message::UploadFinished(Ok(
            "/static/uploads/ana_new.png".to_string(),
        )));

        assert!(!app.uploading);
        assert_eq!(
            app.own_pic_path.as_deref(),
            Some("/static/uploads/ana_new.png")
        );
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn failed_upload_keeps_avatar_source_and_clears_busy() {
        let mut app = App::default();
        app.uploading = true;
        app.own_pic_path = Some("/static/uploads/ana.png".to_string());

        let _task = app.update(Message::UploadFinished(Err(Error::Api(
            ApiError::Server("Extensão não permitida".to_string()),
        ))));

        assert!(!app.uploading);
        assert_eq!(app.own_pic_path.as_deref(), Some("/static/uploads/ana.png"));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn feed_error_surfaces_notification() {
        let mut app = App::default();
        app.feed_loading = true;

        let _task = app.update(Message::FeedLoaded(Err(ApiError::Status(502))));

        assert!(!app.feed_loading);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn stale_popup_response_is_not_rendered() {
        let mut app = App::default();
        let first = app.popup.avatar_entered(UserId::new(2), Point::ORIGIN);
        let second = app.popup.avatar_entered(UserId::new(3), Point::ORIGIN);

        let info = api::UserInfo {
            username: "stale".to_string(),
            profile_pic: "/static/uploads/stale.png".to_string(),
            bio: None,
        };
        let _task = app.update(Message::UserInfoLoaded {
            seq: first.seq,
            result: Ok((info, None)),
        });
        assert!(!app.popup.is_visible());

        let info = api::UserInfo {
            username: "fresh".to_string(),
            profile_pic: "/static/uploads/fresh.png".to_string(),
            bio: None,
        };
        let _task = app.update(Message::UserInfoLoaded {
            seq: second.seq,
            result: Ok((info, None)),
        });
        assert!(app.popup.is_visible());
        assert_eq!(app.popup.card().unwrap().username, "fresh");
    }

    #[test]
    fn failed_popup_lookup_is_silent() {
        let mut app = App::default();
        let lookup = app.popup.avatar_entered(UserId::new(2), Point::ORIGIN);

        let _task = app.update(Message::UserInfoLoaded {
            seq: lookup.seq,
            result: Err(ApiError::Server("Não autenticado".to_string())),
        });

        assert!(!app.popup.is_visible());
        // No toast for popup lookups; the popup simply does not appear
        assert!(!app.notifications.has_notifications());
    }
}
