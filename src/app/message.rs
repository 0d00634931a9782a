// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{Post, UserInfo};
use crate::error::{ApiError, Error};
use crate::ui::composer;
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::popup;
use crate::ui::settings;
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Feed(feed::Message),
    Popup(popup::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Raw cursor tracking; the popup anchors to the position the
    /// pointer had when it entered an avatar.
    CursorMoved(Point),
    Tick(Instant), // Periodic tick for popup hide deadlines and toast auto-dismiss
    /// Result of looking up the session user at startup.
    SessionInfoLoaded(Result<UserInfo, ApiError>),
    /// Result of fetching the feed.
    FeedLoaded(Result<Vec<Post>, ApiError>),
    /// Result of a popup lookup: user info plus the avatar bytes.
    /// `seq` identifies the hover that issued it; stale results are
    /// discarded by the popup controller.
    UserInfoLoaded {
        seq: u64,
        result: Result<(UserInfo, Option<Vec<u8>>), ApiError>,
    },
    /// An image arrived for the shared cache.
    ImageFetched {
        path: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Result from the profile-picture file dialog.
    ProfilePicDialogResult(Option<PathBuf>),
    /// The upload finished; `Ok` carries the new picture URL.
    UploadFinished(Result<String, Error>),
    /// Result from the post media file dialog.
    MediaDialogResult(Option<PathBuf>),
    /// The post submission finished.
    PostSubmitted(Result<(), Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional server base URL override.
    pub server: Option<String>,
    /// Optional session user id override.
    pub user_id: Option<u64>,
    /// Optional session user name override.
    pub username: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FEED_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
