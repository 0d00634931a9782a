// SPDX-License-Identifier: MPL-2.0
//! Wire types for the SocialFeed endpoints.

use crate::domain::PostType;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw payload of `GET /get_user_info/{id}`.
///
/// The server signals lookup failure in-band through the `error` field,
/// so every other field is optional at the wire level.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A validated user lookup: the fields the popup needs, present for sure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub profile_pic: String,
    /// `None` renders as a localized placeholder, never as "null".
    pub bio: Option<String>,
}

/// Response of `POST /upload_profile_pic`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub new_pic_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body some endpoints return alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One feed entry, as served by `GET /feed`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub media_path: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// The post kind, when the wire token is one we know.
    #[must_use]
    pub fn post_type(&self) -> Option<PostType> {
        PostType::from_token(&self.kind)
    }
}
