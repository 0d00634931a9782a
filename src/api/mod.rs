// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the SocialFeed server.
//!
//! This module provides functionality for:
//! - Looking up user info for the avatar popup
//! - Uploading a new profile picture (multipart, single field)
//! - Publishing posts and fetching the feed
//! - Fetching image bytes for avatars and attachments

mod types;

pub use types::{Post, UploadResponse, UserInfo, UserInfoPayload};

use crate::domain::{PostType, UserId};
use crate::error::ApiError;

/// Result type for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Form field name the server expects for the profile picture file.
const PROFILE_PIC_FIELD: &str = "profile_pic_file";

/// A file attached to a multipart request.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Typed client over the server's endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedFeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a server-relative path against the base URL. Absolute
    /// URLs pass through untouched.
    #[must_use]
    pub fn resolve_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
        }
    }

    /// Looks up the user shown in the avatar popup.
    ///
    /// The server reports "not found" and "not authenticated" in-band via
    /// the `error` field; both become `ApiError::Server` here. Callers log
    /// and suppress the popup, they never surface this to the user.
    pub async fn get_user_info(&self, user: UserId) -> ApiResult<UserInfo> {
        let url = format!("{}/get_user_info/{}", self.base_url, user);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let payload: UserInfoPayload = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if let Some(error) = payload.error {
            return Err(ApiError::Server(error));
        }

        match (payload.username, payload.profile_pic) {
            (Some(username), Some(profile_pic)) => Ok(UserInfo {
                username,
                profile_pic,
                bio: payload.bio,
            }),
            _ => Err(ApiError::InvalidResponse(
                "user info without username or picture".to_string(),
            )),
        }
    }

    /// Uploads a new profile picture and returns the URL of the stored
    /// copy.
    ///
    /// Failure paths mirror the server contract: a non-2xx status with a
    /// JSON `message` body, a 2xx body with `success: false`, and a 2xx
    /// `success: true` that omits `new_pic_url` are all errors. The
    /// server-supplied message is preserved when one exists.
    pub async fn upload_profile_pic(&self, file: FilePayload) -> ApiResult<String> {
        let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
        let form = reqwest::multipart::Form::new().part(PROFILE_PIC_FIELD, part);

        let url = format!("{}/upload_profile_pic", self.base_url);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            // The server may explain itself in a JSON body
            if let Ok(body) = response.json::<types::ErrorBody>().await {
                if let Some(message) = body.message {
                    return Err(ApiError::Server(message));
                }
            }
            return Err(ApiError::Status(status.as_u16()));
        }

        let payload: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !payload.success {
            return Err(match payload.message {
                Some(message) => ApiError::Server(message),
                None => ApiError::Rejected,
            });
        }

        payload.new_pic_url.ok_or_else(|| {
            ApiError::InvalidResponse("successful upload without new_pic_url".to_string())
        })
    }

    /// Publishes a post. Media is mandatory for image and video kinds;
    /// the caller validates the draft before reaching this point.
    pub async fn create_post(
        &self,
        post_type: PostType,
        content: &str,
        media: Option<FilePayload>,
    ) -> ApiResult<()> {
        let mut form = reqwest::multipart::Form::new()
            .text("content", content.to_string())
            .text("type", post_type.token());

        if let Some(file) = media {
            let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
            form = form.part("media", part);
        }

        let url = format!("{}/create_post", self.base_url);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Fetches the feed, newest first (server ordering).
    pub async fn fetch_feed(&self) -> ApiResult<Vec<Post>> {
        let url = format!("{}/feed", self.base_url);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetches raw image bytes (avatars, attachments). Accepts either a
    /// server-relative path or an absolute URL.
    pub async fn fetch_image(&self, path_or_url: &str) -> ApiResult<Vec<u8>> {
        let url = self.resolve_url(path_or_url);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = Client::new("http://feed.example:5000/").unwrap();
        assert_eq!(client.base_url(), "http://feed.example:5000");
    }

    #[test]
    fn resolve_url_joins_relative_paths() {
        let client = Client::new("http://feed.example:5000").unwrap();
        assert_eq!(
            client.resolve_url("/static/uploads/ana.png"),
            "http://feed.example:5000/static/uploads/ana.png"
        );
        assert_eq!(
            client.resolve_url("static/uploads/ana.png"),
            "http://feed.example:5000/static/uploads/ana.png"
        );
    }

    #[test]
    fn resolve_url_passes_absolute_through() {
        let client = Client::new("http://feed.example:5000").unwrap();
        assert_eq!(
            client.resolve_url("https://cdn.example/pic.png"),
            "https://cdn.example/pic.png"
        );
    }
}
