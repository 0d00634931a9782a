// SPDX-License-Identifier: MPL-2.0
//! Post kinds and the draft being composed.
//!
//! `PostType` is the single source of truth for everything that changes
//! when the user picks Text, Image or Video: whether the media row is
//! shown and required, which file kinds the picker accepts, and which
//! placeholder the content input shows. `PostDraft` holds the state of
//! the composer form and enforces the submit rules.

use std::path::PathBuf;

/// Kind of post being composed. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostType {
    #[default]
    Text,
    Image,
    Video,
}

/// File extensions accepted for image posts.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// File extensions accepted for video posts.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

impl PostType {
    /// All kinds, in the order the selector buttons render.
    pub const ALL: [PostType; 3] = [PostType::Text, PostType::Image, PostType::Video];

    /// The wire token sent in the `type` form field.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Image => "image",
            PostType::Video => "video",
        }
    }

    /// Parses a wire token. Unknown tokens map to `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "text" => Some(PostType::Text),
            "image" => Some(PostType::Image),
            "video" => Some(PostType::Video),
            _ => None,
        }
    }

    /// Whether this kind requires a media file before submitting.
    #[must_use]
    pub fn requires_media(self) -> bool {
        !matches!(self, PostType::Text)
    }

    /// File-dialog extension filter for this kind, `None` for text posts.
    #[must_use]
    pub fn media_extensions(self) -> Option<&'static [&'static str]> {
        match self {
            PostType::Text => None,
            PostType::Image => Some(IMAGE_EXTENSIONS),
            PostType::Video => Some(VIDEO_EXTENSIONS),
        }
    }

    /// i18n key for the selector button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PostType::Text => "composer-type-text",
            PostType::Image => "composer-type-image",
            PostType::Video => "composer-type-video",
        }
    }

    /// i18n key for the content input placeholder.
    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            PostType::Text => "composer-placeholder-text",
            PostType::Image => "composer-placeholder-image",
            PostType::Video => "composer-placeholder-video",
        }
    }

    /// i18n key naming the kind itself ("image", "video") for messages
    /// that mention it.
    #[must_use]
    pub fn kind_key(self) -> &'static str {
        match self {
            PostType::Text => "post-kind-text",
            PostType::Image => "post-kind-image",
            PostType::Video => "post-kind-video",
        }
    }
}

/// Why a draft was refused at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text post with empty (or whitespace-only) content.
    EmptyTextContent,
    /// Image or video post with no media file selected.
    MissingMedia(PostType),
}

impl ValidationError {
    /// Returns the i18n message key for this validation failure.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::EmptyTextContent => "composer-error-empty-content",
            ValidationError::MissingMedia(_) => "composer-error-missing-media",
        }
    }
}

/// The post currently being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    post_type: PostType,
    content: String,
    media: Option<PathBuf>,
}

impl PostDraft {
    /// Creates an empty text draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active post kind.
    #[must_use]
    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    /// Switches the active kind. The chosen media file, if any, is kept:
    /// switching Image -> Video and back must not lose the selection.
    pub fn set_post_type(&mut self, post_type: PostType) {
        self.post_type = post_type;
    }

    /// The raw content text as typed.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// The selected media file, if any.
    #[must_use]
    pub fn media(&self) -> Option<&PathBuf> {
        self.media.as_ref()
    }

    pub fn set_media(&mut self, path: Option<PathBuf>) {
        self.media = path;
    }

    /// Checks the submit rules without consuming the draft.
    ///
    /// Text posts need non-whitespace content; image and video posts need
    /// a media file. Anything else passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.post_type {
            PostType::Text => {
                if self.content.trim().is_empty() {
                    Err(ValidationError::EmptyTextContent)
                } else {
                    Ok(())
                }
            }
            kind => {
                if self.media.is_none() {
                    Err(ValidationError::MissingMedia(kind))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Clears the draft back to an empty text post after a successful
    /// submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_empty_text() {
        let draft = PostDraft::new();
        assert_eq!(draft.post_type(), PostType::Text);
        assert_eq!(draft.content(), "");
        assert!(draft.media().is_none());
    }

    #[test]
    fn token_round_trip() {
        for kind in PostType::ALL {
            assert_eq!(PostType::from_token(kind.token()), Some(kind));
        }
        assert_eq!(PostType::from_token("gif"), None);
    }

    #[test]
    fn only_text_needs_no_media() {
        assert!(!PostType::Text.requires_media());
        assert!(PostType::Image.requires_media());
        assert!(PostType::Video.requires_media());
    }

    #[test]
    fn media_extensions_match_kind() {
        assert!(PostType::Text.media_extensions().is_none());
        assert_eq!(PostType::Image.media_extensions(), Some(IMAGE_EXTENSIONS));
        assert_eq!(PostType::Video.media_extensions(), Some(VIDEO_EXTENSIONS));
    }

    #[test]
    fn empty_text_draft_is_blocked() {
        let draft = PostDraft::new();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTextContent));
    }

    #[test]
    fn whitespace_only_content_is_blocked() {
        let mut draft = PostDraft::new();
        draft.set_content("   \n\t ".to_string());
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTextContent));
    }

    #[test]
    fn non_empty_text_draft_passes() {
        let mut draft = PostDraft::new();
        draft.set_content("hello feed".to_string());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn media_post_without_file_is_blocked() {
        let mut draft = PostDraft::new();
        draft.set_post_type(PostType::Video);
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingMedia(PostType::Video))
        );
    }

    #[test]
    fn media_post_with_file_passes_even_without_content() {
        let mut draft = PostDraft::new();
        draft.set_post_type(PostType::Image);
        draft.set_media(Some(PathBuf::from("photo.png")));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn switching_kind_keeps_selected_media() {
        let mut draft = PostDraft::new();
        draft.set_post_type(PostType::Image);
        draft.set_media(Some(PathBuf::from("clip.mp4")));
        draft.set_post_type(PostType::Video);
        assert_eq!(draft.media(), Some(&PathBuf::from("clip.mp4")));
    }

    #[test]
    fn reset_returns_to_default() {
        let mut draft = PostDraft::new();
        draft.set_post_type(PostType::Video);
        draft.set_content("desc".to_string());
        draft.set_media(Some(PathBuf::from("clip.mp4")));
        draft.reset();
        assert_eq!(draft, PostDraft::new());
    }

    #[test]
    fn validation_error_keys() {
        assert_eq!(
            ValidationError::EmptyTextContent.i18n_key(),
            "composer-error-empty-content"
        );
        assert_eq!(
            ValidationError::MissingMedia(PostType::Video).i18n_key(),
            "composer-error-missing-media"
        );
    }
}
