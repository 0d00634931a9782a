// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for backend requests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server could not be reached (DNS, refused connection, timeout).
    Transport(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the JSON shape we expected.
    InvalidResponse(String),

    /// The server reported a failure and supplied its own message.
    Server(String),

    /// The server reported a failure without a usable message.
    Rejected,
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Status(_) => "error-api-status",
            ApiError::InvalidResponse(_) => "error-api-invalid-response",
            ApiError::Server(_) => "error-api-server",
            ApiError::Rejected => "error-api-rejected",
        }
    }

    /// Returns the server-supplied message, when one exists.
    ///
    /// Upload failures prefer this text over the generic localized
    /// fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Server returned HTTP {}", code),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Server(msg) => write!(f, "{}", msg),
            ApiError::Rejected => write!(f, "Request rejected by server"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_wraps_into_crate_error() {
        let err: Error = ApiError::Status(503).into();
        match err {
            Error::Api(ApiError::Status(code)) => assert_eq!(code, 503),
            _ => panic!("expected Api variant"),
        }
    }

    #[test]
    fn server_message_only_for_server_variant() {
        assert_eq!(
            ApiError::Server("quota exceeded".into()).server_message(),
            Some("quota exceeded")
        );
        assert_eq!(ApiError::Status(500).server_message(), None);
        assert_eq!(ApiError::Rejected.server_message(), None);
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(
            ApiError::Transport(String::new()).i18n_key(),
            "error-api-transport"
        );
        assert_eq!(ApiError::Status(404).i18n_key(), "error-api-status");
        assert_eq!(ApiError::Rejected.i18n_key(), "error-api-rejected");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Status(418);
        assert!(format!("{}", err).contains("418"));
    }
}
