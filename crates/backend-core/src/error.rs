//! Error types for the demo backend.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the demo backend.
///
/// Request handling distinguishes exactly one client-caused failure (a body
/// that is not valid JSON) from everything else; the server maps the former
/// to 400 and the rest to 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body could not be parsed as JSON.
    #[error("Invalid JSON payload")]
    InvalidJson(#[from] serde_json::Error),

    /// Request body was not valid UTF-8.
    #[error("request body is not valid UTF-8: {0}")]
    NonUtf8Body(#[from] std::str::Utf8Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (unexpected state).
    #[error("{message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if the failure was caused by the client and should
    /// map to a 400 rather than a 500.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidJson(_))
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_is_the_only_client_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        assert!(Error::from(json_err).is_client_error());

        let utf8_err = std::str::from_utf8(&[0xff, 0xfe]).unwrap_err();
        assert!(!Error::from(utf8_err).is_client_error());
        assert!(!Error::internal("boom").is_client_error());
    }

    #[test]
    fn invalid_json_display_matches_wire_contract() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json_err).to_string(), "Invalid JSON payload");
    }

    #[test]
    fn internal_display_is_the_bare_message() {
        assert_eq!(Error::internal("boom").to_string(), "boom");
    }
}
