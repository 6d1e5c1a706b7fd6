//! Errors raised while talking to the question-answering backend.
//!
//! Every variant keeps the text a view shows to the user separately from the
//! location suffix, see [`BotClientError::user_message`].

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Shown when the liveness probe answers with a non-success status.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Backend server is not responding";

/// Shown when `/process` succeeds but carries no usable `results`.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response format from server";

#[derive(Debug, ThisError)]
pub enum BotClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unavailable Error: probe returned HTTP {status_code} {location}")]
    Unavailable {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {location}")]
    MalformedResponse { location: ErrorLocation },

    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },
}

impl BotClientError {
    #[track_caller]
    pub fn unavailable(status_code: HttpStatusCode) -> Self {
        BotClientError::Unavailable {
            status_code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build a server error from a non-success `/process` response.
    ///
    /// `server_message` is the body's `error` field when one was readable;
    /// otherwise the message falls back to `Server error: {status}`.
    #[track_caller]
    pub fn server(status_code: HttpStatusCode, server_message: Option<&str>) -> Self {
        let message = match server_message {
            Some(message) => message.to_string(),
            None => format!("Server error: {status_code}"),
        };

        BotClientError::Server {
            status_code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_response() -> Self {
        BotClientError::MalformedResponse {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text for the error panel: the underlying message without the location.
    pub fn user_message(&self) -> String {
        match self {
            BotClientError::Http { message, .. }
            | BotClientError::Json { message, .. }
            | BotClientError::UrlParse { message, .. }
            | BotClientError::Server { message, .. }
            | BotClientError::Io { message, .. } => message.clone(),
            BotClientError::Unavailable { .. } => BACKEND_UNAVAILABLE_MESSAGE.to_string(),
            BotClientError::MalformedResponse { .. } => INVALID_RESPONSE_MESSAGE.to_string(),
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BotClientError::Unavailable { status_code, .. }
            | BotClientError::Server { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<url::ParseError> for BotClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        BotClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for BotClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        BotClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for BotClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        BotClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for BotClientError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        BotClientError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
