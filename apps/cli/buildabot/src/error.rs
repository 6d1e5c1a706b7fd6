use client_core::error::{BotClientError, ConfigError};
use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;

use thiserror::Error;

/// Errors that end a `buildabot` command.
///
/// Failures a view already renders (error panel, fallback response, upload
/// notices) are not errors here; these are setup, input and output failures.
#[derive(Debug, Error)]
pub enum BuildabotError {
    /// Error from this app
    #[error("Buildabot Error: {message} {location}")]
    Buildabot {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (backend client construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// User input rejected (e.g. a non-.txt file selection)
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Reading the terminal or writing output failed
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for BuildabotError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        BuildabotError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<BotClientError> for BuildabotError {
    #[track_caller]
    fn from(error: BotClientError) -> Self {
        BuildabotError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for BuildabotError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let message = match error {
            ModelError::Validation { message, .. } => message,
        };

        BuildabotError::Input {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for BuildabotError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        BuildabotError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
