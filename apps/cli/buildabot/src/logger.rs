//! Logging for the Build-a-BOT terminal client.
//!
//! Everything goes to a plain log file; only warnings and errors reach stderr,
//! so stdout stays reserved for the rendered views.

use crate::error::BuildabotError;

use common::ErrorLocation;

use std::io::stderr;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Set once a dispatcher has been installed. Held while installing, so
/// concurrent callers wait instead of racing fern's global logger.
static LOGGER_INITIALIZED: Mutex<bool> = Mutex::new(false);

pub const LOG_FILE_NAME: &str = "buildabot.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Console output is limited to problems the user should see.
const CONSOLE_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize the logger with dual output (log file + stderr).
///
/// Safe to call multiple times: once a call has succeeded, later calls log a
/// warning and return Ok. A failed call installs nothing and may be retried.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatch cannot
/// be installed.
pub fn initialize(log_dir: &Path) -> Result<(), BuildabotError> {
    let mut initialized = LOGGER_INITIALIZED
        .lock()
        .map_err(|e| BuildabotError::Buildabot {
            message: format!("Logger init lock poisoned: {e}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

    if *initialized {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    initialize_internal(log_dir)?;
    *initialized = true;

    info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
    Ok(())
}

#[track_caller]
fn initialize_internal(log_dir: &Path) -> Result<(), BuildabotError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new().level(LOG_LEVEL);

    let console_dispatch = Dispatch::new()
        .level(CONSOLE_LOG_LEVEL)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{level}] {message}",
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(
            fern::log_file(&log_file_path).map_err(|e| BuildabotError::Buildabot {
                message: format!("Failed to create log file: {e}"),
                location: ErrorLocation::from(std::panic::Location::caller()),
            })?,
        );

    base_dispatch
        .chain(console_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| BuildabotError::Buildabot {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

    Ok(())
}
