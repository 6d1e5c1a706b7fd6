pub mod ask;
pub mod interactive;
pub mod upload;
pub mod user_bot;

use crate::cli::Command;
use crate::error::BuildabotError;

use client_core::bot_client::BotClient;
use client_core::config::BotConfig;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::info;
use tokio::io::BufReader;

const APP_DIR_NAME: &str = "buildabot";
const LOG_DIR_NAME: &str = "logs";

pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_DIR_NAME)
}

/// Load the config and apply a command-line backend override.
///
/// # Errors
///
/// Returns [`BuildabotError::Config`] if the file is unreadable or the final
/// config (override included) does not validate.
pub fn resolve_config(
    config_dir: &Path,
    base_url_override: Option<&str>,
) -> Result<BotConfig, BuildabotError> {
    let mut config = BotConfig::load(config_dir)?;

    if let Some(base_url) = base_url_override {
        info!("Backend address overridden to {base_url}");
        config = config.with_base_url(base_url);
    }

    config.validate()?;
    Ok(config)
}

/// Run one subcommand against stdin/stdout.
pub async fn dispatch(command: Command, client: BotClient) -> Result<ExitCode, BuildabotError> {
    let mut out = std::io::stdout();

    match command {
        Command::Ask {
            query,
            custom_bot,
            file,
        } => {
            let state = ask::run(client, query, custom_bot, file, &mut out).await?;
            Ok(if state.error().is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Upload { file } => {
            let notice = upload::run(client, file, &mut out).await?;
            Ok(if notice.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::UserBot { question, file } => {
            user_bot::run(client, question, file, &mut out).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            interactive::run(client, input, &mut out).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
