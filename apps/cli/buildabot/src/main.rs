use buildabot::cli::Cli;
use buildabot::commands;
use buildabot::error::BuildabotError;
use buildabot::logger::initialize as LoggerInitialize;

use client_core::bot_client::BotClient;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, BuildabotError> {
    let log_dir = cli.log_dir.clone().unwrap_or_else(commands::default_log_dir);

    create_dir_all(&log_dir).map_err(|e| BuildabotError::Buildabot {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Build-a-BOT starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(commands::default_config_dir);
    let config = commands::resolve_config(&config_dir, cli.base_url.as_deref())?;
    info!("Backend address: {}", config.backend.base_url);

    let client = BotClient::from_config(&config)?;

    commands::dispatch(cli.command, client).await
}
