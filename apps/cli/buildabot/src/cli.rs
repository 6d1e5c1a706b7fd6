use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "buildabot")]
#[command(about = "Ask anything about your organization")]
pub struct Cli {
    /// Backend address, overriding the configured one
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory for buildabot.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask one question on the main form
    Ask {
        /// Sent verbatim, empty included
        #[arg(default_value = "")]
        query: String,

        /// Answer from an uploaded .txt file instead of the default knowledge base
        #[arg(long)]
        custom_bot: bool,

        /// Knowledge-base file to upload before asking
        #[arg(long, requires = "custom_bot")]
        file: Option<PathBuf>,
    },

    /// Upload a knowledge-base file for the custom bot
    Upload { file: Option<PathBuf> },

    /// Upload-then-ask page with a single inline answer
    UserBot {
        #[arg(default_value = "")]
        question: String,

        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Keep the main form open and read questions line by line
    Interactive,
}
