use crate::cli::{Cli, Command};

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[test]
fn given_cli_definition_when_debug_asserted_then_is_consistent() {
    Cli::command().debug_assert();
}

/// **VALUE**: Verifies `ask` defaults to an empty query, which is still submitted.
///
/// **WHY THIS MATTERS**: The main form sends empty questions verbatim; the CLI must not
/// turn a missing argument into a usage error.
#[test]
fn given_ask_without_query_when_parsing_then_query_is_empty_string() {
    let cli = Cli::try_parse_from(["buildabot", "ask"]).unwrap();

    match cli.command {
        Command::Ask {
            query,
            custom_bot,
            file,
        } => {
            assert_eq!(query, "");
            assert!(!custom_bot);
            assert_eq!(file, None);
        }
        other => panic!("expected Ask, got {other:?}"),
    }
}

#[test]
fn given_file_without_custom_bot_when_parsing_ask_then_is_rejected() {
    let result = Cli::try_parse_from(["buildabot", "ask", "hi", "--file", "kb.txt"]);

    assert!(result.is_err(), "--file only makes sense in custom bot mode");
}

#[test]
fn given_global_options_after_subcommand_when_parsing_then_are_accepted() {
    let cli = Cli::try_parse_from([
        "buildabot",
        "user-bot",
        "What is this?",
        "--file",
        "kb.txt",
        "--base-url",
        "http://127.0.0.1:9000",
    ])
    .unwrap();

    assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
    match cli.command {
        Command::UserBot { question, file } => {
            assert_eq!(question, "What is this?");
            assert_eq!(file, Some(PathBuf::from("kb.txt")));
        }
        other => panic!("expected UserBot, got {other:?}"),
    }
}
