use crate::error::BuildabotError;
use crate::render;

use client_core::bot_client::BotClient;
use client_core::view::primary::SUBMIT_LOADING_LABEL;
use client_core::view::{PrimaryView, SubmitOutcome};

use models::{ModelError, UploadedFile};

use std::io::Write;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "Type a question and press Enter.
  :custom on|off   use your own uploaded .txt file
  :file PATH       select the .txt file to upload
  :upload          upload the selected file
  :quit            exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input<'a> {
    Question(&'a str),
    CustomBot(bool),
    SelectFile(&'a str),
    Upload,
    Help,
    Quit,
    Unknown(&'a str),
}

pub(crate) fn parse_line(line: &str) -> Input<'_> {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Question(line);
    };

    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command.trim(), ""),
    };

    match (name, argument) {
        ("custom", "on") => Input::CustomBot(true),
        ("custom", "off") => Input::CustomBot(false),
        ("file", path) if !path.is_empty() => Input::SelectFile(path),
        ("upload", "") => Input::Upload,
        ("help", "") => Input::Help,
        ("quit" | "q", "") => Input::Quit,
        _ => Input::Unknown(line),
    }
}

/// Line-oriented session on the primary view.
///
/// The view and its selections persist across lines; the session ends on
/// `:quit` or end of input.
pub async fn run<R, W>(client: BotClient, input: R, out: &mut W) -> Result<(), BuildabotError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut view = PrimaryView::new(client);
    write!(out, "{}", render::primary_header(view.custom_bot()))?;
    writeln!(out, "{HELP}")?;
    prompt(&view, out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::CustomBot(enabled) => {
                view.set_custom_bot(enabled);
                write!(out, "{}", render::primary_header(enabled))?;
            }
            Input::SelectFile(path) => match UploadedFile::select(path) {
                Ok(file) => {
                    writeln!(out, "Selected {}", file.file_name())?;
                    view.select_file(file);
                }
                Err(ModelError::Validation { message, .. }) => {
                    warn!("Rejected file selection: {message}");
                    writeln!(out, "{message}")?;
                }
            },
            Input::Upload if !view.custom_bot() => {
                writeln!(out, "Turn on custom bot mode first (:custom on).")?;
            }
            Input::Upload => {
                let notice = view.upload().await;
                write!(out, "{}", render::notice(&notice))?;
            }
            Input::Question(question) => {
                view.set_query(question);
                writeln!(out, "{SUBMIT_LOADING_LABEL}")?;
                match view.submit().await {
                    SubmitOutcome::Completed(state) => write!(out, "{}", render::primary(&state))?,
                    outcome => debug!("Submission not run: {outcome:?}"),
                }
            }
            Input::Unknown(line) => writeln!(out, "Unknown command: {line} (try :help)")?,
        }

        prompt(&view, out)?;
    }

    Ok(())
}

fn prompt<W: Write>(view: &PrimaryView, out: &mut W) -> Result<(), BuildabotError> {
    write!(out, "{} > ", view.placeholder())?;
    out.flush()?;
    Ok(())
}
