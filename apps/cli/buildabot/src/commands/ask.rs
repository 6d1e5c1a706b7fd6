use crate::error::BuildabotError;
use crate::render;

use client_core::bot_client::BotClient;
use client_core::view::primary::SUBMIT_LOADING_LABEL;
use client_core::view::{PrimaryView, ViewState};

use models::UploadedFile;

use std::io::Write;
use std::path::PathBuf;

/// Submit one question through the primary view and print the outcome.
///
/// In custom-bot mode a given file is uploaded first. Its notice is printed
/// but does not stop the question, as with the form's separate buttons.
pub async fn run<W: Write>(
    client: BotClient,
    query: String,
    custom_bot: bool,
    file: Option<PathBuf>,
    out: &mut W,
) -> Result<ViewState, BuildabotError> {
    let mut view = PrimaryView::new(client);
    view.set_custom_bot(custom_bot);

    if let Some(path) = file {
        view.select_file(UploadedFile::select(path)?);
    }

    write!(out, "{}", render::primary_header(view.custom_bot()))?;

    if view.custom_bot() && view.selected_file().is_some() {
        let notice = view.upload().await;
        write!(out, "{}", render::notice(&notice))?;
    }

    view.set_query(query);
    writeln!(out, "{SUBMIT_LOADING_LABEL}")?;
    view.submit().await;

    let state = view.store().get().await;
    write!(out, "{}", render::primary(&state))?;
    Ok(state)
}
