use crate::error::BuildabotError;
use crate::render;

use client_core::bot_client::BotClient;
use client_core::view::{SecondaryView, SubmitOutcome, ViewState};

use models::UploadedFile;

use std::io::Write;
use std::path::PathBuf;

/// Upload (when a file is given) then ask, printing a single inline response.
///
/// A blank question sends nothing and prints no response.
pub async fn run<W: Write>(
    client: BotClient,
    question: String,
    file: Option<PathBuf>,
    out: &mut W,
) -> Result<ViewState, BuildabotError> {
    let mut view = SecondaryView::new(client);
    writeln!(out, "{}", render::USER_BOT_TITLE)?;

    if let Some(path) = file {
        view.select_file(UploadedFile::select(path)?);
        let notice = view.upload().await;
        write!(out, "{}", render::notice(&notice))?;
    }

    view.set_question(question);
    match view.ask().await {
        SubmitOutcome::Completed(state) => write!(out, "{}", render::secondary(&state))?,
        SubmitOutcome::BlankQuery | SubmitOutcome::Busy => {}
    }

    Ok(view.store().get().await)
}
