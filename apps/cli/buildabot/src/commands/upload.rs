use crate::error::BuildabotError;
use crate::render;

use client_core::bot_client::BotClient;
use client_core::view::{Notice, PrimaryView};

use models::UploadedFile;

use std::io::Write;
use std::path::PathBuf;

/// The custom-bot upload button on its own.
pub async fn run<W: Write>(
    client: BotClient,
    file: Option<PathBuf>,
    out: &mut W,
) -> Result<Notice, BuildabotError> {
    let mut view = PrimaryView::new(client);
    view.set_custom_bot(true);

    if let Some(path) = file {
        view.select_file(UploadedFile::select(path)?);
    }

    let notice = view.upload().await;
    write!(out, "{}", render::notice(&notice))?;
    Ok(notice)
}
