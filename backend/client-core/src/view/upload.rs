use crate::bot_client::BotClient;

use models::UploadedFile;

use log::{info, warn};

/// Acknowledgment texts for one view's upload button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadNotices {
    pub no_file: &'static str,
    pub uploaded: &'static str,
    pub failed: &'static str,
}

impl UploadNotices {
    pub const PRIMARY: UploadNotices = UploadNotices {
        no_file: "Please upload a .txt file first.",
        uploaded: "✅ File uploaded successfully! You can now ask your bot.",
        failed: "❌ Upload failed.",
    };

    pub const SECONDARY: UploadNotices = UploadNotices {
        no_file: "Please select a .txt file first.",
        uploaded: "File uploaded successfully. You can now ask questions!",
        failed: "Failed to upload file.",
    };
}

/// Blocking acknowledgment of an upload attempt.
///
/// Never routed into a view's error panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoFileSelected(&'static str),
    Uploaded(&'static str),
    Failed(&'static str),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoFileSelected(message) | Notice::Uploaded(message) | Notice::Failed(message) => {
                *message
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Uploaded(_))
    }
}

#[derive(Clone)]
pub struct UploadFlow {
    client: BotClient,
    notices: UploadNotices,
}

impl UploadFlow {
    pub fn new(client: BotClient, notices: UploadNotices) -> Self {
        Self { client, notices }
    }

    /// Send the selected file to `/upload`.
    ///
    /// Without a selection nothing is sent. Success is decided by status class
    /// alone; unreadable files and transport failures count as failed uploads.
    pub async fn upload(&self, selection: Option<&UploadedFile>) -> Notice {
        let Some(file) = selection else {
            return Notice::NoFileSelected(self.notices.no_file);
        };

        match self.client.upload(file).await {
            Ok(status) if status.is_success() => {
                info!("Uploaded knowledge base {}", file.file_name());
                Notice::Uploaded(self.notices.uploaded)
            }
            Ok(status) => {
                warn!("Upload of {} rejected: status={status}", file.file_name());
                Notice::Failed(self.notices.failed)
            }
            Err(e) => {
                warn!("Upload of {} failed: {e}", file.file_name());
                Notice::Failed(self.notices.failed)
            }
        }
    }
}
