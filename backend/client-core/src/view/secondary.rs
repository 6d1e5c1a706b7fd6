use crate::bot_client::BotClient;
use crate::view::flow::{AskFlow, FlowOptions, SubmitOutcome};
use crate::view::state::ViewStore;
use crate::view::upload::{Notice, UploadFlow, UploadNotices};

use models::UploadedFile;

pub const QUESTION_PLACEHOLDER: &str = "Ask your chatbot something...";
pub const ASK_LABEL: &str = "Ask";
pub const ASK_LOADING_LABEL: &str = "Asking...";

/// The "upload your own bot" page: upload, then ask, one inline answer.
///
/// Asking is not guarded while a previous question is in flight; only the
/// button label changes.
#[derive(Clone)]
pub struct SecondaryView {
    ask: AskFlow,
    upload: UploadFlow,
    question: String,
    selected_file: Option<UploadedFile>,
}

impl SecondaryView {
    pub fn new(client: BotClient) -> Self {
        Self::with_store(client, ViewStore::new())
    }

    pub fn with_store(client: BotClient, store: ViewStore) -> Self {
        Self {
            ask: AskFlow::new(client.clone(), store, FlowOptions::SECONDARY),
            upload: UploadFlow::new(client, UploadNotices::SECONDARY),
            question: String::new(),
            selected_file: None,
        }
    }

    pub fn store(&self) -> &ViewStore {
        self.ask.store()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub async fn ask_label(&self) -> &'static str {
        if self.store().is_loading().await {
            ASK_LOADING_LABEL
        } else {
            ASK_LABEL
        }
    }

    pub fn selected_file(&self) -> Option<&UploadedFile> {
        self.selected_file.as_ref()
    }

    pub fn select_file(&mut self, file: UploadedFile) {
        self.selected_file = Some(file);
    }

    pub async fn upload(&self) -> Notice {
        self.upload.upload(self.selected_file.as_ref()).await
    }

    /// Ask the current question. Blank questions leave the response area as it was.
    pub async fn ask(&self) -> SubmitOutcome {
        self.ask.submit(&self.question).await
    }
}
