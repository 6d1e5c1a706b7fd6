use crate::bot_client::BotClient;
use crate::view::flow::{AskFlow, FlowOptions, SubmitOutcome};
use crate::view::state::ViewStore;
use crate::view::upload::{Notice, UploadFlow, UploadNotices};

use models::UploadedFile;

use log::info;

pub const DEFAULT_PLACEHOLDER: &str = "e.g. How do I become a member?";
pub const CUSTOM_BOT_PLACEHOLDER: &str = "Ask your uploaded bot...";
pub const SUBMIT_LABEL: &str = "Ask";
pub const SUBMIT_LOADING_LABEL: &str = "Thinking...";

/// The main Build-a-BOT form.
///
/// Holds the query text, the custom-bot toggle and the selected file. Neither
/// the query nor the selection is cleared by a submission or an upload.
#[derive(Clone)]
pub struct PrimaryView {
    ask: AskFlow,
    upload: UploadFlow,
    query: String,
    custom_bot: bool,
    selected_file: Option<UploadedFile>,
}

impl PrimaryView {
    pub fn new(client: BotClient) -> Self {
        Self::with_store(client, ViewStore::new())
    }

    pub fn with_store(client: BotClient, store: ViewStore) -> Self {
        Self {
            ask: AskFlow::new(client.clone(), store, FlowOptions::PRIMARY),
            upload: UploadFlow::new(client, UploadNotices::PRIMARY),
            query: String::new(),
            custom_bot: false,
            selected_file: None,
        }
    }

    pub fn store(&self) -> &ViewStore {
        self.ask.store()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn custom_bot(&self) -> bool {
        self.custom_bot
    }

    pub fn set_custom_bot(&mut self, enabled: bool) {
        if self.custom_bot != enabled {
            info!("Custom bot mode {}", if enabled { "enabled" } else { "disabled" });
        }
        self.custom_bot = enabled;
    }

    pub fn placeholder(&self) -> &'static str {
        if self.custom_bot {
            CUSTOM_BOT_PLACEHOLDER
        } else {
            DEFAULT_PLACEHOLDER
        }
    }

    pub async fn submit_label(&self) -> &'static str {
        if self.store().is_loading().await {
            SUBMIT_LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn selected_file(&self) -> Option<&UploadedFile> {
        self.selected_file.as_ref()
    }

    pub fn select_file(&mut self, file: UploadedFile) {
        self.selected_file = Some(file);
    }

    /// Upload the current selection (custom-bot mode's upload button).
    pub async fn upload(&self) -> Notice {
        self.upload.upload(self.selected_file.as_ref()).await
    }

    /// Submit the current query text verbatim.
    pub async fn submit(&self) -> SubmitOutcome {
        self.ask.submit(&self.query).await
    }
}
