use crate::bot_client::BotClient;
use crate::error::bot_client::BotClientError;
use crate::view::state::{ViewState, ViewStore};

use models::AnswerRecord;

use log::{debug, warn};

/// Inline fallback when an answer has no usable first description.
pub const NO_RESPONSE_TEXT: &str = "No response";

/// How a finished exchange is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every record in a list; failures go to the error panel.
    ResultsPanel,

    /// First record's description only; any failure shows [`NO_RESPONSE_TEXT`].
    InlineResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOptions {
    pub probe_before_send: bool,
    pub guard_while_loading: bool,
    pub reject_blank_query: bool,
    pub render: RenderMode,
}

impl FlowOptions {
    /// Probe first, refuse re-submission while loading, send empty queries as-is.
    pub const PRIMARY: FlowOptions = FlowOptions {
        probe_before_send: true,
        guard_while_loading: true,
        reject_blank_query: false,
        render: RenderMode::ResultsPanel,
    };

    /// No probe, no loading guard, blank questions are ignored.
    pub const SECONDARY: FlowOptions = FlowOptions {
        probe_before_send: false,
        guard_while_loading: false,
        reject_blank_query: true,
        render: RenderMode::InlineResponse,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The flow ran to its terminal state, which is also stored in the view.
    Completed(ViewState),

    /// A previous submission is still loading.
    Busy,

    /// Query was blank and the flow rejects blank queries. State untouched.
    BlankQuery,
}

/// Request orchestration shared by both views.
#[derive(Clone)]
pub struct AskFlow {
    client: BotClient,
    store: ViewStore,
    options: FlowOptions,
}

impl AskFlow {
    pub fn new(client: BotClient, store: ViewStore, options: FlowOptions) -> Self {
        Self {
            client,
            store,
            options,
        }
    }

    pub fn options(&self) -> FlowOptions {
        self.options
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    /// Run one question through probe (optional), `/process` and rendering.
    ///
    /// Entering the loading state replaces any previous results or error.
    /// The terminal state is always written back, whichever way the exchange
    /// ends, so loading never outlives the flow.
    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        if self.options.reject_blank_query && query.trim().is_empty() {
            debug!("Ignoring blank question");
            return SubmitOutcome::BlankQuery;
        }

        let loading = if self.options.probe_before_send {
            ViewState::Probing
        } else {
            ViewState::Requesting
        };

        if self.options.guard_while_loading {
            if !self.store.try_begin(loading).await {
                return SubmitOutcome::Busy;
            }
        } else {
            self.store.set(loading).await;
        }

        let outcome = self.exchange(query).await;
        let terminal = self.render(outcome);

        self.store.set(terminal.clone()).await;
        SubmitOutcome::Completed(terminal)
    }

    async fn exchange(&self, query: &str) -> Result<Vec<AnswerRecord>, BotClientError> {
        if self.options.probe_before_send {
            self.client.probe().await?;
            self.store.set(ViewState::Requesting).await;
        }

        self.client.process(query).await
    }

    fn render(&self, outcome: Result<Vec<AnswerRecord>, BotClientError>) -> ViewState {
        match (self.options.render, outcome) {
            (RenderMode::ResultsPanel, Ok(results)) => ViewState::Results(results),
            (RenderMode::ResultsPanel, Err(e)) => {
                warn!("Question failed: {e}");
                ViewState::Error(e.user_message())
            }
            (RenderMode::InlineResponse, Ok(results)) => {
                ViewState::Response(first_description(&results).to_string())
            }
            (RenderMode::InlineResponse, Err(e)) => {
                warn!("Question failed, showing fallback response: {e}");
                ViewState::Response(NO_RESPONSE_TEXT.to_string())
            }
        }
    }
}

fn first_description(results: &[AnswerRecord]) -> &str {
    results
        .first()
        .and_then(|record| record.description.as_deref())
        .filter(|description| !description.is_empty())
        .unwrap_or(NO_RESPONSE_TEXT)
}
