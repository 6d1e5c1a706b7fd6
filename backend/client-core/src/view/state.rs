use models::AnswerRecord;

use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

/// The single state value of a view.
///
/// Loading, results and error are variants rather than independent flags,
/// so a view can never show results and an error at once, or results while
/// a new question is loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,

    /// Waiting on the liveness probe (primary view only).
    Probing,

    /// Waiting on `/process`.
    Requesting,

    /// Answer list for the results panel. May be empty.
    Results(Vec<AnswerRecord>),

    /// Single inline answer text.
    Response(String),

    /// Message for the error panel.
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Probing | ViewState::Requesting)
    }

    pub fn results(&self) -> Option<&[AnswerRecord]> {
        match self {
            ViewState::Results(results) => Some(results),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&str> {
        match self {
            ViewState::Response(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Probing => "probing",
            ViewState::Requesting => "requesting",
            ViewState::Results(_) => "results",
            ViewState::Response(_) => "response",
            ViewState::Error(_) => "error",
        }
    }
}

/// Shared handle to a view's state.
///
/// Clones observe the same value. Flows write it, renderers read it.
#[derive(Clone, Default)]
pub struct ViewStore {
    state: Arc<RwLock<ViewState>>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub async fn get(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn set(&self, next: ViewState) {
        let mut state = self.state.write().await;
        debug!("View state: {} -> {}", state.label(), next.label());
        *state = next;
    }

    /// Move to `next` unless a flow is already loading.
    ///
    /// Check and write happen under one lock, so two concurrent submissions
    /// cannot both start. Returns `false` when refused.
    pub async fn try_begin(&self, next: ViewState) -> bool {
        let mut state = self.state.write().await;
        if state.is_loading() {
            debug!("View busy ({}), refusing to start {}", state.label(), next.label());
            return false;
        }

        debug!("View state: {} -> {}", state.label(), next.label());
        *state = next;
        true
    }
}
