//! Plain-text rendering of the two views.

use client_core::view::primary::SUBMIT_LOADING_LABEL;
use client_core::view::secondary::ASK_LOADING_LABEL;
use client_core::view::{Notice, ViewState};

pub const TITLE: &str = "Build-a-BOT";
pub const SUBTITLE: &str = "Ask anything about your organization 🔍";
pub const USER_BOT_TITLE: &str = "🧠 Upload Your Own Bot";
pub const RESULTS_HEADING: &str = "Answer";
pub const RESPONSE_HEADING: &str = "Response:";
pub const ERROR_HELP: &str = "Please check the log for more details.";

const INDENT: &str = "  ";
const RESULT_SEPARATOR: &str = "  ----";

pub fn primary_header(custom_bot: bool) -> String {
    let mode = if custom_bot {
        "Using your uploaded .txt file"
    } else {
        "Using the default knowledge base"
    };

    format!("{TITLE}\n{SUBTITLE}\n{mode}\n")
}

/// Results panel or error panel, whichever the state holds.
///
/// An empty result list renders nothing, like an idle view.
pub fn primary(state: &ViewState) -> String {
    match state {
        ViewState::Probing | ViewState::Requesting => format!("{SUBMIT_LOADING_LABEL}\n"),
        ViewState::Results(results) if !results.is_empty() => {
            let items: Vec<String> = results.iter().map(|record| indent(record.text())).collect();
            format!(
                "{RESULTS_HEADING}\n{}\n",
                items.join(&format!("\n{RESULT_SEPARATOR}\n"))
            )
        }
        ViewState::Error(message) => format!("{message}\n{ERROR_HELP}\n"),
        _ => String::new(),
    }
}

pub fn secondary(state: &ViewState) -> String {
    match state {
        ViewState::Probing | ViewState::Requesting => format!("{ASK_LOADING_LABEL}\n"),
        ViewState::Response(text) if !text.is_empty() => {
            format!("{RESPONSE_HEADING}\n{}\n", indent(text))
        }
        _ => String::new(),
    }
}

pub fn notice(notice: &Notice) -> String {
    format!("{}\n", notice.message())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
