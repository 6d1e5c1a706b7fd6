use serde::{Deserialize, Serialize};

/// Body of a `POST /process` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub description: String,
}

impl ProcessRequest {
    /// The query is carried verbatim, including empty strings.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// One answer record from the `results` array.
///
/// Only `description` is rendered. The backend also labels each record
/// with a `name` and a `web_address`, which are kept when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_address: Option<String>,
}

impl AnswerRecord {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_web_address(mut self, web_address: impl Into<String>) -> Self {
        self.web_address = Some(web_address.into());
        self
    }

    /// Text shown for this record; a missing description renders as empty.
    pub fn text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Error body the backend may send with a non-success `/process` status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The server-supplied message, if it is present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}
