use crate::config::BotConfig;
use crate::error::bot_client::BotClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::{AnswerRecord, ErrorBody, ProcessRequest, UploadedFile};

use std::panic::Location;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use url::Url;

const PROBE_ENDPOINT: &str = "test";
const PROCESS_ENDPOINT: &str = "process";
const UPLOAD_ENDPOINT: &str = "upload";

const RESULTS_FIELD: &str = "results";
const UPLOAD_FIELD_NAME: &str = "file";
const UPLOAD_CONTENT_TYPE: &str = "text/plain";
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the three backend endpoints.
///
/// Requests carry no timeout unless one is configured; a hung backend keeps
/// the caller waiting.
#[derive(Clone)]
pub struct BotClient {
    base_url: Url,
    client: Client,
}

impl BotClient {
    pub fn new(base_url_str: &str) -> Result<Self, BotClientError> {
        Self::with_timeout(base_url_str, None)
    }

    pub fn from_config(config: &BotConfig) -> Result<Self, BotClientError> {
        Self::with_timeout(&config.backend.base_url, config.request_timeout())
    }

    fn with_timeout(base_url_str: &str, timeout: Option<Duration>) -> Result<Self, BotClientError> {
        let mut base_url = Url::parse(base_url_str)?;

        if base_url.cannot_be_a_base() {
            return Err(BotClientError::UrlParse {
                message: format!("Backend URL cannot be used as a base: {base_url_str}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Liveness probe: `GET /test`.
    ///
    /// # Errors
    /// [`BotClientError::Unavailable`] for a non-success status,
    /// [`BotClientError::Http`] if the request never got a response.
    pub async fn probe(&self) -> Result<(), BotClientError> {
        let url = self.base_url.join(PROBE_ENDPOINT)?;
        debug!("Probing backend at {url}");

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode(response.status().as_u16());

        if !status.is_success() {
            warn!("Backend probe failed: status={status}");
            return Err(BotClientError::unavailable(status));
        }

        debug!("Backend probe succeeded: status={status}");
        Ok(())
    }

    /// Ask a question: `POST /process` with `{"description": query}`.
    ///
    /// The query is sent verbatim. An empty `results` array is a valid answer.
    ///
    /// # Errors
    /// - [`BotClientError::Server`] for a non-success status, carrying the body's
    ///   `error` field or a `Server error: {status}` fallback
    /// - [`BotClientError::MalformedResponse`] if `results` is missing or not an array
    /// - [`BotClientError::Json`] if a success body is not JSON
    /// - [`BotClientError::Http`] for transport failures
    pub async fn process(&self, query: &str) -> Result<Vec<AnswerRecord>, BotClientError> {
        let url = self.base_url.join(PROCESS_ENDPOINT)?;
        debug!("Submitting question to {url} ({} chars)", query.len());

        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .json(&ProcessRequest::new(query))
            .send()
            .await?;

        let status = HttpStatusCode(response.status().as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error_body = serde_json::from_str::<ErrorBody>(&body).ok();
            let server_message = error_body.as_ref().and_then(ErrorBody::message);

            warn!("Backend rejected question: status={status}");
            return Err(BotClientError::server(status, server_message));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;
        let results = decode_results(json)?;

        info!("Backend answered with {} result(s)", results.len());
        Ok(results)
    }

    /// Upload a knowledge-base file: `POST /upload` as multipart field `file`.
    ///
    /// Returns the response status; the body is ignored and the caller decides
    /// what a non-success status means.
    ///
    /// # Errors
    /// [`BotClientError::Io`] if the file cannot be read, [`BotClientError::Http`]
    /// if the request fails before a response arrives.
    pub async fn upload(&self, file: &UploadedFile) -> Result<HttpStatusCode, BotClientError> {
        let url = self.base_url.join(UPLOAD_ENDPOINT)?;

        let contents = tokio::fs::read(file.path()).await?;
        debug!(
            "Uploading {} ({} bytes) to {url}",
            file.file_name(),
            contents.len()
        );

        let part = Part::bytes(contents)
            .file_name(file.file_name().to_string())
            .mime_str(UPLOAD_CONTENT_TYPE)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.client.post(url).multipart(form).send().await?;
        let status = HttpStatusCode(response.status().as_u16());

        debug!("Upload of {} finished: status={status}", file.file_name());
        Ok(status)
    }
}

/// Pull the `results` array out of a success body.
///
/// `null`, `false`, `0`, `""` and a missing field are all malformed, and so
/// is any other non-array value.
#[track_caller]
pub(crate) fn decode_results(body: Value) -> Result<Vec<AnswerRecord>, BotClientError> {
    let results = match body {
        Value::Object(mut fields) => fields.remove(RESULTS_FIELD),
        _ => None,
    };

    match results {
        Some(results @ Value::Array(_)) => Ok(serde_json::from_value(results)?),
        _ => Err(BotClientError::malformed_response()),
    }
}
