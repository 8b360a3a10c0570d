//! HTTP client for the question-answering backend
//!
//! This module owns the only wire contact in the application: a JSON POST
//! to `{origin}/chat` per question, plus a `GET /health` reachability
//! probe. Response parsing is deliberately forgiving — an absent answer or
//! a malformed results list degrades to defaults and never to an error.

use crate::config::ApiConfig;
use crate::error::{RagchatError, Result};
use crate::transcript::Source;

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Answer shown when the backend returns none
pub const NO_ANSWER: &str = "No answer.";

/// Client for the backend chat API
///
/// # Examples
///
/// ```no_run
/// use ragchat::api::ApiClient;
/// use ragchat::config::ApiConfig;
///
/// # async fn example() -> ragchat::error::Result<()> {
/// let client = ApiClient::new(&ApiConfig::default())?;
/// let response = client.ask("capital of France", "cli-abc12345").await?;
/// println!("{}", response.answer_text());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

/// Request body for `POST /chat`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
    session_id: &'a str,
}

/// Success response body from `POST /chat`
///
/// Both fields are optional on the wire. Extra fields the backend may add
/// (model name, fallback error details) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated answer, if any
    #[serde(default)]
    pub answer: Option<String>,

    /// Supporting source citations
    #[serde(default, deserialize_with = "results_or_empty")]
    pub results: Vec<Source>,
}

impl ChatResponse {
    /// The answer to display, falling back to [`NO_ANSWER`]
    ///
    /// An empty answer string counts as absent, matching the backend's
    /// own fallback convention.
    pub fn answer_text(&self) -> &str {
        match self.answer.as_deref() {
            Some(a) if !a.is_empty() => a,
            _ => NO_ANSWER,
        }
    }
}

/// Deserialize `results`, tolerating anything that is not an array
///
/// A non-array value (or an unparseable element) yields an empty list
/// instead of a parse error.
fn results_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration with the backend origin and timeout
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("ragchat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RagchatError::Http)?;

        let endpoint = config.endpoint().to_string();
        tracing::info!("Initialized API client: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint (trailing slash already stripped)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one question to the backend
    ///
    /// Issues exactly one `POST {endpoint}/chat` with the query and the
    /// session identifier. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`RagchatError::Http`] on transport failure and
    /// [`RagchatError::Api`] (carrying the response body as plain text)
    /// on a non-success status.
    pub async fn ask(&self, query: &str, session_id: &str) -> Result<ChatResponse> {
        let url = format!("{}/chat", self.endpoint);
        tracing::debug!("Submitting question to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { query, session_id })
            .send()
            .await
            .map_err(RagchatError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Backend returned error {}: {}", status, body);
            return Err(RagchatError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(RagchatError::Http)?;
        tracing::debug!(
            "Received answer ({} source citations)",
            parsed.results.len()
        );
        Ok(parsed)
    }

    /// Probe the backend health endpoint
    ///
    /// # Returns
    ///
    /// Returns the response body on success (the backend replies "ok")
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}/health", self.endpoint);
        tracing::debug!("Probing backend health at {}", url);

        let response = self.client.get(&url).send().await.map_err(RagchatError::Http)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(RagchatError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(body)
    }
}
