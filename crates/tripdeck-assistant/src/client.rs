//! Assistant request client.
//!
//! Sends a query plus purpose to the configured backend, or answers
//! locally through the response generator when mock mode is active or no
//! endpoint is configured. Issues at most one outbound request per call:
//! no retries, no caching, no deduplication. Callers are responsible for
//! not overlapping calls.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::config::ConfigStore;
use crate::error::AssistantError;
use crate::generator::ResponseGenerator;
use crate::types::{ChatEnvelope, ChatRequest, Purpose};

/// Placeholder used when an error response body cannot be read.
const UNREADABLE_BODY: &str = "<response body unavailable>";

/// Client for the assistant backend with local fallback.
pub struct AssistantClient {
    http: reqwest::Client,
    config: Arc<ConfigStore>,
    generator: ResponseGenerator,
    mock_mode: bool,
}

impl AssistantClient {
    /// Client that contacts the configured endpoint when one is set.
    pub fn new(config: Arc<ConfigStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            generator: ResponseGenerator::new(),
            mock_mode: false,
        }
    }

    /// Force local generation regardless of the configured endpoint.
    pub fn with_mock_mode(mut self, mock_mode: bool) -> Self {
        self.mock_mode = mock_mode;
        self
    }

    /// Replace the response generator (e.g. with a deterministic picker).
    pub fn with_generator(mut self, generator: ResponseGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Send a query with the given purpose and return the reply text.
    ///
    /// With mock mode active or a blank endpoint this delegates to the
    /// response generator and never fails. Otherwise one request goes to
    /// `{endpoint}/chat` and the outcome is classified per failure kind.
    pub async fn send(&self, content: &str, purpose: Purpose) -> Result<String, AssistantError> {
        let config = self.config.config();

        if self.mock_mode || config.endpoint.trim().is_empty() {
            debug!(%purpose, "Answering locally (mock mode or no endpoint configured)");
            return Ok(self.generator.generate(content, purpose));
        }

        let url = format!("{}/chat", config.endpoint.trim_end_matches('/'));
        let request = ChatRequest {
            content: content.to_string(),
            model: config.model.clone(),
            purpose,
        };

        let mut builder = self.http.post(&url).json(&request);
        if !config.credential.is_empty() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", config.credential));
        }

        debug!(%url, %purpose, "Sending assistant request");
        let response = builder.send().await.map_err(|e| {
            debug!(error = %e, "Assistant request transport failure");
            AssistantError::Unreachable {
                endpoint: config.endpoint.clone(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
            if status == reqwest::StatusCode::FORBIDDEN && mentions_origin(&body) {
                return Err(AssistantError::OriginRejected);
            }
            return Err(AssistantError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|_| AssistantError::MalformedResponse)?;
        let envelope: ChatEnvelope =
            serde_json::from_str(&body).map_err(|_| AssistantError::MalformedResponse)?;
        Ok(envelope.response)
    }
}

/// Whether a refusal body looks like a cross-origin rejection.
fn mentions_origin(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("origin") || lower.contains("cors")
}

// =============================================================================
// Tests
// =============================================================================
