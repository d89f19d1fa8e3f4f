use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::constants;
use crate::messages::ChatMessage;

/// A completion call either succeeds with the reply text or fails with a
/// classified error, so the chat surface can branch on the kind instead of
/// showing a generic fault.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("transport error talking to the completion API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion API rejected the credentials (status {status}): {body}")]
    Auth { status: StatusCode, body: String },
    #[error("completion API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("completion API returned no choice with content")]
    Empty,
}

impl CompletionError {
    /// Stable identifier for the error kind, used by the web surface.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Transport(_) => "transport",
            CompletionError::Auth { .. } => "auth",
            CompletionError::Api { .. } => "api",
            CompletionError::Empty => "empty",
        }
    }
}

// Structures matching the provider's /chat/completions endpoint
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion endpoint with a fixed
/// model identifier. No retry, no caching: every call is one round-trip.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a client from `OPENAI_BASE_URL`, `OPENAI_API_KEY` and
    /// `MEU_CHAT_MODEL` (see `constants`).
    pub fn from_env() -> Self {
        Self::new(
            constants::OPENAI_BASE_URL.clone(),
            constants::OPENAI_API_KEY.clone(),
            constants::CHAT_MODEL.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the message sequence and return the first choice's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = ChatRequest {
            model: &self.model,
            messages,
        };

        debug!(model = %self.model, messages = messages.len(), "Sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(%status, %body, "Chat completion request failed");
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(CompletionError::Auth { status, body });
            }
            return Err(CompletionError::Api { status, body });
        }

        let parsed = response.json::<ChatResponse>().await?;

        // The provider is not trusted to always return a choice with content.
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::Empty)?;

        debug!(chars = reply.len(), "Received chat completion reply");
        Ok(reply)
    }
}
