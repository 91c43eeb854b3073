//! OpenAI chat-completions client for the analysis endpoint.
//!
//! One request per analysis: the built prompt goes out, free-form text comes
//! back. The reply is handed to the normalizer untouched; this client only
//! fails on transport problems, non-success statuses, and replies with no
//! completion text at all.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default chat-completions endpoint.
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default completion model.
const DEFAULT_MODEL: &str = "gpt-4";

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the completion model.
const MODEL_ENV: &str = "VERITEXT_MODEL";
/// Environment variable overriding the API endpoint.
const API_URL_ENV: &str = "VERITEXT_API_URL";

/// Sampling temperature. Low: analysis should be stable across calls.
const TEMPERATURE: f32 = 0.4;

/// Connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Total request timeout; completions are slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Errors produced by the completion client.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// API key not configured.
    #[error("missing API key: set OPENAI_API_KEY")]
    MissingApiKey,
    /// Configured endpoint is not a valid URL.
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),
    /// HTTP client could not be built or the request failed in transit.
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Remote service replied with a non-success status.
    #[error("completion API returned status {0}")]
    HttpStatusNotOk(u16),
    /// Reply carried no completion text.
    #[error("completion reply carried no choices")]
    EmptyReply,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Async client for the chat-completions API.
pub struct OpenAiChat {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChat {
    /// Build a client from the environment.
    ///
    /// # Errors
    /// Returns an error if the API key is missing, the endpoint override is
    /// not a valid URL, or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, CompletionError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::MissingApiKey)?;

        let api_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        url::Url::parse(&api_url)?;

        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(api_key, api_url, model)
    }

    /// Build a client with explicit settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, api_url: String, model: String) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Model identifier used for completions.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request one completion and return the raw reply text.
    ///
    /// # Errors
    /// Returns an error if the request fails in transit, the remote status
    /// is not a success, or the reply carries no completion text.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.model, "requesting completion");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::HttpStatusNotOk(status.as_u16()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyReply)
    }
}
