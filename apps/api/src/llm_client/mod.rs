//! LLM Client: transport layer for the remote text-generation backends.
//!
//! Every remote call made by the generators goes through a `TextCompletion`
//! implementation in this module. Each call is attempted exactly once: a failure
//! is reported to the caller, which decides whether to fall back.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use thiserror::Error;

pub mod ollama;
pub mod openai;
pub mod prompts;

pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A single-prompt, single-response text generation endpoint.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Sends `prompt` and returns the trimmed response text.
    /// `max_tokens` is a hint; backends without a token cap ignore it.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;

    /// Short backend name used in logs and errors ("openai", "ollama").
    fn backend(&self) -> &'static str;

    fn model(&self) -> &str;
}

/// Builds the shared HTTP client. The timeout bounds every remote call.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Joins `path` onto a configured base URL, tolerating a trailing slash on the base.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, String> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err("base URL is empty".to_string());
    }
    Url::parse(&format!("{base}{path}")).map_err(|e| format!("invalid base URL '{base}': {e}"))
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorBody {
    Detailed { message: String },
    Plain(String),
}

/// Converts a non-success response into `LlmError::Api`, pulling the error
/// message out of `{"error": {...}}` / `{"error": "..."}` bodies when present.
pub(crate) async fn api_error(response: Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(ApiErrorEnvelope {
            error: ApiErrorBody::Detailed { message },
        }) => message,
        Ok(ApiErrorEnvelope {
            error: ApiErrorBody::Plain(message),
        }) => message,
        Err(_) => body,
    };
    LlmError::Api { status, message }
}

/// Trims model output and rejects blank responses.
pub(crate) fn non_empty(text: Option<String>) -> Result<String, LlmError> {
    match text.map(|t| t.trim().to_string()) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(LlmError::EmptyContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let url = endpoint("http://localhost:11434/", "/api/generate").unwrap();
        assert_eq!(url.as_str(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(endpoint("not a url", "/api/generate").is_err());
        assert!(endpoint("   ", "/api/generate").is_err());
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty(Some("  hi \n".to_string())).unwrap(), "hi");
    }

    #[test]
    fn test_non_empty_rejects_blank_and_missing() {
        assert!(matches!(non_empty(Some("  ".to_string())), Err(LlmError::EmptyContent)));
        assert!(matches!(non_empty(None), Err(LlmError::EmptyContent)));
    }
}
