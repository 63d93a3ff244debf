//! Ollama `/api/generate` backend (non-streaming).

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{api_error, endpoint, non_empty, LlmError, TextCompletion};

pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Debug, Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

const SAMPLING: SamplingOptions = SamplingOptions {
    temperature: 0.7,
    top_p: 0.9,
    top_k: 40,
};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    eval_count: Option<u32>,
}

#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    url: Url,
    model: String,
}

impl OllamaClient {
    pub fn new(client: Client, base_url: &str, model: &str) -> Result<Self, String> {
        if model.trim().is_empty() {
            return Err("Ollama model is required".to_string());
        }
        Ok(Self {
            client,
            url: endpoint(base_url, "/api/generate")?,
            model: model.trim().to_string(),
        })
    }
}

#[async_trait]
impl TextCompletion for OllamaClient {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: SAMPLING,
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        let generated: GenerateResponse = serde_json::from_str(&body)?;
        debug!(
            "Ollama call succeeded: model={}, eval_count={:?}",
            self.model, generated.eval_count
        );

        non_empty(generated.response)
    }

    fn backend(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
