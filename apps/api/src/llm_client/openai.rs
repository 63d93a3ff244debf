//! OpenAI chat-completions backend.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts::COPYWRITER_SYSTEM;
use super::{api_error, endpoint, non_empty, LlmError, TextCompletion};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 1.0;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    url: Url,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Fails when the key is blank or the base URL does not parse.
    /// Reachability is not checked here.
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<Self, String> {
        if api_key.trim().is_empty() {
            return Err("OpenAI API key is required".to_string());
        }
        Ok(Self {
            client,
            url: endpoint(base_url, "/chat/completions")?,
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl TextCompletion for OpenAiClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: COPYWRITER_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        let response = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat.usage {
            debug!(
                "OpenAI call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        non_empty(chat.choices.into_iter().next().and_then(|c| c.message.content))
    }

    fn backend(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
