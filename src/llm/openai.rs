//! OpenAI API Provider.
//!
//! Implements the `LLMProvider` trait for OpenAI's Chat Completions API, or
//! any endpoint that speaks the same wire format.

use super::provider::LLMProvider;
use super::types::{CompletionOptions, CompletionResponse, Message, Usage};
use crate::config::ProviderConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI Provider configuration and state.
pub struct OpenAIProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAIProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn completion(
        &self,
        messages: &[Message],
        options: CompletionOptions,
    ) -> Result<CompletionResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .context("Missing API key: set OPENAI_API_KEY")?;

        let request = ChatRequest {
            model: &self.model,
            messages: messages.iter().map(ApiMessage::from).collect(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        tracing::debug!(
            model = %self.model,
            messages = messages.len(),
            max_tokens = options.max_tokens,
            "sending completion request"
        );

        let response = self.client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("OpenAI API error ({}): {}", status, error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .context("No choices returned from OpenAI")?;
        let content = choice
            .message
            .content
            .context("OpenAI returned a choice without content")?;

        Ok(CompletionResponse {
            content,
            usage: chat_response.usage.map(Usage::from).unwrap_or_default(),
        })
    }
}

// -----------------------------------------------------------------------------
// OpenAI DTOs (Data Transfer Objects)
// -----------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a Message> for ApiMessage<'a> {
    fn from(msg: &'a Message) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ApiResponseMessage,
}

#[derive(Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
    total_tokens: usize,
}

impl From<ApiUsage> for Usage {
    fn from(u: ApiUsage) -> Self {
        Self {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}
