//! The Provider Abstraction.
//!
//! This trait defines the standard interface for any chat-completion
//! backend. The rest of the crate only ever talks to `dyn LLMProvider`.

use anyhow::Result;
use async_trait::async_trait;
use super::types::{CompletionOptions, CompletionResponse, Message};

/// The core trait for LLM interactions.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Identifier of the model this provider sends requests to.
    fn model(&self) -> &str;

    /// Send a chat completion request.
    ///
    /// Transport failures, non-success statuses, and malformed bodies all
    /// surface as errors; implementations never retry.
    async fn completion(
        &self,
        messages: &[Message],
        options: CompletionOptions,
    ) -> Result<CompletionResponse>;
}
