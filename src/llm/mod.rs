//! LLM Layer: the completion backend behind every post.
//!
//! This module isolates the rest of the crate from any specific provider:
//! - Provider abstraction (`LLMProvider`)
//! - Wire-agnostic chat types
//! - The OpenAI-compatible HTTP provider

pub mod types;
pub mod provider;
pub mod openai;

#[cfg(test)]
pub(crate) mod stub;

// Re-export key types
pub use types::{CompletionOptions, CompletionResponse, Message, Role};
pub use provider::LLMProvider;
pub use openai::OpenAIProvider;
