//! Postwright: conversational social post generation.
//!
//! A chat request is shaped into a provider call (system message built from
//! the platform's character limit and, optionally, the user's tone), and the
//! reply is scanned for a ready-to-post candidate.

pub mod assistant;
pub mod config;
pub mod error;
pub mod llm;
pub mod post;
pub mod server;

pub use assistant::PostAssistant;
pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{Error, Result};
pub use llm::{CompletionOptions, CompletionResponse, LLMProvider, Message, OpenAIProvider, Role};
pub use post::{ChatReply, ChatRequest, Platform, PostRequest, ToneProfile};
pub use server::{build_router, AppState};
