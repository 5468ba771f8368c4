//! Scripted provider for unit tests: returns canned replies in order and
//! records every request it receives.

use super::provider::LLMProvider;
use super::types::{CompletionOptions, CompletionResponse, Message, Usage};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) struct StubProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<(Vec<Message>, CompletionOptions)>>,
}

impl StubProvider {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: &str) -> Self {
        Self::new(vec![Err(error.to_string())])
    }

    pub fn calls(&self) -> Vec<(Vec<Message>, CompletionOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    fn model(&self) -> &str {
        "stub"
    }

    async fn completion(
        &self,
        messages: &[Message],
        options: CompletionOptions,
    ) -> Result<CompletionResponse> {
        self.calls.lock().unwrap().push((messages.to_vec(), options));
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".to_string()));
        match next {
            Ok(content) => Ok(CompletionResponse {
                content,
                usage: Usage::default(),
            }),
            Err(e) => Err(anyhow::anyhow!(e)),
        }
    }
}
