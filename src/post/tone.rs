//! Tone profiling from a user's earlier posts.
//!
//! A profile is an enhancement: any provider failure degrades to "no
//! profile" and never reaches the caller.

use crate::llm::{CompletionOptions, LLMProvider, Message};
use std::fmt;

/// At most this many samples are sent for analysis
pub const MAX_TONE_SAMPLES: usize = 10;

const ANALYST_PERSONA: &str =
    "You are an expert at analyzing writing styles and tones from social media content.";

const TONE_OPTIONS: CompletionOptions = CompletionOptions::new(150, 0.3);

/// Short natural-language description of how a user writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneProfile(String);

impl ToneProfile {
    /// Wrap a description. Blank text is not a profile.
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            None
        } else {
            Some(Self(description))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToneProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives tone profiles through a completion provider.
pub struct ToneProfiler<'a> {
    provider: &'a dyn LLMProvider,
}

impl<'a> ToneProfiler<'a> {
    pub fn new(provider: &'a dyn LLMProvider) -> Self {
        Self { provider }
    }

    /// Describe the tone of `samples`, using only the first
    /// [`MAX_TONE_SAMPLES`]. Empty input makes no provider call.
    pub async fn derive_profile(&self, samples: &[String]) -> Option<ToneProfile> {
        if samples.is_empty() {
            return None;
        }

        let messages = [
            Message::system(ANALYST_PERSONA),
            Message::user(analysis_prompt(samples)),
        ];

        match self.provider.completion(&messages, TONE_OPTIONS).await {
            Ok(response) => {
                let profile = ToneProfile::new(response.content);
                if profile.is_none() {
                    tracing::warn!("tone analysis returned an empty reply");
                }
                profile
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(%error, "tone analysis failed, continuing without a profile");
                None
            }
        }
    }
}

/// Build the analysis instruction for the first [`MAX_TONE_SAMPLES`] samples.
pub fn analysis_prompt(samples: &[String]) -> String {
    let listed = samples
        .iter()
        .take(MAX_TONE_SAMPLES)
        .map(|post| format!("- {}", post))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the following social media posts and identify the user's writing style and tone:\n\n\
         {listed}\n\n\
         Provide a brief description (2-3 sentences) of the tone, style, and any patterns you notice. Focus on:\n\
         - Tone (professional, casual, humorous, motivational, etc.)\n\
         - Writing style (sentence length, use of emojis, formality level)\n\
         - Common themes or topics\n"
    )
}
