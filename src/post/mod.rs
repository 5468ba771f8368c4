//! Post shaping: everything between the client's request and the provider,
//! and between the provider's reply and the client.
//!
//! - `tone` derives a style profile from earlier posts
//! - `prompt` builds the system message
//! - `extract` pulls a ready-to-post candidate out of a reply

pub mod extract;
pub mod platform;
pub mod prompt;
pub mod tone;

pub use extract::extract_suggestion;
pub use platform::Platform;
pub use prompt::build_system_message;
pub use tone::{ToneProfile, ToneProfiler, MAX_TONE_SAMPLES};

use crate::llm::Message;

/// One conversational turn to answer.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// Chronological history, without any system turn
    pub history: Vec<Message>,
    /// Earlier posts by the user, used for tone matching
    pub prior_content: Vec<String>,
    pub use_tone_profile: bool,
    pub platform: Platform,
}

/// The assistant's reply plus the post it appears to contain, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Trimmed provider reply
    pub message: String,
    /// Always a substring of `message`
    pub suggested_content: Option<String>,
}

/// One-shot post request.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub topic: String,
    pub tone: String,
}
