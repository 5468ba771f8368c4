//! System message construction for the chat turn.

use super::platform::Platform;
use super::tone::ToneProfile;

/// Build the system message for `platform`, folding in the user's tone
/// profile when one was derived. Pure and deterministic.
pub fn build_system_message(platform: &Platform, tone: Option<&ToneProfile>) -> String {
    let mut message = format!(
        "You are a helpful social media content creation assistant for {platform}. \
         Help users create engaging posts.\n\n\
         Guidelines:\n\
         - Be conversational and friendly\n\
         - When the user shares an idea or asks for content, generate a social media post\n\
         - Keep posts under {limit} characters\n\
         - After generating a post, you can provide a brief explanation or ask if they want to refine it\n\
         - If you generate a post, present it clearly - it can be anywhere in your response",
        platform = platform.name(),
        limit = platform.char_limit(),
    );

    if let Some(tone) = tone {
        message.push_str("\n\nUser's account tone and style: ");
        message.push_str(tone.as_str());
        message.push_str(
            "\n\nWhen generating posts, match this user's tone and style from their previous posts.",
        );
    }

    message
}
