//! Errors surfaced to callers of the assistant.
//!
//! Provider failures on the main call collapse into one variant per
//! operation, carrying the full cause chain in their message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request itself is unusable; nothing was sent to the provider.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Error generating post: {0:#}")]
    Generation(anyhow::Error),

    #[error("Error in chat: {0:#}")]
    Chat(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
