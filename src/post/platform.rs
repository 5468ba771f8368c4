//! Target platforms and their character ceilings.

use serde::Deserialize;
use std::fmt;

/// Character ceiling for Twitter/X posts
pub const TWITTER_CHAR_LIMIT: usize = 280;
/// Character ceiling for every other platform
pub const DEFAULT_CHAR_LIMIT: usize = 2200;

/// The platform a post is being written for. Both variants keep the name
/// exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Platform {
    /// "twitter" or "x", matched exactly
    Twitter(String),
    /// Any other platform
    Other(String),
}

impl Platform {
    /// Parse a client-supplied platform name. Never fails: anything other
    /// than the exact strings "twitter" and "x" falls into `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "twitter" | "x" => Self::Twitter(name.to_string()),
            _ => Self::Other(name.to_string()),
        }
    }

    /// Display name used in prompts
    pub fn name(&self) -> &str {
        match self {
            Self::Twitter(name) | Self::Other(name) => name,
        }
    }

    /// Maximum post length, in characters
    pub fn char_limit(&self) -> usize {
        match self {
            Self::Twitter(_) => TWITTER_CHAR_LIMIT,
            Self::Other(_) => DEFAULT_CHAR_LIMIT,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::Twitter("twitter".to_string())
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
