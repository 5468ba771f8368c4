//! Suggested-post extraction from a free-text model reply.
//!
//! Extraction is an ordered list of rules. Each rule either accepts a
//! candidate, rejects the reply outright, or defers to the next rule.
//! A reply that every rule defers on yields no suggestion.

use regex::Regex;
use std::sync::LazyLock;

/// Slack above the platform limit before a reply is treated as a long
/// explanation rather than a post with a short trailer.
pub const EXPLANATION_BUFFER: usize = 100;

/// Replies this short or shorter are never taken whole.
pub const MIN_WHOLE_REPLY_CHARS: usize = 20;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted-run pattern compiles"));

/// Outcome of a single extraction rule.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict<'a> {
    Accept(&'a str),
    Reject,
    Defer,
}

/// An extraction rule: `(reply, limit) -> Verdict`.
pub type Rule = for<'a> fn(&'a str, usize) -> Verdict<'a>;

/// Rules in evaluation order, with names for logging.
pub const RULES: [(&str, Rule); 3] = [
    ("overlong", reject_overlong),
    ("quoted", first_fitting_quote),
    ("whole_reply", whole_reply),
];

/// Pick the part of `reply` that looks like a ready-to-post candidate for a
/// platform with a `limit`-character ceiling. The result is always a
/// substring of `reply`.
pub fn extract_suggestion(reply: &str, limit: usize) -> Option<String> {
    for (name, rule) in RULES {
        match rule(reply, limit) {
            Verdict::Accept(candidate) => {
                tracing::debug!(rule = name, chars = char_len(candidate), "suggestion extracted");
                return Some(candidate.to_string());
            }
            Verdict::Reject => {
                tracing::debug!(rule = name, "reply rejected for suggestion");
                return None;
            }
            Verdict::Defer => {}
        }
    }
    None
}

/// Replies well past the limit are explanations, not posts.
pub fn reject_overlong(reply: &str, limit: usize) -> Verdict<'_> {
    if char_len(reply) > limit.saturating_add(EXPLANATION_BUFFER) {
        Verdict::Reject
    } else {
        Verdict::Defer
    }
}

/// The first double-quoted run that fits the limit, in order of appearance.
pub fn first_fitting_quote(reply: &str, limit: usize) -> Verdict<'_> {
    QUOTED
        .captures_iter(reply)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|quote| char_len(quote) <= limit)
        .map_or(Verdict::Defer, Verdict::Accept)
}

/// A short, non-interrogative reply within the limit is itself the post.
pub fn whole_reply(reply: &str, limit: usize) -> Verdict<'_> {
    let len = char_len(reply);
    if len <= limit && len > MIN_WHOLE_REPLY_CHARS && !reply.ends_with('?') {
        Verdict::Accept(reply)
    } else {
        Verdict::Defer
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
