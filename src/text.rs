// Small text utilities shared by the scorers, the report and the CLI.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Punctuation kept by `clean_text`; everything else that isn't a word
/// character or whitespace is dropped.
const KEPT_PUNCTUATION: [char; 7] = ['.', ',', '!', '?', '-', ':', ';'];

/// Normalize a text for keyword analysis: collapse whitespace runs to a
/// single space, trim, and strip symbols.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| {
            c.is_alphanumeric() || *c == '_' || c.is_whitespace() || KEPT_PUNCTUATION.contains(c)
        })
        .collect()
}

/// Render a 0-1 score as a percentage, e.g. `0.4567` -> `"45.7%"`.
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Identifier for one analysis run:
/// `analysis_{u<user_id>|anon}_{8 hex chars of SHA-256(text)}_{timestamp}`.
/// A user id of 0 is treated as anonymous.
pub fn analysis_id(text: &str, user_id: Option<i64>, now: DateTime<Utc>) -> String {
    let digest = hex::encode(Sha256::digest(text.as_bytes()));
    let user_part = match user_id {
        Some(id) if id != 0 => format!("u{id}"),
        _ => "anon".to_string(),
    };
    let timestamp = now.format("%Y-%m-%dT%H:%M:%S%.6f");
    format!("analysis_{user_part}_{}_{timestamp}", &digest[..8])
}
