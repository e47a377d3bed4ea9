// Output formatting: terminal display for the CLI.

pub mod terminal;

/// Shorten `text` to `max_chars` characters for a one-line preview, marking
/// the cut with "...". Counts chars, so accented input is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_none() {
        head
    } else {
        format!("{head}...")
    }
}
