// Key-term extraction for the full analysis report.
//
// Uses the `keyword_extraction` crate's TF-IDF over the sentences of a single
// text. Each sentence is a separate document, so words repeated across many
// sentences rank lower than words concentrated in a few.

use std::collections::HashSet;

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::text::clean_text;

/// Default number of key terms reported per analysis.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Words this short are dropped even when not stop words.
const MIN_KEYWORD_CHARS: usize = 3;

/// Extract up to `max_keywords` key terms from a text, highest-ranked first.
///
/// Returns an empty list for empty or stop-word-only text.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let cleaned = clean_text(text).to_lowercase();
    let sentences: Vec<String> = cleaned
        .split(['.', '!', '?', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if sentences.is_empty() || max_keywords == 0 {
        return Vec::new();
    }

    let stop_words: Vec<String> = get(LANGUAGE::English);
    let params = TfIdfParams::UnprocessedDocuments(&sentences, &stop_words, None);
    let tfidf = TfIdf::new(params);

    // Ask for extra candidates since some are filtered out below
    let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(max_keywords * 2);

    let mut seen = HashSet::new();
    let keywords: Vec<String> = ranked
        .into_iter()
        .map(|(word, _)| word.to_lowercase())
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| !stop_words.contains(word))
        .filter(|word| seen.insert(word.clone()))
        .take(max_keywords)
        .collect();

    debug!(
        sentences = sentences.len(),
        keywords = keywords.len(),
        "Extracted key terms"
    );

    keywords
}
