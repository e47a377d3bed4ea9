// Keyword overlap between two texts.
//
// Plain (unweighted) Jaccard similarity over the key-term sets produced by
// `extract_keywords`:
//
//   |keywords_a ∩ keywords_b| / |keywords_a ∪ keywords_b|

use std::collections::HashSet;

use super::keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};

/// Similarity of two texts by shared key terms, from 0.0 to 1.0.
///
/// Returns 0.0 when either text yields no keywords.
pub fn keyword_similarity(text_a: &str, text_b: &str) -> f64 {
    let keywords_a: HashSet<String> = extract_keywords(text_a, DEFAULT_MAX_KEYWORDS)
        .into_iter()
        .collect();
    let keywords_b: HashSet<String> = extract_keywords(text_b, DEFAULT_MAX_KEYWORDS)
        .into_iter()
        .collect();

    jaccard(&keywords_a, &keywords_b)
}

/// Jaccard index of two sets; 0.0 if either is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
