// Misinformation detector: regex-pattern density scoring.
//
// Counts hits of a fixed set of "suspicious phrasing" patterns (conspiracy
// language, absolutes, urgency, anti-establishment framing, miracle claims,
// vague appeals to authority, clickbait) and divides by the word count.
// Fact-checking vocabulary pulls the score back down a little.
//
// The constants below (x10 density scaling, 0.3 fact-check weight, the
// confidence ramp) are heuristic placeholders, not a calibrated model.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::{AnalysisRequest, MisinformationResult};
use crate::scoring::traits::TextScorer;

/// Suspicious phrasing, matched case-insensitively against the lowered text.
///
/// Patterns overlap on purpose ("secret" appears twice), so a single word
/// can count more than once.
const MISINFORMATION_PATTERNS: [&str; 7] = [
    r"\b(conspiracy|cover.?up|hidden|secret|they don't want you to know)\b",
    r"\b(100%|guaranteed|proven|scientific fact|undeniable)\b",
    r"\b(urgent|act now|limited time|exclusive|secret)\b",
    r"\b(big pharma|mainstream media|establishment|elite)\b",
    r"\b(natural cure|miracle|breakthrough|revolutionary)\b",
    r"\b(government|authorities|experts say|studies show)\b",
    r"\b(clickbait|shocking|you won't believe|amazing)\b",
];

/// Vocabulary suggesting the text cites its sources. Matched as substrings,
/// and each keyword counts at most once.
const FACT_CHECK_KEYWORDS: [&str; 9] = [
    "fact-check",
    "verified",
    "peer-reviewed",
    "study",
    "research",
    "evidence",
    "data",
    "statistics",
    "source",
];

/// Only the first few matched phrases are returned to the caller.
pub const MAX_REPORTED_PATTERNS: usize = 10;

/// Pattern-density misinformation scorer.
pub struct MisinformationDetector {
    patterns: Vec<Regex>,
}

impl MisinformationDetector {
    /// Compile the pattern table.
    pub fn new() -> Result<Self> {
        let patterns = MISINFORMATION_PATTERNS
            .iter()
            .map(|p| {
                Regex::new(&format!("(?i){p}"))
                    .with_context(|| format!("invalid misinformation pattern: {p}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Score a text for misinformation risk.
    pub fn detect(&self, text: &str) -> MisinformationResult {
        let text_lower = text.to_lowercase();

        let mut detected_patterns: Vec<String> = Vec::new();
        for pattern in &self.patterns {
            detected_patterns.extend(
                pattern
                    .find_iter(&text_lower)
                    .map(|m| m.as_str().to_string()),
            );
        }
        let pattern_matches = detected_patterns.len();

        let fact_check_count = FACT_CHECK_KEYWORDS
            .iter()
            .filter(|kw| text_lower.contains(*kw))
            .count();

        let total_words = text.split_whitespace().count().max(1) as f64;
        let pattern_density = pattern_matches as f64 / total_words;
        let fact_check_ratio = fact_check_count as f64 / total_words;

        let base_score = (pattern_density * 10.0).min(1.0);
        let score = (base_score - fact_check_ratio * 0.3).max(0.0);

        let text_len = text.chars().count() as f64;
        let confidence = (0.3 + pattern_matches as f64 * 0.1 + text_len / 1000.0 * 0.2).min(0.9);

        let explanation = explain(score, pattern_matches);
        detected_patterns.truncate(MAX_REPORTED_PATTERNS);

        MisinformationResult {
            score,
            confidence,
            detected_patterns,
            explanation,
        }
    }
}

impl TextScorer for MisinformationDetector {
    type Output = MisinformationResult;

    fn name(&self) -> &'static str {
        "Misinformation detection"
    }

    fn score(&self, request: &AnalysisRequest) -> Result<MisinformationResult> {
        Ok(self.detect(&request.text))
    }
}

/// Human-readable summary. `pattern_count` is the full match count, not the
/// truncated list length.
fn explain(score: f64, pattern_count: usize) -> String {
    if score < 0.3 {
        "Low misinformation risk detected. Text appears to be factual and well-sourced.".to_string()
    } else if score < 0.6 {
        format!("Moderate misinformation risk. Detected {pattern_count} suspicious patterns.")
    } else {
        format!(
            "High misinformation risk. Detected {pattern_count} suspicious patterns. \
             Verify facts from multiple sources."
        )
    }
}
