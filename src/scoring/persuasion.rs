// Persuasion engine: six-category rhetorical technique scorer.
//
// Each category has four regex patterns. The overall score is total matches
// per ten words; the three classical appeals (pathos, logos, ethos) are also
// reported individually, normalized against one match per twenty words.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::{AnalysisRequest, PersuasionResult};
use crate::scoring::traits::TextScorer;

/// A category of persuasion technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    EmotionalAppeal,
    LogicalAppeal,
    CredibilityAppeal,
    SocialProof,
    Scarcity,
    Authority,
}

impl Technique {
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::EmotionalAppeal => "emotional_appeal",
            Technique::LogicalAppeal => "logical_appeal",
            Technique::CredibilityAppeal => "credibility_appeal",
            Technique::SocialProof => "social_proof",
            Technique::Scarcity => "scarcity",
            Technique::Authority => "authority",
        }
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pattern table, in reporting order.
const TECHNIQUE_PATTERNS: [(Technique, [&str; 4]); 6] = [
    (
        Technique::EmotionalAppeal,
        [
            r"\b(fear|scary|terrifying|horrible|disaster)\b",
            r"\b(hope|dream|amazing|wonderful|fantastic)\b",
            r"\b(anger|outrage|furious|mad|angry)\b",
            r"\b(sad|heartbreaking|tragic|devastating)\b",
        ],
    ),
    (
        Technique::LogicalAppeal,
        [
            r"\b(because|therefore|thus|consequently|as a result)\b",
            r"\b(evidence|proof|data|statistics|research)\b",
            r"\b(logic|reason|rational|sensible)\b",
            r"\b(if.*then|when.*then|since.*then)\b",
        ],
    ),
    (
        Technique::CredibilityAppeal,
        [
            r"\b(expert|authority|scientist|doctor|professor)\b",
            r"\b(study|research|university|institution)\b",
            r"\b(experience|years|qualified|certified)\b",
            r"\b(trusted|reliable|proven|established)\b",
        ],
    ),
    (
        Technique::SocialProof,
        [
            r"\b(everyone|everybody|most people|many people)\b",
            r"\b(trending|popular|viral|shared)\b",
            r"\b(join|follow|community|group)\b",
            r"\b(recommended|endorsed|approved)\b",
        ],
    ),
    (
        Technique::Scarcity,
        [
            r"\b(limited|exclusive|rare|unique|only)\b",
            r"\b(last chance|final|ending|expiring)\b",
            r"\b(while supplies last|first come first serve)\b",
            r"\b(one time|special offer|limited time)\b",
        ],
    ),
    (
        Technique::Authority,
        [
            r"\b(official|government|authority|regulatory)\b",
            r"\b(required|mandatory|must|should)\b",
            r"\b(compliance|regulation|policy|law)\b",
            r"\b(approved|certified|licensed|authorized)\b",
        ],
    ),
];

/// Regex-based persuasion technique scorer.
pub struct PersuasionEngine {
    techniques: Vec<(Technique, Vec<Regex>)>,
}

impl PersuasionEngine {
    /// Compile the pattern table.
    pub fn new() -> Result<Self> {
        let mut techniques = Vec::with_capacity(TECHNIQUE_PATTERNS.len());
        for (technique, patterns) in TECHNIQUE_PATTERNS {
            let compiled = patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("(?i){p}"))
                        .with_context(|| format!("invalid {technique} pattern: {p}"))
                })
                .collect::<Result<Vec<_>>>()?;
            techniques.push((technique, compiled));
        }
        Ok(Self { techniques })
    }

    /// Count matches for every category, in table order.
    pub fn technique_counts(&self, text: &str) -> Vec<(Technique, usize)> {
        let text_lower = text.to_lowercase();
        self.techniques
            .iter()
            .map(|(technique, patterns)| {
                let count = patterns
                    .iter()
                    .map(|p| p.find_iter(&text_lower).count())
                    .sum();
                (*technique, count)
            })
            .collect()
    }

    /// Analyze persuasion techniques in a text.
    pub fn analyze(&self, text: &str) -> PersuasionResult {
        let counts = self.technique_counts(text);

        let mut techniques_detected = Vec::new();
        let mut emotional = 0usize;
        let mut logical = 0usize;
        let mut credibility = 0usize;
        for &(technique, count) in &counts {
            if count == 0 {
                continue;
            }
            techniques_detected.push(format!("{technique}: {count} instances"));
            match technique {
                Technique::EmotionalAppeal => emotional = count,
                Technique::LogicalAppeal => logical = count,
                Technique::CredibilityAppeal => credibility = count,
                _ => {}
            }
        }

        let total_words = text.split_whitespace().count() as f64;
        let total_techniques: usize = counts.iter().map(|(_, c)| c).sum();
        let score = (total_techniques as f64 / (total_words / 10.0).max(1.0)).min(1.0);

        // Rough ceiling: one appeal every twenty words
        let max_possible = (total_words / 20.0).max(1.0);
        let normalize = |count: usize| (count as f64 / max_possible).min(1.0);

        PersuasionResult {
            score,
            techniques_detected,
            emotional_appeal: normalize(emotional),
            logical_appeal: normalize(logical),
            credibility_appeal: normalize(credibility),
        }
    }
}

impl TextScorer for PersuasionEngine {
    type Output = PersuasionResult;

    fn name(&self) -> &'static str {
        "Persuasion analysis"
    }

    fn score(&self, request: &AnalysisRequest) -> Result<PersuasionResult> {
        Ok(self.analyze(&request.text))
    }
}

/// Advisory notes for a persuasion result.
pub fn persuasion_insights(result: &PersuasionResult) -> Vec<String> {
    let mut insights = Vec::new();

    if result.score > 0.7 {
        insights.push("High use of persuasion techniques detected".to_string());
    }
    if result.emotional_appeal > 0.5 {
        insights.push("Strong emotional appeal - consider the emotional manipulation".to_string());
    }
    if result.logical_appeal > 0.5 {
        insights.push("Logical arguments present - verify the reasoning".to_string());
    }
    if result.credibility_appeal > 0.5 {
        insights.push("Authority/credibility appeals - verify the sources".to_string());
    }
    // Only six categories exist, so this needs every one of them to fire
    if result.techniques_detected.len() > 5 {
        insights.push("Multiple persuasion techniques used - be cautious".to_string());
    }

    insights
}
