// Full analysis: runs all three scorers over one request and combines them
// into a single report with recommendations.
//
// The scorers are independent; nothing here feeds one scorer's output into
// another. The combination step only reads the three scores.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{AnalysisRequest, FullAnalysis, RiskLevel};
use crate::scoring::misinformation::MisinformationDetector;
use crate::scoring::persuasion::{persuasion_insights, PersuasionEngine};
use crate::scoring::traits::TextScorer;
use crate::scoring::trusted::TrustedMessenger;
use crate::text;
use crate::topics::keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};

/// Thresholds that trigger a recommendation.
const HIGH_MISINFORMATION: f64 = 0.7;
const STRONG_PERSUASION: f64 = 0.8;
const LOW_TRUST: f64 = 0.5;

/// Owns one instance of each scorer. Build once and share.
pub struct Analyzer {
    pub misinformation: MisinformationDetector,
    pub persuasion: PersuasionEngine,
    pub trusted: TrustedMessenger,
}

impl Analyzer {
    /// Compile every scorer's pattern table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            misinformation: MisinformationDetector::new()
                .context("failed to build misinformation detector")?,
            persuasion: PersuasionEngine::new().context("failed to build persuasion engine")?,
            trusted: TrustedMessenger::new(),
        })
    }

    /// Run the full analysis, stamped with the current time.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<FullAnalysis> {
        self.analyze_at(request, Utc::now())
    }

    /// Run the full analysis with an explicit timestamp.
    pub fn analyze_at(&self, request: &AnalysisRequest, now: DateTime<Utc>) -> Result<FullAnalysis> {
        let misinformation = self.misinformation.score(request)?;
        let persuasion = self.persuasion.score(request)?;
        let trusted_sources = self.trusted.score(request)?;

        let misinformation_score = misinformation.score;
        let persuasion_score = persuasion.score;
        let trust_score = trusted_sources.trust_score;

        let analysis_id = text::analysis_id(&request.text, request.user_id, now);

        info!(
            analysis_id = %analysis_id,
            words = request.text.split_whitespace().count(),
            misinformation = misinformation_score,
            persuasion = persuasion_score,
            trust = trust_score,
            "Analysis complete"
        );

        Ok(FullAnalysis {
            analysis_id,
            misinformation_score,
            persuasion_score,
            trust_score,
            risk_level: RiskLevel::from_score(misinformation_score),
            analysis_result: format!(
                "Analysis complete. Misinformation risk: {misinformation_score:.2}, \
                 Persuasion techniques: {persuasion_score:.2}"
            ),
            recommendations: recommendations(misinformation_score, persuasion_score, trust_score),
            persuasion_insights: persuasion_insights(&persuasion),
            key_terms: extract_keywords(&request.text, DEFAULT_MAX_KEYWORDS),
            misinformation,
            persuasion,
            trusted_sources,
            created_at: now.to_rfc3339(),
        })
    }
}

impl TextScorer for Analyzer {
    type Output = FullAnalysis;

    fn name(&self) -> &'static str {
        "Analysis"
    }

    fn score(&self, request: &AnalysisRequest) -> Result<FullAnalysis> {
        self.analyze(request)
    }
}

/// Advice for the reader, based on the three headline scores.
///
/// Always returns at least one entry.
pub fn recommendations(misinformation: f64, persuasion: f64, trust: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if misinformation > HIGH_MISINFORMATION {
        recommendations
            .push("High misinformation risk detected. Verify facts from multiple sources.".to_string());
    }
    if persuasion > STRONG_PERSUASION {
        recommendations.push(
            "Strong persuasion techniques detected. Consider the intent behind this message."
                .to_string(),
        );
    }
    if trust < LOW_TRUST {
        recommendations.push("Low trust score. Seek information from verified sources.".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Text appears to be relatively trustworthy. Always verify important information."
                .to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_all_flags() {
        let recs = recommendations(0.9, 0.9, 0.1);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].starts_with("High misinformation risk"));
        assert!(recs[1].starts_with("Strong persuasion"));
        assert!(recs[2].starts_with("Low trust score"));
    }

    #[test]
    fn test_recommendations_default_when_nothing_fires() {
        let recs = recommendations(0.7, 0.8, 0.5);
        assert_eq!(
            recs,
            vec!["Text appears to be relatively trustworthy. Always verify important information."]
        );
    }

    #[test]
    fn test_analyze_empty_text() {
        let analyzer = Analyzer::new().unwrap();
        let result = analyzer.analyze(&AnalysisRequest::new("")).unwrap();
        assert_eq!(result.misinformation_score, 0.0);
        assert_eq!(result.persuasion_score, 0.0);
        assert_eq!(result.trust_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.key_terms.is_empty());
        assert_eq!(
            result.recommendations,
            vec!["Low trust score. Seek information from verified sources."]
        );
        assert_eq!(
            result.analysis_result,
            "Analysis complete. Misinformation risk: 0.00, Persuasion techniques: 0.00"
        );
    }
}
