// Data models: the value objects that flow between scorers, the HTTP layer
// and the terminal output.
//
// Nothing here is persisted. Every struct lives for the duration of a single
// scoring call and is serialized straight to JSON.

use serde::{Deserialize, Serialize};

/// One piece of text to score, with an optional URL it was taken from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(default, alias = "sourceUrl")]
    pub source_url: Option<String>,
    #[serde(default, alias = "userId")]
    pub user_id: Option<i64>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// The source URL, treating an empty or blank string as absent.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Output of the misinformation detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisinformationResult {
    /// 0.0 (no suspicious phrasing) to 1.0 (saturated with it)
    pub score: f64,
    /// 0.3 to 0.9, grows with pattern hits and text length
    pub confidence: f64,
    /// The matched phrases, at most ten
    pub detected_patterns: Vec<String>,
    pub explanation: String,
}

/// Output of the persuasion engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersuasionResult {
    pub score: f64,
    /// One `"{category}: {count} instances"` entry per category that matched
    pub techniques_detected: Vec<String>,
    pub emotional_appeal: f64,
    pub logical_appeal: f64,
    pub credibility_appeal: f64,
}

/// How a source URL was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Parsed, and the domain is on at least one of the known lists
    Recognized,
    /// Parsed, but the domain is on none of the lists
    Unrecognized,
    /// The URL could not be parsed or has no host
    Unparseable,
}

/// Credibility record for a source URL's domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceVerification {
    pub domain: String,
    pub is_fact_check: bool,
    pub is_trusted_news: bool,
    pub is_academic: bool,
    pub is_government: bool,
    pub credibility_score: f64,
    pub status: VerificationStatus,
}

impl SourceVerification {
    /// Sentinel returned when the URL cannot be parsed.
    pub fn unknown() -> Self {
        Self {
            domain: "unknown".to_string(),
            is_fact_check: false,
            is_trusted_news: false,
            is_academic: false,
            is_government: false,
            credibility_score: 0.0,
            status: VerificationStatus::Unparseable,
        }
    }
}

/// Output of the trusted messenger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustResult {
    pub trust_score: f64,
    /// Absent when the request carried no source URL
    pub source_verification: Option<SourceVerification>,
    pub alternative_sources: Vec<String>,
    pub fact_check_links: Vec<String>,
}

/// Coarse bucket for a 0-1 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            RiskLevel::Low
        } else if score < 0.6 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined result of running all three scorers over one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub analysis_id: String,
    pub misinformation_score: f64,
    pub persuasion_score: f64,
    pub trust_score: f64,
    pub risk_level: RiskLevel,
    pub analysis_result: String,
    pub recommendations: Vec<String>,
    pub persuasion_insights: Vec<String>,
    pub key_terms: Vec<String>,
    pub misinformation: MisinformationResult,
    pub persuasion: PersuasionResult,
    pub trusted_sources: TrustResult,
    pub created_at: String,
}
