// Trusted messenger: source credibility and where to read more.
//
// Three pieces, all driven by static tables:
// - topic extraction: which of a small vocabulary of topics the text mentions
// - source verification: credibility of the URL the text came from
// - alternatives: reputable outlets for each topic, plus generic fact-checkers
//
// No network calls are made. The fact-check links are the same four sites for
// every request.
//
// A source given without a scheme ("www.snopes.com/article") is read as
// https, so it is scored by its domain instead of falling to the sentinel.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use crate::models::{AnalysisRequest, SourceVerification, TrustResult, VerificationStatus};
use crate::scoring::traits::TextScorer;

/// Fact-checking outlets. Entries with a path only match URLs under that path.
const FACT_CHECK_SOURCES: [&str; 8] = [
    "snopes.com",
    "factcheck.org",
    "politifact.com",
    "reuters.com/fact-check",
    "ap.org/fact-check",
    "bbc.com/news/fact-check",
    "fullfact.org",
    "leadstories.com",
];

const TRUSTED_NEWS_SOURCES: [&str; 10] = [
    "reuters.com",
    "ap.org",
    "bbc.com",
    "npr.org",
    "pbs.org",
    "theguardian.com",
    "nytimes.com",
    "washingtonpost.com",
    "wsj.com",
    "economist.com",
];

const ACADEMIC_SOURCES: [&str; 6] = [
    "scholar.google.com",
    "pubmed.ncbi.nlm.nih.gov",
    "arxiv.org",
    "researchgate.net",
    "jstor.org",
    "sciencedirect.com",
];

/// Government and institutional markers, matched anywhere in the host.
const GOVERNMENT_MARKERS: [&str; 7] = [
    "gov", "mil", "edu", "who.int", "cdc.gov", "nih.gov", "nasa.gov",
];

/// Topic vocabulary, in reporting order.
pub const TOPIC_KEYWORDS: [&str; 11] = [
    "covid",
    "vaccine",
    "election",
    "climate",
    "health",
    "medicine",
    "politics",
    "economy",
    "science",
    "technology",
    "education",
];

pub const MAX_TOPICS: usize = 5;
pub const MAX_ALTERNATIVE_SOURCES: usize = 10;

/// A bucket of related topics and the outlets recommended for them.
struct TopicGroup {
    topics: &'static [&'static str],
    sources: [&'static str; 3],
}

// "education" belongs to no group and contributes no alternatives.
const TOPIC_GROUPS: [TopicGroup; 4] = [
    TopicGroup {
        topics: &["covid", "vaccine", "health", "medicine"],
        sources: [
            "https://www.who.int/health-topics",
            "https://www.cdc.gov/coronavirus",
            "https://www.nih.gov/health-information",
        ],
    },
    TopicGroup {
        topics: &["election", "politics"],
        sources: [
            "https://www.reuters.com/politics",
            "https://www.ap.org/politics",
            "https://www.bbc.com/news/politics",
        ],
    },
    TopicGroup {
        topics: &["climate", "science"],
        sources: [
            "https://climate.nasa.gov",
            "https://www.ipcc.ch",
            "https://www.nature.com/climate",
        ],
    },
    TopicGroup {
        topics: &["economy", "technology"],
        sources: [
            "https://www.economist.com",
            "https://www.ft.com",
            "https://www.wsj.com/tech",
        ],
    },
];

pub const FACT_CHECK_LINKS: [&str; 4] = [
    "https://www.snopes.com",
    "https://www.factcheck.org",
    "https://www.politifact.com",
    "https://www.reuters.com/fact-check",
];

/// Credibility assigned per list, checked in this priority order.
const FACT_CHECK_CREDIBILITY: f64 = 1.0;
const TRUSTED_NEWS_CREDIBILITY: f64 = 0.8;
const ACADEMIC_CREDIBILITY: f64 = 0.9;
const GOVERNMENT_CREDIBILITY: f64 = 0.85;
const DEFAULT_CREDIBILITY: f64 = 0.3;

/// Static-table source and topic lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrustedMessenger;

impl TrustedMessenger {
    pub fn new() -> Self {
        Self
    }

    /// Build the full trust result for a text and its optional source URL.
    pub fn get_alternatives(&self, text: &str, source_url: Option<&str>) -> TrustResult {
        let topics = extract_topics(text);
        let source_verification = source_url.map(verify_source);
        let alternative_sources = alternative_sources(&topics);
        let fact_check_links = fact_check_links(&topics);
        let trust_score =
            calculate_trust_score(source_verification.as_ref(), alternative_sources.len());

        debug!(
            topics = ?topics,
            alternatives = alternative_sources.len(),
            trust_score,
            "Resolved trusted alternatives"
        );

        TrustResult {
            trust_score,
            source_verification,
            alternative_sources,
            fact_check_links,
        }
    }
}

impl TextScorer for TrustedMessenger {
    type Output = TrustResult;

    fn name(&self) -> &'static str {
        "Trusted alternatives lookup"
    }

    fn score(&self, request: &AnalysisRequest) -> Result<TrustResult> {
        Ok(self.get_alternatives(&request.text, request.source_url()))
    }
}

/// Topics from the fixed vocabulary that appear anywhere in the text.
///
/// Substring match, so "vaccines" yields "vaccine". At most five, in
/// vocabulary order.
pub fn extract_topics(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(kw))
        .take(MAX_TOPICS)
        .collect()
}

/// Split a URL into its lower-cased host and path.
fn parse_source(url: &str) -> Result<(String, String)> {
    let parsed = match Url::parse(url) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url}")),
        parsed => parsed,
    }
    .context("failed to parse source URL")?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .context("source URL has no host")?
        .to_lowercase();
    Ok((host, parsed.path().to_string()))
}

/// Check the credibility of a source URL.
///
/// Never fails: an unparseable URL produces the `unknown` sentinel with
/// zero credibility.
pub fn verify_source(url: &str) -> SourceVerification {
    let (host, path) = match parse_source(url) {
        Ok(parts) => parts,
        Err(e) => {
            debug!(url, error = %e, "Source URL not verifiable");
            return SourceVerification::unknown();
        }
    };

    let is_fact_check = on_list(&FACT_CHECK_SOURCES, &host, &path);
    let is_trusted_news = on_list(&TRUSTED_NEWS_SOURCES, &host, &path);
    let is_academic = on_list(&ACADEMIC_SOURCES, &host, &path);
    let is_government = GOVERNMENT_MARKERS.iter().any(|m| host.contains(m));

    let credibility_score = if is_fact_check {
        FACT_CHECK_CREDIBILITY
    } else if is_trusted_news {
        TRUSTED_NEWS_CREDIBILITY
    } else if is_academic {
        ACADEMIC_CREDIBILITY
    } else if is_government {
        GOVERNMENT_CREDIBILITY
    } else {
        DEFAULT_CREDIBILITY
    };

    let status = if is_fact_check || is_trusted_news || is_academic || is_government {
        VerificationStatus::Recognized
    } else {
        VerificationStatus::Unrecognized
    };

    SourceVerification {
        domain: host,
        is_fact_check,
        is_trusted_news,
        is_academic,
        is_government,
        credibility_score,
        status,
    }
}

/// Whether a host (and path) falls under any entry of a domain list.
///
/// A leading "www." is ignored and subdomains match their parent. Entries
/// carrying a path ("reuters.com/fact-check") also require the URL path to
/// sit under it.
fn on_list(list: &[&str], host: &str, path: &str) -> bool {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = path.trim_start_matches('/');
    list.iter().any(|entry| match entry.split_once('/') {
        Some((domain, prefix)) => {
            domain_matches(host, domain)
                && path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        }
        None => domain_matches(host, entry),
    })
}

fn domain_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Recommended outlets for a set of topics: three per matching topic,
/// de-duplicated, at most ten.
pub fn alternative_sources(topics: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    topics
        .iter()
        .filter_map(|topic| {
            TOPIC_GROUPS
                .iter()
                .find(|g| g.topics.iter().any(|t| t == topic))
        })
        .flat_map(|group| group.sources)
        .filter(|source| seen.insert(*source))
        .take(MAX_ALTERNATIVE_SOURCES)
        .map(str::to_string)
        .collect()
}

/// Generic fact-checking sites. The topics are not used.
pub fn fact_check_links(_topics: &[&str]) -> Vec<String> {
    FACT_CHECK_LINKS.iter().map(|l| l.to_string()).collect()
}

/// Source credibility plus a small boost for each available alternative.
pub fn calculate_trust_score(
    verification: Option<&SourceVerification>,
    num_alternatives: usize,
) -> f64 {
    let base_score = verification.map_or(0.0, |v| v.credibility_score);
    let alternative_boost = (num_alternatives as f64 * 0.02).min(0.2);
    (base_score + alternative_boost).min(1.0)
}
