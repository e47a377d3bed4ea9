// Unit tests for the misinformation detector and persuasion engine.
//
// Tests range invariants over a spread of inputs (empty, short, long,
// adversarial repetition) and the documented worked scenarios.

use safedose::models::RiskLevel;
use safedose::scoring::misinformation::MisinformationDetector;
use safedose::scoring::persuasion::{persuasion_insights, PersuasionEngine};

fn sample_texts() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "secret".to_string(),
        "They don't want you to know about this SHOCKING miracle cure!".to_string(),
        "A peer-reviewed study with verified data and statistics from a reliable source."
            .to_string(),
        vec!["conspiracy"; 500].join(" "),
        vec!["fear anger hope because expert everyone limited official"; 50].join(" "),
        "The weather today is mild with light wind from the west.".to_string(),
        "if this then that, when it rains then it pours".to_string(),
        "Émeutes à Paris : la vérité cachée 100%vrai".to_string(),
    ]
}

// ============================================================
// Misinformation detector: invariants
// ============================================================

#[test]
fn misinformation_scores_stay_in_range() {
    let detector = MisinformationDetector::new().unwrap();
    for text in sample_texts() {
        let result = detector.detect(&text);
        assert!(
            (0.0..=1.0).contains(&result.score),
            "score {} out of range for {text:?}",
            result.score
        );
        assert!(
            (0.0..=0.9).contains(&result.confidence),
            "confidence {} out of range for {text:?}",
            result.confidence
        );
        assert!(result.detected_patterns.len() <= 10);
    }
}

#[test]
fn misinformation_empty_text_scenario() {
    let detector = MisinformationDetector::new().unwrap();
    let result = detector.detect("");
    assert_eq!(result.score, 0.0);
    assert!((result.confidence - 0.3).abs() < 1e-9);
    assert_eq!(
        result.explanation,
        "Low misinformation risk detected. Text appears to be factual and well-sourced."
    );
}

#[test]
fn misinformation_twenty_word_conspiracy_scenario() {
    let detector = MisinformationDetector::new().unwrap();
    let text = "This conspiracy is 100% real and the conspiracy goes all the way up to \
                the people you trust the most";
    assert_eq!(text.split_whitespace().count(), 20);
    let result = detector.detect(text);
    assert!(result.detected_patterns.len() >= 2);
    assert!((result.score - 1.0).abs() < 1e-9);
}

#[test]
fn misinformation_accented_words_stay_low_risk() {
    let detector = MisinformationDetector::new().unwrap();
    let result = detector.detect("receita provençal do secretário");
    assert!(result.detected_patterns.is_empty());
    assert_eq!(RiskLevel::from_score(result.score), RiskLevel::Low);
}

#[test]
fn misinformation_is_deterministic() {
    let detector = MisinformationDetector::new().unwrap();
    let text = "Experts say the establishment is hiding a breakthrough";
    let a = detector.detect(text);
    let b = detector.detect(text);
    assert_eq!(a.score, b.score);
    assert_eq!(a.detected_patterns, b.detected_patterns);
}

#[test]
fn misinformation_risk_level_matches_explanation_band() {
    let detector = MisinformationDetector::new().unwrap();
    for text in sample_texts() {
        let result = detector.detect(&text);
        let expected_prefix = match RiskLevel::from_score(result.score) {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Moderate",
            RiskLevel::High => "High",
        };
        assert!(
            result.explanation.starts_with(expected_prefix),
            "{:?} does not match score {}",
            result.explanation,
            result.score
        );
    }
}

// ============================================================
// RiskLevel: boundaries
// ============================================================

#[test]
fn risk_level_boundaries() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.2999), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.3), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(0.5999), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(0.6), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
}

#[test]
fn risk_level_display_matches_as_str() {
    for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
        assert_eq!(level.to_string(), level.as_str());
    }
}

// ============================================================
// Persuasion engine: invariants
// ============================================================

#[test]
fn persuasion_scores_stay_in_range() {
    let engine = PersuasionEngine::new().unwrap();
    for text in sample_texts() {
        let result = engine.analyze(&text);
        for (name, value) in [
            ("score", result.score),
            ("emotional", result.emotional_appeal),
            ("logical", result.logical_appeal),
            ("credibility", result.credibility_appeal),
        ] {
            assert!(
                (0.0..=1.0).contains(&value),
                "{name} {value} out of range for {text:?}"
            );
        }
        assert!(result.techniques_detected.len() <= 6);
    }
}

#[test]
fn persuasion_every_category_fires() {
    let engine = PersuasionEngine::new().unwrap();
    let text = vec!["fear anger hope because expert everyone limited official"; 50].join(" ");
    let result = engine.analyze(&text);
    assert_eq!(result.techniques_detected.len(), 6);
    assert!(result
        .techniques_detected
        .contains(&"emotional_appeal: 150 instances".to_string()));
    let insights = persuasion_insights(&result);
    assert!(insights.contains(&"Multiple persuasion techniques used - be cautious".to_string()));
}

#[test]
fn persuasion_if_then_spans_clause() {
    let engine = PersuasionEngine::new().unwrap();
    let result = engine.analyze("if this then that");
    assert_eq!(result.techniques_detected, vec!["logical_appeal: 1 instances"]);
}
