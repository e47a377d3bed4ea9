// Colored terminal output for analysis reports and source checks.

use colored::Colorize;

use crate::models::{FullAnalysis, RiskLevel, SourceVerification, VerificationStatus};
use crate::text::format_score;

/// Display a full analysis report in the terminal.
pub fn display_analysis(analysis: &FullAnalysis, text: &str) {
    println!("\n{}", "=== SafeDose Analysis ===".bold());
    println!("  {}", super::truncate_chars(text.trim(), 120).dimmed());
    println!();

    println!(
        "  Misinformation risk: {}  ({}, confidence {})",
        colorize_risk(analysis.risk_level),
        format_score(analysis.misinformation_score),
        format_score(analysis.misinformation.confidence),
    );
    println!("    {}", analysis.misinformation.explanation);
    if !analysis.misinformation.detected_patterns.is_empty() {
        println!(
            "    Patterns: {}",
            analysis.misinformation.detected_patterns.join(", ").yellow()
        );
    }

    println!(
        "\n  Persuasion: {}",
        format_score(analysis.persuasion_score)
    );
    println!(
        "    Emotional {:.2}  |  Logical {:.2}  |  Credibility {:.2}",
        analysis.persuasion.emotional_appeal,
        analysis.persuasion.logical_appeal,
        analysis.persuasion.credibility_appeal,
    );
    for technique in &analysis.persuasion.techniques_detected {
        println!("    - {technique}");
    }
    for insight in &analysis.persuasion_insights {
        println!("    {} {}", "!".yellow(), insight);
    }

    println!("\n  Trust: {}", format_score(analysis.trust_score));
    if let Some(source) = &analysis.trusted_sources.source_verification {
        println!(
            "    Source: {} ({})",
            source.domain,
            colorize_status(source.status)
        );
    }

    if !analysis.key_terms.is_empty() {
        println!("\n  Key terms: {}", analysis.key_terms.join(", ").dimmed());
    }

    if !analysis.trusted_sources.alternative_sources.is_empty() {
        println!("\n  Read more:");
        for source in &analysis.trusted_sources.alternative_sources {
            println!("    {source}");
        }
    }

    println!("\n  Fact-checkers:");
    for link in &analysis.trusted_sources.fact_check_links {
        println!("    {link}");
    }

    println!("\n{}", "Recommendations:".bold());
    for rec in &analysis.recommendations {
        println!("  * {rec}");
    }
    println!();
}

/// Display the credibility record for a single URL.
pub fn display_source(source: &SourceVerification) {
    println!(
        "\n{}",
        format!("=== Source: {} ===", source.domain).bold()
    );
    println!("  Status: {}", colorize_status(source.status));
    println!("  Credibility: {:.2}", source.credibility_score);

    let flag = |set: bool| {
        if set {
            "yes".green().to_string()
        } else {
            "no".dimmed().to_string()
        }
    };
    println!(
        "  Fact-check: {}  |  Trusted news: {}  |  Academic: {}  |  Government: {}",
        flag(source.is_fact_check),
        flag(source.is_trusted_news),
        flag(source.is_academic),
        flag(source.is_government),
    );
    println!();
}

fn colorize_risk(level: RiskLevel) -> colored::ColoredString {
    let s = level.as_str();
    match level {
        RiskLevel::High => s.red().bold(),
        RiskLevel::Medium => s.yellow(),
        RiskLevel::Low => s.green(),
    }
}

fn colorize_status(status: VerificationStatus) -> colored::ColoredString {
    match status {
        VerificationStatus::Recognized => "recognized".green(),
        VerificationStatus::Unrecognized => "unrecognized".yellow(),
        VerificationStatus::Unparseable => "unparseable".red(),
    }
}
