// src/scoring/keywords.rs
//! Keywords category: action verbs, industry terms, quantifiable metrics.

use crate::types::{Category, CategoryScore, KeywordStats, ResumeDocument, Severity, Suggestion};
use regex::Regex;

const MAX_SCORE: u32 = 30;

/// Lowercased concatenation of the summary plus every experience entry's
/// title, company and bullets.
fn searchable_text(resume: &ResumeDocument) -> String {
    let mut parts = vec![resume.summary.clone()];
    for exp in &resume.experience {
        let mut fields = vec![exp.title.clone(), exp.company.clone()];
        fields.extend(exp.bullets.iter().cloned());
        parts.push(fields.join(" "));
    }
    parts.join(" ").to_lowercase()
}

pub fn check(
    resume: &ResumeDocument,
    action_verbs: &[String],
    industry_keywords: &[String],
    metric_patterns: &[Regex],
) -> CategoryScore {
    let mut score = 0;
    let mut suggestions = Vec::new();
    let text = searchable_text(resume);

    // Action verbs (10 pts). Substring matching is intentionally loose:
    // "led" also matches inside "scaled".
    let verbs_found = action_verbs
        .iter()
        .filter(|verb| text.contains(verb.to_lowercase().as_str()))
        .count();
    let verb_score = (verbs_found as u32 * 10 / 5).min(10);
    score += verb_score;

    if verb_score < 7 {
        suggestions.push(
            Suggestion::new(
                Category::Keywords,
                "Limited use of action verbs",
                "Start bullet points with strong action verbs (achieved, developed, led, etc.)",
                Severity::Medium,
            )
            .with_examples(&["achieved", "developed", "led", "implemented", "optimized"]),
        );
    }

    // Industry keywords (10 pts)
    let keywords_found = industry_keywords
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .count();
    let keyword_score = (keywords_found as u32 * 10 / 3).min(10);
    score += keyword_score;

    if keyword_score < 7 {
        suggestions.push(Suggestion::new(
            Category::Keywords,
            "Few industry-relevant keywords",
            "Include more industry-specific terms and technologies relevant to your field",
            Severity::Medium,
        ));
    }

    // Quantifiable metrics (10 pts)
    let metrics_found: usize = metric_patterns
        .iter()
        .map(|pattern| pattern.find_iter(&text).count())
        .sum();
    let metric_score = (metrics_found as u32 * 10 / 3).min(10);
    score += metric_score;

    if metric_score < 7 {
        suggestions.push(
            Suggestion::new(
                Category::Keywords,
                "Lack of quantifiable achievements",
                "Add specific numbers and metrics to demonstrate impact (e.g., \"increased sales by 30%\")",
                Severity::High,
            )
            .with_examples(&[
                "Increased revenue by 25%",
                "Managed team of 12 developers",
                "Reduced processing time by 40%",
                "Grew user base to 50,000+",
            ]),
        );
    }

    let mut result = CategoryScore::new(score, MAX_SCORE, suggestions);
    result.stats = Some(KeywordStats {
        action_verbs: verbs_found,
        industry_keywords: keywords_found,
        metrics: metrics_found,
    });
    result
}
