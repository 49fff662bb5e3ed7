// src/scoring/format.rs
//! Format category: section coverage, date consistency, overall length.

use crate::types::{Category, CategoryScore, ResumeDocument, Severity, Suggestion};
use tracing::warn;

const MAX_SCORE: u32 = 30;

pub fn check(resume: &ResumeDocument) -> CategoryScore {
    let mut score = 0;
    let mut suggestions = Vec::new();

    // Standard font (10 pts) and no tables/graphics (5 pts): the engine
    // controls the output format, so these always pass.
    score += 10;
    score += 5;

    // Proper section headers (5 pts)
    let sections = [
        !resume.summary.is_empty(),
        !resume.experience.is_empty(),
        !resume.education.is_empty(),
        resume.skills.values().any(|list| !list.is_empty()),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    if sections >= 3 {
        score += 5;
    } else {
        suggestions.push(Suggestion::new(
            Category::Format,
            "Missing key sections",
            "Include all major sections: Summary, Experience, Education, and Skills",
            Severity::Medium,
        ));
    }

    // Consistent formatting (5 pts). Vacuously satisfied with no experience.
    if resume.experience.is_empty() {
        score += 5;
    } else if resume
        .experience
        .iter()
        .all(|exp| !exp.start_date.is_empty())
    {
        score += 5;
    } else {
        suggestions.push(Suggestion::new(
            Category::Format,
            "Inconsistent date formatting",
            "Ensure all work experience entries have start dates",
            Severity::Low,
        ));
    }

    // Optimal length (5 pts), measured on the serialized document.
    let content_length = serde_json::to_string(resume)
        .map(|json| json.len())
        .unwrap_or_else(|e| {
            warn!("Failed to serialize resume for length check: {}", e);
            0
        });
    if content_length > 500 && content_length < 8000 {
        score += 5;
    } else if content_length <= 500 {
        suggestions.push(Suggestion::new(
            Category::Format,
            "Resume is too short",
            "Add more details about your experience and accomplishments",
            Severity::High,
        ));
    } else {
        suggestions.push(Suggestion::new(
            Category::Format,
            "Resume might be too long",
            "Consider condensing to 1-2 pages for better readability",
            Severity::Low,
        ));
    }

    CategoryScore::new(score, MAX_SCORE, suggestions)
}
