// src/scoring/mod.rs
//! ATS compatibility scorer.
//!
//! Scores a resume snapshot 0-100 across three fixed-weight categories:
//! format (30), content (40) and keywords (30). Scoring is pure and total;
//! missing fields degrade to partial or zero credit plus a suggestion, never
//! an error. Calling it twice on the same document yields the same report.

mod content;
mod format;
mod keywords;
mod wordlists;

pub use wordlists::{ACTION_VERBS, INDUSTRY_KEYWORDS, METRIC_PATTERNS};

use crate::types::{Grade, ResumeDocument, ScoreBreakdown, ScoreResult};
use regex::Regex;
use tracing::debug;

/// Resume scorer with configurable word lists.
///
/// Construct once and share by reference; it holds the compiled metric
/// patterns and never mutates the documents it scores.
pub struct AtsScorer {
    action_verbs: Vec<String>,
    industry_keywords: Vec<String>,
    metric_patterns: Vec<Regex>,
}

impl AtsScorer {
    /// Scorer with the built-in word lists.
    pub fn new() -> Self {
        Self::with_wordlists(
            ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            INDUSTRY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        )
    }

    /// Scorer with custom verb and keyword lists. Metric patterns stay
    /// built-in; patterns that fail to compile are skipped.
    pub fn with_wordlists(action_verbs: Vec<String>, industry_keywords: Vec<String>) -> Self {
        let metric_patterns = METRIC_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            action_verbs,
            industry_keywords,
            metric_patterns,
        }
    }

    /// Score a resume across all three categories.
    pub fn calculate_score(&self, resume: &ResumeDocument) -> ScoreResult {
        let format = format::check(resume);
        let content = content::check(resume);
        let keywords = keywords::check(
            resume,
            &self.action_verbs,
            &self.industry_keywords,
            &self.metric_patterns,
        );

        let total_score = format.score + content.score + keywords.score;
        debug!(
            format = format.score,
            content = content.score,
            keywords = keywords.score,
            total = total_score,
            "Scored resume"
        );

        let suggestions = format
            .suggestions
            .iter()
            .chain(content.suggestions.iter())
            .chain(keywords.suggestions.iter())
            .cloned()
            .collect();

        ScoreResult {
            total_score,
            grade: Grade::from_score(total_score),
            breakdown: ScoreBreakdown {
                format,
                content,
                keywords,
            },
            suggestions,
        }
    }

    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    pub fn industry_keywords(&self) -> &[String] {
        &self.industry_keywords
    }

    pub fn metric_patterns(&self) -> &[Regex] {
        &self.metric_patterns
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, EducationEntry, ExperienceEntry, Severity};

    fn strong_resume() -> ResumeDocument {
        let mut resume = ResumeDocument::default();
        resume.contact.full_name = "Jane Doe".to_string();
        resume.contact.email = "jane@example.com".to_string();
        resume.contact.phone = "+1 555 0100".to_string();
        resume.summary = "Backend engineer with 8 years of experience building cloud services. \
                          Led database and API work across agile teams, improved performance and \
                          delivered automation that increased throughput by 40%."
            .to_string();
        resume.experience.push(ExperienceEntry {
            title: "Senior Backend Engineer".to_string(),
            company: "CloudCo".to_string(),
            start_date: "2019-03".to_string(),
            current: true,
            bullets: vec![
                "Developed a security review pipeline adopted by 30 teams".to_string(),
                "Reduced deployment time by 60% through build optimization".to_string(),
                "Managed a budget of $250000 for platform infrastructure".to_string(),
                "Launched a scalability initiative serving 100000 users".to_string(),
            ],
            ..Default::default()
        });
        resume.education.push(EducationEntry {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            graduation_date: "2015".to_string(),
            ..Default::default()
        });
        resume.skills.insert(
            "Technical".to_string(),
            vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "Kubernetes".to_string(),
                "gRPC".to_string(),
                "Terraform".to_string(),
            ],
        );
        resume
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score(&strong_resume());
        let breakdown = &result.breakdown;
        assert_eq!(
            result.total_score,
            breakdown.format.score + breakdown.content.score + breakdown.keywords.score
        );
        assert!(result.total_score <= 100);
    }

    #[test]
    fn test_category_scores_respect_maxima() {
        let scorer = AtsScorer::new();
        for resume in [ResumeDocument::default(), strong_resume()] {
            let result = scorer.calculate_score(&resume);
            assert!(result.breakdown.format.score <= 30);
            assert!(result.breakdown.content.score <= 40);
            assert!(result.breakdown.keywords.score <= 30);
        }
    }

    #[test]
    fn test_empty_resume_breakdown() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score(&ResumeDocument::default());
        // 10 + 5 unconditional + 5 vacuous dates; nothing else applies
        assert_eq!(result.breakdown.format.score, 15);
        assert_eq!(result.breakdown.content.score, 0);
        assert_eq!(result.breakdown.keywords.score, 0);
        assert_eq!(result.total_score, 15);
        assert_eq!(result.grade, Grade::F);
    }

    #[test]
    fn test_strong_resume_scores_well() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score(&strong_resume());
        assert!(result.total_score >= 80, "got {}", result.total_score);
    }

    #[test]
    fn test_suggestions_flattened_in_category_order() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score(&ResumeDocument::default());
        let categories: Vec<Category> = result.suggestions.iter().map(|s| s.category).collect();
        let first_content = categories
            .iter()
            .position(|c| *c == Category::Content)
            .expect("content suggestions");
        assert!(categories[..first_content]
            .iter()
            .all(|c| *c == Category::Format));
        assert!(categories[first_content..]
            .iter()
            .all(|c| *c != Category::Format));
    }

    #[test]
    fn test_severity_values_are_bounded() {
        let scorer = AtsScorer::new();
        for resume in [ResumeDocument::default(), strong_resume()] {
            for suggestion in scorer.calculate_score(&resume).suggestions {
                assert!(matches!(
                    suggestion.severity,
                    Severity::Low | Severity::Medium | Severity::High
                ));
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = AtsScorer::new();
        let resume = strong_resume();
        let first = serde_json::to_string(&scorer.calculate_score(&resume)).unwrap();
        let second = serde_json::to_string(&scorer.calculate_score(&resume)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_wordlists_are_used() {
        let scorer = AtsScorer::with_wordlists(vec!["wrangled".to_string()], Vec::new());
        let mut resume = ResumeDocument::default();
        resume.summary = "Wrangled data pipelines".to_string();
        let result = scorer.calculate_score(&resume);
        assert_eq!(result.breakdown.keywords.stats.expect("stats").action_verbs, 1);
    }
}
