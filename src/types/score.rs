// src/types/score.rs
//! Score report structures produced by the ATS scorer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full scoring report. Recomputed fresh on every call; carries no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Sum of the three category scores, 0-100.
    pub total_score: u32,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    /// All category suggestions flattened in format, content, keywords order.
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub format: CategoryScore,
    pub content: CategoryScore,
    pub keywords: CategoryScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: u32,
    pub max_score: u32,
    /// round(100 * score / max_score)
    pub percentage: u32,
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<KeywordStats>,
}

impl CategoryScore {
    pub fn new(score: u32, max_score: u32, suggestions: Vec<Suggestion>) -> Self {
        let percentage = ((score as f64 / max_score as f64) * 100.0).round() as u32;
        Self {
            score,
            max_score,
            percentage,
            suggestions,
            stats: None,
        }
    }
}

/// Match counts observed while scoring the keywords category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    pub action_verbs: usize,
    pub industry_keywords: usize,
    pub metrics: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: Category,
    pub issue: String,
    pub suggestion: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Suggestion {
    pub fn new(
        category: Category,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            category,
            issue: issue.into(),
            suggestion: suggestion.into(),
            severity,
            examples: None,
        }
    }

    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = Some(examples.iter().map(|e| e.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Format,
    Content,
    Keywords,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Format => write!(f, "Format"),
            Category::Content => write!(f, "Content"),
            Category::Keywords => write!(f, "Keywords"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Letter grade for a total score, fixed thresholds.
    pub fn from_score(total: u32) -> Self {
        match total {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(79), Grade::C);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_category_score_percentage_rounds() {
        assert_eq!(CategoryScore::new(15, 30, Vec::new()).percentage, 50);
        assert_eq!(CategoryScore::new(10, 30, Vec::new()).percentage, 33);
        assert_eq!(CategoryScore::new(25, 30, Vec::new()).percentage, 83);
        assert_eq!(CategoryScore::new(0, 40, Vec::new()).percentage, 0);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::A).unwrap(), "\"A\"");
    }
}
