// src/heuristics.rs
//! Offline text assistant.
//!
//! Deterministic stand-in for the remote suggestion provider: summary
//! generation, bullet enhancement and keyword suggestions computed locally
//! from fixed word lists. Selection uses hash-like index arithmetic on input
//! length instead of a random number generator so the same input always
//! produces the same output. That determinism is intentional; do not swap in
//! real randomness.

use regex::Regex;
use tracing::debug;

/// Past-tense verbs prepended to bullets that lack a strong opening.
const ENHANCEMENT_VERBS: &[&str] = &[
    "spearheaded",
    "orchestrated",
    "championed",
    "delivered",
    "engineered",
    "streamlined",
    "implemented",
    "optimized",
    "launched",
    "developed",
    "managed",
    "led",
    "designed",
    "improved",
    "accelerated",
    "transformed",
];

/// Outcome phrases appended to bullets that carry no numbers.
const OUTCOME_PHRASES: &[&str] = &[
    "improving overall team efficiency",
    "resulting in measurable productivity gains",
    "strengthening cross-team delivery",
    "driving consistent stakeholder satisfaction",
    "reducing turnaround time for key deliverables",
    "supporting sustained business growth",
];

/// Curated ATS terms merged into keyword suggestions.
const CURATED_KEYWORDS: &[&str] = &[
    "communication",
    "leadership",
    "problem solving",
    "project management",
    "teamwork",
    "collaboration",
    "agile",
    "time management",
    "adaptability",
    "analytical skills",
    "strategic planning",
    "attention to detail",
    "critical thinking",
    "stakeholder management",
    "process improvement",
];

/// Index arithmetic shared by verb and phrase selection. Deterministic in
/// the input length.
fn pick<'a>(list: &[&'a str], text_len: usize) -> &'a str {
    list[((list.len() + text_len) * 9301) % list.len()]
}

/// Local text-suggestion service. Construct explicitly and inject where
/// needed; there is no ambient instance.
pub struct TextAssistant {
    numeric_marker: Option<Regex>,
}

impl TextAssistant {
    pub fn new() -> Self {
        Self {
            numeric_marker: Regex::new(r"[\d%$]").ok(),
        }
    }

    /// Generate a professional summary paragraph.
    ///
    /// The template is selected by `job_title` length modulo the template
    /// count; `years_experience` is free text such as "5+". At most five
    /// skills from the comma/semicolon separated `skills_csv` are woven in.
    pub fn generate_summary(
        &self,
        job_title: &str,
        years_experience: &str,
        skills_csv: &str,
    ) -> String {
        let skills: Vec<&str> = skills_csv
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(5)
            .collect();
        let skills = if skills.is_empty() {
            "cross-functional skills".to_string()
        } else {
            skills.join(", ")
        };

        let selector = job_title.chars().count() % 3;
        debug!(selector, "Selected summary template");
        match selector {
            0 => format!(
                "Results-driven {job_title} with {years_experience} years of experience \
                 delivering high-impact work. Skilled in {skills}, with a proven record of \
                 turning requirements into measurable outcomes. Known for combining technical \
                 depth with clear communication across teams."
            ),
            1 => format!(
                "Accomplished {job_title} bringing {years_experience} years of hands-on \
                 experience. Core strengths include {skills}, applied to shipping reliable \
                 results on schedule. Collaborates effectively with stakeholders at every \
                 level to keep projects moving."
            ),
            _ => format!(
                "Versatile {job_title} with {years_experience} years of progressive \
                 experience. Expertise in {skills} supports a consistent record of process \
                 improvements and successful deliveries. Committed to continuous learning \
                 and raising the bar for quality."
            ),
        }
    }

    /// Strengthen a bullet point.
    ///
    /// Prepends a past-tense verb unless the bullet already opens with one
    /// from the built-in list, and appends an outcome phrase unless the text
    /// already carries a digit, percent or dollar figure. Whitespace is
    /// collapsed. Empty input comes back unchanged.
    pub fn enhance_bullet(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let text_len = text.chars().count();
        let mut result = text.trim().to_string();

        let first_word: String = result
            .split_whitespace()
            .next()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        let opens_strongly = ENHANCEMENT_VERBS
            .iter()
            .any(|verb| verb.eq_ignore_ascii_case(&first_word));

        if !opens_strongly {
            let verb = pick(ENHANCEMENT_VERBS, text_len);
            debug!(verb, "Prepending action verb");
            result = format!("{} {}", capitalize(verb), lowercase_first(&result));
        }

        let has_numbers = self
            .numeric_marker
            .as_ref()
            .map(|marker| marker.is_match(text))
            .unwrap_or(false);
        if !has_numbers {
            let phrase = pick(OUTCOME_PHRASES, text_len);
            debug!(phrase, "Appending outcome phrase");
            result = format!("{result} — {phrase}");
        }

        result.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Suggest up to ten ATS keywords for a job title.
    ///
    /// Title tokens longer than two characters come first, then curated
    /// terms, then tokens from up to ten caller-supplied skill strings.
    /// First occurrence wins; everything is lowercased.
    pub fn generate_keywords(&self, job_title: &str, extra_skills: &[String]) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        let mut add = |candidate: String, keywords: &mut Vec<String>| {
            if !candidate.is_empty() && !keywords.contains(&candidate) {
                keywords.push(candidate);
            }
        };

        for token in job_title.split(|c: char| !c.is_alphanumeric()) {
            if token.chars().count() > 2 {
                add(token.to_lowercase(), &mut keywords);
            }
        }

        for term in CURATED_KEYWORDS {
            add(term.to_string(), &mut keywords);
        }

        for skill in extra_skills.iter().take(10) {
            for part in skill.split([',', ';']) {
                add(part.trim().to_lowercase(), &mut keywords);
            }
        }

        keywords.truncate(10);
        keywords
    }
}

impl Default for TextAssistant {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
