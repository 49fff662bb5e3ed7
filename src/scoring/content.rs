// src/scoring/content.rs
//! Content category: contact completeness, summary, experience, education,
//! skills.

use crate::types::{Category, CategoryScore, ResumeDocument, Severity, Suggestion};

const MAX_SCORE: u32 = 40;

pub fn check(resume: &ResumeDocument) -> CategoryScore {
    let mut score = 0;
    let mut suggestions = Vec::new();

    // Contact information complete (10 pts)
    let required = [
        ("fullName", &resume.contact.full_name),
        ("email", &resume.contact.email),
        ("phone", &resume.contact.phone),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        score += 10;
    } else {
        suggestions.push(Suggestion::new(
            Category::Content,
            "Incomplete contact information",
            format!("Add missing contact details: {}", missing.join(", ")),
            Severity::High,
        ));
        score += (required.len() - missing.len()) as u32 * 10 / required.len() as u32;
    }

    // Professional summary present (10 pts)
    let summary_len = resume.summary.trim().chars().count();
    if summary_len > 50 {
        score += 10;
    } else if summary_len == 0 {
        suggestions.push(Suggestion::new(
            Category::Content,
            "Missing professional summary",
            "Add a professional summary highlighting your key qualifications",
            Severity::High,
        ));
    } else {
        score += 5;
        suggestions.push(Suggestion::new(
            Category::Content,
            "Professional summary is too brief",
            "Expand your summary to 3-5 sentences (aim for 50-150 words)",
            Severity::Medium,
        ));
    }

    // Work experience with dates (10 pts)
    if resume.experience.is_empty() {
        suggestions.push(Suggestion::new(
            Category::Content,
            "No work experience listed",
            "Add your work experience with detailed accomplishments",
            Severity::High,
        ));
    } else {
        let valid = resume
            .experience
            .iter()
            .filter(|exp| {
                !exp.title.is_empty() && !exp.company.is_empty() && !exp.start_date.is_empty()
            })
            .count();
        score += (valid * 10 / resume.experience.len()) as u32;

        if valid < resume.experience.len() {
            suggestions.push(Suggestion::new(
                Category::Content,
                "Incomplete work experience entries",
                "Ensure all experience entries have job title, company, and dates",
                Severity::High,
            ));
        }

        let has_bullets = resume.experience.iter().any(|exp| !exp.bullets.is_empty());
        if !has_bullets {
            suggestions.push(Suggestion::new(
                Category::Content,
                "No accomplishment bullets",
                "Add 3-5 bullet points for each role describing your achievements",
                Severity::High,
            ));
        }
    }

    // Education section present (5 pts)
    if resume.education.is_empty() {
        suggestions.push(Suggestion::new(
            Category::Content,
            "No education listed",
            "Add your educational background",
            Severity::Medium,
        ));
    } else {
        let valid = resume
            .education
            .iter()
            .filter(|edu| !edu.degree.is_empty() && !edu.institution.is_empty())
            .count();
        score += if valid > 0 { 5 } else { 2 };

        if valid < resume.education.len() {
            suggestions.push(Suggestion::new(
                Category::Content,
                "Incomplete education entries",
                "Include degree and institution for all education entries",
                Severity::Medium,
            ));
        }
    }

    // Skills section present (5 pts)
    let total_skills = resume.skill_count();
    if total_skills >= 5 {
        score += 5;
    } else if total_skills > 0 {
        score += 3;
        suggestions.push(Suggestion::new(
            Category::Content,
            "Limited skills listed",
            "Add more relevant skills (aim for at least 5-10 skills)",
            Severity::Medium,
        ));
    } else {
        suggestions.push(Suggestion::new(
            Category::Content,
            "No skills listed",
            "Add a skills section with relevant technical and soft skills",
            Severity::High,
        ));
    }

    CategoryScore::new(score, MAX_SCORE, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EducationEntry, ExperienceEntry};

    #[test]
    fn test_empty_resume_scores_zero() {
        let result = check(&ResumeDocument::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.max_score, 40);
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_partial_contact_gets_prorated_credit() {
        let mut resume = ResumeDocument::default();
        resume.contact.full_name = "Jane Doe".to_string();
        resume.contact.email = "jane@example.com".to_string();
        // floor(10 * 2/3) = 6
        let result = check(&resume);
        let contact_suggestion = result
            .suggestions
            .iter()
            .find(|s| s.issue == "Incomplete contact information")
            .expect("contact suggestion");
        assert!(contact_suggestion.suggestion.contains("phone"));
        assert!(!contact_suggestion.suggestion.contains("email"));
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_whitespace_contact_counts_as_missing() {
        let mut resume = ResumeDocument::default();
        resume.contact.full_name = "   ".to_string();
        let result = check(&resume);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_brief_summary_gets_half_credit() {
        let mut resume = ResumeDocument::default();
        resume.summary = "Software engineer.".to_string();
        let result = check(&resume);
        assert_eq!(result.score, 5);
        let suggestion = result
            .suggestions
            .iter()
            .find(|s| s.issue == "Professional summary is too brief")
            .expect("summary suggestion");
        assert_eq!(suggestion.severity, Severity::Medium);
    }

    #[test]
    fn test_long_summary_gets_full_credit() {
        let mut resume = ResumeDocument::default();
        resume.summary =
            "Software engineer with ten years of experience building data platforms.".to_string();
        assert_eq!(check(&resume).score, 10);
    }

    #[test]
    fn test_experience_ratio_floors() {
        let mut resume = ResumeDocument::default();
        resume.experience.push(ExperienceEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            ..Default::default()
        });
        resume.experience.push(ExperienceEntry {
            title: "Engineer".to_string(),
            ..Default::default()
        });
        resume.experience.push(ExperienceEntry::default());
        // floor(10 * 1/3) = 3, plus incomplete-entries and no-bullets flags
        let result = check(&resume);
        assert_eq!(result.score, 3);
        let issues: Vec<&str> = result.suggestions.iter().map(|s| s.issue.as_str()).collect();
        assert!(issues.contains(&"Incomplete work experience entries"));
        assert!(issues.contains(&"No accomplishment bullets"));
    }

    #[test]
    fn test_education_without_degree_gets_two_points() {
        let mut resume = ResumeDocument::default();
        resume.education.push(EducationEntry {
            institution: "State University".to_string(),
            ..Default::default()
        });
        let result = check(&resume);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_skill_thresholds() {
        let mut resume = ResumeDocument::default();
        resume.skills.insert(
            "Technical".to_string(),
            vec!["Rust".to_string(), "SQL".to_string()],
        );
        assert_eq!(check(&resume).score, 3);

        resume.skills.insert(
            "Tools".to_string(),
            vec!["Git".to_string(), "Docker".to_string(), "Linux".to_string()],
        );
        assert_eq!(check(&resume).score, 5);
    }
}
