// src/types/resume.rs
//! Resume document structures shared by the scorer, the text assistant and
//! the storage layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A full resume snapshot. The engine treats this as read-only input; the
/// owning UI/storage layer is the only writer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Skill names grouped by free-form category. Deduplication within a
    /// category is the owning layer's job, not enforced here.
    pub skills: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When true the position is ongoing and `end_date` is ignored.
    pub current: bool,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
}

impl ResumeDocument {
    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.skills.values().map(|list| list.len()).sum()
    }
}
