pub mod resume;
pub mod score;

pub use resume::{ContactInfo, EducationEntry, ExperienceEntry, ResumeDocument};
pub use score::{
    Category, CategoryScore, Grade, KeywordStats, ScoreBreakdown, ScoreResult, Severity,
    Suggestion,
};
