//! Resume scoring and local text-heuristics engine.
//!
//! Estimates how well a resume will fare with Applicant Tracking Systems
//! and offers deterministic, fully offline text suggestions. All entry
//! points are synchronous, take snapshots by reference and never mutate
//! their input.

pub mod heuristics;
pub mod scoring;
pub mod storage;
pub mod types;

pub use heuristics::TextAssistant;
pub use scoring::AtsScorer;
pub use types::{ResumeDocument, ScoreResult};

/// Convenience function for one-off scoring with the default word lists.
pub fn score_resume(resume: &ResumeDocument) -> ScoreResult {
    AtsScorer::new().calculate_score(resume)
}
