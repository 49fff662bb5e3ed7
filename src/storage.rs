// src/storage.rs
//! JSON persistence for resume documents.
//!
//! The engine itself never touches disk; this is the collaborator surface
//! the CLI uses to read a snapshot and write one back.

use crate::types::ResumeDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a resume document from a JSON file. Missing fields default to
/// empty, matching how the scorer degrades.
pub fn load_resume(path: &Path) -> Result<ResumeDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume file: {}", path.display()))?;
    let resume: ResumeDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resume JSON: {}", path.display()))?;
    info!("Loaded resume from {}", path.display());
    Ok(resume)
}

/// Save a resume document as pretty-printed JSON.
pub fn save_resume(path: &Path, resume: &ResumeDocument) -> Result<()> {
    let json =
        serde_json::to_string_pretty(resume).context("Failed to serialize resume document")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write resume file: {}", path.display()))?;
    info!("Saved resume to {}", path.display());
    Ok(())
}
