//! Shared data models — the interchange shapes between enhancement,
//! scoring, and export. Everything here is request-scoped; nothing is
//! persisted beyond the export artifact files.

use serde::{Deserialize, Serialize};

/// Normalized resume record used by every export path and returned from
/// the enhancement pipeline. All fields default so freeform export
/// payloads are accepted without a strict schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub description: String,
}

/// ATS analysis report. Scores are 0–100; the list fields carry
/// human-readable findings. Fetched from an external scorer when one is
/// configured, otherwise the constant fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub overall_score: u8,
    pub keyword_score: u8,
    pub skill_match_score: u8,
    pub formatting_issues: Vec<String>,
    pub grammar_issues: Vec<String>,
    pub missing_hard_skills: Vec<String>,
    pub missing_soft_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// One point in the score-tracker history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub date: String,
    pub overall_score: u8,
    pub keyword_score: u8,
}
