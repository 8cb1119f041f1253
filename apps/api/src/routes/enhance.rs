//! Enhancement endpoints: multipart upload and manual entry.
//!
//! Both run the same pipeline: AI enhance → ATS score (on the raw
//! text) → structure extraction (on the enhanced text) → JSON.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::prompts::build_enhance_prompt;
use crate::errors::AppError;
use crate::extract::extract_structure;
use crate::models::{AtsReport, ExperienceEntry, StructuredResume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub original_text: String,
    pub enhanced_text: String,
    pub structured: StructuredResume,
    pub ats: AtsReport,
}

/// Freeform manual-entry payload; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ManualEntryRequest {
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

/// POST /enhance
///
/// Accepts a multipart upload with a `resume_file` field, decodes it as
/// lossy UTF-8, and runs the enhancement pipeline.
pub async fn handle_enhance(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EnhanceResponse>, AppError> {
    let mut raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume_file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read resume_file: {e}")))?;
            raw = Some(String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    let raw = raw.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if raw.trim().is_empty() {
        return Err(AppError::Validation("resume_file is empty".to_string()));
    }

    info!("Enhancing uploaded resume ({} bytes)", raw.len());
    run_pipeline(&state, raw).await.map(Json)
}

/// POST /manual-entry
///
/// Reconstructs plain resume text from freeform JSON fields and runs
/// the same pipeline as `/enhance`.
pub async fn handle_manual_entry(
    State(state): State<AppState>,
    Json(req): Json<ManualEntryRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let raw = reconstruct_text(&req);
    if raw.trim().is_empty() {
        return Err(AppError::Validation(
            "manual entry contained no resume content".to_string(),
        ));
    }

    info!("Enhancing manual entry ({} bytes)", raw.len());
    run_pipeline(&state, raw).await.map(Json)
}

async fn run_pipeline(state: &AppState, raw: String) -> Result<EnhanceResponse, AppError> {
    let enhanced = state
        .generator
        .generate(&build_enhance_prompt(&raw))
        .await?;
    let structured = extract_structure(&enhanced);
    let ats = state.ats.score(&raw).await;

    Ok(EnhanceResponse {
        original_text: raw,
        enhanced_text: enhanced,
        structured,
        ats,
    })
}

/// Flattens manual-entry fields back into plain resume text.
fn reconstruct_text(req: &ManualEntryRequest) -> String {
    let mut text = String::new();

    for header in [&req.name, &req.job_title] {
        if !header.trim().is_empty() {
            text.push_str(header.trim());
            text.push('\n');
        }
    }
    if !req.summary.trim().is_empty() {
        text.push('\n');
        text.push_str(req.summary.trim());
        text.push('\n');
    }
    if !req.skills.is_empty() {
        text.push_str("\nSkills: ");
        text.push_str(&req.skills.join(", "));
        text.push('\n');
    }
    for exp in &req.experience {
        text.push_str(&format!(
            "\n{} — {} ({})\n{}\n",
            exp.position, exp.company, exp.years, exp.description
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_text_includes_all_fields() {
        let req = ManualEntryRequest {
            name: "Jane Doe".to_string(),
            job_title: "Engineer".to_string(),
            summary: "Ships things".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                position: "Dev".to_string(),
                company: "Acme".to_string(),
                years: "2020-2023".to_string(),
                description: "Built APIs".to_string(),
            }],
        };
        let text = reconstruct_text(&req);
        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("Skills: Rust, SQL"));
        assert!(text.contains("Dev — Acme (2020-2023)"));
        assert!(text.contains("Built APIs"));
    }

    #[test]
    fn test_reconstruct_text_empty_request() {
        assert!(reconstruct_text(&ManualEntryRequest::default())
            .trim()
            .is_empty());
    }
}
