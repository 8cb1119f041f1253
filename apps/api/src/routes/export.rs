//! Export endpoints — one per renderer path (HTML, DOCX, PDF).

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::export::{docx, html, pdf};
use crate::models::StructuredResume;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Deserialize)]
pub struct PdfExportRequest {
    #[serde(flatten)]
    pub resume: StructuredResume,
    pub template: Option<String>,
}

fn attachment(filename: &str, content_type: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// POST /export/html
///
/// Writes the HTML artifact and returns its filename; the file is
/// fetched later via `/download/:filename`.
pub async fn handle_export_html(
    State(state): State<AppState>,
    Json(resume): Json<StructuredResume>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filename = html::write_html(&state.config.export_dir, &resume).await?;
    Ok(Json(json!({ "file": filename })))
}

/// POST /export/docx
///
/// Builds the DOCX artifact and streams it back as an attachment.
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Json(resume): Json<StructuredResume>,
) -> Result<Response, AppError> {
    let (filename, bytes) = docx::write_docx(&state.config.export_dir, &resume).await?;
    Ok(attachment(&filename, DOCX_CONTENT_TYPE, bytes))
}

/// POST /export/pdf
///
/// Compiles the selected LaTeX template and streams the PDF back.
/// An unknown `template` value is rejected before compilation.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(req): Json<PdfExportRequest>,
) -> Result<Response, AppError> {
    let (filename, bytes) = pdf::compile_pdf(
        &state.config.export_dir,
        &req.resume,
        req.template.as_deref(),
    )
    .await?;
    Ok(attachment(&filename, "application/pdf", bytes))
}
