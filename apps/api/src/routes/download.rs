//! Artifact download endpoint.
//!
//! Serves only bare filenames from inside the export directory; any
//! path component in the request is rejected so the endpoint cannot be
//! used to traverse out of it.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::export::artifact_path;
use crate::state::AppState;

/// GET /download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !is_safe_filename(&filename) {
        return Err(AppError::Validation(
            "filename must not contain path components".to_string(),
        ));
    }

    let path = artifact_path(&state.config.export_dir, &filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound("File not found".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains(['/', '\\'])
        && filename != "."
        && filename != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filenames() {
        assert!(is_safe_filename("resume_export_abc.html"));
        assert!(is_safe_filename("resume.docx"));
    }

    #[test]
    fn test_rejects_path_components() {
        assert!(!is_safe_filename("../etc/passwd"));
        assert!(!is_safe_filename("a/b.html"));
        assert!(!is_safe_filename("a\\b.html"));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename(""));
    }
}
