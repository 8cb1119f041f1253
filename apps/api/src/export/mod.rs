//! Export rendering — three independent paths (HTML, DOCX, PDF) from a
//! `StructuredResume` to an artifact file.
//!
//! Every artifact filename embeds a v4 UUID so concurrent exports never
//! race on a shared path; the download endpoint serves artifacts back
//! by filename from the configured export directory.

pub mod docx;
pub mod html;
pub mod pdf;

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Builds a collision-free artifact filename: `{stem}_{uuid}.{ext}`.
pub fn unique_filename(stem: &str, ext: &str) -> String {
    format!("{stem}_{}.{ext}", Uuid::new_v4())
}

pub fn artifact_path(export_dir: &Path, filename: &str) -> PathBuf {
    export_dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_filename_shape() {
        let name = unique_filename("resume_export", "html");
        assert!(name.starts_with("resume_export_"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_unique_filename_never_collides() {
        assert_ne!(
            unique_filename("resume", "pdf"),
            unique_filename("resume", "pdf")
        );
    }
}
