//! HTML export — substitutes structured fields into a fixed markup
//! skeleton and writes the artifact to the export directory.

use std::path::Path;

use anyhow::Context;

use crate::errors::AppError;
use crate::export::{artifact_path, unique_filename};
use crate::models::StructuredResume;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the fixed resume skeleton. Field values are escaped; the
/// skeleton itself is the only markup in the output.
pub fn render_html(resume: &StructuredResume) -> String {
    let skills: String = resume
        .skills
        .iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();

    let experience: String = resume
        .experience
        .iter()
        .map(|x| {
            format!(
                "<p><b>{}</b> — {} ({})<br>{}</p>",
                escape_html(&x.position),
                escape_html(&x.company),
                escape_html(&x.years),
                escape_html(&x.description),
            )
        })
        .collect();

    format!(
        "<html><body>\n\
         <h1>{}</h1>\n\
         <h2>{}</h2>\n\
         <p>{}</p>\n\
         <h3>Skills</h3>\n\
         <ul>{}</ul>\n\
         <h3>Experience</h3>\n\
         {}\n\
         </body></html>\n",
        escape_html(&resume.name),
        escape_html(&resume.job_title),
        escape_html(&resume.summary),
        skills,
        experience,
    )
}

/// Writes the rendered HTML artifact and returns its filename.
pub async fn write_html(export_dir: &Path, resume: &StructuredResume) -> Result<String, AppError> {
    let filename = unique_filename("resume_export", "html");
    let path = artifact_path(export_dir, &filename);
    tokio::fs::write(&path, render_html(resume))
        .await
        .with_context(|| format!("failed to write HTML artifact {}", path.display()))?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    fn sample() -> StructuredResume {
        StructuredResume {
            name: "Jane Doe".to_string(),
            job_title: "Engineer <3".to_string(),
            summary: "Ships things".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                position: "Dev".to_string(),
                company: "Acme & Co".to_string(),
                years: "2020-2023".to_string(),
                description: "Built APIs".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_contains_all_sections() {
        let html = render_html(&sample());
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("<h3>Skills</h3>"));
        assert!(html.contains("<h3>Experience</h3>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(html.contains("<li>SQL</li>"));
        assert!(html.contains("2020-2023"));
    }

    #[test]
    fn test_render_escapes_user_fields() {
        let html = render_html(&sample());
        assert!(html.contains("Engineer &lt;3"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(!html.contains("Engineer <3"));
    }
}
