//! PDF export — LaTeX template substitution compiled with `pdflatex`.
//!
//! The template is selected by name (`classic` | `modern` | `compact`,
//! default `classic`); an unknown name is a validation error and never
//! reaches the compiler. Structured fields are LaTeX-escaped and
//! substituted, including pre-rendered `\item` fragments for the skill
//! and experience lists. Compilation runs in a temporary directory; the
//! resulting binary is copied into the export directory and returned.

use std::path::Path;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::export::{artifact_path, unique_filename};
use crate::models::StructuredResume;

const TEX_FILENAME: &str = "resume.tex";
const PDF_FILENAME: &str = "resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfTemplate {
    Classic,
    Modern,
    Compact,
}

impl PdfTemplate {
    /// Resolves a request's `template` field. `None` selects the default.
    pub fn from_name(name: Option<&str>) -> Result<Self, AppError> {
        match name {
            None | Some("classic") => Ok(PdfTemplate::Classic),
            Some("modern") => Ok(PdfTemplate::Modern),
            Some("compact") => Ok(PdfTemplate::Compact),
            Some(other) => Err(AppError::Validation(format!(
                "unknown template '{other}', expected one of: classic, modern, compact"
            ))),
        }
    }

    fn source(&self) -> &'static str {
        match self {
            PdfTemplate::Classic => include_str!("../../templates/classic.tex"),
            PdfTemplate::Modern => include_str!("../../templates/modern.tex"),
            PdfTemplate::Compact => include_str!("../../templates/compact.tex"),
        }
    }
}

/// Escapes the LaTeX special characters in user-supplied text.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Substitutes structured fields into the template source.
pub fn render_latex(template: PdfTemplate, resume: &StructuredResume) -> String {
    let skill_items: String = resume
        .skills
        .iter()
        .map(|s| format!("\\item {}\n", escape_latex(s)))
        .collect();

    let experience_items: String = resume
        .experience
        .iter()
        .map(|x| {
            format!(
                "\\item \\textbf{{{}}} --- {} ({}) \\\\ {}\n",
                escape_latex(&x.position),
                escape_latex(&x.company),
                escape_latex(&x.years),
                escape_latex(&x.description),
            )
        })
        .collect();

    template
        .source()
        .replace("{{name}}", &escape_latex(&resume.name))
        .replace("{{job_title}}", &escape_latex(&resume.job_title))
        .replace("{{summary}}", &escape_latex(&resume.summary))
        .replace("{{skill_items}}", &skill_items)
        .replace("{{experience_items}}", &experience_items)
}

/// Renders and compiles the PDF, writes the artifact, and returns
/// `(filename, bytes)`. Compiler failure surfaces as an export error
/// carrying the tail of the pdflatex log.
pub async fn compile_pdf(
    export_dir: &Path,
    resume: &StructuredResume,
    template_name: Option<&str>,
) -> Result<(String, Vec<u8>), AppError> {
    let template = PdfTemplate::from_name(template_name)?;
    let latex = render_latex(template, resume);

    let workdir = tempfile::tempdir().context("failed to create PDF build directory")?;
    tokio::fs::write(workdir.path().join(TEX_FILENAME), &latex)
        .await
        .context("failed to write LaTeX source")?;

    debug!("Compiling {template:?} template in {}", workdir.path().display());

    let output = Command::new("pdflatex")
        .args(["-interaction=nonstopmode", "-halt-on-error", TEX_FILENAME])
        .current_dir(workdir.path())
        .output()
        .await
        .context("failed to spawn pdflatex (is it installed?)")?;

    if !output.status.success() {
        let log = String::from_utf8_lossy(&output.stdout);
        let tail: String = log
            .lines()
            .rev()
            .take(20)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join("\n");
        return Err(AppError::Export(format!("pdflatex failed: {tail}")));
    }

    let bytes = tokio::fs::read(workdir.path().join(PDF_FILENAME))
        .await
        .context("pdflatex succeeded but produced no PDF")?;

    let filename = unique_filename("resume", "pdf");
    let path = artifact_path(export_dir, &filename);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("failed to write PDF artifact {}", path.display()))?;

    info!("PDF compiled: {filename} ({} bytes)", bytes.len());
    Ok((filename, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    fn sample() -> StructuredResume {
        StructuredResume {
            name: "Jane Doe".to_string(),
            job_title: "R&D Engineer".to_string(),
            summary: "Ships 100% of the time".to_string(),
            skills: vec!["Rust".to_string(), "C#".to_string()],
            experience: vec![ExperienceEntry {
                position: "Dev".to_string(),
                company: "Acme_Co".to_string(),
                years: "2020-2023".to_string(),
                description: "Built APIs".to_string(),
            }],
        }
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let err = PdfTemplate::from_name(Some("fancy")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_default_template_is_classic() {
        assert_eq!(PdfTemplate::from_name(None).unwrap(), PdfTemplate::Classic);
    }

    #[test]
    fn test_escape_latex_specials() {
        assert_eq!(escape_latex("R&D 100%"), r"R\&D 100\%");
        assert_eq!(escape_latex("a_b"), r"a\_b");
        assert_eq!(escape_latex(r"C:\temp"), r"C:\textbackslash{}temp");
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        for template in [PdfTemplate::Classic, PdfTemplate::Modern, PdfTemplate::Compact] {
            let tex = render_latex(template, &sample());
            assert!(!tex.contains("{{"), "{template:?} left a placeholder");
            assert!(tex.contains("Jane Doe"));
            assert!(tex.contains(r"R\&D Engineer"));
            assert!(tex.contains(r"Ships 100\% of the time"));
            assert!(tex.contains(r"\item Rust"));
            assert!(tex.contains(r"Acme\_Co"));
        }
    }

    #[test]
    fn test_render_one_item_per_skill() {
        let tex = render_latex(PdfTemplate::Classic, &sample());
        // 2 skills + 1 experience entry
        assert_eq!(tex.matches(r"\item").count(), 3);
    }
}
