//! DOCX export — builds a document tree mirroring the structured
//! record (name/title headings, Summary, Skills, Experience) with one
//! bullet per skill and one bullet plus description paragraph per
//! experience entry.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start,
};

use crate::errors::AppError;
use crate::export::{artifact_path, unique_filename};
use crate::models::StructuredResume;

const BULLET_NUM_ID: usize = 1;

// Run sizes are half-points: 48 = 24pt, 36 = 18pt, 28 = 14pt.
const NAME_SIZE: usize = 48;
const TITLE_SIZE: usize = 36;
const SECTION_SIZE: usize = 28;

fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(size))
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .numbering(NumberingId::new(BULLET_NUM_ID), IndentLevel::new(0))
}

fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

pub fn build_docx(resume: &StructuredResume) -> Docx {
    let mut docx = Docx::new()
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUM_ID).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUM_ID, BULLET_NUM_ID))
        .add_paragraph(heading(resume.name.as_str(), NAME_SIZE))
        .add_paragraph(heading(resume.job_title.as_str(), TITLE_SIZE))
        .add_paragraph(heading("Summary", SECTION_SIZE))
        .add_paragraph(body(resume.summary.as_str()))
        .add_paragraph(heading("Skills", SECTION_SIZE));

    for skill in &resume.skills {
        docx = docx.add_paragraph(bullet(skill.as_str()));
    }

    docx = docx.add_paragraph(heading("Experience", SECTION_SIZE));
    for exp in &resume.experience {
        let line = format!("{} — {} ({})", exp.position, exp.company, exp.years);
        docx = docx
            .add_paragraph(bullet(&line))
            .add_paragraph(body(exp.description.as_str()));
    }

    docx
}

/// Writes the DOCX artifact and returns `(filename, bytes)` so the
/// handler can stream the document back without re-reading the file.
pub async fn write_docx(
    export_dir: &Path,
    resume: &StructuredResume,
) -> Result<(String, Vec<u8>), AppError> {
    let mut cursor = Cursor::new(Vec::new());
    build_docx(resume)
        .build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Export(format!("failed to pack DOCX: {e}")))?;
    let bytes = cursor.into_inner();

    let filename = unique_filename("resume", "docx");
    let path = artifact_path(export_dir, &filename);
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("failed to write DOCX artifact {}", path.display()))?;

    Ok((filename, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    fn document_xml(resume: &StructuredResume) -> String {
        let xml = build_docx(resume).build();
        String::from_utf8(xml.document).unwrap()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn skills_only(n: usize) -> StructuredResume {
        StructuredResume {
            name: "Jane Doe".to_string(),
            job_title: "Engineer".to_string(),
            summary: "Ships things".to_string(),
            skills: (0..n).map(|i| format!("Skill {i}")).collect(),
            experience: Vec::new(),
        }
    }

    #[test]
    fn test_one_bullet_per_skill() {
        for n in [1, 3, 7] {
            let xml = document_xml(&skills_only(n));
            assert_eq!(count(&xml, "<w:numPr>"), n, "expected {n} skill bullets");
        }
    }

    #[test]
    fn test_one_heading_per_section() {
        let xml = document_xml(&skills_only(2));
        assert_eq!(count(&xml, "Summary"), 1);
        assert_eq!(count(&xml, "Skills"), 1);
        assert_eq!(count(&xml, "Experience"), 1);
    }

    #[test]
    fn test_experience_adds_bullet_and_description() {
        let mut resume = skills_only(1);
        resume.experience.push(ExperienceEntry {
            position: "Dev".to_string(),
            company: "Acme".to_string(),
            years: "2020-2023".to_string(),
            description: "Built APIs".to_string(),
        });
        let xml = document_xml(&resume);
        // one skill bullet + one experience bullet
        assert_eq!(count(&xml, "<w:numPr>"), 2);
        assert!(xml.contains("Dev — Acme (2020-2023)"));
        assert!(xml.contains("Built APIs"));
    }
}
