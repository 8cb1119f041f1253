//! Structure extraction — heuristically lifts a `StructuredResume` out
//! of enhanced text.
//!
//! This is intentionally shallow: header lines for name/title, a
//! known-skill table scan, and year-range detection for experience
//! rows. Anything undetectable falls back to the placeholder values so
//! export always has a complete record. Real resume parsing is the
//! extension point here.

use crate::models::{ExperienceEntry, StructuredResume};

const SUMMARY_CHARS: usize = 300;

/// Skill table scanned against the text, output order preserved.
const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Rust",
    "Go",
    "Java",
    "C++",
    "C#",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "GCP",
    "Azure",
    "Git",
    "Linux",
    "GraphQL",
    "Terraform",
];

pub fn extract_structure(enhanced: &str) -> StructuredResume {
    let lines: Vec<&str> = enhanced.lines().collect();

    StructuredResume {
        name: extract_name(&lines),
        job_title: extract_job_title(&lines),
        summary: enhanced.chars().take(SUMMARY_CHARS).collect(),
        skills: extract_skills(enhanced),
        experience: extract_experience(&lines),
    }
}

fn clean_header(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['#', '*', '-', '•'])
        .trim()
}

/// First non-empty line, if it plausibly looks like a name.
fn extract_name(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| clean_header(l))
        .find(|l| !l.is_empty())
        .filter(|l| l.len() <= 60 && l.split_whitespace().count() <= 5 && !l.ends_with('.'))
        .map(|l| l.to_string())
        .unwrap_or_else(|| "Your Name".to_string())
}

/// Second non-empty line, if it plausibly looks like a title.
fn extract_job_title(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| clean_header(l))
        .filter(|l| !l.is_empty())
        .nth(1)
        .filter(|l| l.len() <= 80 && l.split_whitespace().count() <= 8 && !l.ends_with('.'))
        .map(|l| l.to_string())
        .unwrap_or_else(|| "Job Title".to_string())
}

fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: std::collections::HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let found: Vec<String> = KNOWN_SKILLS
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            if needle.chars().all(|c| c.is_alphanumeric()) {
                // token match keeps "Go" from firing on "Google"
                tokens.contains(needle.as_str())
            } else {
                lowered.contains(&needle)
            }
        })
        .map(|s| s.to_string())
        .collect();

    if found.is_empty() {
        vec![
            "Python".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
        ]
    } else {
        found
    }
}

fn extract_experience(lines: &[&str]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some((start, end)) = find_year_range(line) else {
            continue;
        };
        let years = line[start..end].to_string();
        let prefix = line[..start]
            .trim()
            .trim_end_matches(['(', '—', '–', '-', ',', '|'])
            .trim();
        let (position, company) = split_position_company(prefix);

        let description = lines[idx + 1..]
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty() && find_year_range(l).is_none())
            .unwrap_or("Developed backend services and APIs.")
            .to_string();

        entries.push(ExperienceEntry {
            position,
            company,
            years,
            description,
        });
    }

    if entries.is_empty() {
        entries.push(ExperienceEntry {
            position: "Software Developer".to_string(),
            company: "Tech Corp".to_string(),
            years: "2021-2024".to_string(),
            description: "Developed backend services and APIs.".to_string(),
        });
    }

    entries
}

fn split_position_company(prefix: &str) -> (String, String) {
    for sep in [" — ", " – ", " - ", " at ", " @ ", ", "] {
        if let Some((position, company)) = prefix.split_once(sep) {
            let position = position.trim();
            let company = company.trim();
            if !position.is_empty() && !company.is_empty() {
                return (position.to_string(), company.to_string());
            }
        }
    }
    let position = if prefix.is_empty() {
        "Software Developer".to_string()
    } else {
        prefix.to_string()
    };
    (position, "Tech Corp".to_string())
}

/// Locates a `YYYY-YYYY` or `YYYY-present` span, returning byte offsets.
fn find_year_range(line: &str) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let n = chars.len();

    for i in 0..n {
        if i + 4 > n
            || !chars[i..i + 4].iter().all(|(_, c)| c.is_ascii_digit())
            || (i + 4 < n && chars[i + 4].1.is_ascii_digit())
            || (i > 0 && chars[i - 1].1.is_ascii_digit())
        {
            continue;
        }

        let mut j = i + 4;
        while j < n && chars[j].1 == ' ' {
            j += 1;
        }
        if j >= n || !matches!(chars[j].1, '-' | '–' | '—') {
            continue;
        }
        j += 1;
        while j < n && chars[j].1 == ' ' {
            j += 1;
        }

        if j + 4 <= n && chars[j..j + 4].iter().all(|(_, c)| c.is_ascii_digit()) {
            let end = chars.get(j + 4).map(|(o, _)| *o).unwrap_or(line.len());
            return Some((chars[i].0, end));
        }

        let rest: String = chars[j..].iter().map(|(_, c)| *c).collect();
        if rest.to_lowercase().starts_with("present") {
            let end = chars.get(j + 7).map(|(o, _)| *o).unwrap_or(line.len());
            return Some((chars[i].0, end));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\nSenior Backend Engineer\n\n\
        Experienced engineer shipping Rust and Python services on Kubernetes.\n\n\
        Software Engineer — Acme Corp (2020-2023)\n\
        Built payment APIs handling 2M requests/day.\n\n\
        Backend Intern at Widgets Inc (2019 - 2020)\n\
        Automated deployment pipelines with Docker.\n";

    #[test]
    fn test_extracts_header_name_and_title() {
        let resume = extract_structure(SAMPLE);
        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.job_title, "Senior Backend Engineer");
    }

    #[test]
    fn test_summary_is_prefix_of_input() {
        let resume = extract_structure(SAMPLE);
        assert!(SAMPLE.starts_with(&resume.summary));
        let long = "x".repeat(1000);
        assert_eq!(extract_structure(&long).summary.chars().count(), 300);
    }

    #[test]
    fn test_skills_found_in_table_order() {
        let resume = extract_structure(SAMPLE);
        assert_eq!(resume.skills, vec!["Python", "Rust", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_go_requires_token_match() {
        let skills = extract_skills("Search engineer at Google using Python");
        assert!(!skills.contains(&"Go".to_string()));
        assert!(skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_experience_rows_from_year_ranges() {
        let resume = extract_structure(SAMPLE);
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.experience[0].position, "Software Engineer");
        assert_eq!(resume.experience[0].company, "Acme Corp");
        assert_eq!(resume.experience[0].years, "2020-2023");
        assert_eq!(
            resume.experience[0].description,
            "Built payment APIs handling 2M requests/day."
        );
        assert_eq!(resume.experience[1].company, "Widgets Inc");
    }

    #[test]
    fn test_year_range_accepts_present() {
        assert!(find_year_range("Engineer (2021-present)").is_some());
        assert!(find_year_range("Engineer since 2021").is_none());
        assert!(find_year_range("ID 12345-6789").is_none());
    }

    #[test]
    fn test_empty_input_falls_back_to_placeholders() {
        let resume = extract_structure("");
        assert_eq!(resume.name, "Your Name");
        assert_eq!(resume.job_title, "Job Title");
        assert_eq!(resume.skills, vec!["Python", "React", "Node.js"]);
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].company, "Tech Corp");
    }
}
