use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which text-generation provider the service forwards enhancement calls to.
/// Chosen once at startup — there is no per-request provider negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

/// Application configuration loaded from environment variables.
/// Startup aborts if the API key for the selected provider is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub ai_api_key: String,
    pub ai_model: String,
    /// External ATS scorer endpoint + key. Both must be set to enable it;
    /// otherwise every scoring call returns the constant fallback report.
    pub ats_api_url: Option<String>,
    pub ats_api_key: Option<String>,
    pub export_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = match std::env::var("AI_PROVIDER")
            .unwrap_or_else(|_| "gemini".to_string())
            .to_lowercase()
            .as_str()
        {
            "gemini" => Provider::Gemini,
            "openai" => Provider::OpenAi,
            other => bail!("AI_PROVIDER must be 'gemini' or 'openai', got '{other}'"),
        };

        let (ai_api_key, ai_model) = match provider {
            Provider::Gemini => (
                require_env("GEMINI_API_KEY")?,
                std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            ),
            Provider::OpenAi => (
                require_env("OPENAI_API_KEY")?,
                std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            ),
        };

        Ok(Config {
            provider,
            ai_api_key,
            ai_model,
            ats_api_url: std::env::var("ATS_API_URL").ok(),
            ats_api_key: std::env::var("ATS_API_KEY").ok(),
            export_dir: PathBuf::from(
                std::env::var("EXPORT_DIR").unwrap_or_else(|_| "exports".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
