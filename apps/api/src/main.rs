mod ai;
mod ats;
mod config;
mod errors;
mod export;
mod extract;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::{GeminiClient, OpenAiClient, TextGenerator};
use crate::ats::AtsScorer;
use crate::config::{Config, Provider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on a missing provider key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumelift API v{}", env!("CARGO_PKG_VERSION"));

    // Bind the generation provider once at startup
    let generator: Arc<dyn TextGenerator> = match config.provider {
        Provider::Gemini => Arc::new(GeminiClient::new(
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )),
        Provider::OpenAi => Arc::new(OpenAiClient::new(
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )),
    };
    info!(
        "AI client initialized (provider: {}, model: {})",
        generator.name(),
        config.ai_model
    );

    let ats = Arc::new(AtsScorer::new(
        config.ats_api_url.clone(),
        config.ats_api_key.clone(),
    ));
    if ats.external_configured() {
        info!("External ATS scorer configured");
    } else {
        info!("No external ATS scorer configured; serving constant fallback reports");
    }

    tokio::fs::create_dir_all(&config.export_dir).await?;
    info!("Export directory ready: {}", config.export_dir.display());

    let state = AppState {
        generator,
        ats,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
