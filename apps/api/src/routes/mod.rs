pub mod download;
pub mod enhance;
pub mod export;
pub mod health;
pub mod score;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Enhancement pipeline
        .route("/enhance", post(enhance::handle_enhance))
        .route("/manual-entry", post(enhance::handle_manual_entry))
        // Scoring
        .route("/ats-score", post(score::handle_ats_score))
        .route("/score-tracker", get(score::handle_score_tracker))
        .route("/feedback-chat", post(score::handle_feedback_chat))
        // Export + artifact download
        .route("/export/html", post(export::handle_export_html))
        .route("/export/docx", post(export::handle_export_docx))
        .route("/export/pdf", post(export::handle_export_pdf))
        .route("/download/:filename", get(download::handle_download))
        .with_state(state)
}
