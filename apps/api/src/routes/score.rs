//! Scoring endpoints: direct ATS scoring, the hard-coded score-tracker
//! history, and the single-turn feedback chat relay.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::prompts::build_feedback_prompt;
use crate::errors::AppError;
use crate::models::{AtsReport, ScoreSnapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackChatResponse {
    pub reply: String,
}

/// POST /ats-score
///
/// Scores the given text directly. With no external scorer configured
/// this is a constant-output fallback, so repeated calls are idempotent.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(req): Json<AtsScoreRequest>,
) -> Result<Json<AtsReport>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    Ok(Json(state.ats.score(&req.resume_text).await))
}

/// POST /feedback-chat
///
/// Single-turn relay to the generation provider. No conversation state
/// is kept between calls.
pub async fn handle_feedback_chat(
    State(state): State<AppState>,
    Json(req): Json<FeedbackChatRequest>,
) -> Result<Json<FeedbackChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    let reply = state
        .generator
        .generate(&build_feedback_prompt(&req.message))
        .await?;
    Ok(Json(FeedbackChatResponse { reply }))
}

/// GET /score-tracker
///
/// Returns the hard-coded score history. There is no persistence behind
/// this endpoint; the list is a fixed demo payload.
pub async fn handle_score_tracker() -> Json<Vec<ScoreSnapshot>> {
    Json(score_history())
}

fn score_history() -> Vec<ScoreSnapshot> {
    [
        ("2024-01-05", 61, 55),
        ("2024-02-12", 67, 60),
        ("2024-03-20", 72, 66),
        ("2024-04-28", 78, 71),
    ]
    .into_iter()
    .map(|(date, overall_score, keyword_score)| ScoreSnapshot {
        date: date.to_string(),
        overall_score,
        keyword_score,
    })
    .collect()
}
