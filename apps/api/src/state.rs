use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::ats::AtsScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The generator is an injected `Arc<dyn TextGenerator>` rather than a
/// process-global singleton so provider backends swap at startup and
/// tests can substitute a mock.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub ats: Arc<AtsScorer>,
    pub config: Config,
}
