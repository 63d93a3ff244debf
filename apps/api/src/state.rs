use std::sync::Arc;

use crate::config::Config;
use crate::generation::ContentOrchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub orchestrator: Arc<ContentOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: ContentOrchestrator) -> Self {
        Self {
            config: orchestrator.config().clone(),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
