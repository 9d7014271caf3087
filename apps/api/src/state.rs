use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobCatalog;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `GroqClient` in production.
    pub llm: Arc<dyn CompletionProvider>,
    pub jobs: Arc<JobCatalog>,
    pub config: Config,
}
