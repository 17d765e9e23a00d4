use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerationBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generation backend behind the trait object so tests can run the
    /// full HTTP surface against a canned backend.
    pub llm: Arc<dyn GenerationBackend>,
    pub config: Config,
}
