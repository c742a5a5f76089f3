use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: OpenAiClient.
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
}
