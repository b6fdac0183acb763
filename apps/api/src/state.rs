use std::sync::Arc;

use crate::config::Config;
use crate::gherkin::DiagramRenderer;
use crate::llm_client::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: the Gemini `LlmClient`.
    pub llm: Arc<dyn ContentGenerator>,
    /// Turns Mermaid source from the architecture tool into markup.
    pub diagram_renderer: Arc<dyn DiagramRenderer>,
    pub config: Config,
}
