//! Architecture diagram rendering.
//!
//! The renderer lives in `AppState`; the default one hands the source to the
//! browser-side Mermaid runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::gherkin::extract::extract_mermaid;

pub const RENDER_FAILED_MESSAGE: &str = "Diagram rendering failed. Check syntax.";

#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    #[error("diagram source is empty")]
    EmptySource,
}

/// Turns Mermaid source into displayable markup.
pub trait DiagramRenderer: Send + Sync {
    fn render(&self, code: &str) -> Result<String, DiagramError>;
}

/// Default renderer: wraps the source in a `mermaid` container for the
/// browser-side Mermaid runtime to pick up.
pub struct MermaidMarkupRenderer;

impl DiagramRenderer for MermaidMarkupRenderer {
    fn render(&self, code: &str) -> Result<String, DiagramError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DiagramError::EmptySource);
        }
        Ok(format!(r#"<div class="mermaid">{}</div>"#, escape_html(code)))
    }
}

/// Outcome of rendering the diagram section of a model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiagramOutcome {
    Rendered { source: String, markup: String },
    Failed { source: String, message: String },
    /// The response had no ```` ```mermaid ```` block.
    Missing,
}

/// Finds the first Mermaid block in `output` and renders it.
/// Rendering errors degrade to a fixed message instead of failing the request.
pub fn render_architecture_diagram(output: &str, renderer: &dyn DiagramRenderer) -> DiagramOutcome {
    let Some(source) = extract_mermaid(output) else {
        return DiagramOutcome::Missing;
    };

    match renderer.render(&source) {
        Ok(markup) => DiagramOutcome::Rendered { source, markup },
        Err(e) => {
            warn!("Mermaid render failed: {e}");
            DiagramOutcome::Failed {
                source,
                message: RENDER_FAILED_MESSAGE.to_string(),
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
