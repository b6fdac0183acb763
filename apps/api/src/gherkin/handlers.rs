//! Axum route handlers for the scenario visualizer.
//!
//! Neither endpoint rejects malformed text: the parser degrades to an empty
//! tree, and the visualizer to its empty state.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::gherkin::parser::{parse_feature, Feature};
use crate::gherkin::visualizer::{visualize, Visualization};

#[derive(Debug, Deserialize)]
pub struct GherkinTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub feature: Feature,
}

#[derive(Debug, Serialize)]
pub struct VisualizeResponse {
    pub feature: Feature,
    pub visualization: Visualization,
}

/// POST /api/v1/gherkin/parse
pub async fn handle_parse(Json(request): Json<GherkinTextRequest>) -> Json<ParseResponse> {
    Json(ParseResponse {
        feature: parse_feature(&request.text),
    })
}

/// POST /api/v1/gherkin/visualize
pub async fn handle_visualize(
    Json(request): Json<GherkinTextRequest>,
) -> Json<VisualizeResponse> {
    let feature = parse_feature(&request.text);
    let visualization = visualize(&feature);
    Json(VisualizeResponse {
        feature,
        visualization,
    })
}
