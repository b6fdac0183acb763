//! Axum route handlers for the AI tools.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gherkin::{
    extract_gherkin, parse_feature, render_architecture_diagram, strip_mermaid_blocks, visualize,
    DiagramOutcome, Feature, Visualization,
};
use crate::state::AppState;
use crate::tools::evaluation::{evaluate_quality, QualityMeterResult};
use crate::tools::generator::{
    explain_java_code, generate_architecture_design, generate_quality_blueprint, review_java_code,
};
use crate::tools::progress::{snapshot, LoadingSnapshot, STAGE_INTERVAL};
use crate::tools::storyteller::{generate_project_story, StorytellerResult};
use crate::tools::{AiTool, ToolDescriptor};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ToolInputRequest {
    pub input: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub project_name: String,
    pub role: String,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadingQuery {
    pub elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ToolCatalogResponse {
    pub stage_interval_ms: u64,
    pub tools: Vec<ToolDescriptor>,
}

/// Common envelope for the free-text tools.
#[derive(Debug, Serialize)]
pub struct ToolRunResponse {
    pub run_id: Uuid,
    pub tool: AiTool,
    pub output: String,
    /// `output` with Mermaid blocks removed, for the clipboard.
    pub copyable_output: String,
    pub generated_at: DateTime<Utc>,
}

impl ToolRunResponse {
    fn new(run_id: Uuid, tool: AiTool, output: String) -> Self {
        Self {
            run_id,
            tool,
            copyable_output: strip_mermaid_blocks(&output),
            output,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlueprintResponse {
    #[serde(flatten)]
    pub run: ToolRunResponse,
    /// The Gherkin section pulled out of `output`; empty when none was found.
    pub gherkin: String,
    pub feature: Feature,
    pub visualization: Visualization,
}

#[derive(Debug, Serialize)]
pub struct ArchitectureResponse {
    #[serde(flatten)]
    pub run: ToolRunResponse,
    pub diagram: DiagramOutcome,
}

#[derive(Debug, Serialize)]
pub struct StructuredRunResponse<T> {
    pub run_id: Uuid,
    pub tool: AiTool,
    pub result: T,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tools
pub async fn handle_list_tools() -> Json<ToolCatalogResponse> {
    Json(ToolCatalogResponse {
        stage_interval_ms: STAGE_INTERVAL.as_millis() as u64,
        tools: AiTool::INTERACTIVE
            .into_iter()
            .map(ToolDescriptor::for_tool)
            .collect(),
    })
}

/// GET /api/v1/tools/:tool/loading?elapsed_ms=
///
/// Which loading message to show after `elapsed_ms` in flight.
pub async fn handle_loading_stage(
    Path(tool): Path<AiTool>,
    Query(query): Query<LoadingQuery>,
) -> Json<LoadingSnapshot> {
    Json(snapshot(tool, Duration::from_millis(query.elapsed_ms)))
}

/// POST /api/v1/tools/blueprint
///
/// Returns the raw blueprint plus its Gherkin section, parsed and laid out.
pub async fn handle_blueprint(
    State(state): State<AppState>,
    Json(request): Json<ToolInputRequest>,
) -> Result<Json<BlueprintResponse>, AppError> {
    let run_id = start_run(AiTool::QualityBlueprint, &request.input)?;

    let output = generate_quality_blueprint(&request.input, state.llm.as_ref()).await?;
    let gherkin = extract_gherkin(&output);
    let feature = parse_feature(&gherkin);
    let visualization = visualize(&feature);

    info!(
        "Run {run_id}: blueprint with {} scenario(s)",
        feature.scenarios.len()
    );

    Ok(Json(BlueprintResponse {
        run: ToolRunResponse::new(run_id, AiTool::QualityBlueprint, output),
        gherkin,
        feature,
        visualization,
    }))
}

/// POST /api/v1/tools/architecture
pub async fn handle_architecture(
    State(state): State<AppState>,
    Json(request): Json<ToolInputRequest>,
) -> Result<Json<ArchitectureResponse>, AppError> {
    let run_id = start_run(AiTool::ArchitectureDesign, &request.input)?;

    let output = generate_architecture_design(&request.input, state.llm.as_ref()).await?;
    let diagram = render_architecture_diagram(&output, state.diagram_renderer.as_ref());

    Ok(Json(ArchitectureResponse {
        run: ToolRunResponse::new(run_id, AiTool::ArchitectureDesign, output),
        diagram,
    }))
}

/// POST /api/v1/tools/review
pub async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<ToolInputRequest>,
) -> Result<Json<ToolRunResponse>, AppError> {
    let run_id = start_run(AiTool::CodeReview, &request.input)?;
    let output = review_java_code(&request.input, state.llm.as_ref()).await?;
    Ok(Json(ToolRunResponse::new(run_id, AiTool::CodeReview, output)))
}

/// POST /api/v1/tools/explain
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<ToolInputRequest>,
) -> Result<Json<ToolRunResponse>, AppError> {
    let run_id = start_run(AiTool::CodeExplanation, &request.input)?;
    let output = explain_java_code(&request.input, state.llm.as_ref()).await?;
    Ok(Json(ToolRunResponse::new(run_id, AiTool::CodeExplanation, output)))
}

/// POST /api/v1/tools/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<StructuredRunResponse<QualityMeterResult>>, AppError> {
    let run_id = start_run(AiTool::ContentScoring, &request.content)?;
    let result = evaluate_quality(&request.content, state.llm.as_ref()).await?;

    info!("Run {run_id}: content scored {}", result.average);

    Ok(Json(StructuredRunResponse {
        run_id,
        tool: AiTool::ContentScoring,
        result,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/tools/story
pub async fn handle_story(
    State(state): State<AppState>,
    Json(request): Json<StoryRequest>,
) -> Result<Json<StructuredRunResponse<StorytellerResult>>, AppError> {
    if request.project_name.trim().is_empty() {
        return Err(AppError::Validation(
            "project_name cannot be empty".to_string(),
        ));
    }
    let run_id = start_run(AiTool::ProjectStory, &request.notes)?;
    let result = generate_project_story(
        &request.project_name,
        &request.role,
        &request.notes,
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(StructuredRunResponse {
        run_id,
        tool: AiTool::ProjectStory,
        result,
        generated_at: Utc::now(),
    }))
}

/// Rejects blank input and assigns the run id used in logs and the response.
fn start_run(tool: AiTool, input: &str) -> Result<Uuid, AppError> {
    if input.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "{} input cannot be empty",
            tool.label()
        )));
    }
    let run_id = Uuid::new_v4();
    info!("Run {run_id}: starting {tool:?} ({} chars)", input.chars().count());
    Ok(run_id)
}
