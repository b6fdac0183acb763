//! Flow layout for a parsed feature.
//!
//! Produces a render-ready description (positions, tones, connectors) that the
//! front-end draws as-is. A feature with no scenarios becomes an explicit empty
//! state rather than an empty canvas.

use serde::{Deserialize, Serialize};

use crate::gherkin::parser::{Feature, Scenario, Step};

pub const EMPTY_STATE_MESSAGE: &str = "No valid Gherkin found for visualization";

/// Horizontal anchor of the feature root, in percent.
const ROOT_X_PERCENT: f32 = 50.0;
/// Height of the connector band between the root and the scenario row, in px.
const CONNECTOR_HEIGHT_PX: u32 = 96;
/// Vertical position of both Bezier control points, in px.
const CONNECTOR_CONTROL_Y_PX: u32 = 50;

/// Visual treatment of a step, keyed by its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepTone {
    Given,
    When,
    Then,
    /// And, But and anything unrecognized.
    Neutral,
}

impl StepTone {
    pub fn for_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "given" => StepTone::Given,
            "when" => StepTone::When,
            "then" => StepTone::Then,
            _ => StepTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepNode {
    pub keyword: String,
    pub text: String,
    pub tone: StepTone,
    /// First character of the keyword, shown in the step bubble.
    pub badge: String,
    /// True for every step except the last, which has nothing to connect to.
    pub connects_to_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCard {
    /// 1-based position in the row.
    pub ordinal: usize,
    pub name: String,
    pub step_count: usize,
    /// Horizontal slot center, in percent of the available width.
    pub x_percent: f32,
    /// SVG path from the feature root down to this card.
    pub connector_path: String,
    pub steps: Vec<StepNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLayout {
    pub feature_name: String,
    /// Width of each slot, `100 / (scenario_count + 1)`.
    pub slot_spacing_percent: f32,
    pub scenarios: Vec<ScenarioCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visualization {
    Flow(FlowLayout),
    Empty { message: String },
}

/// Lays out `feature` for the flow view.
pub fn visualize(feature: &Feature) -> Visualization {
    if feature.scenarios.is_empty() {
        return Visualization::Empty {
            message: EMPTY_STATE_MESSAGE.to_string(),
        };
    }

    let spacing = slot_spacing(feature.scenarios.len());
    let scenarios = feature
        .scenarios
        .iter()
        .enumerate()
        .map(|(idx, scenario)| scenario_card(idx, scenario, spacing))
        .collect();

    Visualization::Flow(FlowLayout {
        feature_name: feature.name.clone(),
        slot_spacing_percent: spacing,
        scenarios,
    })
}

fn slot_spacing(scenario_count: usize) -> f32 {
    100.0 / (scenario_count as f32 + 1.0)
}

fn scenario_card(idx: usize, scenario: &Scenario, spacing: f32) -> ScenarioCard {
    let x_percent = (idx as f32 + 1.0) * spacing;
    let last = scenario.steps.len().saturating_sub(1);

    ScenarioCard {
        ordinal: idx + 1,
        name: scenario.name.clone(),
        step_count: scenario.steps.len(),
        x_percent,
        connector_path: connector_path(x_percent),
        steps: scenario
            .steps
            .iter()
            .enumerate()
            .map(|(s_idx, step)| step_node(step, s_idx < last))
            .collect(),
    }
}

fn step_node(step: &Step, connects_to_next: bool) -> StepNode {
    StepNode {
        keyword: step.keyword.clone(),
        text: step.text.clone(),
        tone: StepTone::for_keyword(&step.keyword),
        badge: step.keyword.chars().next().map(String::from).unwrap_or_default(),
        connects_to_next,
    }
}

/// Cubic curve from the root anchor to a slot center.
fn connector_path(x_percent: f32) -> String {
    format!(
        "M {root}% 0 C {root}% {mid}, {x}% {mid}, {x}% {end}",
        root = ROOT_X_PERCENT,
        mid = CONNECTOR_CONTROL_Y_PX,
        x = format_percent(x_percent),
        end = CONNECTOR_HEIGHT_PX,
    )
}

/// Trims float noise so `33.333332` prints as `33.33`.
fn format_percent(value: f32) -> String {
    let rounded = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
