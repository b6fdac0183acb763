//! Quality meter: rubric scores for a piece of portfolio content.

use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

use crate::errors::AppError;
use crate::llm_client::prompts::render_template;
use crate::llm_client::{generate_json, ContentGenerator, GenerationOptions};
use crate::tools::prompts::{SCORING_CONTENT_LIMIT, SCORING_PROMPT_TEMPLATE, SCORING_SYSTEM};

/// Rubric dimensions as returned by the model, nominally 0 – 100.
/// Numbers pass through as sent; a dimension the model left out stays absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMeterResult {
    pub scores: ContentScores,
    pub average: Number,
    pub feedback: Vec<String>,
}

/// Response schema handed to the model.
pub fn quality_meter_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scores": {
                "type": "OBJECT",
                "properties": {
                    "clarity": { "type": "INTEGER" },
                    "impact": { "type": "INTEGER" },
                    "specificity": { "type": "INTEGER" },
                    "credibility": { "type": "INTEGER" }
                }
            },
            "average": { "type": "INTEGER" },
            "feedback": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["scores", "average", "feedback"]
    })
}

/// Scores `content` against the portfolio rubric. Only the first
/// `SCORING_CONTENT_LIMIT` characters are sent.
pub async fn evaluate_quality(
    content: &str,
    llm: &dyn ContentGenerator,
) -> Result<QualityMeterResult, AppError> {
    let prompt = render_template(
        SCORING_PROMPT_TEMPLATE,
        &[("content", truncate_chars(content, SCORING_CONTENT_LIMIT))],
    );
    let options = GenerationOptions::default()
        .with_system_instruction(SCORING_SYSTEM)
        .with_response_schema(quality_meter_schema());

    Ok(generate_json::<QualityMeterResult>(llm, &prompt, &options).await?)
}

/// Prefix of at most `limit` characters, cut on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
