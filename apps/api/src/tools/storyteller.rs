//! Project storyteller: turns raw project notes into portfolio and career copy.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::llm_client::prompts::render_template;
use crate::llm_client::{generate_json, ContentGenerator, GenerationOptions};
use crate::tools::prompts::{STORY_PROMPT_TEMPLATE, STORY_SYSTEM};

/// Parts of the STAR story; any the model omits stay absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorytellerResult {
    pub portfolio_description: String,
    pub star_format: StarFormat,
    pub resume_bullets: Vec<String>,
    pub linkedin_post: String,
}

pub fn storyteller_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "portfolioDescription": { "type": "STRING" },
            "starFormat": {
                "type": "OBJECT",
                "properties": {
                    "situation": { "type": "STRING" },
                    "task": { "type": "STRING" },
                    "action": { "type": "STRING" },
                    "result": { "type": "STRING" }
                }
            },
            "resumeBullets": { "type": "ARRAY", "items": { "type": "STRING" } },
            "linkedinPost": { "type": "STRING" }
        },
        "required": ["portfolioDescription", "starFormat", "resumeBullets", "linkedinPost"]
    })
}

pub async fn generate_project_story(
    project_name: &str,
    role: &str,
    notes: &str,
    llm: &dyn ContentGenerator,
) -> Result<StorytellerResult, AppError> {
    let prompt = render_template(
        STORY_PROMPT_TEMPLATE,
        &[
            ("project_name", project_name),
            ("role", role),
            ("notes", notes),
        ],
    );
    let options = GenerationOptions::default()
        .with_system_instruction(STORY_SYSTEM)
        .with_response_schema(storyteller_schema());

    Ok(generate_json::<StorytellerResult>(llm, &prompt, &options).await?)
}
