//! Free-text tools: quality blueprint, architecture design, code review, code explanation.
//!
//! Each builds its prompt, makes one call and returns the text unmodified,
//! substituting a fixed message when the model answers with nothing.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::render_template;
use crate::llm_client::{ContentGenerator, GenerationOptions};
use crate::tools::prompts::{
    ARCHITECTURE_PROMPT_TEMPLATE, BLUEPRINT_PROMPT_TEMPLATE, EXPLAIN_PROMPT_TEMPLATE,
    REVIEW_PROMPT_TEMPLATE,
};
use crate::tools::AiTool;

/// Gherkin scenarios plus a Java page object for `requirement`.
pub async fn generate_quality_blueprint(
    requirement: &str,
    llm: &dyn ContentGenerator,
) -> Result<String, AppError> {
    let prompt = render_template(BLUEPRINT_PROMPT_TEMPLATE, &[("requirement", requirement)]);
    let options = GenerationOptions::default()
        .with_temperature(0.5)
        .with_top_p(0.8);
    run_text_tool(AiTool::QualityBlueprint, &prompt, &options, llm).await
}

/// Mermaid diagram, rationale and stack for `requirement`.
pub async fn generate_architecture_design(
    requirement: &str,
    llm: &dyn ContentGenerator,
) -> Result<String, AppError> {
    let prompt = render_template(ARCHITECTURE_PROMPT_TEMPLATE, &[("requirement", requirement)]);
    let options = GenerationOptions::default().with_temperature(0.4);
    run_text_tool(AiTool::ArchitectureDesign, &prompt, &options, llm).await
}

pub async fn review_java_code(code: &str, llm: &dyn ContentGenerator) -> Result<String, AppError> {
    let prompt = render_template(REVIEW_PROMPT_TEMPLATE, &[("code", code)]);
    let options = GenerationOptions::default().with_temperature(0.3);
    run_text_tool(AiTool::CodeReview, &prompt, &options, llm).await
}

pub async fn explain_java_code(code: &str, llm: &dyn ContentGenerator) -> Result<String, AppError> {
    let prompt = render_template(EXPLAIN_PROMPT_TEMPLATE, &[("code", code)]);
    let options = GenerationOptions::default().with_temperature(0.3);
    run_text_tool(AiTool::CodeExplanation, &prompt, &options, llm).await
}

async fn run_text_tool(
    tool: AiTool,
    prompt: &str,
    options: &GenerationOptions,
    llm: &dyn ContentGenerator,
) -> Result<String, AppError> {
    let text = llm.generate(prompt, options).await?;
    if text.is_empty() {
        debug!("{tool:?} returned no text; using fallback");
        return Ok(tool.empty_output_fallback().to_string());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CannedGenerator, CannedReply};

    #[tokio::test]
    async fn test_blueprint_embeds_requirement_and_sampling() {
        let llm = CannedGenerator::text("### GHERKIN SCENARIOS\nFeature: Checkout");
        let out = generate_quality_blueprint("checkout with a discount code", &llm)
            .await
            .unwrap();

        assert_eq!(out, "### GHERKIN SCENARIOS\nFeature: Checkout");
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let (prompt, options) = &calls[0];
        assert!(prompt.contains("\"checkout with a discount code\""));
        assert!(prompt.contains("### JAVA PAGE OBJECT"));
        assert_eq!(options.temperature, Some(0.5));
        assert_eq!(options.top_p, Some(0.8));
        assert!(options.response_schema.is_none());
    }

    #[tokio::test]
    async fn test_architecture_uses_lower_temperature() {
        let llm = CannedGenerator::text("```mermaid\ngraph TD\n```");
        generate_architecture_design("notification service", &llm)
            .await
            .unwrap();
        let (prompt, options) = &llm.calls()[0];
        assert!(prompt.contains("notification service"));
        assert_eq!(options.temperature, Some(0.4));
        assert_eq!(options.top_p, None);
    }

    #[tokio::test]
    async fn test_review_and_explain_wrap_code_in_java_fence() {
        let code = "public void run() {}";
        let llm = CannedGenerator::text("looks fine");
        review_java_code(code, &llm).await.unwrap();
        explain_java_code(code, &llm).await.unwrap();

        for (prompt, options) in llm.calls() {
            assert!(prompt.contains("```java\npublic void run() {}\n```"));
            assert_eq!(options.temperature, Some(0.3));
        }
    }

    #[tokio::test]
    async fn test_code_with_braces_is_inserted_verbatim() {
        let llm = CannedGenerator::text("ok");
        review_java_code("Map<String, {code}> m;", &llm).await.unwrap();
        assert!(llm.calls()[0].0.contains("Map<String, {code}> m;"));
    }

    #[tokio::test]
    async fn test_empty_output_uses_tool_fallback() {
        let llm = CannedGenerator::text("");
        assert_eq!(
            generate_quality_blueprint("x", &llm).await.unwrap(),
            "Analysis failed."
        );
        assert_eq!(
            generate_architecture_design("x", &llm).await.unwrap(),
            "Architecture design failed."
        );
        assert_eq!(review_java_code("x", &llm).await.unwrap(), "Review failed.");
        assert_eq!(explain_java_code("x", &llm).await.unwrap(), "Explanation failed.");
    }

    #[tokio::test]
    async fn test_missing_credential_is_not_a_result() {
        let llm = CannedGenerator::new(CannedReply::MissingKey);
        let result = review_java_code("class A {}", &llm).await;
        assert!(matches!(result, Err(AppError::MissingCredential)));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_as_llm_error() {
        let llm = CannedGenerator::new(CannedReply::Upstream(500));
        let result = explain_java_code("class A {}", &llm).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
