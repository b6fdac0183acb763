pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gherkin::handlers as gherkin;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;
use crate::tools::handlers as tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio content
        .route("/api/v1/portfolio/projects", get(portfolio::handle_list_projects))
        .route(
            "/api/v1/portfolio/projects/:id",
            get(portfolio::handle_get_project),
        )
        .route("/api/v1/portfolio/skills", get(portfolio::handle_list_skills))
        // AI tools
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/:tool/loading", get(tools::handle_loading_stage))
        .route("/api/v1/tools/blueprint", post(tools::handle_blueprint))
        .route("/api/v1/tools/architecture", post(tools::handle_architecture))
        .route("/api/v1/tools/review", post(tools::handle_review))
        .route("/api/v1/tools/explain", post(tools::handle_explain))
        .route("/api/v1/tools/evaluate", post(tools::handle_evaluate))
        .route("/api/v1/tools/story", post(tools::handle_story))
        // Scenario visualizer
        .route("/api/v1/gherkin/parse", post(gherkin::handle_parse))
        .route("/api/v1/gherkin/visualize", post(gherkin::handle_visualize))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::gherkin::diagram::MermaidMarkupRenderer;
    use crate::test_support::{CannedGenerator, CannedReply};

    fn state_with(llm: Arc<CannedGenerator>) -> AppState {
        AppState {
            llm,
            diagram_renderer: Arc::new(MermaidMarkupRenderer),
            config: Config {
                gemini_api_key: Some("test-key".to_string()),
                gemini_api_base: "http://127.0.0.1:9".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (status, body) = send(router, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ai_tools_configured"], true);
    }

    #[tokio::test]
    async fn test_projects_filter_by_category() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (status, body) =
            send(router, get_req("/api/v1/portfolio/projects?category=Backend")).await;
        assert_eq!(status, StatusCode::OK);
        let projects = body.as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p["category"] == "Backend"));
    }

    #[tokio::test]
    async fn test_unknown_project_is_404() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (status, body) = send(router, get_req("/api/v1/portfolio/projects/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skills_filter_by_category() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (_, body) = send(router, get_req("/api/v1/portfolio/skills?category=Testing")).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Selenium", "Cucumber"]);
    }

    #[tokio::test]
    async fn test_tool_catalog_lists_four_tabs() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (_, body) = send(router, get_req("/api/v1/tools")).await;
        assert_eq!(body["stage_interval_ms"], 1500);
        let ids: Vec<&str> = body["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "quality_blueprint",
                "code_review",
                "code_explanation",
                "architecture_design"
            ]
        );
    }

    #[tokio::test]
    async fn test_loading_stage_endpoint() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (status, body) = send(
            router,
            get_req("/api/v1/tools/code_review/loading?elapsed_ms=9000"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stage"], 4);
        assert_eq!(body["message"], "Compiling refactoring suggestions...");
        assert_eq!(body["progress_percent"], 100);
    }

    #[tokio::test]
    async fn test_blueprint_returns_visualization() {
        let output = "### GHERKIN SCENARIOS\nFeature: Checkout\nScenario: Apply valid code\nGiven a cart with items\nWhen a valid discount code is applied\nThen the total is reduced\n### JAVA PAGE OBJECT\nclass CheckoutPage {}";
        let llm = Arc::new(CannedGenerator::text(output));
        let router = build_router(state_with(llm.clone()));

        let (status, body) = send(
            router,
            post_json("/api/v1/tools/blueprint", json!({"input": "checkout"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tool"], "quality_blueprint");
        assert_eq!(body["output"], output);
        assert_eq!(body["feature"]["name"], "Checkout");
        assert_eq!(body["visualization"]["kind"], "flow");
        assert_eq!(
            body["visualization"]["scenarios"][0]["steps"][1]["tone"],
            "when"
        );
        assert!(body["run_id"].is_string());
        assert_eq!(llm.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_blueprint_without_gherkin_renders_empty_state() {
        let llm = Arc::new(CannedGenerator::text("Sorry, no scenarios today."));
        let router = build_router(state_with(llm));
        let (status, body) = send(
            router,
            post_json("/api/v1/tools/blueprint", json!({"input": "anything"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gherkin"], "");
        assert_eq!(body["feature"]["name"], "Untitled Feature");
        assert_eq!(body["visualization"]["kind"], "empty");
    }

    #[tokio::test]
    async fn test_architecture_renders_diagram_and_strips_copy() {
        let output = "### ARCHITECTURE DIAGRAM\n```mermaid\ngraph TD\nA-->B\n```\n### RATIONALE\nScale.";
        let router = build_router(state_with(Arc::new(CannedGenerator::text(output))));
        let (status, body) = send(
            router,
            post_json("/api/v1/tools/architecture", json!({"input": "notifications"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["diagram"]["status"], "rendered");
        assert_eq!(body["diagram"]["source"], "graph TD\nA-->B");
        assert_eq!(
            body["copyable_output"],
            "### ARCHITECTURE DIAGRAM\n\n### RATIONALE\nScale."
        );
    }

    #[tokio::test]
    async fn test_blank_input_rejected_before_model_call() {
        let llm = Arc::new(CannedGenerator::text("unused"));
        let router = build_router(state_with(llm.clone()));
        let (status, body) = send(
            router,
            post_json("/api/v1/tools/review", json!({"input": "   \n"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_returns_generic_message() {
        let llm = Arc::new(CannedGenerator::new(CannedReply::MissingKey));
        let router = build_router(state_with(llm));
        let (status, body) = send(
            router,
            post_json("/api/v1/tools/explain", json!({"input": "class A {}"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["error"]["message"],
            "Error: Service unavailable. Verify your GEMINI_API_KEY."
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_generic_message() {
        let llm = Arc::new(CannedGenerator::new(CannedReply::Upstream(401)));
        let router = build_router(state_with(llm));
        let (status, body) = send(
            router,
            post_json("/api/v1/tools/evaluate", json!({"content": "Built things"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Error: Service unavailable. Verify your GEMINI_API_KEY."
        );
    }

    #[tokio::test]
    async fn test_story_endpoint_passes_result_through() {
        let story = json!({
            "portfolioDescription": "d",
            "starFormat": {"situation": "s", "task": "t", "action": "a", "result": "r"},
            "resumeBullets": ["b1", "b2"],
            "linkedinPost": "p"
        });
        let llm = Arc::new(CannedGenerator::text(&story.to_string()));
        let router = build_router(state_with(llm));
        let (status, body) = send(
            router,
            post_json(
                "/api/v1/tools/story",
                json!({"project_name": "Harness", "role": "Lead", "notes": "k8s"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], story);
    }

    #[tokio::test]
    async fn test_gherkin_visualize_never_fails() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (status, body) = send(
            router,
            post_json("/api/v1/gherkin/visualize", json!({"text": "Given orphan\n???"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["visualization"]["kind"], "empty");
        assert_eq!(
            body["visualization"]["message"],
            "No valid Gherkin found for visualization"
        );
    }

    #[tokio::test]
    async fn test_gherkin_parse_endpoint() {
        let router = build_router(state_with(Arc::new(CannedGenerator::text(""))));
        let (_, body) = send(
            router,
            post_json(
                "/api/v1/gherkin/parse",
                json!({"text": "Scenario: A\nGiven x\nScenario: B\nGiven y"}),
            ),
        )
        .await;
        assert_eq!(body["feature"]["scenarios"][1]["name"], "B");
        assert_eq!(body["feature"]["scenarios"][1]["steps"][0]["text"], "y");
    }
}
