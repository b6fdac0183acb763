// All prompt templates for the AI tools.
// Fill with llm_client::prompts::render_template.
//
// The `### ...` headers below are a convention the model is asked to follow;
// nothing validates them on the way back. gherkin::extract copes with their absence.

pub const HEADER_GHERKIN: &str = "### GHERKIN SCENARIOS";

/// Quality blueprint. Replace `{requirement}`.
pub const BLUEPRINT_PROMPT_TEMPLATE: &str = r####"You are a senior SDET and Java architect. Analyze this requirement: "{requirement}"

Respond in two parts:
1. PROFESSIONAL GHERKIN: a complete Feature file with a Background and Scenarios, edge cases included.
2. JAVA BOILERPLATE: a Selenium Page Object Model class in Java backing these tests, written with modern Java 21 features and clean coding standards.

Put each part under its own header: "### GHERKIN SCENARIOS" and "### JAVA PAGE OBJECT"."####;

/// Architecture design. Replace `{requirement}`.
pub const ARCHITECTURE_PROMPT_TEMPLATE: &str = r####"You are a lead system architect. Design a high-level solution for: "{requirement}"

Your response must include:
1. DIAGRAM: a valid Mermaid graph in a ```mermaid code block (graph TD or sequenceDiagram) showing the components and their flow.
2. TECHNICAL RATIONALE: why these choices hold up on scalability, performance and security.
3. TECH STACK: the tools and frameworks you recommend.

Use the headers "### ARCHITECTURE DIAGRAM", "### RATIONALE" and "### RECOMMENDED STACK"."####;

/// Code review. Replace `{code}`.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Act as a senior Java mentor. Review the code below for:
1. Clean code and SOLID principles.
2. Performance, with a complexity analysis.
3. Concurrency safety, where it applies.
4. Refactoring toward modern Java (17/21).

Code:
```java
{code}
```"#;

/// Code explanation. Replace `{code}`.
pub const EXPLAIN_PROMPT_TEMPLATE: &str = r#"Act as a senior technical writer and Java architect.
Explain the code below in plain terms a non-technical stakeholder can follow, then add a "Developer Deep Dive" section for engineers.

Code:
```java
{code}
```

Use exactly these headers:
### OVERVIEW
### HOW IT WORKS
### DEVELOPER DEEP DIVE"#;

/// Only this many characters of submitted content reach the scoring prompt.
pub const SCORING_CONTENT_LIMIT: usize = 2000;

pub const SCORING_SYSTEM: &str =
    "You are a picky engineering manager. Output strictly valid JSON scoring the content.";

/// Content scoring. Replace `{content}`.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"Score this engineering portfolio content against a strict professional rubric.
CONTENT: "{content}"

Rules:
- Impact above 80 requires metrics (%, $, time).
- Specificity above 80 requires named tools and versions.
- Credibility drops when hyperbole is used."#;

pub const STORY_SYSTEM: &str = "You are a world-class career coach for senior Java engineers and SDETs. Output strictly valid JSON.";

/// Project story. Replace `{project_name}`, `{role}`, `{notes}`.
pub const STORY_PROMPT_TEMPLATE: &str = r#"Turn these project notes into high-impact career assets.
PROJECT NAME: {project_name}
ROLE: {role}
RAW NOTES: {notes}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_templates_request_their_headers() {
        for header in [HEADER_GHERKIN, "### JAVA PAGE OBJECT"] {
            assert!(BLUEPRINT_PROMPT_TEMPLATE.contains(header));
        }
        for header in [
            "### ARCHITECTURE DIAGRAM",
            "### RATIONALE",
            "### RECOMMENDED STACK",
        ] {
            assert!(ARCHITECTURE_PROMPT_TEMPLATE.contains(header));
        }
        for header in ["### OVERVIEW", "### HOW IT WORKS", "### DEVELOPER DEEP DIVE"] {
            assert!(EXPLAIN_PROMPT_TEMPLATE.contains(header));
        }
    }

    #[test]
    fn test_header_quoted_templates_keep_their_full_body() {
        assert!(BLUEPRINT_PROMPT_TEMPLATE.ends_with("\"### JAVA PAGE OBJECT\"."));
        assert!(ARCHITECTURE_PROMPT_TEMPLATE.ends_with("\"### RECOMMENDED STACK\"."));
        assert!(ARCHITECTURE_PROMPT_TEMPLATE.contains("3. TECH STACK"));
    }
}
