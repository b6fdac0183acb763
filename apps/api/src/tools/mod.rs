// AI tools: one fixed prompt per tool, one model call, output passed through.
// All model calls go through llm_client::ContentGenerator.

pub mod evaluation;
pub mod generator;
pub mod handlers;
pub mod progress;
pub mod prompts;
pub mod storyteller;

use serde::{Deserialize, Serialize};

use crate::tools::progress::loading_messages;

/// Every tool the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiTool {
    QualityBlueprint,
    CodeReview,
    CodeExplanation,
    ArchitectureDesign,
    ContentScoring,
    ProjectStory,
}

impl AiTool {
    /// Tools with a free-text input pane and a staged loading indicator, in tab order.
    pub const INTERACTIVE: [AiTool; 4] = [
        AiTool::QualityBlueprint,
        AiTool::CodeReview,
        AiTool::CodeExplanation,
        AiTool::ArchitectureDesign,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AiTool::QualityBlueprint => "Gherkin Agent",
            AiTool::CodeReview => "Code Auditor",
            AiTool::CodeExplanation => "Code Explainer",
            AiTool::ArchitectureDesign => "Arch Co-Pilot",
            AiTool::ContentScoring => "Quality Meter",
            AiTool::ProjectStory => "Project Storyteller",
        }
    }

    /// Text returned when the model answers with nothing.
    pub fn empty_output_fallback(self) -> &'static str {
        match self {
            AiTool::QualityBlueprint => "Analysis failed.",
            AiTool::ArchitectureDesign => "Architecture design failed.",
            AiTool::CodeReview => "Review failed.",
            AiTool::CodeExplanation => "Explanation failed.",
            AiTool::ContentScoring | AiTool::ProjectStory => "{}",
        }
    }

    fn input_label(self) -> &'static str {
        match self {
            AiTool::ArchitectureDesign => "System Requirement",
            _ => "Analysis Input",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            AiTool::ArchitectureDesign => "Describe a system requirement...",
            _ => "Paste code or content here...",
        }
    }

    fn sample_input(self) -> &'static str {
        match self {
            AiTool::QualityBlueprint => "User should be able to checkout with multiple items using a discount code. Handle the case where the code is expired.",
            AiTool::CodeReview => "public void process(List<User> users) {\n  for(int i=0; i<users.size(); i++) {\n    if(users.get(i).isActive()) {\n      saveToDb(users.get(i));\n    }\n  }\n}",
            AiTool::ArchitectureDesign => "Architect a high-availability notification service using Spring Boot, Kafka, and a distributed caching layer.",
            AiTool::CodeExplanation => "public List<String> fetchActiveEmails(List<User> users) {\n  return users.stream()\n    .filter(User::isActive)\n    .map(User::getEmail)\n    .distinct()\n    .collect(Collectors.toList());\n}",
            AiTool::ContentScoring => "Built a test orchestrator that cut execution time from 4 hours to 15 minutes.",
            AiTool::ProjectStory => "Migrated the inventory service to Java 21; added Hazelcast caching.",
        }
    }
}

/// Everything a client needs to draw a tool tab.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: AiTool,
    pub label: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub sample_input: &'static str,
    pub loading_messages: &'static [&'static str],
}

impl ToolDescriptor {
    pub fn for_tool(tool: AiTool) -> Self {
        Self {
            id: tool,
            label: tool.label(),
            input_label: tool.input_label(),
            placeholder: tool.placeholder(),
            sample_input: tool.sample_input(),
            loading_messages: loading_messages(tool),
        }
    }
}
