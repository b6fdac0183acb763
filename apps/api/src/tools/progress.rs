//! Cosmetic loading stages shown while a tool call is in flight.
//!
//! Stages advance on a fixed clock and stop at the last one; they say nothing
//! about how far the real request has got.

use std::time::Duration;

use serde::Serialize;

use crate::tools::AiTool;

pub const STAGE_COUNT: usize = 5;
pub const STAGE_INTERVAL: Duration = Duration::from_millis(1500);

const BLUEPRINT_STAGES: [&str; STAGE_COUNT] = [
    "Parsing system requirements...",
    "Identifying behavioral edge cases...",
    "Structuring Gherkin feature definitions...",
    "Synthesizing Java Page Object Model...",
    "Finalizing quality blueprint...",
];

const REVIEW_STAGES: [&str; STAGE_COUNT] = [
    "Analyzing Java AST structure...",
    "Auditing SOLID principle compliance...",
    "Evaluating performance complexity...",
    "Checking for concurrency pitfalls...",
    "Compiling refactoring suggestions...",
];

const EXPLAIN_STAGES: [&str; STAGE_COUNT] = [
    "Deconstructing code logic...",
    "Translating logic for stakeholders...",
    "Analyzing technical implementation details...",
    "Structuring developer deep-dive...",
    "Generating human-readable summary...",
];

const ARCHITECTURE_STAGES: [&str; STAGE_COUNT] = [
    "Processing architectural constraints...",
    "Designing system topology...",
    "Generating Mermaid diagram definitions...",
    "Drafting technical rationale...",
    "Finalizing blueprint visualization...",
];

const SCORING_STAGES: [&str; STAGE_COUNT] = [
    "Reading portfolio content...",
    "Checking for measurable impact...",
    "Weighing specificity of tools and versions...",
    "Flagging hyperbole...",
    "Compiling rubric feedback...",
];

const STORY_STAGES: [&str; STAGE_COUNT] = [
    "Reading project notes...",
    "Framing situation and task...",
    "Drafting action and result...",
    "Writing resume bullets...",
    "Polishing announcement post...",
];

pub fn loading_messages(tool: AiTool) -> &'static [&'static str] {
    match tool {
        AiTool::QualityBlueprint => &BLUEPRINT_STAGES,
        AiTool::CodeReview => &REVIEW_STAGES,
        AiTool::CodeExplanation => &EXPLAIN_STAGES,
        AiTool::ArchitectureDesign => &ARCHITECTURE_STAGES,
        AiTool::ContentScoring => &SCORING_STAGES,
        AiTool::ProjectStory => &STORY_STAGES,
    }
}

/// Stage index after `elapsed` time in flight, capped at the last stage.
pub fn stage_at(elapsed: Duration) -> usize {
    let ticks = elapsed.as_millis() / STAGE_INTERVAL.as_millis();
    usize::try_from(ticks)
        .unwrap_or(usize::MAX)
        .min(STAGE_COUNT - 1)
}

/// Width of the progress bar for `stage`, in percent.
pub fn progress_percent(stage: usize) -> u8 {
    let stage = stage.min(STAGE_COUNT - 1) as u8;
    (stage + 1) * 20
}

/// Snapshot of the loading indicator at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingSnapshot {
    pub stage: usize,
    pub message: &'static str,
    pub progress_percent: u8,
}

pub fn snapshot(tool: AiTool, elapsed: Duration) -> LoadingSnapshot {
    let stage = stage_at(elapsed);
    LoadingSnapshot {
        stage,
        message: loading_messages(tool)[stage],
        progress_percent: progress_percent(stage),
    }
}
