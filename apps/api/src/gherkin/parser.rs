//! Scenario text parser: turns a loose Feature/Scenario/Step block into a tree.
//!
//! Malformed input yields a partial or empty tree, never an error. The output
//! only feeds the flow visualizer.

use serde::{Deserialize, Serialize};

pub const UNTITLED_FEATURE: &str = "Untitled Feature";

const STEP_KEYWORDS: &[&str] = &["given", "when", "then", "and", "but"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Keyword exactly as written, e.g. `Given` or `then`.
    pub keyword: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub scenarios: Vec<Scenario>,
}

/// Parses `text` into a `Feature`.
///
/// Line rules, checked in order on each trimmed line:
/// 1. `Feature:` sets the feature name (last one wins).
/// 2. `Scenario:` / `Example:` opens a new scenario.
/// 3. `Given|When|Then|And|But` (any case) plus whitespace adds a step to the
///    open scenario; without one the line is dropped.
/// 4. Anything else is ignored.
pub fn parse_feature(text: &str) -> Feature {
    let mut name: Option<String> = None;
    let mut scenarios: Vec<Scenario> = Vec::new();

    for line in text.split('\n') {
        let trimmed = trim_line(line);

        if let Some(rest) = trimmed.strip_prefix("Feature:") {
            name = Some(trim_line(rest).to_string());
        } else if let Some(rest) = trimmed
            .strip_prefix("Scenario:")
            .or_else(|| trimmed.strip_prefix("Example:"))
        {
            scenarios.push(Scenario {
                name: trim_line(rest).to_string(),
                steps: Vec::new(),
            });
        } else if let Some(current) = scenarios.last_mut() {
            if let Some(step) = parse_step(trimmed) {
                current.steps.push(step);
            }
        }
    }

    Feature {
        name: name.unwrap_or_else(|| UNTITLED_FEATURE.to_string()),
        scenarios,
    }
}

/// Trims whitespace and byte-order marks, which editors sometimes leave at the
/// start of pasted text.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Recognizes a step line: a step keyword followed by at least one whitespace char.
fn parse_step(line: &str) -> Option<Step> {
    let keyword_end = line.find(char::is_whitespace)?;
    let keyword = &line[..keyword_end];
    if !STEP_KEYWORDS
        .iter()
        .any(|k| keyword.eq_ignore_ascii_case(k))
    {
        return None;
    }

    let text = line[keyword_end..]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Some(Step {
        keyword: keyword.to_string(),
        text,
    })
}
