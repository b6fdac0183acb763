//! Section extraction from free-text model output.
//!
//! Model responses only follow the requested headers because the prompt asks
//! them to. Everything here is a best-effort text search with fallbacks, not a
//! parser: missing sections yield an empty result rather than an error.

use crate::tools::prompts::HEADER_GHERKIN;

const FEATURE_TOKEN: &str = "Feature:";
const SECTION_MARKER: &str = "###";
const MERMAID_FENCE: &str = "```mermaid";
const FENCE: &str = "```";

/// Pulls the Gherkin block out of a quality-blueprint response.
///
/// Fallback chain:
/// 1. text after a `### GHERKIN SCENARIOS` header (any case) up to the next `###`;
/// 2. text from the first `Feature:` up to the next `###` after it;
/// 3. empty string.
pub fn extract_gherkin(output: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `output`.
    let lowered = output.to_ascii_lowercase();
    let header_lowered = HEADER_GHERKIN.to_ascii_lowercase();

    if let Some(header) = lowered.find(&header_lowered) {
        let body_start = header + header_lowered.len();
        let body = &output[body_start..];
        let body_end = body.find(SECTION_MARKER).unwrap_or(body.len());
        return body[..body_end].trim().to_string();
    }

    if let Some(feature) = output.find(FEATURE_TOKEN) {
        let search_from = feature + FEATURE_TOKEN.len();
        let end = output[search_from..]
            .find(SECTION_MARKER)
            .map(|offset| search_from + offset)
            .unwrap_or(output.len());
        return output[feature..end].trim().to_string();
    }

    String::new()
}

/// Returns the trimmed body of the first closed ```` ```mermaid ```` fence.
pub fn extract_mermaid(output: &str) -> Option<String> {
    let start = output.find(MERMAID_FENCE)? + MERMAID_FENCE.len();
    let len = output[start..].find(FENCE)?;
    Some(output[start..start + len].trim().to_string())
}

/// Removes every closed ```` ```mermaid ```` fence, leaving the prose around it.
/// This is what the "copy" action hands to the clipboard.
pub fn strip_mermaid_blocks(output: &str) -> String {
    let mut out = String::with_capacity(output.len());
    let mut rest = output;

    while let Some(open) = rest.find(MERMAID_FENCE) {
        let after_open = &rest[open + MERMAID_FENCE.len()..];
        match after_open.find(FENCE) {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &after_open[close + FENCE.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
