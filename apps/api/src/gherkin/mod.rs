// Scenario visualizer: Gherkin-like text parsing, flow layout, and the
// best-effort extraction of sections from model output.
// Pure and synchronous; nothing in here performs I/O.

pub mod diagram;
pub mod extract;
pub mod handlers;
pub mod parser;
pub mod visualizer;

pub use diagram::{render_architecture_diagram, DiagramOutcome, DiagramRenderer};
pub use extract::{extract_gherkin, strip_mermaid_blocks};
pub use parser::{parse_feature, Feature};
pub use visualizer::{visualize, Visualization};
