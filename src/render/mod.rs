// src/render/mod.rs
// =============================================================================
// This module turns section markdown into page-ready HTML.
//
// Submodules:
// - markdown: bullet fixup and markdown -> HTML
// - highlight: syntect code blocks and the matching stylesheet
// - dom: editable view over a parsed HTML fragment
// - transform: the per-section pipeline tying the above together
// =============================================================================

mod dom;
mod highlight;
mod markdown;
mod transform;

pub use dom::escape;
pub use highlight::Highlighter;
pub use transform::render_section;
