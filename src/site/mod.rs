// src/site/mod.rs
// =============================================================================
// This module produces the text of every generated file.
//
// Submodules:
// - nav: the sidebar widget shared by all documents
// - page: section pages and the index
// - style: the fixed theme stylesheet
//
// Nothing here writes to disk; see output.rs for that.
// =============================================================================

mod nav;
mod page;
mod style;

pub use nav::render_nav;
pub use page::{index_page, section_page};
pub use style::STYLE_CSS;
