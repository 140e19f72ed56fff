// src/api/models.rs
// =============================================================================
// Typed records for the content API's JSON.
//
// Every endpoint wraps its payload as {"data": ...}. Fields we rely on are
// required, so a response missing one fails to decode instead of quietly
// turning into an empty page. The exceptions are deliberate:
// - a module without a "sections" array has no sections
// - a section without a "group" (or with null) belongs to "Unknown"
// =============================================================================

use serde::Deserialize;

/// Label used for sections the API did not put in any group
pub const UNKNOWN_GROUP: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Module metadata from GET /modules/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<SectionSummary>,
}

/// One entry of a module's section listing
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Payload of GET /modules/{id}/sections/{sectionId}
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SectionDetail {
    pub title: String,
    pub content: String,
    pub page: u32,
    #[serde(default)]
    pub group: Option<String>,
}

/// A section as fetched, before any rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub id: u64,
    pub page: u32,
    pub group: String,
    pub title: String,
    pub markdown: String,
}

impl SectionDetail {
    // The detail payload does not repeat the section id, so the caller
    // supplies the one it asked for.
    pub(crate) fn into_raw(self, id: u64) -> RawSection {
        RawSection {
            id,
            page: self.page,
            group: self
                .group
                .unwrap_or_else(|| UNKNOWN_GROUP.to_string()),
            title: self.title,
            markdown: self.content,
        }
    }
}
