// src/api/mod.rs
// =============================================================================
// This module talks to the remote content API.
//
// Submodules:
// - client: authenticated HTTP calls (module metadata, section detail, bytes)
// - models: typed records the JSON is decoded into
// =============================================================================

mod client;
mod models;

pub use client::ApiClient;
pub use models::SectionSummary;
