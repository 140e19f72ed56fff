// src/render/transform.rs
// =============================================================================
// Turns one section's markdown into the HTML that goes inside its page.
//
// Order matters, each step works on the previous step's output:
// 1. fix glued bullets (text level)
// 2. markdown -> HTML (pulldown-cmark + syntect)
// 3. parse into a Document
// 4. point every <img> at its local copy (downloading it on the way)
// 5. drop every <h1>; the page template prints the title itself
// 6. style inline <code> depending on whether it looks like a shell name
// =============================================================================

use scraper::Selector;

use super::dom::Document;
use super::highlight::Highlighter;
use super::markdown;
use crate::assets::AssetDownloader;
use crate::error::Result;

/// Words that mark an inline code span as shell/OS related
pub const SHELL_KEYWORDS: &[&str] = &["shell", "bash", "tcsh", "csh", "ksh", "zsh", "fish", "kernel"];

pub const SHELL_CODE_STYLE: &str = "color:#4589ff; background:none; padding:0; font-weight:bold;";
pub const DEFAULT_CODE_STYLE: &str =
    "background:rgb(30 41 57); color:#4589ff; padding:0.2rem 0.4rem; border-radius:0.3rem;";

/// Full pipeline for one section body
pub async fn render_section(
    source: &str,
    highlighter: &Highlighter,
    assets: &mut AssetDownloader<'_>,
) -> Result<String> {
    let fixed = markdown::fix_glued_bullets(source);
    let html = markdown::to_html(&fixed, highlighter)?;
    let mut doc = Document::parse_fragment(&html);

    localize_images(&mut doc, assets).await;
    remove_top_headings(&mut doc);
    style_inline_code(&mut doc);

    Ok(doc.to_html())
}

async fn localize_images(doc: &mut Document, assets: &mut AssetDownloader<'_>) {
    let selector = Selector::parse("img[src]").unwrap();
    for id in doc.select(&selector) {
        let src = match doc.attr(id, "src") {
            Some(src) => src.to_string(),
            None => continue,
        };
        let filename = assets.download(&src).await;
        doc.set_attr(id, "src", filename);
    }
}

pub fn remove_top_headings(doc: &mut Document) {
    let selector = Selector::parse("h1").unwrap();
    for id in doc.select(&selector) {
        doc.remove(id);
    }
}

pub fn style_inline_code(doc: &mut Document) {
    let selector = Selector::parse("code").unwrap();
    for id in doc.select(&selector) {
        // Code blocks keep their highlighting untouched
        if doc.parent_name(id) == Some("pre") {
            continue;
        }
        let style = if is_shell_related(&doc.text(id)) {
            SHELL_CODE_STYLE
        } else {
            DEFAULT_CODE_STYLE
        };
        doc.set_attr(id, "style", style);
    }
}

fn is_shell_related(text: &str) -> bool {
    let lower = text.to_lowercase();
    SHELL_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
