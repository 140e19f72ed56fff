// src/render/markdown.rs
// =============================================================================
// Markdown text -> HTML string.
//
// Two steps:
// 1. fix_glued_bullets: a text fixup applied before parsing
// 2. to_html: pulldown-cmark with tables enabled; fenced code blocks are
//    swapped for syntect output (see highlight.rs)
//
// pulldown-cmark gives us a stream of events. We pass everything through
// untouched except code blocks, which we buffer and replace with a single
// raw Html event.
// =============================================================================

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag};
use regex::Regex;
use std::sync::LazyLock;

use super::highlight::Highlighter;
use crate::error::Result;

static GLUED_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, known to be valid
    Regex::new(r"\*\s*`([^`]+)`").unwrap()
});

// Moves a `* `code`` bullet that was glued onto the end of the previous
// line onto a line of its own. The API's markdown often has
// "intro text * `flag` does X", and a list item only counts at line start.
//
// Example:
//   "* `flag1` and more * `flag2`"
//   -> "\n* `flag1` and more \n* `flag2`"
pub fn fix_glued_bullets(markdown: &str) -> String {
    GLUED_BULLET
        .replace_all(markdown, "\n* `${1}`")
        .into_owned()
}

/// Renders markdown to an HTML fragment
pub fn to_html(markdown: &str, highlighter: &Highlighter) -> Result<String> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut events: Vec<Event> = Vec::new();
    // Some(lang) while we are inside a code block
    let mut code_block: Option<Option<String>> = None;
    let mut code = String::new();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|token| token.to_string()),
                    CodeBlockKind::Indented => None,
                };
                code_block = Some(lang);
                code.clear();
            }
            Event::End(Tag::CodeBlock(_)) => {
                let lang = code_block.take().flatten();
                let block = highlighter.highlight_block(&code, lang.as_deref())?;
                events.push(Event::Html(CowStr::from(block)));
            }
            Event::Text(text) if code_block.is_some() => code.push_str(&text),
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> Highlighter {
        Highlighter::new("base16-ocean.dark").unwrap()
    }

    #[test]
    fn test_glued_bullets_are_split() {
        let fixed = fix_glued_bullets("* `flag1` and more * `flag2`");
        assert_eq!(fixed, "\n* `flag1` and more \n* `flag2`");
    }

    #[test]
    fn test_glued_bullets_become_two_items() {
        let fixed = fix_glued_bullets("* `flag1` and more * `flag2`");
        let html = to_html(&fixed, &highlighter()).unwrap();

        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li><code>flag1</code> and more"));
        assert!(html.contains("<li><code>flag2</code></li>"));
    }

    #[test]
    fn test_text_without_bullets_is_untouched() {
        let text = "Plain `code` and *emphasis*.";
        assert_eq!(fix_glued_bullets(text), text);
    }

    #[test]
    fn test_tables_are_rendered() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let html = to_html(md, &highlighter()).unwrap();

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let md = "Run:\n\n```bash\nls -la /tmp\n```\n";
        let html = to_html(md, &highlighter()).unwrap();

        assert!(html.contains(r#"<div class="codehilite"><pre><code class="language-bash">"#));
        assert!(html.contains("<p>Run:</p>"));
    }

    #[test]
    fn test_indented_code_is_escaped() {
        let md = "Text\n\n    a < b\n";
        let html = to_html(md, &highlighter()).unwrap();

        assert!(html.contains("<div class=\"codehilite\"><pre><code>a &lt; b\n</code></pre></div>"));
    }

    #[test]
    fn test_images_and_headings_pass_through() {
        let md = "# Title\n\n![diagram](/storage/a.png)\n";
        let html = to_html(md, &highlighter()).unwrap();

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains(r#"<img src="/storage/a.png" alt="diagram" />"#));
    }
}
