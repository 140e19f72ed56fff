// src/site/page.rs
// =============================================================================
// Whole HTML documents: one per section (written to assets/) and the index
// at the bundle root. Both embed the same navigation widget.
// =============================================================================

use crate::organize::RenderedSection;
use crate::render::escape;

const BACK_TO_TOC: &str = r#"onclick="document.getElementById('toc-panel').classList.toggle('open'); return false;""#;

/// Page for one section. Lives in assets/, so stylesheets are one level up.
pub fn section_page(section: &RenderedSection, nav_html: &str, favicon_url: &str) -> String {
    let title = escape(&section.title);
    format!(
        r##"<!DOCTYPE html><html class="dark"><head><title>{title}</title>
<meta charset="utf-8">
<link href="../style.css" rel="stylesheet">
<link href="../pygments.css" rel="stylesheet">
<link rel="icon" type="image/x-icon" href="{favicon}">
</head><body>
{nav}
<div class="content">
<a href="#" class="back-link" {back}>← Back to TOC</a>
<h1>{title}</h1>
{content}
<hr>
<a href="#" class="back-link" {back}>Back to TOC</a>
</div>
<button id="dark-toggle" onclick="document.documentElement.classList.toggle('dark')">🌓</button>
</body></html>
"##,
        title = title,
        favicon = escape(favicon_url),
        nav = nav_html,
        back = BACK_TO_TOC,
        content = section.html,
    )
}

/// Landing page at the bundle root; opens the sidebar on load
pub fn index_page(module_name: &str, nav_html: &str) -> String {
    let name = escape(module_name);
    format!(
        r#"<!DOCTYPE html><html class="dark"><head><title>{name} Offline</title>
<meta charset="utf-8">
<link href="style.css" rel="stylesheet">
<link href="pygments.css" rel="stylesheet">
</head><body>
{nav}
<div class="content">
<h1>{name} Offline</h1>
<p><strong>Click ☰</strong> to open the table of contents.</p>
<hr>
</div>
<script>document.getElementById('toc-panel').classList.add('open');</script>
</body></html>
"#,
        name = name,
        nav = nav_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> RenderedSection {
        RenderedSection {
            id: 4,
            title: "Files & Folders".to_string(),
            html: "<p>body</p>".to_string(),
            page: 3,
            group: "Intro".to_string(),
        }
    }

    #[test]
    fn test_section_page_layout() {
        let html = section_page(&section(), "<nav-widget/>", "https://site/favicon.ico");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Files &amp; Folders</title>"));
        assert!(html.contains(r#"<link href="../style.css" rel="stylesheet">"#));
        assert!(html.contains(r#"<link href="../pygments.css" rel="stylesheet">"#));
        assert!(html.contains(r#"href="https://site/favicon.ico""#));
        assert!(html.contains("<nav-widget/>"));

        let heading = html.find("<h1>Files &amp; Folders</h1>").unwrap();
        let body = html.find("<p>body</p>").unwrap();
        assert!(heading < body);
        assert_eq!(html.matches("Back to TOC").count(), 2);
    }

    #[test]
    fn test_index_opens_nav() {
        let html = index_page("Linux <Fundamentals>", "<nav-widget/>");

        assert!(html.contains("<title>Linux &lt;Fundamentals&gt; Offline</title>"));
        assert!(html.contains(r#"<link href="style.css" rel="stylesheet">"#));
        assert!(html.contains("<nav-widget/>"));
        assert!(html.contains("classList.add('open')"));
    }
}
