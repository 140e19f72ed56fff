// src/site/nav.rs
// =============================================================================
// The table-of-contents sidebar embedded in every generated document.
//
// Each group is a collapsible block: a hidden checkbox plus a <label>
// header, with the CSS in style.css doing the open/close. Links carry the
// target file in data-file and go through navigate(), which adds the
// assets/ prefix when we are on the index page.
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

use crate::organize::NavigationTree;
use crate::render::escape;

const ARTICLE_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" width="16" height="16"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path><polyline points="14 2 14 8 20 8"></polyline><line x1="12" y1="18" x2="12" y2="12"></line><line x1="9" y1="15" x2="15" y2="15"></line></svg>"#;

const DROPDOWN_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" width="14" height="14"><polyline points="6 9 12 15 18 9"></polyline></svg>"#;

const NAVIGATE_SCRIPT: &str = r#"<script>
function navigate(e) {
  e.preventDefault();
  var file = e.currentTarget.getAttribute('data-file');
  var prefix = location.pathname.includes('/assets/') ? '' : 'assets/';
  location.href = prefix + file;
}
</script>"#;

static UNSAFE_ID_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, known to be valid
    Regex::new(r"[^a-zA-Z0-9_-]").unwrap()
});

/// Checkbox id for the `num`-th group: anything in the label outside
/// [A-Za-z0-9_-] becomes _. The number keeps ids unique when two labels
/// sanitize to the same text.
pub fn group_id(num: usize, label: &str) -> String {
    format!("group_{}_{}", num, UNSAFE_ID_CHARS.replace_all(label, "_"))
}

/// Full sidebar widget: toggle button, panel and the navigate() script
pub fn render_nav(tree: &NavigationTree) -> String {
    let mut body = String::new();

    for (index, group) in tree.groups.iter().enumerate() {
        let num = index + 1;
        let id = group_id(num, &group.label);
        body.push_str(&format!(
            r#"
    <div class="toc-group">
        <input type="checkbox" id="{id}" checked>
        <label for="{id}" class="toc-group-header">
            <div class="toc-num">{num}</div>
            <div class="toc-title">{label}</div>
            <div class="toc-count">{count} Sections</div>
            <div class="toc-arrow">{arrow}</div>
        </label>
        <div class="toc-sections">"#,
            id = id,
            num = num,
            label = escape(&group.label),
            count = group.pages.len(),
            arrow = DROPDOWN_ICON,
        ));

        for page in &group.pages {
            body.push_str(&format!(
                r##"
            <div class="toc-section">
                <div class="toc-icon">{icon}</div>
                <a href="#" data-file="{file}" onclick="navigate(event)">{title}</a>
                <span class="toc-article">Article</span>
            </div>"##,
                icon = ARTICLE_ICON,
                file = page.file_name(),
                title = escape(&page.title),
            ));
        }

        body.push_str(
            r#"
        </div>
    </div>"#,
        );
    }

    format!(
        r#"
<button class="toc-toggle" onclick="document.getElementById('toc-panel').classList.toggle('open')">☰</button>
<div id="toc-panel" class="toc-panel">
  <div class="toc-header">
    <span>Table of Contents</span>
    <button class="toc-close" onclick="document.getElementById('toc-panel').classList.remove('open')">×</button>
  </div>
  <div class="toc-body">
    {body}
  </div>
</div>
{script}
"#,
        body = body,
        script = NAVIGATE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organize::{NavGroup, NavPage};

    fn tree() -> NavigationTree {
        NavigationTree {
            groups: vec![
                NavGroup {
                    label: "Getting Started".to_string(),
                    pages: vec![
                        NavPage { page: 1, title: "Welcome".to_string() },
                        NavPage { page: 2, title: "Setup <Linux>".to_string() },
                    ],
                },
                NavGroup {
                    label: "Unknown".to_string(),
                    pages: vec![NavPage { page: 5, title: "Extra".to_string() }],
                },
            ],
        }
    }

    #[test]
    fn test_group_id_sanitizing() {
        assert_eq!(group_id(1, "Getting Started"), "group_1_Getting_Started");
        assert_eq!(group_id(3, "a-b_c.d/e"), "group_3_a-b_c_d_e");
    }

    #[test]
    fn test_labels_that_sanitize_alike_get_distinct_ids() {
        let tree = NavigationTree {
            groups: vec![
                NavGroup {
                    label: "A B".to_string(),
                    pages: vec![NavPage { page: 1, title: "One".to_string() }],
                },
                NavGroup {
                    label: "A_B".to_string(),
                    pages: vec![NavPage { page: 2, title: "Two".to_string() }],
                },
            ],
        };
        let html = render_nav(&tree);

        assert_eq!(html.matches(r#"id="group_1_A_B""#).count(), 1);
        assert_eq!(html.matches(r#"id="group_2_A_B""#).count(), 1);
        assert!(html.contains(r#"<label for="group_1_A_B""#));
        assert!(html.contains(r#"<label for="group_2_A_B""#));
    }

    #[test]
    fn test_groups_numbered_in_order() {
        let html = render_nav(&tree());

        let first = html.find(r#"<div class="toc-title">Getting Started</div>"#).unwrap();
        let second = html.find(r#"<div class="toc-title">Unknown</div>"#).unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<div class="toc-num">1</div>"#));
        assert!(html.contains(r#"<div class="toc-num">2</div>"#));
        assert!(html.contains("2 Sections"));
        assert!(html.contains("1 Sections"));
    }

    #[test]
    fn test_page_links_point_at_page_files() {
        let html = render_nav(&tree());

        let one = html.find(r#"data-file="1.html""#).unwrap();
        let two = html.find(r#"data-file="2.html""#).unwrap();
        assert!(one < two);
        assert!(html.contains(r#"data-file="5.html""#));
        assert!(html.contains("Setup &lt;Linux&gt;"));
    }

    #[test]
    fn test_widget_has_toggle_and_script() {
        let html = render_nav(&NavigationTree::default());

        assert!(html.contains(r#"class="toc-toggle""#));
        assert!(html.contains(r#"id="toc-panel""#));
        assert!(html.contains("function navigate(e)"));
    }
}
