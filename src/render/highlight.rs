// src/render/highlight.rs
// =============================================================================
// Syntax highlighting for fenced code blocks, using syntect.
//
// Highlighted code carries CSS classes only (no inline colors); the colors
// live in pygments.css, generated from the chosen theme.
// =============================================================================

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::dom::escape;
use crate::error::{Error, Result};

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Loads the bundled syntaxes and the named theme
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = match themes.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                return Err(Error::UnknownTheme {
                    name: theme_name.to_string(),
                    available: themes.themes.keys().cloned().collect(),
                })
            }
        };

        Ok(Highlighter {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Renders one code block, wrapped the way the stylesheet expects.
    ///
    /// There is no language guessing: without a known `lang` the code is
    /// only escaped.
    pub fn highlight_block(&self, code: &str, lang: Option<&str>) -> Result<String> {
        let syntax = lang.and_then(|token| self.syntaxes.find_syntax_by_token(token));

        let body = match syntax {
            Some(syntax) => {
                let mut generator =
                    ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
                for line in LinesWithEndings::from(code) {
                    generator.parse_html_for_line_which_includes_newline(line)?;
                }
                generator.finalize()
            }
            None => escape(code),
        };

        let class = match lang {
            Some(lang) => format!(r#" class="language-{}""#, escape(lang)),
            None => String::new(),
        };

        Ok(format!(
            r#"<div class="codehilite"><pre><code{}>{}</code></pre></div>"#,
            class, body
        ))
    }

    /// Contents of pygments.css for the configured theme
    pub fn stylesheet(&self) -> Result<String> {
        Ok(css_for_theme_with_class_style(&self.theme, CLASS_STYLE)?)
    }
}
