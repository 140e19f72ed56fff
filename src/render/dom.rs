// src/render/dom.rs
// =============================================================================
// A small editable view over a scraper HTML fragment.
//
// scraper parses and runs CSS selectors; its tree (an ego_tree) lets us
// detach nodes and reach each element's attribute map to edit it in place.
// Writing the fragment back out is html5ever's serializer.
//
// Operations: find (select), read (attr/text/parent), modify (set_attr),
// remove (detach), serialize (to_html).
// =============================================================================

use ego_tree::NodeId;
use html5ever::{namespace_url, ns, LocalName, QualName};
use scraper::{ElementRef, Html, Node, Selector, StrTendril};

pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML fragment (no <html>/<body> expected)
    pub fn parse_fragment(html: &str) -> Self {
        Document {
            html: Html::parse_fragment(html),
        }
    }

    /// Ids of every element matching `selector`, in document order.
    ///
    /// Only nodes still attached to the fragment are returned.
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.html
            .root_element()
            .select(selector)
            .map(|element| element.id())
            .collect()
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.value().attr(name)
    }

    /// Sets (or adds) a plain, un-namespaced attribute
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let mut node = match self.html.tree.get_mut(id) {
            Some(node) => node,
            None => return,
        };
        if let Node::Element(element) = node.value() {
            let key = QualName::new(None, ns!(), LocalName::from(name));
            element.attrs.insert(key, StrTendril::from(value.into()));
        }
    }

    /// All text below the element, concatenated
    pub fn text(&self, id: NodeId) -> String {
        self.element(id)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    /// Tag name of the element's parent, if the parent is an element
    pub fn parent_name(&self, id: NodeId) -> Option<&str> {
        let parent = self.html.tree.get(id)?.parent()?;
        ElementRef::wrap(parent).map(|element| element.value().name())
    }

    /// Detaches the node (and everything below it) from the fragment
    pub fn remove(&mut self, id: NodeId) {
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.detach();
        }
    }

    pub fn to_html(&self) -> String {
        // parse_fragment wraps the content in an <html> element; only its
        // children belong to the output.
        self.html.root_element().inner_html()
    }
}

/// HTML-escapes `text` for use in element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
