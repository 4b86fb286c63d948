//! Read-only view over `dom` bodies.
//!
//! The API renders documents as nested nodes:
//!
//! ```json
//! {"tag": "root", "children": [
//!     {"tag": "p", "children": ["Written by ", {"tag": "a", "attributes": {"href": "/x"}, "children": ["X"]}]}
//! ]}
//! ```
//!
//! Strings are text leaves. Parsing is lenient: the raw tree stays the
//! source of truth, this is only a convenience for walking it.

use serde_json::{Map, Value};

/// Block-level tags that end a line when flattened to text.
const BLOCK_TAGS: &[&str] = &["p", "div", "blockquote", "li", "h1", "h2", "h3", "h4", "br", "hr"];

#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Text(String),
    Element {
        tag: String,
        attributes: Map<String, Value>,
        data: Map<String, Value>,
        children: Vec<DomNode>,
    },
}

impl DomNode {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => DomNode::Text(text.clone()),
            Value::Object(node) => DomNode::Element {
                tag: node
                    .get("tag")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                attributes: object_field(node, "attributes"),
                data: object_field(node, "data"),
                children: node
                    .get("children")
                    .and_then(Value::as_array)
                    .map(|children| children.iter().map(DomNode::from_value).collect())
                    .unwrap_or_default(),
            },
            Value::Array(items) => DomNode::Element {
                tag: String::new(),
                attributes: Map::new(),
                data: Map::new(),
                children: items.iter().map(DomNode::from_value).collect(),
            },
            Value::Null => DomNode::Text(String::new()),
            other => DomNode::Text(other.to_string()),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            DomNode::Element { tag, .. } => Some(tag),
            DomNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[DomNode] {
        match self {
            DomNode::Element { children, .. } => children,
            DomNode::Text(_) => &[],
        }
    }

    /// Attribute value as a string, e.g. `href` on links.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            DomNode::Element { attributes, .. } => attributes.get(name).and_then(Value::as_str),
            DomNode::Text(_) => None,
        }
    }

    /// Flatten to plain text, one line per block element.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out.trim_end().to_string()
    }

    fn write_text(&self, out: &mut String) {
        match self {
            DomNode::Text(text) => out.push_str(text),
            DomNode::Element { tag, children, .. } => {
                for child in children {
                    child.write_text(out);
                }
                if BLOCK_TAGS.contains(&tag.as_str()) && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }

    /// All link targets in document order.
    pub fn links(&self) -> Vec<&str> {
        let mut links = Vec::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links<'a>(&'a self, links: &mut Vec<&'a str>) {
        if self.tag() == Some("a") {
            if let Some(href) = self.attribute("href") {
                links.push(href);
            }
        }
        for child in self.children() {
            child.collect_links(links);
        }
    }
}

fn object_field(node: &Map<String, Value>, key: &str) -> Map<String, Value> {
    node.get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}
