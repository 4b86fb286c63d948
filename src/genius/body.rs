//! Dual-representation bodies and the body normalizer.
//!
//! Annotation bodies and song/artist descriptions arrive in whatever shape
//! the `text_format` request option asked for:
//!
//! ```json
//! { "body": { "html": "<p>hi</p>" } }
//! { "body": { "plain": "hi" } }
//! { "body": { "dom": { "tag": "root", "children": ["hi"] } } }
//! ```
//!
//! The raw value is kept as received. [`AnnotatedBody::normalize`] then
//! resolves it once into a [`BodyContent`] using the caller's
//! [`TextFormat`]: text for `plain`/`html`, the untouched tree for `dom`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::dom::DomNode;
use crate::error::ShapeError;

/// The `text_format` request option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Plain text with markup stripped
    Plain,
    /// Rendered HTML markup
    Html,
    /// Structured document tree (the API default)
    #[default]
    Dom,
}

impl TextFormat {
    pub const ALL: [TextFormat; 3] = [TextFormat::Plain, TextFormat::Html, TextFormat::Dom];

    /// Wire name, also the key the API nests the body under.
    pub fn as_str(self) -> &'static str {
        match self {
            TextFormat::Plain => "plain",
            TextFormat::Html => "html",
            TextFormat::Dom => "dom",
        }
    }

    /// Whether bodies in this format normalize to a string.
    pub fn is_text(self) -> bool {
        !matches!(self, TextFormat::Dom)
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(TextFormat::Plain),
            "html" => Ok(TextFormat::Html),
            "dom" => Ok(TextFormat::Dom),
            other => Err(format!(
                "unknown text format \"{other}\" (expected plain, html or dom)"
            )),
        }
    }
}

/// A body exactly as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawBody {
    /// Some description fields are sent as a bare string
    Text(String),
    /// Format name to value, normally a single entry
    Formats(Map<String, Value>),
}

/// The normalized view of a body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BodyContent {
    /// No body, or not normalized yet
    #[default]
    Absent,
    /// Plain or HTML text
    Text(String),
    /// Structured document, preserved as received
    Document(Value),
}

impl BodyContent {
    fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Text(_) => "text",
            Self::Document(_) => "document",
        }
    }
}

/// A body field that may be plain text, markup, or a document tree.
///
/// Deserializes from the raw wire value (object, string or `null`) and
/// serializes back to it unchanged. Call [`normalize`](Self::normalize)
/// before reading [`normalized_text`](Self::normalized_text) or
/// [`raw_tree`](Self::raw_tree).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedBody {
    raw: Option<RawBody>,
    content: BodyContent,
}

impl AnnotatedBody {
    pub fn from_raw(raw: RawBody) -> Self {
        Self {
            raw: Some(raw),
            content: BodyContent::Absent,
        }
    }

    /// Build from an arbitrary JSON value, as the decoder would.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn raw(&self) -> Option<&RawBody> {
        self.raw.as_ref()
    }

    pub fn content(&self) -> &BodyContent {
        &self.content
    }

    /// Text for `plain`/`html` requests; `None` for `dom` or an empty body.
    pub fn normalized_text(&self) -> Option<&str> {
        match &self.content {
            BodyContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Document tree for `dom` requests; `None` otherwise.
    pub fn raw_tree(&self) -> Option<&Value> {
        match &self.content {
            BodyContent::Document(tree) => Some(tree),
            _ => None,
        }
    }

    /// Typed view over [`raw_tree`](Self::raw_tree).
    pub fn dom(&self) -> Option<DomNode> {
        self.raw_tree().map(DomNode::from_value)
    }

    pub fn is_empty(&self) -> bool {
        match &self.raw {
            None => true,
            Some(RawBody::Formats(map)) => map.is_empty(),
            Some(RawBody::Text(_)) => false,
        }
    }

    /// Resolve the raw value into [`BodyContent`] for `format`.
    ///
    /// The content is always recomputed from the raw value, so running this
    /// again with the same format gives the same result.
    pub fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.content = resolve(self.raw.as_ref(), format)?;
        tracing::trace!(%format, content = self.content.label(), "Body normalized");
        Ok(())
    }
}

fn resolve(raw: Option<&RawBody>, format: TextFormat) -> Result<BodyContent, ShapeError> {
    let formats = match raw {
        None => return Ok(BodyContent::Absent),
        Some(RawBody::Text(text)) if format.is_text() => {
            return Ok(BodyContent::Text(text.clone()));
        }
        Some(RawBody::Text(text)) => {
            return Ok(BodyContent::Document(Value::String(text.clone())));
        }
        Some(RawBody::Formats(formats)) => formats,
    };

    if !format.is_text() {
        return Ok(select_tree(formats));
    }

    let Some((key, value)) = select_entry(formats, format)? else {
        return Ok(BodyContent::Absent);
    };
    match value {
        Value::String(text) => Ok(BodyContent::Text(text.clone())),
        other => Err(ShapeError::NotText {
            format,
            key: key.clone(),
            found: json_type(other),
        }),
    }
}

/// Pick the entry for a text format: the matching key, or the only key.
fn select_entry(
    formats: &Map<String, Value>,
    format: TextFormat,
) -> Result<Option<(&String, &Value)>, ShapeError> {
    if let Some(entry) = formats.get_key_value(format.as_str()) {
        return Ok(Some(entry));
    }
    match formats.len() {
        0 => Ok(None),
        1 => {
            let entry = formats.iter().next();
            if let Some((key, _)) = entry {
                tracing::warn!(requested = %format, found = %key, "Body has a single entry under a different format");
            }
            Ok(entry)
        }
        _ => Err(ShapeError::Ambiguous {
            format,
            keys: formats.keys().cloned().collect(),
        }),
    }
}

/// Dom requests never fail: the tree is whatever the API sent.
fn select_tree(formats: &Map<String, Value>) -> BodyContent {
    if let Some(tree) = formats.get(TextFormat::Dom.as_str()) {
        return BodyContent::Document(tree.clone());
    }
    match formats.len() {
        0 => BodyContent::Absent,
        1 => formats
            .values()
            .next()
            .map_or(BodyContent::Absent, |tree| BodyContent::Document(tree.clone())),
        _ => BodyContent::Document(Value::Object(formats.clone())),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'de> Deserialize<'de> for AnnotatedBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawBody>::deserialize(deserializer)?;
        Ok(Self {
            raw,
            content: BodyContent::Absent,
        })
    }
}

impl Serialize for AnnotatedBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn text_format() -> impl Strategy<Value = TextFormat> {
        prop_oneof![Just(TextFormat::Plain), Just(TextFormat::Html)]
    }

    fn format_key() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("plain".to_string()),
            Just("html".to_string()),
            "[a-z]{1,8}",
        ]
    }

    /// Small document trees shaped like the API's dom output, as wire text
    /// with `tag` ahead of `children`
    fn dom_tree() -> impl Strategy<Value = String> {
        let leaf = "[ -~]{0,20}".prop_map(|text| Value::String(text).to_string());
        leaf.prop_recursive(3, 24, 4, |inner| {
            ("[a-z]{1,6}", prop::collection::vec(inner, 0..4)).prop_map(|(tag, children)| {
                format!(r#"{{"tag":"{tag}","children":[{}]}}"#, children.join(","))
            })
        })
    }

    proptest! {
        /// A single string entry is the normalized text, whatever its key
        #[test]
        fn single_entry_becomes_text(key in format_key(), text in ".*", format in text_format()) {
            let mut b = AnnotatedBody::from_value(json!({ key: text.clone() })).unwrap();
            b.normalize(format).unwrap();
            prop_assert_eq!(b.normalized_text(), Some(text.as_str()));

            // Normalizing again changes nothing
            let first = b.clone();
            b.normalize(format).unwrap();
            prop_assert_eq!(first, b);
        }

        /// Dom requests never produce text and keep the tree untouched
        #[test]
        fn dom_tree_round_trips(tree in dom_tree()) {
            let wire = format!(r#"{{"dom":{tree}}}"#);
            let mut b: AnnotatedBody = serde_json::from_str(&wire).unwrap();
            b.normalize(TextFormat::Dom).unwrap();
            prop_assert_eq!(b.normalized_text(), None);

            let reserialized = serde_json::to_string(b.raw_tree().unwrap()).unwrap();
            prop_assert_eq!(reserialized, tree);
            prop_assert_eq!(serde_json::to_string(&b).unwrap(), wire);
        }

        /// Non-string values under a text format are rejected, never coerced
        #[test]
        fn non_string_entry_is_rejected(n in any::<i64>(), format in text_format()) {
            let mut b = AnnotatedBody::from_value(json!({ format.as_str(): n })).unwrap();
            let is_not_text = matches!(b.normalize(format), Err(ShapeError::NotText { .. }));
            prop_assert!(is_not_text);
        }
    }
}
