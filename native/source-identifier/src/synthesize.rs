//! Identifier attribute synthesis.
//!
//! Builds the attribute set injected into an element from its position, tag
//! name and captured properties. The output is a pure function of the inputs,
//! so repeated builds produce byte-identical attributes.

use crate::error::TransformError;
use crate::extract::PropertyMap;
use crate::options::TransformOptions;
use crate::source::{FileIdentity, SourcePosition};

/// Property keys that never go into `data-component-content`.
const RESERVED_PREFIXES: &[&str] = &["data-", "aria-"];
const RESERVED_KEYS: &[&str] = &["key", "ref"];

pub const PATH_ATTRIBUTE: &str = "data-component-path";
pub const LINE_ATTRIBUTE: &str = "data-component-line";
pub const FILE_ATTRIBUTE: &str = "data-component-file";
pub const NAME_ATTRIBUTE: &str = "data-component-name";
pub const CONTENT_ATTRIBUTE: &str = "data-component-content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierAttributes {
    pub prefix: String,
    pub id: String,
    pub name: String,
    pub path: String,
    pub line: u32,
    pub file: String,
    pub content: Option<String>,
}

impl IdentifierAttributes {
    /// Attribute name/value pairs in emission order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (format!("{}-id", self.prefix), self.id.clone()),
            (format!("{}-name", self.prefix), self.name.clone()),
            (PATH_ATTRIBUTE.to_string(), self.path.clone()),
            (LINE_ATTRIBUTE.to_string(), self.line.to_string()),
            (FILE_ATTRIBUTE.to_string(), self.file.clone()),
            (NAME_ATTRIBUTE.to_string(), self.name.clone()),
        ];
        if let Some(content) = &self.content {
            entries.push((CONTENT_ATTRIBUTE.to_string(), content.clone()));
        }
        entries
    }

    /// Serialized form for text splicing: ` a="…" b="…"`.
    pub fn to_markup(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attribute_value(value)))
            .collect()
    }
}

fn escape_attribute_value(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key) || RESERVED_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// `encodeURIComponent`: everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// is percent-encoded as UTF-8.
pub fn encode_uri_component(input: &str) -> String {
    urlencoding::encode(input)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Encoded content payload, or `None` when no property survives filtering.
pub fn try_format_content(props: &PropertyMap) -> Result<Option<String>, TransformError> {
    let visible = props.filtered(|key| !is_reserved_key(key));
    if visible.is_empty() {
        return Ok(None);
    }
    let json = serde_json::to_string(&visible)?;
    Ok(Some(encode_uri_component(&json)))
}

pub fn format_content(props: &PropertyMap, file: &str) -> Option<String> {
    match try_format_content(props) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(file, error = %err, "omitting component content");
            None
        }
    }
}

pub fn synthesize(
    identity: &FileIdentity,
    position: SourcePosition,
    tag: &str,
    props: &PropertyMap,
    options: &TransformOptions,
) -> IdentifierAttributes {
    let content = if options.include_props {
        format_content(props, &identity.relative_path)
    } else {
        None
    };

    IdentifierAttributes {
        prefix: options.attribute_prefix.clone(),
        id: format!(
            "{}:{}:{}",
            identity.relative_path, position.line, position.column
        ),
        name: tag.to_string(),
        path: identity.relative_path.clone(),
        line: position.line,
        file: identity.file_name.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::PropValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn identity() -> FileIdentity {
        FileIdentity::new("/site/src/App.tsx", Some("/site"))
    }

    fn position(line: u32, column: u32) -> SourcePosition {
        SourcePosition {
            line,
            column,
            offset: 0,
        }
    }

    fn decode(content: &str) -> serde_json::Value {
        let json = urlencoding::decode(content).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_id_format() {
        let attrs = synthesize(
            &identity(),
            position(10, 4),
            "div",
            &PropertyMap::new(),
            &TransformOptions::default(),
        );
        assert_eq!(attrs.id, "src/App.tsx:10:4");
        assert_eq!(attrs.path, "src/App.tsx");
        assert_eq!(attrs.file, "App.tsx");
        assert_eq!(attrs.content, None);
    }

    #[test]
    fn test_entry_order() {
        let mut props = PropertyMap::new();
        props.insert("title", PropValue::string("Hi"));
        let attrs = synthesize(
            &identity(),
            position(3, 2),
            "Card",
            &props,
            &TransformOptions::default(),
        );
        let names: Vec<String> = attrs.entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "data-lov-id",
                "data-lov-name",
                "data-component-path",
                "data-component-line",
                "data-component-file",
                "data-component-name",
                "data-component-content",
            ]
        );
    }

    #[test]
    fn test_content_round_trip() {
        let mut props = PropertyMap::new();
        props.insert("title", PropValue::string("Hi"));
        props.insert("count", PropValue::Literal(json!(3)));
        props.insert("key", PropValue::string("k1"));
        props.insert("ref", PropValue::Variable("node".to_string()));
        props.insert("data-testid", PropValue::string("x"));
        props.insert("aria-label", PropValue::string("y"));

        let content = try_format_content(&props).unwrap().unwrap();
        assert_eq!(decode(&content), json!({ "title": "Hi", "count": 3 }));
    }

    #[test]
    fn test_reserved_only_props_yield_no_content() {
        let mut props = PropertyMap::new();
        props.insert("key", PropValue::string("a"));
        props.insert("aria-hidden", PropValue::flag());
        assert_eq!(try_format_content(&props).unwrap(), None);
    }

    #[test]
    fn test_other_prefixed_keys_are_kept() {
        let mut props = PropertyMap::new();
        props.insert("v-foo", PropValue::string("x"));
        props.insert(":model", PropValue::kind("MemberExpression"));
        let content = try_format_content(&props).unwrap().unwrap();
        assert_eq!(decode(&content), json!({ "v-foo": "x", ":model": "[MemberExpression]" }));
    }

    #[test]
    fn test_include_props_disabled() {
        let mut props = PropertyMap::new();
        props.insert("title", PropValue::string("Hi"));
        let options = TransformOptions {
            include_props: false,
            ..TransformOptions::default()
        };
        let attrs = synthesize(&identity(), position(1, 0), "h1", &props, &options);
        assert_eq!(attrs.content, None);
        assert_eq!(attrs.entries().len(), 6);
    }

    #[test]
    fn test_encode_uri_component_exactness() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("!'()*-_.~"), "!'()*-_.~");
        assert_eq!(encode_uri_component("{\"a\":1}"), "%7B%22a%22%3A1%7D");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("/?#&="), "%2F%3F%23%26%3D");
    }

    #[test]
    fn test_markup_escapes_quotes() {
        let attrs = IdentifierAttributes {
            prefix: "data-lov".to_string(),
            id: "a\"b.vue:1:0".to_string(),
            name: "div".to_string(),
            path: "a\"b.vue".to_string(),
            line: 1,
            file: "a\"b.vue".to_string(),
            content: None,
        };
        let markup = attrs.to_markup();
        assert!(markup.starts_with(" data-lov-id=\"a&quot;b.vue:1:0\""));
        assert!(!markup.contains("a\"b"));
    }
}
