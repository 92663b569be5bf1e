//! Template parser for Vue single-file components.
//!
//! Splits an SFC into its top-level blocks and parses the `<template>` block
//! into a small AST whose nodes keep byte offsets into the original file. The
//! transformer splices attributes into the original text, so every element
//! records where its tag-name token ends.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    /// Directive attribute names: `v-name:arg.mod`, `:arg`, `.arg`, `@arg`, `#arg`.
    static ref DIRECTIVE_RE: Regex =
        Regex::new(r"(?i)^(?:v-([a-z0-9-]+))?(?:(?::|^\.|^@|^#)(\[[^\]]+\]|[^.]+))?(.+)?$").unwrap();
}

/// Elements without content or end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

// ═══════════════════════════════════════════════════════════════════════════════
// AST
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TemplateNode {
    Element(ElementNode),
    Text(TextNode),
    Interpolation(InterpolationNode),
    Comment(CommentNode),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    pub props: Vec<TemplateProp>,
    pub children: Vec<TemplateNode>,
    /// Offset of `<`.
    pub start: usize,
    /// Offset just past the tag-name token.
    pub tag_name_end: usize,
    /// Offset just past the end tag (or the start tag for void/self-closing).
    pub end: usize,
    pub self_closing: bool,
}

impl ElementNode {
    /// Static attribute lookup; directives are not considered.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.props
            .iter()
            .any(|prop| matches!(prop, TemplateProp::Attribute(attr) if attr.name == name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub content: String,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationNode {
    pub content: String,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub content: String,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TemplateProp {
    Attribute(AttributeProp),
    Directive(DirectiveProp),
}

/// Static attribute. The value has character references decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeProp {
    pub name: String,
    pub value: Option<String>,
    pub start: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveProp {
    /// Attribute name as written, e.g. `v-bind:title.camel`.
    pub raw_name: String,
    /// Directive name without prefix: `bind`, `on`, `slot`, `if`, …
    pub name: String,
    pub arg: Option<String>,
    pub modifiers: Vec<String>,
    pub exp: Option<String>,
    pub start: usize,
}

/// Top-level `<template>` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBlock {
    pub lang: Option<String>,
    pub children: Vec<TemplateNode>,
    pub content_start: usize,
    pub content_end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SfcDescriptor {
    /// First HTML template block, if any.
    pub template: Option<TemplateBlock>,
    /// Names of every top-level block in source order.
    pub blocks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    pub message: String,
    pub offset: usize,
}

impl TemplateError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.offset)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCANNER
// ═══════════════════════════════════════════════════════════════════════════════

struct OpenTag {
    name: String,
    start: usize,
    name_end: usize,
    props: Vec<TemplateProp>,
    self_closing: bool,
}

struct Scanner<'s> {
    src: &'s str,
    bytes: &'s [u8],
    pos: usize,
}

impl<'s> Scanner<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// `<` followed by a letter.
    fn at_open_tag(&self) -> bool {
        self.peek() == Some(b'<') && matches!(self.peek_at(1), Some(b) if b.is_ascii_alphabetic())
    }

    /// `</` followed by a letter.
    fn at_close_tag(&self) -> bool {
        self.starts_with("</") && matches!(self.peek_at(2), Some(b) if b.is_ascii_alphabetic())
    }

    /// Offset of the next `</tag` (ASCII case-insensitive) ending a raw-text region.
    fn find_close_tag(&self, tag: &str) -> Option<usize> {
        let needle = format!("</{}", tag.to_ascii_lowercase());
        let haystack = self.rest().to_ascii_lowercase();
        let mut from = 0;
        while let Some(found) = haystack[from..].find(&needle) {
            let idx = from + found;
            let after = haystack.as_bytes().get(idx + needle.len()).copied();
            if matches!(after, None | Some(b'>') | Some(b'/')) || after.is_some_and(|b| b.is_ascii_whitespace()) {
                return Some(self.pos + idx);
            }
            from = idx + needle.len();
        }
        None
    }

    fn read_comment(&mut self) -> Result<CommentNode, TemplateError> {
        let start = self.pos;
        let body_start = start + 4;
        match self.src[body_start..].find("-->") {
            Some(rel) => {
                self.pos = body_start + rel + 3;
                Ok(CommentNode {
                    content: self.src[body_start..body_start + rel].to_string(),
                    start,
                })
            }
            None => Err(TemplateError::new("unterminated comment", start)),
        }
    }

    /// `<!DOCTYPE …>` and other `<!…>` constructs.
    fn skip_bogus_comment(&mut self) -> Result<(), TemplateError> {
        let start = self.pos;
        match self.src[start..].find('>') {
            Some(rel) => {
                self.pos = start + rel + 1;
                Ok(())
            }
            None => Err(TemplateError::new("unterminated markup declaration", start)),
        }
    }

    fn read_open_tag(&mut self) -> Result<OpenTag, TemplateError> {
        let start = self.pos;
        self.pos += 1;
        let name_start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        let name = self.src[name_start..self.pos].to_string();
        let name_end = self.pos;

        let mut props = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(TemplateError::new(
                        format!("unterminated start tag <{}>", name),
                        start,
                    ))
                }
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(OpenTag {
                        name,
                        start,
                        name_end,
                        props,
                        self_closing: false,
                    });
                }
                Some(b'/') if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    return Ok(OpenTag {
                        name,
                        start,
                        name_end,
                        props,
                        self_closing: true,
                    });
                }
                Some(b'/') => self.pos += 1,
                Some(_) => props.push(self.read_attribute()?),
            }
        }
    }

    fn read_attribute(&mut self) -> Result<TemplateProp, TemplateError> {
        let start = self.pos;
        // a leading '=' belongs to the name
        if self.peek() == Some(b'=') {
            self.pos += 1;
        }
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace()
                || b == b'='
                || b == b'>'
                || (b == b'/' && self.peek_at(1) == Some(b'>'))
            {
                break;
            }
            self.pos += 1;
        }
        let name = self.src[start..self.pos].to_string();

        let before_value = self.pos;
        self.skip_whitespace();
        let value = if self.peek() == Some(b'=') {
            self.pos += 1;
            self.skip_whitespace();
            Some(self.read_attribute_value()?)
        } else {
            self.pos = before_value;
            None
        };

        Ok(build_prop(name, value, start))
    }

    fn read_attribute_value(&mut self) -> Result<String, TemplateError> {
        let start = self.pos;
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                let body_start = start + 1;
                match self.bytes[body_start..].iter().position(|&b| b == quote) {
                    Some(rel) => {
                        self.pos = body_start + rel + 1;
                        Ok(self.src[body_start..body_start + rel].to_string())
                    }
                    None => Err(TemplateError::new("unterminated attribute value", start)),
                }
            }
            _ => {
                while let Some(b) = self.peek() {
                    if b.is_ascii_whitespace() || b == b'>' {
                        break;
                    }
                    self.pos += 1;
                }
                Ok(self.src[start..self.pos].to_string())
            }
        }
    }

    /// Consume `</name …>` and return the name.
    fn read_close_tag(&mut self) -> Result<String, TemplateError> {
        let start = self.pos;
        self.pos += 2;
        let name_start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        let name = self.src[name_start..self.pos].to_string();
        match self.src[self.pos..].find('>') {
            Some(rel) => {
                self.pos += rel + 1;
                Ok(name)
            }
            None => Err(TemplateError::new(
                format!("unterminated end tag </{}>", name),
                start,
            )),
        }
    }

    /// Text up to the next markup construct. `{{ … }}` spans are returned as
    /// interpolations so a `<` inside an expression does not end the text.
    fn read_text(&mut self, out: &mut Vec<TemplateNode>) {
        let mut text_start = self.pos;
        while !self.at_eof() {
            if self.starts_with("{{") {
                if let Some(rel) = self.src[self.pos + 2..].find("}}") {
                    if self.pos > text_start {
                        out.push(TemplateNode::Text(TextNode {
                            content: self.src[text_start..self.pos].to_string(),
                            start: text_start,
                        }));
                    }
                    let body_start = self.pos + 2;
                    out.push(TemplateNode::Interpolation(InterpolationNode {
                        content: self.src[body_start..body_start + rel].trim().to_string(),
                        start: self.pos,
                    }));
                    self.pos = body_start + rel + 2;
                    text_start = self.pos;
                    continue;
                }
            }
            if self.peek() == Some(b'<')
                && (self.at_open_tag() || self.at_close_tag() || self.starts_with("<!"))
            {
                break;
            }
            self.pos += self.rest().chars().next().map_or(1, char::len_utf8);
        }
        if self.pos > text_start {
            out.push(TemplateNode::Text(TextNode {
                content: self.src[text_start..self.pos].to_string(),
                start: text_start,
            }));
        }
    }

    /// Children of `parent` up to and including its end tag.
    fn parse_children(&mut self, parent: &str) -> Result<Vec<TemplateNode>, TemplateError> {
        let mut children = Vec::new();
        loop {
            if self.at_eof() {
                return Err(TemplateError::new(
                    format!("missing end tag for <{}>", parent),
                    self.pos,
                ));
            }
            if self.starts_with("<!--") {
                children.push(TemplateNode::Comment(self.read_comment()?));
            } else if self.at_close_tag() {
                let start = self.pos;
                let name = self.read_close_tag()?;
                if name.eq_ignore_ascii_case(parent) {
                    return Ok(children);
                }
                return Err(TemplateError::new(
                    format!("unexpected end tag </{}> inside <{}>", name, parent),
                    start,
                ));
            } else if self.starts_with("<!") {
                self.skip_bogus_comment()?;
            } else if self.at_open_tag() {
                let open = self.read_open_tag()?;
                children.push(TemplateNode::Element(self.parse_element(open)?));
            } else {
                self.read_text(&mut children);
            }
        }
    }

    fn parse_element(&mut self, open: OpenTag) -> Result<ElementNode, TemplateError> {
        let lower = open.name.to_ascii_lowercase();
        let children = if open.self_closing || VOID_TAGS.contains(&lower.as_str()) {
            Vec::new()
        } else if RAW_TEXT_TAGS.contains(&lower.as_str()) {
            let content_start = self.pos;
            let close = self.find_close_tag(&lower).ok_or_else(|| {
                TemplateError::new(format!("missing end tag for <{}>", open.name), open.start)
            })?;
            self.pos = close;
            self.read_close_tag()?;
            let content = &self.src[content_start..close];
            if content.is_empty() {
                Vec::new()
            } else {
                vec![TemplateNode::Text(TextNode {
                    content: content.to_string(),
                    start: content_start,
                })]
            }
        } else {
            self.parse_children(&open.name)?
        };

        Ok(ElementNode {
            tag: open.name,
            props: open.props,
            children,
            start: open.start,
            tag_name_end: open.name_end,
            end: self.pos,
            self_closing: open.self_closing,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTES
// ═══════════════════════════════════════════════════════════════════════════════

fn is_directive_name(name: &str) -> bool {
    name.starts_with("v-")
        || name.starts_with(':')
        || name.starts_with('.')
        || name.starts_with('@')
        || name.starts_with('#')
}

fn build_prop(name: String, value: Option<String>, start: usize) -> TemplateProp {
    if is_directive_name(&name) {
        if let Some(caps) = DIRECTIVE_RE.captures(&name) {
            let dir_name = match caps.get(1) {
                Some(m) => m.as_str().to_string(),
                None if name.starts_with(':') || name.starts_with('.') => "bind".to_string(),
                None if name.starts_with('@') => "on".to_string(),
                None => "slot".to_string(),
            };
            let arg = caps.get(2).map(|m| m.as_str().to_string());
            let mut modifiers: Vec<String> = caps
                .get(3)
                .map(|m| {
                    m.as_str()
                        .trim_start_matches('.')
                        .split('.')
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            if name.starts_with('.') {
                modifiers.push("prop".to_string());
            }
            return TemplateProp::Directive(DirectiveProp {
                raw_name: name,
                name: dir_name,
                arg,
                modifiers,
                exp: value,
                start,
            });
        }
    }

    TemplateProp::Attribute(AttributeProp {
        name,
        value: value.map(|v| decode_entities(&v)),
        start,
    })
}

/// Decode the character references the template compiler decodes in
/// attribute values: the five XML entities plus numeric references.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail.find(';').and_then(|semi| {
            let entity = &tail[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            ch.map(|c| (c, semi + 1))
        });
        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// ═══════════════════════════════════════════════════════════════════════════════
// SFC
// ═══════════════════════════════════════════════════════════════════════════════

fn static_attribute<'p>(props: &'p [TemplateProp], name: &str) -> Option<&'p AttributeProp> {
    props.iter().find_map(|prop| match prop {
        TemplateProp::Attribute(attr) if attr.name == name => Some(attr),
        _ => None,
    })
}

/// Parse a single-file component into its blocks.
///
/// Only the first `<template>` block whose `lang` is absent or `html` is parsed
/// as markup; every other top-level block is skipped as raw text.
pub fn parse_sfc(source: &str) -> Result<SfcDescriptor, TemplateError> {
    let mut scanner = Scanner::new(source);
    let mut descriptor = SfcDescriptor::default();

    while !scanner.at_eof() {
        if scanner.starts_with("<!--") {
            scanner.read_comment()?;
        } else if scanner.at_close_tag() {
            let start = scanner.pos;
            let name = scanner.read_close_tag()?;
            return Err(TemplateError::new(
                format!("unexpected top-level end tag </{}>", name),
                start,
            ));
        } else if scanner.starts_with("<!") {
            scanner.skip_bogus_comment()?;
        } else if scanner.at_open_tag() {
            let open = scanner.read_open_tag()?;
            descriptor.blocks.push(open.name.clone());
            if open.self_closing {
                continue;
            }

            let lang = static_attribute(&open.props, "lang").and_then(|a| a.value.clone());
            let is_markup = lang.as_deref().map_or(true, |l| l.eq_ignore_ascii_case("html"));
            if open.name == "template" && descriptor.template.is_none() && is_markup {
                let content_start = scanner.pos;
                let children = scanner.parse_children("template")?;
                let content_end = source[..scanner.pos].rfind("</").unwrap_or(scanner.pos);
                descriptor.template = Some(TemplateBlock {
                    lang,
                    children,
                    content_start,
                    content_end,
                });
            } else {
                let close = scanner.find_close_tag(&open.name).ok_or_else(|| {
                    TemplateError::new(format!("missing end tag for <{}>", open.name), open.start)
                })?;
                scanner.pos = close;
                scanner.read_close_tag()?;
            }
        } else {
            scanner.pos += scanner.rest().chars().next().map_or(1, char::len_utf8);
        }
    }

    Ok(descriptor)
}

/// Pre-order walk over every element of a template.
pub fn walk_elements<'n>(nodes: &'n [TemplateNode], visit: &mut impl FnMut(&'n ElementNode)) {
    for node in nodes {
        if let TemplateNode::Element(element) = node {
            visit(element);
            walk_elements(&element.children, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template_of(source: &str) -> TemplateBlock {
        parse_sfc(source).unwrap().template.unwrap()
    }

    fn element_tags(block: &TemplateBlock) -> Vec<String> {
        let mut tags = Vec::new();
        walk_elements(&block.children, &mut |el| tags.push(el.tag.clone()));
        tags
    }

    #[test]
    fn test_parse_sfc_blocks() {
        let src = "<template>\n  <div class=\"app\"><span>hi</span></div>\n</template>\n\n<script setup lang=\"ts\">\nconst a = 1 < 2;\n</script>\n<style scoped>\n.a > .b {}\n</style>\n";
        let sfc = parse_sfc(src).unwrap();
        assert_eq!(sfc.blocks, vec!["template", "script", "style"]);
        let template = sfc.template.unwrap();
        assert_eq!(element_tags(&template), vec!["div", "span"]);
        assert_eq!(&src[template.content_start..template.content_end], "\n  <div class=\"app\"><span>hi</span></div>\n");
    }

    #[test]
    fn test_tag_name_end_offsets() {
        let src = "<template><br/><div\n  class=\"x\"><p>t</p></div><Foo   /></template>";
        let template = template_of(src);
        let mut ends = Vec::new();
        walk_elements(&template.children, &mut |el| ends.push((el.tag.clone(), &src[el.start..el.tag_name_end])));
        assert_eq!(
            ends,
            vec![
                ("br".to_string(), "<br"),
                ("div".to_string(), "<div"),
                ("p".to_string(), "<p"),
                ("Foo".to_string(), "<Foo"),
            ]
        );
    }

    #[test]
    fn test_nested_template_and_void_elements() {
        let src = "<template><template v-if=\"ok\"><img src=\"a.png\"><input disabled></template></template>";
        let template = template_of(src);
        assert_eq!(element_tags(&template), vec!["template", "img", "input"]);
    }

    #[test]
    fn test_interpolation_with_angle_brackets() {
        let src = "<template><p>{{ a < b ? 'x' : 'y' }}</p></template>";
        let template = template_of(src);
        let TemplateNode::Element(p) = &template.children[0] else {
            panic!("expected element");
        };
        assert_eq!(
            p.children,
            vec![TemplateNode::Interpolation(InterpolationNode {
                content: "a < b ? 'x' : 'y'".to_string(),
                start: 13,
            })]
        );
    }

    #[test]
    fn test_directives() {
        let src = "<template><Comp v-bind:title.camel=\"t\" :[key]=\"v\" @click.stop=\"go\" #default=\"{ item }\" v-if=\"ok\" .value=\"x\" /></template>";
        let template = template_of(src);
        let TemplateNode::Element(el) = &template.children[0] else {
            panic!("expected element");
        };
        let summary: Vec<(String, Option<String>, Vec<String>)> = el
            .props
            .iter()
            .map(|p| match p {
                TemplateProp::Directive(d) => (d.name.clone(), d.arg.clone(), d.modifiers.clone()),
                TemplateProp::Attribute(a) => (format!("attr:{}", a.name), None, vec![]),
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("bind".to_string(), Some("title".to_string()), vec!["camel".to_string()]),
                ("bind".to_string(), Some("[key]".to_string()), vec![]),
                ("on".to_string(), Some("click".to_string()), vec!["stop".to_string()]),
                ("slot".to_string(), Some("default".to_string()), vec![]),
                ("if".to_string(), None, vec![]),
                ("bind".to_string(), Some("value".to_string()), vec!["prop".to_string()]),
            ]
        );
    }

    #[test]
    fn test_attribute_values() {
        let src = "<template><a href=x title='it&#39;s' data-a=\"1 &amp; 2\" download></a></template>";
        let template = template_of(src);
        let TemplateNode::Element(el) = &template.children[0] else {
            panic!("expected element");
        };
        let values: Vec<Option<String>> = el
            .props
            .iter()
            .map(|p| match p {
                TemplateProp::Attribute(a) => a.value.clone(),
                TemplateProp::Directive(_) => None,
            })
            .collect();
        assert_eq!(
            values,
            vec![
                Some("x".to_string()),
                Some("it's".to_string()),
                Some("1 & 2".to_string()),
                None
            ]
        );
        assert!(el.has_attribute("download"));
    }

    #[test]
    fn test_raw_text_elements() {
        let src = "<template><textarea><div></textarea><span/></template>";
        let template = template_of(src);
        assert_eq!(element_tags(&template), vec!["textarea", "span"]);
    }

    #[test]
    fn test_non_html_template_is_skipped() {
        let sfc = parse_sfc("<template lang=\"pug\">\ndiv.app\n</template>").unwrap();
        assert!(sfc.template.is_none());
        assert_eq!(sfc.blocks, vec!["template"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_sfc("<template><div></template>").is_err());
        assert!(parse_sfc("<template><div class=\"x></div></template>").is_err());
        assert!(parse_sfc("<template><div></span></div></template>").is_err());
        assert!(parse_sfc("<template><!-- open</template>").is_err());
        assert!(parse_sfc("<template><div>").is_err());
        assert!(parse_sfc("<script>const a = 1;").is_err());
        assert!(parse_sfc("</div>").is_err());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &lt;b&gt; &quot;c&quot;"), "a <b> \"c\"");
        assert_eq!(decode_entities("&#x41;&#66;"), "AB");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
    }
}
