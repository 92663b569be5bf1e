//! JSX/TSX identifier pass.
//!
//! Parses the module with oxc, appends identifier attributes to every
//! annotatable `JSXOpeningElement`, and regenerates the module with a source
//! map pointing back at the original file.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_ast_visit::walk_mut::walk_jsx_opening_element;
use oxc_ast_visit::VisitMut;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::{SourceType, SPAN};
use std::path::PathBuf;

use crate::classify::classify;
use crate::error::TransformError;
use crate::extract::{extract_jsx_props, jsx_attribute_name};
use crate::options::TransformOptions;
use crate::source::{FileIdentity, LineIndex};
use crate::synthesize::synthesize;
use crate::TransformResult;

// ═══════════════════════════════════════════════════════════════════════════════
// JSX ANNOTATOR
// Appends identifier attributes to opening elements
// ═══════════════════════════════════════════════════════════════════════════════

pub struct JsxAnnotator<'a, 'o> {
    pub ast: AstBuilder<'a>,
    options: &'o TransformOptions,
    identity: FileIdentity,
    lines: LineIndex<'a>,
    id_attribute: String,
    /// Number of elements that received attributes.
    pub annotated: usize,
}

impl<'a, 'o> JsxAnnotator<'a, 'o> {
    pub fn new(
        allocator: &'a Allocator,
        source_text: &'a str,
        path: &str,
        options: &'o TransformOptions,
    ) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            options,
            identity: FileIdentity::new(path, options.root.as_deref()),
            lines: LineIndex::new(source_text),
            id_attribute: options.id_attribute(),
            annotated: 0,
        }
    }

    fn get_tag_name(&self, name: &JSXElementName<'a>) -> String {
        match name {
            JSXElementName::Identifier(id) => id.name.to_string(),
            JSXElementName::IdentifierReference(id) => id.name.to_string(),
            JSXElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
            JSXElementName::MemberExpression(me) => self.get_member_name(me),
            JSXElementName::ThisExpression(_) => "this".to_string(),
        }
    }

    fn get_member_name(&self, me: &JSXMemberExpression<'a>) -> String {
        let object = match &me.object {
            JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
            JSXMemberExpressionObject::MemberExpression(inner) => self.get_member_name(inner),
            JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
        };
        format!("{}.{}", object, me.property.name)
    }

    fn has_identifier(&self, element: &JSXOpeningElement<'a>) -> bool {
        element.attributes.iter().any(|item| match item {
            JSXAttributeItem::Attribute(attr) => jsx_attribute_name(&attr.name) == self.id_attribute,
            JSXAttributeItem::SpreadAttribute(_) => false,
        })
    }

    fn string_attribute(&self, name: &str, value: &str) -> JSXAttributeItem<'a> {
        let name_atom = self.ast.allocator.alloc_str(name);
        let value_atom = self.ast.allocator.alloc_str(value);
        self.ast.jsx_attribute_item_attribute(
            SPAN,
            self.ast.jsx_attribute_name_identifier(SPAN, name_atom),
            Some(self.ast.jsx_attribute_value_string_literal(SPAN, value_atom, None)),
        )
    }

    fn annotate(&mut self, element: &mut JSXOpeningElement<'a>) {
        let tag_name = self.get_tag_name(&element.name);
        let verdict = classify(&tag_name);
        if !verdict.is_annotatable() {
            tracing::debug!(file = %self.identity.relative_path, tag = %tag_name, ?verdict, "skipping element");
            return;
        }
        if self.has_identifier(element) {
            return;
        }

        let props = extract_jsx_props(&element.attributes);
        let position = self.lines.position(element.span.start as usize);
        let attrs = synthesize(&self.identity, position, &tag_name, &props, self.options);

        for (name, value) in attrs.entries() {
            let item = self.string_attribute(&name, &value);
            element.attributes.push(item);
        }
        self.annotated += 1;
        tracing::debug!(file = %self.identity.relative_path, tag = %tag_name, ?verdict, id = %attrs.id, "annotated element");
    }
}

impl<'a, 'o> VisitMut<'a> for JsxAnnotator<'a, 'o> {
    fn visit_jsx_opening_element(&mut self, it: &mut JSXOpeningElement<'a>) {
        self.annotate(it);
        walk_jsx_opening_element(self, it);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════════

fn source_type_for(path: &str) -> SourceType {
    SourceType::from_path(path)
        .unwrap_or_else(|_| SourceType::tsx())
        .with_jsx(true)
}

/// Annotate a JSX/TSX module.
///
/// Returns `Ok(None)` when no element needed attributes, so the host keeps
/// the original source and map.
pub fn try_transform_jsx(
    code: &str,
    path: &str,
    options: &TransformOptions,
) -> Result<Option<TransformResult>, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, source_type_for(path)).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TransformError::parse(path, message));
    }

    let mut program = ret.program;
    let mut annotator = JsxAnnotator::new(&allocator, code, path, options);
    annotator.visit_program(&mut program);

    if annotator.annotated == 0 {
        return Ok(None);
    }

    let generated = Codegen::new()
        .with_options(CodegenOptions {
            source_map_path: Some(PathBuf::from(path)),
            ..CodegenOptions::default()
        })
        .build(&program);

    if generated.code.is_empty() {
        return Ok(None);
    }

    let map = generated
        .map
        .map(|map| map.to_json_string())
        .unwrap_or_default();

    Ok(Some(TransformResult {
        code: generated.code,
        map,
    }))
}

/// Like [`try_transform_jsx`], but failures are logged and the file passes through.
pub fn transform_jsx(code: &str, path: &str, options: &TransformOptions) -> Option<TransformResult> {
    match try_transform_jsx(code, path, options) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(file = path, error = %err, "leaving JSX source untouched");
            None
        }
    }
}
