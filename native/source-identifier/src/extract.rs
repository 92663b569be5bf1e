//! Property extraction.
//!
//! Builds a `PropertyMap` snapshot of an element's attributes without ever
//! evaluating user code: only literal syntax is captured, everything else is
//! recorded as a placeholder naming its syntactic kind. The literal rules work
//! on oxc `Expression`s and are shared by both dialects; JSX attributes are
//! already parsed, Vue bindings are parsed from their source text.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::template_parse::TemplateProp;

/// Key recorded for spread attributes, whose concrete keys are unknown.
pub const SPREAD_KEY: &str = "...spread";

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTY MODEL
// ═══════════════════════════════════════════════════════════════════════════════

/// Statically known value of one property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// String, number, boolean or null.
    Literal(Value),
    Object(PropertyMap),
    Array(Vec<PropValue>),
    /// Bare identifier inside an object or array literal.
    Variable(String),
    /// Any non-literal expression, by kind name.
    Expression(String),
    Spread,
}

impl PropValue {
    pub fn string(value: impl Into<String>) -> Self {
        PropValue::Literal(Value::String(value.into()))
    }

    pub fn flag() -> Self {
        PropValue::Literal(Value::Bool(true))
    }

    pub fn kind(kind: &str) -> Self {
        PropValue::Expression(kind.to_string())
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Literal(value) => value.serialize(serializer),
            PropValue::Object(map) => map.serialize(serializer),
            PropValue::Array(items) => serializer.collect_seq(items),
            PropValue::Variable(name) => serializer.serialize_str(&format!("[var:{}]", name)),
            PropValue::Expression(kind) => serializer.serialize_str(&format!("[{}]", kind)),
            PropValue::Spread => serializer.serialize_bool(true),
        }
    }
}

/// Ordered property snapshot. Re-inserting a key replaces its value in place,
/// the way assignment to an existing key of a JavaScript object does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, PropValue)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PropValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of the map keeping only entries whose key satisfies `keep`.
    pub fn filtered(&self, keep: impl Fn(&str) -> bool) -> PropertyMap {
        PropertyMap {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| keep(k))
                .cloned()
                .collect(),
        }
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// LITERAL RULES
// ═══════════════════════════════════════════════════════════════════════════════

/// JSON number the way `JSON.stringify` prints it: integral values without a
/// fractional part, non-finite values as `null`. Integral values of 2^64 and
/// above still print in exponent form.
fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 {
        // integral f64 values below 2^63 / 2^64 convert exactly
        if n.abs() < 9_223_372_036_854_775_808.0 {
            return Value::from(n as i64);
        }
        if n > 0.0 && n < 18_446_744_073_709_551_616.0 {
            return Value::from(n as u64);
        }
    }
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn without_parens<'e, 'a>(expr: &'e Expression<'a>) -> &'e Expression<'a> {
    let mut current = expr;
    while let Expression::ParenthesizedExpression(paren) = current {
        current = &paren.expression;
    }
    current
}

fn scalar_literal(expr: &Expression<'_>) -> Option<Value> {
    match expr {
        Expression::StringLiteral(s) => Some(Value::String(s.value.to_string())),
        Expression::NumericLiteral(n) => Some(number_value(n.value)),
        Expression::BooleanLiteral(b) => Some(Value::Bool(b.value)),
        Expression::NullLiteral(_) => Some(Value::Null),
        // Template literal without interpolation
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
            tpl.quasis.first().map(|quasi| {
                let text = quasi.value.cooked.as_ref().unwrap_or(&quasi.value.raw);
                Value::String(text.to_string())
            })
        }
        _ => None,
    }
}

/// Value of a bound attribute expression (`attr={…}` / `:attr="…"`).
pub fn bound_value(expr: &Expression<'_>) -> PropValue {
    let expr = without_parens(expr);
    if let Some(value) = scalar_literal(expr) {
        return PropValue::Literal(value);
    }

    match expr {
        Expression::ObjectExpression(obj) => PropValue::Object(object_value(obj)),
        Expression::ArrayExpression(arr) => {
            PropValue::Array(arr.elements.iter().map(array_element_value).collect())
        }
        _ => PropValue::kind(expression_kind(expr)),
    }
}

/// Value of a property nested in an object or array literal.
fn nested_value(expr: &Expression<'_>) -> PropValue {
    let expr = without_parens(expr);
    if let Some(value) = scalar_literal(expr) {
        return PropValue::Literal(value);
    }

    match expr {
        Expression::Identifier(ident) => PropValue::Variable(ident.name.to_string()),
        _ => PropValue::kind(expression_kind(expr)),
    }
}

fn object_value(obj: &ObjectExpression<'_>) -> PropertyMap {
    let mut map = PropertyMap::new();
    for property in &obj.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = property else {
            continue;
        };
        // methods and accessors are not plain properties
        if prop.computed || prop.method || !matches!(prop.kind, PropertyKind::Init) {
            continue;
        }
        if let Some(key) = prop.key.static_name() {
            map.insert(key.to_string(), nested_value(&prop.value));
        }
    }
    map
}

fn array_element_value(element: &ArrayExpressionElement<'_>) -> PropValue {
    match element {
        ArrayExpressionElement::SpreadElement(_) | ArrayExpressionElement::Elision(_) => {
            PropValue::Literal(Value::Null)
        }
        _ => element
            .as_expression()
            .map(nested_value)
            .unwrap_or(PropValue::Literal(Value::Null)),
    }
}

/// ESTree kind name of an expression, as used in placeholders.
pub fn expression_kind(expr: &Expression<'_>) -> &'static str {
    match expr {
        Expression::BooleanLiteral(_) => "BooleanLiteral",
        Expression::NullLiteral(_) => "NullLiteral",
        Expression::NumericLiteral(_) => "NumericLiteral",
        Expression::BigIntLiteral(_) => "BigIntLiteral",
        Expression::RegExpLiteral(_) => "RegExpLiteral",
        Expression::StringLiteral(_) => "StringLiteral",
        Expression::TemplateLiteral(_) => "TemplateLiteral",
        Expression::Identifier(_) => "Identifier",
        Expression::MetaProperty(_) => "MetaProperty",
        Expression::Super(_) => "Super",
        Expression::ArrayExpression(_) => "ArrayExpression",
        Expression::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
        Expression::AssignmentExpression(_) => "AssignmentExpression",
        Expression::AwaitExpression(_) => "AwaitExpression",
        Expression::BinaryExpression(_) | Expression::PrivateInExpression(_) => {
            "BinaryExpression"
        }
        Expression::CallExpression(_) => "CallExpression",
        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(_) => "OptionalCallExpression",
            _ => "OptionalMemberExpression",
        },
        Expression::ClassExpression(_) => "ClassExpression",
        Expression::ConditionalExpression(_) => "ConditionalExpression",
        Expression::FunctionExpression(_) => "FunctionExpression",
        Expression::ImportExpression(_) => "ImportExpression",
        Expression::LogicalExpression(_) => "LogicalExpression",
        Expression::NewExpression(_) => "NewExpression",
        Expression::ObjectExpression(_) => "ObjectExpression",
        Expression::ParenthesizedExpression(_) => "ParenthesizedExpression",
        Expression::SequenceExpression(_) => "SequenceExpression",
        Expression::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
        Expression::ThisExpression(_) => "ThisExpression",
        Expression::UnaryExpression(_) => "UnaryExpression",
        Expression::UpdateExpression(_) => "UpdateExpression",
        Expression::YieldExpression(_) => "YieldExpression",
        Expression::JSXElement(_) => "JSXElement",
        Expression::JSXFragment(_) => "JSXFragment",
        Expression::TSAsExpression(_) => "TSAsExpression",
        Expression::TSSatisfiesExpression(_) => "TSSatisfiesExpression",
        Expression::TSTypeAssertion(_) => "TSTypeAssertion",
        Expression::TSNonNullExpression(_) => "TSNonNullExpression",
        Expression::TSInstantiationExpression(_) => "TSInstantiationExpression",
        Expression::ComputedMemberExpression(_)
        | Expression::StaticMemberExpression(_)
        | Expression::PrivateFieldExpression(_) => "MemberExpression",
        _ => "Expression",
    }
}

/// Parse a standalone expression from source text and apply the bound-value
/// rules. Unparsable text degrades to `[InvalidExpression]`.
pub fn evaluate_source_expression(source: &str) -> PropValue {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_typescript(true)
        .with_module(true);

    match Parser::new(&allocator, source, source_type).parse_expression() {
        // trailing tokens after a complete expression make the text invalid
        Ok(expr) if expr.span().end as usize == source.trim_end().len() => bound_value(&expr),
        _ => PropValue::kind("InvalidExpression"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIALECT WALKERS
// ═══════════════════════════════════════════════════════════════════════════════

pub fn jsx_attribute_name(name: &JSXAttributeName<'_>) -> String {
    match name {
        JSXAttributeName::Identifier(id) => id.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

fn jsx_attribute_value(value: Option<&JSXAttributeValue<'_>>) -> PropValue {
    match value {
        None => PropValue::flag(),
        Some(JSXAttributeValue::StringLiteral(lit)) => PropValue::string(lit.value.as_str()),
        Some(JSXAttributeValue::ExpressionContainer(container)) => {
            match container.expression.as_expression() {
                Some(expr) => bound_value(expr),
                None => PropValue::kind("JSXEmptyExpression"),
            }
        }
        Some(JSXAttributeValue::Element(_)) => PropValue::kind("JSXElement"),
        Some(JSXAttributeValue::Fragment(_)) => PropValue::kind("JSXFragment"),
    }
}

/// Snapshot of a JSX opening element's attribute list.
pub fn extract_jsx_props(attributes: &[JSXAttributeItem<'_>]) -> PropertyMap {
    let mut props = PropertyMap::new();
    for item in attributes {
        match item {
            JSXAttributeItem::Attribute(attr) => {
                props.insert(
                    jsx_attribute_name(&attr.name),
                    jsx_attribute_value(attr.value.as_ref()),
                );
            }
            JSXAttributeItem::SpreadAttribute(_) => {
                props.insert(SPREAD_KEY, PropValue::Spread);
            }
        }
    }
    props
}

/// Snapshot of a template element's props.
///
/// Static attributes keep their decoded text. `v-bind` with an argument is
/// recorded under the argument name; `v-bind` without one is a spread. Other
/// directives are recorded as `:<name>` (`v-model` → `:model`, `@click` →
/// `:on`) with their expression run through the same literal rules.
pub fn extract_template_props(template_props: &[TemplateProp]) -> PropertyMap {
    let mut props = PropertyMap::new();
    for prop in template_props {
        match prop {
            TemplateProp::Attribute(attr) => {
                let value = match &attr.value {
                    Some(text) => PropValue::string(text.as_str()),
                    None => PropValue::flag(),
                };
                props.insert(attr.name.as_str(), value);
            }
            TemplateProp::Directive(dir) if dir.name == "bind" => match &dir.arg {
                None => props.insert(SPREAD_KEY, PropValue::Spread),
                Some(arg) => {
                    let value = match dir.exp.as_deref() {
                        Some(exp) if !exp.trim().is_empty() => evaluate_source_expression(exp),
                        // same-name shorthand `:id` binds the identifier `id`
                        _ => PropValue::kind("Identifier"),
                    };
                    props.insert(arg.as_str(), value);
                }
            },
            TemplateProp::Directive(dir) => {
                let value = match dir.exp.as_deref() {
                    Some(exp) if !exp.trim().is_empty() => evaluate_source_expression(exp),
                    _ => PropValue::flag(),
                };
                props.insert(format!(":{}", dir.name), value);
            }
        }
    }
    props
}
