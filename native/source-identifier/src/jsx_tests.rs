//! JSX / TSX identifier pass scenarios.
//!
//! Output is re-parsed with oxc and inspected through the AST, so the
//! assertions hold regardless of how codegen formats the module.

#[cfg(test)]
mod tests {
    use crate::jsx_transform::transform_jsx;
    use crate::options::TransformOptions;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::*;
    use oxc_ast_visit::{walk, Visit};
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const APP: &str = r#"import { Canvas } from "@react-three/fiber";

export default function App({ user, rest }) {
  return (
    <main className="page" aria-label="home">
      <Card title="Hi" count={3} user={user} onClick={() => go()} {...rest} />
      <Canvas>
        <mesh position={[0, 1, 2]} />
      </Canvas>
      <customWidget />
      <Form.Item label="x" />
    </main>
  );
}
"#;

    #[derive(Debug)]
    struct SeenElement {
        tag: String,
        /// String-valued attributes, in order; other values are recorded as `None`.
        attributes: Vec<(String, Option<String>)>,
    }

    impl SeenElement {
        fn get(&self, name: &str) -> Option<&str> {
            self.attributes
                .iter()
                .find(|(n, _)| n == name)
                .and_then(|(_, v)| v.as_deref())
        }

        fn names(&self) -> Vec<&str> {
            self.attributes.iter().map(|(n, _)| n.as_str()).collect()
        }
    }

    #[derive(Default)]
    struct ElementCollector {
        elements: Vec<SeenElement>,
    }

    fn element_name(name: &JSXElementName<'_>) -> String {
        match name {
            JSXElementName::Identifier(id) => id.name.to_string(),
            JSXElementName::IdentifierReference(id) => id.name.to_string(),
            JSXElementName::MemberExpression(me) => match &me.object {
                JSXMemberExpressionObject::IdentifierReference(id) => {
                    format!("{}.{}", id.name, me.property.name)
                }
                _ => me.property.name.to_string(),
            },
            JSXElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
            JSXElementName::ThisExpression(_) => "this".to_string(),
        }
    }

    impl<'a> Visit<'a> for ElementCollector {
        fn visit_jsx_opening_element(&mut self, it: &JSXOpeningElement<'a>) {
            let attributes = it
                .attributes
                .iter()
                .filter_map(|item| match item {
                    JSXAttributeItem::Attribute(attr) => {
                        let value = match &attr.value {
                            Some(JSXAttributeValue::StringLiteral(s)) => Some(s.value.to_string()),
                            _ => None,
                        };
                        Some((crate::extract::jsx_attribute_name(&attr.name), value))
                    }
                    JSXAttributeItem::SpreadAttribute(_) => None,
                })
                .collect();
            self.elements.push(SeenElement {
                tag: element_name(&it.name),
                attributes,
            });
            walk::walk_jsx_opening_element(self, it);
        }
    }

    fn collect(code: &str) -> Vec<SeenElement> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, code, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "output does not parse: {:?}", ret.errors);
        let mut collector = ElementCollector::default();
        collector.visit_program(&ret.program);
        collector.elements
    }

    fn options() -> TransformOptions {
        TransformOptions::default().with_root("/work/site")
    }

    fn decode_content(element: &SeenElement) -> serde_json::Value {
        let raw = element.get("data-component-content").expect("content attribute");
        let decoded = urlencoding::decode(raw).unwrap();
        serde_json::from_str(&decoded).unwrap()
    }

    #[test]
    fn test_ids_for_annotatable_elements() {
        let result = transform_jsx(APP, "/work/site/src/App.jsx", &options()).unwrap();
        let elements = collect(&result.code);

        let ids: Vec<(String, Option<&str>)> = elements
            .iter()
            .map(|el| (el.tag.clone(), el.get("data-lov-id")))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("main".to_string(), Some("src/App.jsx:5:4")),
                ("Card".to_string(), Some("src/App.jsx:6:6")),
                ("Canvas".to_string(), None),
                ("mesh".to_string(), None),
                ("customWidget".to_string(), None),
                ("Form.Item".to_string(), Some("src/App.jsx:11:6")),
            ]
        );
    }

    #[test]
    fn test_attribute_grammar() {
        let result = transform_jsx(APP, "/work/site/src/App.jsx", &options()).unwrap();
        let elements = collect(&result.code);
        let card = elements.iter().find(|el| el.tag == "Card").unwrap();

        assert_eq!(
            card.names(),
            vec![
                "title",
                "count",
                "user",
                "onClick",
                "data-lov-id",
                "data-lov-name",
                "data-component-path",
                "data-component-line",
                "data-component-file",
                "data-component-name",
                "data-component-content",
            ]
        );
        assert_eq!(card.get("data-lov-name"), Some("Card"));
        assert_eq!(card.get("data-component-path"), Some("src/App.jsx"));
        assert_eq!(card.get("data-component-line"), Some("6"));
        assert_eq!(card.get("data-component-file"), Some("App.jsx"));
        assert_eq!(card.get("data-component-name"), Some("Card"));
    }

    #[test]
    fn test_content_snapshot() {
        let result = transform_jsx(APP, "/work/site/src/App.jsx", &options()).unwrap();
        let elements = collect(&result.code);

        let card = elements.iter().find(|el| el.tag == "Card").unwrap();
        assert_eq!(
            decode_content(card),
            json!({
                "title": "Hi",
                "count": 3,
                "user": "[Identifier]",
                "onClick": "[ArrowFunctionExpression]",
                "...spread": true
            })
        );

        // aria-* is not part of the snapshot
        let main = elements.iter().find(|el| el.tag == "main").unwrap();
        assert_eq!(decode_content(main), json!({ "className": "page" }));
    }

    #[test]
    fn test_nested_literals() {
        let code = r#"const A = () => <Box style={{ color: "red", size: 2, inner: { a: 1 }, fn: handler, list: [1, x, ...y] }} items={[1, x, ...y]} label={`plain`} tip={`hi ${name}`} />;"#;
        let result = transform_jsx(code, "src/A.tsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);
        assert_eq!(
            decode_content(&elements[0]),
            json!({
                "style": {
                    "color": "red",
                    "size": 2,
                    "inner": "[ObjectExpression]",
                    "fn": "[var:handler]",
                    "list": "[ArrayExpression]"
                },
                "items": [1, "[var:x]", null],
                "label": "plain",
                "tip": "[TemplateLiteral]"
            })
        );
    }

    #[test]
    fn test_reserved_keys_and_empty_content() {
        let code = r#"const A = () => <li key="a" ref={node} data-testid="row" />;"#;
        let result = transform_jsx(code, "src/A.tsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);
        assert!(elements[0].get("data-lov-id").is_some());
        assert_eq!(elements[0].get("data-component-content"), None);
    }

    #[test]
    fn test_vue_style_prop_names_are_plain_props() {
        let code = r#"const A = () => <Card v-foo="x" title="a" />;"#;
        let result = transform_jsx(code, "src/A.tsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);
        assert_eq!(decode_content(&elements[0]), json!({ "v-foo": "x", "title": "a" }));
    }

    #[test]
    fn test_existing_identifier_is_kept() {
        let code = r#"const A = () => <section data-lov-id="kept"><p>x</p></section>;"#;
        let result = transform_jsx(code, "src/A.tsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);

        assert_eq!(elements[0].get("data-lov-id"), Some("kept"));
        assert_eq!(elements[0].names().iter().filter(|n| **n == "data-lov-id").count(), 1);
        assert_eq!(elements[1].get("data-lov-id"), Some("src/A.tsx:1:44"));
    }

    #[test]
    fn test_custom_prefix_and_no_props() {
        let options = TransformOptions {
            attribute_prefix: "data-src".to_string(),
            include_props: false,
            root: None,
        };
        let code = r#"const A = () => <h1 title="T">x</h1>;"#;
        let result = transform_jsx(code, "src/A.tsx", &options).unwrap();
        let elements = collect(&result.code);

        assert_eq!(elements[0].get("data-src-id"), Some("src/A.tsx:1:16"));
        assert_eq!(elements[0].get("data-src-name"), Some("h1"));
        assert_eq!(elements[0].get("data-lov-id"), None);
        assert_eq!(elements[0].get("data-component-content"), None);
    }

    #[test]
    fn test_typescript_syntax() {
        let code = "type P = { n: number };\nexport const A = ({ n }: P): JSX.Element => <span>{n as number}</span>;\n";
        let result = transform_jsx(code, "src/A.tsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);
        assert_eq!(elements[0].get("data-lov-id"), Some("src/A.tsx:2:44"));
    }

    #[test]
    fn test_utf16_columns() {
        let code = "const A = () => <p>é😀<b>x</b></p>;";
        let result = transform_jsx(code, "src/A.jsx", &TransformOptions::default()).unwrap();
        let elements = collect(&result.code);
        // "é" is one unit, the emoji two
        assert_eq!(elements[1].get("data-lov-id"), Some("src/A.jsx:1:22"));
    }

    #[test]
    fn test_source_map_points_at_original() {
        let result = transform_jsx(APP, "src/App.jsx", &TransformOptions::default()).unwrap();
        let map: serde_json::Value = serde_json::from_str(&result.map).unwrap();
        assert_eq!(map["version"], 3);
        assert!(!map["mappings"].as_str().unwrap().is_empty());
    }
}
