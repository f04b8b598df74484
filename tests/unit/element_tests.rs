//! Element statement builder tests

use pretty_assertions::assert_eq;

use oxml_codegen::codegen::ir::{Expression, Literal, Statement};
use oxml_codegen::codegen::{build_element, CodegenOptions, GenerationContext};
use oxml_codegen::dom::{Element, McAttributes, XmlName, XmlNodeKind};
use oxml_codegen::package::parse_element;
use oxml_codegen::schema::{code_ns, ns};
use oxml_codegen::{generate_element_unit, CodegenError};

const W_DECL: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

fn parse(markup: &str) -> Element {
    parse_element(markup, "test").unwrap()
}

fn declared_names(statements: &[Statement]) -> Vec<&str> {
    statements
        .iter()
        .filter_map(|s| match s {
            Statement::Declare { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

fn property_assignments<'a>(statements: &'a [Statement], variable: &str) -> Vec<&'a str> {
    statements
        .iter()
        .filter_map(|s| match s {
            Statement::Assign {
                target: Expression::Member { target, name },
                ..
            } => match target.as_ref() {
                Expression::Variable { name: var } if var == variable => Some(name.as_str()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

fn appended(statements: &[Statement], parent: &str) -> Vec<String> {
    statements
        .iter()
        .filter_map(|s| match s {
            Statement::Invoke {
                call: Expression::Invoke { target: Some(target), method, args, .. },
            } if method == "Append" && matches!(target.as_ref(), Expression::Variable { name } if name == parent) => {
                match &args[0] {
                    Expression::Variable { name } => Some(name.clone()),
                    _ => None,
                }
            }
            _ => None,
        })
        .collect()
}

// ============================================================================
// Scalar properties
// ============================================================================

#[test]
fn test_absent_scalar_property_is_not_assigned() {
    // Height is absent
    let element = parse(&format!(
        r#"<w:pgSz {} w:w="12240" w:orient="landscape"/>"#,
        W_DECL
    ));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(output.variable.as_deref(), Some("pageSize"));
    assert_eq!(property_assignments(&output.statements, "pageSize"), vec!["Width", "Orient"]);
}

#[test]
fn test_scalar_literals_are_typed() {
    let element = parse(&format!(r#"<w:pgSz {} w:w="12240" w:h="15840"/>"#, W_DECL));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    let values: Vec<&Expression> = output
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::Assign { value, .. } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(
        values,
        vec![
            &Expression::Literal(Literal::UInt(12240)),
            &Expression::Literal(Literal::UInt(15840))
        ]
    );
}

// ============================================================================
// Variable naming
// ============================================================================

#[test]
fn test_declarations_match_occurrences_and_are_unique() {
    let element = parse(&format!(
        r#"<w:body {}><w:p><w:r><w:t>a</w:t></w:r><w:r><w:t>b</w:t></w:r></w:p><w:p><w:r><w:t>c</w:t></w:r></w:p></w:body>"#,
        W_DECL
    ));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    let names = declared_names(&output.statements);
    assert_eq!(
        names,
        vec!["body", "paragraph", "run", "text", "run1", "text1", "paragraph1", "run2", "text2"]
    );
    let unique: std::collections::HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_children_appended_in_document_order() {
    let element = parse(&format!(
        r#"<w:p {}><w:pPr/><w:r/><w:r/></w:p>"#,
        W_DECL
    ));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(appended(&output.statements, "paragraph"), vec!["paragraphProperties", "run", "run1"]);
}

// ============================================================================
// Enumerations and anomalies
// ============================================================================

#[test]
fn test_enum_value_becomes_member_reference() {
    let element = parse(&format!(r#"<w:jc {} w:val="both"/>"#, W_DECL));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    match output.statements.last().unwrap() {
        Statement::Assign { value: Expression::Member { name, .. }, .. } => assert_eq!(name, "Both"),
        other => panic!("expected enum assignment, got {:?}", other),
    }
    assert!(ctx.namespaces.contains(code_ns::WORDPROCESSING));
}

#[test]
fn test_unknown_enum_member_becomes_comment_and_generation_continues() {
    let element = parse(&format!(
        r#"<w:p {}><w:pPr><w:jc w:val="middle"/></w:pPr><w:r><w:t>after</w:t></w:r></w:p>"#,
        W_DECL
    ));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    let comments: Vec<&str> = output
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::Comment { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("justification.Val"));
    assert!(comments[0].contains("middle"));
    assert!(property_assignments(&output.statements, "justification").is_empty());
    assert!(declared_names(&output.statements).contains(&"text"));
    assert_eq!(ctx.anomalies, 1);
}

#[test]
fn test_unparsable_scalar_becomes_comment() {
    let element = parse(&format!(r#"<w:pgSz {} w:w="wide" w:h="15840"/>"#, W_DECL));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(property_assignments(&output.statements, "pageSize"), vec!["Height"]);
    assert!(output
        .statements
        .iter()
        .any(|s| matches!(s, Statement::Comment { text } if text.contains("pageSize.Width"))));
    assert_eq!(ctx.anomalies, 1);
}

// ============================================================================
// List properties, compatibility attributes, namespaces
// ============================================================================

#[test]
fn test_list_property_declared_before_owner() {
    let element = parse(
        r#"<selection xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" activeCell="B2" sqref="B2 C3:D4"/>"#,
    );
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(declared_names(&output.statements), vec!["listValue", "selection"]);
    assert_eq!(property_assignments(&output.statements, "listValue"), vec!["InnerText"]);
    assert_eq!(
        property_assignments(&output.statements, "selection"),
        vec!["ActiveCell", "SequenceOfReferences"]
    );
    match &output.statements[0] {
        Statement::Declare { ty, .. } => {
            assert_eq!(ty.name, "ListValue");
            assert_eq!(ty.type_args[0].name, "StringValue");
        }
        other => panic!("expected list declaration, got {:?}", other),
    }
}

#[test]
fn test_mc_attributes_attached_after_construction() {
    let mut mc = McAttributes::default();
    mc.set("Ignorable", "w14");
    let mut element = Element::from_name(XmlName::new("w", "document", ns::W)).namespace("w", ns::W);
    element.mc_attributes = Some(mc);

    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(declared_names(&output.statements), vec!["markupCompatibilityAttributes", "document"]);
    assert_eq!(
        property_assignments(&output.statements, "markupCompatibilityAttributes"),
        vec!["Ignorable"]
    );
    assert_eq!(
        output.statements[3],
        Statement::assign_property("document", "MCAttributes", Expression::var("markupCompatibilityAttributes"))
    );
    assert!(matches!(
        &output.statements[4],
        Statement::Invoke { call: Expression::Invoke { method, .. } } if method == "AddNamespaceDeclaration"
    ));
}

#[test]
fn test_leaf_text_passed_to_constructor() {
    let element = parse(&format!(r#"<w:t {} xml:space="preserve"> spaced </w:t>"#, W_DECL));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    match &output.statements[0] {
        Statement::Declare { init: Some(Expression::New { args, .. }), .. } => {
            assert_eq!(args, &vec![Expression::str(" spaced ")]);
        }
        other => panic!("expected text construction, got {:?}", other),
    }
    assert_eq!(property_assignments(&output.statements, "text"), vec!["Space"]);
}

// ============================================================================
// Unknown elements and misc nodes
// ============================================================================

#[test]
fn test_unknown_element_uses_qualified_constructor() {
    let element = parse(&format!(
        r#"<w:customBlock {} w:flavour="mint">a &lt; b</w:customBlock>"#,
        W_DECL
    ));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    match &output.statements[0] {
        Statement::Declare { ty, name, init: Some(Expression::New { args, .. }) } => {
            assert_eq!(ty.name, "OpenXmlUnknownElement");
            assert_eq!(name, "openXmlUnknownElement");
            assert_eq!(
                args,
                &vec![Expression::str("w"), Expression::str("customBlock"), Expression::str(ns::W)]
            );
        }
        other => panic!("expected unknown element construction, got {:?}", other),
    }
    assert!(output.statements.iter().any(|s| matches!(
        s,
        Statement::Invoke { call: Expression::Invoke { method, .. } } if method == "SetAttribute"
    )));
    assert_eq!(
        output.statements.last().unwrap(),
        &Statement::assign_property("openXmlUnknownElement", "InnerXml", Expression::str("a &lt; b"))
    );
}

#[test]
fn test_ignored_unknown_elements_leave_no_trace() {
    let element = parse(&format!(
        r#"<w:p {}><w:customBlock><w:r/></w:customBlock><w:r><w:t>kept</w:t></w:r></w:p>"#,
        W_DECL
    ));
    let options = CodegenOptions {
        ignore_unknown_elements: true,
        ..Default::default()
    };
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    assert_eq!(declared_names(&output.statements), vec!["paragraph", "run", "text"]);
    assert_eq!(appended(&output.statements, "paragraph"), vec!["run"]);
}

#[test]
fn test_misc_node_kinds_can_be_ignored() {
    let element = parse(&format!(r#"<w:body {}><!-- note --><w:p/></w:body>"#, W_DECL));

    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let kept = build_element(&element, &mut ctx).unwrap();
    assert_eq!(declared_names(&kept.statements), vec!["body", "openXmlMiscNode", "paragraph"]);
    let misc = kept
        .statements
        .iter()
        .find(|s| matches!(s, Statement::Declare { name, .. } if name == "openXmlMiscNode"));
    match misc {
        Some(Statement::Declare { init: Some(Expression::New { args, .. }), .. }) => {
            assert!(matches!(&args[0], Expression::Member { name, .. } if name == "Comment"));
            assert_eq!(args[1], Expression::str("<!-- note -->"));
        }
        other => panic!("expected misc node construction, got {:?}", other),
    }

    let options = CodegenOptions {
        ignored_node_kinds: vec![XmlNodeKind::Comment],
        ..Default::default()
    };
    let mut ctx = GenerationContext::new(&options);
    let dropped = build_element(&element, &mut ctx).unwrap();
    assert_eq!(declared_names(&dropped.statements), vec!["body", "paragraph"]);
}

#[test]
fn test_unknown_element_with_mixed_content_keeps_markup() {
    let element = parse(r#"<x:note xmlns:x="urn:example:notes">before <x:b>bold</x:b> after &amp; more</x:note>"#);
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let output = build_element(&element, &mut ctx).unwrap();

    // The inner element travels inside the markup rather than as a child
    assert_eq!(declared_names(&output.statements), vec!["openXmlUnknownElement"]);
    assert!(appended(&output.statements, "openXmlUnknownElement").is_empty());
    assert_eq!(
        output.statements.last().unwrap(),
        &Statement::assign_property(
            "openXmlUnknownElement",
            "InnerXml",
            Expression::str("before <x:b>bold</x:b> after &amp; more")
        )
    );
}

#[test]
fn test_preserved_whitespace_becomes_misc_node() {
    let element = parse(&format!(r#"<w:p {} xml:space="preserve"><w:r/> <w:r/></w:p>"#, W_DECL));

    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let kept = build_element(&element, &mut ctx).unwrap();
    assert_eq!(
        declared_names(&kept.statements),
        vec!["paragraph", "run", "openXmlMiscNode", "run1"]
    );
    assert_eq!(appended(&kept.statements, "paragraph"), vec!["run", "openXmlMiscNode", "run1"]);
    let misc = kept
        .statements
        .iter()
        .find(|s| matches!(s, Statement::Declare { name, .. } if name == "openXmlMiscNode"));
    match misc {
        Some(Statement::Declare { init: Some(Expression::New { args, .. }), .. }) => {
            assert!(matches!(&args[0], Expression::Member { name, .. } if name == "SignificantWhitespace"));
            assert_eq!(args[1], Expression::str(" "));
        }
        other => panic!("expected whitespace node construction, got {:?}", other),
    }

    let options = CodegenOptions {
        ignored_node_kinds: vec!["whitespace".parse().unwrap()],
        ..Default::default()
    };
    let mut ctx = GenerationContext::new(&options);
    let dropped = build_element(&element, &mut ctx).unwrap();
    assert_eq!(declared_names(&dropped.statements), vec!["paragraph", "run", "run1"]);
}

#[test]
fn test_empty_unknown_local_name_is_contract_violation() {
    let element = Element::from_name(XmlName::new("", "", "urn:nowhere"));
    let options = CodegenOptions::default();
    let mut ctx = GenerationContext::new(&options);
    let err = build_element(&element, &mut ctx).unwrap_err();
    assert!(matches!(err, CodegenError::EmptyIdentifier { .. }));
}

// ============================================================================
// Element-only compilation units
// ============================================================================

#[test]
fn test_element_unit_returns_root() {
    let element = parse(&format!(r#"<w:p {}><w:r><w:t>x</w:t></w:r></w:p>"#, W_DECL));
    let unit = generate_element_unit(&element, &CodegenOptions::default()).unwrap();

    let method = unit.method("GenerateParagraph").unwrap();
    assert_eq!(method.return_type.as_ref().unwrap().name, "Paragraph");
    assert_eq!(
        method.body.last().unwrap(),
        &Statement::Return {
            value: Expression::var("paragraph")
        }
    );
    assert_eq!(unit.types[0].name, "GeneratedCode");
}

#[test]
fn test_ignored_root_element_is_rejected() {
    let element = Element::from_name(XmlName::new("w", "customBlock", ns::W));
    let options = CodegenOptions {
        ignore_unknown_elements: true,
        ..Default::default()
    };
    let err = generate_element_unit(&element, &options).unwrap_err();
    assert!(matches!(err, CodegenError::IgnoredRoot { .. }));
}
