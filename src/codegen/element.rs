//! Statements that construct and populate one element subtree

use quick_xml::escape::escape;
use tracing::warn;

use crate::dom::{Attribute, Element, ElementKind, XmlNodeKind};
use crate::error::CodegenError;
use crate::schema::{code_ns, Construction, ElementDef, EnumDef, PropertyKind, ScalarType};

use super::context::GenerationContext;
use super::ir::{Expression, Statement, TypeName};
use super::values::{anomaly_comment, encode_enum, encode_scalar};

/// Statements for one element plus the variable that holds it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementOutput {
    pub statements: Vec<Statement>,
    /// `None` when nothing was produced and the caller must not attach anything
    pub variable: Option<String>,
}

impl ElementOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty() && self.variable.is_none()
    }
}

/// True when configuration drops this node and everything under it
pub fn is_ignored(element: &Element, ctx: &GenerationContext<'_>) -> bool {
    match element.kind {
        ElementKind::Unknown => ctx.options.ignore_unknown_elements,
        ElementKind::MiscNode(kind) => ctx.options.ignored_node_kinds.contains(&kind),
        ElementKind::Known(_) => false,
    }
}

/// Build the statements that recreate `element` and its descendants.
pub fn build_element(
    element: &Element,
    ctx: &mut GenerationContext<'_>,
) -> Result<ElementOutput, CodegenError> {
    if is_ignored(element, ctx) {
        return Ok(ElementOutput::empty());
    }

    let options = ctx.options;
    if let Some(hook) = options
        .hooks
        .element_hook(element.type_namespace(), element.type_name())
    {
        if let Some(output) = hook.build_element(element, ctx)? {
            if !output.is_empty() {
                return Ok(output);
            }
        }
    }

    match element.kind {
        ElementKind::Known(def) => build_known(element, def, ctx),
        ElementKind::Unknown => build_unknown(element, ctx),
        ElementKind::MiscNode(kind) => build_misc(element, kind, ctx),
    }
}

/// Attribute assignments sorted into the buckets the build steps consume
struct ClassifiedAttributes<'e> {
    scalars: Vec<(&'static str, ScalarType, &'e str)>,
    enums: Vec<(&'static str, &'static EnumDef, &'e str)>,
    lists: Vec<(&'static str, ScalarType, &'e str)>,
    extended: Vec<&'e Attribute>,
}

fn classify_attributes<'e>(element: &'e Element, def: &'static ElementDef) -> ClassifiedAttributes<'e> {
    let mut classified = ClassifiedAttributes {
        scalars: Vec::new(),
        enums: Vec::new(),
        lists: Vec::new(),
        extended: Vec::new(),
    };
    // Walk the schema so assignments follow the type's declared property order
    for prop in def.properties {
        let Some(value) = element.attribute(prop.attribute.namespace_uri, prop.attribute.local_name)
        else {
            continue;
        };
        match prop.kind {
            PropertyKind::Scalar(ty) => classified.scalars.push((prop.name, ty, value)),
            PropertyKind::Enum(enum_def) => classified.enums.push((prop.name, enum_def, value)),
            PropertyKind::List(item) => classified.lists.push((prop.name, item, value)),
        }
    }
    classified.extended = element
        .attributes
        .iter()
        .filter(|a| def.property_for(&a.name.namespace_uri, &a.name.local_name).is_none())
        .collect();
    classified
}

fn build_known(
    element: &Element,
    def: &'static ElementDef,
    ctx: &mut GenerationContext<'_>,
) -> Result<ElementOutput, CodegenError> {
    let attributes = classify_attributes(element, def);
    let mut statements = Vec::new();

    // Object-valued list properties are declared ahead of their owner
    let mut lists = Vec::with_capacity(attributes.lists.len());
    for (property, item, raw) in &attributes.lists {
        let item_type = ctx.type_ref(code_ns::OPENXML, item.wrapper_name());
        let list_type = ctx.type_ref(code_ns::OPENXML, "ListValue").with_type_args(vec![item_type]);
        let list_var = ctx.next_variable_name("ListValue");
        statements.push(Statement::declare(
            list_type.clone(),
            &list_var,
            Expression::new(list_type, vec![]),
        ));
        statements.push(Statement::assign_property(&list_var, "InnerText", Expression::str(raw)));
        lists.push((*property, list_var));
    }

    let mc_var = build_mc_attributes(element, ctx, &mut statements);

    let element_type = ctx.type_ref(def.namespace, def.type_name);
    let var = ctx.next_variable_name(def.type_name);
    let args = match def.construction {
        Construction::Default => vec![],
        Construction::LeafText => vec![Expression::str(element.text.as_deref().unwrap_or(""))],
    };
    statements.push(Statement::declare(
        element_type.clone(),
        &var,
        Expression::new(element_type, args),
    ));
    if let Some(mc_var) = mc_var {
        statements.push(Statement::assign_property(&var, "MCAttributes", Expression::var(&mc_var)));
    }

    push_namespace_declarations(element, &var, &mut statements);

    for (property, ty, raw) in &attributes.scalars {
        match encode_scalar(*ty, raw, ctx) {
            Ok(value) => statements.push(Statement::assign_property(&var, property, value)),
            Err(anomaly) => {
                warn!(variable = %var, property, %anomaly, "Replacing unreadable value with a comment");
                ctx.anomalies += 1;
                statements.push(anomaly_comment(&var, property, &anomaly));
            }
        }
    }

    for (property, list_var) in &lists {
        statements.push(Statement::assign_property(&var, property, Expression::var(list_var)));
    }

    for (property, enum_def, raw) in &attributes.enums {
        match encode_enum(enum_def, raw, ctx) {
            Ok(value) => statements.push(Statement::assign_property(&var, property, value)),
            Err(anomaly) => {
                warn!(variable = %var, property, %anomaly, "Replacing unknown enumeration value with a comment");
                ctx.anomalies += 1;
                statements.push(anomaly_comment(&var, property, &anomaly));
            }
        }
    }

    push_extended_attributes(&attributes.extended, &var, ctx, &mut statements);
    push_children(element, &var, ctx, &mut statements)?;

    Ok(ElementOutput {
        statements,
        variable: Some(var),
    })
}

fn build_unknown(element: &Element, ctx: &mut GenerationContext<'_>) -> Result<ElementOutput, CodegenError> {
    if element.name.local_name.is_empty() {
        return Err(CodegenError::EmptyIdentifier {
            name: "unknown element local name",
        });
    }
    let mut statements = Vec::new();
    let mc_var = build_mc_attributes(element, ctx, &mut statements);

    let element_type = ctx.type_ref(code_ns::OPENXML, "OpenXmlUnknownElement");
    let var = ctx.next_variable_name("OpenXmlUnknownElement");
    statements.push(Statement::declare(
        element_type.clone(),
        &var,
        Expression::new(
            element_type,
            vec![
                Expression::str(&element.name.prefix),
                Expression::str(&element.name.local_name),
                Expression::str(&element.name.namespace_uri),
            ],
        ),
    ));
    if let Some(mc_var) = mc_var {
        statements.push(Statement::assign_property(&var, "MCAttributes", Expression::var(&mc_var)));
    }

    push_namespace_declarations(element, &var, &mut statements);

    let attributes: Vec<&Attribute> = element.attributes.iter().collect();
    push_extended_attributes(&attributes, &var, ctx, &mut statements);

    match (&element.inner_xml, &element.text) {
        (Some(markup), _) => {
            statements.push(Statement::assign_property(&var, "InnerXml", Expression::str(markup)));
        }
        (None, Some(text)) if element.children.is_empty() && !text.is_empty() => {
            statements.push(Statement::assign_property(
                &var,
                "InnerXml",
                Expression::str(&escape(text.as_str())),
            ));
        }
        _ => push_children(element, &var, ctx, &mut statements)?,
    }

    Ok(ElementOutput {
        statements,
        variable: Some(var),
    })
}

fn build_misc(
    element: &Element,
    kind: XmlNodeKind,
    ctx: &mut GenerationContext<'_>,
) -> Result<ElementOutput, CodegenError> {
    let node_type = ctx.type_ref("System.Xml", "XmlNodeType");
    let element_type = ctx.type_ref(code_ns::OPENXML, "OpenXmlMiscNode");
    let var = ctx.next_variable_name("OpenXmlMiscNode");
    let statements = vec![Statement::declare(
        element_type.clone(),
        &var,
        Expression::new(
            element_type,
            vec![
                Expression::member(Expression::Type(node_type), kind.member_name()),
                Expression::str(element.text.as_deref().unwrap_or("")),
            ],
        ),
    )];
    Ok(ElementOutput {
        statements,
        variable: Some(var),
    })
}

/// Declare the markup compatibility block, returning its variable
fn build_mc_attributes(
    element: &Element,
    ctx: &mut GenerationContext<'_>,
    statements: &mut Vec<Statement>,
) -> Option<String> {
    let mc = element.mc_attributes.as_ref()?;
    let mc_type: TypeName = ctx.type_ref(code_ns::OPENXML, "MarkupCompatibilityAttributes");
    let mc_var = ctx.next_variable_name("MarkupCompatibilityAttributes");
    statements.push(Statement::declare(mc_type.clone(), &mc_var, Expression::new(mc_type, vec![])));
    for (property, value) in mc.present() {
        statements.push(Statement::assign_property(&mc_var, property, Expression::str(value)));
    }
    Some(mc_var)
}

fn push_namespace_declarations(element: &Element, var: &str, statements: &mut Vec<Statement>) {
    for decl in &element.namespace_declarations {
        statements.push(Statement::invoke(Expression::call(
            Expression::var(var),
            "AddNamespaceDeclaration",
            vec![Expression::str(&decl.prefix), Expression::str(&decl.uri)],
        )));
    }
}

/// Attributes the schema has no property for are set through the generic attribute API
fn push_extended_attributes(
    attributes: &[&Attribute],
    var: &str,
    ctx: &mut GenerationContext<'_>,
    statements: &mut Vec<Statement>,
) {
    if attributes.is_empty() {
        return;
    }
    let attribute_type = ctx.type_ref(code_ns::OPENXML, "OpenXmlAttribute");
    for attribute in attributes {
        statements.push(Statement::invoke(Expression::call(
            Expression::var(var),
            "SetAttribute",
            vec![Expression::new(
                attribute_type.clone(),
                vec![
                    Expression::str(&attribute.name.prefix),
                    Expression::str(&attribute.name.local_name),
                    Expression::str(&attribute.name.namespace_uri),
                    Expression::str(&attribute.value),
                ],
            )],
        )));
    }
}

fn push_children(
    element: &Element,
    var: &str,
    ctx: &mut GenerationContext<'_>,
    statements: &mut Vec<Statement>,
) -> Result<(), CodegenError> {
    for child in &element.children {
        let output = build_element(child, ctx)?;
        statements.extend(output.statements);
        if let Some(child_var) = output.variable {
            statements.push(Statement::invoke(Expression::call(
                Expression::var(var),
                "Append",
                vec![Expression::var(&child_var)],
            )));
        }
    }
    Ok(())
}
