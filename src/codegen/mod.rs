//! Code generation from a document graph to a compilation unit
//!
//! Every request gets a fresh [`GenerationContext`]; nothing is shared
//! between requests, so independent documents can be generated in parallel.

pub mod blueprint;
pub mod context;
pub mod element;
pub mod helpers;
pub mod hooks;
pub mod imports;
pub mod ir;
pub mod naming;
pub mod options;
pub mod part;
pub mod values;

use tracing::debug;

use crate::dom::{Element, Package, PartId};
use crate::error::CodegenError;
use crate::schema::code_ns;

pub use blueprint::{Blueprint, BlueprintCache};
pub use context::{GenerationContext, NamespaceSet};
pub use element::{build_element, ElementOutput};
pub use helpers::synthesize_helpers;
pub use hooks::{ElementHook, Hooks, PartHook, PartOverride};
pub use ir::{CompilationUnit, Method, Statement};
pub use options::{CodegenOptions, NamespaceAliasOptions};
pub use part::{build_part, Owner, OwnerKind};

/// Entry routine of a package unit
pub const CREATE_PACKAGE_METHOD: &str = "CreatePackage";
/// Routine holding the package's part statements
pub const CREATE_PARTS_METHOD: &str = "CreateParts";
/// Entry routine of a part unit
pub const CREATE_PART_METHOD: &str = "CreatePart";

/// Generate the unit that recreates a whole package.
pub fn generate_package_unit(
    package: &Package,
    options: &CodegenOptions,
) -> Result<CompilationUnit, CodegenError> {
    let mut ctx = GenerationContext::new(options);

    let path_type = ctx.type_ref(code_ns::SYSTEM, "String");
    let document_type = ctx.type_ref(code_ns::PACKAGING, package.def.type_name);
    let document_kind = ctx.type_ref(code_ns::OPENXML, package.def.document_type_enum);
    let document = ctx.next_variable_name(package.def.type_name);
    let path_param = "filePath";

    let create_package = Method {
        name: CREATE_PACKAGE_METHOD.to_string(),
        visibility: ir::Visibility::Public,
        params: vec![ir::Parameter {
            name: path_param.to_string(),
            ty: path_type,
            by_ref: false,
        }],
        return_type: None,
        body: vec![
            Statement::declare(
                document_type.clone(),
                &document,
                ir::Expression::call(
                    ir::Expression::Type(document_type.clone()),
                    "Create",
                    vec![
                        ir::Expression::var(path_param),
                        ir::Expression::member(ir::Expression::Type(document_kind), package.document_type),
                    ],
                ),
            ),
            Statement::TryFinally {
                body: vec![Statement::invoke(ir::Expression::call_local(
                    CREATE_PARTS_METHOD,
                    vec![ir::Expression::var(&document)],
                ))],
                finally: vec![Statement::invoke(ir::Expression::call(
                    ir::Expression::var(&document),
                    "Dispose",
                    vec![],
                ))],
            },
        ],
    };

    let owner = Owner::package(&document, package.def);
    let mut body = Vec::new();
    for (i, relationship) in package.relationships.iter().enumerate() {
        if i > 0 {
            body.push(Statement::Blank);
        }
        body.extend(build_part(package, relationship, &owner, &mut ctx)?);
    }
    let package_links = part::relationship_statements(
        &document,
        &package.hyperlinks,
        &package.external_relationships,
        &mut ctx,
    )?;
    if !package_links.is_empty() {
        body.push(Statement::Blank);
        body.extend(package_links);
    }
    let create_parts = Method {
        name: CREATE_PARTS_METHOD.to_string(),
        visibility: ir::Visibility::Private,
        params: vec![ir::Parameter {
            name: document.clone(),
            ty: document_type,
            by_ref: false,
        }],
        return_type: None,
        body,
    };

    let mut methods = vec![create_package, create_parts];
    methods.extend(synthesize_helpers(package, &mut ctx)?);
    Ok(assemble(ctx, methods))
}

/// Generate the unit that recreates one part and everything it owns.
pub fn generate_part_unit(
    package: &Package,
    part_id: PartId,
    options: &CodegenOptions,
) -> Result<CompilationUnit, CodegenError> {
    let mut ctx = GenerationContext::new(options);
    let part = package.part(part_id);

    // The root arrives as the entry parameter, so a part hook can only replace its helper
    let variable = ctx.next_variable_name(part.type_name());
    let method_name = part::helper_method_name(&variable);
    ctx.blueprints.insert(Blueprint {
        key: part.uri.clone(),
        variable: variable.clone(),
        method_name: method_name.clone(),
        part: part_id,
        type_name: part.type_name(),
        emits_helper: true,
    })?;

    let param = ir::Parameter {
        name: variable.clone(),
        ty: ctx.type_ref(code_ns::PACKAGING, part.type_name()),
        by_ref: false,
    };
    let body = part::emit_part_contents(package, part, &variable, &method_name, &mut ctx)?;
    let entry = Method {
        name: CREATE_PART_METHOD.to_string(),
        visibility: ir::Visibility::Public,
        params: vec![param],
        return_type: None,
        body,
    };

    let mut methods = vec![entry];
    methods.extend(synthesize_helpers(package, &mut ctx)?);
    Ok(assemble(ctx, methods))
}

/// Generate the unit whose single routine builds and returns one element.
pub fn generate_element_unit(
    element: &Element,
    options: &CodegenOptions,
) -> Result<CompilationUnit, CodegenError> {
    let mut ctx = GenerationContext::new(options);
    let output = build_element(element, &mut ctx)?;
    let Some(variable) = output.variable else {
        return Err(CodegenError::IgnoredRoot {
            type_name: element.type_name(),
        });
    };

    let mut body = output.statements;
    body.push(Statement::Return {
        value: ir::Expression::var(&variable),
    });
    let entry = Method {
        name: format!("Generate{}", element.type_name()),
        visibility: ir::Visibility::Public,
        params: Vec::new(),
        return_type: Some(ctx.type_ref(element.type_namespace(), element.type_name())),
        body,
    };
    Ok(assemble(ctx, vec![entry]))
}

fn assemble(ctx: GenerationContext<'_>, methods: Vec<Method>) -> CompilationUnit {
    let aliases = &ctx.options.namespace_aliases;
    debug!(
        methods = methods.len(),
        parts = ctx.blueprints.len(),
        namespaces = ctx.namespaces.len(),
        anomalies = ctx.anomalies,
        "Assembled compilation unit"
    );
    CompilationUnit {
        imports: imports::resolve_imports(&ctx.namespaces, aliases),
        import_style: imports::import_style(aliases),
        types: vec![ir::TypeDecl {
            name: ctx.options.generated_type_name.clone(),
            methods,
        }],
    }
}
