//! Statements that construct parts and wire up their relationships

use tracing::debug;

use crate::dom::{ExternalRelationship, HyperlinkRelationship, Package, Part, PartRelationship};
use crate::error::CodegenError;
use crate::schema::{code_ns, AddMethodDef, PackageDef, PartDef};
use crate::util::to_pascal;

use super::blueprint::Blueprint;
use super::context::GenerationContext;
use super::ir::{Expression, Literal, Statement};

/// What kind of object owns a part
#[derive(Debug, Clone, Copy)]
pub enum OwnerKind {
    Package(&'static PackageDef),
    Part(&'static PartDef),
}

/// The variable a part is added to, and its type
#[derive(Debug, Clone, Copy)]
pub struct Owner<'o> {
    pub variable: &'o str,
    pub kind: OwnerKind,
}

impl<'o> Owner<'o> {
    pub fn package(variable: &'o str, def: &'static PackageDef) -> Self {
        Self {
            variable,
            kind: OwnerKind::Package(def),
        }
    }

    pub fn part(variable: &'o str, def: &'static PartDef) -> Self {
        Self {
            variable,
            kind: OwnerKind::Part(def),
        }
    }

    /// Dedicated `Add<PartType>` routine of the owner's type, if it has one
    pub fn add_method_for(&self, part_type: &str) -> Option<&'static AddMethodDef> {
        match self.kind {
            OwnerKind::Package(def) => def.add_method_for(part_type),
            OwnerKind::Part(def) => def.add_method_for(part_type),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            OwnerKind::Package(def) => def.type_name,
            OwnerKind::Part(def) => def.type_name,
        }
    }
}

/// Name of the helper routine that fills the part held in `variable`
pub fn helper_method_name(variable: &str) -> String {
    format!("Generate{}Content", to_pascal(variable))
}

/// Build the statements that add one related part to its owner.
///
/// A part already seen in this request is attached again instead of being
/// rebuilt, and its children are not revisited. This holds for parts built
/// by a part hook too: the hook only sees the first visit.
pub fn build_part(
    package: &Package,
    relationship: &PartRelationship,
    owner: &Owner<'_>,
    ctx: &mut GenerationContext<'_>,
) -> Result<Vec<Statement>, CodegenError> {
    if relationship.id.is_empty() {
        return Err(CodegenError::EmptyIdentifier {
            name: "relationship id",
        });
    }
    let part = package.part(relationship.target);

    if let Some(existing) = ctx.blueprints.lookup(&part.uri) {
        debug!(uri = %part.uri, variable = %existing.variable, owner = owner.type_name(), "Attaching shared part");
        return Ok(vec![Statement::invoke(Expression::call(
            Expression::var(owner.variable),
            "AddPart",
            vec![Expression::var(&existing.variable), Expression::str(&relationship.id)],
        ))]);
    }

    let options = ctx.options;
    if let Some(hook) = options.hooks.part_hook(part.type_name()) {
        if let Some(result) = hook.build_part(part, &relationship.id, owner, ctx)? {
            if !result.statements.is_empty() || result.variable.is_some() {
                let mut statements = result.statements;
                if let Some(variable) = result.variable {
                    if !result.relationship_id_assigned {
                        statements.push(change_id(owner, &variable, &relationship.id));
                    }
                    ctx.blueprints.insert(Blueprint {
                        key: part.uri.clone(),
                        method_name: helper_method_name(&variable),
                        variable,
                        part: relationship.target,
                        type_name: part.type_name(),
                        emits_helper: false,
                    })?;
                }
                return Ok(statements);
            }
        }
    }

    let variable = ctx.next_variable_name(part.type_name());
    let method_name = helper_method_name(&variable);
    debug!(uri = %part.uri, variable = %variable, owner = owner.type_name(), "Generating part");
    ctx.blueprints.insert(Blueprint {
        key: part.uri.clone(),
        variable: variable.clone(),
        method_name: method_name.clone(),
        part: relationship.target,
        type_name: part.type_name(),
        emits_helper: true,
    })?;

    let mut statements = construct_part(part, &variable, &relationship.id, owner, ctx);
    statements.extend(emit_part_contents(package, part, &variable, &method_name, ctx)?);
    Ok(statements)
}

fn construct_part(
    part: &Part,
    variable: &str,
    relationship_id: &str,
    owner: &Owner<'_>,
    ctx: &mut GenerationContext<'_>,
) -> Vec<Statement> {
    let part_type = ctx.type_ref(code_ns::PACKAGING, part.type_name());
    match owner.add_method_for(part.type_name()) {
        Some(add) => {
            // Named add routines do not all take an id, so it is changed afterwards
            let args = if add.takes_content_type {
                vec![Expression::str(&part.content_type)]
            } else {
                vec![]
            };
            vec![
                Statement::declare(
                    part_type,
                    variable,
                    Expression::call(
                        Expression::var(owner.variable),
                        &format!("Add{}", add.part_type),
                        args,
                    ),
                ),
                change_id(owner, variable, relationship_id),
            ]
        }
        None => {
            let args = if part.def.opaque {
                vec![Expression::str(&part.content_type), Expression::str(relationship_id)]
            } else {
                vec![Expression::str(relationship_id)]
            };
            let call = Expression::Invoke {
                target: Some(Box::new(Expression::var(owner.variable))),
                method: "AddNewPart".to_string(),
                type_args: vec![part_type.clone()],
                args,
            };
            vec![Statement::declare(part_type, variable, call)]
        }
    }
}

fn change_id(owner: &Owner<'_>, variable: &str, relationship_id: &str) -> Statement {
    Statement::invoke(Expression::call(
        Expression::var(owner.variable),
        "ChangeIdOfPart",
        vec![Expression::var(variable), Expression::str(relationship_id)],
    ))
}

/// Helper call, external relationships and child parts of a part that already has a variable.
pub fn emit_part_contents(
    package: &Package,
    part: &Part,
    variable: &str,
    method_name: &str,
    ctx: &mut GenerationContext<'_>,
) -> Result<Vec<Statement>, CodegenError> {
    let mut statements = vec![Statement::invoke(Expression::call_local(
        method_name,
        vec![Expression::by_ref(Expression::var(variable))],
    ))];
    statements.extend(relationship_statements(
        variable,
        &part.hyperlinks,
        &part.external_relationships,
        ctx,
    )?);

    let owner = Owner::part(variable, part.def);
    for child in &part.children {
        statements.push(Statement::Blank);
        statements.extend(build_part(package, child, &owner, ctx)?);
    }
    Ok(statements)
}

/// One statement per hyperlink and per other external relationship of an owner
pub fn relationship_statements(
    owner_variable: &str,
    hyperlinks: &[HyperlinkRelationship],
    external_relationships: &[ExternalRelationship],
    ctx: &mut GenerationContext<'_>,
) -> Result<Vec<Statement>, CodegenError> {
    let mut statements = Vec::with_capacity(hyperlinks.len() + external_relationships.len());
    if hyperlinks.is_empty() && external_relationships.is_empty() {
        return Ok(statements);
    }
    let uri_type = ctx.type_ref(code_ns::SYSTEM, "Uri");
    let uri_kind = ctx.type_ref(code_ns::SYSTEM, "UriKind");
    let target_uri = |target: &str| {
        Expression::new(
            uri_type.clone(),
            vec![
                Expression::str(target),
                Expression::member(Expression::Type(uri_kind.clone()), "RelativeOrAbsolute"),
            ],
        )
    };

    for link in hyperlinks {
        if link.id.is_empty() {
            return Err(CodegenError::EmptyIdentifier {
                name: "hyperlink relationship id",
            });
        }
        statements.push(Statement::invoke(Expression::call(
            Expression::var(owner_variable),
            "AddHyperlinkRelationship",
            vec![
                target_uri(&link.target),
                Expression::Literal(Literal::Bool(link.is_external)),
                Expression::str(&link.id),
            ],
        )));
    }
    for rel in external_relationships {
        if rel.id.is_empty() {
            return Err(CodegenError::EmptyIdentifier {
                name: "external relationship id",
            });
        }
        statements.push(Statement::invoke(Expression::call(
            Expression::var(owner_variable),
            "AddExternalRelationship",
            vec![
                Expression::str(&rel.relationship_type),
                target_uri(&rel.target),
                Expression::str(&rel.id),
            ],
        )));
    }
    Ok(statements)
}
