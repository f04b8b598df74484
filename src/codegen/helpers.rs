//! Helper routines that fill each generated part

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::dom::{Package, Part};
use crate::error::CodegenError;
use crate::schema::{code_ns, RootDef};

use super::blueprint::Blueprint;
use super::context::GenerationContext;
use super::element::build_element;
use super::ir::{Expression, Method, Parameter, Statement, Visibility};

/// One helper per blueprint that owns its content, in blueprint creation order.
pub fn synthesize_helpers(
    package: &Package,
    ctx: &mut GenerationContext<'_>,
) -> Result<Vec<Method>, CodegenError> {
    let blueprints: Vec<Blueprint> = ctx
        .blueprints
        .iter()
        .filter(|b| b.emits_helper)
        .cloned()
        .collect();

    let mut methods = Vec::with_capacity(blueprints.len());
    for blueprint in &blueprints {
        let part = package.part(blueprint.part);
        methods.push(synthesize_helper(part, blueprint, ctx)?);
    }
    Ok(methods)
}

fn synthesize_helper(
    part: &Part,
    blueprint: &Blueprint,
    ctx: &mut GenerationContext<'_>,
) -> Result<Method, CodegenError> {
    let options = ctx.options;
    if let Some(hook) = options.hooks.part_hook(part.type_name()) {
        if let Some(method) = hook.build_helper(part, blueprint, ctx)? {
            return Ok(method);
        }
    }

    let param = Parameter {
        name: blueprint.variable.clone(),
        ty: ctx.type_ref(code_ns::PACKAGING, part.type_name()),
        by_ref: true,
    };
    let body = match (&part.root, &part.def.root) {
        (Some(root), Some(root_def)) => structured_body(root, root_def, &blueprint.variable, ctx)?,
        _ => raw_feed_body(part, &blueprint.variable, ctx),
    };
    debug!(method = %blueprint.method_name, statements = body.len(), "Synthesized helper");

    Ok(Method {
        name: blueprint.method_name.clone(),
        visibility: Visibility::Private,
        params: vec![param],
        return_type: None,
        body,
    })
}

fn structured_body(
    root: &crate::dom::Element,
    root_def: &RootDef,
    param: &str,
    ctx: &mut GenerationContext<'_>,
) -> Result<Vec<Statement>, CodegenError> {
    let output = build_element(root, ctx)?;
    let mut body = output.statements;
    if let Some(variable) = output.variable {
        body.push(Statement::assign_property(param, root_def.property, Expression::var(&variable)));
    }
    Ok(body)
}

/// Re-feed the captured bytes through a stream that is disposed on every exit path
fn raw_feed_body(part: &Part, param: &str, ctx: &mut GenerationContext<'_>) -> Vec<Statement> {
    let stream_type = ctx.type_ref(code_ns::SYSTEM_IO, "Stream");
    let memory_stream = ctx.type_ref(code_ns::SYSTEM_IO, "MemoryStream");
    let convert = ctx.type_ref(code_ns::SYSTEM, "Convert");
    let stream = ctx.next_variable_name("Stream");

    let payload = STANDARD.encode(&part.data);
    let decode = Expression::call(Expression::Type(convert), "FromBase64String", vec![Expression::str(&payload)]);
    vec![
        Statement::declare(stream_type, &stream, Expression::new(memory_stream, vec![decode])),
        Statement::TryFinally {
            body: vec![Statement::invoke(Expression::call(
                Expression::var(param),
                "FeedData",
                vec![Expression::var(&stream)],
            ))],
            finally: vec![Statement::invoke(Expression::call(
                Expression::var(&stream),
                "Dispose",
                vec![],
            ))],
        },
    ]
}
