//! Per-type overrides of the default generation algorithm
//!
//! A hook is looked up by the exact type of the node being generated. It can
//! decline by returning `Ok(None)` or an empty result, in which case the
//! default algorithm runs as if no hook were registered.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::dom::{Element, Part};
use crate::error::CodegenError;

use super::blueprint::Blueprint;
use super::context::GenerationContext;
use super::element::ElementOutput;
use super::ir::{Method, Statement};
use super::part::Owner;

/// Output of a part override
#[derive(Debug, Clone, Default)]
pub struct PartOverride {
    pub statements: Vec<Statement>,
    /// Variable holding the part, when the override constructed one
    pub variable: Option<String>,
    /// The override already gave the part its relationship id
    pub relationship_id_assigned: bool,
}

/// Replaces generation for one element type
pub trait ElementHook: Send + Sync {
    fn build_element(
        &self,
        element: &Element,
        ctx: &mut GenerationContext<'_>,
    ) -> Result<Option<ElementOutput>, CodegenError>;
}

/// Replaces generation for one part type
pub trait PartHook: Send + Sync {
    /// Construction, relationships and child parts of the part
    fn build_part(
        &self,
        part: &Part,
        relationship_id: &str,
        owner: &Owner<'_>,
        ctx: &mut GenerationContext<'_>,
    ) -> Result<Option<PartOverride>, CodegenError>;

    /// Helper routine that fills the part's content
    fn build_helper(
        &self,
        _part: &Part,
        _blueprint: &Blueprint,
        _ctx: &mut GenerationContext<'_>,
    ) -> Result<Option<Method>, CodegenError> {
        Ok(None)
    }
}

/// Hook registry keyed by exact type
#[derive(Clone, Default)]
pub struct Hooks {
    elements: HashMap<String, Arc<dyn ElementHook>>,
    parts: HashMap<String, Arc<dyn PartHook>>,
}

impl Hooks {
    /// Register an element hook for `namespace.type_name`.
    pub fn on_element(&mut self, namespace: &str, type_name: &str, hook: Arc<dyn ElementHook>) {
        self.elements.insert(format!("{}.{}", namespace, type_name), hook);
    }

    /// Register a part hook for a part type name.
    pub fn on_part(&mut self, type_name: &str, hook: Arc<dyn PartHook>) {
        self.parts.insert(type_name.to_string(), hook);
    }

    pub fn element_hook(&self, namespace: &str, type_name: &str) -> Option<&Arc<dyn ElementHook>> {
        if self.elements.is_empty() {
            return None;
        }
        self.elements.get(&format!("{}.{}", namespace, type_name))
    }

    pub fn part_hook(&self, type_name: &str) -> Option<&Arc<dyn PartHook>> {
        self.parts.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.parts.is_empty()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<&String> = self.elements.keys().collect();
        elements.sort();
        let mut parts: Vec<&String> = self.parts.keys().collect();
        parts.sort();
        f.debug_struct("Hooks")
            .field("elements", &elements)
            .field("parts", &parts)
            .finish()
    }
}
