//! Generation options

use crate::dom::XmlNodeKind;
use crate::schema::code_ns;

use super::hooks::Hooks;
use super::ir::AliasOrder;

/// Namespace import and aliasing policy
#[derive(Debug, Clone)]
pub struct NamespaceAliasOptions {
    /// Qualify generated type names with a namespace alias
    pub use_aliases: bool,
    pub order: AliasOrder,
    /// Token a renderer places between alias and namespace
    pub assignment_operator: String,
    /// Namespaces that are always imported plainly, never aliased
    pub reserved: Vec<String>,
}

impl Default for NamespaceAliasOptions {
    fn default() -> Self {
        Self {
            use_aliases: true,
            order: AliasOrder::AliasFirst,
            assignment_operator: "=".to_string(),
            reserved: vec![
                code_ns::SYSTEM.to_string(),
                code_ns::SYSTEM_IO.to_string(),
                "System.Xml".to_string(),
                code_ns::OPENXML.to_string(),
                code_ns::PACKAGING.to_string(),
            ],
        }
    }
}

impl NamespaceAliasOptions {
    /// Alias to use for a namespace, or `None` when it is imported plainly
    pub fn alias_for(&self, namespace: &str) -> Option<&'static str> {
        if !self.use_aliases || self.reserved.iter().any(|r| r == namespace) {
            return None;
        }
        crate::schema::namespace_alias(namespace)
    }
}

/// Options for one code generation request
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    pub namespace_aliases: NamespaceAliasOptions,
    /// Per-type overrides of the default algorithm
    pub hooks: Hooks,
    /// Raw node kinds dropped from the element tree
    pub ignored_node_kinds: Vec<XmlNodeKind>,
    /// Drop elements the schema tables do not describe
    pub ignore_unknown_elements: bool,
    /// Name of the synthesized type
    pub generated_type_name: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            namespace_aliases: NamespaceAliasOptions::default(),
            hooks: Hooks::default(),
            ignored_node_kinds: Vec::new(),
            ignore_unknown_elements: false,
            generated_type_name: "GeneratedCode".to_string(),
        }
    }
}
