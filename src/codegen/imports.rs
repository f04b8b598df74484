//! Import declarations for the namespaces a unit references

use super::context::NamespaceSet;
use super::ir::{Import, ImportStyle};
use super::options::NamespaceAliasOptions;

/// Sorted imports, aliased where the policy says so.
pub fn resolve_imports(namespaces: &NamespaceSet, options: &NamespaceAliasOptions) -> Vec<Import> {
    namespaces
        .iter()
        .map(|namespace| Import {
            namespace: namespace.to_string(),
            alias: options.alias_for(namespace).map(str::to_string),
        })
        .collect()
}

pub fn import_style(options: &NamespaceAliasOptions) -> ImportStyle {
    ImportStyle {
        order: options.order,
        assignment_operator: options.assignment_operator.clone(),
    }
}
