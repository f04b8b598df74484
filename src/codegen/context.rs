//! Request-scoped traversal state

use std::collections::BTreeSet;

use super::blueprint::BlueprintCache;
use super::ir::TypeName;
use super::naming::TypeCounter;
use super::options::CodegenOptions;

/// Namespaces referenced by the generated code
#[derive(Debug, Default)]
pub struct NamespaceSet {
    namespaces: BTreeSet<String>,
}

impl NamespaceSet {
    pub fn insert(&mut self, namespace: &str) {
        if !self.namespaces.contains(namespace) {
            self.namespaces.insert(namespace.to_string());
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    /// Namespaces in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Everything one generation request mutates, threaded through every builder
pub struct GenerationContext<'a> {
    pub options: &'a CodegenOptions,
    pub counter: TypeCounter,
    pub namespaces: NamespaceSet,
    pub blueprints: BlueprintCache,
    /// Data anomalies recovered as comments so far
    pub anomalies: usize,
}

impl<'a> GenerationContext<'a> {
    pub fn new(options: &'a CodegenOptions) -> Self {
        Self {
            options,
            counter: TypeCounter::new(),
            namespaces: NamespaceSet::default(),
            blueprints: BlueprintCache::new(),
            anomalies: 0,
        }
    }

    /// Reference a type, recording its namespace and applying the alias policy.
    pub fn type_ref(&mut self, namespace: &str, name: &str) -> TypeName {
        self.namespaces.insert(namespace);
        let alias = self.options.namespace_aliases.alias_for(namespace);
        TypeName::in_namespace(namespace, name).with_alias(alias)
    }

    /// Fresh variable name for a type
    pub fn next_variable_name(&mut self, type_name: &str) -> String {
        self.counter.next_name(type_name)
    }
}
