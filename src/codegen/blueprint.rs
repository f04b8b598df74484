//! Record of parts already emitted during one request

use std::collections::HashMap;

use crate::dom::{PartId, PartUri};
use crate::error::CodegenError;

/// A part that already has a variable and a helper routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub key: PartUri,
    pub variable: String,
    pub method_name: String,
    pub part: PartId,
    pub type_name: &'static str,
    /// False when an override constructed the part and owns its content
    pub emits_helper: bool,
}

/// Create-once map from part location to blueprint, iterated in creation order
#[derive(Debug, Default)]
pub struct BlueprintCache {
    index: HashMap<PartUri, usize>,
    entries: Vec<Blueprint>,
}

impl BlueprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &PartUri) -> Option<&Blueprint> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Register a blueprint. Entries are never replaced.
    pub fn insert(&mut self, blueprint: Blueprint) -> Result<(), CodegenError> {
        if self.index.contains_key(&blueprint.key) {
            return Err(CodegenError::DuplicateBlueprint {
                uri: blueprint.key.to_string(),
            });
        }
        self.index.insert(blueprint.key.clone(), self.entries.len());
        self.entries.push(blueprint);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Blueprint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
