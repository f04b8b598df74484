//! Variable naming

use std::collections::HashMap;

use crate::util::to_lower_camel;

/// Per-type occurrence counter used to keep generated names unique.
///
/// Counts are keyed by the type's short name, so same-named types from
/// different namespaces share one sequence.
#[derive(Debug, Default)]
pub struct TypeCounter {
    counts: HashMap<String, usize>,
}

impl TypeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next variable name for a type: `paragraph`, `paragraph1`, `paragraph2`, ...
    pub fn next_name(&mut self, type_name: &str) -> String {
        let base = to_lower_camel(type_name);
        match self.counts.get_mut(type_name) {
            Some(count) => {
                let name = format!("{}{}", base, count);
                *count += 1;
                name
            }
            None => {
                self.counts.insert(type_name.to_string(), 1);
                base
            }
        }
    }

    /// How many names were handed out for a type
    pub fn count(&self, type_name: &str) -> usize {
        self.counts.get(type_name).copied().unwrap_or(0)
    }
}
