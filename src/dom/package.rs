//! Package and part arena

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::schema::{PackageDef, PartDef};

use super::Element;

/// Location of a part inside its package (`/word/document.xml`).
///
/// Part names compare ASCII case-insensitively, matching how packages
/// resolve them.
#[derive(Debug, Clone, Eq)]
pub struct PartUri(String);

impl PartUri {
    pub fn new(path: &str) -> Self {
        if path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{}", path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory portion used to resolve relative relationship targets
    pub fn directory(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// Path of the relationships part that belongs to this part
    pub fn relationships_path(&self) -> String {
        let dir = self.directory().trim_start_matches('/');
        let file = &self.0[self.0.rfind('/').map_or(0, |i| i + 1)..];
        if dir.is_empty() {
            format!("_rels/{}.rels", file)
        } else {
            format!("{}/_rels/{}.rels", dir, file)
        }
    }
}

impl PartialEq for PartUri {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for PartUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable index of a part in its package arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub(crate) usize);

/// Relationship from an owner to an internal part
#[derive(Debug, Clone)]
pub struct PartRelationship {
    pub id: String,
    pub target: PartId,
}

/// Relationship to a resource outside the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRelationship {
    pub id: String,
    pub relationship_type: String,
    pub target: String,
}

/// Hyperlink relationship (always stored separately from other external relationships)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkRelationship {
    pub id: String,
    pub target: String,
    pub is_external: bool,
}

/// A part of the package
#[derive(Debug, Clone)]
pub struct Part {
    pub uri: PartUri,
    pub def: &'static PartDef,
    pub content_type: String,
    /// Structured root content, when the part type has one and it was loaded
    pub root: Option<Element>,
    /// Raw bytes of the part as stored in the package
    pub data: Vec<u8>,
    pub children: Vec<PartRelationship>,
    pub hyperlinks: Vec<HyperlinkRelationship>,
    pub external_relationships: Vec<ExternalRelationship>,
}

impl Part {
    pub fn new(uri: &str, def: &'static PartDef, content_type: &str) -> Self {
        Self {
            uri: PartUri::new(uri),
            def,
            content_type: content_type.to_string(),
            root: None,
            data: Vec::new(),
            children: Vec::new(),
            hyperlinks: Vec::new(),
            external_relationships: Vec::new(),
        }
    }

    /// Builder: set the structured root
    pub fn with_root(mut self, root: Element) -> Self {
        self.root = Some(root);
        self
    }

    /// Builder: set the raw payload
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.def.type_name
    }
}

/// An open document package
#[derive(Debug, Clone)]
pub struct Package {
    pub def: &'static PackageDef,
    /// Member of the document type enumeration (`Document`, `Workbook`, ...)
    pub document_type: &'static str,
    parts: Vec<Part>,
    pub relationships: Vec<PartRelationship>,
    pub hyperlinks: Vec<HyperlinkRelationship>,
    pub external_relationships: Vec<ExternalRelationship>,
}

impl Package {
    pub fn new(def: &'static PackageDef, document_type: &'static str) -> Self {
        Self {
            def,
            document_type,
            parts: Vec::new(),
            relationships: Vec::new(),
            hyperlinks: Vec::new(),
            external_relationships: Vec::new(),
        }
    }

    /// Store a part in the arena. The part is unreachable until related.
    pub fn add_part(&mut self, part: Part) -> PartId {
        self.parts.push(part);
        PartId(self.parts.len() - 1)
    }

    /// Relate `target` to an owner part, or to the package itself when `owner` is `None`.
    pub fn relate(&mut self, owner: Option<PartId>, id: &str, target: PartId) {
        let relationship = PartRelationship {
            id: id.to_string(),
            target,
        };
        match owner {
            Some(owner) => self.parts[owner.0].children.push(relationship),
            None => self.relationships.push(relationship),
        }
    }

    pub fn part(&self, id: PartId) -> &Part {
        &self.parts[id.0]
    }

    pub fn part_mut(&mut self, id: PartId) -> &mut Part {
        &mut self.parts[id.0]
    }

    /// Arena lookup by location
    pub fn find_part(&self, uri: &PartUri) -> Option<PartId> {
        self.parts.iter().position(|p| &p.uri == uri).map(PartId)
    }

    pub fn parts(&self) -> impl Iterator<Item = (PartId, &Part)> {
        self.parts.iter().enumerate().map(|(i, p)| (PartId(i), p))
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
