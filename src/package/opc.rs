//! Content types and relationship parts

use std::collections::HashMap;

use roxmltree::Document;

use crate::dom::PartUri;
use crate::error::CodegenError;

/// Fallback for parts no content type rule covers
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// `[Content_Types].xml`: extension defaults plus per-part overrides
#[derive(Debug, Default)]
pub struct ContentTypes {
    defaults: HashMap<String, String>,
    overrides: HashMap<PartUri, String>,
}

impl ContentTypes {
    pub fn parse(xml: &str) -> Result<Self, CodegenError> {
        let doc = Document::parse(xml).map_err(|e| CodegenError::XmlParseError {
            part: "[Content_Types].xml".to_string(),
            source: e,
        })?;

        let mut content_types = ContentTypes::default();
        for node in doc.root_element().children().filter(|n| n.is_element()) {
            let Some(content_type) = node.attribute("ContentType") else {
                continue;
            };
            match node.tag_name().name() {
                "Default" => {
                    if let Some(ext) = node.attribute("Extension") {
                        content_types
                            .defaults
                            .insert(ext.to_ascii_lowercase(), content_type.to_string());
                    }
                }
                "Override" => {
                    if let Some(part_name) = node.attribute("PartName") {
                        content_types
                            .overrides
                            .insert(PartUri::new(part_name), content_type.to_string());
                    }
                }
                _ => {}
            }
        }
        Ok(content_types)
    }

    /// Content type of a part: its override, else the default for its extension
    pub fn content_type_of(&self, uri: &PartUri) -> &str {
        if let Some(ct) = self.overrides.get(uri) {
            return ct;
        }
        let name = uri.as_str();
        let file = &name[name.rfind('/').map_or(0, |i| i + 1)..];
        file.rfind('.')
            .and_then(|i| self.defaults.get(&file[i + 1..].to_ascii_lowercase()))
            .map_or(DEFAULT_CONTENT_TYPE, String::as_str)
    }
}

/// One `<Relationship>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcRelationship {
    pub id: String,
    pub relationship_type: String,
    pub target: String,
    /// `TargetMode="External"`
    pub external: bool,
}

/// Parse a relationships part; `part` names it in errors.
pub fn parse_relationships(xml: &str, part: &str) -> Result<Vec<OpcRelationship>, CodegenError> {
    let doc = Document::parse(xml).map_err(|e| CodegenError::XmlParseError {
        part: part.to_string(),
        source: e,
    })?;

    let relationships = doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
        .filter_map(|node| {
            Some(OpcRelationship {
                id: node.attribute("Id")?.to_string(),
                relationship_type: node.attribute("Type")?.to_string(),
                target: node.attribute("Target")?.to_string(),
                external: node
                    .attribute("TargetMode")
                    .is_some_and(|mode| mode.eq_ignore_ascii_case("External")),
            })
        })
        .collect();
    Ok(relationships)
}

/// Resolve a relationship target against the directory of its source part.
pub fn resolve_target(source_directory: &str, target: &str) -> PartUri {
    let target = target.split('#').next().unwrap_or(target);
    let joined = if target.starts_with('/') {
        target.to_string()
    } else {
        format!("{}/{}", source_directory, target)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    PartUri::new(&format!("/{}", segments.join("/")))
}
