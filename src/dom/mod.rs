//! In-memory document graph consumed by the generator
//!
//! Parts live in an arena owned by the [`Package`] and refer to each other by
//! [`PartId`], so a part reachable from several owners is stored once.
//! Elements form a strict tree under their part.

mod element;
mod package;

pub use element::{Attribute, Element, ElementKind, McAttributes, NamespaceDeclaration, XmlName, XmlNodeKind};
pub use package::{
    ExternalRelationship, HyperlinkRelationship, Package, Part, PartId, PartRelationship, PartUri,
};
