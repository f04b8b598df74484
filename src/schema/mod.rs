//! Static type tables for the OpenXML object model
//!
//! Every element, enumeration and part type the generator understands is
//! described once here. Builders look node variants up by tag instead of
//! inspecting types at runtime.

mod elements;
mod enums;
mod parts;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use elements::ELEMENTS;
pub use enums::*;
pub use parts::{
    AddMethodDef, PackageDef, PackageType, PartDef, RootDef, HYPERLINK_RELATIONSHIP, PACKAGES, PARTS,
};

/// Namespace URIs used by the tables
pub mod ns {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const X: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    pub const P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const W14: &str = "http://schemas.microsoft.com/office/word/2010/wordml";
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    pub const MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
}

/// Code namespaces of the generated types
pub mod code_ns {
    pub const SYSTEM: &str = "System";
    pub const SYSTEM_IO: &str = "System.IO";
    pub const OPENXML: &str = "DocumentFormat.OpenXml";
    pub const PACKAGING: &str = "DocumentFormat.OpenXml.Packaging";
    pub const WORDPROCESSING: &str = "DocumentFormat.OpenXml.Wordprocessing";
    pub const SPREADSHEET: &str = "DocumentFormat.OpenXml.Spreadsheet";
    pub const PRESENTATION: &str = "DocumentFormat.OpenXml.Presentation";
}

/// Alias used for a code namespace when aliasing is enabled.
pub fn namespace_alias(namespace: &str) -> Option<&'static str> {
    match namespace {
        code_ns::WORDPROCESSING => Some("W"),
        code_ns::SPREADSHEET => Some("X"),
        code_ns::PRESENTATION => Some("P"),
        code_ns::OPENXML => Some("OX"),
        code_ns::PACKAGING => Some("Pkg"),
        _ => None,
    }
}

/// How an element type is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construction {
    /// Bare default constructor
    Default,
    /// Single-argument constructor seeded with the text content
    LeafText,
}

/// Qualified XML attribute name. An empty `namespace_uri` means unqualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeName {
    pub prefix: &'static str,
    pub local_name: &'static str,
    pub namespace_uri: &'static str,
}

/// Primitive-backed value wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Boolean,
    OnOff,
    Byte,
    Int16,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Double,
    Decimal,
    HexBinary,
    Base64Binary,
    DateTime,
}

impl ScalarType {
    /// Name of the value wrapper type
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            ScalarType::String => "StringValue",
            ScalarType::Boolean => "BooleanValue",
            ScalarType::OnOff => "OnOffValue",
            ScalarType::Byte => "ByteValue",
            ScalarType::Int16 => "Int16Value",
            ScalarType::Int32 => "Int32Value",
            ScalarType::Int64 => "Int64Value",
            ScalarType::UInt32 => "UInt32Value",
            ScalarType::UInt64 => "UInt64Value",
            ScalarType::Double => "DoubleValue",
            ScalarType::Decimal => "DecimalValue",
            ScalarType::HexBinary => "HexBinaryValue",
            ScalarType::Base64Binary => "Base64BinaryValue",
            ScalarType::DateTime => "DateTimeValue",
        }
    }
}

/// Kind of a schema property
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind {
    Scalar(ScalarType),
    Enum(&'static EnumDef),
    /// Object-valued list wrapper, populated through its inner text
    List(ScalarType),
}

/// One attribute-backed property of an element type
#[derive(Debug, Clone, Copy)]
pub struct PropertyDef {
    pub name: &'static str,
    pub attribute: AttributeName,
    pub kind: PropertyKind,
}

/// An element type of the object model
#[derive(Debug)]
pub struct ElementDef {
    pub type_name: &'static str,
    pub namespace: &'static str,
    pub prefix: &'static str,
    pub local_name: &'static str,
    pub namespace_uri: &'static str,
    pub construction: Construction,
    pub properties: &'static [PropertyDef],
}

impl ElementDef {
    /// Find the property backed by the given attribute.
    pub fn property_for(&self, namespace_uri: &str, local_name: &str) -> Option<&'static PropertyDef> {
        self.properties.iter().find(|p| {
            p.attribute.local_name == local_name && p.attribute.namespace_uri == namespace_uri
        })
    }
}

/// One member of an enumeration
#[derive(Debug)]
pub struct EnumMember {
    pub name: &'static str,
    pub value: &'static str,
}

/// An enumeration type of the object model
#[derive(Debug)]
pub struct EnumDef {
    pub type_name: &'static str,
    pub namespace: &'static str,
    pub members: &'static [EnumMember],
}

impl EnumDef {
    /// Resolve a serialized value to its member.
    pub fn member_for(&self, value: &str) -> Option<&'static EnumMember> {
        self.members.iter().find(|m| m.value == value)
    }
}

static ELEMENT_INDEX: Lazy<HashMap<(&'static str, &'static str), &'static ElementDef>> =
    Lazy::new(|| {
        ELEMENTS
            .iter()
            .map(|def| ((def.namespace_uri, def.local_name), def))
            .collect()
    });

static ELEMENT_NAME_INDEX: Lazy<HashMap<(&'static str, &'static str), &'static ElementDef>> =
    Lazy::new(|| {
        ELEMENTS
            .iter()
            .map(|def| ((def.namespace, def.type_name), def))
            .collect()
    });

/// Look an element type up by its XML name.
pub fn element_by_xml(namespace_uri: &str, local_name: &str) -> Option<&'static ElementDef> {
    ELEMENT_INDEX.get(&(namespace_uri, local_name)).copied()
}

/// Look an element type up by its code namespace and type name.
pub fn element_by_type(namespace: &str, type_name: &str) -> Option<&'static ElementDef> {
    ELEMENT_NAME_INDEX.get(&(namespace, type_name)).copied()
}

/// Look a part type up by name.
pub fn part_by_name(type_name: &str) -> Option<&'static PartDef> {
    PARTS.iter().find(|p| p.type_name == type_name)
}

/// Classify a part from the relationship that reaches it and its content type.
///
/// Relationship types shared by several part types (styles, officeDocument)
/// are disambiguated by content type. Anything unmatched is an extended part.
pub fn classify_part(relationship_type: &str, content_type: &str) -> &'static PartDef {
    let mut fallback = None;
    for def in PARTS.iter() {
        if def.relationship_type != relationship_type {
            continue;
        }
        if def.content_types.is_empty() {
            fallback.get_or_insert(def);
        } else if def.content_types.iter().any(|ct| *ct == content_type) {
            return def;
        }
    }
    fallback.unwrap_or(&parts::EXTENDED_PART)
}

/// Determine the package type from the content type of its main part.
pub fn package_for_main_content_type(content_type: &str) -> Option<(&'static PackageDef, &'static str)> {
    PACKAGES.iter().find_map(|pkg| {
        pkg.document_types
            .iter()
            .find(|(ct, _)| *ct == content_type)
            .map(|(_, member)| (pkg, *member))
    })
}
