//! Element tree nodes

use std::str::FromStr;

use crate::schema::{self, code_ns, ElementDef};

/// A namespace-qualified XML name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlName {
    pub prefix: String,
    pub local_name: String,
    pub namespace_uri: String,
}

impl XmlName {
    pub fn new(prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            local_name: local_name.to_string(),
            namespace_uri: namespace_uri.to_string(),
        }
    }

    /// `prefix:local` or just `local` when unprefixed
    pub fn qualified(&self) -> String {
        if self.prefix.is_empty() {
            self.local_name.clone()
        } else {
            format!("{}:{}", self.prefix, self.local_name)
        }
    }
}

/// Raw XML node kinds that are kept as opaque nodes in the element tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlNodeKind {
    Comment,
    ProcessingInstruction,
    /// Whitespace-only text under `xml:space="preserve"`
    SignificantWhitespace,
}

impl XmlNodeKind {
    /// Member name of the node-type enumeration
    pub fn member_name(&self) -> &'static str {
        match self {
            XmlNodeKind::Comment => "Comment",
            XmlNodeKind::ProcessingInstruction => "ProcessingInstruction",
            XmlNodeKind::SignificantWhitespace => "SignificantWhitespace",
        }
    }
}

impl FromStr for XmlNodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comment" => Ok(XmlNodeKind::Comment),
            "processinginstruction" | "pi" => Ok(XmlNodeKind::ProcessingInstruction),
            "significantwhitespace" | "whitespace" => Ok(XmlNodeKind::SignificantWhitespace),
            _ => Err(format!("Unknown XML node kind: {}", s)),
        }
    }
}

/// Node variant of an element
#[derive(Debug, Clone, Copy)]
pub enum ElementKind {
    /// A type from the schema tables
    Known(&'static ElementDef),
    /// Catch-all for elements the tables do not describe
    Unknown,
    /// Comment, processing instruction and similar raw nodes
    MiscNode(XmlNodeKind),
}

/// An attribute as it appears in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: XmlName,
    pub value: String,
}

/// A namespace declared on an element (`xmlns:prefix="uri"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    pub prefix: String,
    pub uri: String,
}

/// Markup compatibility attribute block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McAttributes {
    pub ignorable: Option<String>,
    pub process_content: Option<String>,
    pub preserve_elements: Option<String>,
    pub preserve_attributes: Option<String>,
    pub must_understand: Option<String>,
}

impl McAttributes {
    /// Property name / value pairs of the attributes that are present
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("Ignorable", &self.ignorable),
            ("ProcessContent", &self.process_content),
            ("PreserveElements", &self.preserve_elements),
            ("PreserveAttributes", &self.preserve_attributes),
            ("MustUnderstand", &self.must_understand),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Set an attribute by its local XML name. Returns false for names outside the block.
    pub fn set(&mut self, local_name: &str, value: &str) -> bool {
        let slot = match local_name {
            "Ignorable" => &mut self.ignorable,
            "ProcessContent" => &mut self.process_content,
            "PreserveElements" => &mut self.preserve_elements,
            "PreserveAttributes" => &mut self.preserve_attributes,
            "MustUnderstand" => &mut self.must_understand,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }
}

/// A node of the element tree
#[derive(Debug, Clone)]
pub struct Element {
    pub name: XmlName,
    pub kind: ElementKind,
    pub attributes: Vec<Attribute>,
    pub namespace_declarations: Vec<NamespaceDeclaration>,
    pub mc_attributes: Option<McAttributes>,
    pub children: Vec<Element>,
    /// Text content of leaf text elements, or the raw markup of misc nodes
    pub text: Option<String>,
    /// Original inner markup of unknown elements that mix text with child nodes
    pub inner_xml: Option<String>,
}

impl Element {
    /// Create an element of a schema type.
    pub fn known(def: &'static ElementDef) -> Self {
        Self::with_kind(
            XmlName::new(def.prefix, def.local_name, def.namespace_uri),
            ElementKind::Known(def),
        )
    }

    /// Create an element from its XML name, resolving the schema type when known.
    pub fn from_name(name: XmlName) -> Self {
        match schema::element_by_xml(&name.namespace_uri, &name.local_name) {
            Some(def) => Self::with_kind(name, ElementKind::Known(def)),
            None => Self::with_kind(name, ElementKind::Unknown),
        }
    }

    /// Create a raw misc node holding its outer markup.
    pub fn misc(kind: XmlNodeKind, outer_xml: &str) -> Self {
        let mut element = Self::with_kind(XmlName::new("", "#misc", ""), ElementKind::MiscNode(kind));
        element.text = Some(outer_xml.to_string());
        element
    }

    fn with_kind(name: XmlName, kind: ElementKind) -> Self {
        Self {
            name,
            kind,
            attributes: Vec::new(),
            namespace_declarations: Vec::new(),
            mc_attributes: None,
            children: Vec::new(),
            text: None,
            inner_xml: None,
        }
    }

    /// Builder: add an attribute
    pub fn attr(mut self, prefix: &str, local_name: &str, namespace_uri: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            name: XmlName::new(prefix, local_name, namespace_uri),
            value: value.to_string(),
        });
        self
    }

    /// Builder: add a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: set text content
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Builder: declare a namespace
    pub fn namespace(mut self, prefix: &str, uri: &str) -> Self {
        self.namespace_declarations.push(NamespaceDeclaration {
            prefix: prefix.to_string(),
            uri: uri.to_string(),
        });
        self
    }

    /// Value of an attribute, or `None` when it is absent
    pub fn attribute(&self, namespace_uri: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace_uri == namespace_uri && a.name.local_name == local_name)
            .map(|a| a.value.as_str())
    }

    /// Short name of the generated type
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ElementKind::Known(def) => def.type_name,
            ElementKind::Unknown => "OpenXmlUnknownElement",
            ElementKind::MiscNode(_) => "OpenXmlMiscNode",
        }
    }

    /// Code namespace of the generated type
    pub fn type_namespace(&self) -> &'static str {
        match self.kind {
            ElementKind::Known(def) => def.namespace,
            ElementKind::Unknown | ElementKind::MiscNode(_) => code_ns::OPENXML,
        }
    }

    /// Number of elements in this subtree, including itself
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }
}
