//! XML part decoding and element tree loading

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use roxmltree::{Document, Node, NodeType};

use crate::dom::{Attribute, Element, ElementKind, McAttributes, NamespaceDeclaration, XmlName, XmlNodeKind};
use crate::error::CodegenError;
use crate::schema::{ns, Construction};

/// Decode part bytes to text, honouring a byte order mark.
///
/// Without a BOM the bytes are read as UTF-8, falling back to Windows-1252
/// for legacy producers.
pub fn decode_xml(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded;
    }
    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

/// Parse markup into an element tree; `part` names the source in errors.
pub fn parse_element(xml: &str, part: &str) -> Result<Element, CodegenError> {
    let doc = Document::parse(xml).map_err(|e| CodegenError::XmlParseError {
        part: part.to_string(),
        source: e,
    })?;
    Ok(convert_element(doc.root_element(), None, xml))
}

fn convert_element(node: Node<'_, '_>, parent: Option<Node<'_, '_>>, source: &str) -> Element {
    let tag = node.tag_name();
    let namespace_uri = tag.namespace().unwrap_or("");
    let prefix = prefix_for(node, namespace_uri);
    let mut element = Element::from_name(XmlName::new(prefix, tag.name(), namespace_uri));

    element.namespace_declarations = declared_namespaces(node, parent);

    let mut mc = McAttributes::default();
    let mut has_mc = false;
    for attr in node.attributes() {
        let attr_ns = attr.namespace().unwrap_or("");
        if attr_ns == ns::MC && mc.set(attr.name(), attr.value()) {
            has_mc = true;
            continue;
        }
        let attr_prefix = if attr_ns == ns::XML {
            "xml"
        } else if attr_ns.is_empty() {
            ""
        } else {
            prefix_for(node, attr_ns)
        };
        element.attributes.push(Attribute {
            name: XmlName::new(attr_prefix, attr.name(), attr_ns),
            value: attr.value().to_string(),
        });
    }
    if has_mc {
        element.mc_attributes = Some(mc);
    }

    let leaf_text = matches!(
        element.kind,
        ElementKind::Known(def) if matches!(def.construction, Construction::LeafText)
    );
    let preserve_space = space_preserved(node);
    let mut text = String::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.children.push(convert_element(child, Some(node), source)),
            NodeType::Text => {
                let value = child.text().unwrap_or("");
                if leaf_text || !value.trim().is_empty() {
                    text.push_str(value);
                } else if preserve_space && !value.is_empty() {
                    element
                        .children
                        .push(Element::misc(XmlNodeKind::SignificantWhitespace, value));
                }
            }
            NodeType::Comment => {
                let value = child.text().unwrap_or("");
                element
                    .children
                    .push(Element::misc(XmlNodeKind::Comment, &format!("<!--{}-->", value)));
            }
            NodeType::PI => {
                if let Some(pi) = child.pi() {
                    let markup = match pi.value {
                        Some(value) => format!("<?{} {}?>", pi.target, value),
                        None => format!("<?{}?>", pi.target),
                    };
                    element
                        .children
                        .push(Element::misc(XmlNodeKind::ProcessingInstruction, &markup));
                }
            }
            NodeType::Root => {}
        }
    }

    if matches!(element.kind, ElementKind::Unknown) && !element.children.is_empty() && !text.is_empty() {
        // Text interleaved with children only survives as the original markup
        element.children.clear();
        element.inner_xml = Some(inner_markup(node, source).to_string());
        return element;
    }
    // Mixed content of composite known elements has no representation
    let keeps_text = leaf_text || matches!(element.kind, ElementKind::Unknown);
    if keeps_text && (leaf_text || !text.is_empty()) {
        element.text = Some(text);
    }
    element
}

/// Whether `xml:space="preserve"` is in effect for this node
fn space_preserved(node: Node<'_, '_>) -> bool {
    node.ancestors()
        .find_map(|n| n.attribute((ns::XML, "space")))
        .map_or(false, |value| value == "preserve")
}

/// Source text between the start and end tags of an element
fn inner_markup<'s>(node: Node<'_, '_>, source: &'s str) -> &'s str {
    match (node.first_child(), node.last_child()) {
        (Some(first), Some(last)) => source
            .get(first.range().start..last.range().end)
            .unwrap_or(""),
        _ => "",
    }
}

fn prefix_for<'a>(node: Node<'a, '_>, namespace_uri: &str) -> &'a str {
    if namespace_uri.is_empty() {
        return "";
    }
    node.lookup_prefix(namespace_uri).unwrap_or("")
}

/// Namespaces declared on this node rather than inherited from its parent
fn declared_namespaces(node: Node<'_, '_>, parent: Option<Node<'_, '_>>) -> Vec<NamespaceDeclaration> {
    node.namespaces()
        .filter(|namespace| namespace.uri() != ns::XML)
        .filter(|namespace| {
            parent.map_or(true, |parent| {
                !parent
                    .namespaces()
                    .any(|p| p.name() == namespace.name() && p.uri() == namespace.uri())
            })
        })
        .map(|namespace| NamespaceDeclaration {
            prefix: namespace.name().unwrap_or("").to_string(),
            uri: namespace.uri().to_string(),
        })
        .collect()
}
