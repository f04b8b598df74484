//! Loading OpenXML packages into the document graph

pub mod opc;
pub mod reader;
pub mod xml;

use std::io::{Read, Seek};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use crate::dom::{ExternalRelationship, HyperlinkRelationship, Package, Part, PartId, PartUri};
use crate::error::CodegenError;
use crate::schema::{self, HYPERLINK_RELATIONSHIP};

pub use opc::{ContentTypes, OpcRelationship};
pub use reader::PackageContents;
pub use xml::{decode_xml, parse_element};

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const PACKAGE_RELATIONSHIPS: &str = "_rels/.rels";
const OFFICE_DOCUMENT_RELATIONSHIP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Read a package file into the document graph.
pub fn read_package(path: &Path) -> Result<Package> {
    let contents = PackageContents::from_path(path)?;
    load_package(&contents)
}

/// Read a package from any seekable ZIP source.
pub fn read_package_from<R: Read + Seek>(reader: R, label: &str) -> Result<Package> {
    let contents = PackageContents::from_reader(reader, label)?;
    load_package(&contents)
}

/// Build the document graph from in-memory package contents.
pub fn load_package(contents: &PackageContents) -> Result<Package> {
    let content_types = match contents.get_bytes(CONTENT_TYPES_PART) {
        Some(bytes) => ContentTypes::parse(&decode_xml(bytes))?,
        None => {
            return Err(CodegenError::InvalidPackageFormat {
                message: format!("missing {}", CONTENT_TYPES_PART),
            }
            .into())
        }
    };
    let root_relationships = match contents.get_bytes(PACKAGE_RELATIONSHIPS) {
        Some(bytes) => opc::parse_relationships(&decode_xml(bytes), PACKAGE_RELATIONSHIPS)?,
        None => {
            return Err(CodegenError::InvalidPackageFormat {
                message: format!("missing {}", PACKAGE_RELATIONSHIPS),
            }
            .into())
        }
    };

    let main = root_relationships
        .iter()
        .find(|r| !r.external && r.relationship_type == OFFICE_DOCUMENT_RELATIONSHIP)
        .ok_or_else(|| CodegenError::InvalidPackageFormat {
            message: "no main document relationship".to_string(),
        })?;
    let main_uri = opc::resolve_target("", &main.target);
    let main_content_type = content_types.content_type_of(&main_uri);
    let (def, document_type) = schema::package_for_main_content_type(main_content_type).ok_or_else(|| {
        CodegenError::InvalidPackageFormat {
            message: format!("unsupported main part content type {}", main_content_type),
        }
    })?;

    let mut loader = Loader {
        contents,
        content_types: &content_types,
        package: Package::new(def, document_type),
    };
    loader.load_relationships(None, "", &root_relationships)?;
    debug!(
        package = def.type_name,
        parts = loader.package.part_count(),
        "Loaded package"
    );
    Ok(loader.package)
}

struct Loader<'c> {
    contents: &'c PackageContents,
    content_types: &'c ContentTypes,
    package: Package,
}

impl Loader<'_> {
    fn load_relationships(
        &mut self,
        owner: Option<PartId>,
        source_directory: &str,
        relationships: &[OpcRelationship],
    ) -> Result<()> {
        for rel in relationships {
            if rel.relationship_type == HYPERLINK_RELATIONSHIP {
                let link = HyperlinkRelationship {
                    id: rel.id.clone(),
                    target: rel.target.clone(),
                    is_external: rel.external,
                };
                match owner {
                    Some(id) => self.package.part_mut(id).hyperlinks.push(link),
                    None => self.package.hyperlinks.push(link),
                }
                continue;
            }
            if rel.external {
                let external = ExternalRelationship {
                    id: rel.id.clone(),
                    relationship_type: rel.relationship_type.clone(),
                    target: rel.target.clone(),
                };
                match owner {
                    Some(id) => self.package.part_mut(id).external_relationships.push(external),
                    None => self.package.external_relationships.push(external),
                }
                continue;
            }

            let uri = opc::resolve_target(source_directory, &rel.target);
            if let Some(existing) = self.package.find_part(&uri) {
                self.package.relate(owner, &rel.id, existing);
                continue;
            }
            let Some(data) = self.contents.get_bytes(uri.as_str()) else {
                warn!(uri = %uri, id = %rel.id, "Skipping relationship to a missing part");
                continue;
            };

            let part_id = self.load_part(&uri, &rel.relationship_type, data)?;
            self.package.relate(owner, &rel.id, part_id);

            let rels_path = uri.relationships_path();
            if let Some(bytes) = self.contents.get_bytes(&rels_path) {
                let children = opc::parse_relationships(&decode_xml(bytes), &rels_path)?;
                let directory = uri.directory().to_string();
                self.load_relationships(Some(part_id), &directory, &children)?;
            }
        }
        Ok(())
    }

    fn load_part(&mut self, uri: &PartUri, relationship_type: &str, data: &[u8]) -> Result<PartId> {
        let content_type = self.content_types.content_type_of(uri);
        let def = schema::classify_part(relationship_type, content_type);
        let mut part = Part::new(uri.as_str(), def, content_type).with_data(data.to_vec());
        if def.root.is_some() {
            part.root = Some(parse_element(&decode_xml(data), uri.as_str())?);
        }
        debug!(uri = %uri, part_type = def.type_name, "Loaded part");
        Ok(self.package.add_part(part))
    }
}
