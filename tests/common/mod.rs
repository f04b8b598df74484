//! Common test utilities for oxml-codegen tests
//!
//! Packages are assembled on the fly in a temp directory, so tests never
//! depend on binary fixtures checked into the repository.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use oxml_codegen::codegen::ir::{Expression, Statement};
use oxml_codegen::CompilationUnit;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const X_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const MC_NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
pub const REL_HEADER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
pub const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
pub const REL_HYPERLINK: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
pub const REL_WORKSHEET: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

pub const CT_DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const CT_HEADER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
pub const CT_WORKBOOK: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
pub const CT_WORKSHEET: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";

/// Bytes stored in the sample image part
pub const IMAGE_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Body of the sample document: a paragraph with an enum, a run, a hyperlink,
/// an element the schema does not know, and a comment.
pub const SAMPLE_BODY: &str = r#"<w:p w:rsidR="00AB12CD" w:rsidRDefault="00AB12CD"><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">Hello </w:t></w:r><w:hyperlink r:id="rId4"><w:r><w:t>link</w:t></w:r></w:hyperlink></w:p><w:customBlock w:flavour="mint">custom &amp; text</w:customBlock><!-- reviewed --><w:p><w:r><w:t>World</w:t></w:r></w:p>"#;

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write the sample word document with the given body markup
    pub fn write_docx(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path(name);
        write_zip(&path, &sample_docx_entries(body));
        path
    }

    /// Write a minimal workbook with one worksheet holding `sheet_data` markup
    pub fn write_xlsx(&self, name: &str, sheet_data: &str) -> PathBuf {
        let path = self.path(name);
        write_zip(&path, &sample_xlsx_entries(sheet_data));
        path
    }
}

/// Write ZIP entries to a file
pub fn write_zip(path: &Path, entries: &[(String, Vec<u8>)]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        zip.start_file(name.as_str(), options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

fn start_document() -> Writer<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .unwrap();
    writer
}

/// `[Content_Types].xml` with the usual defaults plus the given overrides
pub fn content_types_xml(overrides: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = start_document();
    let mut root = BytesStart::new("Types");
    root.push_attribute(("xmlns", "http://schemas.openxmlformats.org/package/2006/content-types"));
    writer.write_event(Event::Start(root)).unwrap();

    for (ext, ct) in [
        ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
        ("xml", "application/xml"),
        ("png", "image/png"),
    ] {
        let mut default = BytesStart::new("Default");
        default.push_attribute(("Extension", ext));
        default.push_attribute(("ContentType", ct));
        writer.write_event(Event::Empty(default)).unwrap();
    }
    for (part_name, ct) in overrides {
        let mut entry = BytesStart::new("Override");
        entry.push_attribute(("PartName", *part_name));
        entry.push_attribute(("ContentType", *ct));
        writer.write_event(Event::Empty(entry)).unwrap();
    }

    writer.write_event(Event::End(BytesEnd::new("Types"))).unwrap();
    writer.into_inner()
}

/// A relationship entry: id, type, target, external
pub type Rel<'a> = (&'a str, &'a str, &'a str, bool);

/// A relationships part
pub fn relationships_xml(rels: &[Rel<'_>]) -> Vec<u8> {
    let mut writer = start_document();
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", "http://schemas.openxmlformats.org/package/2006/relationships"));
    writer.write_event(Event::Start(root)).unwrap();
    for (id, rel_type, target, external) in rels {
        let mut rel = BytesStart::new("Relationship");
        rel.push_attribute(("Id", *id));
        rel.push_attribute(("Type", *rel_type));
        rel.push_attribute(("Target", *target));
        if *external {
            rel.push_attribute(("TargetMode", "External"));
        }
        writer.write_event(Event::Empty(rel)).unwrap();
    }
    writer.write_event(Event::End(BytesEnd::new("Relationships"))).unwrap();
    writer.into_inner()
}

/// Wrap WordprocessingML markup in a root element declaring the usual namespaces
pub fn word_part(root: &str, inner: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:{root} xmlns:w="{w}" xmlns:r="{r}" xmlns:mc="{mc}" mc:Ignorable="w14">{inner}</w:{root}>"#,
        root = root,
        w = W_NS,
        r = R_NS,
        mc = MC_NS,
        inner = inner
    )
    .into_bytes()
}

/// Entries of a word document where the image is shared by the document and its header
pub fn sample_docx_entries(body: &str) -> Vec<(String, Vec<u8>)> {
    vec![
        (
            "[Content_Types].xml".to_string(),
            content_types_xml(&[
                ("/word/document.xml", CT_DOCUMENT),
                ("/word/styles.xml", CT_STYLES),
                ("/word/header1.xml", CT_HEADER),
            ]),
        ),
        (
            "_rels/.rels".to_string(),
            relationships_xml(&[("rId1", REL_OFFICE_DOCUMENT, "word/document.xml", false)]),
        ),
        (
            "word/_rels/document.xml.rels".to_string(),
            relationships_xml(&[
                ("rId1", REL_STYLES, "styles.xml", false),
                ("rId2", REL_HEADER, "header1.xml", false),
                ("rId3", REL_IMAGE, "media/image1.png", false),
                ("rId4", REL_HYPERLINK, "https://example.com/", true),
            ]),
        ),
        (
            "word/_rels/header1.xml.rels".to_string(),
            relationships_xml(&[("rId1", REL_IMAGE, "media/image1.png", false)]),
        ),
        (
            "word/document.xml".to_string(),
            word_part("document", &format!("<w:body>{}</w:body>", body)),
        ),
        (
            "word/styles.xml".to_string(),
            word_part(
                "styles",
                r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1"><w:name w:val="Normal"/></w:style>"#,
            ),
        ),
        (
            "word/header1.xml".to_string(),
            word_part("hdr", "<w:p><w:r><w:t>Header</w:t></w:r></w:p>"),
        ),
        ("word/media/image1.png".to_string(), IMAGE_BYTES.to_vec()),
    ]
}

/// Entries of a workbook with a single worksheet
pub fn sample_xlsx_entries(sheet_data: &str) -> Vec<(String, Vec<u8>)> {
    let workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{x}" xmlns:r="{r}"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        x = X_NS,
        r = R_NS
    );
    let worksheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{x}"><sheetData>{data}</sheetData></worksheet>"#,
        x = X_NS,
        data = sheet_data
    );
    vec![
        (
            "[Content_Types].xml".to_string(),
            content_types_xml(&[
                ("/xl/workbook.xml", CT_WORKBOOK),
                ("/xl/worksheets/sheet1.xml", CT_WORKSHEET),
            ]),
        ),
        (
            "_rels/.rels".to_string(),
            relationships_xml(&[("rId1", REL_OFFICE_DOCUMENT, "xl/workbook.xml", false)]),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_string(),
            relationships_xml(&[("rId1", REL_WORKSHEET, "worksheets/sheet1.xml", false)]),
        ),
        ("xl/workbook.xml".to_string(), workbook.into_bytes()),
        ("xl/worksheets/sheet1.xml".to_string(), worksheet.into_bytes()),
    ]
}

/// Name of the method an invocation statement calls, if it is one
pub fn invoked_method(statement: &Statement) -> Option<&str> {
    match statement {
        Statement::Invoke {
            call: Expression::Invoke { method, .. },
        } => Some(method.as_str()),
        _ => None,
    }
}

/// Every invocation statement calling `method`
pub fn calls<'a>(unit: &'a CompilationUnit, method: &str) -> Vec<&'a Statement> {
    unit.statements()
        .into_iter()
        .filter(|s| invoked_method(s) == Some(method))
        .collect()
}

/// Declarations whose type has the given short name
pub fn declarations_of<'a>(unit: &'a CompilationUnit, type_name: &str) -> Vec<&'a str> {
    unit.statements()
        .into_iter()
        .filter_map(|s| match s {
            Statement::Declare { ty, name, .. } if ty.name == type_name => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

/// Property assignments (`variable.Property = ...`) made to `variable`
pub fn assigned_properties<'a>(statements: &'a [Statement], variable: &str) -> Vec<&'a str> {
    statements
        .iter()
        .filter_map(|s| match s {
            Statement::Assign {
                target: Expression::Member { target, name },
                ..
            } => match target.as_ref() {
                Expression::Variable { name: var } if var == variable => Some(name.as_str()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}
