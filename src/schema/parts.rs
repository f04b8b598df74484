//! Part and package types

/// How an owner exposes a dedicated `Add<PartType>` routine.
#[derive(Debug, Clone, Copy)]
pub struct AddMethodDef {
    pub part_type: &'static str,
    /// Whether the routine takes the content type as its argument
    pub takes_content_type: bool,
}

/// Root element binding of a structured part
#[derive(Debug)]
pub struct RootDef {
    pub namespace: &'static str,
    pub element_type: &'static str,
    /// Property on the part that holds the root element
    pub property: &'static str,
}

/// A part type of the packaging model
#[derive(Debug)]
pub struct PartDef {
    pub type_name: &'static str,
    pub relationship_type: &'static str,
    /// Content types that select this part type when the relationship type is shared
    pub content_types: &'static [&'static str],
    pub root: Option<RootDef>,
    /// Opaque payload parts are created with an explicit content type
    pub opaque: bool,
    pub add_methods: &'static [AddMethodDef],
}

impl PartDef {
    /// Find the dedicated add routine this part type offers for a child part type.
    pub fn add_method_for(&self, child_type: &str) -> Option<&'static AddMethodDef> {
        find_add_method(self.add_methods, child_type)
    }
}

/// Distinguishes package types from one another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Wordprocessing,
    Spreadsheet,
    Presentation,
}

/// A package (document) type
#[derive(Debug)]
pub struct PackageDef {
    pub package_type: PackageType,
    pub type_name: &'static str,
    /// Enumeration naming the document flavour passed to `Create`
    pub document_type_enum: &'static str,
    /// Main part content type -> document type member
    pub document_types: &'static [(&'static str, &'static str)],
    pub add_methods: &'static [AddMethodDef],
}

impl PackageDef {
    pub fn add_method_for(&self, child_type: &str) -> Option<&'static AddMethodDef> {
        find_add_method(self.add_methods, child_type)
    }
}

fn find_add_method(methods: &'static [AddMethodDef], child_type: &str) -> Option<&'static AddMethodDef> {
    methods.iter().find(|m| m.part_type == child_type)
}

const fn add(part_type: &'static str, takes_content_type: bool) -> AddMethodDef {
    AddMethodDef {
        part_type,
        takes_content_type,
    }
}

const fn root(namespace: &'static str, element_type: &'static str, property: &'static str) -> Option<RootDef> {
    Some(RootDef {
        namespace,
        element_type,
        property,
    })
}

use super::code_ns::{PRESENTATION, SPREADSHEET, WORDPROCESSING};

const PACKAGE_PROPERTY_PARTS: [AddMethodDef; 4] = [
    add("CoreFilePropertiesPart", false),
    add("ExtendedFilePropertiesPart", false),
    add("CustomFilePropertiesPart", false),
    add("ThumbnailPart", true),
];

pub static PACKAGES: &[PackageDef] = &[
    PackageDef {
        package_type: PackageType::Wordprocessing,
        type_name: "WordprocessingDocument",
        document_type_enum: "WordprocessingDocumentType",
        document_types: &[
            (
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
                "Document",
            ),
            ("application/vnd.ms-word.document.macroEnabled.main+xml", "MacroEnabledDocument"),
            (
                "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml",
                "Template",
            ),
            ("application/vnd.ms-word.template.macroEnabledTemplate.main+xml", "MacroEnabledTemplate"),
        ],
        add_methods: &[
            add("MainDocumentPart", false),
            PACKAGE_PROPERTY_PARTS[0],
            PACKAGE_PROPERTY_PARTS[1],
            PACKAGE_PROPERTY_PARTS[2],
            PACKAGE_PROPERTY_PARTS[3],
        ],
    },
    PackageDef {
        package_type: PackageType::Spreadsheet,
        type_name: "SpreadsheetDocument",
        document_type_enum: "SpreadsheetDocumentType",
        document_types: &[
            ("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml", "Workbook"),
            ("application/vnd.ms-excel.sheet.macroEnabled.main+xml", "MacroEnabledWorkbook"),
            ("application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml", "Template"),
            ("application/vnd.ms-excel.template.macroEnabled.main+xml", "MacroEnabledTemplate"),
            ("application/vnd.ms-excel.addin.macroEnabled.main+xml", "AddIn"),
        ],
        add_methods: &[
            add("WorkbookPart", false),
            PACKAGE_PROPERTY_PARTS[0],
            PACKAGE_PROPERTY_PARTS[1],
            PACKAGE_PROPERTY_PARTS[2],
            PACKAGE_PROPERTY_PARTS[3],
        ],
    },
    PackageDef {
        package_type: PackageType::Presentation,
        type_name: "PresentationDocument",
        document_type_enum: "PresentationDocumentType",
        document_types: &[
            (
                "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
                "Presentation",
            ),
            ("application/vnd.ms-powerpoint.presentation.macroEnabled.main+xml", "MacroEnabledPresentation"),
            ("application/vnd.openxmlformats-officedocument.presentationml.template.main+xml", "Template"),
            ("application/vnd.ms-powerpoint.template.macroEnabled.main+xml", "MacroEnabledTemplate"),
            ("application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml", "Slideshow"),
            ("application/vnd.ms-powerpoint.slideshow.macroEnabled.main+xml", "MacroEnabledSlideshow"),
        ],
        add_methods: &[
            add("PresentationPart", false),
            PACKAGE_PROPERTY_PARTS[0],
            PACKAGE_PROPERTY_PARTS[1],
            PACKAGE_PROPERTY_PARTS[2],
            PACKAGE_PROPERTY_PARTS[3],
        ],
    },
];

const IMAGE_PARENT: [AddMethodDef; 1] = [add("ImagePart", true)];

/// Fallback for relationship types the tables do not know
pub(super) static EXTENDED_PART: PartDef = PartDef {
    type_name: "ExtendedPart",
    relationship_type: "",
    content_types: &[],
    root: None,
    opaque: true,
    add_methods: &[],
};

pub static PARTS: &[PartDef] = &[
    // Package-level properties
    PartDef {
        type_name: "CoreFilePropertiesPart",
        relationship_type: "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "ExtendedFilePropertiesPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "CustomFilePropertiesPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/custom-properties",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "ThumbnailPart",
        relationship_type: "http://schemas.openxmlformats.org/package/2006/relationships/metadata/thumbnail",
        content_types: &[],
        root: None,
        opaque: true,
        add_methods: &[],
    },
    // WordprocessingML
    PartDef {
        type_name: "MainDocumentPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        content_types: &[
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            "application/vnd.ms-word.document.macroEnabled.main+xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml",
            "application/vnd.ms-word.template.macroEnabledTemplate.main+xml",
        ],
        root: root(WORDPROCESSING, "Document", "Document"),
        opaque: false,
        add_methods: &[add("ImagePart", true), add("CustomXmlPart", true), add("EmbeddedPackagePart", true)],
    },
    PartDef {
        type_name: "StyleDefinitionsPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
        content_types: &["application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"],
        root: root(WORDPROCESSING, "Styles", "Styles"),
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "HeaderPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header",
        content_types: &[],
        root: root(WORDPROCESSING, "Header", "Header"),
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    PartDef {
        type_name: "FooterPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer",
        content_types: &[],
        root: root(WORDPROCESSING, "Footer", "Footer"),
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    PartDef {
        type_name: "FontTablePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/fontTable",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "DocumentSettingsPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "WebSettingsPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/webSettings",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "NumberingDefinitionsPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "ThemePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    PartDef {
        type_name: "ImagePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image",
        content_types: &[],
        root: None,
        opaque: true,
        add_methods: &[],
    },
    PartDef {
        type_name: "CustomXmlPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/customXml",
        content_types: &[],
        root: None,
        opaque: true,
        add_methods: &[],
    },
    PartDef {
        type_name: "EmbeddedPackagePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/package",
        content_types: &[],
        root: None,
        opaque: true,
        add_methods: &[],
    },
    // SpreadsheetML
    PartDef {
        type_name: "WorkbookPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        content_types: &[
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
            "application/vnd.ms-excel.sheet.macroEnabled.main+xml",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml",
            "application/vnd.ms-excel.template.macroEnabled.main+xml",
            "application/vnd.ms-excel.addin.macroEnabled.main+xml",
        ],
        root: root(SPREADSHEET, "Workbook", "Workbook"),
        opaque: false,
        add_methods: &[add("CustomXmlPart", true)],
    },
    PartDef {
        type_name: "WorksheetPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet",
        content_types: &[],
        root: root(SPREADSHEET, "Worksheet", "Worksheet"),
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "SharedStringTablePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings",
        content_types: &[],
        root: root(SPREADSHEET, "SharedStringTable", "SharedStringTable"),
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "WorkbookStylesPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
        content_types: &["application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"],
        root: None,
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "DrawingsPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    // PresentationML
    PartDef {
        type_name: "PresentationPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
        content_types: &[
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
            "application/vnd.ms-powerpoint.presentation.macroEnabled.main+xml",
            "application/vnd.openxmlformats-officedocument.presentationml.template.main+xml",
            "application/vnd.ms-powerpoint.template.macroEnabled.main+xml",
            "application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml",
            "application/vnd.ms-powerpoint.slideshow.macroEnabled.main+xml",
        ],
        root: root(PRESENTATION, "Presentation", "Presentation"),
        opaque: false,
        add_methods: &[],
    },
    PartDef {
        type_name: "SlidePart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide",
        content_types: &[],
        root: root(PRESENTATION, "Slide", "Slide"),
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    PartDef {
        type_name: "SlideLayoutPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
    PartDef {
        type_name: "SlideMasterPart",
        relationship_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster",
        content_types: &[],
        root: None,
        opaque: false,
        add_methods: &IMAGE_PARENT,
    },
];

/// Relationship type of hyperlink relationships
pub const HYPERLINK_RELATIONSHIP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
