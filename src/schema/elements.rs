//! Element types
//!
//! WordprocessingML attributes are namespace-qualified (`w:val`); SpreadsheetML
//! and PresentationML attributes are unqualified except relationship ids.

use super::code_ns::{PRESENTATION, SPREADSHEET, WORDPROCESSING};
use super::enums::*;
use super::ns;
use super::{AttributeName, Construction, ElementDef, EnumDef, PropertyDef, PropertyKind, ScalarType};

macro_rules! element {
    ($type_name:literal, $namespace:expr, $prefix:literal : $local:literal @ $uri:expr, $construction:ident, [$($prop:expr),* $(,)?]) => {
        ElementDef {
            type_name: $type_name,
            namespace: $namespace,
            prefix: $prefix,
            local_name: $local,
            namespace_uri: $uri,
            construction: Construction::$construction,
            properties: &[$($prop),*],
        }
    };
}

const fn qualified(prefix: &'static str, local_name: &'static str, namespace_uri: &'static str) -> AttributeName {
    AttributeName {
        prefix,
        local_name,
        namespace_uri,
    }
}

const fn unqualified(local_name: &'static str) -> AttributeName {
    qualified("", local_name, "")
}

const fn scalar(name: &'static str, attribute: AttributeName, ty: ScalarType) -> PropertyDef {
    PropertyDef {
        name,
        attribute,
        kind: PropertyKind::Scalar(ty),
    }
}

const fn enumerated(name: &'static str, attribute: AttributeName, def: &'static EnumDef) -> PropertyDef {
    PropertyDef {
        name,
        attribute,
        kind: PropertyKind::Enum(def),
    }
}

const fn list(name: &'static str, attribute: AttributeName, item: ScalarType) -> PropertyDef {
    PropertyDef {
        name,
        attribute,
        kind: PropertyKind::List(item),
    }
}

const fn w(local_name: &'static str) -> AttributeName {
    qualified("w", local_name, ns::W)
}

const fn w14(local_name: &'static str) -> AttributeName {
    qualified("w14", local_name, ns::W14)
}

const R_ID: AttributeName = qualified("r", "id", ns::R);
const XML_SPACE: AttributeName = qualified("xml", "space", ns::XML);

use ScalarType::*;

pub static ELEMENTS: &[ElementDef] = &[
    // WordprocessingML
    element!("Document", WORDPROCESSING, "w":"document" @ ns::W, Default, []),
    element!("Body", WORDPROCESSING, "w":"body" @ ns::W, Default, []),
    element!("Header", WORDPROCESSING, "w":"hdr" @ ns::W, Default, []),
    element!("Footer", WORDPROCESSING, "w":"ftr" @ ns::W, Default, []),
    element!("Paragraph", WORDPROCESSING, "w":"p" @ ns::W, Default, [
        scalar("RsidParagraphMarkRevision", w("rsidRPr"), HexBinary),
        scalar("RsidParagraphAddition", w("rsidR"), HexBinary),
        scalar("RsidParagraphDeletion", w("rsidDel"), HexBinary),
        scalar("RsidParagraphProperties", w("rsidP"), HexBinary),
        scalar("RsidRunAdditionDefault", w("rsidRDefault"), HexBinary),
        scalar("ParagraphId", w14("paraId"), HexBinary),
        scalar("TextId", w14("textId"), HexBinary),
    ]),
    element!("ParagraphProperties", WORDPROCESSING, "w":"pPr" @ ns::W, Default, []),
    element!("ParagraphStyleId", WORDPROCESSING, "w":"pStyle" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("Justification", WORDPROCESSING, "w":"jc" @ ns::W, Default, [
        enumerated("Val", w("val"), &JUSTIFICATION_VALUES),
    ]),
    element!("SpacingBetweenLines", WORDPROCESSING, "w":"spacing" @ ns::W, Default, [
        scalar("Before", w("before"), String),
        scalar("After", w("after"), String),
        scalar("Line", w("line"), String),
        enumerated("LineRule", w("lineRule"), &LINE_SPACING_RULE_VALUES),
    ]),
    element!("Run", WORDPROCESSING, "w":"r" @ ns::W, Default, [
        scalar("RsidRunProperties", w("rsidRPr"), HexBinary),
        scalar("RsidRunDeletion", w("rsidDel"), HexBinary),
        scalar("RsidRunAddition", w("rsidR"), HexBinary),
    ]),
    element!("RunProperties", WORDPROCESSING, "w":"rPr" @ ns::W, Default, []),
    element!("Bold", WORDPROCESSING, "w":"b" @ ns::W, Default, [
        scalar("Val", w("val"), OnOff),
    ]),
    element!("Italic", WORDPROCESSING, "w":"i" @ ns::W, Default, [
        scalar("Val", w("val"), OnOff),
    ]),
    element!("Underline", WORDPROCESSING, "w":"u" @ ns::W, Default, [
        enumerated("Val", w("val"), &UNDERLINE_VALUES),
    ]),
    element!("FontSize", WORDPROCESSING, "w":"sz" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("FontSizeComplexScript", WORDPROCESSING, "w":"szCs" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("Color", WORDPROCESSING, "w":"color" @ ns::W, Default, [
        scalar("Val", w("val"), String),
        enumerated("ThemeColor", w("themeColor"), &THEME_COLOR_VALUES),
    ]),
    element!("RunFonts", WORDPROCESSING, "w":"rFonts" @ ns::W, Default, [
        enumerated("Hint", w("hint"), &FONT_TYPE_HINT_VALUES),
        scalar("Ascii", w("ascii"), String),
        scalar("HighAnsi", w("hAnsi"), String),
        scalar("EastAsia", w("eastAsia"), String),
        scalar("ComplexScript", w("cs"), String),
    ]),
    element!("Text", WORDPROCESSING, "w":"t" @ ns::W, LeafText, [
        enumerated("Space", XML_SPACE, &SPACE_PROCESSING_MODE_VALUES),
    ]),
    element!("TabChar", WORDPROCESSING, "w":"tab" @ ns::W, Default, []),
    element!("Break", WORDPROCESSING, "w":"br" @ ns::W, Default, [
        enumerated("Type", w("type"), &BREAK_VALUES),
    ]),
    element!("Hyperlink", WORDPROCESSING, "w":"hyperlink" @ ns::W, Default, [
        scalar("Anchor", w("anchor"), String),
        scalar("History", w("history"), OnOff),
        scalar("Id", R_ID, String),
    ]),
    element!("BookmarkStart", WORDPROCESSING, "w":"bookmarkStart" @ ns::W, Default, [
        scalar("Name", w("name"), String),
        scalar("Id", w("id"), String),
    ]),
    element!("BookmarkEnd", WORDPROCESSING, "w":"bookmarkEnd" @ ns::W, Default, [
        scalar("Id", w("id"), String),
    ]),
    element!("SectionProperties", WORDPROCESSING, "w":"sectPr" @ ns::W, Default, [
        scalar("RsidR", w("rsidR"), HexBinary),
        scalar("RsidSect", w("rsidSect"), HexBinary),
    ]),
    element!("PageSize", WORDPROCESSING, "w":"pgSz" @ ns::W, Default, [
        scalar("Width", w("w"), UInt32),
        scalar("Height", w("h"), UInt32),
        enumerated("Orient", w("orient"), &PAGE_ORIENTATION_VALUES),
    ]),
    element!("PageMargin", WORDPROCESSING, "w":"pgMar" @ ns::W, Default, [
        scalar("Top", w("top"), Int32),
        scalar("Right", w("right"), UInt32),
        scalar("Bottom", w("bottom"), Int32),
        scalar("Left", w("left"), UInt32),
        scalar("Header", w("header"), UInt32),
        scalar("Footer", w("footer"), UInt32),
        scalar("Gutter", w("gutter"), UInt32),
    ]),
    element!("Columns", WORDPROCESSING, "w":"cols" @ ns::W, Default, [
        scalar("Space", w("space"), String),
        scalar("ColumnCount", w("num"), Int16),
    ]),
    element!("DocGrid", WORDPROCESSING, "w":"docGrid" @ ns::W, Default, [
        scalar("LinePitch", w("linePitch"), Int32),
    ]),
    element!("Table", WORDPROCESSING, "w":"tbl" @ ns::W, Default, []),
    element!("TableProperties", WORDPROCESSING, "w":"tblPr" @ ns::W, Default, []),
    element!("TableStyle", WORDPROCESSING, "w":"tblStyle" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("TableWidth", WORDPROCESSING, "w":"tblW" @ ns::W, Default, [
        scalar("Width", w("w"), String),
        enumerated("Type", w("type"), &TABLE_WIDTH_UNIT_VALUES),
    ]),
    element!("TableGrid", WORDPROCESSING, "w":"tblGrid" @ ns::W, Default, []),
    element!("GridColumn", WORDPROCESSING, "w":"gridCol" @ ns::W, Default, [
        scalar("Width", w("w"), String),
    ]),
    element!("TableRow", WORDPROCESSING, "w":"tr" @ ns::W, Default, [
        scalar("RsidTableRowAddition", w("rsidR"), HexBinary),
    ]),
    element!("TableCell", WORDPROCESSING, "w":"tc" @ ns::W, Default, []),
    element!("TableCellProperties", WORDPROCESSING, "w":"tcPr" @ ns::W, Default, []),
    element!("TableCellWidth", WORDPROCESSING, "w":"tcW" @ ns::W, Default, [
        scalar("Width", w("w"), String),
        enumerated("Type", w("type"), &TABLE_WIDTH_UNIT_VALUES),
    ]),
    element!("Styles", WORDPROCESSING, "w":"styles" @ ns::W, Default, []),
    element!("Style", WORDPROCESSING, "w":"style" @ ns::W, Default, [
        enumerated("Type", w("type"), &STYLE_VALUES),
        scalar("StyleId", w("styleId"), String),
        scalar("Default", w("default"), OnOff),
    ]),
    element!("StyleName", WORDPROCESSING, "w":"name" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("BasedOn", WORDPROCESSING, "w":"basedOn" @ ns::W, Default, [
        scalar("Val", w("val"), String),
    ]),
    element!("Drawing", WORDPROCESSING, "w":"drawing" @ ns::W, Default, []),
    // SpreadsheetML
    element!("Workbook", SPREADSHEET, "x":"workbook" @ ns::X, Default, []),
    element!("Sheets", SPREADSHEET, "x":"sheets" @ ns::X, Default, []),
    element!("Sheet", SPREADSHEET, "x":"sheet" @ ns::X, Default, [
        scalar("Name", unqualified("name"), String),
        scalar("SheetId", unqualified("sheetId"), UInt32),
        enumerated("State", unqualified("state"), &SHEET_STATE_VALUES),
        scalar("Id", R_ID, String),
    ]),
    element!("Worksheet", SPREADSHEET, "x":"worksheet" @ ns::X, Default, []),
    element!("SheetDimension", SPREADSHEET, "x":"dimension" @ ns::X, Default, [
        scalar("Reference", unqualified("ref"), String),
    ]),
    element!("SheetViews", SPREADSHEET, "x":"sheetViews" @ ns::X, Default, []),
    element!("SheetView", SPREADSHEET, "x":"sheetView" @ ns::X, Default, [
        scalar("TabSelected", unqualified("tabSelected"), Boolean),
        scalar("WorkbookViewId", unqualified("workbookViewId"), UInt32),
    ]),
    element!("Selection", SPREADSHEET, "x":"selection" @ ns::X, Default, [
        scalar("ActiveCell", unqualified("activeCell"), String),
        list("SequenceOfReferences", unqualified("sqref"), String),
    ]),
    element!("Columns", SPREADSHEET, "x":"cols" @ ns::X, Default, []),
    element!("Column", SPREADSHEET, "x":"col" @ ns::X, Default, [
        scalar("Min", unqualified("min"), UInt32),
        scalar("Max", unqualified("max"), UInt32),
        scalar("Width", unqualified("width"), Double),
        scalar("CustomWidth", unqualified("customWidth"), Boolean),
    ]),
    element!("SheetData", SPREADSHEET, "x":"sheetData" @ ns::X, Default, []),
    element!("Row", SPREADSHEET, "x":"row" @ ns::X, Default, [
        scalar("RowIndex", unqualified("r"), UInt32),
        list("Spans", unqualified("spans"), String),
        scalar("StyleIndex", unqualified("s"), UInt32),
        scalar("Height", unqualified("ht"), Double),
        scalar("CustomHeight", unqualified("customHeight"), Boolean),
    ]),
    element!("Cell", SPREADSHEET, "x":"c" @ ns::X, Default, [
        scalar("CellReference", unqualified("r"), String),
        scalar("StyleIndex", unqualified("s"), UInt32),
        enumerated("DataType", unqualified("t"), &CELL_VALUES),
    ]),
    element!("CellValue", SPREADSHEET, "x":"v" @ ns::X, LeafText, []),
    element!("CellFormula", SPREADSHEET, "x":"f" @ ns::X, LeafText, []),
    element!("SharedStringTable", SPREADSHEET, "x":"sst" @ ns::X, Default, [
        scalar("Count", unqualified("count"), UInt32),
        scalar("UniqueCount", unqualified("uniqueCount"), UInt32),
    ]),
    element!("SharedStringItem", SPREADSHEET, "x":"si" @ ns::X, Default, []),
    element!("Text", SPREADSHEET, "x":"t" @ ns::X, LeafText, [
        enumerated("Space", XML_SPACE, &SPACE_PROCESSING_MODE_VALUES),
    ]),
    // PresentationML
    element!("Presentation", PRESENTATION, "p":"presentation" @ ns::P, Default, [
        scalar("SaveSubsetFonts", unqualified("saveSubsetFonts"), Boolean),
    ]),
    element!("SlideIdList", PRESENTATION, "p":"sldIdLst" @ ns::P, Default, []),
    element!("SlideId", PRESENTATION, "p":"sldId" @ ns::P, Default, [
        scalar("Id", unqualified("id"), UInt32),
        scalar("RelationshipId", R_ID, String),
    ]),
    element!("SlideSize", PRESENTATION, "p":"sldSz" @ ns::P, Default, [
        scalar("Cx", unqualified("cx"), Int32),
        scalar("Cy", unqualified("cy"), Int32),
    ]),
    element!("NotesSize", PRESENTATION, "p":"notesSz" @ ns::P, Default, [
        scalar("Cx", unqualified("cx"), Int64),
        scalar("Cy", unqualified("cy"), Int64),
    ]),
    element!("Slide", PRESENTATION, "p":"sld" @ ns::P, Default, []),
];
