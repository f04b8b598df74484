//! Enumeration types

use super::code_ns::{OPENXML, SPREADSHEET, WORDPROCESSING};
use super::{EnumDef, EnumMember};

const fn m(name: &'static str, value: &'static str) -> EnumMember {
    EnumMember { name, value }
}

pub static SPACE_PROCESSING_MODE_VALUES: EnumDef = EnumDef {
    type_name: "SpaceProcessingModeValues",
    namespace: OPENXML,
    members: &[m("Default", "default"), m("Preserve", "preserve")],
};

pub static JUSTIFICATION_VALUES: EnumDef = EnumDef {
    type_name: "JustificationValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Left", "left"),
        m("Start", "start"),
        m("Center", "center"),
        m("Right", "right"),
        m("End", "end"),
        m("Both", "both"),
        m("Distribute", "distribute"),
    ],
};

pub static LINE_SPACING_RULE_VALUES: EnumDef = EnumDef {
    type_name: "LineSpacingRuleValues",
    namespace: WORDPROCESSING,
    members: &[m("Auto", "auto"), m("Exact", "exact"), m("AtLeast", "atLeast")],
};

pub static UNDERLINE_VALUES: EnumDef = EnumDef {
    type_name: "UnderlineValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Single", "single"),
        m("Words", "words"),
        m("Double", "double"),
        m("Thick", "thick"),
        m("Dotted", "dotted"),
        m("Dash", "dash"),
        m("Wave", "wave"),
        m("None", "none"),
    ],
};

pub static THEME_COLOR_VALUES: EnumDef = EnumDef {
    type_name: "ThemeColorValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Dark1", "dark1"),
        m("Light1", "light1"),
        m("Dark2", "dark2"),
        m("Light2", "light2"),
        m("Accent1", "accent1"),
        m("Accent2", "accent2"),
        m("Accent3", "accent3"),
        m("Accent4", "accent4"),
        m("Accent5", "accent5"),
        m("Accent6", "accent6"),
        m("Hyperlink", "hyperlink"),
        m("FollowedHyperlink", "followedHyperlink"),
        m("None", "none"),
        m("Background1", "background1"),
        m("Text1", "text1"),
        m("Background2", "background2"),
        m("Text2", "text2"),
    ],
};

pub static FONT_TYPE_HINT_VALUES: EnumDef = EnumDef {
    type_name: "FontTypeHintValues",
    namespace: WORDPROCESSING,
    members: &[m("Default", "default"), m("EastAsia", "eastAsia"), m("ComplexScript", "cs")],
};

pub static BREAK_VALUES: EnumDef = EnumDef {
    type_name: "BreakValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Page", "page"),
        m("Column", "column"),
        m("TextWrapping", "textWrapping"),
    ],
};

pub static PAGE_ORIENTATION_VALUES: EnumDef = EnumDef {
    type_name: "PageOrientationValues",
    namespace: WORDPROCESSING,
    members: &[m("Portrait", "portrait"), m("Landscape", "landscape")],
};

pub static TABLE_WIDTH_UNIT_VALUES: EnumDef = EnumDef {
    type_name: "TableWidthUnitValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Nil", "nil"),
        m("Pct", "pct"),
        m("Dxa", "dxa"),
        m("Auto", "auto"),
    ],
};

pub static STYLE_VALUES: EnumDef = EnumDef {
    type_name: "StyleValues",
    namespace: WORDPROCESSING,
    members: &[
        m("Paragraph", "paragraph"),
        m("Character", "character"),
        m("Table", "table"),
        m("Numbering", "numbering"),
    ],
};

pub static SHEET_STATE_VALUES: EnumDef = EnumDef {
    type_name: "SheetStateValues",
    namespace: SPREADSHEET,
    members: &[
        m("Visible", "visible"),
        m("Hidden", "hidden"),
        m("VeryHidden", "veryHidden"),
    ],
};

pub static CELL_VALUES: EnumDef = EnumDef {
    type_name: "CellValues",
    namespace: SPREADSHEET,
    members: &[
        m("Boolean", "b"),
        m("Number", "n"),
        m("Error", "e"),
        m("SharedString", "s"),
        m("String", "str"),
        m("InlineString", "inlineStr"),
        m("Date", "d"),
    ],
};
