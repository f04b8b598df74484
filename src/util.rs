//! Shared utility helpers.

/// Lower the first character of a type name: `MainDocumentPart` -> `mainDocumentPart`.
///
/// Leading acronyms are lowered as a block so `XMLPart` becomes `xmlPart`.
pub fn to_lower_camel(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;
    while i < chars.len() && chars[i].is_ascii_uppercase() {
        // Keep the last capital of an acronym when a lowercase letter follows it
        let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
        if i > 0 && next_is_lower {
            break;
        }
        out.push(chars[i].to_ascii_lowercase());
        i += 1;
    }
    out.extend(&chars[i..]);
    out
}

/// Upper the first character of an identifier: `imagePart1` -> `ImagePart1`.
pub fn to_pascal(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
