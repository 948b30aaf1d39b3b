//! File extension inference from a declared content type.
//!
//! Matching is a loose, case-sensitive substring test over an ordered rule
//! list; the first rule that matches wins. A type that is present but matches
//! no rule yields no extension, while a missing type yields `.bin`.

/// Extension used when no content type was declared at all.
pub const UNKNOWN_EXTENSION: &str = ".bin";

/// Ordered (needles, extension) rules.
const RULES: &[(&[&str], &str)] = &[(&["zip"], ".zip"), (&["plain", "text"], ".txt")];

/// Returns the extension (with leading dot, or empty) for `content_type`.
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    let Some(content_type) = content_type else {
        return UNKNOWN_EXTENSION;
    };
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| content_type.contains(n)))
        .map(|(_, ext)| *ext)
        .unwrap_or("")
}
