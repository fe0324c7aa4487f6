//! Escaping of iCal TEXT values (RFC5545 section 3.3.11)

/// Decode the backslash sequences of an iCal text value
///
/// Replacements are applied one after the other, in this order: `\n`, `\,`, `\;`, `\\`, `\r`.
pub fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\\\", "\\")
        .replace("\\r", "\r")
}

/// Encode a string so that it can be used as an iCal text value
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\r', "")
        .replace('\n', "\\n")
}
