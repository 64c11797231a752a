//! First-paragraph extraction for excerpts.
//!
//! This is a boundary search, not a paragraph model: it looks for a blank
//! line in CRLF text, then for a doubled `<br />` in markup.

const BLANK_LINE: &str = "\r\n\r";
const DOUBLE_BR: &str = "<br /><br />";
const SPACED_DOUBLE_BR: &str = "<br />  <br />";

/// Return everything before the first paragraph boundary, trimmed.
///
/// Without a boundary the whole (trimmed) input is returned.
///
/// ```rust
/// use htmltext::first_paragraph;
///
/// assert_eq!(first_paragraph("Para one.\r\n\r\nPara two."), "Para one.");
/// assert_eq!(first_paragraph("<p>Intro<br /><br />More</p>"), "Intro");
/// ```
pub fn first_paragraph(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace(SPACED_DOUBLE_BR, DOUBLE_BR);

    // Covers "\r\n\r\n" too, which always starts with "\r\n\r".
    if let Some(end) = text.find(BLANK_LINE) {
        return text[..end].trim().to_string();
    }

    if text.contains(DOUBLE_BR) {
        let body = text.strip_prefix("<p>").unwrap_or(text.as_str());
        if let Some(end) = body.find(DOUBLE_BR) {
            return body[..end].trim().to_string();
        }
    }

    text.trim().to_string()
}
