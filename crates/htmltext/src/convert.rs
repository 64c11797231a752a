//! HTML to plain text conversion.
//!
//! Structural tags that should survive as line breaks are swapped for a
//! private-use sentinel before stripping, since the stripper turns every tag
//! into a single space. The sentinels are turned back into `\r\n` afterwards.

use htmltext_core::{decode, normalize, strip_with, NumericEntities, StripOptions, LINE_BREAK};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::utilities::encode_special_chars;

/// Placeholder for a line break while markup is being stripped
const SENTINEL: char = '\u{E000}';

static LINE_BREAK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br>|<br/>|<br />").expect("LINE_BREAK_TAG: hardcoded regex is valid"));

static PARAGRAPH_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<p|<div").expect("PARAGRAPH_OPEN: hardcoded regex is valid"));

/// Convert an HTML document or fragment to plain text.
///
/// `<br>` becomes a line break, `<p>` and `<div>` start a new paragraph
/// (one blank line), everything else is stripped. With
/// `preserve_entity_codes`, named entities are still resolved but every
/// non-ASCII character in the result is written as `&#N;`.
///
/// ```rust
/// use htmltext::html_to_text;
///
/// assert_eq!(html_to_text("<p>One</p><p>Two</p>", false), "One\r\n\r\nTwo");
/// assert_eq!(html_to_text("<p>&copy; 2024</p>", true), "&#169; 2024");
/// ```
pub fn html_to_text(html: &str, preserve_entity_codes: bool) -> String {
    convert(html, preserve_entity_codes, NumericEntities::Legacy)
}

pub(crate) fn convert(html: &str, preserve_entity_codes: bool, numeric: NumericEntities) -> String {
    let sentinel = SENTINEL.to_string();
    let marked = LINE_BREAK_TAG.replace_all(html, sentinel.as_str());
    let marked = marked.trim();
    let marked = PARAGRAPH_OPEN.replace_all(marked, format!("{SENTINEL}{SENTINEL}$0").as_str());

    let strip_options = if preserve_entity_codes {
        StripOptions::raw()
    } else {
        StripOptions {
            named_entities: true,
            numeric_entities: numeric,
        }
    };
    let stripped = strip_with(&marked, &strip_options);

    let mut text = stripped.replace(SENTINEL, LINE_BREAK).trim().to_string();

    if preserve_entity_codes {
        let named_only = StripOptions {
            named_entities: true,
            numeric_entities: NumericEntities::Off,
        };
        text = decode(&text, &named_only);
    }

    text = collapse_spaces(&text);

    if preserve_entity_codes {
        text = encode_special_chars(&text);
    }

    let result = normalize(&text);
    trace!(input = html.len(), output = result.len(), preserve_entity_codes, "converted html to text");
    result
}

/// Replace every run of two or more spaces with one space
fn collapse_spaces(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c == ' ' {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs() {
        assert_eq!(html_to_text("<p>One</p><p>Two</p>", false), "One\r\n\r\nTwo");
        assert_eq!(html_to_text("<DIV>One</DIV><div class=\"x\">Two</div>", false), "One\r\n\r\nTwo");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(
            html_to_text("Line one<br>Line two<BR />Line three<br/>", false),
            "Line one\r\nLine two\r\nLine three"
        );
    }

    #[test]
    fn test_never_more_than_one_blank_line() {
        let text = html_to_text("<p>A</p><br><br><br><div><p>B</p></div>", false);
        assert!(!text.contains("\r\n\r\n\r\n"));
        assert_eq!(text, "A\r\n\r\nB");
    }

    #[test]
    fn test_inline_tags_collapse_to_single_spaces() {
        assert_eq!(html_to_text("<p>Hello <b>World</b> again</p>", false), "Hello World again");
        assert_eq!(html_to_text("<td>a</td><td>b</td>", false), "a b");
    }

    #[test]
    fn test_full_document() {
        let html = "<html><head><style>p { margin: 0 }</style></head>\
                    <body><div>Hi <script>track()</script>there</div>\
                    <p>Next&nbsp;para</p></body></html>";
        assert_eq!(html_to_text(html, false), "Hi there\r\n\r\nNext para");
    }

    #[test]
    fn test_entities_decoded_once() {
        assert_eq!(html_to_text("<p>5 &amp;lt; 6 &#65;</p>", false), "5 &lt; 6 A");
        assert_eq!(html_to_text("<p>&copy; caf&eacute;</p>", false), "© café");
    }

    #[test]
    fn test_preserve_entity_codes() {
        assert_eq!(
            html_to_text("<p>&copy; caf&eacute; &amp; co &#169;</p>", true),
            "&#169; caf&#233; & co &#169;"
        );
        assert_eq!(html_to_text("naïve", true), "na&#239;ve");
    }

    #[test]
    fn test_unicode_numeric_entities() {
        assert_eq!(convert("<p>&#9731;</p>", false, NumericEntities::Unicode), "\u{2603}");
        assert_eq!(convert("<p>&#9731;</p>", false, NumericEntities::Legacy), "&#9731;");
    }

    #[test]
    fn test_empty_and_markup_only() {
        assert_eq!(html_to_text("", false), "");
        assert_eq!(html_to_text("<br><p></p><!-- c -->", false), "");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a    b  c d"), "a b c d");
        assert_eq!(collapse_spaces("\r\n  x"), "\r\n x");
    }
}
