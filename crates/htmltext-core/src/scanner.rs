//! Single-pass tag stripper.
//!
//! The scanner walks the input once, holding exactly one [`ScanState`] at a
//! time. Keyword transitions are matched against a short, fixed lookahead
//! window (ASCII case-insensitive) and the whole matched token is consumed
//! before scanning resumes. Anything that cannot be closed runs to the end of
//! input with no output; the stripper never fails.

use tracing::{debug, trace};

use crate::entities::decode;
use crate::normalize::normalize;
use crate::options::StripOptions;

/// Block elements whose bodies are dropped wholesale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawBlock {
    Script,
    Style,
    NoScript,
}

impl RawBlock {
    const ALL: [RawBlock; 3] = [RawBlock::Script, RawBlock::Style, RawBlock::NoScript];

    /// Element name as matched after `<` or `</`
    pub fn name(self) -> &'static str {
        match self {
            RawBlock::Script => "script",
            RawBlock::Style => "style",
            RawBlock::NoScript => "noscript",
        }
    }
}

/// Scanner state. Exactly one is active at any input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ScanState {
    #[default]
    Plain,
    InComment,
    InBlock(RawBlock),
    InTag,
    /// Inside a quoted attribute value, holding the opening quote
    InTagAttributeValue(char),
}

/// Strip markup from `html`, decoding entities per the two flags.
///
/// The result is trimmed and newline-normalized. Empty input gives an empty
/// string.
///
/// ```rust
/// use htmltext_core::strip;
///
/// assert_eq!(strip("<p>Hello World</p>", true, true), "Hello World");
/// assert_eq!(strip("<script>alert(1)</script>after", true, true), "after");
/// ```
pub fn strip(html: &str, replace_named_entities: bool, replace_numbered_entities: bool) -> String {
    strip_with(
        html,
        &StripOptions::from_flags(replace_named_entities, replace_numbered_entities),
    )
}

/// Strip markup from `html` using explicit [`StripOptions`]
pub fn strip_with(html: &str, options: &StripOptions) -> String {
    let html = html.trim();
    if html.is_empty() {
        return String::new();
    }

    let scanned = scan(body_region(html));
    let decoded = decode(&scanned, options);
    normalize(decoded.trim())
}

/// Remove tags, comments and script/style/noscript bodies without any
/// entity decoding, trimming or normalization.
///
/// Every closed tag leaves one space behind so that adjacent cells do not
/// run together.
pub fn scan(input: &str) -> String {
    Scanner::new(input).run()
}

/// Narrow `html` to the `<body ...> ... </body>` region when present.
///
/// The opening body tag itself stays in the region and is removed by the
/// scanner like any other tag.
fn body_region(html: &str) -> &str {
    let start = find_ignore_ascii_case(html, "<body", 0).unwrap_or(0);
    let end = find_ignore_ascii_case(html, "</body>", start).unwrap_or(html.len());
    if start != 0 || end != html.len() {
        trace!(start, end, len = html.len(), "narrowed scan to body");
    }
    &html[start..end]
}

/// Byte offset of the first ASCII case-insensitive match of `needle` at or
/// after `from`
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    state: ScanState,
    output: String,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            state: ScanState::Plain,
            output: String::with_capacity(input.len()),
        }
    }

    fn run(mut self) -> String {
        while self.pos < self.chars.len() {
            let state = self.state;
            self.state = match state {
                ScanState::Plain => self.plain(),
                ScanState::InComment => self.comment(),
                ScanState::InBlock(block) => self.block(block),
                ScanState::InTag => self.tag(),
                ScanState::InTagAttributeValue(quote) => self.attribute_value(quote),
            };
        }

        if self.state != ScanState::Plain {
            debug!(state = ?self.state, "unterminated markup at end of input");
        }

        self.output
    }

    fn plain(&mut self) -> ScanState {
        let c = self.chars[self.pos];
        if c != '<' {
            self.output.push(c);
            self.pos += 1;
            return ScanState::Plain;
        }

        if self.matches_at(self.pos, "<!--") {
            self.pos += 4;
            return ScanState::InComment;
        }

        for block in RawBlock::ALL {
            let keyword_end = self.pos + 1 + block.name().len();
            if self.matches_at(self.pos + 1, block.name())
                && self.is_open_delimiter(keyword_end)
            {
                // The delimiter goes with the keyword.
                self.pos = keyword_end + 1;
                return ScanState::InBlock(block);
            }
        }

        self.pos += 1;
        ScanState::InTag
    }

    fn comment(&mut self) -> ScanState {
        if self.matches_at(self.pos, "-->") {
            self.pos += 3;
            return ScanState::Plain;
        }
        self.pos += 1;
        ScanState::InComment
    }

    fn block(&mut self, block: RawBlock) -> ScanState {
        let name = block.name();
        if !(self.matches_at(self.pos, "</") && self.matches_at(self.pos + 2, name)) {
            self.pos += 1;
            return ScanState::InBlock(block);
        }

        let keyword_end = self.pos + 2 + name.len();
        match self.chars.get(keyword_end).copied() {
            Some('>') => {
                self.pos = keyword_end + 1;
                ScanState::Plain
            }
            Some(c) if c.is_whitespace() => {
                // `</script foo>`: skip through the next `>`.
                self.pos = self.chars[keyword_end..]
                    .iter()
                    .position(|&c| c == '>')
                    .map_or(self.chars.len(), |offset| keyword_end + offset + 1);
                ScanState::Plain
            }
            _ => {
                self.pos += 1;
                ScanState::InBlock(block)
            }
        }
    }

    fn tag(&mut self) -> ScanState {
        let c = self.chars[self.pos];
        self.pos += 1;
        match c {
            '"' | '\'' => ScanState::InTagAttributeValue(c),
            '>' => {
                self.output.push(' ');
                ScanState::Plain
            }
            _ => ScanState::InTag,
        }
    }

    fn attribute_value(&mut self, quote: char) -> ScanState {
        let c = self.chars[self.pos];
        self.pos += 1;
        if c == quote {
            ScanState::InTag
        } else {
            ScanState::InTagAttributeValue(quote)
        }
    }

    /// ASCII case-insensitive match of `keyword` starting at `at`
    fn matches_at(&self, at: usize, keyword: &str) -> bool {
        let Some(window) = self.chars.get(at..at + keyword.len()) else {
            return false;
        };
        window
            .iter()
            .zip(keyword.chars())
            .all(|(c, k)| c.eq_ignore_ascii_case(&k))
    }

    fn is_open_delimiter(&self, at: usize) -> bool {
        matches!(self.chars.get(at), Some(c) if c.is_whitespace() || *c == '/' || *c == '>')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_emits_space_per_tag() {
        assert_eq!(scan("<p>Hello <b>World</b></p>"), " Hello  World  ");
        assert_eq!(scan("<td>a</td><td>b</td>"), " a  b ");
    }

    #[test]
    fn test_strip_simple() {
        let result = strip("<p>Hello <b>World</b></p>", true, true);
        assert_eq!(result, "Hello  World");
        assert!(!result.contains('<') && !result.contains('>'));
    }

    #[test]
    fn test_comment_suppressed() {
        let result = strip("<!-- secret --> visible", true, true);
        assert!(!result.contains("secret"));
        assert_eq!(result, "visible");
    }

    #[test]
    fn test_comment_hides_tags() {
        assert_eq!(scan("a<!-- <b>x</b> -->b"), "ab");
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        assert_eq!(strip("before<!-- never closed <p>text</p>", true, true), "before");
    }

    #[test]
    fn test_script_suppressed() {
        assert_eq!(strip("<script>alert(1)</script>after", true, true), "after");
        assert_eq!(
            strip("<SCRIPT type=\"text/javascript\">if (a < b) { x = '>'; }</Script >after", true, true),
            "after"
        );
    }

    #[test]
    fn test_script_close_lookalike_is_not_a_close() {
        assert_eq!(scan("<script>var s = '</scripts>';</script>tail"), "tail");
    }

    #[test]
    fn test_style_and_noscript_suppressed() {
        assert_eq!(scan("<style>p { color: red; }</STYLE>text"), "text");
        assert_eq!(scan("<noscript><img src=x></noscript>text"), "text");
        assert_eq!(scan("<style media=\"all\">a{}</style\n>b"), "b");
    }

    #[test]
    fn test_block_keywords_need_delimiter() {
        // `<scripted>` is an ordinary tag, `<style/>` opens a style block.
        assert_eq!(scan("<scripted>a"), " a");
        assert_eq!(scan("<style/>gone"), "");
    }

    #[test]
    fn test_unterminated_script() {
        assert_eq!(strip("ok<script>never closed", true, true), "ok");
    }

    #[test]
    fn test_unterminated_style_and_noscript() {
        assert_eq!(strip("ok<style>body{}", true, true), "ok");
        assert_eq!(strip("ok<noscript>fallback <b>text</b>", true, true), "ok");
    }

    #[test]
    fn test_close_without_gt_runs_to_end() {
        assert_eq!(scan("<script>x</script foo"), "");
        assert_eq!(scan("<style>a{}</style\n"), "");
    }

    #[test]
    fn test_close_with_attributes_seeks_gt() {
        assert_eq!(scan("<noscript>a</noscript\tx>b"), "b");
        assert_eq!(scan("<script>x</script type=\"a\">after"), "after");
    }

    #[test]
    fn test_attribute_values_hide_gt() {
        assert_eq!(scan("<a title=\"1 > 0\" href='x>y'>link</a>"), " link ");
        assert_eq!(scan("<a title=\"it's\">x</a>"), " x ");
    }

    #[test]
    fn test_body_region() {
        let html = "<html><head><title>T</title></head><body class=\"x\"><p>Body</p></body><p>after</p></html>";
        assert_eq!(strip(html, true, true), "Body");
        assert_eq!(strip("<BODY>only</BODY>", true, true), "only");
        assert_eq!(strip("no body here", true, true), "no body here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip("", true, true), "");
        assert_eq!(strip("   \r\n ", true, true), "");
    }

    #[test]
    fn test_entities_follow_flags() {
        assert_eq!(strip("<b>A &amp; B &#65;</b>", true, true), "A & B A");
        assert_eq!(strip("<b>A &amp; B &#65;</b>", false, false), "A &amp; B &#65;");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(strip("<p>naïve café</p>", true, true), "naïve café");
    }
}
