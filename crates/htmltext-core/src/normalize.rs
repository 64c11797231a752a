//! Line-break and whitespace normalization.

/// Canonical line break in normalized text
pub const LINE_BREAK: &str = "\r\n";

/// Most consecutive line breaks kept (one blank line)
const MAX_CONSECUTIVE_BREAKS: usize = 2;

/// Collapse redundant whitespace around line breaks.
///
/// - `\r\n`, `\n` and `\r` all become `\r\n`
/// - tabs are removed
/// - spaces directly before or after a line break are removed
/// - three or more consecutive line breaks become two
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines = split_lines(text);
    let last = lines.len() - 1;
    let mut result = String::with_capacity(text.len());
    let mut pending_breaks = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let mut line = line.replace('\t', "");
        if index < last {
            line.truncate(line.trim_end_matches(' ').len());
        }
        let line = if index > 0 { line.trim_start_matches(' ') } else { line.as_str() };

        if index > 0 {
            pending_breaks += 1;
        }
        if line.is_empty() {
            continue;
        }

        push_breaks(&mut result, pending_breaks);
        pending_breaks = 0;
        result.push_str(line);
    }

    push_breaks(&mut result, pending_breaks);
    result
}

fn push_breaks(result: &mut String, count: usize) {
    for _ in 0..count.min(MAX_CONSECUTIVE_BREAKS) {
        result.push_str(LINE_BREAK);
    }
}

/// Split on any line break flavour; `n` breaks give `n + 1` lines
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_blank_lines() {
        assert_eq!(normalize("a\r\n\r\n\r\n\r\nb"), "a\r\n\r\nb");
        assert_eq!(normalize("a\n\n\nb"), "a\r\n\r\nb");
        assert_eq!(normalize("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_canonical_breaks() {
        assert_eq!(normalize("a\nb\rc\r\nd"), "a\r\nb\r\nc\r\nd");
    }

    #[test]
    fn test_trailing_and_leading_spaces() {
        assert_eq!(normalize("One  \r\n\r\n Two"), "One\r\n\r\nTwo");
        assert_eq!(normalize("a \t \r\n\tb"), "a\r\nb");
        assert_eq!(normalize("  keep leading and trailing  "), "  keep leading and trailing  ");
    }

    #[test]
    fn test_whitespace_only_lines_count_as_blank() {
        assert_eq!(normalize("a\r\n   \r\n \t \r\n  \r\nb"), "a\r\n\r\nb");
    }

    #[test]
    fn test_tabs_removed() {
        assert_eq!(normalize("a\tb\t"), "ab");
    }

    #[test]
    fn test_edges() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\r\n\r\n\r\nx"), "\r\n\r\nx");
        assert_eq!(normalize("x\n\n\n"), "x\r\n\r\n");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "a\r\n\r\n\r\nb",
            "  a \t\n \n\tb  \r\r\r c ",
            "\n \n x\t\t\r\n  y  \n",
            "plain text",
            " \r\n \r\n ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
