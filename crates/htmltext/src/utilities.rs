//! Text helpers for presenting converted content.

use std::fmt::Write;

/// Highest code point written as-is by [`encode_special_chars`]
const ASCII_MAX: u32 = 0x7F;

/// Write every non-ASCII character as a decimal reference (`é` → `&#233;`)
pub fn encode_special_chars(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if u32::from(c) > ASCII_MAX {
            write!(result, "&#{};", u32::from(c)).ok();
        } else {
            result.push(c);
        }
    }

    result
}

/// Split camel-case into words: `"HelloThereFriend"` → `"Hello There Friend"`.
///
/// A space goes before each uppercase letter that does not start the string
/// and does not already follow whitespace.
pub fn split_camel_case_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| !p.is_whitespace()) {
            result.push(' ');
        }
        result.push(c);
        prev = Some(c);
    }

    result
}

/// Lowercase each space-separated word, then uppercase its first letter
pub fn capitalise_each_word(phrase: &str) -> String {
    phrase
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Cut `text` to `max_chars` characters, appending `...` when it was longer
pub fn to_short_string(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
