//! htmltext-core - tag stripping, entity decoding and newline normalization
//!
//! This crate holds the text-extraction engine used by `htmltext`. It has no
//! HTML parser and builds no tree: a single pass over the input drops markup
//! and script/style/noscript/comment bodies and keeps everything else.
//!
//! # Architecture
//!
//! ```text
//!              ┌─────────┐    ┌────────┐    ┌───────────┐
//! HTML String ─▶│ scanner │──▶│ decode │──▶│ normalize │──▶ plain text
//!              └─────────┘    └────────┘    └───────────┘
//!                                 ▲
//!                          named entity table
//! ```
//!
//! Every function here is total: malformed or unterminated markup produces
//! best-effort text, never an error.
//!
//! # Example
//!
//! ```rust
//! use htmltext_core::{decode_entities, normalize, strip};
//!
//! assert_eq!(strip("<!-- hidden --><em>shown</em>", true, true), "shown");
//! assert_eq!(decode_entities("&#65;&amp;&#66;", true, true), "A&B");
//! assert_eq!(normalize("a\n\n\n\nb"), "a\r\n\r\nb");
//! ```

mod entities;
mod normalize;
mod options;
mod scanner;

pub use entities::{decode, decode_entities, lookup, named_entities, NAMED_ENTITIES};
pub use normalize::{normalize, LINE_BREAK};
pub use options::{NumericEntities, StripOptions};
pub use scanner::{scan, strip, strip_with};

/// Error type for option parsing
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("Unknown numeric entity mode: {0} (expected off, legacy or unicode)")]
    UnknownNumericEntities(String),
}
