//! # htmltext
//!
//! Convert HTML fragments and documents to plain text.
//!
//! The output is meant for excerpts, search indexing and email previews:
//! markup and script/style/noscript/comment bodies are removed, character
//! references are decoded, and `<br>`, `<p>` and `<div>` survive as line
//! breaks. Line breaks in the output are always `\r\n`.
//!
//! ## Design
//!
//! No tree is built. `htmltext-core` makes one scanner pass that drops
//! everything structural, so any string converts, however broken the markup,
//! and the functions here return text rather than errors. Cost stays linear
//! in the input length.
//!
//! ## Example (functions)
//!
//! ```rust
//! use htmltext::{first_paragraph, html_to_text, strip};
//!
//! let text = html_to_text("<p>Hello <b>World</b></p><p>Bye</p>", false);
//! assert_eq!(text, "Hello World\r\n\r\nBye");
//! assert_eq!(first_paragraph(&text), "Hello World");
//! assert_eq!(strip("<i>A &amp; B</i>", true, true), "A & B");
//! ```
//!
//! ## Example (service)
//!
//! ```rust
//! use htmltext::{HtmlTextService, TextOptions};
//!
//! let options = TextOptions {
//!     excerpt_length: Some(5),
//!     ..Default::default()
//! };
//! let service = HtmlTextService::with_options(options);
//! assert_eq!(service.excerpt("<p>Excerpted</p><p>Rest</p>"), "Excer...");
//! ```

mod convert;
mod paragraph;
mod service;
mod utilities;

pub use convert::html_to_text;
pub use htmltext_core::{
    decode, decode_entities, lookup, normalize, strip, strip_with, NumericEntities, OptionError,
    StripOptions, LINE_BREAK,
};
pub use paragraph::first_paragraph;
pub use service::{HtmlTextService, TextOptions};
pub use utilities::*;

/// Error type for htmltext configuration
#[derive(Debug, thiserror::Error)]
pub enum HtmlTextError {
    #[error("Invalid option: {0}")]
    InvalidOption(#[from] OptionError),
}

pub type Result<T> = std::result::Result<T, HtmlTextError>;
