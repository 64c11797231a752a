//! HtmlTextService - configured entry point for HTML to text conversion.

use htmltext_core::{strip_with, NumericEntities, StripOptions};

use crate::convert::convert;
use crate::paragraph::first_paragraph;
use crate::utilities::to_short_string;
use crate::Result;

/// Options for HtmlTextService
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Write non-ASCII characters as `&#N;` instead of literal characters
    pub preserve_entity_codes: bool,

    /// Numeric character reference handling
    pub numeric_entities: NumericEntities,

    /// Character limit applied by [`HtmlTextService::excerpt`]
    pub excerpt_length: Option<usize>,
}

impl TextOptions {
    /// Set the numeric entity mode from its name (`off`, `legacy`, `unicode`)
    pub fn parse_numeric_entities(mut self, value: &str) -> Result<Self> {
        self.numeric_entities = value.parse()?;
        Ok(self)
    }
}

/// Converts HTML to plain text using a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct HtmlTextService {
    options: TextOptions,
}

impl HtmlTextService {
    /// Create a new HtmlTextService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a HtmlTextService with custom options
    pub fn with_options(options: TextOptions) -> Self {
        Self { options }
    }

    /// Convert HTML to text, keeping `<br>`, `<p>` and `<div>` as line breaks
    pub fn to_text(&self, html: &str) -> String {
        convert(
            html,
            self.options.preserve_entity_codes,
            self.options.numeric_entities,
        )
    }

    /// Strip all markup and decode entities, without paragraph handling
    pub fn strip(&self, html: &str) -> String {
        let options = StripOptions {
            named_entities: true,
            numeric_entities: self.options.numeric_entities,
        };
        strip_with(html, &options)
    }

    /// First paragraph of the converted text, shortened to `excerpt_length`
    pub fn excerpt(&self, html: &str) -> String {
        let paragraph = first_paragraph(&self.to_text(html));
        match self.options.excerpt_length {
            Some(max_chars) => to_short_string(&paragraph, max_chars),
            None => paragraph,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &TextOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TextOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service() {
        let service = HtmlTextService::new();
        assert_eq!(service.to_text("<p>Hello <em>World</em></p>"), "Hello World");
        assert_eq!(service.strip("<p>A &amp; B</p>"), "A & B");
    }

    #[test]
    fn test_excerpt() {
        let options = TextOptions {
            excerpt_length: Some(10),
            ..Default::default()
        };
        let service = HtmlTextService::with_options(options);
        let html = "<p>The first paragraph is long.</p><p>The second.</p>";
        assert_eq!(service.excerpt(html), "The first ...");

        let service = HtmlTextService::new();
        assert_eq!(service.excerpt(html), "The first paragraph is long.");
    }

    #[test]
    fn test_preserve_entity_codes() {
        let mut service = HtmlTextService::new();
        service.options_mut().preserve_entity_codes = true;
        assert_eq!(service.to_text("<p>&eacute;t&eacute;</p>"), "&#233;t&#233;");
    }

    #[test]
    fn test_numeric_entities_option() {
        let options = TextOptions::default().parse_numeric_entities("unicode").unwrap();
        let service = HtmlTextService::with_options(options);
        assert_eq!(service.to_text("&#x263A;"), "\u{263A}");
        assert_eq!(service.strip("<b>&#9731;</b>"), "\u{2603}");

        let options = TextOptions::default().parse_numeric_entities("off").unwrap();
        let service = HtmlTextService::with_options(options);
        assert_eq!(service.to_text("&#65;&amp;"), "&#65;&");
    }

    #[test]
    fn test_invalid_numeric_entities_option() {
        let err = TextOptions::default().parse_numeric_entities("octal").unwrap_err();
        assert!(err.to_string().contains("octal"));
    }
}
