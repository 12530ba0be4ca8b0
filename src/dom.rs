//! Minimal queryable-tree abstraction over the HTML parser.
//!
//! The cascade logic only ever needs "text of first match", "text of every
//! match", and "attribute of first match", so that is the whole surface.
//! Keeping it this narrow means the parsing library can be swapped without
//! touching title or content extraction.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

/// A parsed HTML document. Parsing is browser-grade tag-soup tolerant;
/// construction only fails when there is nothing to build a tree from.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str, url: &str) -> Result<Self, ExtractError> {
        if raw.trim().is_empty() {
            return Err(ExtractError::Parse {
                url: url.to_string(),
            });
        }
        Ok(Self {
            html: Html::parse_document(raw),
        })
    }

    /// Text of the first element matching `selector`, untrimmed.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html.select(selector).next().map(element_text)
    }

    /// Text of every matching element, in document order.
    pub fn all_texts(&self, selector: &Selector) -> Vec<String> {
        self.html.select(selector).map(element_text).collect()
    }

    /// Concatenated text of every matching element, in document order.
    pub fn concat_text(&self, selector: &Selector) -> String {
        self.html.select(selector).map(element_text).collect()
    }

    /// Attribute value from the first matching element that carries it.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.html
            .select(selector)
            .find_map(|el| el.value().attr(attr).map(str::to_string))
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let err = Document::parse("   \n\t ", "https://example.com").unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }

    #[test]
    fn test_parse_tag_soup_succeeds() {
        // Unclosed tags must not be fatal.
        let doc = Document::parse(
            "<html><body><p>Unclosed<div>More content",
            "https://example.com",
        )
        .unwrap();
        assert_eq!(doc.first_text(&selector("p")).unwrap(), "Unclosed");
    }

    #[test]
    fn test_first_text_and_all_texts() {
        let doc = Document::parse(
            "<html><body><p>one</p><p>two</p><p>three</p></body></html>",
            "https://example.com",
        )
        .unwrap();

        assert_eq!(doc.first_text(&selector("p")).unwrap(), "one");
        assert_eq!(doc.all_texts(&selector("p")), vec!["one", "two", "three"]);
        assert_eq!(doc.first_text(&selector("article")), None);
    }

    #[test]
    fn test_concat_text_preserves_document_order() {
        let doc = Document::parse(
            "<html><body><span class='x'>a</span><b>skip</b><span class='x'>b</span></body></html>",
            "https://example.com",
        )
        .unwrap();
        assert_eq!(doc.concat_text(&selector("span.x")), "ab");
    }

    #[test]
    fn test_first_attr() {
        let doc = Document::parse(
            "<html><head><meta property='og:title' content='Example'></head></html>",
            "https://example.com",
        )
        .unwrap();
        assert_eq!(
            doc.first_attr(&selector("meta[property='og:title']"), "content")
                .unwrap(),
            "Example"
        );
        assert_eq!(
            doc.first_attr(&selector("meta[property='og:title']"), "missing"),
            None
        );
    }
}
