use crate::dom::Document;
use scraper::Selector;
use std::sync::LazyLock;

static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:title']").unwrap());

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Best-effort title: og:title meta content, then the `<title>` element,
/// then empty. Title absence is never a failure.
pub fn resolve(doc: &Document) -> String {
    if let Some(content) = doc.first_attr(&OG_TITLE, "content") {
        let content = content.trim();
        if !content.is_empty() {
            return content.to_string();
        }
    }

    if let Some(text) = doc.first_text(&TITLE) {
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html, "https://example.com").unwrap()
    }

    #[test]
    fn test_og_title_wins_over_title_element() {
        let doc = doc(
            "<html><head>\
             <meta property='og:title' content='Example'>\
             <title>Other</title>\
             </head><body></body></html>",
        );
        assert_eq!(resolve(&doc), "Example");
    }

    #[test]
    fn test_title_element_fallback_is_trimmed() {
        let doc = doc("<html><head><title>  Spaced Out \n</title></head><body></body></html>");
        assert_eq!(resolve(&doc), "Spaced Out");
    }

    #[test]
    fn test_empty_og_title_falls_through() {
        let doc = doc(
            "<html><head>\
             <meta property='og:title' content='  '>\
             <title>Fallback</title>\
             </head><body></body></html>",
        );
        assert_eq!(resolve(&doc), "Fallback");
    }

    #[test]
    fn test_no_title_sources_yields_empty() {
        let doc = doc("<html><body><p>No head here</p></body></html>");
        assert_eq!(resolve(&doc), "");
    }
}
