pub mod content;
pub mod normalize;
pub mod title;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use url::Url;

use crate::config::ExtractConfig;
use crate::dom::Document;
use crate::error::ExtractError;
use crate::fetcher;

/// The pipeline's output. `title` may be empty; `text` is non-empty, within
/// the configured bounds, and carries no leading/trailing whitespace. Never
/// constructed on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Final URL after redirects.
    pub url: Url,
    pub title: String,
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}

/// Extract a clean `(title, text)` document from a URL.
#[instrument(skip_all, fields(url = %url))]
pub async fn extract(
    url: &str,
    config: &ExtractConfig,
) -> Result<ExtractedDocument, ExtractError> {
    // 1. Fetch the page
    let resp = fetcher::fetch(url, config).await?;

    // 2. Build the structural tree
    let doc = Document::parse(&resp.body_utf8, url)?;

    // 3. Title and content cascades are independent of each other
    let title = title::resolve(&doc);
    let raw_text = content::extract(&doc, config);

    // 4. Normalize, bound, and gate on meaningful length
    let text = normalize::normalize_and_bound(&raw_text, url, config)?;

    Ok(ExtractedDocument {
        url: resp.url_final,
        title,
        text,
        fetched_at: resp.fetched_at,
    })
}
