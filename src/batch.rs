//! Batch extraction with isolated per-URL failures.

use tokio::task::JoinSet;
use tracing::instrument;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::extractor::{self, ExtractedDocument};

/// One URL's outcome within a batch.
#[derive(Debug)]
pub struct BatchItem {
    pub url: String,
    pub outcome: Result<ExtractedDocument, ExtractError>,
}

/// Extract every URL concurrently. One URL failing never aborts its
/// siblings; results come back in input order. Blank entries fail fast as
/// `InvalidInput` without touching the network.
#[instrument(skip_all, fields(count = urls.len()))]
pub async fn extract_all(urls: &[String], config: &ExtractConfig) -> Vec<BatchItem> {
    let mut set = JoinSet::new();
    for (index, url) in urls.iter().enumerate() {
        let url = url.trim().to_string();
        let config = config.clone();
        set.spawn(async move {
            let outcome = if url.is_empty() {
                Err(ExtractError::InvalidInput {
                    url: url.clone(),
                    reason: "empty url".to_string(),
                })
            } else {
                extractor::extract(&url, &config).await
            };
            (index, BatchItem { url, outcome })
        });
    }

    let mut items: Vec<Option<BatchItem>> = Vec::new();
    items.resize_with(urls.len(), || None);
    while let Some(joined) = set.join_next().await {
        // A panicked task loses its slot; the others still report.
        if let Ok((index, item)) = joined {
            items[index] = Some(item);
        }
    }
    items.into_iter().flatten().collect()
}
