//! Final normalization and bounding of extracted text.

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use regex::Regex;
use std::sync::LazyLock;

// Whitespace runs touching a newline collapse into the newline itself. This
// also flattens blank-line runs, so the output never carries more than two
// consecutive newlines.
static WS_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\n").unwrap());

static WS_AFTER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s+").unwrap());

/// Clean line-boundary whitespace, trim, truncate to `max_content_len`
/// characters, then apply the meaningful-content gate. Too little text is a
/// hard failure, never a silently low-quality success.
pub fn normalize_and_bound(
    raw: &str,
    url: &str,
    config: &ExtractConfig,
) -> Result<String, ExtractError> {
    let text = WS_BEFORE_NEWLINE.replace_all(raw, "\n");
    let text = WS_AFTER_NEWLINE.replace_all(&text, "\n");
    let mut text = text.trim().to_string();

    // Plain prefix truncation, counted in chars; no word-boundary trimming.
    if let Some((idx, _)) = text.char_indices().nth(config.max_content_len) {
        text.truncate(idx);
    }

    let got = text.chars().count();
    if text.is_empty() || got < config.min_content_len {
        return Err(ExtractError::InsufficientContent {
            url: url.to_string(),
            got,
            min: config.min_content_len,
        });
    }

    Ok(text)
}
