use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::fetcher::{pipeline::process_response, types::FetchResult};
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

// Shared connection pool. Request identity, Accept header, and deadline come
// from the per-call config so no extraction depends on ambient state.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to build HTTP client")
});

#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str, config: &ExtractConfig) -> Result<FetchResult, ExtractError> {
    // Validate before touching the network.
    let parsed_url = url::Url::parse(url).map_err(|e| ExtractError::InvalidInput {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .timeout(config.timeout)
        .header(reqwest::header::USER_AGENT, config.user_agent.as_str())
        .header(reqwest::header::ACCEPT, config.accept.as_str())
        .send()
        .await
        .map_err(|e| ExtractError::from_reqwest(url, e))?;

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > config.max_body_bytes
    {
        return Err(ExtractError::BodyTooLarge {
            url: url.to_string(),
            bytes: content_length,
        });
    }

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    if !status.is_success() {
        return Err(ExtractError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let content_type = headers
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    // Only HTML goes through the structural pipeline.
    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(ExtractError::UnsupportedContentType {
            url: url.to_string(),
            content_type,
        });
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| ExtractError::from_reqwest(url, e))?;

    // Check body size after download (in case Content-Length was missing)
    if body_bytes.len() as u64 > config.max_body_bytes {
        return Err(ExtractError::BodyTooLarge {
            url: url.to_string(),
            bytes: body_bytes.len() as u64,
        });
    }

    process_response(url, final_url, status, headers, body_bytes, &content_type)
}
