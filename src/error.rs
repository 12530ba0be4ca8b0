use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the extraction pipeline. Every variant carries the
/// originating URL so batch callers can report per-URL diagnostics.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid url '{url}': {reason}")]
    InvalidInput { url: String, reason: String },

    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("http status {status} from {url}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("body too large from {url} ({bytes} bytes)")]
    BodyTooLarge { url: String, bytes: u64 },

    #[error("unsupported content-type from {url}: {content_type}")]
    UnsupportedContentType { url: String, content_type: String },

    #[error("charset error from {url}: {message}")]
    Charset { url: String, message: String },

    #[error("unparseable document from {url}")]
    Parse { url: String },

    #[error("insufficient content from {url} ({got} chars, minimum {min})")]
    InsufficientContent { url: String, got: usize, min: usize },
}

impl ExtractError {
    /// The URL the failing extraction was attempted for.
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidInput { url, .. }
            | Self::Timeout { url }
            | Self::Network { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::BodyTooLarge { url, .. }
            | Self::UnsupportedContentType { url, .. }
            | Self::Charset { url, .. }
            | Self::Parse { url }
            | Self::InsufficientContent { url, .. } => url,
        }
    }

    /// Whether a caller-level retry could plausibly succeed. The pipeline
    /// itself never retries; this only classifies for the orchestration
    /// layer. `InsufficientContent` and 4xx statuses are deterministic and
    /// not worth retrying without caller judgment.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => status.is_server_error(),

            Self::InvalidInput { .. }
            | Self::BodyTooLarge { .. }
            | Self::UnsupportedContentType { .. }
            | Self::Charset { .. }
            | Self::Parse { .. }
            | Self::InsufficientContent { .. } => false,
        }
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                url: url.to_string(),
                status,
            }
        } else {
            // DNS, connection, TLS, redirect-loop errors
            Self::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}
