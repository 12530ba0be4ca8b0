//! Extraction configuration.
//!
//! Every `extract` call takes an explicit [`ExtractConfig`] value rather than
//! reading ambient global state, so tests can vary timeouts and thresholds
//! freely and parallel extractions stay independent. The binary builds one
//! from environment variables with the design defaults as fallback.

use std::env;
use std::time::Duration;

/// Environment variable names used by `ExtractConfig::from_env`. Public so
/// tests and callers can refer to them.
pub const ENV_TIMEOUT_SECS: &str = "EXCERPT_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "EXCERPT_USER_AGENT";
pub const ENV_MAX_BODY_BYTES: &str = "EXCERPT_MAX_BODY_BYTES";
pub const ENV_SHORT_CONTENT_LEN: &str = "EXCERPT_SHORT_CONTENT_LEN";
pub const ENV_MIN_CONTENT_LEN: &str = "EXCERPT_MIN_CONTENT_LEN";
pub const ENV_MAX_CONTENT_LEN: &str = "EXCERPT_MAX_CONTENT_LEN";

/// Browser-like identity; some servers return reduced or blocked pages to
/// clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB

/// Per-call extraction configuration. Length thresholds are Unicode scalar
/// counts, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Total deadline for the HTTP request, connect included.
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: String,
    /// Responses larger than this are rejected without decoding.
    pub max_body_bytes: u64,
    /// Below this, a structural (Tier 1) result escalates to paragraph
    /// aggregation.
    pub short_content_len: usize,
    /// Below this, a paragraph (Tier 2) result escalates to the full-body
    /// fallback; also the final meaningful-content gate.
    pub min_content_len: usize,
    /// Normalized text is prefix-truncated to this many characters.
    pub max_content_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            short_content_len: 500,
            min_content_len: 200,
            max_content_len: 20_000,
        }
    }
}

impl ExtractConfig {
    /// Load from environment variables, falling back to the defaults above.
    /// Unparseable values fall back silently rather than failing startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout: env_parsed(ENV_TIMEOUT_SECS)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: env::var(ENV_USER_AGENT).unwrap_or(defaults.user_agent),
            accept: defaults.accept,
            max_body_bytes: env_parsed(ENV_MAX_BODY_BYTES).unwrap_or(defaults.max_body_bytes),
            short_content_len: env_parsed(ENV_SHORT_CONTENT_LEN)
                .unwrap_or(defaults.short_content_len),
            min_content_len: env_parsed(ENV_MIN_CONTENT_LEN).unwrap_or(defaults.min_content_len),
            max_content_len: env_parsed(ENV_MAX_CONTENT_LEN).unwrap_or(defaults.max_content_len),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_TIMEOUT_SECS,
            ENV_USER_AGENT,
            ENV_MAX_BODY_BYTES,
            ENV_SHORT_CONTENT_LEN,
            ENV_MIN_CONTENT_LEN,
            ENV_MAX_CONTENT_LEN,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.short_content_len, 500);
        assert_eq!(config.min_content_len, 200);
        assert_eq!(config.max_content_len, 20_000);
        assert!(config.accept.starts_with("text/html"));
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert_eq!(ExtractConfig::from_env(), ExtractConfig::default());
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_TIMEOUT_SECS, "5");
            env::set_var(ENV_MIN_CONTENT_LEN, "50");
        }

        let config = ExtractConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.min_content_len, 50);
        // untouched fields keep defaults
        assert_eq!(config.max_content_len, 20_000);

        clear_env();
    }

    #[test]
    fn test_from_env_ignores_unparseable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_MAX_CONTENT_LEN, "not-a-number");
        }

        let config = ExtractConfig::from_env();
        assert_eq!(config.max_content_len, 20_000);

        clear_env();
    }
}
