//! Charset detection and decoding for fetched bodies.
//!
//! Order of trust: Content-Type header charset, then `<meta>` declarations in
//! the first 4KB of the body, then chardetng's heuristic guess.

use crate::error::ExtractError;
use crate::fetcher::types::{Charset, FetchResult};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::{StatusCode, header::HeaderMap};
use std::sync::LazyLock;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url: &str,
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<FetchResult, ExtractError> {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(url, &body_bytes, &charset)?;

    Ok(FetchResult {
        url_final,
        status,
        headers,
        body_raw: body_bytes,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    })
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Content-Type header
    if let Some(captures) = CHARSET_REGEX.captures(content_type)
        && let Some(charset_str) = captures.get(1)
        && let Some(encoding) = Encoding::for_label(charset_str.as_str().to_lowercase().as_bytes())
    {
        return Charset::from_encoding(encoding);
    }

    // 2. <meta charset> / <meta http-equiv> in the first 4KB
    let search_bytes = &body_bytes[..body_bytes.len().min(4096)];
    let search_str = String::from_utf8_lossy(search_bytes);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(captures) = regex.captures(&search_str)
            && let Some(charset_str) = captures.get(1)
            && let Some(encoding) =
                Encoding::for_label(charset_str.as_str().to_lowercase().as_bytes())
        {
            return Charset::from_encoding(encoding);
        }
    }

    // 3. Heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn decode_to_utf8(url: &str, body_bytes: &[u8], charset: &Charset) -> Result<String, ExtractError> {
    let encoding = match charset {
        Charset::Utf8 => encoding_rs::UTF_8,
        Charset::Windows1252 => encoding_rs::WINDOWS_1252,
        Charset::ShiftJis => encoding_rs::SHIFT_JIS,
        Charset::Gb2312 => encoding_rs::GBK,
        Charset::Big5 => encoding_rs::BIG5,
        Charset::Other(name) => Encoding::for_label(name.as_bytes()).unwrap_or(encoding_rs::UTF_8),
    };

    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        return Err(ExtractError::Charset {
            url: url.to_string(),
            message: format!("failed to decode content as {}", encoding.name()),
        });
    }

    Ok(decoded.into_owned())
}
