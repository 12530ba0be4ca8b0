//! The three-tier content cascade.
//!
//! Each tier is a pure function over the parsed document. The cascade policy
//! is data-driven: an ordered list of `(strategy, escalate_if_shorter_than)`
//! pairs, evaluated in sequence. A tier's non-empty output supersedes the
//! running result; escalation happens when the running result is still
//! shorter than the tier's threshold. The last tier has no threshold.

use crate::config::ExtractConfig;
use crate::dom::Document;
use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article").unwrap());

static MAIN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("main").unwrap());

// Coarse by intent: substring match also hits things like
// "article-sidebar-widget". High recall beats precision at this tier.
static ARTICLE_LIKE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id*='article'], [class*='article']").unwrap());

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

type Strategy = fn(&Document) -> String;

fn cascade(config: &ExtractConfig) -> [(Strategy, Option<usize>); 3] {
    [
        (structural_text, Some(config.short_content_len)),
        (paragraph_text, Some(config.min_content_len)),
        (body_text, None),
    ]
}

/// Run the cascade. The result may still be short or empty; length gating is
/// the normalizer's job. Deterministic: the same document and thresholds
/// always select the same tier.
pub fn extract(doc: &Document, config: &ExtractConfig) -> String {
    let mut text = String::new();
    for (strategy, escalate_below) in cascade(config) {
        let candidate = strategy(doc);
        // An earlier tier's result is only superseded, never blended.
        if !candidate.is_empty() {
            text = candidate;
        }
        match escalate_below {
            Some(min) if text.chars().count() < min => continue,
            _ => break,
        }
    }
    text
}

/// Tier 1: semantic containers, first non-empty of `<article>`, `<main>`,
/// then any element whose id or class contains "article".
fn structural_text(doc: &Document) -> String {
    for selector in [&*ARTICLE, &*MAIN] {
        if let Some(text) = doc.first_text(selector) {
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    doc.concat_text(&ARTICLE_LIKE).trim().to_string()
}

/// Tier 2: every `<p>` in document order, newline-joined, blank-line runs
/// collapsed.
fn paragraph_text(doc: &Document) -> String {
    let joined = doc.all_texts(&PARAGRAPH).join("\n");
    BLANK_LINE_RUNS.replace_all(&joined, "\n").trim().to_string()
}

/// Tier 3: last resort, the whole `<body>` with whitespace runs flattened to
/// single spaces. Expected to include navigation and other boilerplate.
fn body_text(doc: &Document) -> String {
    match doc.first_text(&BODY) {
        Some(text) => WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string(),
        None => String::new(),
    }
}
