//! Turns an arbitrary web page into a clean, bounded block of article text
//! plus a title, reliably enough to feed a question-answering or indexing
//! pipeline.
//!
//! The core is a single operation, [`extract`]: fetch the page, parse it into
//! a structural tree, resolve a best-effort title, run an ordered three-tier
//! content cascade (semantic containers → paragraph aggregation → full-body
//! fallback), then normalize and bound the text. Anything that goes wrong
//! surfaces as a typed [`ExtractError`] so callers can tell a network problem
//! from a blocked page from content that was simply too sparse.
//!
//! Every call takes an explicit [`ExtractConfig`]; there is no shared mutable
//! state between extractions and they can run fully in parallel —
//! [`extract_all`] does exactly that for a batch of URLs with isolated
//! per-URL failures.

pub mod batch;
pub mod config;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod fetcher;

pub use batch::{BatchItem, extract_all};
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use extractor::{ExtractedDocument, extract};
