pub mod client;
pub mod pipeline;
pub mod types;

pub use client::fetch;
pub use types::{Charset, FetchResult};
