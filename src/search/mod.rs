//! Search call plumbing: parameters in, normalized items out.

pub mod client;
pub mod error;
pub mod http;
pub mod params;
pub mod response;

pub use client::SearchClient;
pub use error::SearchFailure;
pub use http::HttpSearchClient;
pub use params::{QueryParams, build_params};
pub use response::{PageEntry, SearchResponse, extract_items};
