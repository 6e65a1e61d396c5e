// search-validator - Behavior Validation for Multimodal Search APIs
//!
//! Runs a declarative suite of search cases against a live index, classifies
//! every answer as hits / no hits / error, retries ambiguous text queries
//! through a fixed rewrite sequence, and reports a verdict per case.

pub mod cases;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use cases::{ExpectedOutcome, TestCase, case_ids, load_cases};
pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use search::{QueryParams, SearchClient, SearchFailure, SearchResponse};
pub use validation::{CaseValidator, Classification, Outcome, Verdict};
