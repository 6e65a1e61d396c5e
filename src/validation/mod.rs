// Outcome Classification
//
// A `CaseValidator` owns the search client, the target index and the
// environment configuration. `classify` issues exactly one search call and
// reduces whatever happened to hits / no_hits / error.

pub mod fallback;
pub mod matcher;
pub mod suite;

pub use fallback::{FallbackAttempt, FallbackReport, QueryRewrite, fallback_rewrites, title_case};
pub use matcher::{Verdict, assert_match};
pub use suite::{CaseGroup, CaseReport, CaseStatus, PlannedCase, SuiteOutcome, SuitePlan};

use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::cases::TestCase;
use crate::config::ValidatorConfig;
use crate::search::{SearchClient, build_params, extract_items};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Hits,
    NoHits,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hits => "hits",
            Self::NoHits => "no_hits",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one classified search attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub outcome: Outcome,
    /// Empty unless `outcome` is `Hits`
    pub items: Vec<Value>,
    /// Empty unless `outcome` is `Error`
    pub reason: String,
}

impl Classification {
    pub fn from_items(items: Vec<Value>) -> Self {
        let outcome = if items.is_empty() {
            Outcome::NoHits
        } else {
            Outcome::Hits
        };
        Self {
            outcome,
            items,
            reason: String::new(),
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error,
            items: Vec::new(),
            reason: reason.into(),
        }
    }
}

pub struct CaseValidator<C: SearchClient> {
    client: C,
    index_id: String,
    config: ValidatorConfig,
}

impl<C: SearchClient> CaseValidator<C> {
    pub fn new(client: C, index_id: impl Into<String>, config: ValidatorConfig) -> Self {
        Self {
            client,
            index_id: index_id.into(),
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// One search attempt, reduced to an outcome
    pub fn classify(&self, case: &TestCase) -> Classification {
        let params = build_params(case);
        match self.client.search(&self.index_id, &params) {
            Ok(response) => {
                let classification = Classification::from_items(extract_items(&response));
                debug!(
                    "🔍 {:?} → {} ({} items)",
                    params.query_text,
                    classification.outcome,
                    classification.items.len()
                );
                classification
            }
            Err(failure) => {
                let reason = failure.reason();
                debug!("🔍 {:?} → error ({})", params.query_text, reason);
                Classification::error(reason)
            }
        }
    }
}
