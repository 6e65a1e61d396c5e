//! Fallback Validator
//!
//! A `no_hits` answer to a text query is ambiguous: the query may be
//! genuinely unmatched, or only sensitive to casing or to the modality it
//! was searched in. The validator walks a fixed sequence of rewrites and
//! stops at the first one that finds something.
//!
//! Order: text variants `original, lower, title` (outer) × option subsets
//! `[visual, audio], [visual], [audio]` (inner). On exhaustion the *last*
//! attempt's classification is returned.

use tracing::debug;

use super::{CaseValidator, Classification, Outcome};
use crate::cases::TestCase;
use crate::search::SearchClient;

pub static FALLBACK_OPTION_SETS: [&[&str]; 3] = [&["visual", "audio"], &["visual"], &["audio"]];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRewrite {
    pub query_text: String,
    pub search_options: &'static [&'static str],
}

/// Lazily enumerates every rewrite of `base`, in attempt order
pub fn fallback_rewrites(base: &str) -> impl Iterator<Item = QueryRewrite> {
    let variants = [base.to_string(), base.to_lowercase(), title_case(base)];
    variants.into_iter().flat_map(|text| {
        FALLBACK_OPTION_SETS.iter().map(move |options| QueryRewrite {
            query_text: text.clone(),
            search_options: *options,
        })
    })
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest ("new YORK 2nd" → "New York 2Nd")
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut inside_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if inside_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            titled.push(ch);
            inside_word = false;
        }
    }
    titled
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallbackAttempt {
    pub rewrite: QueryRewrite,
    pub outcome: Outcome,
    pub reason: String,
}

/// Final classification plus every rewrite that was tried to reach it
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackReport {
    pub classification: Classification,
    /// Empty when no rewrite applied (media query, no text)
    pub attempts: Vec<FallbackAttempt>,
}

impl<C: SearchClient> CaseValidator<C> {
    pub fn validate_with_fallbacks(&self, case: &TestCase) -> Classification {
        self.validate_with_trace(case).classification
    }

    pub fn validate_with_trace(&self, case: &TestCase) -> FallbackReport {
        // Media queries have no text to vary
        if case.is_image_query() {
            return FallbackReport {
                classification: self.classify(case),
                attempts: Vec::new(),
            };
        }
        let Some(base) = case.query_text_string() else {
            return FallbackReport {
                classification: self.classify(case),
                attempts: Vec::new(),
            };
        };

        let mut attempts = Vec::new();
        let mut last = None;
        for rewrite in fallback_rewrites(&base) {
            let derived = case.with_query_rewrite(&rewrite.query_text, rewrite.search_options);
            let classification = self.classify(&derived);
            debug!(
                "🔁 fallback {:?} {:?} → {}",
                rewrite.query_text, rewrite.search_options, classification.outcome
            );
            attempts.push(FallbackAttempt {
                rewrite,
                outcome: classification.outcome,
                reason: classification.reason.clone(),
            });

            if classification.outcome == Outcome::Hits {
                return FallbackReport {
                    classification,
                    attempts,
                };
            }
            last = Some(classification);
        }

        FallbackReport {
            classification: last.unwrap_or_else(|| self.classify(case)),
            attempts,
        }
    }
}
