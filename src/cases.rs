// Case Store
//
// Loads the declarative case suite from the first case file that exists,
// and derives the stable labels used when reporting on each case.

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};
use crate::validation::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PRIMARY_CASES_FILE: &str = "advanced_test_cases.json";
pub const SECONDARY_CASES_FILE: &str = "test_cases.json";
pub const CASES_SUBDIR: &str = "test_cases_json";

pub const IMAGE_MEDIA_TYPE: &str = "image";

/// One declarative validation scenario.
///
/// Parameter fields are kept as raw JSON so error cases can send values the
/// API is expected to reject (wrong types, out-of-range limits, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_media_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_outcome: Option<Value>,
    /// Fields the validator does not interpret (notes, tags, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a case claims the API will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedOutcome {
    Hits,
    NoHits,
    Error,
}

impl ExpectedOutcome {
    /// `true` → hits, `false` → no hits, `"error"` → error; anything else is
    /// not an expectation.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(true) => Some(Self::Hits),
            Value::Bool(false) => Some(Self::NoHits),
            Value::String(tag) if tag == "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn target(self) -> Outcome {
        match self {
            Self::Hits => Outcome::Hits,
            Self::NoHits => Outcome::NoHits,
            Self::Error => Outcome::Error,
        }
    }
}

impl TestCase {
    pub fn expected(&self) -> Option<ExpectedOutcome> {
        self.expected_outcome.as_ref().and_then(ExpectedOutcome::from_value)
    }

    pub fn is_image_query(&self) -> bool {
        matches!(&self.query_media_type, Some(Value::String(t)) if t == IMAGE_MEDIA_TYPE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Text query coerced to a string; absent stays absent
    pub fn query_text_string(&self) -> Option<String> {
        self.query_text.as_ref().and_then(value_to_text)
    }

    /// Label used in verdict messages
    pub fn label(&self) -> String {
        non_empty(self.description.clone())
            .or_else(|| non_empty(self.query_text_string()))
            .unwrap_or_else(|| serde_json::to_string(self).unwrap_or_default())
    }

    /// Derived copy with the text query and search options substituted
    pub fn with_query_rewrite(&self, query_text: &str, search_options: &[&str]) -> Self {
        Self {
            query_text: Some(Value::String(query_text.to_string())),
            search_options: Some(Value::Array(
                search_options
                    .iter()
                    .map(|opt| Value::String((*opt).to_string()))
                    .collect(),
            )),
            ..self.clone()
        }
    }
}

pub(crate) fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // Booleans go out as "True" / "False"
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Stable identifier for the case at `index`
pub fn case_id(case: &TestCase, index: usize) -> String {
    non_empty(case.description.clone())
        .or_else(|| non_empty(case.query_text_string()))
        .or_else(|| non_empty(case.query_media_url.clone()))
        .unwrap_or_else(|| format!("case_{}", index))
}

pub fn case_ids(cases: &[TestCase]) -> Vec<String> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| case_id(case, index))
        .collect()
}

/// Candidate case files in precedence order
pub fn candidate_paths(config: &ValidatorConfig, base_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(5);
    if let Some(explicit) = &config.cases_path {
        let expanded = shellexpand::tilde(&explicit.to_string_lossy()).into_owned();
        let expanded = PathBuf::from(expanded);
        candidates.push(if expanded.is_absolute() {
            expanded
        } else {
            base_dir.join(expanded)
        });
    }
    candidates.push(base_dir.join(PRIMARY_CASES_FILE));
    candidates.push(base_dir.join(SECONDARY_CASES_FILE));
    candidates.push(base_dir.join(CASES_SUBDIR).join(PRIMARY_CASES_FILE));
    candidates.push(base_dir.join(CASES_SUBDIR).join(SECONDARY_CASES_FILE));
    candidates
}

/// First candidate that exists on disk
pub fn resolve_cases_path(config: &ValidatorConfig, base_dir: &Path) -> Result<PathBuf> {
    let candidates = candidate_paths(config, base_dir);
    match candidates.iter().find(|p| p.exists()) {
        Some(found) => {
            debug!("📂 Using cases file {}", found.display());
            Ok(found.clone())
        }
        None => Err(ValidatorError::CasesNotFound { tried: candidates }),
    }
}

/// Resolve the case source relative to the working directory and load it
pub fn load_cases(config: &ValidatorConfig) -> Result<(PathBuf, Vec<TestCase>)> {
    let cwd = std::env::current_dir()?;
    let path = resolve_cases_path(config, &cwd)?;
    let cases = load_cases_from(&path)?;
    Ok((path, cases))
}

pub fn load_cases_from(path: &Path) -> Result<Vec<TestCase>> {
    let raw = std::fs::read_to_string(path)?;
    let malformed = |reason: String| ValidatorError::MalformedCases {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(&raw).map_err(|e| malformed(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(malformed("expected a JSON array of case objects".to_string()));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(malformed(format!("entry {} is not an object", index)));
            }
            serde_json::from_value::<TestCase>(entry)
                .map_err(|e| malformed(format!("entry {}: {}", index, e)))
        })
        .collect()
}
