// Validator Configuration
//
// Everything the suite needs from its environment is read once into a
// `ValidatorConfig` and handed to the validator at construction time.

use crate::error::{Result, ValidatorError};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_REAL_FILTERS: &str = "TL_REAL_FILTERS";
pub const ENV_IMAGE_URL: &str = "TL_IMAGE_URL";
pub const ENV_CASES_FILE: &str = "TL_CASES_FILE";
pub const ENV_INCLUDE_FULL_OUTPUT: &str = "TL_INCLUDE_FULL_OUTPUT";
pub const ENV_API_KEY: &str = "TWELVE_LABS_API_KEY";
pub const ENV_INDEX_ID: &str = "TWELVE_LABS_INDEX_ID";
pub const ENV_API_BASE_URL: &str = "TL_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "TL_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_BASE_URL: &str = "https://api.twelvelabs.io/v1.3";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Case descriptions that only make sense against an index with real,
/// filterable metadata.
pub const NEEDS_REAL_FILTERS: &[&str] = &[
    "Filter by filename (system metadata)",
    "Filter by duration range",
    "Filter by video id list",
    "User metadata boolean filter",
];

/// Case descriptions that need image-URL queries enabled on the endpoint.
pub const NEEDS_IMAGE_URL: &[&str] = &["Image search with URL (if image search enabled)"];

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Index carries filterable metadata (TL_REAL_FILTERS=1)
    pub real_filters_enabled: bool,

    /// Endpoint accepts image-URL queries (TL_IMAGE_URL=1)
    pub image_url_enabled: bool,

    /// Explicit case source, overrides discovery
    pub cases_path: Option<PathBuf>,

    /// Reports carry full suite output instead of an omission notice
    pub include_full_output: bool,

    pub api: ApiSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: Option<String>,
    pub index_id: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            index_id: None,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ApiSettings {
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(ValidatorError::MissingSetting(ENV_API_KEY))
    }
}

impl ValidatorConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).as_deref() == Some("1");
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = non_empty(ENV_HTTP_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            real_filters_enabled: flag(ENV_REAL_FILTERS),
            image_url_enabled: flag(ENV_IMAGE_URL),
            cases_path: non_empty(ENV_CASES_FILE).map(PathBuf::from),
            include_full_output: flag(ENV_INCLUDE_FULL_OUTPUT),
            api: ApiSettings {
                api_key: non_empty(ENV_API_KEY),
                index_id: non_empty(ENV_INDEX_ID),
                base_url: non_empty(ENV_API_BASE_URL)
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }

    pub fn with_cases_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.cases_path = path;
        }
        self
    }

    /// Case needs a filterable index the environment does not provide
    pub fn lacks_real_filters(&self, description: &str) -> bool {
        !self.real_filters_enabled && NEEDS_REAL_FILTERS.contains(&description)
    }

    /// Case needs image-URL queries the environment does not provide
    pub fn lacks_image_url(&self, description: &str) -> bool {
        !self.image_url_enabled && NEEDS_IMAGE_URL.contains(&description)
    }

    pub fn require_index_id(&self) -> Result<&str> {
        self.api
            .index_id
            .as_deref()
            .ok_or(ValidatorError::MissingSetting(ENV_INDEX_ID))
    }
}
