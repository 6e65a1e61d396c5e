use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error(
        "Could not find a cases JSON file. Set TL_CASES_FILE or place one of: {}",
        display_candidates(.tried)
    )]
    CasesNotFound { tried: Vec<PathBuf> },

    #[error("Cases file {path} is malformed: {reason}")]
    MalformedCases { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0} environment variable not set.")]
    MissingSetting(&'static str),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

fn display_candidates(tried: &[PathBuf]) -> String {
    tried
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
