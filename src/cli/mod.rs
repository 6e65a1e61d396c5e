/// CLI utilities for the search-validator binary
///
/// Modules:
/// - output: Suite output for `run` (progress, failure section, counts line)
/// - progress: Fixed-width progress rows
/// - summary: Parses suite output back into failures and status lines
/// - discovery: Finds case files for `report`
/// - report: Renders and writes report artifacts
pub mod discovery;
pub mod output;
pub mod progress;
pub mod report;
pub mod summary;

pub use discovery::discover_case_files;
pub use output::SuiteOutputWriter;
pub use progress::ProgressReporter;
pub use report::{RunReport, write_report};
pub use summary::{extract_progress_and_summary, extract_simple_failures};
