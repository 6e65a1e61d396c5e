pub mod client;
pub mod tempdir;

pub use client::{ScriptedClient, case, hits, no_hits, validator, validator_with};
// Re-export the unique_temp_dir function for easy access
pub use tempdir::{unique_temp_dir, write_json};
