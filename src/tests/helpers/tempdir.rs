/// Test helper for creating unique temporary directories
///
/// Prevents parallel test conflicts by ensuring each test gets a unique temp directory
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tempfile::TempDir;

static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a uniquely named temporary directory for parallel test execution
pub fn unique_temp_dir(test_name: &str) -> TempDir {
    let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let unique_name = format!("search_validator_test_{}_{}", test_name, counter);

    tempfile::Builder::new()
        .prefix(&unique_name)
        .tempdir()
        .expect("Failed to create unique temp directory")
}

/// Write `value` as JSON at `dir/relative`, creating parent directories
pub fn write_json(dir: &Path, relative: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, serde_json::to_string_pretty(value).expect("serializable fixture"))
        .expect("Failed to write fixture");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_temp_dirs_are_different() {
        let dir1 = unique_temp_dir("test");
        let dir2 = unique_temp_dir("test");
        let dir3 = unique_temp_dir("test");

        let mut paths = HashSet::new();
        paths.insert(dir1.path().to_path_buf());
        paths.insert(dir2.path().to_path_buf());
        paths.insert(dir3.path().to_path_buf());

        assert_eq!(paths.len(), 3, "All temp dirs should be unique");
    }

    #[test]
    fn test_write_json_creates_nested_directories() {
        let dir = unique_temp_dir("write_json");
        let path = write_json(dir.path(), "nested/deeper/cases.json", &serde_json::json!([]));

        assert!(path.exists(), "Fixture should exist at {}", path.display());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
