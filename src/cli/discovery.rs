/// Case file discovery for the `report` command
///
/// A directory argument contributes its `*.json` files (sorted, not
/// recursive); a file argument contributes itself when it is a `.json` file.
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub fn discover_case_files(args: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for arg in args {
        let path = expand(arg);
        if path.is_dir() {
            found.extend(json_files_in(&path));
        } else if path.is_file() && has_json_extension(&path) {
            found.push(path);
        } else {
            warn!("⚠️ Ignoring {}: not a JSON file or directory", path.display());
        }
    }
    found
}

fn expand(arg: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&arg.to_string_lossy()).into_owned());
    std::fs::canonicalize(&expanded).unwrap_or(expanded)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn json_files_in(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| p.is_file()).collect(),
        Err(e) => {
            warn!("⚠️ Invalid discovery pattern {}: {}", pattern, e);
            Vec::new()
        }
    };
    files.sort();
    debug!("📂 {} case file(s) in {}", files.len(), dir.display());
    files
}
