/// Output-Stream Summarizer
///
/// Line-oriented recognition of failure messages and status lines in the
/// captured output of a suite run. No structured format is assumed.
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static FAILED_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s+Failed:\s*(.*)$").unwrap());
static FAILED_TRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^E\s+Failed:\s*(.*)$").unwrap());
static PROGRESS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\s*100%\s*\]$").unwrap());
static SUMMARY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s+(passed|failed|skipped|xfailed|xpassed|errors?)\b.*in\s+[0-9.]+s").unwrap()
});

/// Failure messages in order of first appearance, duplicates removed
pub fn extract_simple_failures(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut failures = Vec::new();
    for line in text.lines() {
        let line = line.trim_end();
        let captured = FAILED_SUMMARY_RE
            .captures(line)
            .or_else(|| FAILED_TRACE_RE.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        if let Some(message) = captured {
            if seen.insert(message.clone()) {
                failures.push(message);
            }
        }
    }
    failures
}

/// Last `[100%]` progress line and last counts-and-duration line; empty when
/// absent
pub fn extract_progress_and_summary(text: &str) -> (String, String) {
    let mut progress = String::new();
    let mut summary = String::new();
    for line in text.lines() {
        if PROGRESS_RE.is_match(line) {
            progress = line.trim_end().to_string();
        }
        if SUMMARY_LINE_RE.is_match(line) {
            summary = line.trim_end().to_string();
        }
    }
    (progress, summary)
}
