/// Report artifacts for the `report` command
///
/// One text file per case file run, named
/// `<start YYYYmmdd_HHMMSS>_<case file name>.txt`.
use anyhow::Result;
use chrono::{DateTime, Local, TimeDelta};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::ENV_INCLUDE_FULL_OUTPUT;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub cases_path: PathBuf,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub progress: String,
    pub summary: String,
    pub failures: Vec<String>,
    pub stdout: String,
    pub stderr: String,
}

impl RunReport {
    pub fn file_name(&self) -> String {
        let cases_name = self
            .cases_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cases".to_string());
        format!("{}_{}.txt", self.start.format("%Y%m%d_%H%M%S"), cases_name)
    }

    pub fn render(&self, include_full_output: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "Selected cases file: {}", self.cases_path.display());
        let _ = writeln!(out, "Start:   {}", iso_timestamp(&self.start));
        let _ = writeln!(out, "End:     {}", iso_timestamp(&self.end));
        let _ = writeln!(out, "Elapsed: {}\n", format_elapsed(self.end - self.start));

        out.push_str("=== SUMMARY ===\n");
        for line in [&self.progress, &self.summary] {
            if !line.is_empty() {
                let _ = writeln!(out, "{}", line);
            }
        }

        out.push_str("\n=== SIMPLE FAILURES ===\n");
        if self.failures.is_empty() {
            out.push_str("None\n");
        } else {
            for message in &self.failures {
                let _ = writeln!(out, "- {}", message);
            }
        }
        out.push('\n');

        if include_full_output {
            out.push_str("=== SUITE STDOUT ===\n");
            out.push_str(&self.stdout);
            out.push_str("\n=== SUITE STDERR ===\n");
            out.push_str(&self.stderr);
        } else {
            out.push_str("=== FULL OUTPUT OMITTED ===\n");
            let _ = writeln!(
                out,
                "Set {}=1 to include full suite stdout/stderr.",
                ENV_INCLUDE_FULL_OUTPUT
            );
        }
        out
    }
}

/// Write the report into `out_dir`, returning the file path
pub fn write_report(out_dir: &Path, report: &RunReport, include_full_output: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(report.file_name());
    std::fs::write(&path, report.render(include_full_output))?;
    Ok(path)
}

fn iso_timestamp(at: &DateTime<Local>) -> String {
    at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// `H:MM:SS` with a `.ffffff` fraction when there is one
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let micros = elapsed.num_microseconds().unwrap_or(0).max(0);
    let total_secs = micros / 1_000_000;
    let fraction = micros % 1_000_000;
    let (hours, minutes, seconds) = (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60);
    if fraction == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, fraction)
    }
}
