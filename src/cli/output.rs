/// Suite output for the `run` command
///
/// Writes progress while cases finish, then a failure section, a short
/// summary and a final counts line. The layout is what `cli::summary`
/// parses back when building reports:
/// - `E   Failed: <message>` in the failure section
/// - `FAILED <node> - Failed: <message>` in the short summary
/// - `<n> failed, <n> passed, <n> xfailed in <secs>s` as the last line
use crate::cli::progress::ProgressReporter;
use crate::validation::{CaseReport, SuiteOutcome};
use std::io::{self, Write};

pub const BANNER_WIDTH: usize = 80;

pub struct SuiteOutputWriter<W: Write> {
    writer: W,
    progress: ProgressReporter,
}

impl<W: Write> SuiteOutputWriter<W> {
    pub fn new(writer: W, total: usize) -> Self {
        Self {
            writer,
            progress: ProgressReporter::new(total),
        }
    }

    pub fn case_finished(&mut self, report: &CaseReport) -> io::Result<()> {
        self.progress.record(report.status.marker(), &mut self.writer)
    }

    pub fn finish(mut self, outcome: &SuiteOutcome) -> io::Result<W> {
        let failures: Vec<_> = outcome
            .failures()
            .map(|(report, message)| (report, single_line(message)))
            .collect();

        if !failures.is_empty() {
            writeln!(self.writer, "{}", banner("FAILURES", '='))?;
            for (report, message) in &failures {
                writeln!(self.writer, "{}", banner(&report.node_id(), '_'))?;
                writeln!(self.writer, "E   Failed: {}", message)?;
            }
            writeln!(self.writer, "{}", banner("short test summary info", '='))?;
            for (report, message) in &failures {
                writeln!(self.writer, "FAILED {} - Failed: {}", report.node_id(), message)?;
            }
        }

        writeln!(self.writer, "{}", counts_line(outcome))?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// `"1 failed, 3 passed, 1 xfailed in 2.31s"`, or `"no tests ran in ..."`
pub fn counts_line(outcome: &SuiteOutcome) -> String {
    let counts: Vec<String> = [
        (outcome.failed(), "failed"),
        (outcome.passed(), "passed"),
        (outcome.expected_not_run(), "xfailed"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{} {}", n, label))
    .collect();

    let seconds = outcome.elapsed.as_secs_f64();
    if counts.is_empty() {
        format!("no tests ran in {:.2}s", seconds)
    } else {
        format!("{} in {:.2}s", counts.join(", "), seconds)
    }
}

/// Failure lines are parsed one line at a time
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Centers ` title ` in a line of `fill` characters
pub fn banner(title: &str, fill: char) -> String {
    let title = format!(" {} ", title);
    let len = title.chars().count();
    if len >= BANNER_WIDTH {
        return title.trim().to_string();
    }
    let left = (BANNER_WIDTH - len) / 2;
    let right = BANNER_WIDTH - len - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        title,
        fill.to_string().repeat(right)
    )
}
