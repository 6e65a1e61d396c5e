use super::Outcome;
use crate::cases::{ExpectedOutcome, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Human-readable mismatch message
    Fail(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Compare the expected outcome of `case` with what actually happened
pub fn assert_match(
    case: &TestCase,
    expected: ExpectedOutcome,
    actual: Outcome,
    reason: &str,
) -> Verdict {
    let target = expected.target();
    if actual == target {
        return Verdict::Pass;
    }

    let detail = if reason.is_empty() {
        String::new()
    } else {
        format!(" (reason: {})", reason)
    };
    Verdict::Fail(format!(
        "'{}': expected {}, got {}{}",
        case.label(),
        target,
        actual,
        detail
    ))
}
