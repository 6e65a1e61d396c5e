// Outcome Matcher Tests

use crate::cases::ExpectedOutcome;
use crate::tests::helpers::case;
use crate::validation::{Outcome, Verdict, assert_match};
use serde_json::json;

#[cfg(test)]
mod assert_match_tests {
    use super::*;

    #[test]
    fn test_matching_outcomes_pass() {
        let c = case(json!({"description": "any"}));
        assert_eq!(assert_match(&c, ExpectedOutcome::Hits, Outcome::Hits, ""), Verdict::Pass);
        assert_eq!(assert_match(&c, ExpectedOutcome::NoHits, Outcome::NoHits, ""), Verdict::Pass);
        assert_eq!(
            assert_match(&c, ExpectedOutcome::Error, Outcome::Error, "400 / invalid filter"),
            Verdict::Pass
        );
    }

    #[test]
    fn test_mismatch_message_without_reason() {
        let c = case(json!({"description": "basic text search", "query_text": "sunset"}));
        let verdict = assert_match(&c, ExpectedOutcome::Hits, Outcome::NoHits, "");

        assert_eq!(
            verdict,
            Verdict::Fail("'basic text search': expected hits, got no_hits".to_string())
        );
    }

    #[test]
    fn test_mismatch_message_carries_reason() {
        let c = case(json!({"query_text": "sunset"}));
        let verdict = assert_match(&c, ExpectedOutcome::NoHits, Outcome::Error, "503 / upstream busy");

        assert_eq!(
            verdict,
            Verdict::Fail("'sunset': expected no_hits, got error (reason: 503 / upstream busy)".to_string())
        );
        assert!(!verdict.is_pass());
    }

    #[test]
    fn test_error_expectation_rejects_hits() {
        let c = case(json!({"description": "bad filter"}));
        match assert_match(&c, ExpectedOutcome::Error, Outcome::Hits, "") {
            Verdict::Fail(message) => assert!(message.contains("expected error, got hits")),
            Verdict::Pass => panic!("hits must not satisfy an error expectation"),
        }
    }
}
