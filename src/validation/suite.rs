// Suite Evaluation
//
// Splits a loaded case list into the validation group (expects hits or no
// hits) and the error-behavior group (expects the call to fail), then turns
// every planned case into exactly one report.

use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::{CaseValidator, Classification, Outcome, Verdict, assert_match};
use crate::cases::{ExpectedOutcome, TestCase, case_ids};
use crate::search::SearchClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseGroup {
    Validation,
    ErrorBehavior,
}

impl CaseGroup {
    pub fn test_name(self) -> &'static str {
        match self {
            Self::Validation => "search_api_validation",
            Self::ErrorBehavior => "search_api_error_behaviors",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedCase {
    pub id: String,
    pub group: CaseGroup,
    pub expected: ExpectedOutcome,
    pub case: TestCase,
}

#[derive(Debug, Clone, Default)]
pub struct SuitePlan {
    pub cases: Vec<PlannedCase>,
    /// Cases without a recognized expected outcome
    pub excluded: usize,
}

impl SuitePlan {
    pub fn from_cases(cases: &[TestCase]) -> Self {
        let validation: Vec<TestCase> = cases
            .iter()
            .filter(|c| matches!(c.expected(), Some(ExpectedOutcome::Hits | ExpectedOutcome::NoHits)))
            .cloned()
            .collect();
        let error_behavior: Vec<TestCase> = cases
            .iter()
            .filter(|c| c.expected() == Some(ExpectedOutcome::Error))
            .cloned()
            .collect();
        let excluded = cases.len() - validation.len() - error_behavior.len();
        if excluded > 0 {
            warn!("⚠️ {} case(s) have no recognized expected_outcome and were excluded", excluded);
        }

        // Identifiers are positional within each group
        let mut planned = Vec::with_capacity(validation.len() + error_behavior.len());
        for (group, members) in [
            (CaseGroup::Validation, validation),
            (CaseGroup::ErrorBehavior, error_behavior),
        ] {
            let ids = case_ids(&members);
            for (id, case) in ids.into_iter().zip(members) {
                if let Some(expected) = case.expected() {
                    planned.push(PlannedCase {
                        id,
                        group,
                        expected,
                        case,
                    });
                }
            }
        }

        Self {
            cases: planned,
            excluded,
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    Failed(String),
    /// The environment cannot run this case
    ExpectedNotRun(String),
}

impl CaseStatus {
    /// Progress marker: `.` pass, `F` fail, `x` expected-not-run
    pub fn marker(&self) -> char {
        match self {
            Self::Passed => '.',
            Self::Failed(_) => 'F',
            Self::ExpectedNotRun(_) => 'x',
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub id: String,
    pub group: CaseGroup,
    pub status: CaseStatus,
    /// `None` when the case was not run
    pub classification: Option<Classification>,
    pub fallback_attempts: usize,
}

impl CaseReport {
    pub fn node_id(&self) -> String {
        format!("{}[{}]", self.group.test_name(), self.id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuiteOutcome {
    pub reports: Vec<CaseReport>,
    pub excluded: usize,
    pub elapsed: Duration,
}

impl SuiteOutcome {
    fn count(&self, pred: impl Fn(&CaseStatus) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.status)).count()
    }

    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Failed(_)))
    }

    pub fn expected_not_run(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::ExpectedNotRun(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&CaseReport, &str)> {
        self.reports.iter().filter_map(|r| match &r.status {
            CaseStatus::Failed(message) => Some((r, message.as_str())),
            _ => None,
        })
    }
}

impl<C: SearchClient> CaseValidator<C> {
    /// Run one planned case to a verdict
    pub fn evaluate(&self, planned: &PlannedCase) -> CaseReport {
        let case = &planned.case;
        let description = case.description();
        let config = self.config();

        let unsupported = match planned.group {
            CaseGroup::Validation => {
                config.lacks_real_filters(description) || config.lacks_image_url(description)
            }
            CaseGroup::ErrorBehavior => config.lacks_image_url(description),
        };
        if unsupported {
            return CaseReport {
                id: planned.id.clone(),
                group: planned.group,
                status: CaseStatus::ExpectedNotRun(format!("env not configured for: {}", description)),
                classification: None,
                fallback_attempts: 0,
            };
        }

        let mut classification = self.classify(case);
        let mut fallback_attempts = 0;
        if planned.group == CaseGroup::Validation
            && classification.outcome == Outcome::NoHits
            && !case.is_image_query()
        {
            let trace = self.validate_with_trace(case);
            fallback_attempts = trace.attempts.len();
            classification = trace.classification;
        }

        let status = match assert_match(case, planned.expected, classification.outcome, &classification.reason) {
            Verdict::Pass => CaseStatus::Passed,
            Verdict::Fail(message) => CaseStatus::Failed(message),
        };

        CaseReport {
            id: planned.id.clone(),
            group: planned.group,
            status,
            classification: Some(classification),
            fallback_attempts,
        }
    }

    /// Evaluate every planned case in order, handing each report to `on_case`
    /// as soon as it is ready
    pub fn run_suite<E, F>(&self, plan: &SuitePlan, mut on_case: F) -> Result<SuiteOutcome, E>
    where
        F: FnMut(&CaseReport) -> Result<(), E>,
    {
        let started = Instant::now();
        let mut reports = Vec::with_capacity(plan.len());
        for planned in &plan.cases {
            let report = self.evaluate(planned);
            on_case(&report)?;
            reports.push(report);
        }

        let outcome = SuiteOutcome {
            reports,
            excluded: plan.excluded,
            elapsed: started.elapsed(),
        };
        info!(
            "✅ suite finished: {} passed, {} failed, {} not run in {:.2}s",
            outcome.passed(),
            outcome.failed(),
            outcome.expected_not_run(),
            outcome.elapsed.as_secs_f64()
        );
        Ok(outcome)
    }
}
