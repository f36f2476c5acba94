//! Mocked grading
//!
//! Produces one outcome per test of the problem, with a fixed number of
//! leading tests reported as passing.

use tracing::{debug, instrument};

use crate::catalog::{Problem, TestCase};
use crate::config::MockConfig;
use crate::types::{GradeResult, OutputDiff, TestOutcome};

/// Output reported for every failing test
pub const FAILED_OUTPUT: &str = "[]";

#[instrument(skip_all, fields(problem = %problem.id))]
pub fn grade(mock: &MockConfig, problem: &Problem) -> GradeResult {
    let total = problem.tests.len();
    let pass_count = mock.grade_pass_count.min(total);

    let outcomes: Vec<TestOutcome> = problem
        .tests
        .iter()
        .enumerate()
        .map(|(index, test)| outcome(mock, index, test, index < pass_count))
        .collect();

    let passed = outcomes.iter().filter(|o| o.passed).count();

    debug!(total, passed, "grading complete");

    GradeResult {
        total,
        passed,
        outcomes,
        approach_hint: problem.approach_hint.clone(),
    }
}

fn outcome(mock: &MockConfig, index: usize, test: &TestCase, passed: bool) -> TestOutcome {
    let diff = (!passed).then(|| OutputDiff {
        expected: test.expected.clone(),
        got: FAILED_OUTPUT.to_owned(),
    });

    TestOutcome {
        test_id: test.id.clone(),
        passed,
        time_ms: mock.grade_base_time_ms + index as u64,
        stderr: None,
        diff,
    }
}
