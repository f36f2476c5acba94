use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::TestCase;

/// Descriptive limits attached to languages and problems.
///
/// Nothing enforces these; the CLI reports the limits in effect when grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Time limit in milliseconds
    #[serde(default)]
    pub time_limit_ms: Option<u64>,

    /// Memory limit in megabytes
    #[serde(default)]
    pub memory_mb: Option<u64>,
}

impl ResourceLimits {
    /// Create new resource limits with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits with every field unset, useful as an override base
    pub fn unset() -> Self {
        Self {
            time_limit_ms: None,
            memory_mb: None,
        }
    }

    /// Set the time limit in milliseconds
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Set the memory limit in megabytes
    pub fn with_memory_mb(mut self, mb: u64) -> Self {
        self.memory_mb = Some(mb);
        self
    }

    /// Apply overrides from another ResourceLimits, preferring values from `overrides`
    pub fn with_overrides(&self, overrides: &ResourceLimits) -> ResourceLimits {
        ResourceLimits {
            time_limit_ms: overrides.time_limit_ms.or(self.time_limit_ms),
            memory_mb: overrides.memory_mb.or(self.memory_mb),
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            time_limit_ms: Some(2000),
            memory_mb: Some(256),
        }
    }
}

/// Body of `POST /api/run`.
///
/// Every field is optional so that an empty or partial body still yields a
/// response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunRequest {
    pub language: Option<String>,
    pub code: Option<String>,
    pub stdin: Option<String>,
    pub problem_id: Option<String>,
    pub test: Option<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub ok: bool,
    pub stdout: String,
    pub stderr: String,
    pub time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compilation_stderr: Option<String>,
}

/// Body of `POST /api/grade`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradeRequest {
    pub language: Option<String>,
    pub code: Option<String>,
    pub problem_id: Option<String>,
}

/// Expected vs. produced output of a failing test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDiff {
    pub expected: String,
    pub got: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    #[serde(rename = "testId")]
    pub test_id: String,
    pub passed: bool,
    pub time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<OutputDiff>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub total: usize,
    pub passed: usize,
    pub outcomes: Vec<TestOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach_hint: Option<String>,
}

impl GradeResult {
    /// Share of passing tests as a rounded percentage, 0 when there are no tests
    #[must_use]
    pub fn pass_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.passed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Body of `POST /api/trace`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraceRequest {
    pub language: Option<String>,
    pub code: Option<String>,
    pub problem_id: Option<String>,
}

/// One evaluated sub-expression in a trace column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TraceStep {
    pub fn expr(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            expr: Some(expr.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// One column of the mapper: the final value and the steps leading to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSide {
    pub value: Value,
    pub steps: Vec<TraceStep>,
}

impl TraceSide {
    /// Build a side whose value is the value of its last step
    pub fn from_steps(steps: Vec<TraceStep>) -> Self {
        let value = steps
            .last()
            .and_then(|step| step.value.clone())
            .unwrap_or(Value::Null);
        Self { value, steps }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracePacket {
    pub example_id: String,
    pub expected: TraceSide,
    pub actual: TraceSide,
    pub diverged_at: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl TracePacket {
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        self.diverged_at.is_some()
    }
}
