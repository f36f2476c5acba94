use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ResourceLimits;

/// Difficulty band of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Low => "low",
            Difficulty::Med => "med",
            Difficulty::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub difficulty: Difficulty,
    pub input: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

/// A worked example shown under the problem statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain: Option<String>,
}

/// A practice problem.
///
/// Read from TOML with snake_case keys and served to the page with the
/// camelCase names its client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Problem {
    /// Filled from the table key when loaded from configuration
    #[serde(default)]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub statement: String,

    /// Starter template per language id
    #[serde(default)]
    pub function_signature: BTreeMap<String, String>,

    #[serde(default)]
    pub constraints: Vec<String>,

    #[serde(default)]
    pub examples: Vec<Example>,

    #[serde(default)]
    pub tests: Vec<TestCase>,

    /// Time limit in milliseconds per language id
    #[serde(default)]
    pub time_limits: BTreeMap<String, u64>,

    #[serde(
        default,
        rename(serialize = "memoryMB"),
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach_hint: Option<String>,
}

impl Problem {
    /// Starter template for a language, empty when the problem has none
    pub fn template(&self, language: &str) -> &str {
        self.function_signature
            .get(language)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Limits this problem imposes on a language
    pub fn limits_for(&self, language: &str) -> ResourceLimits {
        ResourceLimits {
            time_limit_ms: self.time_limits.get(language).copied(),
            memory_mb: self.memory_mb,
        }
    }
}

/// Short listing entry for `GET /api/problems`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSummary {
    pub id: String,
    pub title: String,
    pub tests: usize,
}

impl From<&Problem> for ProblemSummary {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            title: problem.title.clone(),
            tests: problem.tests.len(),
        }
    }
}
