//! Backend of the Adaptive IDE practice page.
//!
//! Serves a single-page code editor together with three mocked endpoints:
//! run (echoes stdin), grade (fixed pass count over a problem's tests) and
//! trace (a canned expected-vs-actual arithmetic walkthrough). Nothing here
//! executes submitted code.
//!
//! # Features
//!
//! - **Language catalog**: TOML-configured languages offered in the editor.
//! - **Problem catalog**: built-in "Two Sum" plus problems declared in config.
//! - **Mock runner**: deterministic run, grade and trace responses.
//! - **HTTP API**: axum router with the page embedded.

pub use catalog::{Catalog, CatalogError, Difficulty, Example, Problem, ProblemSummary, TestCase};
pub use config::{Config, ConfigError, EXAMPLE_CONFIG, Language, LanguageInfo};
pub use http::{ApiError, ServerError, router, serve, shutdown_signal};
pub use runner::{Runner, RunnerError};
pub use types::{
    GradeRequest, GradeResult, OutputDiff, ResourceLimits, RunRequest, RunResult, TestOutcome,
    TracePacket, TraceRequest, TraceSide, TraceStep,
};

pub mod catalog;
pub mod config;
pub mod http;
pub mod runner;
pub mod types;
