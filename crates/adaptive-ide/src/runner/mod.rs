//! Mocked runner
//!
//! Provides the run, grade and trace operations behind the HTTP API. None of
//! them execute the submitted code.

use thiserror::Error;
use tracing::{debug, instrument, warn};

pub use crate::runner::grade::{FAILED_OUTPUT, grade};
pub use crate::runner::run::{DEFAULT_STDOUT, run};
pub use crate::runner::trace::{
    EXAMPLE_ID, PRECEDENCE_HINT, looks_like_mul_add_without_parens, trace,
};

mod grade;
mod run;
mod trace;

use crate::{
    catalog::{Catalog, CatalogError, Problem},
    config::{Config, ConfigError},
    types::{
        GradeRequest, GradeResult, ResourceLimits, RunRequest, RunResult, TracePacket,
        TraceRequest,
    },
};

/// Errors returned by runner operations
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(ConfigError),
}

impl From<ConfigError> for RunnerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::LanguageNotFound(id) => RunnerError::UnknownLanguage(id),
            other => RunnerError::Config(other),
        }
    }
}

/// High-level entry point for the mocked operations
#[derive(Debug, Clone)]
pub struct Runner {
    config: Config,
    catalog: Catalog,
}

impl Runner {
    /// Create a new runner; problems declared in `config` join the built-ins
    pub fn new(config: Config) -> Self {
        let catalog = Catalog::with_problems(config.problems.clone());
        Self { config, catalog }
    }

    /// Create a new runner with default configuration
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn problem(&self, id: &str) -> Result<&Problem, RunnerError> {
        Ok(self.catalog.get(id)?)
    }

    /// Echo the request's stdin
    pub fn run(&self, request: &RunRequest) -> Result<RunResult, RunnerError> {
        run::run(&self.config, request)
    }

    /// Limits that apply to a grade request: defaults, then the language's,
    /// then the problem's
    pub fn grade_limits(&self, request: &GradeRequest) -> Result<ResourceLimits, RunnerError> {
        let (language_id, _) = self.config.resolve_language(request.language.as_deref())?;
        let problem = self.catalog.resolve(request.problem_id.as_deref())?;
        Ok(self.config.effective_limits(language_id, Some(problem))?)
    }

    /// Grade against every test of the requested (or default) problem
    #[instrument(skip_all, fields(problem = request.problem_id.as_deref()))]
    pub fn grade(&self, request: &GradeRequest) -> Result<GradeResult, RunnerError> {
        let limits = self.grade_limits(request)?;
        let problem = self.catalog.resolve(request.problem_id.as_deref())?;

        debug!(
            problem = %problem.id,
            time_limit_ms = limits.time_limit_ms,
            memory_mb = limits.memory_mb,
            "grading"
        );

        Ok(grade::grade(&self.config.mock, problem))
    }

    /// Map the precedence example onto the submitted code.
    ///
    /// Never fails: the page falls back to computing the same packet itself,
    /// so an unknown language is only logged.
    pub fn trace(&self, request: &TraceRequest) -> TracePacket {
        if let Err(err) = self.config.resolve_language(request.language.as_deref()) {
            warn!("tracing with unconfigured language: {err}");
        }
        trace::trace(request.code.as_deref().unwrap_or_default())
    }
}
