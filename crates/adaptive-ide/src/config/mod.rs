use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub use crate::config::language::{FileExtension, Language, LanguageInfo};
use crate::catalog::Problem;
use crate::types::ResourceLimits;

pub mod language;
mod loader;

/// Example configuration embedded at compile time.
///
/// Library users can access this to generate a starter config file.
pub const EXAMPLE_CONFIG: &str = include_str!("../../adaptive-ide.example.toml");

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "ADAPTIVE_IDE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid characters in file extension")]
    InvalidFileExtChars,

    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("language '{0}' not found in configuration")]
    LanguageNotFound(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Config for the Adaptive IDE service
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Language used when a request doesn't name one
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Limits reported when neither the language nor the problem sets one
    #[serde(default)]
    pub default_limits: ResourceLimits,

    /// Canned values returned by the mocked endpoints
    #[serde(default)]
    pub mock: MockConfig,

    /// Language configurations keyed by language ID
    #[serde(default)]
    pub languages: HashMap<String, Language>,

    /// Extra problems keyed by problem ID, layered over the built-ins
    #[serde(default)]
    pub problems: HashMap<String, Problem>,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Attach a permissive CORS layer
    #[serde(default = "default_true")]
    pub cors: bool,

    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors: true,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// `time_ms` reported by every run
    #[serde(default = "default_run_time_ms")]
    pub run_time_ms: u64,

    /// Number of leading tests reported as passing (clamped to the test count)
    #[serde(default = "default_grade_pass_count")]
    pub grade_pass_count: usize,

    /// `time_ms` of the first test; each following test adds one
    #[serde(default = "default_grade_base_time_ms")]
    pub grade_base_time_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            run_time_ms: default_run_time_ms(),
            grade_pass_count: default_grade_pass_count(),
            grade_base_time_ms: default_grade_base_time_ms(),
        }
    }
}

impl Config {
    /// Create a new config with embedded default languages
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty config with no languages
    pub fn empty() -> Self {
        Self {
            default_language: default_language(),
            server: ServerConfig::default(),
            default_limits: ResourceLimits::default(),
            mock: MockConfig::default(),
            languages: HashMap::new(),
            problems: HashMap::new(),
        }
    }

    /// Get a language by ID
    pub fn get_language(&self, id: &str) -> Result<&Language, ConfigError> {
        self.languages
            .get(id)
            .ok_or_else(|| ConfigError::LanguageNotFound(id.to_string()))
    }

    /// Resolve an optional language ID, falling back to `default_language`
    pub fn resolve_language<'a>(
        &'a self,
        id: Option<&'a str>,
    ) -> Result<(&'a str, &'a Language), ConfigError> {
        let id = id.unwrap_or(&self.default_language);
        self.get_language(id).map(|language| (id, language))
    }

    /// Languages sorted by ID
    pub fn language_infos(&self) -> Vec<LanguageInfo> {
        let mut infos: Vec<_> = self
            .languages
            .iter()
            .map(|(id, lang)| LanguageInfo::new(id, lang))
            .collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    /// Merge limits: defaults → language limits → problem limits
    pub fn effective_limits(
        &self,
        language_id: &str,
        problem: Option<&Problem>,
    ) -> Result<ResourceLimits, ConfigError> {
        let language = self.get_language(language_id)?;
        let mut limits = self.default_limits.clone();
        if let Some(ref lang_limits) = language.limits {
            limits = limits.with_overrides(lang_limits);
        }
        if let Some(problem) = problem {
            limits = limits.with_overrides(&problem.limits_for(language_id));
        }
        Ok(limits)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_toml(EXAMPLE_CONFIG).expect("embedded default config should be valid")
    }
}

fn default_language() -> String {
    "python".to_owned()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_run_time_ms() -> u64 {
    5
}

fn default_grade_pass_count() -> usize {
    12
}

fn default_grade_base_time_ms() -> u64 {
    3
}
