//! Configuration file loading
//!
//! Handles loading and parsing configuration files using the config crate.

use std::collections::HashSet;
use std::path::Path;

use config::{Config as ConfigBuilder, Environment, File, FileFormat, Map};

use crate::config::{Config, ConfigError, ENV_PREFIX};

impl Config {
    /// Load configuration from a file, then apply `ADAPTIVE_IDE__*` environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file_with_env(path, None)
    }

    /// Like [`Config::from_file`], reading overrides from `vars` instead of the
    /// process environment when given
    pub fn from_file_with_env(
        path: impl AsRef<Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::ReadFile {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }

        let config = ConfigBuilder::builder()
            .add_source(File::from(path))
            .add_source(environment(vars))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config = ConfigBuilder::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        for (id, lang) in &self.languages {
            if lang.name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "language '{id}' has empty name"
                )));
            }
            if lang.extension.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "language '{id}' has empty extension"
                )));
            }
            if lang.editor.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "language '{id}' has empty editor mode"
                )));
            }
        }

        if !self.languages.contains_key(&self.default_language) {
            return Err(ConfigError::Invalid(format!(
                "default language '{}' is not configured",
                self.default_language
            )));
        }

        for (id, problem) in &self.problems {
            if problem.title.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "problem '{id}' has empty title"
                )));
            }
            if problem.tests.is_empty() {
                return Err(ConfigError::Invalid(format!("problem '{id}' has no tests")));
            }

            let mut seen = HashSet::new();
            for test in &problem.tests {
                if !seen.insert(test.id.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "problem '{id}' has duplicate test id '{}'",
                        test.id
                    )));
                }
            }

            if let Some(lang) = problem
                .function_signature
                .keys()
                .find(|lang| !self.languages.contains_key(*lang))
            {
                return Err(ConfigError::Invalid(format!(
                    "problem '{id}' has a template for unknown language '{lang}'"
                )));
            }
        }

        Ok(())
    }
}

fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}
