use std::collections::HashMap;

use adaptive_ide::config::Config;

use super::{config_fixture, load_fixture};

#[test]
fn test_load_valid_config() {
    let config = load_fixture("valid_full.toml");

    assert!(config.languages.contains_key("python"));
    assert!(config.languages.contains_key("cpp"));
    assert_eq!(config.default_limits.time_limit_ms, Some(2000));
    assert_eq!(config.mock.run_time_ms, 7);
    assert!(!config.server.cors);
    assert_eq!(config.problems["reverse-string"].tests.len(), 3);
}

#[test]
fn test_load_minimal_config() {
    let config = load_fixture("valid_minimal.toml");

    assert!(config.languages.contains_key("test"));
    assert_eq!(config.mock.grade_pass_count, 12);
    assert!(config.problems.is_empty());
}

#[test]
fn test_load_missing_file() {
    let result = Config::from_file(config_fixture("does_not_exist.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_empty_name() {
    assert!(Config::from_file(config_fixture("invalid_empty_name.toml")).is_err());
}

#[test]
fn test_load_invalid_empty_extension() {
    assert!(Config::from_file(config_fixture("invalid_empty_extension.toml")).is_err());
}

#[test]
fn test_load_invalid_default_language() {
    assert!(Config::from_file(config_fixture("invalid_default_language.toml")).is_err());
}

#[test]
fn test_load_invalid_problem_language() {
    assert!(Config::from_file(config_fixture("invalid_problem_language.toml")).is_err());
}

#[test]
fn test_environment_overrides_file() {
    let vars = HashMap::from([
        (
            "ADAPTIVE_IDE__SERVER__BIND_ADDR".to_owned(),
            "0.0.0.0:8080".to_owned(),
        ),
        (
            "ADAPTIVE_IDE__MOCK__GRADE_PASS_COUNT".to_owned(),
            "1".to_owned(),
        ),
    ]);

    let config = Config::from_file_with_env(config_fixture("valid_full.toml"), Some(vars))
        .expect("Failed to load config");

    assert_eq!(config.server.bind_addr.port(), 8080);
    assert_eq!(config.mock.grade_pass_count, 1);
    // Untouched values still come from the file
    assert_eq!(config.mock.run_time_ms, 7);
}

#[test]
fn test_example_config_is_the_default() {
    let config = Config::default();
    assert_eq!(config.default_language, "python");
    assert_eq!(config.languages.len(), 7);
}
