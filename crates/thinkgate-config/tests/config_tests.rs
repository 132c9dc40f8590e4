// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Thinkgate configuration system.

use std::io::Write;

use thinkgate_config::diagnostic::ConfigError;
use thinkgate_config::model::ThinkgateConfig;
use thinkgate_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
[logging]
level = "debug"

[endpoint]
base_url = "https://llm.internal/v1"
api_key = "sk-local"
timeout_secs = 30

[assessor]
enabled = false
model = "tiny-judge"
temperature = 0.0
disable_thinking = false

[assessor.truncation]
threshold = 2048
head = 800
tail = 800
separator = "\n...\n"

[primary]
model = "big-model"
temperature = 0.6
top_p = 0.95
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.endpoint.base_url, "https://llm.internal/v1");
    assert_eq!(config.endpoint.api_key.as_deref(), Some("sk-local"));
    assert_eq!(config.endpoint.timeout_secs, 30);
    assert!(!config.assessor.enabled);
    assert_eq!(config.assessor.model, "tiny-judge");
    assert_eq!(config.assessor.temperature, 0.0);
    assert!(!config.assessor.disable_thinking);
    assert_eq!(config.assessor.truncation.threshold, 2048);
    assert_eq!(config.assessor.truncation.head, 800);
    assert_eq!(config.assessor.truncation.tail, 800);
    assert_eq!(config.assessor.truncation.separator, "\n...\n");
    assert_eq!(config.primary.model, "big-model");
    assert_eq!(config.primary.temperature, 0.6);
    assert_eq!(config.primary.top_p, 0.95);
}

/// Missing sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config, ThinkgateConfig::default());
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[primary]
temprature = 0.5
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    assert!(
        errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. }
                if key == "temprature" && s == "temperature"
        )),
        "got: {errors:?}"
    );
}

/// Wrong value type is reported as InvalidType.
#[test]
fn wrong_type_reported() {
    let toml = r#"
[endpoint]
timeout_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string timeout");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("timeout_secs"))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_runs_after_parse() {
    let toml = r#"
[assessor.truncation]
threshold = 100
"#;

    let errors = load_and_validate_str(toml).expect_err("head + tail exceed threshold");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("threshold"))));
}

/// Dotted overrides (as produced by the env provider) reach nested tables.
#[test]
fn dotted_override_reaches_nested_table() {
    use figment::{Figment, providers::Serialized};

    let config: ThinkgateConfig = Figment::new()
        .merge(Serialized::defaults(ThinkgateConfig::default()))
        .merge(("assessor.truncation.head", 100))
        .merge(("endpoint.base_url", "http://10.0.0.2:8000/v1"))
        .extract()
        .expect("should merge dotted overrides");

    assert_eq!(config.assessor.truncation.head, 100);
    assert_eq!(config.endpoint.base_url, "http://10.0.0.2:8000/v1");
}

/// An explicit config file is loaded and validated.
#[test]
fn explicit_path_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[primary]\nmodel = \"from-file\"").unwrap();

    let config = load_and_validate_path(file.path()).expect("file should load");
    assert_eq!(config.primary.model, "from-file");
}

/// A missing explicit config file is an error, not silent defaults.
#[test]
fn missing_explicit_path_is_error() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/thinkgate.toml"))
        .expect_err("missing file should be reported");
    assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("not found")));
}
