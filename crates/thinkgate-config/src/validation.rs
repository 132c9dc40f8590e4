// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: URL scheme, sampling
//! parameter ranges, and truncation bounds.

use crate::diagnostic::ConfigError;
use crate::model::ThinkgateConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every violation instead of failing fast.
pub fn validate_config(config: &ThinkgateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !VALID_LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigError::validation(format!(
            "logging.level `{}` must be one of: {}",
            config.logging.level,
            VALID_LOG_LEVELS.join(", ")
        )));
    }

    let base_url = config.endpoint.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::validation("endpoint.base_url must not be empty"));
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::validation(format!(
            "endpoint.base_url `{base_url}` must start with http:// or https://"
        )));
    }

    if config.endpoint.timeout_secs == 0 {
        errors.push(ConfigError::validation(
            "endpoint.timeout_secs must be greater than 0",
        ));
    }

    if config.assessor.model.trim().is_empty() {
        errors.push(ConfigError::validation("assessor.model must not be empty"));
    }
    if config.primary.model.trim().is_empty() {
        errors.push(ConfigError::validation("primary.model must not be empty"));
    }

    check_temperature("assessor.temperature", config.assessor.temperature, &mut errors);
    check_temperature("primary.temperature", config.primary.temperature, &mut errors);

    let top_p = config.primary.top_p;
    if !(top_p > 0.0 && top_p <= 1.0) {
        errors.push(ConfigError::validation(format!(
            "primary.top_p must be in (0, 1], got {top_p}"
        )));
    }

    let truncation = &config.assessor.truncation;
    if truncation.head + truncation.tail > truncation.threshold {
        errors.push(ConfigError::validation(format!(
            "assessor.truncation.head + tail ({}) must not exceed threshold ({})",
            truncation.head + truncation.tail,
            truncation.threshold
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_temperature(key: &str, value: f32, errors: &mut Vec<ConfigError>) {
    if !(0.0..=2.0).contains(&value) {
        errors.push(ConfigError::validation(format!(
            "{key} must be in [0, 2], got {value}"
        )));
    }
}
