// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Thinkgate configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to values that target a local
/// OpenAI-compatible server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThinkgateConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Chat-completion endpoint shared by the assessor and primary calls.
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Difficulty assessor settings.
    #[serde(default)]
    pub assessor: AssessorConfig,

    /// Primary model settings.
    #[serde(default)]
    pub primary: PrimaryConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Base URL of the OpenAI-compatible API, without the `/chat/completions` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer credential. `None` falls back to `OPENAI_API_KEY`, then to no auth header.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:30000/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// Difficulty assessor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssessorConfig {
    /// When false, conversations are forwarded without an assessor call or directive.
    #[serde(default = "default_assessor_enabled")]
    pub enabled: bool,

    /// Model identifier used for classification.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for classification.
    #[serde(default = "default_assessor_temperature")]
    pub temperature: f32,

    /// Send `chat_template_kwargs.enable_thinking = false` with the classification call.
    #[serde(default = "default_disable_thinking")]
    pub disable_thinking: bool,

    /// Bounds on the subject text embedded in the classification prompt.
    #[serde(default)]
    pub truncation: TruncationConfig,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self {
            enabled: default_assessor_enabled(),
            model: default_model(),
            temperature: default_assessor_temperature(),
            disable_thinking: default_disable_thinking(),
            truncation: TruncationConfig::default(),
        }
    }
}

fn default_assessor_enabled() -> bool {
    true
}

fn default_model() -> String {
    "Qwen3-30B-A3B".to_string()
}

fn default_assessor_temperature() -> f32 {
    0.1
}

fn default_disable_thinking() -> bool {
    true
}

/// Head/tail truncation of long subject texts.
///
/// Subjects longer than `threshold` characters are replaced, for
/// classification only, by the first `head` characters, `separator`, and the
/// last `tail` characters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TruncationConfig {
    #[serde(default = "default_truncation_threshold")]
    pub threshold: usize,

    #[serde(default = "default_truncation_head")]
    pub head: usize,

    #[serde(default = "default_truncation_tail")]
    pub tail: usize,

    #[serde(default = "default_truncation_separator")]
    pub separator: String,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            threshold: default_truncation_threshold(),
            head: default_truncation_head(),
            tail: default_truncation_tail(),
            separator: default_truncation_separator(),
        }
    }
}

fn default_truncation_threshold() -> usize {
    1024
}

fn default_truncation_head() -> usize {
    500
}

fn default_truncation_tail() -> usize {
    500
}

fn default_truncation_separator() -> String {
    "\n\n".to_string()
}

/// Primary model configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryConfig {
    /// Model identifier that receives the annotated conversation.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_primary_temperature")]
    pub temperature: f32,

    #[serde(default = "default_primary_top_p")]
    pub top_p: f32,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_primary_temperature(),
            top_p: default_primary_top_p(),
        }
    }
}

fn default_primary_temperature() -> f32 {
    0.7
}

fn default_primary_top_p() -> f32 {
    0.8
}
