// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./thinkgate.toml` > `~/.config/thinkgate/thinkgate.toml` >
//! `/etc/thinkgate/thinkgate.toml` with environment variable overrides via `THINKGATE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ThinkgateConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/thinkgate/thinkgate.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "thinkgate.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "THINKGATE_";

/// Section prefixes for env key mapping, longest first so nested tables win.
const ENV_SECTIONS: &[(&str, &str)] = &[
    ("assessor_truncation_", "assessor.truncation."),
    ("assessor_", "assessor."),
    ("endpoint_", "endpoint."),
    ("primary_", "primary."),
    ("logging_", "logging."),
];

/// User config file under the XDG config directory, if one can be resolved.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("thinkgate/thinkgate.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/thinkgate/thinkgate.toml` (system-wide)
/// 3. `~/.config/thinkgate/thinkgate.toml` (user XDG config)
/// 4. `./thinkgate.toml` (local directory)
/// 5. `THINKGATE_*` environment variables
pub fn load_config() -> Result<ThinkgateConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ThinkgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ThinkgateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ThinkgateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ThinkgateConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ThinkgateConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `THINKGATE_ENDPOINT_BASE_URL` must map to `endpoint.base_url`,
/// not `endpoint.base.url`.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env key to its dotted config path.
///
/// `assessor_truncation_head` becomes `assessor.truncation.head`. Keys that
/// match no section are returned unchanged (and rejected later as unknown).
pub fn map_env_key(key: &str) -> String {
    for (prefix, dotted) in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(prefix) {
            return format!("{dotted}{rest}");
        }
    }
    key.to_string()
}
