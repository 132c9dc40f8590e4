// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `thinkgate config`: print the effective configuration as TOML.

use thinkgate_config::ThinkgateConfig;
use thinkgate_core::ThinkgateError;

const REDACTED: &str = "[REDACTED]";

pub fn run_config(config: &ThinkgateConfig) -> Result<(), ThinkgateError> {
    print!("{}", render(config)?);
    Ok(())
}

/// Serialize `config` with the API key replaced by a placeholder.
pub(crate) fn render(config: &ThinkgateConfig) -> Result<String, ThinkgateError> {
    let mut shown = config.clone();
    if shown.endpoint.api_key.is_some() {
        shown.endpoint.api_key = Some(REDACTED.to_string());
    }
    toml::to_string_pretty(&shown)
        .map_err(|e| ThinkgateError::Internal(format!("failed to render config: {e}")))
}
