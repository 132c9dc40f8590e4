// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Thinkgate.

use thiserror::Error;

/// The primary error type used across Thinkgate crates.
#[derive(Debug, Error)]
pub enum ThinkgateError {
    /// Configuration errors (invalid values, unusable credentials).
    #[error("configuration error: {0}")]
    Config(String),

    /// Chat-completion endpoint errors (transport failure, non-2xx status, undecodable body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint answered, but the reply did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Local I/O errors (reading a conversation file).
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ThinkgateError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}
