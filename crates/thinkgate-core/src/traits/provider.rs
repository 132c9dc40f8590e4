// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for chat-completion endpoints.

use async_trait::async_trait;

use crate::error::ThinkgateError;
use crate::types::{ChatReply, ChatRequest};

/// A chat-completion endpoint.
///
/// Both the assessor call and the primary call go through this trait, so the
/// annotator can be exercised against a scripted provider in tests.
#[async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the single generated message.
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ThinkgateError>;
}
