// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat provider for deterministic testing.
//!
//! `MockProvider` implements `ChatProvider` with scripted replies and records
//! every request, so tests can assert on both sides of a call without a server.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use thinkgate_core::{ChatProvider, ChatReply, ChatRequest, ThinkgateError};

/// One scripted provider reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Reply with `content` set.
    Content(String),
    /// Reply with `content` absent and `reasoning_content` set.
    Reasoning(String),
    /// Reply with neither field set.
    Empty,
    /// Fail the call with a provider error.
    Error(String),
}

impl MockReply {
    pub fn content(text: impl Into<String>) -> Self {
        Self::Content(text.into())
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Self::Reasoning(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// A mock provider that pops scripted replies from a FIFO queue.
///
/// When the queue is empty, replies with content `mock response`.
#[derive(Default)]
pub struct MockProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            requests: Arc::default(),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Every request received so far, in order.
    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockReply::content("mock response"))
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ThinkgateError> {
        let model = request.model.clone();
        self.requests.lock().await.push(request);

        let (content, reasoning_content) = match self.next_reply().await {
            MockReply::Content(text) => (Some(text), None),
            MockReply::Reasoning(text) => (None, Some(text)),
            MockReply::Empty => (None, None),
            MockReply::Error(message) => return Err(ThinkgateError::provider(message)),
        };

        Ok(ChatReply {
            id: format!("mock-resp-{}", uuid::Uuid::new_v4()),
            model,
            content,
            reasoning_content,
            finish_reason: Some("stop".to_string()),
        })
    }
}
