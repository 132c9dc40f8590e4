// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible chat-completion provider for Thinkgate.
//!
//! Implements [`ChatProvider`] on top of `/chat/completions`, which covers
//! OpenAI itself and local servers such as vLLM and SGLang.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use thinkgate_config::EndpointConfig;
use thinkgate_core::{ChatProvider, ChatReply, ChatRequest, ThinkgateError};
use tracing::info;

use crate::client::OpenAiClient;
use crate::types::ChatCompletionRequest;

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Provider backed by an OpenAI-compatible endpoint.
///
/// API key resolution order: `endpoint.api_key` -> `OPENAI_API_KEY` -> no auth header.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a provider from endpoint configuration.
    pub fn new(config: &EndpointConfig) -> Result<Self, ThinkgateError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), std::env::var(API_KEY_ENV).ok());
        let client = OpenAiClient::new(
            &config.base_url,
            api_key.as_deref(),
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(
            endpoint = client.endpoint(),
            authenticated = api_key.is_some(),
            "OpenAI-compatible provider initialized"
        );

        Ok(Self { client })
    }

    /// Creates a provider with an existing client.
    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }

    fn to_wire_request(request: ChatRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model,
            messages: request.messages.into_messages(),
            temperature: request.temperature,
            top_p: request.top_p,
            stream: false,
            extra: request.extensions,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ThinkgateError> {
        let wire = Self::to_wire_request(request);
        let response = self.client.complete(&wire).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ThinkgateError::InvalidResponse("response contained no choices".into()))?;

        Ok(ChatReply {
            id: response.id,
            model: response.model,
            content: choice.message.content,
            reasoning_content: choice.message.reasoning_content,
            finish_reason: choice.finish_reason,
        })
    }
}

/// Pick the configured key, else the env value; blank values count as absent.
fn resolve_api_key(configured: Option<&str>, from_env: Option<String>) -> Option<String> {
    configured
        .map(str::to_string)
        .or(from_env)
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinkgate_core::Conversation;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenAiProvider {
        let config = EndpointConfig {
            base_url: format!("{}/v1", server.uri()),
            api_key: Some("sk-test".into()),
            timeout_secs: 5,
        };
        OpenAiProvider::new(&config).unwrap()
    }

    #[test]
    fn configured_key_wins_over_env() {
        assert_eq!(
            resolve_api_key(Some("cfg"), Some("env".into())).as_deref(),
            Some("cfg")
        );
        assert_eq!(resolve_api_key(None, Some("env".into())).as_deref(), Some("env"));
        assert_eq!(resolve_api_key(None, None), None);
        assert_eq!(resolve_api_key(Some("  "), None), None);
    }

    #[tokio::test]
    async fn extensions_reach_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "judge",
                "stream": false,
                "chat_template_kwargs": {"enable_thinking": false}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "c1",
                "model": "judge",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "easy"}, "finish_reason": "stop"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ChatRequest::new("judge", Conversation::single_user("hi"), 0.1)
            .with_extension("chat_template_kwargs", serde_json::json!({"enable_thinking": false}));
        let reply = provider_for(&server).complete(request).await.unwrap();

        assert_eq!(reply.id, "c1");
        assert_eq!(reply.text(), Some("easy"));
        assert_eq!(reply.finish_reason.as_deref(), Some("stop"));
    }

    #[tokio::test]
    async fn reasoning_content_is_carried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "c2",
                "model": "m",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null, "reasoning_content": "thinking..."}}]
            })))
            .mount(&server)
            .await;

        let request = ChatRequest::new("m", Conversation::single_user("hi"), 0.7);
        let reply = provider_for(&server).complete(request).await.unwrap();

        assert!(reply.content.is_none());
        assert_eq!(reply.reasoning_content.as_deref(), Some("thinking..."));
        assert!(reply.used_reasoning_fallback());
    }

    #[tokio::test]
    async fn empty_choices_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "c3", "model": "m", "choices": []})),
            )
            .mount(&server)
            .await;

        let request = ChatRequest::new("m", Conversation::single_user("hi"), 0.7);
        let err = provider_for(&server).complete(request).await.unwrap_err();
        assert!(matches!(err, ThinkgateError::InvalidResponse(_)));
    }
}
