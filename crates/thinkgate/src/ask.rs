// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `thinkgate ask`: annotate a request, then forward it to the primary model.
//!
//! The assessor call and the primary call are awaited one after the other.
//! A failing assessor only costs the directive; a failing primary call is
//! returned to the caller and ends the run.

use std::sync::Arc;

use thinkgate_annotator::DifficultyAnnotator;
use thinkgate_config::{PrimaryConfig, ThinkgateConfig};
use thinkgate_core::{ChatProvider, ChatReply, ChatRequest, Conversation, ThinkgateError};
use thinkgate_openai::OpenAiProvider;
use tracing::info;

use crate::input::InputArgs;
use crate::output;

pub async fn run_ask(
    config: &ThinkgateConfig,
    input: &InputArgs,
    raw: bool,
) -> Result<(), ThinkgateError> {
    let conversation = input.load()?;
    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiProvider::new(&config.endpoint)?);
    ask(provider, config, &conversation, raw).await?;
    Ok(())
}

/// Annotate `conversation` and send the result to the primary model.
pub(crate) async fn ask(
    provider: Arc<dyn ChatProvider>,
    config: &ThinkgateConfig,
    conversation: &Conversation,
    raw: bool,
) -> Result<ChatReply, ThinkgateError> {
    if let Some(index) = conversation.last_user_index()
        && let Some(message) = conversation.get(index)
    {
        output::original(message.text());
    }

    let annotator = DifficultyAnnotator::new(provider.clone(), config.assessor.clone());
    let annotation = annotator.annotate_with_outcome(conversation).await;
    info!(outcome = %annotation.outcome, "annotation finished");

    let forwarded = annotation.conversation;
    let Some(last) = forwarded.last() else {
        return Err(ThinkgateError::Config(
            "conversation is empty after annotation, nothing to send".into(),
        ));
    };
    output::annotated(last.text());

    output::progress(&format!(
        "calling primary model {} for the final reply...",
        config.primary.model
    ));
    let reply = provider.complete(primary_request(&config.primary, forwarded)).await?;

    if raw {
        output::debug_header("raw 'content' field:");
        println!("{}", reply.content.as_deref().unwrap_or("<absent>"));
        output::debug_header("raw 'reasoning_content' field:");
        println!("{}", reply.reasoning_content.as_deref().unwrap_or("<absent>"));
    }

    if reply.used_reasoning_fallback() {
        output::notice("note: 'content' was empty, showing 'reasoning_content' instead");
    }
    output::header("final reply:");
    match reply.text() {
        Some(text) => println!("{text}"),
        None => output::notice("the primary model returned no text"),
    }

    Ok(reply)
}

/// The primary-model request. No extension fields are added here.
pub(crate) fn primary_request(config: &PrimaryConfig, messages: Conversation) -> ChatRequest {
    ChatRequest::new(config.model.clone(), messages, config.temperature).with_top_p(config.top_p)
}
