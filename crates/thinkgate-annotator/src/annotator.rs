// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Difficulty-gated annotation of the latest user turn.
//!
//! Flow: locate the last user message -> classify it with one assessor call ->
//! return a new conversation whose last user message carries the directive.
//! Every failure degrades to forwarding the conversation unchanged.

use std::sync::Arc;

use thinkgate_config::AssessorConfig;
use thinkgate_core::{ChatProvider, ChatRequest, Conversation, Message, Role, ThinkgateError};
use tracing::{debug, info, warn};

use crate::prompt::{assessment_prompt, truncate_subject};
use crate::verdict::Verdict;

/// What happened during an annotation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationOutcome {
    /// No user message; nothing to classify and no assessor call.
    NoUserMessage,
    /// Assessor disabled in configuration.
    Skipped,
    /// Assessor call failed; conversation forwarded unchanged.
    AssessorFailed,
    /// The subject slot could not be re-resolved in the copy.
    SlotMismatch,
    /// Assessor answered; a directive was appended unless the verdict is `Unknown`.
    Classified(Verdict),
}

impl AnnotationOutcome {
    /// Verdict, when the assessor produced one.
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            AnnotationOutcome::Classified(verdict) => Some(verdict),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnnotationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationOutcome::NoUserMessage => write!(f, "no user message"),
            AnnotationOutcome::Skipped => write!(f, "assessor disabled"),
            AnnotationOutcome::AssessorFailed => write!(f, "assessor call failed"),
            AnnotationOutcome::SlotMismatch => write!(f, "subject message not found in copy"),
            AnnotationOutcome::Classified(verdict) => write!(f, "classified as {verdict}"),
        }
    }
}

/// Annotated conversation plus the outcome that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub conversation: Conversation,
    pub outcome: AnnotationOutcome,
}

/// Classifies the latest user turn and appends `/think` or `/no_think`.
pub struct DifficultyAnnotator {
    provider: Arc<dyn ChatProvider>,
    config: AssessorConfig,
}

impl DifficultyAnnotator {
    pub fn new(provider: Arc<dyn ChatProvider>, config: AssessorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    /// Annotate `conversation`, returning a new value. Never fails.
    pub async fn annotate(&self, conversation: &Conversation) -> Conversation {
        self.annotate_with_outcome(conversation).await.conversation
    }

    /// Like [`annotate`](Self::annotate), also reporting what happened.
    pub async fn annotate_with_outcome(&self, conversation: &Conversation) -> Annotation {
        let unchanged = |outcome| Annotation {
            conversation: conversation.clone(),
            outcome,
        };

        let Some(index) = conversation.last_user_index() else {
            debug!("no user message, forwarding unchanged");
            return unchanged(AnnotationOutcome::NoUserMessage);
        };

        if !self.config.enabled {
            debug!("assessor disabled, forwarding unchanged");
            return unchanged(AnnotationOutcome::Skipped);
        }

        let original = conversation.get(index).and_then(|m| m.content.clone());
        let subject = original.as_deref().unwrap_or_default();

        let verdict = match self.assess(subject).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, "assessor call failed, forwarding unchanged");
                return unchanged(AnnotationOutcome::AssessorFailed);
            }
        };

        let content = match verdict.directive() {
            Some(directive) => Some(format!("{subject}{directive}")),
            None => original,
        };

        match conversation.with_content_at(index, Role::User, content) {
            Some(annotated) => {
                info!(%verdict, slot = index, "annotated latest user message");
                Annotation {
                    conversation: annotated,
                    outcome: AnnotationOutcome::Classified(verdict),
                }
            }
            None => {
                warn!(slot = index, "subject message not found in copy, forwarding unchanged");
                unchanged(AnnotationOutcome::SlotMismatch)
            }
        }
    }

    /// Classify a subject text with one assessor call.
    ///
    /// Errors only when the call itself fails; empty or unexpected replies are
    /// [`Verdict::Unknown`].
    pub async fn assess(&self, subject: &str) -> Result<Verdict, ThinkgateError> {
        let request = self.assessment_request(subject);

        info!(model = %self.config.model, "requesting difficulty assessment");
        let reply = self.provider.complete(request).await?;

        if reply.used_reasoning_fallback() {
            info!("assessor content empty, using reasoning_content");
        }
        let raw = reply.text();
        debug!(raw = ?raw, "assessor reply");

        let verdict = Verdict::from_reply(raw);
        if verdict == Verdict::Unknown {
            match raw {
                Some(text) => warn!(reply = %text, "assessor reply is neither `hard` nor `easy`"),
                None => warn!("assessor returned no text"),
            }
        }
        Ok(verdict)
    }

    /// The classification request for `subject`, after truncation.
    pub fn assessment_request(&self, subject: &str) -> ChatRequest {
        let truncated = truncate_subject(subject, &self.config.truncation);
        if truncated.len() != subject.len() {
            debug!(
                original_chars = subject.chars().count(),
                truncated_chars = truncated.chars().count(),
                "subject truncated for assessment"
            );
        }

        let messages = Conversation::new(vec![Message::system(assessment_prompt(&truncated))]);
        let request = ChatRequest::new(self.config.model.clone(), messages, self.config.temperature);

        if self.config.disable_thinking {
            request.with_extension(
                "chat_template_kwargs",
                serde_json::json!({ "enable_thinking": false }),
            )
        } else {
            request
        }
    }
}
