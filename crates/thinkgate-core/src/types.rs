// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and chat-completion types shared across Thinkgate crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Author of a message in a conversation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Message text. Absent content is carried as `None` and serialized as `null`.
    #[serde(default)]
    pub content: Option<String>,
}

impl Message {
    /// Creates a message with text content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Content as a string slice, treating absent content as empty.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// An ordered dialogue history.
///
/// Treated as a value: operations that change a message return a new
/// conversation and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation(Vec<Message>);

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    /// A conversation holding one user message.
    pub fn single_user(content: impl Into<String>) -> Self {
        Self(vec![Message::user(content)])
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.0.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    /// Slot of the most recent message authored by the user.
    pub fn last_user_index(&self) -> Option<usize> {
        self.0.iter().rposition(|m| m.role == Role::User)
    }

    /// Returns a copy with the content of slot `index` replaced.
    ///
    /// Returns `None` if the slot does not exist or is not authored by `role`.
    pub fn with_content_at(
        &self,
        index: usize,
        role: Role,
        content: Option<String>,
    ) -> Option<Self> {
        match self.0.get(index) {
            Some(message) if message.role == role => {
                let mut messages = self.0.clone();
                messages[index].content = content;
                Some(Self(messages))
            }
            _ => None,
        }
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.0
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}

/// Request body shape accepted from files: `{"messages": [...]}`.
///
/// Other top-level keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationBody {
    #[serde(default)]
    pub messages: Conversation,
}

/// A chat-completion request, independent of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Conversation,
    pub temperature: f32,
    pub top_p: Option<f32>,
    /// Provider-specific fields merged at the top level of the wire request
    /// (e.g. `chat_template_kwargs`).
    pub extensions: serde_json::Map<String, serde_json::Value>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Conversation, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature,
            top_p: None,
            extensions: serde_json::Map::new(),
        }
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

/// The single generated message returned by a chat-completion call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub id: String,
    pub model: String,
    pub content: Option<String>,
    /// Separate reasoning channel exposed by some providers.
    pub reasoning_content: Option<String>,
    pub finish_reason: Option<String>,
}

impl ChatReply {
    /// The reply text: `content` if non-empty, else `reasoning_content` if non-empty.
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.content).or_else(|| non_empty(&self.reasoning_content))
    }

    /// True when [`ChatReply::text`] had to fall back to `reasoning_content`.
    pub fn used_reasoning_fallback(&self) -> bool {
        non_empty(&self.content).is_none() && non_empty(&self.reasoning_content).is_some()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Conversation {
        Conversation::new(vec![
            Message::system("be brief"),
            Message::user("first"),
            Message::assistant("reply"),
            Message::user("second"),
            Message::assistant("another reply"),
        ])
    }

    #[test]
    fn role_display_and_parse() {
        for role in [Role::System, Role::User, Role::Assistant] {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn last_user_index_finds_most_recent() {
        assert_eq!(sample().last_user_index(), Some(3));
        let no_user = Conversation::new(vec![Message::system("s"), Message::assistant("a")]);
        assert_eq!(no_user.last_user_index(), None);
        assert_eq!(Conversation::default().last_user_index(), None);
    }

    #[test]
    fn with_content_at_leaves_original_untouched() {
        let original = sample();
        let updated = original
            .with_content_at(3, Role::User, Some("changed".into()))
            .unwrap();

        assert_eq!(original.get(3).unwrap().text(), "second");
        assert_eq!(updated.get(3).unwrap().text(), "changed");
        for i in [0, 1, 2, 4] {
            assert_eq!(original.get(i), updated.get(i));
        }
    }

    #[test]
    fn with_content_at_rejects_wrong_slot() {
        let conv = sample();
        assert!(conv.with_content_at(2, Role::User, None).is_none());
        assert!(conv.with_content_at(99, Role::User, None).is_none());
    }

    #[test]
    fn message_deserializes_null_and_missing_content() {
        let body: ConversationBody = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":null},{"role":"assistant"}],"model":"x"}"#,
        )
        .unwrap();
        assert_eq!(body.messages.len(), 2);
        assert!(body.messages.get(0).unwrap().content.is_none());
        assert_eq!(body.messages.get(1).unwrap().text(), "");
    }

    #[test]
    fn conversation_serializes_as_plain_array() {
        let json = serde_json::to_value(Conversation::single_user("Hello")).unwrap();
        assert_eq!(json, serde_json::json!([{"role": "user", "content": "Hello"}]));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn reply_text_prefers_content() {
        let reply = ChatReply {
            content: Some("answer".into()),
            reasoning_content: Some("thoughts".into()),
            ..Default::default()
        };
        assert_eq!(reply.text(), Some("answer"));
        assert!(!reply.used_reasoning_fallback());
    }

    #[test]
    fn reply_text_falls_back_to_reasoning() {
        for content in [None, Some(String::new())] {
            let reply = ChatReply {
                content,
                reasoning_content: Some("easy".into()),
                ..Default::default()
            };
            assert_eq!(reply.text(), Some("easy"));
            assert!(reply.used_reasoning_fallback());
        }
    }

    #[test]
    fn reply_text_none_when_both_empty() {
        let reply = ChatReply {
            content: Some(String::new()),
            reasoning_content: None,
            ..Default::default()
        };
        assert_eq!(reply.text(), None);
        assert!(!reply.used_reasoning_fallback());
    }

    #[test]
    fn request_builder_sets_extensions() {
        let req = ChatRequest::new("m", Conversation::single_user("hi"), 0.7)
            .with_top_p(0.8)
            .with_extension("chat_template_kwargs", serde_json::json!({"enable_thinking": false}));
        assert_eq!(req.top_p, Some(0.8));
        assert_eq!(
            req.extensions["chat_template_kwargs"]["enable_thinking"],
            serde_json::json!(false)
        );
    }
}
