// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Thinkgate.
//!
//! Provides the conversation data model, the chat request/reply types, the
//! [`ChatProvider`] trait every endpoint adapter implements, and the shared
//! error type.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ThinkgateError;
pub use traits::ChatProvider;
pub use types::{ChatReply, ChatRequest, Conversation, ConversationBody, Message, Role};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn thinkgate_error_has_all_variants() {
        let _config = ThinkgateError::Config("test".into());
        let _provider = ThinkgateError::Provider {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _invalid = ThinkgateError::InvalidResponse("test".into());
        let _io = ThinkgateError::from(std::io::Error::other("test"));
        let _internal = ThinkgateError::Internal("test".into());
    }

    #[test]
    fn provider_shorthand_has_no_source() {
        let err = ThinkgateError::provider("boom");
        assert_eq!(err.to_string(), "provider error: boom");
        assert!(matches!(err, ThinkgateError::Provider { source: None, .. }));
    }

    fn arb_message() -> impl Strategy<Value = Message> {
        (
            prop_oneof![Just(Role::System), Just(Role::User), Just(Role::Assistant)],
            proptest::option::of(".{0,20}"),
        )
            .prop_map(|(role, content)| Message { role, content })
    }

    proptest! {
        #[test]
        fn with_content_at_changes_exactly_one_slot(
            messages in proptest::collection::vec(arb_message(), 1..8),
            replacement in ".{0,10}",
        ) {
            let conv = Conversation::new(messages);
            if let Some(idx) = conv.last_user_index() {
                let before = conv.clone();
                let updated = conv
                    .with_content_at(idx, Role::User, Some(replacement.clone()))
                    .unwrap();
                prop_assert_eq!(&conv, &before);
                prop_assert_eq!(updated.len(), conv.len());
                for i in 0..conv.len() {
                    if i == idx {
                        prop_assert_eq!(updated.get(i).unwrap().text(), replacement.as_str());
                    } else {
                        prop_assert_eq!(updated.get(i), conv.get(i));
                    }
                }
            }
        }
    }
}
