// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation input from the command line or a JSON request body.

use std::path::{Path, PathBuf};

use clap::Args;
use thinkgate_core::{Conversation, ConversationBody, ThinkgateError};

/// Where the conversation comes from: a prompt or a `{"messages": [...]}` file.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Send this text as a single user message.
    pub prompt: Option<String>,

    /// Read the conversation from a JSON body with a `messages` array.
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,
}

impl InputArgs {
    pub fn load(&self) -> Result<Conversation, ThinkgateError> {
        match (&self.prompt, &self.messages) {
            (Some(prompt), _) => Ok(Conversation::single_user(prompt.clone())),
            (None, Some(path)) => read_body(path),
            (None, None) => Err(ThinkgateError::Config(
                "provide a prompt or --messages FILE".into(),
            )),
        }
    }
}

fn read_body(path: &Path) -> Result<Conversation, ThinkgateError> {
    let raw = std::fs::read_to_string(path)?;
    let body: ConversationBody = serde_json::from_str(&raw).map_err(|e| {
        ThinkgateError::Config(format!("invalid request body in {}: {e}", path.display()))
    })?;
    Ok(body.messages)
}
