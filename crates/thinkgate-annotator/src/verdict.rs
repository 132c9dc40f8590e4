// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verdict parsing for assessor replies.
//!
//! The assessor is asked for exactly `hard` or `easy`. Replies are cleaned
//! of `<think>` blocks, trimmed and lowercased before matching; anything
//! else is [`Verdict::Unknown`].

use std::sync::LazyLock;

use regex::Regex;

/// Directive appended to hard requests.
pub const THINK_DIRECTIVE: &str = "\n\n/think";

/// Directive appended to easy requests.
pub const NO_THINK_DIRECTIVE: &str = "\n\n/no_think";

/// Inline reasoning blocks some models emit before the answer.
static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think[^>]*>.*?</think>").unwrap());

/// Tri-state classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Needs multi-step reasoning, creative generation, or careful deliberation.
    Hard,
    /// Simple, factual, or direct.
    Easy,
    /// Empty or unparseable assessor output.
    Unknown,
}

impl Verdict {
    /// Parse a raw assessor reply. `None` (no text at all) is `Unknown`.
    pub fn from_reply(raw: Option<&str>) -> Self {
        match raw.map(normalize_reply).as_deref() {
            Some("hard") => Verdict::Hard,
            Some("easy") => Verdict::Easy,
            _ => Verdict::Unknown,
        }
    }

    /// Suffix to append to the subject message, if any.
    pub fn directive(self) -> Option<&'static str> {
        match self {
            Verdict::Hard => Some(THINK_DIRECTIVE),
            Verdict::Easy => Some(NO_THINK_DIRECTIVE),
            Verdict::Unknown => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Hard => write!(f, "hard"),
            Verdict::Easy => write!(f, "easy"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Strip `<think>` blocks, trim, and lowercase.
pub fn normalize_reply(raw: &str) -> String {
    THINK_BLOCK.replace_all(raw, "").trim().to_lowercase()
}
