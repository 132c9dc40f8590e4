// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assessor prompt construction.

use std::borrow::Cow;

use thinkgate_config::TruncationConfig;

/// Two-category difficulty rubric sent as the assessor's system message.
pub const RUBRIC: &str = "You are a specialized AI model acting as a Request Difficulty Assessor.
Your SOLE and ONLY task is to evaluate the inherent difficulty of a user's request that is intended for another AI.
You will receive a user's request message.
Your objective is to determine if this request requires careful, deliberate thought from the downstream AI, or if it's straightforward.

Criteria for your decision:
1. If the user's request is complex, nuanced, requires multi-step reasoning, creative generation, in-depth analysis, or careful consideration by the AI to produce a high-quality response, you MUST respond with: `hard`
2. If the user's request is simple, factual, straightforward, or can likely be answered quickly and directly by the AI with minimal processing or deliberation, you MUST respond with: `easy`

IMPORTANT:
- Your response MUST be EXACTLY one of the two commands: `hard` or `easy`.
- Your response MUST start with either `hard` or `easy`.
- Do NOT add any other text, explanations, or pleasantries.
- Your assessment is about the processing difficulty for the *AI that will ultimately handle the user's request*.
---
### User's request:
";

const OPEN_TAG: &str = "<Users_request>";
const CLOSE_TAG: &str = "</Users_request>";

/// Shorten a subject longer than `threshold` characters to head + separator + tail.
///
/// Lengths are counted in `char`s so multi-byte text is never split mid-codepoint.
pub fn truncate_subject<'a>(subject: &'a str, config: &TruncationConfig) -> Cow<'a, str> {
    let char_count = subject.chars().count();
    if char_count <= config.threshold {
        return Cow::Borrowed(subject);
    }

    let head_end = byte_offset(subject, config.head);
    let tail_start = byte_offset(subject, char_count.saturating_sub(config.tail));

    let mut out = String::with_capacity(
        head_end + config.separator.len() + (subject.len() - tail_start),
    );
    out.push_str(&subject[..head_end]);
    out.push_str(&config.separator);
    out.push_str(&subject[tail_start..]);
    Cow::Owned(out)
}

/// Byte index of the `n`th char, or the end of the string.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Full assessor instruction with the subject embedded in its delimited block.
pub fn assessment_prompt(subject: &str) -> String {
    format!("{RUBRIC}{OPEN_TAG}\n{subject}\n{CLOSE_TAG}")
}
