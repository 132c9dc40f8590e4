// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Difficulty-gated request annotation.
//!
//! This crate provides:
//! - [`DifficultyAnnotator`]: classifies the latest user turn with an assessor
//!   call and appends `/think` or `/no_think` to it
//! - [`Verdict`]: the `hard`/`easy`/`unknown` outcome and reply normalization
//! - [`prompt`]: the assessor rubric and subject truncation
//!
//! The annotator sits in front of the primary model call. It never fails:
//! assessor errors forward the conversation unchanged.

pub mod annotator;
pub mod prompt;
pub mod verdict;

pub use annotator::{Annotation, AnnotationOutcome, DifficultyAnnotator};
pub use verdict::{NO_THINK_DIRECTIVE, THINK_DIRECTIVE, Verdict, normalize_reply};
