// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Thinkgate.
//!
//! - [`MockProvider`] - scripted chat provider that records requests

pub mod mock_provider;

pub use mock_provider::{MockProvider, MockReply};
