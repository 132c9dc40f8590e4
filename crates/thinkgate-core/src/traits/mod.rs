// SPDX-FileCopyrightText: 2026 Thinkgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Traits use `#[async_trait]` so implementations can sit behind `Arc<dyn ...>`.

pub mod provider;

pub use provider::ChatProvider;
