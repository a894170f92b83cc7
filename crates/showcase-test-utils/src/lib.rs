// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Showcase integration tests.
//!
//! # Components
//!
//! - [`MockStore`] - in-memory storage backend with per-collection failure injection
//! - [`RecordingView`] - admin view that captures notices, redraws, and prompts

pub mod mock_store;
pub mod recording_view;

pub use mock_store::MockStore;
pub use recording_view::RecordingView;
