// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote persistence backend for the Showcase site admin.
//!
//! Talks to a document-collection store over HTTP and implements
//! [`showcase_core::StorageAdapter`] on top of it.

pub mod adapter;
pub mod client;
pub mod types;

pub use adapter::RemoteStorage;
pub use client::DocumentClient;
