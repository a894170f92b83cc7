// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local persistence backend for the Showcase site admin.
//!
//! A namespaced key-value store in a single SQLite file, with embedded
//! migrations and a single-writer connection via `tokio-rusqlite`.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::LocalStorage;
pub use database::Database;
