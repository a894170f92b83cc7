// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends (local key-value file, remote document store).

use async_trait::async_trait;

use crate::error::ShowcaseError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Fields, Record, RecordId};

/// Adapter for the content persistence backends.
///
/// Collection names are free text shared between caller and backend; the
/// backend only checks that a name can address storage. Implementations
/// own id assignment and the `createdAt`/`updatedAt` stamps: any such keys
/// in caller-supplied fields are discarded.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the backend (migrations, connectivity check, etc.).
    async fn initialize(&self) -> Result<(), ShowcaseError>;

    /// All records of a collection. Order is insertion order for the local
    /// backend and unspecified for the remote one.
    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, ShowcaseError>;

    /// One record, or `None` when the id does not exist.
    async fn get_one(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, ShowcaseError>;

    /// Stores a new record under a freshly generated id and returns it.
    async fn add(&self, collection: &str, fields: Fields) -> Result<RecordId, ShowcaseError>;

    /// Replaces every field of an existing record. Id and creation stamp
    /// are kept. Fails with [`ShowcaseError::NotFound`] for a missing id.
    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: Fields,
    ) -> Result<(), ShowcaseError>;

    /// Removes a record. Fails with [`ShowcaseError::NotFound`] for a missing id.
    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ShowcaseError>;

    /// Writes a named settings singleton.
    async fn save_settings(&self, name: &str, data: Fields) -> Result<(), ShowcaseError>;

    /// Reads a named settings singleton.
    async fn get_settings(&self, name: &str) -> Result<Option<Fields>, ShowcaseError>;
}
