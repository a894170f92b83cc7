// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage backend with failure injection.
//!
//! `MockStore` implements `StorageAdapter` over plain maps. Individual
//! collections (or the whole store) can be switched into a failing state to
//! exercise the fail-closed paths of the admin core.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use showcase_core::types::check_collection;
use showcase_core::{
    Fields, HealthStatus, PluginAdapter, Record, RecordId, ShowcaseError, StorageAdapter,
};

#[derive(Default)]
struct State {
    collections: HashMap<String, Vec<Record>>,
    settings: HashMap<String, Fields>,
    failing: HashSet<String>,
    fail_all: bool,
    writes: usize,
}

impl State {
    fn check(&self, collection: &str) -> Result<(), ShowcaseError> {
        check_collection(collection)?;
        if self.fail_all || self.failing.contains(collection) {
            return Err(ShowcaseError::Unreachable {
                message: format!("injected failure for `{collection}`"),
                source: None,
            });
        }
        Ok(())
    }
}

/// An in-memory store for tests.
#[derive(Default)]
pub struct MockStore {
    state: Mutex<State>,
    payload_limit: Option<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes whose JSON encoding exceeds `limit` bytes.
    pub fn with_payload_limit(mut self, limit: usize) -> Self {
        self.payload_limit = Some(limit);
        self
    }

    /// Makes every operation on `collection` fail as unreachable.
    pub async fn fail_collection(&self, collection: &str) {
        self.state.lock().await.failing.insert(collection.to_string());
    }

    /// Undoes [`fail_collection`](Self::fail_collection).
    pub async fn heal_collection(&self, collection: &str) {
        self.state.lock().await.failing.remove(collection);
    }

    /// Makes every operation fail (or succeed again).
    pub async fn set_unreachable(&self, down: bool) {
        self.state.lock().await.fail_all = down;
    }

    /// Stores a record as-is, bypassing id and stamp assignment.
    pub async fn insert_raw(&self, collection: &str, record: Record) {
        self.state
            .lock()
            .await
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// Snapshot of a collection.
    pub async fn records(&self, collection: &str) -> Vec<Record> {
        self.state
            .lock()
            .await
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of successful writes so far.
    pub async fn write_count(&self) -> usize {
        self.state.lock().await.writes
    }

    fn check_size(&self, value: &impl serde::Serialize) -> Result<(), ShowcaseError> {
        let Some(limit) = self.payload_limit else {
            return Ok(());
        };
        let size = serde_json::to_vec(value)?.len();
        if size > limit {
            return Err(ShowcaseError::PayloadTooLarge { size, limit });
        }
        Ok(())
    }
}

fn not_found(collection: &str, id: &RecordId) -> ShowcaseError {
    ShowcaseError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

#[async_trait]
impl PluginAdapter for MockStore {
    fn name(&self) -> &str {
        "mock-store"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ShowcaseError> {
        if self.state.lock().await.fail_all {
            Ok(HealthStatus::Unhealthy("injected failure".into()))
        } else {
            Ok(HealthStatus::Healthy)
        }
    }

    async fn shutdown(&self) -> Result<(), ShowcaseError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for MockStore {
    async fn initialize(&self) -> Result<(), ShowcaseError> {
        Ok(())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, ShowcaseError> {
        let state = self.state.lock().await;
        state.check(collection)?;
        Ok(state.collections.get(collection).cloned().unwrap_or_default())
    }

    async fn get_one(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, ShowcaseError> {
        let state = self.state.lock().await;
        state.check(collection)?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| &r.id == id).cloned()))
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<RecordId, ShowcaseError> {
        let mut state = self.state.lock().await;
        state.check(collection)?;
        let record = Record::created(RecordId::generate(), fields);
        self.check_size(&record)?;
        let id = record.id.clone();
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        state.writes += 1;
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: Fields,
    ) -> Result<(), ShowcaseError> {
        let mut state = self.state.lock().await;
        state.check(collection)?;
        let slot = state
            .collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| &r.id == id))
            .ok_or_else(|| not_found(collection, id))?;
        let next = slot.replaced(fields);
        self.check_size(&next)?;
        *slot = next;
        state.writes += 1;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ShowcaseError> {
        let mut state = self.state.lock().await;
        state.check(collection)?;
        let records = state
            .collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let idx = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| not_found(collection, id))?;
        records.remove(idx);
        state.writes += 1;
        Ok(())
    }

    async fn save_settings(&self, name: &str, data: Fields) -> Result<(), ShowcaseError> {
        let mut state = self.state.lock().await;
        state.check("settings")?;
        self.check_size(&data)?;
        state.settings.insert(name.to_string(), data);
        state.writes += 1;
        Ok(())
    }

    async fn get_settings(&self, name: &str) -> Result<Option<Fields>, ShowcaseError> {
        let state = self.state.lock().await;
        state.check("settings")?;
        Ok(state.settings.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn injected_failures_are_scoped_to_a_collection() {
        let store = MockStore::new();
        store.fail_collection("events").await;
        assert!(store.get_all("events").await.is_err());
        assert!(store.get_all("blogs").await.unwrap().is_empty());

        store.heal_collection("events").await;
        assert!(store.get_all("events").await.is_ok());
    }

    #[tokio::test]
    async fn payload_limit_rejects_large_writes() {
        let store = MockStore::new().with_payload_limit(64);
        let mut fields = Fields::new();
        fields.insert("image".into(), "x".repeat(200).into());
        assert!(store.add("blogs", fields).await.unwrap_err().is_payload_too_large());
        assert_eq!(store.write_count().await, 0);
    }
}
