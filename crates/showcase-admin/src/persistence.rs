// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fail-closed facade over the configured storage backend.
//!
//! Every backend error is logged here and turned into a sentinel: an empty
//! list, `None`, or `false`. Nothing above this layer sees a
//! [`ShowcaseError`] from storage.

use std::sync::Arc;

use showcase_core::{Fields, Record, RecordId, ShowcaseError, StorageAdapter};
use tracing::{debug, error};

/// Shared handle to the persistence backend.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn StorageAdapter>,
}

impl Persistence {
    pub fn new(store: Arc<dyn StorageAdapter>) -> Self {
        Self { store }
    }

    /// The wrapped backend, for health checks and shutdown.
    pub fn backend(&self) -> &Arc<dyn StorageAdapter> {
        &self.store
    }

    /// All records, or an empty list when the backend fails.
    pub async fn get_all(&self, collection: &str) -> Vec<Record> {
        self.try_get_all(collection).await.unwrap_or_default()
    }

    /// All records, or `None` when the backend fails. Lets callers tell an
    /// empty collection from an unavailable one.
    pub async fn try_get_all(&self, collection: &str) -> Option<Vec<Record>> {
        settle("get_all", collection, self.store.get_all(collection).await)
    }

    pub async fn get_one(&self, collection: &str, id: &RecordId) -> Option<Record> {
        self.try_get_one(collection, id).await.flatten()
    }

    /// `Some(None)` when the record is gone, `None` when the backend fails.
    pub async fn try_get_one(&self, collection: &str, id: &RecordId) -> Option<Option<Record>> {
        match self.store.get_one(collection, id).await {
            Err(e) if e.is_not_found() => {
                debug!(op = "get_one", target = collection, error = %e, "record not found");
                Some(None)
            }
            result => settle("get_one", collection, result),
        }
    }

    /// Stores a new record; `None` when the write did not happen.
    pub async fn add(&self, collection: &str, fields: Fields) -> Option<RecordId> {
        settle("add", collection, self.store.add(collection, fields).await)
    }

    /// Full replace of an existing record.
    pub async fn update(&self, collection: &str, id: &RecordId, fields: Fields) -> bool {
        settle("update", collection, self.store.update(collection, id, fields).await).is_some()
    }

    pub async fn delete(&self, collection: &str, id: &RecordId) -> bool {
        settle("delete", collection, self.store.delete(collection, id).await).is_some()
    }

    pub async fn save_settings(&self, name: &str, data: Fields) -> bool {
        settle("save_settings", name, self.store.save_settings(name, data).await).is_some()
    }

    pub async fn get_settings(&self, name: &str) -> Option<Fields> {
        settle("get_settings", name, self.store.get_settings(name).await).flatten()
    }
}

fn settle<T>(op: &'static str, target: &str, result: Result<T, ShowcaseError>) -> Option<T> {
    match result {
        Ok(value) => {
            debug!(op, target, "storage call succeeded");
            Some(value)
        }
        Err(e) if e.is_not_found() => {
            debug!(op, target, error = %e, "storage call found nothing");
            None
        }
        Err(e) => {
            error!(op, target, error = %e, "storage call failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showcase_test_utils::MockStore;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn failures_become_sentinels() {
        let store = Arc::new(MockStore::new());
        let persistence = Persistence::new(store.clone());
        let id = persistence
            .add("events", fields(json!({"title": "Gala"})))
            .await
            .unwrap();

        store.set_unreachable(true).await;
        assert!(persistence.get_all("events").await.is_empty());
        assert!(persistence.try_get_all("events").await.is_none());
        assert!(persistence.get_one("events", &id).await.is_none());
        assert_eq!(persistence.try_get_one("events", &id).await, None);
        assert!(persistence.add("events", Fields::new()).await.is_none());
        assert!(!persistence.update("events", &id, Fields::new()).await);
        assert!(!persistence.delete("events", &id).await);
        assert!(!persistence.save_settings("company", Fields::new()).await);
        assert!(persistence.get_settings("company").await.is_none());

        store.set_unreachable(false).await;
        assert_eq!(persistence.get_all("events").await.len(), 1);
    }

    #[tokio::test]
    async fn deleting_twice_is_a_quiet_false() {
        let persistence = Persistence::new(Arc::new(MockStore::new()));
        let id = persistence.add("team", Fields::new()).await.unwrap();
        assert!(persistence.delete("team", &id).await);
        assert!(!persistence.delete("team", &id).await);
        assert!(persistence.get_all("team").await.is_empty());
        assert_eq!(persistence.try_get_one("team", &id).await, Some(None));
    }

    #[tokio::test]
    async fn oversized_payloads_fail_closed() {
        let persistence = Persistence::new(Arc::new(MockStore::new().with_payload_limit(128)));
        let big = fields(json!({"image": "x".repeat(512)}));
        assert!(persistence.add("blogs", big).await.is_none());
        assert!(persistence.get_all("blogs").await.is_empty());
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn backend_failures_are_logged_not_raised() {
        let store = Arc::new(MockStore::new());
        store.fail_collection("events").await;
        let persistence = Persistence::new(store);
        assert!(persistence.try_get_all("events").await.is_none());
        assert!(logs_contain("storage call failed"));
        assert!(logs_contain("injected failure"));
    }
}
