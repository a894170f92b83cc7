// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local key-value implementation of the StorageAdapter trait.
//!
//! Each collection lives under `{namespace}{collection}` as one JSON list of
//! records, in insertion order. Settings singletons live under
//! `{namespace}settings_{name}`.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use showcase_config::model::StorageConfig;
use showcase_core::types::check_collection;
use showcase_core::{
    Fields, HealthStatus, PluginAdapter, Record, RecordId, ShowcaseError, StorageAdapter,
};

use crate::database::{map_tr_err, Database};
use crate::queries::kv;

/// SQLite-backed local storage.
///
/// The database opens lazily on [`StorageAdapter::initialize`].
pub struct LocalStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl LocalStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Wraps an already-open database; `initialize` becomes a no-op.
    pub fn with_database(config: StorageConfig, db: Database) -> Self {
        Self {
            config,
            db: OnceCell::new_with(Some(db)),
        }
    }

    fn db(&self) -> Result<&Database, ShowcaseError> {
        self.db.get().ok_or_else(|| ShowcaseError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    fn collection_key(&self, collection: &str) -> Result<String, ShowcaseError> {
        check_collection(collection)?;
        Ok(format!("{}{}", self.config.namespace, collection.trim()))
    }

    fn settings_key(&self, name: &str) -> Result<String, ShowcaseError> {
        check_collection(name)?;
        Ok(format!("{}settings_{}", self.config.namespace, name.trim()))
    }

    /// Loads the list, lets `edit` change it, and stores it back in one
    /// transaction.
    async fn edit_list<T, F>(&self, collection: &str, edit: F) -> Result<T, ShowcaseError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Vec<Record>) -> Result<T, ShowcaseError> + Send + 'static,
    {
        let key = self.collection_key(collection)?;
        let limit = self.config.max_value_bytes;
        kv::modify(self.db()?, &key, move |current| {
            let mut records = decode_list(current)?;
            let out = edit(&mut records)?;
            let encoded = encode_checked(&serde_json::to_value(&records)?, limit)?;
            Ok((Some(encoded), out))
        })
        .await
    }
}

/// Decodes a stored list. Entries that no longer parse as records are
/// skipped so one bad entry does not hide the rest.
fn decode_list(raw: Option<&str>) -> Result<Vec<Record>, ShowcaseError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let items: Vec<Value> = serde_json::from_str(raw)?;
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Record>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "skipping unreadable stored record");
                None
            }
        })
        .collect())
}

fn encode_checked(value: &Value, limit: usize) -> Result<String, ShowcaseError> {
    let encoded = serde_json::to_string(value)?;
    if encoded.len() > limit {
        return Err(ShowcaseError::PayloadTooLarge {
            size: encoded.len(),
            limit,
        });
    }
    Ok(encoded)
}

fn position(records: &[Record], id: &RecordId) -> Option<usize> {
    records.iter().position(|r| &r.id == id)
}

#[async_trait]
impl PluginAdapter for LocalStorage {
    fn name(&self) -> &str {
        "local"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ShowcaseError> {
        let Ok(db) = self.db() else {
            return Ok(HealthStatus::Unhealthy("not initialized".into()));
        };
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShowcaseError> {
        if let Some(db) = self.db.get() {
            if self.config.wal_mode {
                db.checkpoint().await?;
                debug!("shutdown: WAL checkpoint complete");
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for LocalStorage {
    async fn initialize(&self) -> Result<(), ShowcaseError> {
        if self.db.initialized() {
            return Ok(());
        }
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db
            .set(db)
            .map_err(|_| ShowcaseError::Storage {
                source: "storage already initialized".into(),
            })?;
        debug!(path = %self.config.database_path, "local storage initialized");
        Ok(())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, ShowcaseError> {
        let key = self.collection_key(collection)?;
        let raw = kv::read(self.db()?, &key).await?;
        decode_list(raw.as_deref())
    }

    async fn get_one(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, ShowcaseError> {
        Ok(self
            .get_all(collection)
            .await?
            .into_iter()
            .find(|r| &r.id == id))
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<RecordId, ShowcaseError> {
        let id = RecordId::generate();
        let record = Record::created(id.clone(), fields);
        self.edit_list(collection, move |records| {
            records.push(record);
            Ok(())
        })
        .await?;
        debug!(collection, %id, "record added");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: Fields,
    ) -> Result<(), ShowcaseError> {
        let target = id.clone();
        let name = collection.to_string();
        self.edit_list(collection, move |records| {
            let idx = position(records, &target).ok_or_else(|| ShowcaseError::NotFound {
                collection: name,
                id: target.to_string(),
            })?;
            records[idx] = records[idx].replaced(fields);
            Ok(())
        })
        .await?;
        debug!(collection, %id, "record updated");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ShowcaseError> {
        let target = id.clone();
        let name = collection.to_string();
        self.edit_list(collection, move |records| {
            let idx = position(records, &target).ok_or_else(|| ShowcaseError::NotFound {
                collection: name,
                id: target.to_string(),
            })?;
            records.remove(idx);
            Ok(())
        })
        .await?;
        debug!(collection, %id, "record deleted");
        Ok(())
    }

    async fn save_settings(&self, name: &str, data: Fields) -> Result<(), ShowcaseError> {
        let key = self.settings_key(name)?;
        let encoded = encode_checked(&Value::Object(data), self.config.max_value_bytes)?;
        kv::write(self.db()?, &key, encoded).await
    }

    async fn get_settings(&self, name: &str) -> Result<Option<Fields>, ShowcaseError> {
        let key = self.settings_key(name)?;
        match kv::read(self.db()?, &key).await? {
            None => Ok(None),
            Some(raw) => match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => Ok(Some(map)),
                other => Err(ShowcaseError::Storage {
                    source: format!("settings `{name}` is not an object: {other}").into(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            ..StorageConfig::default()
        }
    }

    async fn memory_store(max_value_bytes: usize) -> LocalStorage {
        let db = Database::open_in_memory().await.unwrap();
        let config = StorageConfig {
            max_value_bytes,
            wal_mode: false,
            ..StorageConfig::default()
        };
        LocalStorage::with_database(config, db)
    }

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn initialize_creates_database_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("site.db");
        let storage = LocalStorage::new(config(path.to_str().unwrap()));

        assert!(matches!(
            storage.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
        storage.initialize().await.unwrap();
        storage.initialize().await.unwrap();
        assert!(path.exists());
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
        storage.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn add_then_get_preserves_fields_and_order() {
        let store = memory_store(1 << 20).await;
        let first = store
            .add("events", fields(json!({"title": "Wedding", "venue": "Hall A"})))
            .await
            .unwrap();
        let second = store
            .add("events", fields(json!({"title": "Concert"})))
            .await
            .unwrap();
        assert_ne!(first, second);

        let all = store.get_all("events").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first);
        assert_eq!(all[0].text("venue"), "Hall A");
        assert!(all[0].created_at.is_some());
        assert_eq!(all[1].text("title"), "Concert");

        let one = store.get_one("events", &first).await.unwrap().unwrap();
        assert_eq!(one.text("title"), "Wedding");
    }

    #[tokio::test]
    async fn caller_cannot_set_reserved_keys() {
        let store = memory_store(1 << 20).await;
        let id = store
            .add("team", fields(json!({"id": "forged", "createdAt": "1999", "name": "Ada"})))
            .await
            .unwrap();
        let record = store.get_one("team", &id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_ne!(record.created_at.as_deref(), Some("1999"));
        assert!(!record.fields.contains_key("id"));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_creation_stamp() {
        let store = memory_store(1 << 20).await;
        let id = store
            .add("equipment", fields(json!({"name": "Mixer", "price": "100"})))
            .await
            .unwrap();
        let before = store.get_one("equipment", &id).await.unwrap().unwrap();

        store
            .update("equipment", &id, fields(json!({"name": "Mixer Pro"})))
            .await
            .unwrap();
        let after = store.get_one("equipment", &id).await.unwrap().unwrap();
        assert_eq!(after.text("name"), "Mixer Pro");
        assert!(!after.fields.contains_key("price"));
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at.is_some());
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let store = memory_store(1 << 20).await;
        let ghost = RecordId::parse("ghost").unwrap();
        assert!(store.get_one("blogs", &ghost).await.unwrap().is_none());
        assert!(store
            .update("blogs", &ghost, Fields::new())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.delete("blogs", &ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = memory_store(1 << 20).await;
        let a = store.add("gallery", fields(json!({"name": "a"}))).await.unwrap();
        let b = store.add("gallery", fields(json!({"name": "b"}))).await.unwrap();
        store.delete("gallery", &a).await.unwrap();
        let remaining = store.get_all("gallery").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
    }

    #[tokio::test]
    async fn oversized_write_is_rejected_and_nothing_changes() {
        let store = memory_store(256).await;
        store.add("blogs", fields(json!({"title": "small"}))).await.unwrap();

        let err = store
            .add("blogs", fields(json!({"image": "x".repeat(1024)})))
            .await
            .unwrap_err();
        assert!(err.is_payload_too_large());
        assert_eq!(store.get_all("blogs").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn legacy_numeric_ids_are_readable() {
        let store = memory_store(1 << 20).await;
        kv::write(
            store.db().unwrap(),
            "dhebronix_testimonials",
            json!([{"id": 1700000000000u64, "name": "Old", "rating": "5"}, "junk"]).to_string(),
        )
        .await
        .unwrap();

        let all = store.get_all("testimonials").await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id.as_str(), "1700000000000");
        let id = all[0].id.clone();
        store.delete("testimonials", &id).await.unwrap();
        assert!(store.get_all("testimonials").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn settings_round_trip_and_stay_separate_from_collections() {
        let store = memory_store(1 << 20).await;
        assert!(store.get_settings("company").await.unwrap().is_none());

        store
            .save_settings("company", fields(json!({"name": "DHEBRONIX", "phone": "123"})))
            .await
            .unwrap();
        let company = store.get_settings("company").await.unwrap().unwrap();
        assert_eq!(company.get("phone"), Some(&json!("123")));
        assert!(store.get_all("company").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_collection_names_are_rejected() {
        let store = memory_store(1 << 20).await;
        assert!(matches!(
            store.get_all("a/b").await,
            Err(ShowcaseError::MalformedId(_))
        ));
        assert!(store.add("", Fields::new()).await.is_err());
    }
}
