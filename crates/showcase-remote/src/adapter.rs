// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote document-store implementation of the StorageAdapter trait.
//!
//! Documents are keyed by record id. Settings singletons are documents of
//! the `settings` collection keyed by name. Concurrent writers follow
//! last-write-wins: an update is a full replace.

use async_trait::async_trait;
use showcase_config::model::RemoteConfig;
use showcase_core::types::check_collection;
use showcase_core::{
    Fields, HealthStatus, PluginAdapter, Record, RecordId, ShowcaseError, StorageAdapter,
};
use tracing::{debug, warn};

use crate::client::DocumentClient;

/// Collection that holds settings singletons.
pub const SETTINGS_COLLECTION: &str = "settings";

/// StorageAdapter over a remote document store.
#[derive(Debug, Clone)]
pub struct RemoteStorage {
    client: DocumentClient,
}

impl RemoteStorage {
    pub fn new(config: &RemoteConfig) -> Result<Self, ShowcaseError> {
        Ok(Self {
            client: DocumentClient::new(config)?,
        })
    }
}

#[async_trait]
impl PluginAdapter for RemoteStorage {
    fn name(&self) -> &str {
        "remote"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, ShowcaseError> {
        match self.client.list(SETTINGS_COLLECTION).await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(ShowcaseError::Unreachable { message, .. }) => Ok(HealthStatus::Unhealthy(message)),
            Err(e) => Ok(HealthStatus::Degraded(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), ShowcaseError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for RemoteStorage {
    async fn initialize(&self) -> Result<(), ShowcaseError> {
        debug!("remote storage ready");
        Ok(())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, ShowcaseError> {
        check_collection(collection)?;
        let documents = self.client.list(collection.trim()).await?;
        Ok(documents
            .into_iter()
            .filter_map(|doc| match RecordId::parse(&doc.id) {
                Ok(id) => Some(Record::from_document(id, doc.fields)),
                Err(_) => {
                    warn!(collection, id = %doc.id, "skipping document with unusable id");
                    None
                }
            })
            .collect())
    }

    async fn get_one(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> Result<Option<Record>, ShowcaseError> {
        check_collection(collection)?;
        Ok(self
            .client
            .fetch(collection.trim(), id.as_str())
            .await?
            .map(|fields| Record::from_document(id.clone(), fields)))
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<RecordId, ShowcaseError> {
        check_collection(collection)?;
        let record = Record::created(RecordId::generate(), fields);
        self.client
            .put(collection.trim(), record.id.as_str(), &record.to_document())
            .await?;
        debug!(collection, id = %record.id, "document created");
        Ok(record.id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: Fields,
    ) -> Result<(), ShowcaseError> {
        let existing = self
            .get_one(collection, id)
            .await?
            .ok_or_else(|| ShowcaseError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let next = existing.replaced(fields);
        self.client
            .put(collection.trim(), id.as_str(), &next.to_document())
            .await?;
        debug!(collection, %id, "document replaced");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ShowcaseError> {
        check_collection(collection)?;
        if self.client.remove(collection.trim(), id.as_str()).await? {
            debug!(collection, %id, "document deleted");
            Ok(())
        } else {
            Err(ShowcaseError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
        }
    }

    async fn save_settings(&self, name: &str, data: Fields) -> Result<(), ShowcaseError> {
        check_collection(name)?;
        self.client.put(SETTINGS_COLLECTION, name.trim(), &data).await
    }

    async fn get_settings(&self, name: &str) -> Result<Option<Fields>, ShowcaseError> {
        check_collection(name)?;
        self.client.fetch(SETTINGS_COLLECTION, name.trim()).await
    }
}
