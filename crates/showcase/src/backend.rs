// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend selection.

use std::sync::Arc;

use showcase_config::model::{ShowcaseConfig, StorageBackend};
use showcase_core::{ShowcaseError, StorageAdapter};
use tracing::info;

/// Builds and initializes the configured storage backend.
pub async fn open(config: &ShowcaseConfig) -> Result<Arc<dyn StorageAdapter>, ShowcaseError> {
    let store = build(config)?;
    store.initialize().await?;
    info!(backend = store.name(), version = %store.version(), "storage ready");
    Ok(store)
}

fn build(config: &ShowcaseConfig) -> Result<Arc<dyn StorageAdapter>, ShowcaseError> {
    match config.storage.backend {
        #[cfg(feature = "local")]
        StorageBackend::Local => Ok(Arc::new(showcase_storage::LocalStorage::new(
            config.storage.clone(),
        ))),
        #[cfg(feature = "remote")]
        StorageBackend::Remote => Ok(Arc::new(showcase_remote::RemoteStorage::new(
            &config.remote,
        )?)),
        #[allow(unreachable_patterns)]
        other => Err(ShowcaseError::Config(format!(
            "storage backend {other:?} is not compiled into this build"
        ))),
    }
}
