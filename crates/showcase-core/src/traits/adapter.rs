// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait shared by the pluggable backends.

use async_trait::async_trait;

use crate::error::ShowcaseError;
use crate::types::HealthStatus;

/// The base trait for every backend adapter.
///
/// Provides identity and health check capabilities so the binary can report
/// which backend is wired in without knowing its concrete type.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, ShowcaseError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), ShowcaseError>;
}
