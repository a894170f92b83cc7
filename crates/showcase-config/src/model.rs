// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Showcase site admin.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Showcase configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Site identity and logging.
    #[serde(default)]
    pub site: SiteConfig,

    /// Which backend stores the content, and the local backend's settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote document store settings.
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Image intake limits.
    #[serde(default)]
    pub media: MediaConfig,

    /// Dashboard summary settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Site identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Business name shown in the admin header.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_site_name() -> String {
    "DHEBRONIX".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which persistence backend is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Key-value file on this machine.
    #[default]
    Local,
    /// Remote document-collection store over HTTP.
    Remote,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to the SQLite file holding the local key-value store.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Key prefix for every collection and settings key.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,

    /// Largest JSON value the local store accepts for one key.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: default_database_path(),
            namespace: default_namespace(),
            wal_mode: default_wal_mode(),
            max_value_bytes: default_max_value_bytes(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("showcase").join("showcase.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "showcase.db".to_string())
}

fn default_namespace() -> String {
    "dhebronix_".to_string()
}

fn default_wal_mode() -> bool {
    true
}

fn default_max_value_bytes() -> usize {
    5 * 1024 * 1024
}

/// Remote document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL of the document API. Required when `storage.backend = "remote"`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest document body the store accepts.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_document_bytes() -> usize {
    1024 * 1024
}

/// Image intake configuration.
///
/// The first pass scales the longer side down to `max_dimension` and encodes
/// at `quality`. When the result is still above `max_encoded_bytes`, one
/// more pass at `fallback_dimension` / `fallback_quality` is made.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MediaConfig {
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// JPEG quality, 1 to 100.
    #[serde(default = "default_quality")]
    pub quality: u8,

    #[serde(default = "default_fallback_dimension")]
    pub fallback_dimension: u32,

    #[serde(default = "default_fallback_quality")]
    pub fallback_quality: u8,

    /// Ceiling on the encoded (data URL) length of one image.
    #[serde(default = "default_max_encoded_bytes")]
    pub max_encoded_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            quality: default_quality(),
            fallback_dimension: default_fallback_dimension(),
            fallback_quality: default_fallback_quality(),
            max_encoded_bytes: default_max_encoded_bytes(),
        }
    }
}

fn default_max_dimension() -> u32 {
    400
}

fn default_quality() -> u8 {
    40
}

fn default_fallback_dimension() -> u32 {
    300
}

fn default_fallback_quality() -> u8 {
    30
}

fn default_max_encoded_bytes() -> usize {
    700_000
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Also count testimonials and team members.
    #[serde(default = "default_include_all")]
    pub include_team_and_testimonials: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            include_team_and_testimonials: default_include_all(),
        }
    }
}

fn default_include_all() -> bool {
    true
}
