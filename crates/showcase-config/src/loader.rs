// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./showcase.toml` > `~/.config/showcase/showcase.toml` > `/etc/showcase/showcase.toml`
//! with environment variable overrides via `SHOWCASE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ShowcaseConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/showcase/showcase.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "showcase.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/showcase/showcase.toml` (system-wide)
/// 3. `~/.config/showcase/showcase.toml` (user XDG config)
/// 4. `./showcase.toml` (local directory)
/// 5. `SHOWCASE_*` environment variables
pub fn load_config() -> Result<ShowcaseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ShowcaseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowcaseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShowcaseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowcaseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// XDG user config path, when a config directory exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("showcase").join(LOCAL_CONFIG_FILE))
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ShowcaseConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Maps `SHOWCASE_<SECTION>_<KEY>` onto `section.key`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `SHOWCASE_STORAGE_DATABASE_PATH` maps to `storage.database_path`.
fn env_provider() -> Env {
    Env::prefixed("SHOWCASE_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 5] = ["site", "storage", "remote", "media", "dashboard"];
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
