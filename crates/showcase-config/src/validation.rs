// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as quality ranges, ordered scaling passes, and backend prerequisites.

use crate::diagnostic::ConfigError;
use crate::model::{ShowcaseConfig, StorageBackend};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ShowcaseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut invalid = |message: String| errors.push(ConfigError::Validation { message });

    if config.storage.namespace.trim().is_empty() {
        invalid("storage.namespace must not be empty".to_string());
    }

    if config.storage.backend == StorageBackend::Local
        && config.storage.database_path.trim().is_empty()
    {
        invalid("storage.database_path must not be empty".to_string());
    }

    if config.storage.max_value_bytes == 0 {
        invalid("storage.max_value_bytes must be positive".to_string());
    }

    if config.storage.backend == StorageBackend::Remote {
        match config.remote.base_url.as_deref().map(str::trim) {
            None | Some("") => invalid(
                "remote.base_url is required when storage.backend = \"remote\"".to_string(),
            ),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                invalid(format!("remote.base_url `{url}` must start with http:// or https://"))
            }
            Some(_) => {}
        }
    }

    if config.remote.timeout_secs == 0 {
        invalid("remote.timeout_secs must be at least 1".to_string());
    }

    if config.remote.max_document_bytes == 0 {
        invalid("remote.max_document_bytes must be positive".to_string());
    }

    let media = &config.media;
    for (key, quality) in [("quality", media.quality), ("fallback_quality", media.fallback_quality)] {
        if !(1..=100).contains(&quality) {
            invalid(format!("media.{key} must be between 1 and 100, got {quality}"));
        }
    }

    if media.max_dimension == 0 || media.fallback_dimension == 0 {
        invalid("media dimensions must be at least 1 pixel".to_string());
    }

    if media.fallback_dimension > media.max_dimension {
        invalid(format!(
            "media.fallback_dimension ({}) must not exceed media.max_dimension ({})",
            media.fallback_dimension, media.max_dimension
        ));
    }

    if media.fallback_quality > media.quality {
        invalid(format!(
            "media.fallback_quality ({}) must not exceed media.quality ({})",
            media.fallback_quality, media.quality
        ));
    }

    if media.max_encoded_bytes == 0 {
        invalid("media.max_encoded_bytes must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
