// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Showcase site admin.

use thiserror::Error;

/// The primary error type used across storage backends and core operations.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database failure, corrupt stored JSON, unexpected response).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The addressed record does not exist (or no longer exists).
    #[error("record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A record id or collection name that cannot address a document.
    #[error("malformed identifier `{0}`")]
    MalformedId(String),

    /// The encoded write exceeds the backend's size limit.
    #[error("payload of {size} bytes exceeds the backend limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// The backend could not be reached.
    #[error("backend unreachable: {message}")]
    Unreachable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image decoding or re-encoding failed.
    #[error("media error: {message}")]
    Media { message: String },

    /// A submitted field value failed structural validation.
    #[error("invalid value for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShowcaseError {
    /// Wraps any error as a storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            source: Box::new(err),
        }
    }

    /// Returns true for the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true when the failure is the backend's size limit.
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, Self::PayloadTooLarge { .. })
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(err)
    }
}
