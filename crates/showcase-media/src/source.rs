// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inputs accepted by the image intake.

use std::path::Path;

use showcase_core::ShowcaseError;

/// One user-supplied image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw file contents as picked by the user.
    File { name: String, bytes: Vec<u8> },
    /// An already-encoded reference: a `data:image/...` URL or an http(s) URL.
    Encoded(String),
}

impl ImageSource {
    /// Reads a file from disk.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, ShowcaseError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| ShowcaseError::Media {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::File { name, bytes })
    }

    /// Display name used in log lines.
    pub fn label(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::Encoded(_) => "<encoded>",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::File { bytes, .. } => bytes.is_empty(),
            Self::Encoded(raw) => raw.trim().is_empty(),
        }
    }
}
