// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types of the document API.
//!
//! ```text
//! GET    {base}/v1/collections/{collection}/documents       -> DocumentList
//! GET    {base}/v1/collections/{collection}/documents/{id}  -> Document | 404
//! PUT    {base}/v1/collections/{collection}/documents/{id}  <- DocumentBody (create or replace)
//! DELETE {base}/v1/collections/{collection}/documents/{id}  -> 204 | 404
//! ```

use serde::{Deserialize, Serialize};
use showcase_core::Fields;

/// A stored document. Stamps travel inside `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: Fields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Request body of a write.
#[derive(Debug, Serialize)]
pub struct DocumentBody<'a> {
    pub fields: &'a Fields,
}

/// Error body returned by the store, when it sends one.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    pub message: String,
}
