// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the document API.
//!
//! Provides [`DocumentClient`] which builds document URLs, attaches the
//! bearer token, enforces the document size limit before sending, and maps
//! HTTP failures onto [`ShowcaseError`] variants.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Response, StatusCode, Url};
use showcase_config::model::RemoteConfig;
use showcase_core::{Fields, ShowcaseError};
use tracing::debug;

use crate::types::{ApiError, Document, DocumentBody, DocumentList};

/// Thin client over one document store.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    client: reqwest::Client,
    base_url: Url,
    max_document_bytes: usize,
}

impl DocumentClient {
    /// Builds a client from the `[remote]` config section.
    pub fn new(config: &RemoteConfig) -> Result<Self, ShowcaseError> {
        let raw = config
            .base_url
            .as_deref()
            .ok_or_else(|| ShowcaseError::Config("remote.base_url is not set".into()))?;
        let base_url = Url::parse(raw)
            .map_err(|e| ShowcaseError::Config(format!("invalid remote.base_url `{raw}`: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ShowcaseError::Config(format!(
                "remote.base_url `{raw}` cannot be used as a base URL"
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| ShowcaseError::Config(format!("invalid API key header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShowcaseError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            max_document_bytes: config.max_document_bytes,
        })
    }

    /// `{base}/v1/collections/{collection}/documents[/{id}]`, with each
    /// segment percent-encoded.
    fn url(&self, collection: &str, id: Option<&str>) -> Result<Url, ShowcaseError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ShowcaseError::Config("remote.base_url cannot be a base".into()))?;
            segments
                .pop_if_empty()
                .extend(["v1", "collections", collection, "documents"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Every document in a collection.
    pub async fn list(&self, collection: &str) -> Result<Vec<Document>, ShowcaseError> {
        let url = self.url(collection, None)?;
        let response = self.send(self.client.get(url)).await?;
        let status = response.status();
        debug!(collection, status = %status, "list response received");
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let response = check_status(response, 0, self.max_document_bytes).await?;
        let list: DocumentList = response.json().await.map_err(ShowcaseError::storage)?;
        Ok(list.documents)
    }

    /// One document's fields, or `None` when it does not exist.
    pub async fn fetch(&self, collection: &str, id: &str) -> Result<Option<Fields>, ShowcaseError> {
        let url = self.url(collection, Some(id))?;
        let response = self.send(self.client.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response, 0, self.max_document_bytes).await?;
        let document: Document = response.json().await.map_err(ShowcaseError::storage)?;
        Ok(Some(document.fields))
    }

    /// Creates or fully replaces a document.
    pub async fn put(&self, collection: &str, id: &str, fields: &Fields) -> Result<(), ShowcaseError> {
        let body = serde_json::to_vec(&DocumentBody { fields })?;
        if body.len() > self.max_document_bytes {
            return Err(ShowcaseError::PayloadTooLarge {
                size: body.len(),
                limit: self.max_document_bytes,
            });
        }
        let size = body.len();
        let url = self.url(collection, Some(id))?;
        let request = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.send(request).await?;
        debug!(collection, id, size, status = %response.status(), "document written");
        check_status(response, size, self.max_document_bytes).await?;
        Ok(())
    }

    /// Deletes a document. Returns `false` when it did not exist.
    pub async fn remove(&self, collection: &str, id: &str) -> Result<bool, ShowcaseError> {
        let url = self.url(collection, Some(id))?;
        let response = self.send(self.client.delete(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check_status(response, 0, self.max_document_bytes).await?;
        Ok(true)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ShowcaseError> {
        request.send().await.map_err(|e| ShowcaseError::Unreachable {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

/// Passes successful responses through and maps the rest.
async fn check_status(
    response: Response,
    size: usize,
    limit: usize,
) -> Result<Response, ShowcaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return Err(ShowcaseError::PayloadTooLarge { size, limit });
    }

    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ApiError>(&body) {
        Ok(api) if api.error.code.is_empty() => api.error.message,
        Ok(api) => format!("{}: {}", api.error.code, api.error.message),
        Err(_) => body,
    };
    let message = format!("document store returned {status}: {detail}");
    if status.is_server_error() {
        Err(ShowcaseError::Unreachable {
            message,
            source: None,
        })
    } else {
        Err(ShowcaseError::Storage {
            source: message.into(),
        })
    }
}
