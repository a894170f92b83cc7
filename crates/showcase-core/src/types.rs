// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by storage backends, the admin core, and the binary.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::error::ShowcaseError;

/// Free-form field map of a stored record (everything except id and stamps).
pub type Fields = serde_json::Map<String, Value>;

/// Keys owned by the persistence layer. Callers never set them.
pub const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Current time in the stamp format used by every backend
/// (RFC 3339, millisecond precision, `Z` suffix).
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Rejects names that cannot be used as a path segment or storage key.
fn check_segment(raw: &str) -> Result<&str, ShowcaseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.chars().any(char::is_control)
    {
        return Err(ShowcaseError::MalformedId(raw.to_string()));
    }
    Ok(trimmed)
}

/// Validates a collection name before it reaches a backend.
pub fn check_collection(name: &str) -> Result<(), ShowcaseError> {
    check_segment(name).map(|_| ())
}

/// Opaque record identifier, assigned once by the backend on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Parses an identifier supplied by a caller (CLI argument, UI action).
    pub fn parse(raw: &str) -> Result<Self, ShowcaseError> {
        check_segment(raw).map(|s| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Records written by the earliest local-store revision carry numeric ids.
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// A stored record: stable id, persistence stamps, and the entity's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Builds a freshly created record, stamping the creation time.
    pub fn created(id: RecordId, fields: Fields) -> Self {
        Self {
            id,
            created_at: Some(now_rfc3339()),
            updated_at: None,
            fields: strip_reserved(fields),
        }
    }

    /// Full replacement of the mutable fields. Keeps id and creation stamp.
    pub fn replaced(&self, fields: Fields) -> Self {
        Self {
            id: self.id.clone(),
            created_at: self.created_at.clone(),
            updated_at: Some(now_rfc3339()),
            fields: strip_reserved(fields),
        }
    }

    /// Rebuilds a record from a document stored without its id inline.
    pub fn from_document(id: RecordId, mut document: Fields) -> Self {
        let created_at = take_stamp(&mut document, "createdAt");
        let updated_at = take_stamp(&mut document, "updatedAt");
        document.remove("id");
        Self {
            id,
            created_at,
            updated_at,
            fields: document,
        }
    }

    /// Document body for backends that key documents by id externally.
    pub fn to_document(&self) -> Fields {
        let mut document = self.fields.clone();
        if let Some(created) = &self.created_at {
            document.insert("createdAt".into(), Value::String(created.clone()));
        }
        if let Some(updated) = &self.updated_at {
            document.insert("updatedAt".into(), Value::String(updated.clone()));
        }
        document
    }

    /// Decodes the fields into a typed entity.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ShowcaseError> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }

    /// Display text of a field. Missing and null fields read as empty.
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Images held by the record, whichever arity the entity uses.
    pub fn images(&self) -> Vec<EncodedImage> {
        let mut found = Vec::new();
        if let Some(Value::Array(items)) = self.fields.get("images") {
            found.extend(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(EncodedImage::parse),
            );
        }
        if let Some(single) = self.fields.get("image").and_then(Value::as_str) {
            found.extend(EncodedImage::parse(single));
        }
        found
    }
}

fn take_stamp(document: &mut Fields, key: &str) -> Option<String> {
    match document.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Drops caller-supplied id and stamp keys; the backend owns them.
pub fn strip_reserved(mut fields: Fields) -> Fields {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
    fields
}

/// A self-contained image reference embeddable in a record field:
/// either an inline `data:image/...` URL or an external http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Accepts data URLs and http(s) URLs; anything else (file paths,
    /// empty strings) is not an embeddable image.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let lower = raw.get(..11).unwrap_or(raw).to_ascii_lowercase();
        if lower.starts_with("data:image/")
            || lower.starts_with("https://")
            || lower.starts_with("http://")
        {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// Wraps an already-built base64 JPEG payload.
    pub fn jpeg_base64(payload: &str) -> Self {
        Self(format!("data:image/jpeg;base64,{payload}"))
    }

    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// Size of the encoded text, the quantity backends limit.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable content types of the admin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Event,
    Equipment,
    Blog,
    Testimonial,
    Team,
    Gallery,
}

impl EntityKind {
    /// Collection name shared with every backend.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Event => "events",
            Self::Equipment => "equipment",
            Self::Blog => "blogs",
            Self::Testimonial => "testimonials",
            Self::Team => "team",
            Self::Gallery => "gallery",
        }
    }
}

/// Collection receiving public contact-form submissions.
pub const MESSAGES_COLLECTION: &str = "messages";

/// Collection holding the admin activity log.
pub const ACTIVITIES_COLLECTION: &str = "activities";

/// Health status reported by backend health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Backend is fully operational.
    Healthy,
    /// Backend is operational but experiencing issues.
    Degraded(String),
    /// Backend is not operational.
    Unhealthy(String),
}
