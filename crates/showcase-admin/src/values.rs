// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form field values and their assembly into stored fields.

use std::collections::BTreeMap;

use serde_json::Value;
use showcase_core::{EncodedImage, Fields, Record};

use crate::error::FormError;
use crate::schema::{EntitySchema, FieldDefault, FieldKind, FieldSpec, ImageArity};

/// Minimum Jaro-Winkler similarity for a field-name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One submitted field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Field values as read from a form, keyed by stored field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, FieldValue::Text(value.into()));
        self
    }

    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.set(name, FieldValue::Flag(value));
        self
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pre-fills every schema field from a stored record.
    pub fn from_record(schema: &EntitySchema, record: &Record) -> Self {
        let mut values = Self::new();
        for spec in schema.fields {
            let value = match spec.kind {
                FieldKind::Flag => FieldValue::Flag(read_flag(record.fields.get(spec.name), spec)),
                _ => FieldValue::Text(record.text(spec.name)),
            };
            values.set(spec.name, value);
        }
        values
    }

    /// Parses a `name=value` assignment against the schema.
    pub fn parse_assignment(schema: &EntitySchema, raw: &str) -> Result<(String, FieldValue), FormError> {
        let (name, value) = raw.split_once('=').ok_or_else(|| FormError::Invalid {
            field: raw.to_string(),
            message: "expected name=value".into(),
        })?;
        let name = name.trim();
        let spec = lookup(schema, name)?;
        let value = match spec.kind {
            FieldKind::Flag => FieldValue::Flag(parse_flag(spec, value)?),
            _ => FieldValue::Text(value.to_string()),
        };
        Ok((name.to_string(), value))
    }
}

fn lookup(schema: &EntitySchema, name: &str) -> Result<&'static FieldSpec, FormError> {
    schema.field(name).ok_or_else(|| FormError::UnknownField {
        kind: schema.kind,
        field: name.to_string(),
        suggestion: schema
            .field_names()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, candidate)| candidate.to_string()),
    })
}

fn parse_flag(spec: &FieldSpec, raw: &str) -> Result<bool, FormError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(flag_default(spec)),
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(FormError::Invalid {
            field: spec.name.to_string(),
            message: format!("`{other}` is not yes or no"),
        }),
    }
}

fn flag_default(spec: &FieldSpec) -> bool {
    matches!(spec.default, FieldDefault::Flag(true))
}

/// Reads a stored flag. Only an explicit false (boolean or text) is false;
/// anything else falls back to the field default.
pub(crate) fn read_flag(value: Option<&Value>, spec: &FieldSpec) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => true,
        _ => flag_default(spec),
    }
}

/// Builds the stored field map: every schema field, defaults applied to
/// missing or empty values, non-empty values checked, plus the images.
pub(crate) fn assemble(
    schema: &EntitySchema,
    values: &FormValues,
    images: Vec<EncodedImage>,
    today: &str,
) -> Result<Fields, FormError> {
    for (name, _) in values.iter() {
        lookup(schema, name)?;
    }

    let mut fields = Fields::new();
    for spec in schema.fields {
        let value = match (spec.kind, values.get(spec.name)) {
            (FieldKind::Flag, Some(FieldValue::Flag(b))) => Value::Bool(*b),
            (FieldKind::Flag, Some(FieldValue::Text(raw))) => Value::Bool(parse_flag(spec, raw)?),
            (FieldKind::Flag, None) => Value::Bool(flag_default(spec)),
            (_, Some(FieldValue::Flag(b))) => Value::String(b.to_string()),
            (_, Some(FieldValue::Text(raw))) if !raw.trim().is_empty() => {
                Value::String(checked_text(spec, raw)?)
            }
            (_, _) => Value::String(text_default(spec, today)),
        };
        fields.insert(spec.name.to_string(), value);
    }

    match schema.images {
        ImageArity::None => {}
        ImageArity::Single => {
            let first = images.into_iter().next().map(|i| i.as_str().to_string());
            fields.insert("image".into(), Value::String(first.unwrap_or_default()));
        }
        ImageArity::Many => {
            let list = images.into_iter().map(|i| Value::String(i.as_str().to_string()));
            fields.insert("images".into(), Value::Array(list.collect()));
        }
    }
    Ok(fields)
}

fn text_default(spec: &FieldSpec, today: &str) -> String {
    match spec.default {
        FieldDefault::Text(s) => s.to_string(),
        FieldDefault::Today => today.to_string(),
        FieldDefault::Empty | FieldDefault::Flag(_) => String::new(),
    }
}

fn checked_text(spec: &FieldSpec, raw: &str) -> Result<String, FormError> {
    match spec.kind {
        FieldKind::Choice(allowed) => {
            let normalized = raw.trim().to_ascii_lowercase();
            if allowed.contains(&normalized.as_str()) {
                Ok(normalized)
            } else {
                Err(FormError::Invalid {
                    field: spec.name.to_string(),
                    message: format!("expected one of {}", allowed.join(", ")),
                })
            }
        }
        FieldKind::Rating => match raw.trim().parse::<u8>() {
            Ok(n @ 1..=5) => Ok(n.to_string()),
            _ => Err(FormError::Invalid {
                field: spec.name.to_string(),
                message: "rating must be a whole number from 1 to 5".into(),
            }),
        },
        FieldKind::Text | FieldKind::LongText | FieldKind::Date | FieldKind::Flag => {
            Ok(raw.to_string())
        }
    }
}
