// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors reported by the entity form workflow.

use showcase_core::{EntityKind, RecordId, ShowcaseError};
use thiserror::Error;

/// Why a form operation did not complete.
///
/// Errors raised by the form controller have already been shown to the
/// operator as an error notice when they reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("this {kind} no longer exists ({id})")]
    NotFound { kind: EntityKind, id: RecordId },

    #[error("{kind} {id} could not be loaded")]
    LoadFailed { kind: EntityKind, id: RecordId },

    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("{kind} has no field `{field}`{}", did_you_mean(.suggestion))]
    UnknownField {
        kind: EntityKind,
        field: String,
        suggestion: Option<String>,
    },

    #[error("{kind} could not be saved")]
    SaveFailed { kind: EntityKind },

    #[error("{kind} could not be deleted")]
    DeleteFailed { kind: EntityKind },

    #[error("{0} cannot be saved as a draft")]
    DraftUnsupported(EntityKind),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_deref()
        .map(|s| format!(" (did you mean `{s}`?)"))
        .unwrap_or_default()
}

impl From<FormError> for ShowcaseError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::NotFound { kind, id } => ShowcaseError::NotFound {
                collection: kind.collection().to_string(),
                id: id.to_string(),
            },
            FormError::Invalid { field, message } => ShowcaseError::Validation { field, message },
            FormError::UnknownField { ref field, .. } => ShowcaseError::Validation {
                field: field.clone(),
                message: err.to_string(),
            },
            FormError::DraftUnsupported(_) => ShowcaseError::Validation {
                field: "status".into(),
                message: err.to_string(),
            },
            FormError::LoadFailed { .. } => ShowcaseError::Unreachable {
                message: err.to_string(),
                source: None,
            },
            FormError::SaveFailed { .. } | FormError::DeleteFailed { .. } => {
                ShowcaseError::Internal(err.to_string())
            }
        }
    }
}
