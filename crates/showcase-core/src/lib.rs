// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Showcase site admin.
//!
//! This crate provides the trait definitions, error type, record types, and
//! typed content entities used throughout the workspace. Storage backends
//! implement [`StorageAdapter`]; display surfaces implement [`AdminView`].

pub mod entities;
pub mod error;
pub mod traits;
pub mod types;
pub mod view;

// Re-export key items at crate root for ergonomic imports.
pub use error::ShowcaseError;
pub use types::{EncodedImage, EntityKind, Fields, HealthStatus, Record, RecordId};
pub use view::{DashboardCounts, ListRow, ListView, Notice, NoticeLevel, RowAction};

pub use traits::{AdminView, PluginAdapter, StorageAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_error_messages_name_the_target() {
        let not_found = ShowcaseError::NotFound {
            collection: "events".into(),
            id: "42".into(),
        };
        assert_eq!(not_found.to_string(), "record not found: events/42");
        assert!(not_found.is_not_found());

        let too_large = ShowcaseError::PayloadTooLarge {
            size: 2_000_000,
            limit: 1_048_576,
        };
        assert!(too_large.is_payload_too_large());
        assert!(too_large.to_string().contains("1048576"));

        let unreachable = ShowcaseError::Unreachable {
            message: "connection refused".into(),
            source: None,
        };
        assert!(!unreachable.is_not_found());
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_storage_adapter<T: StorageAdapter>() {}
        fn _assert_admin_view<T: AdminView>() {}
    }

    #[test]
    fn list_view_collects_actions_per_row() {
        let id = RecordId::parse("r1").unwrap();
        let view = ListView::Rows {
            kind: EntityKind::Event,
            rows: vec![ListRow {
                id: id.clone(),
                thumbnail: None,
                cells: vec![],
                actions: vec![RowAction::Edit(id.clone()), RowAction::Delete(id.clone())],
            }],
        };
        let names: Vec<_> = view.actions().map(RowAction::name).collect();
        assert_eq!(names, vec!["edit", "delete"]);
        assert!(view.actions().all(|a| a.id() == &id));

        let empty = ListView::Empty {
            kind: EntityKind::Team,
            placeholder: "No team members yet".into(),
        };
        assert!(empty.is_empty());
        assert_eq!(empty.kind(), EntityKind::Team);
    }
}
