// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin core for the Showcase site.
//!
//! [`Admin`] ties a storage backend, a display surface, and the image intake
//! together. Everything the operator can do (edit entities, read the
//! dashboard, manage settings, read messages) hangs off it.

pub mod activity;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod format;
pub mod html;
pub mod listing;
pub mod persistence;
pub mod schema;
pub mod seed;
pub mod settings;
pub mod values;

use std::sync::Arc;

use showcase_config::model::DashboardConfig;
use showcase_core::{AdminView, DashboardCounts, EntityKind, ListView, StorageAdapter};
use showcase_media::ImageIntake;

pub use activity::ActivityLog;
pub use contact::{ContactInbox, InboxEntry};
pub use dashboard::DashboardAggregator;
pub use error::FormError;
pub use form::{EntityFormController, FormMode, FormSession, ImageChange, PreviewSet};
pub use persistence::Persistence;
pub use schema::{schema_for, EntitySchema};
pub use settings::SettingsStore;
pub use values::{FieldValue, FormValues};

/// Shared admin context. Cheap to clone.
#[derive(Clone)]
pub struct Admin {
    pub(crate) persistence: Persistence,
    pub(crate) view: Arc<dyn AdminView>,
    pub(crate) intake: ImageIntake,
    dashboard: DashboardConfig,
}

impl Admin {
    pub fn new(
        store: Arc<dyn StorageAdapter>,
        view: Arc<dyn AdminView>,
        intake: ImageIntake,
        dashboard: DashboardConfig,
    ) -> Self {
        Self {
            persistence: Persistence::new(store),
            view,
            intake,
            dashboard,
        }
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// A fresh form controller in create mode.
    pub fn form(&self, kind: EntityKind) -> EntityFormController {
        EntityFormController::new(self.clone(), kind)
    }

    /// Re-renders one entity list and hands it to the view.
    pub async fn refresh_list(&self, kind: EntityKind) -> ListView {
        let view = listing::render_list(&self.persistence, schema_for(kind)).await;
        self.view.show_list(&view);
        view
    }

    /// Recounts the dashboard and hands it to the view.
    pub async fn refresh_dashboard(&self) -> DashboardCounts {
        let counts = DashboardAggregator::new(self.persistence.clone(), self.dashboard.clone())
            .counts()
            .await;
        self.view.show_dashboard(&counts);
        counts
    }

    pub fn activity(&self) -> ActivityLog {
        ActivityLog::new(self.persistence.clone())
    }

    pub fn settings(&self) -> SettingsStore {
        SettingsStore::new(self.persistence.clone())
    }

    pub fn contact(&self) -> ContactInbox {
        ContactInbox::new(self.persistence.clone())
    }
}
