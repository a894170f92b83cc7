// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! View-model types handed from the admin core to whatever surface displays them.

use serde::Serialize;

use crate::types::{EntityKind, RecordId};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient, non-blocking notification (a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// An action bound to one record id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "lowercase")]
pub enum RowAction {
    Edit(RecordId),
    Delete(RecordId),
}

impl RowAction {
    pub fn id(&self) -> &RecordId {
        match self {
            Self::Edit(id) | Self::Delete(id) => id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
        }
    }
}

/// One labelled value of a row. `text` is raw, unescaped content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub header: &'static str,
    pub text: String,
}

/// One record as displayed in a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub id: RecordId,
    pub thumbnail: Option<String>,
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

/// The rendered state of one entity list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ListView {
    /// The collection holds no records.
    Empty { kind: EntityKind, placeholder: String },
    Rows { kind: EntityKind, rows: Vec<ListRow> },
}

impl ListView {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Empty { kind, .. } | Self::Rows { kind, .. } => *kind,
        }
    }

    pub fn rows(&self) -> &[ListRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows { rows, .. } => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Every action in the view, for handler registration.
    pub fn actions(&self) -> impl Iterator<Item = &RowAction> {
        self.rows().iter().flat_map(|row| row.actions.iter())
    }
}

/// Record counts for the dashboard summary.
///
/// `None` means that collection could not be fetched; it never hides the
/// counts that did load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub events: Option<usize>,
    pub equipment: Option<usize>,
    pub blogs: Option<usize>,
    pub messages: Option<usize>,
    pub unread_messages: Option<usize>,
    pub testimonials: Option<usize>,
    pub team: Option<usize>,
}

impl DashboardCounts {
    /// Labelled entries in display order.
    pub fn entries(&self) -> Vec<(&'static str, Option<usize>)> {
        vec![
            ("events", self.events),
            ("equipment", self.equipment),
            ("blogs", self.blogs),
            ("messages", self.messages),
            ("unread messages", self.unread_messages),
            ("testimonials", self.testimonials),
            ("team", self.team),
        ]
    }
}

/// A recent admin action, newest first on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub message: String,
    pub time: String,
}
