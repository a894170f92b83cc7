// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The display surface driven by the admin core.

use async_trait::async_trait;

use crate::view::{DashboardCounts, ListView, Notice};

/// Whatever shows the admin to the operator (terminal, web page, test recorder).
///
/// The core never blocks on the view except for [`AdminView::confirm`].
#[async_trait]
pub trait AdminView: Send + Sync {
    /// Shows a transient notification.
    fn notify(&self, notice: Notice);

    /// Asks the operator to confirm a destructive action.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Redraws an entity list.
    fn show_list(&self, view: &ListView);

    /// Redraws the dashboard counters.
    fn show_dashboard(&self, counts: &DashboardCounts);
}
