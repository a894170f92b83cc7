// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An `AdminView` that records everything it is asked to show.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use showcase_core::view::{DashboardCounts, ListView, Notice, NoticeLevel};
use showcase_core::AdminView;

#[derive(Default)]
struct Recorded {
    notices: Vec<Notice>,
    lists: Vec<ListView>,
    dashboards: Vec<DashboardCounts>,
    prompts: Vec<String>,
    answers: VecDeque<bool>,
}

/// Captures notices, redraws, and confirmation prompts.
///
/// Confirmation answers are scripted; when the script runs out the view
/// answers with its default.
pub struct RecordingView {
    inner: Mutex<Recorded>,
    default_answer: bool,
}

impl RecordingView {
    /// A view that confirms every prompt.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Recorded::default()),
            default_answer: true,
        }
    }

    /// A view that declines every prompt.
    pub fn declining() -> Self {
        Self {
            default_answer: false,
            ..Self::new()
        }
    }

    /// Queues the answer for the next prompt.
    pub fn answer_next(&self, yes: bool) {
        self.lock().answers.push_back(yes);
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().notices.clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.lock().notices.last().cloned()
    }

    /// Notices of one level, in order.
    pub fn notices_at(&self, level: NoticeLevel) -> Vec<String> {
        self.lock()
            .notices
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.text.clone())
            .collect()
    }

    pub fn lists(&self) -> Vec<ListView> {
        self.lock().lists.clone()
    }

    pub fn last_list(&self) -> Option<ListView> {
        self.lock().lists.last().cloned()
    }

    pub fn dashboards(&self) -> Vec<DashboardCounts> {
        self.lock().dashboards.clone()
    }

    pub fn last_dashboard(&self) -> Option<DashboardCounts> {
        self.lock().dashboards.last().cloned()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminView for RecordingView {
    fn notify(&self, notice: Notice) {
        self.lock().notices.push(notice);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        let mut inner = self.lock();
        inner.prompts.push(prompt.to_string());
        inner.answers.pop_front().unwrap_or(self.default_answer)
    }

    fn show_list(&self, view: &ListView) {
        self.lock().lists.push(view.clone());
    }

    fn show_dashboard(&self, counts: &DashboardCounts) {
        self.lock().dashboards.push(counts.clone());
    }
}
