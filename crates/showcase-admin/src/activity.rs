// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded log of recent admin actions.

use serde_json::Value;
use showcase_core::types::ACTIVITIES_COLLECTION;
use showcase_core::view::ActivityEntry;
use showcase_core::{Fields, Record};
use tracing::debug;

use crate::persistence::Persistence;

/// How many entries survive trimming.
pub const ACTIVITY_LIMIT: usize = 20;

/// How many entries the dashboard shows.
pub const RECENT_SHOWN: usize = 8;

#[derive(Clone)]
pub struct ActivityLog {
    persistence: Persistence,
}

impl ActivityLog {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// Appends an entry, then drops everything past the newest
    /// [`ACTIVITY_LIMIT`]. Failures are already logged by persistence and
    /// never interrupt the action being recorded.
    pub async fn record(&self, message: &str) {
        let mut fields = Fields::new();
        fields.insert("message".into(), Value::String(message.to_string()));
        fields.insert(
            "time".into(),
            Value::String(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()),
        );
        if self.persistence.add(ACTIVITIES_COLLECTION, fields).await.is_none() {
            return;
        }

        let stale = newest_first(self.persistence.get_all(ACTIVITIES_COLLECTION).await)
            .into_iter()
            .skip(ACTIVITY_LIMIT);
        for record in stale {
            debug!(id = %record.id, "trimming activity entry");
            self.persistence.delete(ACTIVITIES_COLLECTION, &record.id).await;
        }
    }

    /// Up to `limit` entries, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        newest_first(self.persistence.get_all(ACTIVITIES_COLLECTION).await)
            .into_iter()
            .take(limit)
            .map(|record| ActivityEntry {
                message: record.text("message"),
                time: record.text("time"),
            })
            .collect()
    }
}

// Stable sort keeps stored order among equal stamps; reversing it puts the
// later-stored entry first.
fn newest_first(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    records.reverse();
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use showcase_test_utils::MockStore;

    #[tokio::test]
    async fn log_keeps_only_the_newest_entries() {
        let store = Arc::new(MockStore::new());
        let log = ActivityLog::new(Persistence::new(store.clone()));
        for n in 0..ACTIVITY_LIMIT + 5 {
            log.record(&format!("entry {n}")).await;
        }
        assert_eq!(store.records(ACTIVITIES_COLLECTION).await.len(), ACTIVITY_LIMIT);

        let recent = log.recent(RECENT_SHOWN).await;
        assert_eq!(recent.len(), RECENT_SHOWN);
        assert_eq!(recent[0].message, "entry 24");
        assert_eq!(recent[7].message, "entry 17");
        assert!(!recent[0].time.is_empty());
    }

    #[tokio::test]
    async fn failing_log_is_silent() {
        let store = Arc::new(MockStore::new());
        store.fail_collection(ACTIVITIES_COLLECTION).await;
        let log = ActivityLog::new(Persistence::new(store));
        log.record("ignored").await;
        assert!(log.recent(RECENT_SHOWN).await.is_empty());
    }
}
