// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard record counts.

use serde_json::Value;
use showcase_config::model::DashboardConfig;
use showcase_core::types::MESSAGES_COLLECTION;
use showcase_core::{DashboardCounts, EntityKind, Record};

use crate::persistence::Persistence;

#[derive(Clone)]
pub struct DashboardAggregator {
    persistence: Persistence,
    config: DashboardConfig,
}

impl DashboardAggregator {
    pub fn new(persistence: Persistence, config: DashboardConfig) -> Self {
        Self {
            persistence,
            config,
        }
    }

    /// Fetches every counted collection concurrently. A collection that
    /// fails to load leaves its own counter empty and nothing else.
    pub async fn counts(&self) -> DashboardCounts {
        let count = |collection: &'static str| async move {
            self.persistence.try_get_all(collection).await.map(|r| r.len())
        };
        let optional = |collection: &'static str| async move {
            if self.config.include_team_and_testimonials {
                self.persistence.try_get_all(collection).await.map(|r| r.len())
            } else {
                None
            }
        };

        let (events, equipment, blogs, messages, testimonials, team) = futures::join!(
            count(EntityKind::Event.collection()),
            count(EntityKind::Equipment.collection()),
            count(EntityKind::Blog.collection()),
            self.persistence.try_get_all(MESSAGES_COLLECTION),
            optional(EntityKind::Testimonial.collection()),
            optional(EntityKind::Team.collection()),
        );

        DashboardCounts {
            events,
            equipment,
            blogs,
            unread_messages: messages.as_ref().map(|m| m.iter().filter(|r| is_unread(r)).count()),
            messages: messages.map(|m| m.len()),
            testimonials,
            team,
        }
    }
}

/// A message counts as unread unless its `read` flag is exactly true.
pub(crate) fn is_unread(record: &Record) -> bool {
    !matches!(record.fields.get("read"), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showcase_core::Fields;
    use showcase_test_utils::MockStore;
    use std::sync::Arc;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap_or_default()
    }

    async fn seeded() -> (Arc<MockStore>, Persistence) {
        let store = Arc::new(MockStore::new());
        let persistence = Persistence::new(store.clone());
        for title in ["A", "B"] {
            persistence.add("events", fields(json!({"title": title}))).await;
        }
        persistence.add("blogs", fields(json!({"title": "Post"}))).await;
        persistence.add("messages", fields(json!({"name": "Ada", "read": true}))).await;
        persistence.add("messages", fields(json!({"name": "Bola", "read": false}))).await;
        persistence.add("messages", fields(json!({"name": "Chi"}))).await;
        persistence.add("team", fields(json!({"name": "Prince"}))).await;
        (store, persistence)
    }

    #[tokio::test]
    async fn counts_every_collection() {
        let (_, persistence) = seeded().await;
        let counts = DashboardAggregator::new(persistence, DashboardConfig::default())
            .counts()
            .await;
        assert_eq!(
            counts,
            DashboardCounts {
                events: Some(2),
                equipment: Some(0),
                blogs: Some(1),
                messages: Some(3),
                unread_messages: Some(2),
                testimonials: Some(0),
                team: Some(1),
            }
        );
    }

    #[tokio::test]
    async fn one_failing_collection_leaves_the_rest() {
        let (store, persistence) = seeded().await;
        store.fail_collection("messages").await;
        let counts = DashboardAggregator::new(persistence, DashboardConfig::default())
            .counts()
            .await;
        assert_eq!(counts.events, Some(2));
        assert_eq!(counts.blogs, Some(1));
        assert_eq!(counts.messages, None);
        assert_eq!(counts.unread_messages, None);
    }

    #[tokio::test]
    async fn optional_counters_follow_config() {
        let (_, persistence) = seeded().await;
        let config = DashboardConfig {
            include_team_and_testimonials: false,
        };
        let counts = DashboardAggregator::new(persistence, config).counts().await;
        assert_eq!(counts.team, None);
        assert_eq!(counts.testimonials, None);
        assert_eq!(counts.events, Some(2));
    }
}
