// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-form submissions and their read state.

use serde_json::Value;
use showcase_core::entities::Message;
use showcase_core::types::MESSAGES_COLLECTION;
use showcase_core::{Record, RecordId};
use tracing::warn;

use crate::dashboard::is_unread;
use crate::persistence::Persistence;

/// A received message with its storage identity.
#[derive(Debug, Clone, PartialEq)]
pub struct InboxEntry {
    pub id: RecordId,
    pub received_at: Option<String>,
    pub message: Message,
}

#[derive(Clone)]
pub struct ContactInbox {
    persistence: Persistence,
}

impl ContactInbox {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// Stores a public submission. New messages always start unread.
    pub async fn record_message(&self, message: &Message) -> Option<RecordId> {
        let mut fields = match serde_json::to_value(message) {
            Ok(Value::Object(fields)) => fields,
            _ => return None,
        };
        fields.insert("read".into(), Value::Bool(false));
        self.persistence.add(MESSAGES_COLLECTION, fields).await
    }

    /// Every message, newest first. Undecodable entries are skipped.
    pub async fn messages(&self) -> Vec<InboxEntry> {
        let mut records = self.persistence.get_all(MESSAGES_COLLECTION).await;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        records.reverse();
        records.into_iter().filter_map(entry).collect()
    }

    /// Marks a message read, keeping every other stored field.
    pub async fn mark_read(&self, id: &RecordId) -> bool {
        let Some(record) = self.persistence.get_one(MESSAGES_COLLECTION, id).await else {
            return false;
        };
        let mut fields = record.fields;
        fields.insert("read".into(), Value::Bool(true));
        self.persistence.update(MESSAGES_COLLECTION, id, fields).await
    }

    pub async fn unread_count(&self) -> Option<usize> {
        self.persistence
            .try_get_all(MESSAGES_COLLECTION)
            .await
            .map(|records| records.iter().filter(|r| is_unread(r)).count())
    }
}

fn entry(record: Record) -> Option<InboxEntry> {
    match record.decode::<Message>() {
        Ok(message) => Some(InboxEntry {
            id: record.id,
            received_at: record.created_at,
            message,
        }),
        Err(e) => {
            warn!(id = %record.id, error = %e, "skipping undecodable message");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_test_utils::MockStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn messages_arrive_unread_and_can_be_marked() {
        let store = Arc::new(MockStore::new());
        let inbox = ContactInbox::new(Persistence::new(store.clone()));
        let first = inbox
            .record_message(&Message {
                name: "Adebayo".into(),
                service: "Sound system rental".into(),
                read: true,
                ..Message::default()
            })
            .await
            .unwrap();
        inbox
            .record_message(&Message {
                name: "Funke".into(),
                ..Message::default()
            })
            .await
            .unwrap();

        assert_eq!(inbox.unread_count().await, Some(2));
        assert!(inbox.mark_read(&first).await);
        assert_eq!(inbox.unread_count().await, Some(1));

        let entries = inbox.messages().await;
        assert_eq!(entries[0].message.name, "Funke");
        assert!(entries[1].message.read);
        assert_eq!(entries[1].message.service, "Sound system rental");
    }

    #[tokio::test]
    async fn marking_a_missing_message_is_false() {
        let inbox = ContactInbox::new(Persistence::new(Arc::new(MockStore::new())));
        assert!(!inbox.mark_read(&RecordId::parse("gone").unwrap()).await);
    }
}
