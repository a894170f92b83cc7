// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value operations on the `kv_store` table.

use rusqlite::{params, OptionalExtension};
use showcase_core::types::now_rfc3339;
use showcase_core::ShowcaseError;

use crate::database::{map_tr_err, Database};

/// Raw value stored under `key`.
pub async fn read(db: &Database, key: &str) -> Result<Option<String>, ShowcaseError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Stores `value` under `key`, replacing any previous value.
pub async fn write(db: &Database, key: &str, value: String) -> Result<(), ShowcaseError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            upsert(conn, &key, &value)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Read-modify-write of one key inside a transaction.
///
/// `f` receives the current value and returns the value to store (or
/// `None` to leave the key untouched) plus a result for the caller. When
/// `f` fails, nothing is written.
pub async fn modify<T, F>(db: &Database, key: &str, f: F) -> Result<T, ShowcaseError>
where
    T: Send + 'static,
    F: FnOnce(Option<&str>) -> Result<(Option<String>, T), ShowcaseError> + Send + 'static,
{
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Result<T, ShowcaseError>, rusqlite::Error> {
            let tx = conn.transaction()?;
            let current: Option<String> = tx
                .query_row(
                    "SELECT value FROM kv_store WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;

            let (next, out) = match f(current.as_deref()) {
                Ok(pair) => pair,
                Err(e) => return Ok(Err(e)),
            };
            if let Some(value) = next {
                upsert(&tx, &key, &value)?;
            }
            tx.commit()?;
            Ok(Ok(out))
        })
        .await
        .map_err(map_tr_err)?
}

fn upsert(conn: &rusqlite::Connection, key: &str, value: &str) -> Result<usize, rusqlite::Error> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now_rfc3339()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let db = Database::open_in_memory().await.unwrap();
        assert_eq!(read(&db, "absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_replaces_previous_value() {
        let db = Database::open_in_memory().await.unwrap();
        write(&db, "k", "one".into()).await.unwrap();
        write(&db, "k", "two".into()).await.unwrap();
        assert_eq!(read(&db, "k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn failed_modify_leaves_value_untouched() {
        let db = Database::open_in_memory().await.unwrap();
        write(&db, "k", "kept".into()).await.unwrap();

        let result: Result<(), _> = modify(&db, "k", |_| {
            Err(ShowcaseError::Internal("nope".into()))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(read(&db, "k").await.unwrap().as_deref(), Some("kept"));

        let len = modify(&db, "k", |current| {
            let next = format!("{}!", current.unwrap_or_default());
            let len = next.len();
            Ok((Some(next), len))
        })
        .await
        .unwrap();
        assert_eq!(len, 5);
        assert_eq!(read(&db, "k").await.unwrap().as_deref(), Some("kept!"));
    }
}
