// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the admin core over the SQLite backend.
//!
//! Each test opens its own temp database. Tests are independent and
//! order-insensitive.

use std::sync::Arc;

use serde_json::json;
use showcase_admin::seed::seed_defaults;
use showcase_admin::{Admin, FormValues};
use showcase_config::model::{DashboardConfig, StorageConfig};
use showcase_core::entities::{CompanySettings, Message};
use showcase_core::{EntityKind, PluginAdapter, StorageAdapter};
use showcase_media::{ImageIntake, ImageSource};
use showcase_storage::LocalStorage;
use showcase_test_utils::RecordingView;

struct Harness {
    dir: tempfile::TempDir,
    store: Arc<LocalStorage>,
    view: Arc<RecordingView>,
    admin: Admin,
}

async fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        database_path: dir.path().join("showcase.db").display().to_string(),
        ..StorageConfig::default()
    };
    let store = Arc::new(LocalStorage::new(config));
    store.initialize().await.unwrap();
    let view = Arc::new(RecordingView::new());
    let admin = Admin::new(
        store.clone(),
        view.clone(),
        ImageIntake::default(),
        DashboardConfig::default(),
    );
    Harness {
        dir,
        store,
        view,
        admin,
    }
}

// ---- Create, edit, delete ----

#[tokio::test]
async fn full_lifecycle_on_disk() {
    let h = harness().await;
    let mut form = h.admin.form(EntityKind::Equipment);
    let id = form
        .submit(
            FormValues::new()
                .with_text("name", "Mic X")
                .with_text("price", "50000"),
            vec![ImageSource::Encoded("https://cdn.example.com/mic.jpg".into())],
        )
        .await
        .unwrap();

    let stored = h.store.get_one("equipment", &id).await.unwrap().unwrap();
    assert_eq!(stored.fields["available"], json!(true));
    assert_eq!(stored.images().len(), 1);

    let values = form.begin_edit(&id).await.unwrap();
    form.submit(values.with_flag("available", false), vec![])
        .await
        .unwrap();
    let stored = h.store.get_one("equipment", &id).await.unwrap().unwrap();
    assert_eq!(stored.fields["available"], json!(false));
    assert_eq!(stored.images().len(), 1);
    assert_eq!(stored.text("price"), "50000");

    assert_eq!(form.delete(&id).await, Ok(true));
    assert!(h.store.get_all("equipment").await.unwrap().is_empty());
    assert!(form.delete(&id).await.is_err());

    let activity = h.admin.activity().recent(8).await;
    let messages: Vec<_> = activity.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Equipment deleted: Mic X",
            "Equipment updated: Mic X",
            "New equipment added: Mic X"
        ]
    );
}

// ---- Seed and dashboard ----

#[tokio::test]
async fn seeded_store_feeds_the_dashboard() {
    let h = harness().await;
    let report = seed_defaults(h.admin.persistence()).await;
    assert!(report.skipped.is_empty());
    assert!(report.total() > 0);

    h.admin
        .contact()
        .record_message(&Message {
            name: "Ada".into(),
            message: "Do you rent line arrays?".into(),
            ..Message::default()
        })
        .await
        .unwrap();

    let counts = h.admin.refresh_dashboard().await;
    assert_eq!(counts.equipment, Some(4));
    assert_eq!(counts.events, Some(2));
    assert_eq!(counts.messages, Some(1));
    assert_eq!(counts.unread_messages, Some(1));
    assert_eq!(h.view.last_dashboard(), Some(counts));

    let again = seed_defaults(h.admin.persistence()).await;
    assert_eq!(again.total(), 0);
}

// ---- Lists ----

#[tokio::test]
async fn list_keeps_insertion_order() {
    let h = harness().await;
    for title in ["First", "Second", "Third"] {
        h.admin
            .form(EntityKind::Event)
            .submit(FormValues::new().with_text("title", title), vec![])
            .await
            .unwrap();
    }
    let view = h.admin.refresh_list(EntityKind::Event).await;
    let titles: Vec<_> = view.rows().iter().map(|r| r.cells[0].text.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

// ---- Settings ----

#[tokio::test]
async fn settings_persist_across_reopen() {
    let h = harness().await;
    let company = CompanySettings {
        name: "DHEBRONIX".into(),
        address: "Lagos".into(),
        ..CompanySettings::default()
    };
    assert!(h.admin.settings().save_company(&company).await);
    h.store.shutdown().await.unwrap();

    let config = StorageConfig {
        database_path: h.dir.path().join("showcase.db").display().to_string(),
        ..StorageConfig::default()
    };
    let reopened = Arc::new(LocalStorage::new(config));
    reopened.initialize().await.unwrap();
    let admin = Admin::new(
        reopened,
        Arc::new(RecordingView::new()),
        ImageIntake::default(),
        DashboardConfig::default(),
    );
    assert_eq!(admin.settings().company().await, company);
}
