// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

use serde::Serialize;
use serde_json::Value;
use showcase_admin::activity::RECENT_SHOWN;
use showcase_admin::html::to_html;
use showcase_admin::listing::render_list;
use showcase_admin::seed::seed_defaults;
use showcase_admin::{schema_for, Admin, DashboardAggregator, FormValues};
use showcase_config::model::ShowcaseConfig;
use showcase_core::entities::{CompanySettings, SocialSettings};
use showcase_core::view::ActivityEntry;
use showcase_core::{DashboardCounts, EntityKind, HealthStatus, RecordId, ShowcaseError};
use showcase_media::ImageSource;

/// Structured output of `showcase status --json`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub site: String,
    pub backend: String,
    pub backend_version: String,
    pub healthy: bool,
    pub health: String,
    pub counts: DashboardCounts,
    pub recent_activity: Vec<ActivityEntry>,
}

pub async fn status(
    admin: &Admin,
    config: &ShowcaseConfig,
    json: bool,
) -> Result<(), ShowcaseError> {
    let backend = admin.persistence().backend();
    let (healthy, health) = match backend.health_check().await? {
        HealthStatus::Healthy => (true, "healthy".to_string()),
        HealthStatus::Degraded(reason) => (true, format!("degraded: {reason}")),
        HealthStatus::Unhealthy(reason) => (false, format!("unhealthy: {reason}")),
    };
    let recent_activity = admin.activity().recent(RECENT_SHOWN).await;

    if json {
        let report = StatusReport {
            site: config.site.name.clone(),
            backend: backend.name().to_string(),
            backend_version: backend.version().to_string(),
            healthy,
            health,
            counts: DashboardAggregator::new(admin.persistence().clone(), config.dashboard.clone())
                .counts()
                .await,
            recent_activity,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    println!();
    println!("  {} admin", config.site.name);
    println!("  {}", "-".repeat(35));
    println!(
        "    Backend:  {} v{} ({health})",
        backend.name(),
        backend.version()
    );
    println!();
    admin.refresh_dashboard().await;
    if !recent_activity.is_empty() {
        println!();
        println!("  Recent activity");
        for entry in &recent_activity {
            println!("    {}  {}", entry.time, entry.message);
        }
    }
    println!();
    Ok(())
}

pub async fn list(admin: &Admin, entity: EntityKind, html: bool) -> Result<(), ShowcaseError> {
    if html {
        let view = render_list(admin.persistence(), schema_for(entity)).await;
        println!("{}", to_html(&view));
    } else {
        admin.refresh_list(entity).await;
    }
    Ok(())
}

pub async fn show(admin: &Admin, entity: EntityKind, id: &str) -> Result<(), ShowcaseError> {
    let id = RecordId::parse(id)?;
    let record = admin
        .persistence()
        .get_one(entity.collection(), &id)
        .await
        .ok_or_else(|| ShowcaseError::NotFound {
            collection: entity.collection().to_string(),
            id: id.to_string(),
        })?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub async fn add(
    admin: &Admin,
    entity: EntityKind,
    sets: &[String],
    images: &[String],
    draft: bool,
) -> Result<(), ShowcaseError> {
    let mut form = admin.form(entity);
    let mut values = form.begin_create();
    apply_sets(&mut values, entity, sets)?;
    let files = read_images(images).await?;
    let id = if draft {
        form.submit_draft(values, files).await?
    } else {
        form.submit(values, files).await?
    };
    println!("{id}");
    Ok(())
}

pub struct EditArgs<'a> {
    pub sets: &'a [String],
    pub images: &'a [String],
    pub clear_images: bool,
    pub draft: bool,
}

pub async fn edit(
    admin: &Admin,
    entity: EntityKind,
    id: &str,
    args: EditArgs<'_>,
) -> Result<(), ShowcaseError> {
    let id = RecordId::parse(id)?;
    let mut form = admin.form(entity);
    let mut values = form.begin_edit(&id).await?;
    apply_sets(&mut values, entity, args.sets)?;
    if args.clear_images {
        form.preview_mut().clear();
    }
    let files = read_images(args.images).await?;
    if args.draft {
        form.submit_draft(values, files).await?;
    } else {
        form.submit(values, files).await?;
    }
    Ok(())
}

pub async fn delete(admin: &Admin, entity: EntityKind, id: &str) -> Result<(), ShowcaseError> {
    let id = RecordId::parse(id)?;
    admin.form(entity).delete(&id).await?;
    Ok(())
}

pub async fn settings_get(admin: &Admin, name: &str) -> Result<(), ShowcaseError> {
    let fields = admin.settings().get_raw(name).await.unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&Value::Object(fields))?);
    Ok(())
}

pub async fn settings_set(
    admin: &Admin,
    name: &str,
    pairs: &[String],
) -> Result<(), ShowcaseError> {
    let settings = admin.settings();
    let mut fields = settings.get_raw(name).await.unwrap_or_default();
    let known = known_settings_keys(name);
    for pair in pairs {
        let (key, value) = split_pair(pair)?;
        if let Some(known) = &known {
            if !known.iter().any(|k| k == key) {
                return Err(ShowcaseError::Validation {
                    field: key.to_string(),
                    message: format!("expected one of {}", known.join(", ")),
                });
            }
        }
        fields.insert(key.to_string(), Value::String(value.to_string()));
    }
    if !settings.save_raw(name, fields).await {
        return Err(ShowcaseError::Internal(format!(
            "could not save `{name}` settings"
        )));
    }
    println!("saved `{name}` settings");
    Ok(())
}

pub async fn messages(admin: &Admin, read: Option<&str>) -> Result<(), ShowcaseError> {
    let inbox = admin.contact();
    if let Some(id) = read {
        let id = RecordId::parse(id)?;
        if !inbox.mark_read(&id).await {
            return Err(ShowcaseError::NotFound {
                collection: showcase_core::types::MESSAGES_COLLECTION.to_string(),
                id: id.to_string(),
            });
        }
    }
    let entries = inbox.messages().await;
    if entries.is_empty() {
        println!("\n  No messages yet.\n");
        return Ok(());
    }
    println!();
    for entry in entries {
        let m = &entry.message;
        let marker = if m.read { " " } else { "*" };
        println!(
            "  {marker} {}  {} <{}> {}",
            entry.id,
            m.name,
            m.email,
            entry.received_at.as_deref().unwrap_or("")
        );
        if !m.service.is_empty() || !m.event_date.is_empty() {
            println!("      {} {}", m.service, m.event_date);
        }
        if !m.message.is_empty() {
            println!("      {}", m.message);
        }
    }
    println!();
    Ok(())
}

pub async fn seed(admin: &Admin) -> Result<(), ShowcaseError> {
    let report = seed_defaults(admin.persistence()).await;
    for (kind, written) in &report.seeded {
        println!("  seeded {written} {kind} record(s)");
    }
    for kind in &report.skipped {
        println!("  left {kind} alone");
    }
    admin.refresh_dashboard().await;
    Ok(())
}

fn apply_sets(
    values: &mut FormValues,
    entity: EntityKind,
    sets: &[String],
) -> Result<(), ShowcaseError> {
    let schema = schema_for(entity);
    for raw in sets {
        let (name, value) = FormValues::parse_assignment(schema, raw)?;
        values.set(&name, value);
    }
    Ok(())
}

/// Reads `--image` arguments: URLs and data URLs pass through, anything
/// else is a file path.
async fn read_images(args: &[String]) -> Result<Vec<ImageSource>, ShowcaseError> {
    let mut sources = Vec::with_capacity(args.len());
    for arg in args {
        let lower = arg.to_ascii_lowercase();
        let is_reference = ["http://", "https://", "data:"]
            .iter()
            .any(|scheme| lower.starts_with(scheme));
        if is_reference {
            sources.push(ImageSource::Encoded(arg.clone()));
        } else {
            sources.push(ImageSource::read(arg).await?);
        }
    }
    Ok(sources)
}

fn split_pair(raw: &str) -> Result<(&str, &str), ShowcaseError> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| ShowcaseError::Validation {
            field: raw.to_string(),
            message: "expected name=value".into(),
        })
}

/// Keys of the typed settings singletons; `None` for free-form names.
fn known_settings_keys(name: &str) -> Option<Vec<String>> {
    let value = match name {
        CompanySettings::NAME => serde_json::to_value(CompanySettings::default()),
        SocialSettings::NAME => serde_json::to_value(SocialSettings::default()),
        _ => return None,
    };
    match value {
        Ok(Value::Object(fields)) => Some(fields.keys().cloned().collect()),
        _ => None,
    }
}
