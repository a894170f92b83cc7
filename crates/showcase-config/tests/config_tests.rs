// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Showcase configuration system.

use std::io::Write;

use showcase_config::diagnostic::ConfigError;
use showcase_config::model::{ShowcaseConfig, StorageBackend};
use showcase_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[site]
name = "Acme Sound"
log_level = "debug"

[storage]
backend = "remote"
database_path = "/tmp/showcase-test.db"
namespace = "acme_"
wal_mode = false
max_value_bytes = 1024

[remote]
base_url = "https://docs.example.com"
api_key = "secret"
timeout_secs = 5
max_document_bytes = 2048

[media]
max_dimension = 800
quality = 60
fallback_dimension = 400
fallback_quality = 35
max_encoded_bytes = 500000

[dashboard]
include_team_and_testimonials = false
"#;

    let config = load_and_validate_str(toml).expect("valid config");
    assert_eq!(config.site.name, "Acme Sound");
    assert_eq!(config.site.log_level, "debug");
    assert_eq!(config.storage.backend, StorageBackend::Remote);
    assert_eq!(config.storage.namespace, "acme_");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.storage.max_value_bytes, 1024);
    assert_eq!(config.remote.base_url.as_deref(), Some("https://docs.example.com"));
    assert_eq!(config.remote.api_key.as_deref(), Some("secret"));
    assert_eq!(config.remote.timeout_secs, 5);
    assert_eq!(config.media.max_dimension, 800);
    assert_eq!(config.media.fallback_quality, 35);
    assert_eq!(config.media.max_encoded_bytes, 500_000);
    assert!(!config.dashboard.include_team_and_testimonials);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults are valid");
    assert_eq!(config.site.name, "DHEBRONIX");
    assert_eq!(config.storage.backend, StorageBackend::Local);
    assert_eq!(config.storage.namespace, "dhebronix_");
    assert_eq!(config.media.max_dimension, 400);
    assert_eq!(config.media.quality, 40);
    assert_eq!(config.media.fallback_dimension, 300);
    assert_eq!(config.media.fallback_quality, 30);
    assert_eq!(config.media.max_encoded_bytes, 700_000);
    assert_eq!(config.remote.timeout_secs, 30);
    assert!(config.dashboard.include_team_and_testimonials);
}

#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: ShowcaseConfig = Figment::new()
        .merge(Serialized::defaults(ShowcaseConfig::default()))
        .merge(Toml::string("[media]\nquality = 50\n"))
        .merge(("media.quality", 70))
        .extract()
        .expect("override merges");
    assert_eq!(config.media.quality, 70);
}

#[test]
fn unknown_key_is_rejected_with_suggestion() {
    let errors = load_and_validate_str("[media]\nqualty = 40\n").unwrap_err();
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, span, .. }
            if key == "qualty" && suggestion.as_deref() == Some("quality") && span.is_some())
    });
    assert!(found, "expected unknown key diagnostic, got {errors:?}");
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let err = load_config_from_str("[agent]\nname = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("agent"));
}

#[test]
fn wrong_type_reports_key_path() {
    let errors = load_and_validate_str("[media]\nquality = \"high\"\n").unwrap_err();
    let found = errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key == "media.quality"));
    assert!(found, "expected invalid type diagnostic, got {errors:?}");
}

#[test]
fn unknown_backend_is_rejected() {
    assert!(load_and_validate_str("[storage]\nbackend = \"s3\"\n").is_err());
}

#[test]
fn remote_without_url_fails_validation() {
    let errors = load_and_validate_str("[storage]\nbackend = \"remote\"\n").unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("base_url"))));
}

#[test]
fn diagnostics_render_through_miette() {
    let errors = load_and_validate_str("[site]\nnaem = \"x\"\n").unwrap_err();
    let handler = miette::GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &errors[0] as &dyn miette::Diagnostic)
        .expect("renders");
    assert!(buf.contains("naem"));
    assert!(buf.contains("showcase::config::unknown_key"));
}

#[test]
fn explicit_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[site]\nname = \"From File\"").expect("write");
    let config = load_and_validate_path(file.path()).expect("loads");
    assert_eq!(config.site.name, "From File");
}
