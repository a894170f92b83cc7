// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named settings singletons (company details, social links).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use showcase_core::entities::{CompanySettings, SocialSettings};
use showcase_core::Fields;
use tracing::warn;

use crate::persistence::Persistence;

#[derive(Clone)]
pub struct SettingsStore {
    persistence: Persistence,
}

impl SettingsStore {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// Reads and decodes a singleton. Missing, unreadable, or malformed
    /// settings all come back as `None`.
    pub async fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let fields = self.persistence.get_settings(name).await?;
        match serde_json::from_value(Value::Object(fields)) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(settings = name, error = %e, "stored settings do not decode");
                None
            }
        }
    }

    pub async fn save<T: Serialize>(&self, name: &str, value: &T) -> bool {
        match serde_json::to_value(value) {
            Ok(Value::Object(fields)) => self.persistence.save_settings(name, fields).await,
            Ok(_) => {
                warn!(settings = name, "settings must serialize to an object");
                false
            }
            Err(e) => {
                warn!(settings = name, error = %e, "settings do not serialize");
                false
            }
        }
    }

    /// Raw field map of a singleton.
    pub async fn get_raw(&self, name: &str) -> Option<Fields> {
        self.persistence.get_settings(name).await
    }

    pub async fn save_raw(&self, name: &str, fields: Fields) -> bool {
        self.persistence.save_settings(name, fields).await
    }

    pub async fn company(&self) -> CompanySettings {
        self.get(CompanySettings::NAME).await.unwrap_or_default()
    }

    pub async fn save_company(&self, company: &CompanySettings) -> bool {
        self.save(CompanySettings::NAME, company).await
    }

    pub async fn social(&self) -> SocialSettings {
        self.get(SocialSettings::NAME).await.unwrap_or_default()
    }

    pub async fn save_social(&self, social: &SocialSettings) -> bool {
        self.save(SocialSettings::NAME, social).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showcase_test_utils::MockStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn company_round_trips_and_defaults() {
        let settings = SettingsStore::new(Persistence::new(Arc::new(MockStore::new())));
        assert_eq!(settings.company().await, CompanySettings::default());

        let company = CompanySettings {
            name: "DHEBRONIX".into(),
            phone: "+234 800 000 0000".into(),
            whatsapp: "2348000000000".into(),
            ..CompanySettings::default()
        };
        assert!(settings.save_company(&company).await);
        assert_eq!(settings.company().await, company);

        let raw = settings.get_raw(CompanySettings::NAME).await.unwrap();
        assert_eq!(raw["whatsapp"], json!("2348000000000"));
    }

    #[tokio::test]
    async fn malformed_settings_read_as_missing() {
        let settings = SettingsStore::new(Persistence::new(Arc::new(MockStore::new())));
        let bad = json!({"facebook": 42}).as_object().cloned().unwrap();
        assert!(settings.save_raw(SocialSettings::NAME, bad).await);
        assert!(settings.get::<SocialSettings>(SocialSettings::NAME).await.is_none());
        assert_eq!(settings.social().await, SocialSettings::default());
    }

    #[tokio::test]
    async fn unreachable_store_fails_the_save() {
        let store = Arc::new(MockStore::new());
        store.set_unreachable(true).await;
        let settings = SettingsStore::new(Persistence::new(store));
        assert!(!settings.save_social(&SocialSettings::default()).await);
    }
}
