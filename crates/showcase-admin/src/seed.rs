// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Starter catalogue for a fresh store.
//!
//! Each collection is seeded only when it reads back empty. A collection
//! that cannot be read is left alone.

use serde_json::{json, Value};
use showcase_core::{EntityKind, Fields};
use tracing::{info, warn};

use crate::persistence::Persistence;

/// Records written per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<(EntityKind, usize)>,
    pub skipped: Vec<EntityKind>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.seeded.iter().map(|(_, n)| n).sum()
    }
}

pub async fn seed_defaults(persistence: &Persistence) -> SeedReport {
    let mut report = SeedReport::default();
    for (kind, records) in catalogue() {
        let collection = kind.collection();
        match persistence.try_get_all(collection).await {
            Some(existing) if existing.is_empty() => {}
            Some(_) => {
                report.skipped.push(kind);
                continue;
            }
            None => {
                warn!(%kind, "collection unreadable, not seeding");
                report.skipped.push(kind);
                continue;
            }
        }
        let mut written = 0;
        for record in records {
            let Value::Object(fields) = record else {
                continue;
            };
            if persistence.add(collection, fields).await.is_some() {
                written += 1;
            }
        }
        info!(%kind, written, "seeded collection");
        report.seeded.push((kind, written));
    }
    report
}

fn photo(id: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{id}?auto=format&fit=crop&w={width}&q=80")
}

fn catalogue() -> Vec<(EntityKind, Vec<Value>)> {
    vec![
        (
            EntityKind::Equipment,
            vec![
                json!({
                    "name": "JBL EON 615", "category": "speakers", "price": "450000",
                    "oldPrice": "", "condition": "new", "brand": "JBL",
                    "specs": "1000W, 15\" Two-Way Active Speaker",
                    "description": "Powered PA speaker for live events, conferences, and outdoor gatherings.",
                    "available": true, "images": [photo("1545454675-3531b543be5d", 400)]
                }),
                json!({
                    "name": "Yamaha MG20XU", "category": "mixers", "price": "380000",
                    "oldPrice": "", "condition": "new", "brand": "Yamaha",
                    "specs": "20-Channel Mixing Console with USB & Effects",
                    "description": "Mixing console with built-in effects and a USB audio interface.",
                    "available": true, "images": [photo("1598653222000-6b7b7a552625", 400)]
                }),
                json!({
                    "name": "Shure SM58", "category": "microphones", "price": "65000",
                    "oldPrice": "", "condition": "new", "brand": "Shure",
                    "specs": "Dynamic Vocal Microphone",
                    "description": "Durable vocal microphone tuned for live singing.",
                    "available": true, "images": [photo("1590602847861-f357a9332bbc", 400)]
                }),
                json!({
                    "name": "Crown XLS 2502", "category": "amplifiers", "price": "250000",
                    "oldPrice": "350000", "condition": "used", "brand": "Crown",
                    "specs": "2-Channel 775W Power Amplifier",
                    "description": "Lightweight power amplifier with a built-in crossover.",
                    "available": true, "images": [photo("1558618666-fcd25c85f82e", 400)]
                }),
            ],
        ),
        (
            EntityKind::Event,
            vec![
                json!({
                    "title": "Afrobeats Live Concert", "category": "concert", "date": "2025-01-15",
                    "venue": "Eko Convention Center, Lagos", "guests": "2000+",
                    "equipment": "12 Speakers, 8 Monitors, Digital Mixer, Stage Lights",
                    "description": "Full sound engineering and stage lighting for a large Afrobeats concert.",
                    "testimonial": "", "images": [photo("1470229722913-7c0e2dbbafd3", 600)]
                }),
                json!({
                    "title": "Johnson Wedding Reception", "category": "wedding", "date": "2024-12-20",
                    "venue": "Landmark Event Center, Lagos", "guests": "500",
                    "equipment": "6 Speakers, Wireless Mics, LED Lights",
                    "description": "Wedding reception with wireless microphones for speeches and a dance floor system.",
                    "testimonial": "DHEBRONIX made our wedding reception absolutely perfect!",
                    "images": [photo("1519671482749-fd09be7ccebf", 600)]
                }),
            ],
        ),
        (
            EntityKind::Blog,
            vec![
                json!({
                    "title": "How to Choose the Right Sound System for Your Wedding",
                    "category": "sound-tips", "author": "DHEBRONIX Team", "date": "2025-02-15",
                    "content": "From the first dance to the last song, here is what to look for in a wedding sound system.",
                    "excerpt": "The sound system can make or break your reception.",
                    "tags": "wedding, sound, tips", "status": "published",
                    "image": photo("1470229722913-7c0e2dbbafd3", 800)
                }),
                json!({
                    "title": "Equipment Maintenance Tips for Longevity",
                    "category": "maintenance", "author": "DHEBRONIX Team", "date": "2025-01-28",
                    "content": "Your sound equipment is an investment. Here is how to keep it working for years.",
                    "excerpt": "How to properly maintain your sound equipment.",
                    "tags": "maintenance, equipment", "status": "published",
                    "image": photo("1558618666-fcd25c85f82e", 800)
                }),
            ],
        ),
        (
            EntityKind::Testimonial,
            vec![
                json!({
                    "name": "Adebayo & Funke Johnson", "event": "Wedding Reception", "rating": "5",
                    "text": "The sound quality was incredible and the team was so professional."
                }),
                json!({
                    "name": "Chidera Okafor", "event": "Corporate Event", "rating": "5",
                    "text": "Their attention to detail is unmatched. The sound is always crystal clear."
                }),
            ],
        ),
        (
            EntityKind::Team,
            vec![json!({
                "name": "Adebowale Prince Aderibigbe",
                "role": "Founder & Lead Sound Engineer",
                "linkedin": "", "instagram": "",
                "bio": "Over 10 years of experience in sound engineering and multimedia production.",
                "image": ""
            })],
        ),
    ]
}

/// Field map of a seeded record, for callers building their own fixtures.
pub fn sample(kind: EntityKind) -> Option<Fields> {
    catalogue()
        .into_iter()
        .find(|(k, _)| *k == kind)
        .and_then(|(_, records)| records.into_iter().next())
        .and_then(|v| match v {
            Value::Object(fields) => Some(fields),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema_for;
    use showcase_test_utils::MockStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn seeds_only_empty_collections() {
        let store = Arc::new(MockStore::new());
        let persistence = Persistence::new(store.clone());
        persistence
            .add("events", sample(EntityKind::Event).unwrap())
            .await
            .unwrap();
        store.fail_collection("team").await;

        let report = seed_defaults(&persistence).await;
        assert!(report.skipped.contains(&EntityKind::Event));
        assert!(report.skipped.contains(&EntityKind::Team));
        assert!(report.seeded.contains(&(EntityKind::Equipment, 4)));
        assert_eq!(store.records("events").await.len(), 1);

        let again = seed_defaults(&persistence).await;
        assert_eq!(again.total(), 0);
    }

    #[test]
    fn catalogue_matches_the_schemas() {
        for (kind, records) in catalogue() {
            let schema = schema_for(kind);
            for record in records {
                let fields = record.as_object().unwrap();
                for key in fields.keys() {
                    let is_image = schema.images.field() == Some(key.as_str());
                    assert!(schema.field(key).is_some() || is_image, "{kind}: `{key}`");
                }
            }
        }
    }
}
