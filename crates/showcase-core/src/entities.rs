// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed views of the stored content.
//!
//! Every field defaults when absent, because stored records routinely lack
//! fields: nothing in the admin forms is required.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::EncodedImage;

/// A past event or setup shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub title: String,
    pub category: String,
    pub date: String,
    pub venue: String,
    pub guests: String,
    /// Free text listing the gear used.
    pub equipment: String,
    pub description: String,
    pub testimonial: String,
    pub images: Vec<EncodedImage>,
}

/// Condition of a catalogue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    New,
    Used,
}

/// A catalogue item offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    pub name: String,
    pub category: String,
    /// Price as typed into the form.
    pub price: String,
    pub old_price: String,
    pub condition: Condition,
    pub brand: String,
    pub specs: String,
    pub description: String,
    pub available: bool,
    pub images: Vec<EncodedImage>,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: String::new(),
            old_price: String::new(),
            condition: Condition::New,
            brand: String::new(),
            specs: String::new(),
            description: String::new(),
            available: true,
            images: Vec::new(),
        }
    }
}

impl Equipment {
    /// Numeric price for display; unparsable text counts as zero.
    pub fn price_value(&self) -> f64 {
        parse_price(&self.price)
    }
}

/// Parses a price typed as free text ("450000", "450,000", " 12.5 ").
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

/// A blog article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub excerpt: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Cover image; empty when the post has none.
    pub image: String,
    pub status: PostStatus,
}

impl BlogPost {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn cover(&self) -> Option<EncodedImage> {
        EncodedImage::parse(&self.image)
    }
}

/// Star rating from 1 to 5.
///
/// Stored as text by the forms ("5"); older records may hold a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Clamps into 1..=5.
    pub fn new(stars: u8) -> Self {
        Self(stars.clamp(1, Self::MAX))
    }

    /// Parses form text. Empty or unparsable input yields the default of 5.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(|n| Self::new(n.clamp(1, Self::MAX as i64) as u8))
            .unwrap_or_default()
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::new(n.clamp(1, Self::MAX as i64) as u8),
            Raw::Text(s) => Self::parse_lenient(&s),
        })
    }
}

/// A client quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: String,
    /// Free text naming the event the client booked.
    pub event: String,
    pub rating: Rating,
    pub text: String,
}

/// A staff profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub linkedin: String,
    pub instagram: String,
    pub bio: String,
    pub image: String,
}

/// A standalone gallery picture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub name: String,
    pub image: String,
}

/// A public contact-form submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub event_date: String,
    pub message: String,
    pub read: bool,
}

/// Company details shown in the site footer and contact page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySettings {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
}

impl CompanySettings {
    pub const NAME: &'static str = "company";
}

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialSettings {
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
    pub twitter: String,
}

impl SocialSettings {
    pub const NAME: &'static str = "social";
}
