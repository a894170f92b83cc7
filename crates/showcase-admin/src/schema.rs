// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative per-entity schema table.
//!
//! One row per entity kind: its fields and their defaults, how many images
//! it carries, and how its list is laid out. The form controller and the
//! list renderer are generic over these rows.

use showcase_core::EntityKind;

/// How a field is edited and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Multi-line free text.
    LongText,
    /// Stored as a JSON boolean.
    Flag,
    /// One of a fixed set of lowercase values.
    Choice(&'static [&'static str]),
    /// Star rating from 1 to 5, stored as text.
    Rating,
    /// `YYYY-MM-DD`, free text in practice.
    Date,
}

/// Value used when the submitted field is missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Empty,
    Text(&'static str),
    Flag(bool),
    /// Today's local date.
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stored key (camelCase).
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
}

/// Where an entity keeps its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageArity {
    None,
    /// A single image string under `image`.
    Single,
    /// A list under `images`.
    Many,
}

impl ImageArity {
    pub fn field(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Single => Some("image"),
            Self::Many => Some("images"),
        }
    }
}

/// How a column renders its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    /// Short status label; empty values fall back to the field default.
    Badge,
    /// Price with thousands separators.
    Currency,
    /// Rating as stars.
    Stars,
    /// First `n` characters.
    Excerpt(usize),
    /// Flag shown as "Available" / "Sold".
    Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
}

/// Everything the generic workflow needs to know about one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// Singular display name.
    pub label: &'static str,
    /// Field naming the record in notices and the activity log.
    pub title_field: &'static str,
    pub images: ImageArity,
    /// Whether saves and deletes refresh the dashboard.
    pub feeds_dashboard: bool,
    pub fields: &'static [FieldSpec],
    pub columns: &'static [Column],
    pub empty_placeholder: &'static str,
}

impl EntitySchema {
    pub fn collection(&self) -> &'static str {
        self.kind.collection()
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Whether the entity can be saved as a draft.
    pub fn supports_draft(&self) -> bool {
        matches!(
            self.field("status").map(|f| f.kind),
            Some(FieldKind::Choice(values)) if values.contains(&DRAFT)
        )
    }
}

pub(crate) const DRAFT: &str = "draft";

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
        default: FieldDefault::Empty,
    }
}

const fn long(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::LongText,
        default: FieldDefault::Empty,
    }
}

const fn col(header: &'static str, field: &'static str, format: CellFormat) -> Column {
    Column {
        header,
        field,
        format,
    }
}

const CONDITIONS: &[&str] = &["new", "used"];
const POST_STATUSES: &[&str] = &["published", DRAFT];

static EVENT: EntitySchema = EntitySchema {
    kind: EntityKind::Event,
    label: "Event",
    title_field: "title",
    images: ImageArity::Many,
    feeds_dashboard: true,
    fields: &[
        text("title", "Title"),
        text("category", "Category"),
        FieldSpec {
            name: "date",
            label: "Date",
            kind: FieldKind::Date,
            default: FieldDefault::Empty,
        },
        text("venue", "Venue"),
        text("guests", "Guests"),
        text("equipment", "Equipment used"),
        long("description", "Description"),
        long("testimonial", "Client testimonial"),
    ],
    columns: &[
        col("Title", "title", CellFormat::Plain),
        col("Category", "category", CellFormat::Badge),
        col("Date", "date", CellFormat::Plain),
        col("Venue", "venue", CellFormat::Plain),
    ],
    empty_placeholder: "No events yet. Add your first event.",
};

static EQUIPMENT: EntitySchema = EntitySchema {
    kind: EntityKind::Equipment,
    label: "Equipment",
    title_field: "name",
    images: ImageArity::Many,
    feeds_dashboard: true,
    fields: &[
        text("name", "Name"),
        text("category", "Category"),
        text("price", "Price"),
        text("oldPrice", "Old price"),
        FieldSpec {
            name: "condition",
            label: "Condition",
            kind: FieldKind::Choice(CONDITIONS),
            default: FieldDefault::Text("new"),
        },
        text("brand", "Brand"),
        text("specs", "Specifications"),
        long("description", "Description"),
        FieldSpec {
            name: "available",
            label: "Available",
            kind: FieldKind::Flag,
            default: FieldDefault::Flag(true),
        },
    ],
    columns: &[
        col("Name", "name", CellFormat::Plain),
        col("Brand", "brand", CellFormat::Plain),
        col("Category", "category", CellFormat::Plain),
        col("Price", "price", CellFormat::Currency),
        col("Condition", "condition", CellFormat::Badge),
        col("Status", "available", CellFormat::Availability),
    ],
    empty_placeholder: "No equipment listed yet.",
};

static BLOG: EntitySchema = EntitySchema {
    kind: EntityKind::Blog,
    label: "Blog post",
    title_field: "title",
    images: ImageArity::Single,
    feeds_dashboard: true,
    fields: &[
        text("title", "Title"),
        text("category", "Category"),
        text("author", "Author"),
        FieldSpec {
            name: "date",
            label: "Date",
            kind: FieldKind::Date,
            default: FieldDefault::Today,
        },
        long("content", "Content"),
        long("excerpt", "Excerpt"),
        text("tags", "Tags"),
        FieldSpec {
            name: "status",
            label: "Status",
            kind: FieldKind::Choice(POST_STATUSES),
            default: FieldDefault::Text("published"),
        },
    ],
    columns: &[
        col("Title", "title", CellFormat::Plain),
        col("Category", "category", CellFormat::Plain),
        col("Author", "author", CellFormat::Plain),
        col("Date", "date", CellFormat::Plain),
        col("Status", "status", CellFormat::Badge),
    ],
    empty_placeholder: "No blog posts yet.",
};

static TESTIMONIAL: EntitySchema = EntitySchema {
    kind: EntityKind::Testimonial,
    label: "Testimonial",
    title_field: "name",
    images: ImageArity::None,
    feeds_dashboard: true,
    fields: &[
        text("name", "Client name"),
        text("event", "Event"),
        FieldSpec {
            name: "rating",
            label: "Rating",
            kind: FieldKind::Rating,
            default: FieldDefault::Text("5"),
        },
        long("text", "Testimonial"),
    ],
    columns: &[
        col("Name", "name", CellFormat::Plain),
        col("Event", "event", CellFormat::Plain),
        col("Rating", "rating", CellFormat::Stars),
        col("Text", "text", CellFormat::Excerpt(100)),
    ],
    empty_placeholder: "No testimonials yet.",
};

static TEAM: EntitySchema = EntitySchema {
    kind: EntityKind::Team,
    label: "Team member",
    title_field: "name",
    images: ImageArity::Single,
    feeds_dashboard: true,
    fields: &[
        text("name", "Name"),
        text("role", "Role"),
        text("linkedin", "LinkedIn"),
        text("instagram", "Instagram"),
        long("bio", "Bio"),
    ],
    columns: &[
        col("Name", "name", CellFormat::Plain),
        col("Role", "role", CellFormat::Plain),
    ],
    empty_placeholder: "No team members yet.",
};

static GALLERY: EntitySchema = EntitySchema {
    kind: EntityKind::Gallery,
    label: "Gallery image",
    title_field: "name",
    images: ImageArity::Single,
    feeds_dashboard: false,
    fields: &[text("name", "Caption")],
    columns: &[col("Caption", "name", CellFormat::Plain)],
    empty_placeholder: "The gallery is empty.",
};

/// The schema row for an entity kind.
pub fn schema_for(kind: EntityKind) -> &'static EntitySchema {
    match kind {
        EntityKind::Event => &EVENT,
        EntityKind::Equipment => &EQUIPMENT,
        EntityKind::Blog => &BLOG,
        EntityKind::Testimonial => &TESTIMONIAL,
        EntityKind::Team => &TEAM,
        EntityKind::Gallery => &GALLERY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_has_a_consistent_schema() {
        for kind in EntityKind::iter() {
            let schema = schema_for(kind);
            assert_eq!(schema.kind, kind);
            assert!(schema.field(schema.title_field).is_some(), "{kind}: title field");
            for column in schema.columns {
                assert!(
                    schema.field(column.field).is_some(),
                    "{kind}: column `{}` has no field",
                    column.field
                );
            }
            if let Some(image_field) = schema.images.field() {
                assert!(schema.field(image_field).is_none(), "{kind}: image key is not a form field");
            }
        }
    }

    #[test]
    fn only_blog_posts_have_drafts() {
        let drafts: Vec<_> = EntityKind::iter()
            .filter(|k| schema_for(*k).supports_draft())
            .collect();
        assert_eq!(drafts, vec![EntityKind::Blog]);
    }
}
