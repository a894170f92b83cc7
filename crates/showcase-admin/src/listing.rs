// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the list view of one entity collection.

use showcase_core::view::{Cell, ListRow, ListView};
use showcase_core::{Record, RowAction};

use crate::format;
use crate::persistence::Persistence;
use crate::schema::{CellFormat, Column, EntitySchema, FieldDefault};
use crate::values::read_flag;

/// Fetches a collection and renders it. A failed fetch renders as empty.
pub async fn render_list(persistence: &Persistence, schema: &EntitySchema) -> ListView {
    let records = persistence.get_all(schema.collection()).await;
    build_view(schema, records)
}

/// Renders already-fetched records, oldest first. Records without a
/// creation stamp sort ahead of stamped ones and keep their stored order.
pub fn build_view(schema: &EntitySchema, mut records: Vec<Record>) -> ListView {
    if records.is_empty() {
        return ListView::Empty {
            kind: schema.kind,
            placeholder: schema.empty_placeholder.to_string(),
        };
    }
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    ListView::Rows {
        kind: schema.kind,
        rows: records.iter().map(|r| build_row(schema, r)).collect(),
    }
}

fn build_row(schema: &EntitySchema, record: &Record) -> ListRow {
    ListRow {
        id: record.id.clone(),
        thumbnail: schema
            .images
            .field()
            .and_then(|_| record.images().into_iter().next())
            .map(|image| image.as_str().to_string()),
        cells: schema
            .columns
            .iter()
            .map(|column| Cell {
                header: column.header,
                text: cell_text(schema, column, record),
            })
            .collect(),
        actions: vec![
            RowAction::Edit(record.id.clone()),
            RowAction::Delete(record.id.clone()),
        ],
    }
}

/// Display text of one column for one record.
pub fn cell_text(schema: &EntitySchema, column: &Column, record: &Record) -> String {
    let raw = record.text(column.field);
    match column.format {
        CellFormat::Plain => raw,
        CellFormat::Badge if raw.trim().is_empty() => match schema.field(column.field) {
            Some(spec) => match spec.default {
                FieldDefault::Text(fallback) => fallback.to_string(),
                _ => raw,
            },
            None => raw,
        },
        CellFormat::Badge => raw,
        CellFormat::Currency => format::currency(&raw),
        CellFormat::Stars => format::stars(&raw),
        CellFormat::Excerpt(limit) => format::excerpt(&raw, limit),
        CellFormat::Availability => {
            let available = schema
                .field(column.field)
                .map(|spec| read_flag(record.fields.get(column.field), spec))
                .unwrap_or(true);
            format::availability(available).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema_for;
    use serde_json::json;
    use showcase_core::EntityKind;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_collection_shows_placeholder() {
        let view = build_view(schema_for(EntityKind::Blog), Vec::new());
        assert_eq!(
            view,
            ListView::Empty {
                kind: EntityKind::Blog,
                placeholder: "No blog posts yet.".into()
            }
        );
    }

    #[test]
    fn rows_sort_by_creation_with_unstamped_first() {
        let records = vec![
            record(json!({"id": "b", "createdAt": "2025-02-01T00:00:00.000Z", "title": "B"})),
            record(json!({"id": "legacy", "title": "L"})),
            record(json!({"id": "a", "createdAt": "2025-01-01T00:00:00.000Z", "title": "A"})),
        ];
        let view = build_view(schema_for(EntityKind::Event), records);
        let ids: Vec<_> = view.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["legacy", "a", "b"]);
    }

    #[test]
    fn equipment_row_formats_price_and_status() {
        let view = build_view(
            schema_for(EntityKind::Equipment),
            vec![record(json!({
                "id": "1001",
                "name": "JBL EON 615",
                "price": "450000",
                "available": false,
                "images": ["https://cdn.example.com/jbl.jpg"]
            }))],
        );
        let row = &view.rows()[0];
        let text = |header: &str| {
            row.cells
                .iter()
                .find(|c| c.header == header)
                .map(|c| c.text.clone())
                .unwrap()
        };
        assert_eq!(text("Price"), "₦450,000");
        assert_eq!(text("Status"), "Sold");
        assert_eq!(text("Condition"), "new");
        assert_eq!(row.thumbnail.as_deref(), Some("https://cdn.example.com/jbl.jpg"));
        assert_eq!(
            row.actions,
            vec![
                RowAction::Edit(row.id.clone()),
                RowAction::Delete(row.id.clone())
            ]
        );
    }

    #[test]
    fn missing_availability_reads_as_available() {
        let schema = schema_for(EntityKind::Equipment);
        let column = schema.columns.iter().find(|c| c.header == "Status").unwrap();
        let item = record(json!({"id": "x", "name": "Mic X"}));
        assert_eq!(cell_text(schema, column, &item), "Available");
    }

    #[test]
    fn testimonial_text_is_truncated() {
        let long = "a".repeat(140);
        let view = build_view(
            schema_for(EntityKind::Testimonial),
            vec![record(json!({"id": "t", "name": "Funke", "rating": "4", "text": long}))],
        );
        let cells = &view.rows()[0].cells;
        assert_eq!(cells[2].text, "★★★★");
        assert_eq!(cells[3].text.len(), 103);
        assert!(view.rows()[0].thumbnail.is_none());
    }
}
