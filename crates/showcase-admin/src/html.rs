// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML rendering of entity lists.
//!
//! Every stored value is escaped before it reaches markup; actions are bound
//! through `data-action` / `data-id` attributes rather than inline script.

use std::borrow::Cow;
use std::fmt::Write as _;

use showcase_core::view::{ListRow, ListView};

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Renders a list as a table, or the placeholder paragraph when empty.
pub fn to_html(view: &ListView) -> String {
    let rows = match view {
        ListView::Empty { kind, placeholder } => {
            return format!(
                "<p class=\"empty\" data-kind=\"{kind}\">{}</p>",
                escape(placeholder)
            );
        }
        ListView::Rows { rows, .. } => rows,
    };

    let with_thumbs = rows.iter().any(|r| r.thumbnail.is_some());
    let mut html = format!("<table data-kind=\"{}\">\n<thead><tr>", view.kind());
    if with_thumbs {
        html.push_str("<th></th>");
    }
    if let Some(first) = rows.first() {
        for cell in &first.cells {
            let _ = write!(html, "<th>{}</th>", escape(cell.header));
        }
    }
    html.push_str("<th>Actions</th></tr></thead>\n<tbody>\n");
    for row in rows {
        write_row(&mut html, row, with_thumbs);
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn write_row(html: &mut String, row: &ListRow, with_thumbs: bool) {
    let _ = write!(html, "<tr data-id=\"{}\">", escape(row.id.as_str()));
    if with_thumbs {
        match &row.thumbnail {
            Some(src) => {
                let _ = write!(html, "<td><img src=\"{}\" alt=\"\"></td>", escape(src));
            }
            None => html.push_str("<td></td>"),
        }
    }
    for cell in &row.cells {
        let _ = write!(html, "<td>{}</td>", escape(&cell.text));
    }
    html.push_str("<td>");
    for action in &row.actions {
        let _ = write!(
            html,
            "<button data-action=\"{}\" data-id=\"{}\">{}</button>",
            action.name(),
            escape(action.id().as_str()),
            capitalize(action.name()),
        );
    }
    html.push_str("</td></tr>\n");
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::view::Cell;
    use showcase_core::{EntityKind, RecordId, RowAction};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn stored_markup_never_reaches_the_table() {
        let id = RecordId::parse("r\"1").unwrap();
        let view = ListView::Rows {
            kind: EntityKind::Event,
            rows: vec![ListRow {
                id: id.clone(),
                thumbnail: Some("https://cdn.example.com/a.jpg?x=1&y=\"2\"".into()),
                cells: vec![Cell {
                    header: "Title",
                    text: "<img src=x onerror=alert(1)>".into(),
                }],
                actions: vec![RowAction::Edit(id.clone()), RowAction::Delete(id)],
            }],
        };
        let html = to_html(&view);
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("data-action=\"edit\" data-id=\"r&quot;1\""));
        assert!(html.contains("data-action=\"delete\""));
        assert!(html.contains("y=&quot;2&quot;"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn empty_lists_render_the_placeholder() {
        let view = ListView::Empty {
            kind: EntityKind::Team,
            placeholder: "No team members yet.".into(),
        };
        assert_eq!(
            to_html(&view),
            "<p class=\"empty\" data-kind=\"team\">No team members yet.</p>"
        );
    }
}
