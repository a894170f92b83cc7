// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal implementation of the admin view.

use std::io::{BufRead, IsTerminal, Write};

use async_trait::async_trait;
use colored::Colorize;
use showcase_core::view::{DashboardCounts, ListView, Notice, NoticeLevel};
use showcase_core::AdminView;

/// Prints notices to stderr and lists to stdout.
pub struct ConsoleView {
    use_color: bool,
    assume_yes: bool,
}

impl ConsoleView {
    pub fn new(color: bool, assume_yes: bool) -> Self {
        Self {
            use_color: color && std::io::stdout().is_terminal(),
            assume_yes,
        }
    }

    fn notice_line(&self, notice: &Notice) -> String {
        let (symbol, plain) = match notice.level {
            NoticeLevel::Info => ("·", "[..]"),
            NoticeLevel::Success => ("✓", "[OK]"),
            NoticeLevel::Error => ("✗", "[FAIL]"),
        };
        if !self.use_color {
            return format!("{plain} {}", notice.text);
        }
        let symbol = match notice.level {
            NoticeLevel::Info => symbol.dimmed(),
            NoticeLevel::Success => symbol.green(),
            NoticeLevel::Error => symbol.red(),
        };
        format!("{symbol} {}", notice.text)
    }
}

#[async_trait]
impl AdminView for ConsoleView {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", self.notice_line(&notice));
    }

    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if !std::io::stdin().is_terminal() {
            eprintln!("{prompt} (pass --yes to confirm non-interactively)");
            return false;
        }
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            eprint!("{prompt} [y/N] ");
            let _ = std::io::stderr().flush();
            let mut answer = String::new();
            match std::io::stdin().lock().read_line(&mut answer) {
                Ok(_) => is_yes(&answer),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }

    fn show_list(&self, view: &ListView) {
        print!("{}", render_list(view, self.use_color));
    }

    fn show_dashboard(&self, counts: &DashboardCounts) {
        print!("{}", render_dashboard(counts));
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Plain-text table of a list view.
pub fn render_list(view: &ListView, use_color: bool) -> String {
    let rows = match view {
        ListView::Empty { placeholder, .. } => return format!("\n  {placeholder}\n\n"),
        ListView::Rows { rows, .. } => rows,
    };

    let mut headers = vec!["ID"];
    if let Some(first) = rows.first() {
        headers.extend(first.cells.iter().map(|c| c.header));
    }
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            std::iter::once(row.id.to_string())
                .chain(row.cells.iter().map(|c| single_line(&c.text)))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            table
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::from("\n");
    let header_line = pad_row(headers.iter().map(|h| h.to_string()), &widths);
    if use_color {
        out.push_str(&format!("  {}\n", header_line.bold()));
    } else {
        out.push_str(&format!("  {header_line}\n"));
    }
    out.push_str(&format!("  {}\n", "-".repeat(header_line.chars().count())));
    for row in table {
        out.push_str(&format!("  {}\n", pad_row(row.into_iter(), &widths)));
    }
    out.push('\n');
    out
}

fn pad_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render_dashboard(counts: &DashboardCounts) -> String {
    let mut out = String::from("  Dashboard\n");
    for (label, count) in counts.entries() {
        let value = count.map_or_else(|| "-".to_string(), |n| n.to_string());
        out.push_str(&format!("    {label:<16} {value}\n"));
    }
    out
}
