// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display formatting for list cells.

use showcase_core::entities::{parse_price, Rating};

const CURRENCY_SYMBOL: &str = "₦";

/// Formats a price with a currency symbol and thousands separators.
pub fn currency(raw: &str) -> String {
    let value = parse_price(raw);
    let whole = value.trunc().abs() as u64;
    let cents = ((value.abs().fract() * 100.0).round() as u64).min(99);
    let sign = if value < 0.0 { "-" } else { "" };
    let grouped = group_thousands(whole);
    if cents == 0 {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}.{cents:02}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A rating as filled stars.
pub fn stars(raw: &str) -> String {
    "★".repeat(usize::from(Rating::parse_lenient(raw).stars()))
}

/// The first `limit` characters, with an ellipsis when text was cut.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn availability(available: bool) -> &'static str {
    if available { "Available" } else { "Sold" }
}
