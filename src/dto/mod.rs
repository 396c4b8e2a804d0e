//! Data transfer objects shaped for the dashboard and client list views.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub mod client;
pub mod dashboard;

/// Maximum characters of notes shown in a client summary.
pub const NOTES_EXCERPT_CHARS: usize = 100;

/// The first `limit` entries of a longer list plus how many were left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub remaining: usize,
}

impl<T> Preview<T> {
    pub fn new(mut items: Vec<T>, limit: usize) -> Self {
        let total = items.len();
        items.truncate(limit);
        Self {
            remaining: total - items.len(),
            items,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Preview<U> {
        Preview {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            remaining: self.remaining,
        }
    }
}

/// Renders a dollar amount with thousands separators, e.g. `$4,300.00`.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction}")
}

/// Shortens notes to [`NOTES_EXCERPT_CHARS`] characters, marking the cut.
pub fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() > NOTES_EXCERPT_CHARS {
        let excerpt: String = notes.chars().take(NOTES_EXCERPT_CHARS).collect();
        format!("{excerpt}...")
    } else {
        notes.to_string()
    }
}
