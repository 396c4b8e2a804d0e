//! Pure derivations over a snapshot of clients.
//!
//! Everything in this module borrows a `&[Client]` for the duration of the
//! call and returns freshly computed values. Time-dependent functions take
//! `now` explicitly; nothing here reads the clock or touches the store.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::types::is_amount_format;

pub mod listing;
pub mod metrics;
pub mod partition;

pub use listing::{SortKey, StatusFilter, search_and_filter, sort_records};
pub use metrics::{Metrics, aggregate_metrics};
pub use partition::{UrgencyPartition, partition_by_urgency};

/// Coerces a stored amount to a decimal, treating absent or malformed values
/// as zero.
pub fn parse_amount(value: Option<&str>) -> Decimal {
    value
        .map(str::trim)
        .filter(|raw| is_amount_format(raw))
        .and_then(|raw| Decimal::from_str(raw).ok())
        .unwrap_or(Decimal::ZERO)
}
