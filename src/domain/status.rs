//! Date status classification used for badges, dashboard partitions and list
//! filters.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of days ahead of `now` that still counts as due soon.
pub const DUE_SOON_DAYS: i64 = 7;

/// Urgency of a dated task relative to a reference time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStatus {
    /// No date recorded.
    Neutral,
    Overdue,
    DueSoon,
    Upcoming,
}

impl DateStatus {
    /// Badge style used when presenting the status.
    pub fn badge_variant(self) -> &'static str {
        match self {
            DateStatus::Overdue => "destructive",
            DateStatus::DueSoon => "default",
            DateStatus::Upcoming | DateStatus::Neutral => "secondary",
        }
    }
}

impl Display for DateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStatus::Neutral => write!(f, "neutral"),
            DateStatus::Overdue => write!(f, "overdue"),
            DateStatus::DueSoon => write!(f, "due-soon"),
            DateStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

impl FromStr for DateStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(DateStatus::Neutral),
            "overdue" => Ok(DateStatus::Overdue),
            "due-soon" => Ok(DateStatus::DueSoon),
            "upcoming" => Ok(DateStatus::Upcoming),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Whole days from `now` until `date`, rounded up.
///
/// Rounding up means anything less than a full day in the past yields `0`.
pub fn days_until(date: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let millis = date.signed_duration_since(now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Classifies an optional date against `now`.
pub fn classify_date(date: Option<NaiveDateTime>, now: NaiveDateTime) -> DateStatus {
    let Some(date) = date else {
        return DateStatus::Neutral;
    };

    match days_until(date, now) {
        days if days < 0 => DateStatus::Overdue,
        days if days <= DUE_SOON_DAYS => DateStatus::DueSoon,
        _ => DateStatus::Upcoming,
    }
}

/// Whether `date` falls inside `[now, now + 7 days]`.
pub fn within_due_soon_window(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date >= now && date <= now + TimeDelta::days(DUE_SOON_DAYS)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 20)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn absent_date_is_neutral() {
        assert_eq!(classify_date(None, now()), DateStatus::Neutral);
    }

    #[test]
    fn full_day_in_the_past_is_overdue() {
        let date = now() - TimeDelta::days(1);
        assert_eq!(days_until(date, now()), -1);
        assert_eq!(classify_date(Some(date), now()), DateStatus::Overdue);
    }

    #[test]
    fn less_than_a_day_in_the_past_rounds_up_to_due_soon() {
        let date = now() - TimeDelta::hours(5);
        assert_eq!(days_until(date, now()), 0);
        assert_eq!(classify_date(Some(date), now()), DateStatus::DueSoon);
    }

    #[test]
    fn partial_days_in_the_future_round_up() {
        assert_eq!(days_until(now() + TimeDelta::hours(3), now()), 1);
        assert_eq!(days_until(now() + TimeDelta::days(7), now()), 7);
        assert_eq!(
            days_until(now() + TimeDelta::days(7) + TimeDelta::milliseconds(1), now()),
            8
        );
    }

    #[test]
    fn seven_day_boundary_is_inclusive() {
        assert_eq!(
            classify_date(Some(now() + TimeDelta::days(7)), now()),
            DateStatus::DueSoon
        );
        assert_eq!(
            classify_date(Some(now() + TimeDelta::days(7) + TimeDelta::hours(1)), now()),
            DateStatus::Upcoming
        );
        assert_eq!(
            classify_date(Some(now() + TimeDelta::days(20)), now()),
            DateStatus::Upcoming
        );
    }

    #[test]
    fn due_soon_window_is_inclusive_on_both_ends() {
        assert!(within_due_soon_window(now(), now()));
        assert!(within_due_soon_window(now() + TimeDelta::days(7), now()));
        assert!(!within_due_soon_window(
            now() - TimeDelta::milliseconds(1),
            now()
        ));
        assert!(!within_due_soon_window(
            now() + TimeDelta::days(7) + TimeDelta::seconds(1),
            now()
        ));
    }

    #[test]
    fn badge_variants_match_status() {
        assert_eq!(DateStatus::Overdue.badge_variant(), "destructive");
        assert_eq!(DateStatus::DueSoon.badge_variant(), "default");
        assert_eq!(DateStatus::Upcoming.badge_variant(), "secondary");
        assert_eq!(DateStatus::Neutral.badge_variant(), "secondary");
    }

    #[test]
    fn status_round_trips_through_string() {
        for status in [
            DateStatus::Neutral,
            DateStatus::Overdue,
            DateStatus::DueSoon,
            DateStatus::Upcoming,
        ] {
            assert_eq!(status.to_string().parse::<DateStatus>().unwrap(), status);
        }
    }
}
