use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::derivation::parse_amount;
use crate::derivation::partition::is_overdue;
use crate::domain::client::Client;
use crate::domain::status::{DateStatus, classify_date};
use crate::domain::types::TypeConstraintError;

/// Status filter offered by the client list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Overdue,
    DueSoon,
    /// Both dates upcoming. Unlike the other filters this requires every
    /// tracked date to match.
    Upcoming,
}

/// Ordering offered by the client list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    Amount,
    NextContact,
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Overdue => write!(f, "overdue"),
            StatusFilter::DueSoon => write!(f, "due-soon"),
            StatusFilter::Upcoming => write!(f, "upcoming"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(StatusFilter::All),
            "overdue" => Ok(StatusFilter::Overdue),
            "due-soon" => Ok(StatusFilter::DueSoon),
            "upcoming" => Ok(StatusFilter::Upcoming),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Amount => write!(f, "amount"),
            SortKey::NextContact => write!(f, "next-contact"),
        }
    }
}

impl FromStr for SortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "amount" => Ok(SortKey::Amount),
            "next-contact" => Ok(SortKey::NextContact),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

fn matches_search(client: &Client, needle_lower: &str, needle_raw: &str) -> bool {
    client.client_name.to_lowercase().contains(needle_lower)
        || client.email.to_lowercase().contains(needle_lower)
        || client.phone_number.contains(needle_raw)
}

fn matches_status(client: &Client, status: StatusFilter, now: NaiveDateTime) -> bool {
    let contact = || classify_date(client.date_of_next_contact, now);
    let commission = || classify_date(client.date_commissions_due, now);

    match status {
        StatusFilter::All => true,
        StatusFilter::Overdue => is_overdue(client, now),
        StatusFilter::DueSoon => {
            contact() == DateStatus::DueSoon || commission() == DateStatus::DueSoon
        }
        StatusFilter::Upcoming => {
            contact() == DateStatus::Upcoming && commission() == DateStatus::Upcoming
        }
    }
}

/// Clients matching the search text and status filter, in snapshot order.
///
/// Name and email match case-insensitively; the phone number matches the
/// query literally.
pub fn search_and_filter(
    records: &[Client],
    query: &str,
    status: StatusFilter,
    now: NaiveDateTime,
) -> Vec<Client> {
    let needle_lower = query.to_lowercase();

    records
        .iter()
        .filter(|client| matches_search(client, &needle_lower, query))
        .filter(|client| matches_status(client, status, now))
        .cloned()
        .collect()
}

/// Locale-style name ordering: case-folded first, raw text as tie-break.
fn compare_names(a: &Client, b: &Client) -> Ordering {
    a.client_name
        .to_lowercase()
        .cmp(&b.client_name.to_lowercase())
        .then_with(|| a.client_name.as_str().cmp(b.client_name.as_str()))
}

fn compare_next_contact(a: &Client, b: &Client) -> Ordering {
    match (a.date_of_next_contact, b.date_of_next_contact) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of a copy of the snapshot.
pub fn sort_records(records: &[Client], key: SortKey) -> Vec<Client> {
    let mut sorted = records.to_vec();

    match key {
        SortKey::Name => sorted.sort_by(compare_names),
        SortKey::Amount => sorted.sort_by(|a, b| {
            parse_amount(b.amount_paid_on_call.as_deref())
                .cmp(&parse_amount(a.amount_paid_on_call.as_deref()))
        }),
        SortKey::NextContact => sorted.sort_by(compare_next_contact),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::test_support::{client, days, names, now};

    fn with_amount(name: &str, amount: &str) -> Client {
        Client {
            amount_paid_on_call: Some(amount.to_string()),
            ..client(name)
        }
    }

    #[test]
    fn empty_query_and_all_status_returns_input_unchanged() {
        let records = vec![client("Zed"), client("alpha"), client("Mid")];

        assert_eq!(search_and_filter(&records, "", StatusFilter::All, now()), records);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_email() {
        let records = vec![
            Client {
                email: "info@techsolutions.com".to_string(),
                ..client("Tech Solutions Inc")
            },
            client("Acme Corporation"),
        ];

        assert_eq!(
            names(&search_and_filter(&records, "ACME", StatusFilter::All, now())),
            vec!["Acme Corporation"]
        );
        assert_eq!(
            names(&search_and_filter(&records, "TechSolutions", StatusFilter::All, now())),
            vec!["Tech Solutions Inc"]
        );
    }

    #[test]
    fn search_matches_phone_literally() {
        let records = vec![
            Client {
                phone_number: "(555) 987-6543".to_string(),
                ..client("Tech")
            },
            Client {
                phone_number: "(555) 123-4567".to_string(),
                ..client("Acme")
            },
        ];

        assert_eq!(
            names(&search_and_filter(&records, "987-65", StatusFilter::All, now())),
            vec!["Tech"]
        );
        assert!(search_and_filter(&records, "555)", StatusFilter::All, now()).len() == 2);
    }

    #[test]
    fn upcoming_filter_requires_both_dates_while_overdue_needs_either() {
        let records = vec![
            Client {
                date_of_next_contact: days(30),
                date_commissions_due: days(-2),
                ..client("Mixed")
            },
            Client {
                date_of_next_contact: days(15),
                date_commissions_due: days(40),
                ..client("Both Upcoming")
            },
            Client {
                date_of_next_contact: days(15),
                ..client("One Undated")
            },
        ];

        assert_eq!(
            names(&search_and_filter(&records, "", StatusFilter::Upcoming, now())),
            vec!["Both Upcoming"]
        );
        assert_eq!(
            names(&search_and_filter(&records, "", StatusFilter::Overdue, now())),
            vec!["Mixed"]
        );
    }

    #[test]
    fn due_soon_filter_accepts_either_date() {
        let records = vec![
            Client {
                date_commissions_due: days(2),
                ..client("Commission Soon")
            },
            Client {
                date_of_next_contact: days(5),
                date_commissions_due: days(-3),
                ..client("Contact Soon")
            },
            Client {
                date_of_next_contact: days(9),
                ..client("Far")
            },
        ];

        assert_eq!(
            names(&search_and_filter(&records, "", StatusFilter::DueSoon, now())),
            vec!["Commission Soon", "Contact Soon"]
        );
    }

    #[test]
    fn search_applies_before_status() {
        let records = vec![
            Client {
                date_of_next_contact: days(-1),
                ..client("Acme")
            },
            Client {
                date_of_next_contact: days(-1),
                ..client("Globex")
            },
        ];

        assert_eq!(
            names(&search_and_filter(&records, "glo", StatusFilter::Overdue, now())),
            vec!["Globex"]
        );
    }

    #[test]
    fn amount_sort_is_descending() {
        let records = vec![
            with_amount("Hundred", "100.00"),
            with_amount("Fifty", "50.00"),
            with_amount("Two Hundred", "200.00"),
        ];

        let sorted = sort_records(&records, SortKey::Amount);

        let amounts: Vec<_> = sorted
            .iter()
            .map(|c| c.amount_paid_on_call.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(amounts, vec!["200.00", "100.00", "50.00"]);
    }

    #[test]
    fn amount_sort_treats_malformed_as_zero_and_stays_stable() {
        let records = vec![
            with_amount("Broken", "n/a"),
            client("Missing"),
            with_amount("Ten", "10"),
            with_amount("Zero", "0.00"),
        ];

        assert_eq!(
            names(&sort_records(&records, SortKey::Amount)),
            vec!["Ten", "Broken", "Missing", "Zero"]
        );
    }

    #[test]
    fn name_sort_folds_case_and_is_idempotent() {
        let records = vec![
            client("beta"),
            client("Alpha"),
            client("alpha"),
            client("Gamma"),
        ];

        let sorted = sort_records(&records, SortKey::Name);
        assert_eq!(names(&sorted), vec!["Alpha", "alpha", "beta", "Gamma"]);
        assert_eq!(sort_records(&sorted, SortKey::Name), sorted);
    }

    #[test]
    fn name_sort_is_stable_for_equal_names() {
        let first = client("Same");
        let second = client("Same");
        let records = vec![first.clone(), second.clone()];

        let sorted = sort_records(&records, SortKey::Name);

        assert_eq!(sorted[0].id, first.id);
        assert_eq!(sorted[1].id, second.id);
    }

    #[test]
    fn next_contact_sort_puts_undated_last() {
        let records = vec![
            client("Undated One"),
            Client {
                date_of_next_contact: days(10),
                ..client("Later")
            },
            client("Undated Two"),
            Client {
                date_of_next_contact: days(-3),
                ..client("Earlier")
            },
        ];

        assert_eq!(
            names(&sort_records(&records, SortKey::NextContact)),
            vec!["Earlier", "Later", "Undated One", "Undated Two"]
        );
    }

    #[test]
    fn filters_and_keys_parse_from_their_labels() {
        assert_eq!("due-soon".parse::<StatusFilter>().unwrap(), StatusFilter::DueSoon);
        assert_eq!("next-contact".parse::<SortKey>().unwrap(), SortKey::NextContact);
        assert!("soonish".parse::<StatusFilter>().is_err());
        assert_eq!(SortKey::Amount.to_string(), "amount");
    }
}
