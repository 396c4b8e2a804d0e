use chrono::NaiveDateTime;

use crate::domain::client::Client;
use crate::domain::status::{DateStatus, classify_date, within_due_soon_window};

/// Clients grouped by the urgency of their next contact and commission dates.
///
/// The partitions are complete and keep snapshot order; callers decide how
/// much of each to show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrgencyPartition {
    pub overdue: Vec<Client>,
    pub due_soon_contacts: Vec<Client>,
    pub due_soon_commissions: Vec<Client>,
}

/// Whether either tracked date of the client is overdue.
pub fn is_overdue(client: &Client, now: NaiveDateTime) -> bool {
    classify_date(client.date_of_next_contact, now) == DateStatus::Overdue
        || classify_date(client.date_commissions_due, now) == DateStatus::Overdue
}

fn due_soon_in_window(date: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match date {
        Some(date) => {
            classify_date(Some(date), now) == DateStatus::DueSoon
                && within_due_soon_window(date, now)
        }
        None => false,
    }
}

pub fn partition_by_urgency(records: &[Client], now: NaiveDateTime) -> UrgencyPartition {
    let mut partition = UrgencyPartition::default();

    for client in records {
        if is_overdue(client, now) {
            partition.overdue.push(client.clone());
        }
        if due_soon_in_window(client.date_of_next_contact, now) {
            partition.due_soon_contacts.push(client.clone());
        }
        if due_soon_in_window(client.date_commissions_due, now) {
            partition.due_soon_commissions.push(client.clone());
        }
    }

    partition
}
