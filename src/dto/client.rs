//! DTOs shaped for the client list.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::derivation::{SortKey, StatusFilter, parse_amount};
use crate::domain::client::Client;
use crate::domain::status::{DateStatus, classify_date};
use crate::domain::types::ClientId;
use crate::dto::{format_currency, truncate_notes};

/// Query parameters accepted by the client list service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientListQuery {
    /// Optional search string entered by the user.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortKey,
}

impl ClientListQuery {
    /// Whether the query narrows the list at all. Any non-empty search text
    /// counts, whitespace included, since it is matched verbatim.
    pub fn is_filtered(&self) -> bool {
        !self.search_text().is_empty() || self.status != StatusFilter::All
    }

    /// The search text exactly as entered; empty when absent.
    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}

/// Card-level view of a client with its derived date statuses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub id: ClientId,
    pub client_name: String,
    pub email: String,
    pub phone_number: String,
    pub amount_paid: String,
    pub next_payment: String,
    pub reviews_ordered: i64,
    pub test_ad_call_date: Option<NaiveDateTime>,
    pub date_of_next_contact: Option<NaiveDateTime>,
    pub next_contact_status: DateStatus,
    pub date_commissions_due: Option<NaiveDateTime>,
    pub commission_status: DateStatus,
    pub next_contact_badge: &'static str,
    pub commission_badge: &'static str,
    pub notes_excerpt: Option<String>,
}

impl ClientSummary {
    pub fn new(client: &Client, now: NaiveDateTime) -> Self {
        let next_contact_status = classify_date(client.date_of_next_contact, now);
        let commission_status = classify_date(client.date_commissions_due, now);

        Self {
            id: client.id,
            client_name: client.client_name.as_str().to_string(),
            email: client.email.clone(),
            phone_number: client.phone_number.clone(),
            amount_paid: format_currency(parse_amount(client.amount_paid_on_call.as_deref())),
            next_payment: format_currency(parse_amount(
                client.next_month_agreed_payment.as_deref(),
            )),
            reviews_ordered: client.reviews(),
            test_ad_call_date: client.test_ad_call_date,
            date_of_next_contact: client.date_of_next_contact,
            next_contact_status,
            date_commissions_due: client.date_commissions_due,
            commission_status,
            next_contact_badge: next_contact_status.badge_variant(),
            commission_badge: commission_status.badge_variant(),
            notes_excerpt: client.notes.as_deref().map(truncate_notes),
        }
    }
}

/// Data required to render the client list.
#[derive(Debug, Serialize)]
pub struct ClientListData {
    pub clients: Vec<ClientSummary>,
    /// Number of clients after search and filtering.
    pub total: usize,
    /// Whether search or status narrowed the list; distinguishes "no matches"
    /// from "no clients yet" when `clients` is empty.
    pub filtered: bool,
}
