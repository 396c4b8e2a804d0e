use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, ClientId, ClientName, NonEmptyString, ReviewCount};

/// A client tracked by the ledger.
///
/// Monetary fields keep the stored decimal string as-is; readers coerce them
/// with [`crate::derivation::parse_amount`] and never reject a malformed
/// value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub client_name: ClientName,
    pub email: String,
    pub phone_number: String,
    pub billing_address: String,
    pub test_ad_call_date: Option<NaiveDateTime>,
    pub reviews_ordered: Option<i32>,
    pub amount_paid_on_call: Option<String>,
    pub next_month_agreed_payment: Option<String>,
    pub date_of_next_contact: Option<NaiveDateTime>,
    pub date_commissions_due: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl Client {
    /// Reviews ordered, with an absent value counted as zero.
    pub fn reviews(&self) -> i64 {
        i64::from(self.reviews_ordered.unwrap_or(0).max(0))
    }
}

/// Validated payload for inserting a client. The identifier is assigned by
/// the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub client_name: ClientName,
    pub email: NonEmptyString,
    pub phone_number: NonEmptyString,
    pub billing_address: NonEmptyString,
    pub test_ad_call_date: Option<NaiveDateTime>,
    pub reviews_ordered: ReviewCount,
    pub amount_paid_on_call: Amount,
    pub next_month_agreed_payment: Amount,
    pub date_of_next_contact: Option<NaiveDateTime>,
    pub date_commissions_due: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        client_name: ClientName,
        email: NonEmptyString,
        phone_number: NonEmptyString,
        billing_address: NonEmptyString,
    ) -> Self {
        Self {
            client_name,
            email,
            phone_number,
            billing_address,
            test_ad_call_date: None,
            reviews_ordered: ReviewCount::default(),
            amount_paid_on_call: Amount::zero(),
            next_month_agreed_payment: Amount::zero(),
            date_of_next_contact: None,
            date_commissions_due: None,
            notes: None,
        }
    }
}

/// Partial set of fields merged into an existing client.
///
/// `None` leaves the stored value untouched. For nullable columns the inner
/// `Option` distinguishes "clear" (`Some(None)`) from "set".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateClient {
    pub client_name: Option<ClientName>,
    pub email: Option<NonEmptyString>,
    pub phone_number: Option<NonEmptyString>,
    pub billing_address: Option<NonEmptyString>,
    pub test_ad_call_date: Option<Option<NaiveDateTime>>,
    pub reviews_ordered: Option<ReviewCount>,
    pub amount_paid_on_call: Option<Amount>,
    pub next_month_agreed_payment: Option<Amount>,
    pub date_of_next_contact: Option<Option<NaiveDateTime>>,
    pub date_commissions_due: Option<Option<NaiveDateTime>>,
    pub notes: Option<Option<String>>,
}

impl UpdateClient {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the update to an in-memory client, mirroring the store merge.
    pub fn apply_to(&self, client: &mut Client) {
        if let Some(name) = &self.client_name {
            client.client_name = name.clone();
        }
        if let Some(email) = &self.email {
            client.email = email.as_str().to_string();
        }
        if let Some(phone) = &self.phone_number {
            client.phone_number = phone.as_str().to_string();
        }
        if let Some(address) = &self.billing_address {
            client.billing_address = address.as_str().to_string();
        }
        if let Some(date) = self.test_ad_call_date {
            client.test_ad_call_date = date;
        }
        if let Some(reviews) = self.reviews_ordered {
            client.reviews_ordered = Some(reviews.get());
        }
        if let Some(amount) = &self.amount_paid_on_call {
            client.amount_paid_on_call = Some(amount.as_str().to_string());
        }
        if let Some(amount) = &self.next_month_agreed_payment {
            client.next_month_agreed_payment = Some(amount.as_str().to_string());
        }
        if let Some(date) = self.date_of_next_contact {
            client.date_of_next_contact = date;
        }
        if let Some(date) = self.date_commissions_due {
            client.date_commissions_due = date;
        }
        if let Some(notes) = &self.notes {
            client.notes = notes.clone();
        }
    }
}
