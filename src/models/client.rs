use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};
use crate::domain::types::{ClientId, ClientName, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub seq: i32,
    pub id: String,
    pub client_name: String,
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub id: &'a str,
    pub client_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub billing_address: &'a str,
    pub test_ad_call_date: Option<NaiveDateTime>,
    pub reviews_ordered: i32,
    pub amount_paid_on_call: &'a str,
    pub next_month_agreed_payment: &'a str,
    pub date_of_next_contact: Option<NaiveDateTime>,
    pub date_commissions_due: Option<NaiveDateTime>,
    pub notes: Option<&'a str>,
}

impl<'a> NewClient<'a> {
    /// Builds the row for `client` stored under the freshly generated `id`.
    pub fn new(id: &'a str, client: &'a DomainNewClient) -> Self {
        Self {
            id,
            client_name: client.client_name.as_str(),
            email: client.email.as_str(),
            phone_number: client.phone_number.as_str(),
            billing_address: client.billing_address.as_str(),
            test_ad_call_date: client.test_ad_call_date,
            reviews_ordered: client.reviews_ordered.get(),
            amount_paid_on_call: client.amount_paid_on_call.as_str(),
            next_month_agreed_payment: client.next_month_agreed_payment.as_str(),
            date_of_next_contact: client.date_of_next_contact,
            date_commissions_due: client.date_commissions_due,
            notes: client.notes.as_deref(),
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record. `None` fields are skipped.
pub struct UpdateClient<'a> {
    pub client_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub billing_address: Option<&'a str>,
    pub test_ad_call_date: Option<Option<NaiveDateTime>>,
    pub reviews_ordered: Option<i32>,
    pub amount_paid_on_call: Option<&'a str>,
    pub next_month_agreed_payment: Option<&'a str>,
    pub date_of_next_contact: Option<Option<NaiveDateTime>>,
    pub date_commissions_due: Option<Option<NaiveDateTime>>,
    pub notes: Option<Option<&'a str>>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: client.id.parse::<ClientId>()?,
            client_name: ClientName::new(client.client_name)?,
            email: client.email,
            phone_number: client.phone_number,
            billing_address: client.billing_address,
            test_ad_call_date: client.test_ad_call_date,
            reviews_ordered: client.reviews_ordered,
            amount_paid_on_call: client.amount_paid_on_call,
            next_month_agreed_payment: client.next_month_agreed_payment,
            date_of_next_contact: client.date_of_next_contact,
            date_commissions_due: client.date_commissions_due,
            notes: client.notes,
        })
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            client_name: client.client_name.as_ref().map(|v| v.as_str()),
            email: client.email.as_ref().map(|v| v.as_str()),
            phone_number: client.phone_number.as_ref().map(|v| v.as_str()),
            billing_address: client.billing_address.as_ref().map(|v| v.as_str()),
            test_ad_call_date: client.test_ad_call_date,
            reviews_ordered: client.reviews_ordered.map(|v| v.get()),
            amount_paid_on_call: client.amount_paid_on_call.as_ref().map(|v| v.as_str()),
            next_month_agreed_payment: client
                .next_month_agreed_payment
                .as_ref()
                .map(|v| v.as_str()),
            date_of_next_contact: client.date_of_next_contact,
            date_commissions_due: client.date_commissions_due,
            notes: client.notes.as_ref().map(|v| v.as_deref()),
        }
    }
}
