use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::{FormError, clean_notes, validate_amount, validate_not_blank};
use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{Amount, ClientName, NonEmptyString, ReviewCount};

fn default_amount() -> String {
    "0.00".to_string()
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for adding a new client.
pub struct AddClientForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub client_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub phone_number: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub billing_address: String,
    #[serde(default)]
    pub test_ad_call_date: Option<NaiveDateTime>,
    /// Defaults to zero when omitted.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub reviews_ordered: Option<i32>,
    #[serde(default = "default_amount")]
    #[validate(custom(function = "validate_amount"))]
    pub amount_paid_on_call: String,
    #[serde(default = "default_amount")]
    #[validate(custom(function = "validate_amount"))]
    pub next_month_agreed_payment: String,
    #[serde(default)]
    pub date_of_next_contact: Option<NaiveDateTime>,
    #[serde(default)]
    pub date_commissions_due: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AddClientForm {
    /// Validates the form and converts it into an insert payload.
    pub fn into_new_client(self) -> Result<NewClient, FormError> {
        self.validate()?;

        let mut new_client = NewClient::new(
            ClientName::new(self.client_name).map_err(FormError::invalid("client_name"))?,
            NonEmptyString::new(self.email).map_err(FormError::invalid("email"))?,
            NonEmptyString::new(self.phone_number).map_err(FormError::invalid("phone_number"))?,
            NonEmptyString::new(self.billing_address)
                .map_err(FormError::invalid("billing_address"))?,
        );
        new_client.test_ad_call_date = self.test_ad_call_date;
        new_client.reviews_ordered = ReviewCount::new(self.reviews_ordered.unwrap_or(0))
            .map_err(FormError::invalid("reviews_ordered"))?;
        new_client.amount_paid_on_call = Amount::new(self.amount_paid_on_call)
            .map_err(FormError::invalid("amount_paid_on_call"))?;
        new_client.next_month_agreed_payment = Amount::new(self.next_month_agreed_payment)
            .map_err(FormError::invalid("next_month_agreed_payment"))?;
        new_client.date_of_next_contact = self.date_of_next_contact;
        new_client.date_commissions_due = self.date_commissions_due;
        new_client.notes = clean_notes(self.notes);

        Ok(new_client)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for editing an existing client. Omitted fields stay unchanged;
/// an explicit `null` clears an optional field.
pub struct EditClientForm {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub client_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub billing_address: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub test_ad_call_date: Option<Option<NaiveDateTime>>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub reviews_ordered: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "validate_amount"))]
    pub amount_paid_on_call: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_amount"))]
    pub next_month_agreed_payment: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_of_next_contact: Option<Option<NaiveDateTime>>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_commissions_due: Option<Option<NaiveDateTime>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl EditClientForm {
    /// Validates the present fields and converts them into a partial update.
    pub fn into_update(self) -> Result<UpdateClient, FormError> {
        self.validate()?;

        let updates = UpdateClient {
            client_name: self
                .client_name
                .map(ClientName::new)
                .transpose()
                .map_err(FormError::invalid("client_name"))?,
            email: self
                .email
                .map(NonEmptyString::new)
                .transpose()
                .map_err(FormError::invalid("email"))?,
            phone_number: self
                .phone_number
                .map(NonEmptyString::new)
                .transpose()
                .map_err(FormError::invalid("phone_number"))?,
            billing_address: self
                .billing_address
                .map(NonEmptyString::new)
                .transpose()
                .map_err(FormError::invalid("billing_address"))?,
            test_ad_call_date: self.test_ad_call_date,
            reviews_ordered: self
                .reviews_ordered
                .map(ReviewCount::new)
                .transpose()
                .map_err(FormError::invalid("reviews_ordered"))?,
            amount_paid_on_call: self
                .amount_paid_on_call
                .map(Amount::new)
                .transpose()
                .map_err(FormError::invalid("amount_paid_on_call"))?,
            next_month_agreed_payment: self
                .next_month_agreed_payment
                .map(Amount::new)
                .transpose()
                .map_err(FormError::invalid("next_month_agreed_payment"))?,
            date_of_next_contact: self.date_of_next_contact,
            date_commissions_due: self.date_commissions_due,
            notes: self.notes.map(clean_notes),
        };

        if updates.is_empty() {
            return Err(FormError::EmptyUpdate);
        }

        Ok(updates)
    }
}
