//! Write-boundary forms: everything entering the store passes through here.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::{
    MAX_AMOUNT_INTEGER_DIGITS, TypeConstraintError, fits_amount_precision, is_amount_format,
};

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: TypeConstraintError,
    },

    #[error("no fields to update")]
    EmptyUpdate,
}

impl FormError {
    /// Names of the offending fields, sorted.
    pub fn fields(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
            FormError::InvalidField { field, .. } => vec![(*field).to_string()],
            FormError::EmptyUpdate => Vec::new(),
        }
    }

    fn invalid(field: &'static str) -> impl FnOnce(TypeConstraintError) -> FormError {
        move |source| FormError::InvalidField { field, source }
    }
}

/// Rejects strings that are empty once surrounding whitespace is removed.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be empty".into());
        return Err(error);
    }
    Ok(())
}

fn validate_amount(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if !is_amount_format(value) {
        let mut error = ValidationError::new("amount");
        error.message = Some("Invalid amount format".into());
        return Err(error);
    }
    if !fits_amount_precision(value) {
        let mut error = ValidationError::new("amount_too_large");
        error.message = Some(
            format!("Amount exceeds {MAX_AMOUNT_INTEGER_DIGITS} integer digits").into(),
        );
        return Err(error);
    }
    Ok(())
}

/// Sanitizes free text notes; blank notes are dropped.
fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| ammonia::clean(&n).trim().to_string())
        .filter(|n| !n.is_empty())
}
