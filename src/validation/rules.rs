use crate::domain::{is_valid_email, is_valid_mobile, MobileFormat};
use crate::error::StoreResult;
use crate::models::NewContact;
use crate::store::ContactStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const DUPLICATE_NAME_MESSAGE: &str = "Nama contact sudah digunakan";
pub const INVALID_EMAIL_MESSAGE: &str = "Email tidak valid!";
pub const INVALID_PHONE_MESSAGE: &str = "No HP tidak valid!";

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed rule, tagged with the field it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Whether `name` may be used by the contact being written.
///
/// Returns false iff a live contact already owns `name` and `name` is not
/// `excluding_name`. The update path passes the contact's previous name as
/// `excluding_name` so that saving without renaming does not clash with
/// the contact itself.
pub async fn is_name_available(
    store: &dyn ContactStore,
    name: &str,
    excluding_name: Option<&str>,
) -> StoreResult<bool> {
    if excluding_name == Some(name) {
        return Ok(true);
    }
    Ok(store.find_by_name(name).await?.is_none())
}

/// Evaluate every rule against `fields` and collect the failures.
///
/// All rules run; nothing short-circuits. Failures come back in form order
/// (name, email, phone). An empty vector means the write may proceed.
pub async fn validate_contact(
    store: &dyn ContactStore,
    fields: &NewContact,
    excluding_name: Option<&str>,
    mobile: &MobileFormat,
) -> StoreResult<Vec<FieldError>> {
    let name_available = is_name_available(store, &fields.name, excluding_name).await?;

    let mut errors = Vec::new();
    if !name_available {
        errors.push(FieldError::new(Field::Name, DUPLICATE_NAME_MESSAGE));
    }
    if !is_valid_email(&fields.email) {
        errors.push(FieldError::new(Field::Email, INVALID_EMAIL_MESSAGE));
    }
    if !is_valid_mobile(&fields.phone, mobile) {
        errors.push(FieldError::new(Field::Phone, INVALID_PHONE_MESSAGE));
    }

    if !errors.is_empty() {
        debug!(
            name = %fields.name,
            failed = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            "Contact validation failed"
        );
    }

    Ok(errors)
}
