//! Contact record and the form payloads that create and change it.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A persisted contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Identifier assigned by the store on creation
    pub id: ContactId,

    /// Display name, unique across the collection
    pub name: String,

    /// Email address
    pub email: String,

    /// Mobile phone number
    pub phone: String,
}

impl Contact {
    /// Build a contact from its parts.
    pub fn new(id: ContactId, fields: NewContact) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Replace every mutable field, keeping the id.
    pub fn apply(&mut self, fields: NewContact) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}

/// The writable fields of a contact, as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Body of the "add contact" form.
///
/// The legacy field names `nama` and `nohp` are accepted as aliases. Missing
/// fields become empty strings so that they fail validation with a
/// field-tagged message instead of failing extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactForm {
    #[serde(alias = "nama")]
    pub name: String,

    pub email: String,

    #[serde(alias = "nohp")]
    pub phone: String,
}

impl From<ContactForm> for NewContact {
    fn from(form: ContactForm) -> Self {
        NewContact::new(form.name, form.email, form.phone)
    }
}

/// Body of the "edit contact" form.
///
/// `old_name` is the name the contact had when the form was rendered; it
/// exempts the contact from clashing with itself on the uniqueness check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UpdateContactForm {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "oldName", alias = "oldNama")]
    pub old_name: String,

    #[serde(alias = "nama")]
    pub name: String,

    pub email: String,

    #[serde(alias = "nohp")]
    pub phone: String,
}

impl UpdateContactForm {
    /// The replacement field values carried by this form.
    pub fn fields(&self) -> NewContact {
        NewContact::new(&self.name, &self.email, &self.phone)
    }
}

/// Body of the delete request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DeleteContactForm {
    #[serde(alias = "nama")]
    pub name: String,
}
