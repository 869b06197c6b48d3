//! Contact workflow.
//!
//! Validate-then-mutate orchestration for contact writes, plus the read
//! paths the pages need. Every mutating operation evaluates all rules
//! before touching the store; a rejected request never writes.

use crate::domain::{ContactId, MobileFormat};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactForm, NewContact, UpdateContactForm};
use crate::session::{FlashStore, SessionId};
use crate::store::ContactStore;
use crate::validation::{validate_contact, FieldError};
use std::sync::Arc;
use tracing::{info, warn};

pub const CREATED_MESSAGE: &str = "Data contact berhasil ditambahkan!";
pub const UPDATED_MESSAGE: &str = "Data contact berhasil diubah!";
pub const DELETED_MESSAGE: &str = "Data contact berhasil dihapus!";

/// Result of a validated write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<F> {
    /// The change was persisted and a flash message queued; the caller
    /// should redirect to the contact list.
    Applied,

    /// Validation failed; nothing was written.
    Rejected(Rejection<F>),
}

impl<F> Outcome<F> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Itemized validation failures together with the submitted input, so the
/// form can be re-rendered as the user filled it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection<F> {
    pub errors: Vec<FieldError>,
    pub input: F,
}

/// The contact list page's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListing {
    pub contacts: Vec<Contact>,
    pub messages: Vec<String>,
}

/// Orchestrates validation and persistence of contacts.
pub struct ContactWorkflow {
    store: Arc<dyn ContactStore>,
    flash: FlashStore,
    mobile: MobileFormat,
}

impl ContactWorkflow {
    /// Create a new workflow over `store`, reporting success through `flash`
    /// and checking phone numbers against `mobile`.
    pub fn new(store: Arc<dyn ContactStore>, flash: FlashStore, mobile: MobileFormat) -> Self {
        Self {
            store,
            flash,
            mobile,
        }
    }

    pub fn store(&self) -> &Arc<dyn ContactStore> {
        &self.store
    }

    pub fn mobile_format(&self) -> &MobileFormat {
        &self.mobile
    }

    /// All contacts plus the session's pending flash messages, which are
    /// consumed by this call.
    pub async fn list(&self, session: &SessionId) -> StoreResult<ContactListing> {
        let contacts = self.store.find_all().await?;
        let messages = self.flash.take(session);
        Ok(ContactListing { contacts, messages })
    }

    /// Contact shown on the detail page; `None` is a valid answer.
    pub async fn detail(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.store.find_by_name(name).await
    }

    /// Contact pre-filling the edit form; `None` is a valid answer.
    pub async fn edit_form(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.store.find_by_name(name).await
    }

    /// Validate and persist a new contact.
    pub async fn create(
        &self,
        session: &SessionId,
        form: ContactForm,
    ) -> StoreResult<Outcome<ContactForm>> {
        let fields = NewContact::from(form.clone());

        let errors = validate_contact(self.store.as_ref(), &fields, None, &self.mobile).await?;
        if !errors.is_empty() {
            info!(name = %form.name, errors = errors.len(), "Contact create rejected");
            return Ok(Outcome::Rejected(Rejection {
                errors,
                input: form,
            }));
        }

        let contact = self.store.create(fields).await?;
        info!(id = %contact.id, name = %contact.name, "Contact created");

        self.flash.push(session, CREATED_MESSAGE);
        Ok(Outcome::Applied)
    }

    /// Validate and apply an edit.
    ///
    /// The contact's previous name (`form.old_name`) is exempt from the
    /// uniqueness rule. A form whose id does not match a stored contact
    /// fails with `StoreError::NotFound`.
    pub async fn update(
        &self,
        session: &SessionId,
        form: UpdateContactForm,
    ) -> StoreResult<Outcome<UpdateContactForm>> {
        let fields = form.fields();

        let errors = validate_contact(
            self.store.as_ref(),
            &fields,
            Some(form.old_name.as_str()),
            &self.mobile,
        )
        .await?;
        if !errors.is_empty() {
            info!(id = %form.id, name = %form.name, errors = errors.len(), "Contact update rejected");
            return Ok(Outcome::Rejected(Rejection {
                errors,
                input: form,
            }));
        }

        let id = ContactId::new(form.id.as_str()).map_err(|_| {
            warn!("Contact update without an id");
            StoreError::NotFound(form.id.clone())
        })?;

        self.store.update(&id, fields).await?;
        info!(id = %id, name = %form.name, "Contact updated");

        self.flash.push(session, UPDATED_MESSAGE);
        Ok(Outcome::Applied)
    }

    /// Remove the contact called `name`.
    ///
    /// Succeeds, with the usual flash message, even when no contact has
    /// that name.
    pub async fn delete(&self, session: &SessionId, name: &str) -> StoreResult<()> {
        self.store.delete_by_name(name).await?;
        info!(name = %name, "Contact deleted");

        self.flash.push(session, DELETED_MESSAGE);
        Ok(())
    }
}
