use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use crate::store::traits::ContactStore;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Contact store kept entirely in process memory.
///
/// Contacts live in a vector so that `find_all` returns them in insertion
/// order. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Number of contacts currently stored.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(find_by_name(&contacts, name).cloned())
    }

    async fn create(&self, contact: NewContact) -> StoreResult<Contact> {
        let mut contacts = self.contacts.write().await;
        let created = insert(&mut contacts, contact);
        debug!(id = %created.id, "Contact inserted");
        Ok(created)
    }

    async fn update(&self, id: &ContactId, contact: NewContact) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        replace(&mut contacts, id, contact)?;
        debug!(id = %id, "Contact updated");
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        let removed = remove_by_name(&mut contacts, name);
        debug!(name = %name, removed = removed.is_some(), "Contact delete by name");
        Ok(())
    }
}

// Collection operations shared by the in-memory and file-backed stores.

pub(super) fn find_by_name<'a>(contacts: &'a [Contact], name: &str) -> Option<&'a Contact> {
    contacts.iter().find(|c| c.name == name)
}

pub(super) fn insert(contacts: &mut Vec<Contact>, fields: NewContact) -> Contact {
    let contact = Contact::new(ContactId::generate(), fields);
    contacts.push(contact.clone());
    contact
}

/// Replace the fields of `id`, returning the previous version.
pub(super) fn replace(
    contacts: &mut [Contact],
    id: &ContactId,
    fields: NewContact,
) -> StoreResult<Contact> {
    let existing = contacts
        .iter_mut()
        .find(|c| &c.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

    let previous = existing.clone();
    existing.apply(fields);
    Ok(previous)
}

/// Remove the first contact named `name`, returning its position and value.
pub(super) fn remove_by_name(contacts: &mut Vec<Contact>, name: &str) -> Option<(usize, Contact)> {
    let index = contacts.iter().position(|c| c.name == name)?;
    Some((index, contacts.remove(index)))
}
