use async_trait::async_trait;
use contact_app::domain::ContactId;
use contact_app::error::{StoreError, StoreResult};
use contact_app::models::{Contact, NewContact};
use contact_app::store::ContactStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Provides an in-memory implementation of ContactStore that can be seeded
/// with test data, tracks method calls for verification, and can be told to
/// behave like an unreachable database.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact with a fixed id.
    pub fn add_contact(&self, id: &str, name: &str, email: &str, phone: &str) -> Contact {
        let contact = Contact::new(ContactId::new(id).unwrap(), NewContact::new(name, email, phone));
        self.contacts.lock().unwrap().push(contact.clone());
        contact
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Number of calls that could have changed data.
    pub fn write_calls(&self) -> usize {
        self.get_call_count("create") + self.get_call_count("update") + self.get_call_count("delete_by_name")
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;
        Ok(self.contacts())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_name")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, contact: NewContact) -> StoreResult<Contact> {
        self.track_call("create")?;
        let mut contacts = self.contacts.lock().unwrap();
        let created = Contact::new(ContactId::new((contacts.len() + 1).to_string()).unwrap(), contact);
        contacts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &ContactId, contact: NewContact) -> StoreResult<()> {
        self.track_call("update")?;
        let mut contacts = self.contacts.lock().unwrap();
        let existing = contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        existing.apply(contact);
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<()> {
        self.track_call("delete_by_name")?;
        let mut contacts = self.contacts.lock().unwrap();
        if let Some(index) = contacts.iter().position(|c| c.name == name) {
            contacts.remove(index);
        }
        Ok(())
    }
}
