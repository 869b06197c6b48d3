use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Store for contact documents.
///
/// Provides abstraction over the contact collection, enabling different
/// implementations (in-memory, JSON file, test mocks).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts, in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// The contact whose name equals `name` exactly, if any.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Persist a new contact under a freshly generated id.
    async fn create(&self, contact: NewContact) -> StoreResult<Contact>;

    /// Replace name, email and phone of the contact with the given id.
    ///
    /// Fails with `StoreError::NotFound` when no such contact exists.
    async fn update(&self, id: &ContactId, contact: NewContact) -> StoreResult<()>;

    /// Remove the contact with the given name. Nothing happens if none matches.
    async fn delete_by_name(&self, name: &str) -> StoreResult<()>;
}
