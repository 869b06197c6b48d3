use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use crate::store::memory;
use crate::store::traits::ContactStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Contact store backed by a JSON document file.
///
/// The whole collection is loaded at open time and kept in memory. Every
/// mutation rewrites the file through a temporary sibling followed by a
/// rename, so readers of the file never see a half-written collection. A
/// failed write rolls the in-memory change back before the error is returned.
#[derive(Debug)]
pub struct JsonFileContactStore {
    path: PathBuf,
    contacts: RwLock<Vec<Contact>>,
}

impl JsonFileContactStore {
    /// Open the collection at `path`. A missing file is an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let contacts: Vec<Contact> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            contacts = contacts.len(),
            "Opened contact document file"
        );

        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, contacts: &[Contact]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(contacts)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        // The data must be on disk before the rename makes it visible.
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Contact file written");
        Ok(())
    }
}

#[async_trait]
impl ContactStore for JsonFileContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(memory::find_by_name(&contacts, name).cloned())
    }

    async fn create(&self, contact: NewContact) -> StoreResult<Contact> {
        let mut contacts = self.contacts.write().await;
        let created = memory::insert(&mut contacts, contact);

        if let Err(e) = self.persist(&contacts).await {
            error!(error = %e, "Failed to persist new contact");
            contacts.pop();
            return Err(e);
        }

        Ok(created)
    }

    async fn update(&self, id: &ContactId, contact: NewContact) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        let previous = memory::replace(&mut contacts, id, contact)?;

        if let Err(e) = self.persist(&contacts).await {
            error!(error = %e, id = %id, "Failed to persist contact update");
            if let Some(slot) = contacts.iter_mut().find(|c| &c.id == id) {
                *slot = previous;
            }
            return Err(e);
        }

        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        let Some((index, removed)) = memory::remove_by_name(&mut contacts, name) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&contacts).await {
            error!(error = %e, name = %name, "Failed to persist contact removal");
            contacts.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }
}
