//! Session storage backends.
//!
//! The runtime never keeps a session between calls. It loads the document
//! before a command and saves it afterwards, so any backend that can store
//! a serialized [`Session`] per [`SessionId`] will do.

use crate::error::StorageError;
use crate::session::{Session, SessionId};
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::RwLock;

/// Load/save boundary for session documents
pub trait SessionStorage: Send + Sync {
    /// Loads a session. Returns `Ok(None)` if the session has never been
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails or the stored document
    /// cannot be decoded.
    fn load(
        &self,
        id: &SessionId,
    ) -> impl Future<Output = Result<Option<Session>, StorageError>> + Send;

    /// Saves a session, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session cannot be encoded or the
    /// backend fails.
    fn save(
        &self,
        id: &SessionId,
        session: &Session,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// In-memory storage keeping each session as a JSON document
///
/// Sessions are encoded on save and decoded on load, the same cycle a
/// cookie-backed session goes through on every request.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    documents: RwLock<HashMap<SessionId, String>>,
}

impl InMemorySessionStorage {
    /// Creates an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if no session has been saved
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Returns the raw stored document for a session
    pub async fn document(&self, id: &SessionId) -> Option<String> {
        self.documents.read().await.get(id).cloned()
    }

    /// Stores a raw document for a session, bypassing encoding
    pub async fn insert_document(&self, id: SessionId, document: String) {
        self.documents.write().await.insert(id, document);
    }
}

impl SessionStorage for InMemorySessionStorage {
    async fn load(&self, id: &SessionId) -> Result<Option<Session>, StorageError> {
        let documents = self.documents.read().await;
        let Some(document) = documents.get(id) else {
            return Ok(None);
        };

        serde_json::from_str(document)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                session: *id,
                source,
            })
    }

    async fn save(&self, id: &SessionId, session: &Session) -> Result<(), StorageError> {
        let document = serde_json::to_string(session).map_err(|source| StorageError::Encode {
            session: *id,
            source,
        })?;
        self.documents.write().await.insert(*id, document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_unknown_session_is_none() {
        let storage = InMemorySessionStorage::new();
        assert!(storage.load(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let storage = InMemorySessionStorage::new();
        let id = SessionId::new();
        let mut session = Session::new();
        session.lists.add_list("Groceries".to_string()).unwrap();

        storage.save(&id, &session).await.unwrap();

        assert_eq!(storage.load(&id).await.unwrap(), Some(session));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn corrupt_document_is_decode_error() {
        let storage = InMemorySessionStorage::new();
        let id = SessionId::new();
        storage.insert_document(id, "{not json".to_string()).await;

        let err = storage.load(&id).await.unwrap_err();
        assert!(matches!(err, StorageError::Decode { session, .. } if session == id));
    }
}
