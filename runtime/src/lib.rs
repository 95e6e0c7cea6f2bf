//! # Todo Lists Runtime
//!
//! Runs list commands against per-session documents.
//!
//! Every call follows the same cycle: load the session from storage (or
//! start an empty one), apply exactly one command, and save the session
//! back. Commands against the same session are serialized so that id
//! assignment never races; different sessions run independently.
//!
//! ## Example
//!
//! ```
//! use todo_lists_core::ListsAction;
//! use todo_lists_runtime::{InMemorySessionStorage, SessionId, SessionRuntime};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime = SessionRuntime::new(InMemorySessionStorage::new());
//! let session = SessionId::new();
//!
//! let outcome = runtime
//!     .send(&session, ListsAction::CreateList { name: "Groceries".to_string() })
//!     .await??;
//! println!("{}", outcome.message());
//!
//! let count = runtime.read(&session, |s| s.lists.len()).await?;
//! assert_eq!(count, 1);
//! # Ok(())
//! # }
//! ```

use crate::metrics::{
    COMMAND_DURATION_SECONDS, COMMANDS_TOTAL, SESSIONS_CREATED_TOTAL, STORAGE_ERRORS_TOTAL,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use todo_lists_core::{CommandError, ListsAction, ListsReducer, Outcome, Reducer};
use tokio::sync::Mutex;

pub mod error;
pub mod metrics;
pub mod session;
pub mod storage;

pub use error::{RuntimeError, StorageError};
pub use session::{Flash, Session, SessionId};
pub use storage::{InMemorySessionStorage, SessionStorage};

/// Result of a command: the outcome, or the reason it was rejected
pub type CommandResult = Result<Outcome, CommandError>;

/// Executes [`ListsAction`]s against sessions held in a [`SessionStorage`]
pub struct SessionRuntime<S> {
    storage: Arc<S>,
    reducer: ListsReducer,
    // Holds an entry only while some call is working on that session
    locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl<S> SessionRuntime<S>
where
    S: SessionStorage,
{
    /// Creates a runtime over the given storage
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_shared_storage(Arc::new(storage))
    }

    /// Creates a runtime over storage shared with other owners
    #[must_use]
    pub fn with_shared_storage(storage: Arc<S>) -> Self {
        Self {
            storage,
            reducer: ListsReducer::new(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the underlying storage
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the mutation lock for a session, creating it on first use
    async fn session_lock(&self, session: &SessionId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(locks.entry(*session).or_default())
    }

    /// Drops the table entry for a session once no other call holds its lock.
    ///
    /// Clones are only handed out under the table lock, so a count of two
    /// (the table's and ours) means nobody else is waiting.
    async fn release_lock(&self, session: &SessionId, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        if Arc::strong_count(&lock) == 2 {
            locks.remove(session);
        }
    }

    /// Runs `f` while holding the session's lock, then releases the entry.
    async fn with_session_lock<T, F, Fut>(&self, session: &SessionId, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        let lock = self.session_lock(session).await;
        let result = {
            let _guard = lock.lock().await;
            tracing::trace!("Acquired session lock");
            f().await
        };
        self.release_lock(session, lock).await;
        result
    }

    async fn load_or_create(&self, session: &SessionId) -> Result<Session, RuntimeError> {
        match self.storage.load(session).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => {
                tracing::debug!("Starting new session");
                ::metrics::counter!(SESSIONS_CREATED_TOTAL).increment(1);
                Ok(Session::new())
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load session");
                ::metrics::counter!(STORAGE_ERRORS_TOTAL, "op" => "load").increment(1);
                Err(error.into())
            }
        }
    }

    async fn persist(&self, session: &SessionId, document: &Session) -> Result<(), RuntimeError> {
        self.storage.save(session, document).await.map_err(|error| {
            tracing::error!(error = %error, "Failed to save session");
            ::metrics::counter!(STORAGE_ERRORS_TOTAL, "op" => "save").increment(1);
            RuntimeError::from(error)
        })
    }

    /// Applies one command to a session and saves the result.
    ///
    /// An accepted command's confirmation becomes the session's flash; a
    /// rejected command leaves any pending flash as it was.
    ///
    /// # Returns
    ///
    /// The inner result is the domain outcome the caller branches on; the
    /// session is saved whether the command was accepted or rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] if the session cannot be loaded or saved.
    #[tracing::instrument(
        skip_all,
        fields(session = %session, action = action.name()),
        name = "session_send"
    )]
    pub async fn send(
        &self,
        session: &SessionId,
        action: ListsAction,
    ) -> Result<CommandResult, RuntimeError> {
        self.with_session_lock(session, || self.apply(session, action))
            .await
    }

    async fn apply(
        &self,
        session: &SessionId,
        action: ListsAction,
    ) -> Result<CommandResult, RuntimeError> {
        let mut document = self.load_or_create(session).await?;
        let action_name = action.name();

        let start = Instant::now();
        let result = self.reducer.reduce(&mut document.lists, action);
        ::metrics::histogram!(COMMAND_DURATION_SECONDS, "action" => action_name)
            .record(start.elapsed().as_secs_f64());

        let outcome_label = match &result {
            Ok(outcome) => {
                tracing::info!(list_id = %outcome.list_id(), "Command accepted");
                "accepted"
            }
            Err(error) if error.is_validation() => {
                tracing::info!(error = %error, "Command rejected");
                "invalid"
            }
            Err(error) if error.is_not_found() => {
                tracing::info!(error = %error, "Command target missing");
                "not_found"
            }
            Err(error) => {
                tracing::warn!(error = %error, "Command refused");
                "exhausted"
            }
        };
        ::metrics::counter!(
            COMMANDS_TOTAL,
            "action" => action_name,
            "outcome" => outcome_label
        )
        .increment(1);

        if let Ok(outcome) = &result {
            document.record(outcome);
        }
        self.persist(session, &document).await?;

        Ok(result)
    }

    /// Reads a session through a closure without saving it.
    ///
    /// A session that has never been saved reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] if the session cannot be loaded.
    pub async fn read<F, T>(&self, session: &SessionId, f: F) -> Result<T, RuntimeError>
    where
        F: FnOnce(&Session) -> T,
    {
        let document = self.storage.load(session).await?.unwrap_or_default();
        Ok(f(&document))
    }

    /// Removes and returns the session's flash message.
    ///
    /// The session is only saved when a flash was actually present, and
    /// a session that was never saved is not locked at all.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] if the session cannot be loaded or saved.
    pub async fn take_flash(&self, session: &SessionId) -> Result<Option<Flash>, RuntimeError> {
        match self.storage.load(session).await? {
            Some(document) if document.flash.is_some() => {}
            _ => return Ok(None),
        }

        self.with_session_lock(session, || async {
            // Reload: another command may have replaced the flash meanwhile
            let Some(mut document) = self.storage.load(session).await? else {
                return Ok(None);
            };
            let flash = document.take_flash();
            if flash.is_some() {
                self.persist(session, &document).await?;
            }
            Ok::<_, RuntimeError>(flash)
        })
        .await
    }

    /// Number of sessions with a live entry in the lock table
    #[cfg(test)]
    async fn tracked_locks(&self) -> usize {
        self.locks.lock().await.len()
    }
}

impl<S> std::fmt::Debug for SessionRuntime<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRuntime").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn runtime() -> SessionRuntime<InMemorySessionStorage> {
        SessionRuntime::new(InMemorySessionStorage::new())
    }

    #[tokio::test]
    async fn anonymous_page_views_leave_no_lock_entries() {
        let runtime = runtime();

        for _ in 0..1000 {
            let session = SessionId::new();
            let lists = runtime.read(&session, |s| s.lists.len()).await.unwrap();
            assert_eq!(lists, 0);
            assert_eq!(runtime.take_flash(&session).await.unwrap(), None);
        }

        assert_eq!(runtime.tracked_locks().await, 0);
        assert!(runtime.storage().is_empty().await);
    }

    #[tokio::test]
    async fn lock_entry_released_after_commands() {
        let runtime = runtime();
        let session = SessionId::new();

        runtime
            .send(
                &session,
                ListsAction::CreateList {
                    name: "Groceries".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(runtime.tracked_locks().await, 0);

        assert!(runtime.take_flash(&session).await.unwrap().is_some());
        assert_eq!(runtime.tracked_locks().await, 0);
    }

    #[tokio::test]
    async fn lock_entries_released_after_concurrent_commands() {
        let runtime = Arc::new(runtime());
        let session = SessionId::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let runtime = Arc::clone(&runtime);
                tokio::spawn(async move {
                    runtime
                        .send(
                            &session,
                            ListsAction::CreateList {
                                name: format!("List {i}"),
                            },
                        )
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap().unwrap();
        }

        assert_eq!(runtime.tracked_locks().await, 0);
        let count = runtime.read(&session, |s| s.lists.len()).await.unwrap();
        assert_eq!(count, 20);
    }
}
