//! Error types for session storage and the session runtime.

use crate::session::SessionId;
use thiserror::Error;

/// Errors from a [`crate::storage::SessionStorage`] backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// A session could not be serialized
    #[error("failed to encode session {session}: {source}")]
    Encode {
        /// Session being saved
        session: SessionId,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// A stored session document could not be read back
    #[error("failed to decode session {session}: {source}")]
    Decode {
        /// Session being loaded
        session: SessionId,
        /// Underlying deserializer error
        #[source]
        source: serde_json::Error,
    },

    /// The backend itself failed
    #[error("session backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur while running a command against a session
///
/// Domain rejections (invalid names, missing lists) are not errors at this
/// level; they are returned as the inner result of
/// [`crate::SessionRuntime::send`].
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Loading or saving the session failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}
