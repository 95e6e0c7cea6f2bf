//! HTTP shell for the todo-lists service.
//!
//! Handlers are thin: they read the session cookie, turn the request into
//! a [`ListsAction`](todo_lists_core::ListsAction), hand it to the session
//! runtime, and map the outcome to a response.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** the session cookie, path ids, and JSON body
//! 3. **Build Action** with trimmed names
//! 4. **Send** the action through the session runtime
//! 5. **Map result** to a JSON body or an [`AppError`]
//!
//! # Example
//!
//! ```
//! use todo_lists_runtime::{InMemorySessionStorage, SessionRuntime};
//! use todo_lists_web::{AppState, build_router};
//!
//! let state = AppState::new(
//!     SessionRuntime::new(InMemorySessionStorage::new()),
//!     "todo_session",
//! );
//! let app = build_router(state);
//! # let _ = app;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::SessionCookie;
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
