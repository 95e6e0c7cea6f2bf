//! # Todo Lists Core
//!
//! Lists, todos and the rules that govern them.
//!
//! This crate is the functional core of the todo-lists service. It holds no
//! process-wide state and performs no I/O: a session's [`ListStore`] is an
//! ordinary value that the caller loads, passes in, and saves afterwards.
//!
//! ## Modules
//!
//! - [`types`]: `List`, `Todo`, their ids, and id assignment
//! - [`store`]: create/read/update/delete over a session's lists
//! - [`validation`]: list and todo name rules
//! - [`presentation`]: derived completion status and display ordering
//! - [`reducer`]: validated commands with user-facing outcomes
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```
//! use todo_lists_core::presentation::{is_list_complete, sort_lists_for_display};
//! use todo_lists_core::validation::validate_list_name;
//! use todo_lists_core::ListStore;
//!
//! let mut store = ListStore::new();
//!
//! let name = "  Groceries ".trim();
//! assert!(validate_list_name(name, store.list_names()).is_ok());
//! let list_id = store.add_list(name.to_string())?.id;
//!
//! let todo_id = store.add_todo(list_id, "Milk".to_string())?.id;
//! store.set_todo_completed(list_id, todo_id, true)?;
//!
//! let list = store.find_list(list_id).ok_or("missing list")?;
//! assert!(is_list_complete(list));
//! assert_eq!(sort_lists_for_display(&store).len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod presentation;
pub mod reducer;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CommandError, NameError, StoreError};
pub use reducer::{ListsAction, ListsReducer, Outcome, Reducer};
pub use store::ListStore;
pub use types::{List, ListId, Todo, TodoId};
