//! Domain types for lists and their todos.
//!
//! A session holds any number of named lists. Each list owns an ordered
//! sequence of todos. Identifiers are plain integers scoped to their owning
//! collection: list ids are unique across the store, todo ids only within
//! their list.

use serde::{Deserialize, Serialize};

/// Identifier of a list, unique within a [`crate::store::ListStore`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    /// Creates a `ListId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a todo, unique only within its owning [`List`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Returns the next identifier for a collection: the largest existing id
/// plus one, or `1` when the collection is empty.
///
/// Ids freed by deletes are never handed out again as long as a larger id
/// is still present. Returns `None` once the largest id is `u64::MAX`.
///
/// # Example
///
/// ```
/// use todo_lists_core::types::next_id;
///
/// assert_eq!(next_id([]), Some(1));
/// assert_eq!(next_id([1, 4, 2]), Some(5));
/// assert_eq!(next_id([u64::MAX]), None);
/// ```
#[must_use]
pub fn next_id(existing: impl IntoIterator<Item = u64>) -> Option<u64> {
    existing
        .into_iter()
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier, unique within the owning list
    pub id: TodoId,
    /// Name of the todo (1-100 characters)
    pub name: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, incomplete todo
    #[must_use]
    pub const fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }
}

/// A named, ordered collection of todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Identifier, unique within the store
    pub id: ListId,
    /// Name of the list (1-100 characters, unique within the store)
    pub name: String,
    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl List {
    /// Creates a new list with no todos
    #[must_use]
    pub const fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    /// Returns a todo by id
    #[must_use]
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns a mutable todo by id
    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    /// Returns the id the next added todo will receive, or `None` if the
    /// list already holds a todo with id `u64::MAX`
    #[must_use]
    pub fn next_todo_id(&self) -> Option<TodoId> {
        next_id(self.todos.iter().map(|todo| todo.id.get())).map(TodoId)
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }
}
