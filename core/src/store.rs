//! The list store: every list a session owns, in creation order.
//!
//! The store performs no name validation. Callers run
//! [`crate::validation`] first and only then mutate.
//!
//! Lookups that may miss return `Option`. Mutations that need an existing
//! target return [`StoreError`]. Deletes never fail: removing something
//! that is already gone is a no-op.

use crate::error::StoreError;
use crate::types::{List, ListId, Todo, TodoId, next_id};
use serde::{Deserialize, Serialize};

/// Ordered collection of lists
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListStore {
    lists: Vec<List>,
}

impl ListStore {
    /// Creates an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Creates a store from existing lists, keeping their order
    #[must_use]
    pub const fn from_lists(lists: Vec<List>) -> Self {
        Self { lists }
    }

    /// Returns all lists in storage order
    #[must_use]
    pub fn all_lists(&self) -> &[List] {
        &self.lists
    }

    /// Returns the number of lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if the store holds no lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the names of all lists, for duplicate checks
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(|list| list.name.as_str())
    }

    /// Finds a list by id
    #[must_use]
    pub fn find_list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Finds a list by id for mutation
    pub fn find_list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Finds a todo within a list
    #[must_use]
    pub fn find_todo(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.find_list(list_id).and_then(|list| list.todo(todo_id))
    }

    /// Returns the id the next created list will receive, or `None` if a
    /// list already has id `u64::MAX`
    #[must_use]
    pub fn next_list_id(&self) -> Option<ListId> {
        next_id(self.lists.iter().map(|list| list.id.get())).map(ListId::new)
    }

    /// Appends a new, empty list and returns it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] if no list id is left.
    pub fn add_list(&mut self, name: String) -> Result<&List, StoreError> {
        let id = self.next_list_id().ok_or(StoreError::IdsExhausted)?;
        let index = self.lists.len();
        self.lists.push(List::new(id, name));
        Ok(&self.lists[index])
    }

    /// Removes the list with this id, if present
    pub fn delete_list(&mut self, id: ListId) {
        self.lists.retain(|list| list.id != id);
    }

    /// Overwrites a list's name
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListNotFound`] if no list has this id.
    pub fn rename_list(&mut self, id: ListId, name: String) -> Result<(), StoreError> {
        let list = self.find_list_mut(id).ok_or(StoreError::ListNotFound(id))?;
        list.name = name;
        Ok(())
    }

    /// Appends a new, incomplete todo to a list and returns it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListNotFound`] if no list has this id, or
    /// [`StoreError::IdsExhausted`] if the list has no todo id left.
    pub fn add_todo(&mut self, list_id: ListId, name: String) -> Result<&Todo, StoreError> {
        let list = self
            .find_list_mut(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        let id = list.next_todo_id().ok_or(StoreError::IdsExhausted)?;
        let index = list.todos.len();
        list.todos.push(Todo::new(id, name));
        Ok(&list.todos[index])
    }

    /// Removes a todo from a list, if both exist
    pub fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) {
        if let Some(list) = self.find_list_mut(list_id) {
            list.todos.retain(|todo| todo.id != todo_id);
        }
    }

    /// Sets a todo's completion flag to exactly `completed`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListNotFound`] or [`StoreError::TodoNotFound`]
    /// if the target does not exist.
    pub fn set_todo_completed(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> Result<(), StoreError> {
        let todo = self
            .find_list_mut(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?
            .todo_mut(todo_id)
            .ok_or(StoreError::TodoNotFound { list_id, todo_id })?;
        todo.completed = completed;
        Ok(())
    }

    /// Marks every todo in a list as completed
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListNotFound`] if no list has this id.
    pub fn complete_all(&mut self, list_id: ListId) -> Result<(), StoreError> {
        let list = self
            .find_list_mut(list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        for todo in &mut list.todos {
            todo.completed = true;
        }
        Ok(())
    }
}
