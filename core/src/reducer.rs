//! Command handling for a session's lists.
//!
//! Each [`ListsAction`] is one logical unit of work: validate, then perform
//! at most one store mutation. The result is an [`Outcome`] describing what
//! changed, or a [`CommandError`] the caller turns into a user-visible
//! message. Inputs are taken as given; the caller trims names first.

use crate::error::{CommandError, StoreError};
use crate::store::ListStore;
use crate::types::{ListId, TodoId};
use crate::validation::{validate_list_name, validate_todo_name};
use serde::{Deserialize, Serialize};

/// A pure state transition: `(State, Action) -> Output`
///
/// # Example
///
/// ```
/// use todo_lists_core::reducer::{ListsAction, ListsReducer, Reducer};
/// use todo_lists_core::store::ListStore;
///
/// let mut store = ListStore::new();
/// let outcome = ListsReducer::new().reduce(
///     &mut store,
///     ListsAction::CreateList { name: "Groceries".to_string() },
/// );
/// assert!(outcome.is_ok());
/// assert_eq!(store.len(), 1);
/// ```
pub trait Reducer {
    /// The state this reducer operates on
    type State;

    /// The inputs this reducer processes
    type Action;

    /// What a reduction reports back to the caller
    type Output;

    /// Applies an action to the state
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Self::Output;
}

/// Commands against a session's lists
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListsAction {
    /// Create a new list
    CreateList {
        /// Name of the new list
        name: String,
    },

    /// Rename an existing list
    RenameList {
        /// List to rename
        list_id: ListId,
        /// New name
        name: String,
    },

    /// Delete a list and all of its todos
    DeleteList {
        /// List to delete
        list_id: ListId,
    },

    /// Append a todo to a list
    AddTodo {
        /// Owning list
        list_id: ListId,
        /// Name of the todo
        name: String,
    },

    /// Remove a todo from a list
    DeleteTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to remove
        todo_id: TodoId,
    },

    /// Set a todo's completion flag
    SetTodoCompleted {
        /// Owning list
        list_id: ListId,
        /// Todo to update
        todo_id: TodoId,
        /// New value of the flag
        completed: bool,
    },

    /// Mark every todo in a list as completed
    CompleteAll {
        /// List to complete
        list_id: ListId,
    },
}

impl ListsAction {
    /// Short name of the action, for logs and metric labels
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateList { .. } => "create_list",
            Self::RenameList { .. } => "rename_list",
            Self::DeleteList { .. } => "delete_list",
            Self::AddTodo { .. } => "add_todo",
            Self::DeleteTodo { .. } => "delete_todo",
            Self::SetTodoCompleted { .. } => "set_todo_completed",
            Self::CompleteAll { .. } => "complete_all",
        }
    }
}

/// What an accepted [`ListsAction`] changed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A list was created
    ListCreated {
        /// Id assigned to the list
        list_id: ListId,
    },

    /// A list was renamed
    ListRenamed {
        /// Renamed list
        list_id: ListId,
    },

    /// A list was deleted, or was already absent
    ListDeleted {
        /// Deleted list
        list_id: ListId,
    },

    /// A todo was appended
    TodoAdded {
        /// Owning list
        list_id: ListId,
        /// Id assigned to the todo
        todo_id: TodoId,
    },

    /// A todo was deleted, or was already absent
    TodoDeleted {
        /// Owning list
        list_id: ListId,
        /// Deleted todo
        todo_id: TodoId,
    },

    /// A todo's completion flag was set
    TodoUpdated {
        /// Owning list
        list_id: ListId,
        /// Updated todo
        todo_id: TodoId,
        /// Value the flag now holds
        completed: bool,
    },

    /// Every todo in a list was completed
    AllCompleted {
        /// Completed list
        list_id: ListId,
    },
}

impl Outcome {
    /// User-facing confirmation message
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ListCreated { .. } => "The list has been created.",
            Self::ListRenamed { .. } => "The list has been updated.",
            Self::ListDeleted { .. } => "The list has been deleted.",
            Self::TodoAdded { .. } => "The task has been created.",
            Self::TodoDeleted { .. } => "The todo has been deleted.",
            Self::TodoUpdated { .. } => "The todo has been updated.",
            Self::AllCompleted { .. } => "All todos have been completed.",
        }
    }

    /// The list the outcome concerns
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        match self {
            Self::ListCreated { list_id }
            | Self::ListRenamed { list_id }
            | Self::ListDeleted { list_id }
            | Self::TodoAdded { list_id, .. }
            | Self::TodoDeleted { list_id, .. }
            | Self::TodoUpdated { list_id, .. }
            | Self::AllCompleted { list_id } => *list_id,
        }
    }
}

/// Reducer applying [`ListsAction`]s to a [`ListStore`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListsReducer {
    type State = ListStore;
    type Action = ListsAction;
    type Output = Result<Outcome, CommandError>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Self::Output {
        match action {
            ListsAction::CreateList { name } => {
                validate_list_name(&name, state.list_names())
                    .map_err(CommandError::InvalidListName)?;
                let list_id = state.add_list(name)?.id;
                tracing::debug!(%list_id, "list created");
                Ok(Outcome::ListCreated { list_id })
            }

            ListsAction::RenameList { list_id, name } => {
                if state.find_list(list_id).is_none() {
                    return Err(StoreError::ListNotFound(list_id).into());
                }
                // The list's own current name counts as taken
                validate_list_name(&name, state.list_names())
                    .map_err(CommandError::InvalidListName)?;
                state.rename_list(list_id, name)?;
                Ok(Outcome::ListRenamed { list_id })
            }

            ListsAction::DeleteList { list_id } => {
                state.delete_list(list_id);
                Ok(Outcome::ListDeleted { list_id })
            }

            ListsAction::AddTodo { list_id, name } => {
                if state.find_list(list_id).is_none() {
                    return Err(StoreError::ListNotFound(list_id).into());
                }
                validate_todo_name(&name).map_err(CommandError::InvalidTodoName)?;
                let todo_id = state.add_todo(list_id, name)?.id;
                tracing::debug!(%list_id, %todo_id, "todo added");
                Ok(Outcome::TodoAdded { list_id, todo_id })
            }

            ListsAction::DeleteTodo { list_id, todo_id } => {
                if state.find_list(list_id).is_none() {
                    return Err(StoreError::ListNotFound(list_id).into());
                }
                state.delete_todo(list_id, todo_id);
                Ok(Outcome::TodoDeleted { list_id, todo_id })
            }

            ListsAction::SetTodoCompleted {
                list_id,
                todo_id,
                completed,
            } => {
                state.set_todo_completed(list_id, todo_id, completed)?;
                Ok(Outcome::TodoUpdated {
                    list_id,
                    todo_id,
                    completed,
                })
            }

            ListsAction::CompleteAll { list_id } => {
                state.complete_all(list_id)?;
                Ok(Outcome::AllCompleted { list_id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameError;

    fn reduce(store: &mut ListStore, action: ListsAction) -> Result<Outcome, CommandError> {
        ListsReducer::new().reduce(store, action)
    }

    #[test]
    fn create_list_validates_before_mutating() {
        let mut store = ListStore::new();
        let result = reduce(
            &mut store,
            ListsAction::CreateList {
                name: String::new(),
            },
        );
        assert_eq!(result, Err(CommandError::InvalidListName(NameError::Length)));
        assert!(store.is_empty());
    }

    #[test]
    fn create_list_rejects_duplicates() {
        let mut store = ListStore::new();
        store.add_list("Work".to_string()).unwrap();
        let result = reduce(
            &mut store,
            ListsAction::CreateList {
                name: "Work".to_string(),
            },
        );
        assert_eq!(result, Err(CommandError::InvalidListName(NameError::Duplicate)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rename_to_own_name_is_duplicate() {
        let mut store = ListStore::new();
        let list_id = store.add_list("Work".to_string()).unwrap().id;
        let result = reduce(
            &mut store,
            ListsAction::RenameList {
                list_id,
                name: "Work".to_string(),
            },
        );
        assert_eq!(result, Err(CommandError::InvalidListName(NameError::Duplicate)));
    }

    #[test]
    fn rename_missing_list_reports_not_found_before_validation() {
        let mut store = ListStore::new();
        let result = reduce(
            &mut store,
            ListsAction::RenameList {
                list_id: ListId::new(3),
                name: String::new(),
            },
        );
        assert_eq!(
            result,
            Err(CommandError::NotFound(StoreError::ListNotFound(ListId::new(3))))
        );
    }

    #[test]
    fn delete_todo_requires_list() {
        let mut store = ListStore::new();
        let result = reduce(
            &mut store,
            ListsAction::DeleteTodo {
                list_id: ListId::new(1),
                todo_id: TodoId::new(1),
            },
        );
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }

    #[test]
    fn create_list_past_largest_id_is_rejected() {
        let mut store = ListStore::from_lists(vec![crate::types::List::new(
            ListId::new(u64::MAX),
            "Last".to_string(),
        )]);
        let result = reduce(
            &mut store,
            ListsAction::CreateList {
                name: "One more".to_string(),
            },
        );
        assert_eq!(result, Err(CommandError::IdsExhausted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_todo_past_largest_id_is_rejected() {
        let mut list = crate::types::List::new(ListId::new(1), "Full".to_string());
        list.todos.push(crate::types::Todo::new(
            TodoId::new(u64::MAX),
            "Last".to_string(),
        ));
        let mut store = ListStore::from_lists(vec![list]);

        let result = reduce(
            &mut store,
            ListsAction::AddTodo {
                list_id: ListId::new(1),
                name: "One more".to_string(),
            },
        );
        assert_eq!(result, Err(CommandError::IdsExhausted));
        assert_eq!(store.all_lists()[0].todos.len(), 1);
    }

    #[test]
    fn action_names() {
        assert_eq!(
            ListsAction::CompleteAll {
                list_id: ListId::new(1)
            }
            .name(),
            "complete_all"
        );
    }

    #[test]
    fn outcome_messages() {
        let outcome = Outcome::TodoAdded {
            list_id: ListId::new(1),
            todo_id: TodoId::new(2),
        };
        assert_eq!(outcome.message(), "The task has been created.");
        assert_eq!(outcome.list_id(), ListId::new(1));
    }
}
