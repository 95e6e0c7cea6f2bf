//! Error types for store mutations, name validation and commands.

use crate::types::{ListId, TodoId};
use thiserror::Error;

/// A rejected list or todo name
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The name is not between 1 and 100 characters long
    #[error("name must be between 1 and 100 characters")]
    Length,

    /// Another list already uses this name
    #[error("name is already in use")]
    Duplicate,
}

impl NameError {
    /// Short, stable code for the error
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Duplicate => "duplicate",
        }
    }
}

/// A store mutation targeted a list or todo that does not exist
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No list with this id
    #[error("list {0} not found")]
    ListNotFound(ListId),

    /// The list exists but holds no todo with this id
    #[error("todo {todo_id} not found in list {list_id}")]
    TodoNotFound {
        /// List that was searched
        list_id: ListId,
        /// Todo that was missing
        todo_id: TodoId,
    },

    /// The collection already holds the largest possible id
    #[error("no identifiers left")]
    IdsExhausted,
}

/// Why a [`crate::reducer::ListsAction`] was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The list name failed validation
    #[error("invalid list name: {0}")]
    InvalidListName(NameError),

    /// The todo name failed validation
    #[error("invalid todo name: {0}")]
    InvalidTodoName(NameError),

    /// The target list or todo does not exist
    #[error(transparent)]
    NotFound(StoreError),

    /// No id is left for a new list or todo
    #[error("no identifiers left")]
    IdsExhausted,
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::IdsExhausted => Self::IdsExhausted,
            err @ (StoreError::ListNotFound(_) | StoreError::TodoNotFound { .. }) => {
                Self::NotFound(err)
            }
        }
    }
}

impl CommandError {
    /// User-facing message for the rejection
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidListName(NameError::Length) => {
                "Please enter a name between 1 and 100 characters."
            }
            Self::InvalidListName(NameError::Duplicate) => "The list name must be unique.",
            // Todo names have no uniqueness rule, so length is the only failure
            Self::InvalidTodoName(_) => "Todo must be between 1 and 100 characters.",
            Self::NotFound(StoreError::ListNotFound(_)) => "That list does not exist.",
            Self::NotFound(StoreError::TodoNotFound { .. }) => "That todo does not exist.",
            Self::NotFound(StoreError::IdsExhausted) | Self::IdsExhausted => {
                "No more items can be added."
            }
        }
    }

    /// Returns true for validation failures, false for missing targets
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidListName(_) | Self::InvalidTodoName(_))
    }

    /// Returns true when the target list or todo does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(StoreError::ListNotFound(_) | StoreError::TodoNotFound { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_error_codes() {
        assert_eq!(NameError::Length.code(), "length");
        assert_eq!(NameError::Duplicate.code(), "duplicate");
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::TodoNotFound {
            list_id: ListId::new(2),
            todo_id: TodoId::new(9),
        };
        assert_eq!(err.to_string(), "todo 9 not found in list 2");
        assert_eq!(
            StoreError::ListNotFound(ListId::new(4)).to_string(),
            "list 4 not found"
        );
    }

    #[test]
    fn command_error_messages() {
        assert_eq!(
            CommandError::InvalidListName(NameError::Duplicate).message(),
            "The list name must be unique."
        );
        assert_eq!(
            CommandError::from(StoreError::ListNotFound(ListId::new(1))).message(),
            "That list does not exist."
        );
        assert!(CommandError::InvalidTodoName(NameError::Length).is_validation());
        assert!(!CommandError::from(StoreError::ListNotFound(ListId::new(1))).is_validation());
    }

    #[test]
    fn exhausted_ids_are_neither_invalid_nor_missing() {
        let err = CommandError::from(StoreError::IdsExhausted);
        assert_eq!(err, CommandError::IdsExhausted);
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.message(), "No more items can be added.");
        assert!(CommandError::from(StoreError::ListNotFound(ListId::new(1))).is_not_found());
    }
}
