//! # Todo Lists Testing
//!
//! Testing utilities and helpers for the todo-lists crates.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`fixtures`]: builders for stores with lists and todos
//! - [`strategies`]: proptest strategies for names and commands
//! - [`init_tracing`]: test log output
//!
//! ## Example
//!
//! ```
//! use todo_lists_core::presentation::is_list_complete;
//! use todo_lists_testing::fixtures::StoreBuilder;
//!
//! let store = StoreBuilder::new()
//!     .list("Groceries", &[("Milk", true), ("Eggs", true)])
//!     .list("Empty", &[])
//!     .build();
//!
//! assert!(is_list_complete(&store.all_lists()[0]));
//! assert!(!is_list_complete(&store.all_lists()[1]));
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Store fixtures
pub mod fixtures {
    use todo_lists_core::{List, ListId, ListStore, Todo, TodoId};

    /// Builds a [`ListStore`] with ids assigned the same way the store
    /// assigns them
    #[derive(Debug, Default)]
    pub struct StoreBuilder {
        store: ListStore,
    }

    impl StoreBuilder {
        /// Starts from an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a list holding `(name, completed)` todos in order
        #[must_use]
        #[allow(clippy::missing_panics_doc)] // the list was just added
        #[allow(clippy::expect_used)]
        pub fn list(mut self, name: &str, todos: &[(&str, bool)]) -> Self {
            let list_id = self
                .store
                .add_list(name.to_string())
                .expect("fixture stores stay far below the id limit")
                .id;
            for (todo_name, completed) in todos {
                let todo_id = self
                    .store
                    .add_todo(list_id, (*todo_name).to_string())
                    .expect("list was just added")
                    .id;
                self.store
                    .set_todo_completed(list_id, todo_id, *completed)
                    .expect("todo was just added");
            }
            self
        }

        /// Finishes the store
        #[must_use]
        pub fn build(self) -> ListStore {
            self.store
        }
    }

    /// A list with explicit ids, for states the store itself would not
    /// produce in that order
    #[must_use]
    pub fn list_with_ids(id: u64, name: &str, todos: &[(u64, bool)]) -> List {
        List {
            id: ListId::new(id),
            name: name.to_string(),
            todos: todos
                .iter()
                .map(|(todo_id, completed)| Todo {
                    id: TodoId::new(*todo_id),
                    name: format!("todo {todo_id}"),
                    completed: *completed,
                })
                .collect(),
        }
    }
}

/// Proptest strategies for names and commands
pub mod strategies {
    use proptest::prelude::*;
    use todo_lists_core::validation::MAX_NAME_LEN;
    use todo_lists_core::{ListId, ListsAction, TodoId};

    /// Names that pass length validation
    pub fn valid_name() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::any(), 1..=MAX_NAME_LEN)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Names that are too long
    pub fn overlong_name() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::char::any(), MAX_NAME_LEN + 1..=MAX_NAME_LEN * 2)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Short names drawn from a small alphabet, so duplicates are likely
    pub fn short_name() -> impl Strategy<Value = String> {
        "[a-c]{1,2}"
    }

    /// Arbitrary commands over small id ranges
    pub fn action() -> impl Strategy<Value = ListsAction> {
        let list_id = (1u64..5).prop_map(ListId::new);
        let todo_id = (1u64..5).prop_map(TodoId::new);
        prop_oneof![
            short_name().prop_map(|name| ListsAction::CreateList { name }),
            (list_id.clone(), short_name())
                .prop_map(|(list_id, name)| ListsAction::RenameList { list_id, name }),
            list_id
                .clone()
                .prop_map(|list_id| ListsAction::DeleteList { list_id }),
            (list_id.clone(), short_name())
                .prop_map(|(list_id, name)| ListsAction::AddTodo { list_id, name }),
            (list_id.clone(), todo_id.clone())
                .prop_map(|(list_id, todo_id)| ListsAction::DeleteTodo { list_id, todo_id }),
            (list_id.clone(), todo_id, any::<bool>()).prop_map(
                |(list_id, todo_id, completed)| ListsAction::SetTodoCompleted {
                    list_id,
                    todo_id,
                    completed,
                }
            ),
            list_id.prop_map(|list_id| ListsAction::CompleteAll { list_id }),
        ]
    }
}

/// Installs a test log subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
