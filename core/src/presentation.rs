//! Derived completion status and display ordering.
//!
//! Nothing here mutates the store. Display ordering returns borrowed views,
//! so the storage order that id assignment relies on is left untouched.

use crate::store::ListStore;
use crate::types::{List, Todo};
use serde::Serialize;

/// Returns true if the list has at least one todo and every todo is
/// completed. An empty list is never complete.
#[must_use]
pub fn is_list_complete(list: &List) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|todo| todo.completed)
}

/// Orders items for display: incomplete items first, then complete ones.
///
/// This is a stable two-bucket partition, not a sort. Items keep their
/// relative order within each bucket.
///
/// # Example
///
/// ```
/// use todo_lists_core::presentation::sort_for_display;
///
/// let items = [("A", true), ("B", false), ("C", true), ("D", false)];
/// let ordered: Vec<_> = sort_for_display(&items, |item| item.1)
///     .into_iter()
///     .map(|item| item.0)
///     .collect();
/// assert_eq!(ordered, ["B", "D", "A", "C"]);
/// ```
pub fn sort_for_display<T>(items: &[T], is_complete: impl Fn(&T) -> bool) -> Vec<&T> {
    let (complete, mut incomplete): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| is_complete(*item));
    incomplete.extend(complete);
    incomplete
}

/// Lists in display order, bucketed by [`is_list_complete`]
#[must_use]
pub fn sort_lists_for_display(store: &ListStore) -> Vec<&List> {
    sort_for_display(store.all_lists(), is_list_complete)
}

/// A list's todos in display order, bucketed by their completion flag
#[must_use]
pub fn sort_todos_for_display(list: &List) -> Vec<&Todo> {
    sort_for_display(&list.todos, |todo| todo.completed)
}

/// Completed and total todo counts for a list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    /// Number of completed todos
    pub completed: usize,
    /// Number of todos
    pub total: usize,
}

impl CompletionSummary {
    /// Computes the summary for a list
    #[must_use]
    pub fn of(list: &List) -> Self {
        Self {
            completed: list.completed_count(),
            total: list.todos.len(),
        }
    }
}

impl std::fmt::Display for CompletionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListId, TodoId};

    fn list_with(flags: &[bool]) -> List {
        let mut list = List::new(ListId::new(1), "Chores".to_string());
        for (i, completed) in flags.iter().enumerate() {
            let mut todo = Todo::new(TodoId::new(i as u64 + 1), format!("todo {i}"));
            todo.completed = *completed;
            list.todos.push(todo);
        }
        list
    }

    #[test]
    fn empty_list_is_not_complete() {
        assert!(!is_list_complete(&list_with(&[])));
    }

    #[test]
    fn list_complete_only_when_all_todos_completed() {
        assert!(!is_list_complete(&list_with(&[true, false])));
        assert!(is_list_complete(&list_with(&[true, true])));
    }

    #[test]
    fn sort_is_stable_partition() {
        let list = list_with(&[true, false, true, false]);
        let ids: Vec<u64> = sort_todos_for_display(&list)
            .iter()
            .map(|todo| todo.id.get())
            .collect();
        assert_eq!(ids, [2, 4, 1, 3]);
    }

    #[test]
    fn sort_does_not_reorder_storage() {
        let list = list_with(&[true, false]);
        let _ = sort_todos_for_display(&list);
        assert_eq!(list.todos[0].id, TodoId::new(1));
    }

    #[test]
    fn sort_lists_puts_complete_lists_last() {
        let mut store = ListStore::new();
        let done = store.add_list("Done".to_string()).unwrap().id;
        store.add_list("Empty".to_string()).unwrap();
        let todo = store.add_todo(done, "Finished".to_string()).unwrap().id;
        store.set_todo_completed(done, todo, true).unwrap();

        let names: Vec<&str> = sort_lists_for_display(&store)
            .iter()
            .map(|list| list.name.as_str())
            .collect();
        assert_eq!(names, ["Empty", "Done"]);
    }

    #[test]
    fn completion_summary_display() {
        let summary = CompletionSummary::of(&list_with(&[true, false, true]));
        assert_eq!(summary, CompletionSummary { completed: 2, total: 3 });
        assert_eq!(summary.to_string(), "2 / 3");
    }
}
