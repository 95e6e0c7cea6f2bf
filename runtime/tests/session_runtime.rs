//! Integration tests for the session runtime

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use std::collections::HashSet;
use std::sync::Arc;
use todo_lists_core::{CommandError, ListId, ListsAction, NameError, Outcome, TodoId};
use todo_lists_runtime::{
    Flash, InMemorySessionStorage, RuntimeError, SessionId, SessionRuntime, SessionStorage,
    StorageError,
};
use todo_lists_testing::init_tracing;

fn runtime() -> SessionRuntime<InMemorySessionStorage> {
    init_tracing();
    SessionRuntime::new(InMemorySessionStorage::new())
}

fn create(name: &str) -> ListsAction {
    ListsAction::CreateList {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn first_command_creates_session() {
    let runtime = runtime();
    let session = SessionId::new();
    assert!(runtime.storage().is_empty().await);

    let outcome = runtime.send(&session, create("Groceries")).await.unwrap();

    assert_eq!(
        outcome,
        Ok(Outcome::ListCreated {
            list_id: ListId::new(1)
        })
    );
    assert_eq!(runtime.storage().len().await, 1);
    let names = runtime
        .read(&session, |s| {
            s.lists
                .all_lists()
                .iter()
                .map(|l| l.name.clone())
                .collect::<Vec<_>>()
        })
        .await
        .unwrap();
    assert_eq!(names, ["Groceries"]);
}

#[tokio::test]
async fn unknown_session_reads_as_empty() {
    let runtime = runtime();
    let count = runtime.read(&SessionId::new(), |s| s.lists.len()).await.unwrap();
    assert_eq!(count, 0);
    assert!(runtime.storage().is_empty().await);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let runtime = runtime();
    let alice = SessionId::new();
    let bob = SessionId::new();

    runtime.send(&alice, create("Work")).await.unwrap().unwrap();
    let bob_result = runtime.send(&bob, create("Work")).await.unwrap();

    // Same name and same id in another session
    assert_eq!(
        bob_result,
        Ok(Outcome::ListCreated {
            list_id: ListId::new(1)
        })
    );
}

#[tokio::test]
async fn flash_records_accepted_command_and_is_taken_once() {
    let runtime = runtime();
    let session = SessionId::new();

    runtime.send(&session, create("Work")).await.unwrap().unwrap();
    assert_eq!(
        runtime.take_flash(&session).await.unwrap(),
        Some(Flash::new("The list has been created."))
    );
    assert_eq!(runtime.take_flash(&session).await.unwrap(), None);
}

#[tokio::test]
async fn rejected_command_leaves_no_flash() {
    let runtime = runtime();
    let session = SessionId::new();
    runtime.send(&session, create("Work")).await.unwrap().unwrap();
    runtime.take_flash(&session).await.unwrap();

    let rejected = runtime.send(&session, create("Work")).await.unwrap();
    assert_eq!(
        rejected,
        Err(CommandError::InvalidListName(NameError::Duplicate))
    );
    assert_eq!(runtime.take_flash(&session).await.unwrap(), None);
}

#[tokio::test]
async fn rejected_command_keeps_pending_confirmation() {
    let runtime = runtime();
    let session = SessionId::new();
    runtime.send(&session, create("Work")).await.unwrap().unwrap();

    let rejected = runtime.send(&session, create("")).await.unwrap();
    assert!(rejected.is_err());
    assert_eq!(
        runtime.take_flash(&session).await.unwrap(),
        Some(Flash::new("The list has been created."))
    );
}

#[tokio::test]
async fn rejected_command_leaves_lists_unchanged() {
    let runtime = runtime();
    let session = SessionId::new();
    runtime.send(&session, create("Work")).await.unwrap().unwrap();

    let result = runtime
        .send(
            &session,
            ListsAction::AddTodo {
                list_id: ListId::new(7),
                name: "x".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(matches!(result, Err(CommandError::NotFound(_))));
    let todos = runtime
        .read(&session, |s| s.lists.all_lists()[0].todos.len())
        .await
        .unwrap();
    assert_eq!(todos, 0);
}

#[tokio::test]
async fn state_survives_between_commands() {
    let runtime = runtime();
    let session = SessionId::new();
    runtime.send(&session, create("Chores")).await.unwrap().unwrap();

    for name in ["Dishes", "Laundry"] {
        runtime
            .send(
                &session,
                ListsAction::AddTodo {
                    list_id: ListId::new(1),
                    name: name.to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
    }
    runtime
        .send(&session, ListsAction::CompleteAll { list_id: ListId::new(1) })
        .await
        .unwrap()
        .unwrap();

    let document = runtime.storage().load(&session).await.unwrap().unwrap();
    let list = document.lists.find_list(ListId::new(1)).unwrap();
    assert_eq!(list.todos.len(), 2);
    assert_eq!(list.todos[1].id, TodoId::new(2));
    assert!(list.todos.iter().all(|t| t.completed));
}

#[tokio::test]
async fn concurrent_commands_on_one_session_get_distinct_ids() {
    let runtime = Arc::new(runtime());
    let session = SessionId::new();

    let handles: Vec<_> = (0..50)
        .map(|n| {
            let runtime = Arc::clone(&runtime);
            tokio::spawn(async move {
                runtime
                    .send(&session, create(&format!("list {n}")))
                    .await
                    .unwrap()
                    .unwrap()
                    .list_id()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate list id");
    }

    let expected: HashSet<ListId> = (1..=50).map(ListId::new).collect();
    assert_eq!(ids, expected);
    assert_eq!(runtime.read(&session, |s| s.lists.len()).await.unwrap(), 50);
}

#[tokio::test]
async fn corrupt_session_surfaces_storage_error() {
    let runtime = runtime();
    let session = SessionId::new();
    runtime
        .storage()
        .insert_document(session, "[not a session".to_string())
        .await;

    let err = runtime.send(&session, create("Work")).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Storage(StorageError::Decode { .. })
    ));
}
