//! Todo endpoints.

use super::{CommandResponse, dispatch, parse_list_id, parse_todo_id};
use crate::WebResult;
use crate::extractors::SessionCookie;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use todo_lists_core::ListsAction;

/// Request to add a todo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TodoForm {
    /// Name of the todo; surrounding whitespace is ignored
    pub todo: String,
}

/// Request to set a todo's completion flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusForm {
    /// New value of the flag
    pub completed: bool,
}

/// Add a todo to a list.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:id/todos
/// Content-Type: application/json
///
/// { "todo": "Buy milk" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "message": "The task has been created.", "list_id": 1, "todo_id": 1 }`.
pub async fn add_todo(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(list_id): Path<String>,
    Json(form): Json<TodoForm>,
) -> (SessionCookie, WebResult<(StatusCode, Json<CommandResponse>)>) {
    let result = match parse_list_id(&list_id) {
        Ok(list_id) => {
            let action = ListsAction::AddTodo {
                list_id,
                name: form.todo.trim().to_string(),
            };
            dispatch(&state, &session, action)
                .await
                .map(|body| (StatusCode::CREATED, body))
        }
        Err(err) => Err(err),
    };
    (session, result)
}

/// Set a todo's completion flag.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:list_id/todos/:todo_id
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
pub async fn update_todo(
    State(state): State<AppState>,
    session: SessionCookie,
    Path((list_id, todo_id)): Path<(String, String)>,
    Json(form): Json<StatusForm>,
) -> (SessionCookie, WebResult<Json<CommandResponse>>) {
    let ids = parse_list_id(&list_id).and_then(|list_id| Ok((list_id, parse_todo_id(&todo_id)?)));
    let result = match ids {
        Ok((list_id, todo_id)) => {
            let action = ListsAction::SetTodoCompleted {
                list_id,
                todo_id,
                completed: form.completed,
            };
            dispatch(&state, &session, action).await
        }
        Err(err) => Err(err),
    };
    (session, result)
}

/// Delete a todo. Deleting a missing todo from an existing list succeeds.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:list_id/todos/:todo_id/delete
/// ```
pub async fn delete_todo(
    State(state): State<AppState>,
    session: SessionCookie,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> (SessionCookie, WebResult<Json<CommandResponse>>) {
    let ids = parse_list_id(&list_id).and_then(|list_id| Ok((list_id, parse_todo_id(&todo_id)?)));
    let result = match ids {
        Ok((list_id, todo_id)) => {
            dispatch(&state, &session, ListsAction::DeleteTodo { list_id, todo_id }).await
        }
        Err(err) => Err(err),
    };
    (session, result)
}
