//! List endpoints.

use super::{CommandResponse, dispatch, parse_list_id};
use crate::WebResult;
use crate::error::{AppError, LIST_NOT_FOUND};
use crate::extractors::SessionCookie;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use todo_lists_core::presentation::{
    CompletionSummary, is_list_complete, sort_lists_for_display, sort_todos_for_display,
};
use todo_lists_core::{List, ListId, ListsAction, Todo};
use todo_lists_runtime::Flash;

/// Request to create or rename a list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListForm {
    /// Name of the list; surrounding whitespace is ignored
    pub list_name: String,
}

/// A list as shown on the overview page.
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    /// List id
    pub id: ListId,
    /// List name
    pub name: String,
    /// Whether every todo is completed (never true for an empty list)
    pub complete: bool,
    /// Completed and total todo counts
    pub todos: CompletionSummary,
    /// Counts rendered as `"completed / total"`
    pub progress: String,
}

impl From<&List> for ListSummary {
    fn from(list: &List) -> Self {
        let todos = CompletionSummary::of(list);
        Self {
            id: list.id,
            name: list.name.clone(),
            complete: is_list_complete(list),
            todos,
            progress: todos.to_string(),
        }
    }
}

/// A single list with its todos in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ListDetail {
    /// List id
    pub id: ListId,
    /// List name
    pub name: String,
    /// Whether every todo is completed (never true for an empty list)
    pub complete: bool,
    /// Counts rendered as `"completed / total"`
    pub progress: String,
    /// Incomplete todos first, then completed ones
    pub todos: Vec<Todo>,
}

impl From<&List> for ListDetail {
    fn from(list: &List) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            complete: is_list_complete(list),
            progress: CompletionSummary::of(list).to_string(),
            todos: sort_todos_for_display(list).into_iter().cloned().collect(),
        }
    }
}

/// Response for `GET /lists`.
#[derive(Debug, Clone, Serialize)]
pub struct ListsPage {
    /// Confirmation left by the last accepted command, shown once
    pub flash: Option<Flash>,
    /// Lists with incomplete ones first
    pub lists: Vec<ListSummary>,
}

/// Response for `GET /lists/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    /// Confirmation left by the last accepted command, shown once
    pub flash: Option<Flash>,
    /// The requested list
    pub list: ListDetail,
}

/// Redirect the bare root to the lists overview.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
#[allow(clippy::unused_async)]
pub async fn root() -> Redirect {
    Redirect::to("/lists")
}

/// View all lists.
///
/// # Endpoint
///
/// ```text
/// GET /lists
/// ```
///
/// # Response
///
/// ```json
/// {
///   "flash": { "message": "The list has been created." },
///   "lists": [
///     {
///       "id": 1,
///       "name": "Groceries",
///       "complete": false,
///       "todos": { "completed": 1, "total": 2 },
///       "progress": "1 / 2"
///     }
///   ]
/// }
/// ```
pub async fn all_lists(
    State(state): State<AppState>,
    session: SessionCookie,
) -> (SessionCookie, WebResult<Json<ListsPage>>) {
    let result = lists_page(&state, &session).await;
    (session, result)
}

async fn lists_page(state: &AppState, session: &SessionCookie) -> WebResult<Json<ListsPage>> {
    let lists = state
        .runtime
        .read(session.id(), |s| {
            sort_lists_for_display(&s.lists)
                .into_iter()
                .map(ListSummary::from)
                .collect::<Vec<_>>()
        })
        .await?;
    let flash = state.runtime.take_flash(session.id()).await?;
    Ok(Json(ListsPage { flash, lists }))
}

/// Create a new list.
///
/// # Endpoint
///
/// ```text
/// POST /lists
/// Content-Type: application/json
///
/// { "list_name": "Groceries" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "message": "The list has been created.", "list_id": 1 }`,
/// or `422` if the name is empty, too long, or already used.
pub async fn create_list(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(form): Json<ListForm>,
) -> (SessionCookie, WebResult<(StatusCode, Json<CommandResponse>)>) {
    let action = ListsAction::CreateList {
        name: form.list_name.trim().to_string(),
    };
    let result = dispatch(&state, &session, action)
        .await
        .map(|body| (StatusCode::CREATED, body));
    (session, result)
}

/// View a single list.
///
/// # Endpoint
///
/// ```text
/// GET /lists/:id
/// ```
///
/// # Response
///
/// The list with incomplete todos first, or `404` with
/// "That list does not exist.".
pub async fn get_list(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(list_id): Path<String>,
) -> (SessionCookie, WebResult<Json<ListPage>>) {
    let result = list_page(&state, &session, &list_id).await;
    (session, result)
}

async fn list_page(
    state: &AppState,
    session: &SessionCookie,
    raw_id: &str,
) -> WebResult<Json<ListPage>> {
    let list_id = parse_list_id(raw_id)?;
    let list = state
        .runtime
        .read(session.id(), |s| s.lists.find_list(list_id).map(ListDetail::from))
        .await?
        .ok_or_else(|| AppError::not_found(LIST_NOT_FOUND))?;
    let flash = state.runtime.take_flash(session.id()).await?;
    Ok(Json(ListPage { flash, list }))
}

/// Rename a list.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:id
/// Content-Type: application/json
///
/// { "list_name": "Weekly groceries" }
/// ```
pub async fn rename_list(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(list_id): Path<String>,
    Json(form): Json<ListForm>,
) -> (SessionCookie, WebResult<Json<CommandResponse>>) {
    let result = match parse_list_id(&list_id) {
        Ok(list_id) => {
            let action = ListsAction::RenameList {
                list_id,
                name: form.list_name.trim().to_string(),
            };
            dispatch(&state, &session, action).await
        }
        Err(err) => Err(err),
    };
    (session, result)
}

/// Delete a list and its todos. Deleting a missing list succeeds.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:id/delete
/// ```
pub async fn delete_list(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(list_id): Path<String>,
) -> (SessionCookie, WebResult<Json<CommandResponse>>) {
    let result = match parse_list_id(&list_id) {
        Ok(list_id) => dispatch(&state, &session, ListsAction::DeleteList { list_id }).await,
        Err(err) => Err(err),
    };
    (session, result)
}

/// Mark every todo in a list as completed.
///
/// # Endpoint
///
/// ```text
/// POST /lists/:id/complete_all
/// ```
pub async fn complete_all(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(list_id): Path<String>,
) -> (SessionCookie, WebResult<Json<CommandResponse>>) {
    let result = match parse_list_id(&list_id) {
        Ok(list_id) => dispatch(&state, &session, ListsAction::CompleteAll { list_id }).await,
        Err(err) => Err(err),
    };
    (session, result)
}
