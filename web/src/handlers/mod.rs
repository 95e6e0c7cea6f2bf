//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod health;
pub mod lists;
pub mod todos;

// Re-export common handler utilities
pub use health::{health_check, metrics};

use crate::error::{AppError, LIST_NOT_FOUND, TODO_NOT_FOUND};
use crate::extractors::SessionCookie;
use crate::state::AppState;
use crate::WebResult;
use axum::Json;
use serde::Serialize;
use todo_lists_core::{ListId, ListsAction, Outcome, TodoId};

/// Body returned by every command endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    /// Confirmation message
    pub message: &'static str,
    /// List the command concerned
    pub list_id: ListId,
    /// Todo the command concerned, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_id: Option<TodoId>,
}

impl From<&Outcome> for CommandResponse {
    fn from(outcome: &Outcome) -> Self {
        let todo_id = match outcome {
            Outcome::TodoAdded { todo_id, .. }
            | Outcome::TodoDeleted { todo_id, .. }
            | Outcome::TodoUpdated { todo_id, .. } => Some(*todo_id),
            Outcome::ListCreated { .. }
            | Outcome::ListRenamed { .. }
            | Outcome::ListDeleted { .. }
            | Outcome::AllCompleted { .. } => None,
        };
        Self {
            message: outcome.message(),
            list_id: outcome.list_id(),
            todo_id,
        }
    }
}

/// Runs a command for the request's session.
async fn dispatch(
    state: &AppState,
    session: &SessionCookie,
    action: ListsAction,
) -> WebResult<Json<CommandResponse>> {
    let outcome = state.runtime.send(session.id(), action).await??;
    Ok(Json(CommandResponse::from(&outcome)))
}

/// Parses a list id path segment. Anything that is not an id names no list.
fn parse_list_id(raw: &str) -> WebResult<ListId> {
    raw.parse::<u64>()
        .map(ListId::new)
        .map_err(|_| AppError::not_found(LIST_NOT_FOUND))
}

/// Parses a todo id path segment.
fn parse_todo_id(raw: &str) -> WebResult<TodoId> {
    raw.parse::<u64>()
        .map(TodoId::new)
        .map_err(|_| AppError::not_found(TODO_NOT_FOUND))
}
