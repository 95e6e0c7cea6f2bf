//! Router configuration for the todo-lists server.

use crate::handlers::{self, lists, todos};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Every list route names its id `:list_id`; the router rejects two
/// different parameter names in the same position.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(lists::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        // Lists
        .route("/lists", get(lists::all_lists).post(lists::create_list))
        .route(
            "/lists/:list_id",
            get(lists::get_list).post(lists::rename_list),
        )
        .route("/lists/:list_id/delete", post(lists::delete_list))
        .route("/lists/:list_id/complete_all", post(lists::complete_all))
        // Todos
        .route("/lists/:list_id/todos", post(todos::add_todo))
        .route("/lists/:list_id/todos/:todo_id", post(todos::update_todo))
        .route(
            "/lists/:list_id/todos/:todo_id/delete",
            post(todos::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
