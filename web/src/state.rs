//! Application state for Axum handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use todo_lists_runtime::{InMemorySessionStorage, SessionRuntime};

/// Session runtime used by the server
pub type Runtime = SessionRuntime<InMemorySessionStorage>;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runtime executing commands against sessions
    pub runtime: Arc<Runtime>,
    /// Name of the cookie carrying the session id
    pub session_cookie: Arc<str>,
    /// Prometheus handle, when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(runtime: Runtime, session_cookie: &str) -> Self {
        Self {
            runtime: Arc::new(runtime),
            session_cookie: Arc::from(session_cookie),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Option<PrometheusHandle>) -> Self {
        self.metrics = metrics;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session_cookie", &self.session_cookie)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_clone() {
        // Ensure AppState implements Clone (required for Axum)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_new() {
        let state = AppState::new(SessionRuntime::new(InMemorySessionStorage::new()), "sid");
        assert_eq!(&*state.session_cookie, "sid");
        assert!(state.metrics.is_none());
    }
}
