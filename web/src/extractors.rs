//! Session cookie extraction.
//!
//! Every request belongs to a session. The session id travels in a cookie;
//! a request without a usable cookie is assigned a fresh session and the
//! response carries the `Set-Cookie` header for it.
//!
//! # Example
//!
//! ```ignore
//! async fn handler(session: SessionCookie) -> (SessionCookie, String) {
//!     let body = format!("Session: {}", session.id());
//!     (session, body)
//! }
//! ```

use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponseParts, ResponseParts},
};
use std::convert::Infallible;
use std::sync::Arc;
use todo_lists_runtime::SessionId;

/// The session a request belongs to.
///
/// Return it as the first element of a response tuple so new sessions get
/// their cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    id: SessionId,
    cookie_name: Arc<str>,
    issued: bool,
}

impl SessionCookie {
    /// The session id
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = Arc::clone(&state.session_cookie);
        let session = match session_from_headers(&parts.headers, &cookie_name) {
            Some(id) => Self {
                id,
                cookie_name,
                issued: false,
            },
            None => {
                let id = SessionId::new();
                tracing::debug!(session = %id, "Issuing new session");
                Self {
                    id,
                    cookie_name,
                    issued: true,
                }
            }
        };
        Ok(session)
    }
}

impl IntoResponseParts for SessionCookie {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.issued {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                self.cookie_name, self.id
            );
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    res.headers_mut().append(SET_COOKIE, value);
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Session cookie is not a valid header value");
                }
            }
        }
        Ok(res)
    }
}

/// Finds the session id in the request's `Cookie` headers.
fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        headers
    }

    #[test]
    fn finds_session_among_other_cookies() {
        let id = SessionId::new();
        let second = format!("lang=en; todo_session={id}");
        let headers = headers(&["theme=dark", second.as_str()]);
        assert_eq!(session_from_headers(&headers, "todo_session"), Some(id));
    }

    #[test]
    fn missing_or_malformed_cookie() {
        assert_eq!(session_from_headers(&headers(&[]), "todo_session"), None);
        assert_eq!(
            session_from_headers(&headers(&["todo_session=garbage"]), "todo_session"),
            None
        );
    }

    #[test]
    fn new_session_sets_cookie() {
        let cookie = SessionCookie {
            id: SessionId::new(),
            cookie_name: Arc::from("todo_session"),
            issued: true,
        };
        let response = (cookie.clone(), "body").into_response();
        let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(header.starts_with(&format!("todo_session={}", cookie.id())));
        assert!(header.contains("HttpOnly"));
    }

    #[test]
    fn known_session_sets_no_cookie() {
        let cookie = SessionCookie {
            id: SessionId::new(),
            cookie_name: Arc::from("todo_session"),
            issued: false,
        };
        let response = (cookie, "body").into_response();
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}
