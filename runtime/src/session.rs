//! Session documents.
//!
//! A session is the single mutable document one user works against: their
//! lists plus at most one pending flash message.

use serde::{Deserialize, Serialize};
use todo_lists_core::{ListStore, Outcome};
use uuid::Uuid;

/// Identifier of a user session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random `SessionId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One-shot confirmation shown to the user on their next page view
///
/// Only accepted commands leave one. A rejected command reports its
/// message in the response that rejected it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Message text
    pub message: String,
}

impl Flash {
    /// Creates a flash holding `message`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&Outcome> for Flash {
    fn from(outcome: &Outcome) -> Self {
        Self::new(outcome.message())
    }
}

/// Everything stored for one session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The session's lists
    pub lists: ListStore,
    /// Pending flash message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl Session {
    /// Creates an empty session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: ListStore::new(),
            flash: None,
        }
    }

    /// Replaces the pending flash with the confirmation for an accepted
    /// command
    pub fn record(&mut self, outcome: &Outcome) {
        self.flash = Some(Flash::from(outcome));
    }

    /// Removes and returns the pending flash
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}
