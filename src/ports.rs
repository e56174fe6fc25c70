//! Collaborator ports consumed by the flows.
//!
//! The flows own no transport, persistence, or routing of their own;
//! everything side-effectful arrives through these traits so the screens
//! can be driven against real adapters in the app and scripted doubles
//! in tests.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::model::{ConcertRecord, Session};

/// Failure reported by the sign-up collaborator.
///
/// Carries the server's human-readable message when one was supplied;
/// the flow substitutes a generic notice otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("sign-up request failed"))]
pub struct AuthError {
    pub message: Option<String>,
}

/// Failure reported by the concert fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("failed to decode concert payload: {0}")]
    Decode(String),
}

/// Screens the flows can ask the navigator to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Artist { artist_name: String },
    PastSetlists { artist_name: String },
}

/// Account sign-up endpoint.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Registers a new account and returns the session issued for it.
    async fn signup(
        &self,
        email: &str,
        password: &SecretString,
        nickname: &str,
    ) -> Result<Session, AuthError>;
}

/// Concert lookup endpoint.
#[async_trait]
pub trait ConcertApi: Send + Sync {
    /// Fetches the concert record for `id`.
    async fn get_concert(&self, id: &str) -> Result<ConcertRecord, FetchError>;
}

/// Session sink. Fire-and-forget; assumed to always succeed.
pub trait SessionStore: Send + Sync {
    fn login(&self, session: Session);
}

/// Navigation sink. Fire-and-forget.
pub trait Navigator: Send + Sync {
    /// Pushes `screen` onto the navigation stack.
    fn go_to(&self, screen: Screen);

    /// Clears the stack and makes `screen` the only entry.
    fn reset_to(&self, screen: Screen);
}
