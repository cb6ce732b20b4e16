use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::state::LoginFailure;

/// Errors that can occur while talking to an auth backend.
#[derive(Debug)]
pub enum AuthError {
    /// Service misconfigured (missing or malformed URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service returned a non-success response.
    Api { status: u16, message: String },
    /// Service answered but refused the credentials.
    Rejected(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Config(msg) => write!(f, "config error: {msg}"),
            AuthError::Network(msg) => write!(f, "network error: {msg}"),
            AuthError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            AuthError::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for LoginFailure {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Config(msg) | AuthError::Network(msg) => LoginFailure::Unreachable(msg),
            AuthError::Api { status, message } if status >= 500 => {
                LoginFailure::Unreachable(format!("HTTP {status}: {message}"))
            }
            AuthError::Api { status, message } => {
                LoginFailure::Rejected(format!("HTTP {status}: {message}"))
            }
            AuthError::Rejected(msg) => LoginFailure::Rejected(msg),
        }
    }
}

/// Everything a service gets for one login attempt.
///
/// The email is passed through as typed; it has not been required to pass
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the name of the service.
    fn name(&self) -> &str;

    /// Attempts a login. Dropping the returned future cancels the attempt.
    async fn attempt_login(&self, request: LoginRequest) -> Result<(), AuthError>;
}
