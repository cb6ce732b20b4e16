//! # Screen State
//!
//! Everything the sign-in screen renders, in one value.
//!
//! ```text
//! State
//! ├── keyboard_height: u16                       // rows covered by the keyboard
//! ├── email: String                              // last email the form reported
//! ├── view_loaded: bool                          // screen finished loading
//! ├── validation_result: Option<ValidationResult>// verdict for `email`
//! ├── logged_in: bool                            // auth service accepted us
//! └── login_error: Option<LoginFailure>          // last failed login attempt
//! ```
//!
//! State is never edited in place by callers. The reactor owns the current
//! value and replaces it with `reduce(state, mutation)` in mutation.rs.

use std::fmt;

use crate::core::validation::ValidationResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub keyboard_height: u16,
    pub email: String,
    pub view_loaded: bool,
    pub validation_result: Option<ValidationResult>,
    pub logged_in: bool,
    pub login_error: Option<LoginFailure>,
}

impl State {
    /// The state every screen visit starts from.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_height > 0
    }
}

/// A login attempt that did not succeed, as the screen shows it.
///
/// Never fatal: the form stays usable and another attempt can be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// The auth service did not answer within the configured timeout.
    TimedOut,
    /// The request never reached the service, or the service is misconfigured.
    Unreachable(String),
    /// The service answered and said no.
    Rejected(String),
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginFailure::TimedOut => write!(f, "login timed out"),
            LoginFailure::Unreachable(msg) => write!(f, "could not reach login service: {msg}"),
            LoginFailure::Rejected(msg) => write!(f, "login rejected: {msg}"),
        }
    }
}
