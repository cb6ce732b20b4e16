//! # Mutations
//!
//! A `Mutation` is an already-resolved change. Only the reactor produces
//! them; the UI never does. `reduce()` folds one into a new `State`:
//!
//! ```text
//! State + Mutation  →  reduce()  →  New State
//! ```
//!
//! `reduce` is pure and total. Each variant touches only the fields it names.

use crate::core::state::{LoginFailure, State};
use crate::core::validation::ValidationResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ViewLoaded,
    SetKeyboardHeight(u16),
    SetEmailInfo {
        email: String,
        validation: ValidationResult,
    },
    /// Also clears `login_error`.
    SetLoggedIn(bool),
    LoginFailed(LoginFailure),
}

pub fn reduce(state: &State, mutation: Mutation) -> State {
    let mut next = state.clone();
    match mutation {
        Mutation::ViewLoaded => {
            next.view_loaded = true;
        }
        Mutation::SetKeyboardHeight(height) => {
            next.keyboard_height = height;
        }
        Mutation::SetEmailInfo { email, validation } => {
            next.email = email;
            next.validation_result = Some(validation);
        }
        Mutation::SetLoggedIn(logged_in) => {
            next.logged_in = logged_in;
            next.login_error = None;
        }
        Mutation::LoginFailed(failure) => {
            next.login_error = Some(failure);
        }
    }
    next
}
