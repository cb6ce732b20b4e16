//! # Actions
//!
//! Everything that can happen on the sign-in screen becomes an `Action`.
//! Screen appeared? That's `Action::ViewDidLoad`.
//! User typed in the email field? That's `Action::SetEmail(EmailInput::Set(..))`.
//!
//! `plan()` decides what an action turns into, given the current state.
//! Most actions resolve to a mutation right away. `LoginButtonTapped` needs
//! the auth service, so it comes back as `Transition::Login` and the reactor
//! awaits the outcome before producing a mutation.
//!
//! ```text
//! Action  →  plan()  →  Transition  →  (0 or 1) Mutation
//! ```

use crate::auth::LoginRequest;
use crate::core::mutation::Mutation;
use crate::core::state::State;
use crate::core::validation::EmailValidator;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ViewDidLoad,
    /// Keyboard is about to cover this many rows.
    KeyboardWillShow(u16),
    KeyboardWillHide,
    SetEmail(EmailInput),
    LoginButtonTapped,
}

/// What the email field reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailInput {
    /// Field was cleared. Produces no mutation; state keeps the last email.
    Cleared,
    Set(String),
}

impl From<Option<String>> for EmailInput {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(email) => EmailInput::Set(email),
            None => EmailInput::Cleared,
        }
    }
}

/// The outcome of planning a single action.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Nothing to apply; state stays as is.
    Skip,
    /// Already resolved.
    Apply(Mutation),
    /// The auth service must run. Its outcome becomes the mutation.
    Login(LoginRequest),
}

impl Transition {
    /// The mutation if no effect is needed, `None` for `Skip` and `Login`.
    pub fn into_resolved(self) -> Option<Mutation> {
        match self {
            Transition::Apply(mutation) => Some(mutation),
            Transition::Skip | Transition::Login(_) => None,
        }
    }
}

pub fn plan(action: Action, state: &State, validator: &dyn EmailValidator) -> Transition {
    match action {
        Action::ViewDidLoad => Transition::Apply(Mutation::ViewLoaded),
        Action::KeyboardWillShow(height) => Transition::Apply(Mutation::SetKeyboardHeight(height)),
        Action::KeyboardWillHide => Transition::Apply(Mutation::SetKeyboardHeight(0)),
        Action::SetEmail(EmailInput::Cleared) => Transition::Skip,
        Action::SetEmail(EmailInput::Set(email)) => {
            let validation = validator.validate(&email);
            Transition::Apply(Mutation::SetEmailInfo { email, validation })
        }
        Action::LoginButtonTapped => Transition::Login(LoginRequest {
            email: state.email.clone(),
        }),
    }
}
