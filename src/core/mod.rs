//! # Core Screen Logic
//!
//! The sign-in screen's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Action (stimuli)     │
//!                    │  • Mutation (changes)   │
//!                    │  • State (snapshot)     │
//!                    │  • SignInReactor        │
//!                    │                         │
//!                    │  Only I/O: AuthService  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │   Mobile   │
//!     │  Adapter   │      │ (direct    │      │  (future)  │
//!     │ (ratatui)  │      │  dispatch) │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: `Action` and `plan()`, which turns an action into a `Transition`
//! - [`mutation`]: `Mutation` and the pure `reduce()` fold
//! - [`state`]: the `State` snapshot
//! - [`validation`]: email verdicts
//! - [`reactor`]: `SignInReactor`, the queue + listener container
//! - [`config`]: file/env/CLI settings

pub mod action;
pub mod config;
pub mod mutation;
pub mod reactor;
pub mod state;
pub mod validation;

pub use action::{Action, EmailInput};
pub use mutation::Mutation;
pub use reactor::SignInReactor;
pub use state::State;
