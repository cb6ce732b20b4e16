//! # TUI Components
//!
//! The pieces of the sign-in screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Rebuilt every frame from the latest `State` snapshot:
//! - `TitleBar`: app name, auth backend, status
//! - `LoginPanel`: sign-in button and last attempt outcome
//! - `KeyboardPanel`: stand-in for the on-screen keyboard
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `EmailField`: owns the text being typed, emits `FieldEvent`s
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── login_panel.rs
//! ├── keyboard.rs
//! └── email_field/     (text input + cursor/scroll)
//! ```

pub mod email_field;
pub mod keyboard;
pub mod login_panel;
mod title_bar;

pub use email_field::{EmailField, FieldEvent};
pub use keyboard::KeyboardPanel;
pub use login_panel::LoginPanel;
pub use title_bar::TitleBar;
