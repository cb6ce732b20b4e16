//! # TUI Adapter
//!
//! The ratatui-specific layer. Hosts the sign-in screen in a terminal,
//! renders `State` snapshots, and translates key presses into core
//! `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Threading
//!
//! ```text
//!   UI thread                              tokio task
//!   ─────────                              ──────────
//!   crossterm event ─► handle_event ─► Action ──(mpsc)──► SignInReactor::run
//!   draw_ui ◄──────────── State snapshot ◄──(mpsc)────── listener
//! ```
//!
//! The reactor task is the only writer of `State`. The UI thread only ever
//! holds a copy of the latest snapshot. Aborting the task on exit cancels
//! a login that is still in flight.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc::UnboundedSender;

use crate::Backend;
use crate::auth::{AuthService, HttpAuthService, StubAuthService};
use crate::core::action::{Action, EmailInput};
use crate::core::config::ResolvedConfig;
use crate::core::reactor::SignInReactor;
use crate::core::state::State;
use crate::tui::component::EventHandler;
use crate::tui::components::{EmailField, FieldEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core screen logic)
pub struct TuiState {
    pub email_field: EmailField,
    /// Auth backend name for the title bar
    pub backend_name: String,
    /// Rows reported in `KeyboardWillShow` when the field gains focus
    pub keyboard_rows: u16,
}

impl TuiState {
    pub fn new(backend_name: String, keyboard_rows: u16) -> Self {
        Self {
            email_field: EmailField::new(),
            backend_name,
            keyboard_rows,
        }
    }
}

/// What the event loop should do after a terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send(Action),
    Quit,
}

/// Route one terminal event. Focus is TUI-local; everything that changes
/// screen data goes out as an `Action`.
pub fn handle_event(tui: &mut TuiState, event: &TuiEvent) -> Vec<Command> {
    match event {
        TuiEvent::ForceQuit => vec![Command::Quit],
        TuiEvent::Resize => Vec::new(),
        TuiEvent::Submit => vec![Command::Send(Action::LoginButtonTapped)],
        TuiEvent::FocusNext => {
            if tui.email_field.focused {
                blur(tui)
            } else {
                focus(tui)
            }
        }
        TuiEvent::Escape => {
            if tui.email_field.focused {
                blur(tui)
            } else {
                Vec::new()
            }
        }
        _ => {
            // Editing auto-focuses the field, like tapping into it
            let mut commands = if tui.email_field.focused {
                Vec::new()
            } else {
                focus(tui)
            };
            match tui.email_field.handle_event(event) {
                Some(FieldEvent::Changed(email)) => {
                    commands.push(Command::Send(Action::SetEmail(EmailInput::Set(email))));
                }
                // An emptied text field still has a value: ""
                Some(FieldEvent::Cleared) => {
                    commands.push(Command::Send(Action::SetEmail(EmailInput::Set(String::new()))));
                }
                Some(FieldEvent::CursorMoved) | None => {}
            }
            commands
        }
    }
}

fn focus(tui: &mut TuiState) -> Vec<Command> {
    tui.email_field.focused = true;
    vec![Command::Send(Action::KeyboardWillShow(tui.keyboard_rows))]
}

fn blur(tui: &mut TuiState) -> Vec<Command> {
    tui.email_field.focused = false;
    vec![Command::Send(Action::KeyboardWillHide)]
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Build an auth service from the resolved config.
pub fn build_auth_service(config: &ResolvedConfig) -> Arc<dyn AuthService> {
    match config.backend {
        Backend::Stub => Arc::new(StubAuthService),
        Backend::Http => Arc::new(HttpAuthService::new(config.auth_base_url.clone())),
    }
}

fn send_action(tx: &UnboundedSender<Action>, action: Action) {
    debug!("Sending action: {:?}", action);
    if tx.send(action).is_err() {
        warn!("Failed to send action: reactor stopped");
    }
}

/// Runs the sign-in screen until the user quits.
///
/// Must be called from within a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let auth = build_auth_service(&config);
    let mut tui = TuiState::new(auth.name().to_string(), config.keyboard_height);

    let mut reactor = SignInReactor::new(auth).with_login_timeout(config.login_timeout);

    // Snapshots flow back to the UI thread
    let (state_tx, state_rx) = mpsc::channel::<State>();
    reactor.subscribe(move |state| {
        if state_tx.send(state.clone()).is_err() {
            debug!("State snapshot dropped: UI closed");
        }
    });

    let (action_tx, action_rx) = tokio::sync::mpsc::unbounded_channel();
    let reactor_task = tokio::spawn(reactor.run(action_rx));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    send_action(&action_tx, Action::ViewDidLoad);

    let mut screen = State::initial();
    let mut needs_redraw = true;

    loop {
        while let Ok(snapshot) = state_rx.try_recv() {
            screen = snapshot;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &screen, &mut tui))?;
            needs_redraw = false;
        }

        // Short timeout so snapshots from a finished login show up promptly
        let first_event = poll_event_timeout(Duration::from_millis(50));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            for command in handle_event(&mut tui, &event) {
                match command {
                    Command::Send(action) => send_action(&action_tx, action),
                    Command::Quit => should_quit = true,
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Quit requested, stopping reactor");
    reactor_task.abort();

    ratatui::restore();
    Ok(())
}
