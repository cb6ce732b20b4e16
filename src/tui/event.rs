use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Screen-level events (become core Actions)
    ForceQuit,
    Submit,
    FocusNext,
    Escape,

    // Field-local events (handled by the email field)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearField,

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }

    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };

    translate(event)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Ignore key releases (reported by terminals with enhancement flags)
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::ClearField),
                (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::CursorHome),
                (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        // Single-line field: newlines in pasted text are dropped
        Event::Paste(data) => Some(TuiEvent::Paste(data.replace(['\r', '\n'], ""))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
