//! # EmailField Component
//!
//! Single-line text input for the email address.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement, clear)
//! - Display the validation verdict from the core state
//!
//! ## State Management
//!
//! The buffer is internal state: it is what the user is typing right now.
//! The verdict and focus are props. Every edit is reported upward as a
//! `FieldEvent` so the adapter can turn it into `Action::SetEmail`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::validation::ValidationResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary, visible_slice};

/// Rows the field occupies (text line plus borders)
pub const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by the EmailField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text changed; carries the full new value
    Changed(String),
    /// User cleared the field (Ctrl+U)
    Cleared,
    /// Only the cursor moved
    CursorMoved,
}

pub struct EmailField {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Verdict for the last reported value (Prop)
    pub validation: Option<ValidationResult>,
    /// Whether the field has focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl EmailField {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            validation: None,
            focused: false,
            cursor: CursorState::new(),
        }
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.buffer.clone()))
    }

    fn verdict_line(&self) -> Option<Line<'static>> {
        match self.validation? {
            ValidationResult::Valid => Some(Line::from(Span::styled(
                " ✓ looks good ",
                Style::default().fg(Color::Green),
            ))),
            ValidationResult::Invalid(reason) => Some(Line::from(Span::styled(
                format!(" {} ", reason.label()),
                Style::default().fg(Color::Red),
            ))),
        }
    }
}

impl Default for EmailField {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EmailField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.cursor.update_scroll(&self.buffer, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Email");
        if let Some(verdict) = self.verdict_line() {
            block = block.title_bottom(verdict);
        }

        let visible = visible_slice(&self.buffer, self.cursor.scroll_cols, width);
        let input = Paragraph::new(visible.to_string()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for EmailField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, text);
                self.cursor.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                FieldEvent::CursorMoved
            }),
            TuiEvent::ClearField => {
                self.buffer.clear();
                self.cursor.reset();
                Some(FieldEvent::Cleared)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::InvalidReason;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(field: &mut EmailField, text: &str) -> Option<FieldEvent> {
        let mut last = None;
        for c in text.chars() {
            last = field.handle_event(&TuiEvent::InputChar(c));
        }
        last
    }

    fn rendered_text(field: &mut EmailField, width: u16) -> String {
        let backend = TestBackend::new(width, FIELD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| field.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_reports_full_value() {
        let mut field = EmailField::new();
        let res = type_str(&mut field, "ab@c");
        assert_eq!(res, Some(FieldEvent::Changed("ab@c".into())));
        assert_eq!(field.buffer, "ab@c");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = EmailField::new();
        type_str(&mut field, "abc");

        assert_eq!(
            field.handle_event(&TuiEvent::Backspace),
            Some(FieldEvent::Changed("ab".into()))
        );
        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            field.handle_event(&TuiEvent::Delete),
            Some(FieldEvent::Changed("b".into()))
        );
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = EmailField::new();
        type_str(&mut field, "ac");
        field.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('b')),
            Some(FieldEvent::Changed("abc".into()))
        );
    }

    #[test]
    fn test_cursor_moves_at_bounds_are_ignored() {
        let mut field = EmailField::new();
        assert_eq!(field.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(field.handle_event(&TuiEvent::CursorRight), None);
        type_str(&mut field, "x");
        assert_eq!(
            field.handle_event(&TuiEvent::CursorLeft),
            Some(FieldEvent::CursorMoved)
        );
    }

    #[test]
    fn test_clear_emits_cleared() {
        let mut field = EmailField::new();
        type_str(&mut field, "user@example.com");
        assert_eq!(
            field.handle_event(&TuiEvent::ClearField),
            Some(FieldEvent::Cleared)
        );
        assert!(field.buffer.is_empty());
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut field = EmailField::new();
        assert_eq!(
            field.handle_event(&TuiEvent::Paste("user@example.com".into())),
            Some(FieldEvent::Changed("user@example.com".into()))
        );
        assert_eq!(field.handle_event(&TuiEvent::Paste(String::new())), None);
    }

    #[test]
    fn test_screen_events_are_not_consumed() {
        let mut field = EmailField::new();
        assert_eq!(field.handle_event(&TuiEvent::Submit), None);
        assert_eq!(field.handle_event(&TuiEvent::Escape), None);
    }

    #[test]
    fn test_render_shows_invalid_reason() {
        let mut field = EmailField::new();
        type_str(&mut field, "user");
        field.validation = Some(ValidationResult::Invalid(InvalidReason::MissingAt));

        let text = rendered_text(&mut field, 40);
        assert!(text.contains("Email"));
        assert!(text.contains("user"));
        assert!(text.contains(InvalidReason::MissingAt.label()));
    }

    #[test]
    fn test_render_shows_valid_verdict() {
        let mut field = EmailField::new();
        field.validation = Some(ValidationResult::Valid);
        let text = rendered_text(&mut field, 40);
        assert!(text.contains("looks good"));
    }

    #[test]
    fn test_render_scrolls_long_input() {
        let mut field = EmailField::new();
        field.focused = true;
        type_str(&mut field, "averyveryverylongname@example.com");

        let text = rendered_text(&mut field, 12);
        assert!(text.contains(".com"));
        assert!(!text.contains("avery"));
    }
}
