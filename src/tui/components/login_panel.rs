//! # Login Panel
//!
//! The sign-in button and the outcome of the last attempt.
//!
//! Stateless: all three props come straight from the core `State`. The
//! button is always enabled; an invalid email is shown next to the field but
//! does not block the attempt.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::LoginFailure;
use crate::tui::component::Component;

/// Rows the panel occupies (button, blank, status)
pub const PANEL_HEIGHT: u16 = 3;

pub struct LoginPanel<'a> {
    pub email: &'a str,
    pub logged_in: bool,
    pub login_error: Option<&'a LoginFailure>,
}

impl LoginPanel<'_> {
    fn status_line(&self) -> Line<'static> {
        if self.logged_in {
            let who = if self.email.is_empty() {
                "Signed in".to_string()
            } else {
                format!("Signed in as {}", self.email)
            };
            return Line::from(Span::styled(who, Style::default().fg(Color::Green)));
        }
        match self.login_error {
            Some(failure) => Line::from(Span::styled(
                failure.to_string(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "Enter to sign in · Tab to edit email · Ctrl+C to quit",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component for LoginPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button_style = if self.logged_in {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled("  Sign in  ", button_style)),
            Line::default(),
            self.status_line(),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
