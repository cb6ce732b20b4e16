//! # Keyboard Panel
//!
//! Stands in for the on-screen keyboard of a phone. It occupies exactly
//! `State::keyboard_height` rows at the bottom of the screen, so the form
//! above it shrinks and grows the way a mobile layout does when the
//! keyboard slides in.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

const KEY_ROWS: [&str; 4] = [
    "q w e r t y u i o p",
    "a s d f g h j k l",
    "z x c v b n m . @",
    "[   space   ]  ⏎",
];

/// Stateless: rebuilt each frame.
pub struct KeyboardPanel;

impl Component for KeyboardPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let inner_rows = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = KEY_ROWS.iter().take(inner_rows).map(|row| Line::from(*row)).collect();

        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Keyboard"),
            );
        frame.render_widget(panel, area);
    }
}
