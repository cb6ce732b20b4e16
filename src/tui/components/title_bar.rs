//! # TitleBar Component
//!
//! Top line of the screen: app name, which auth backend is in use, and a
//! short status derived from the core state.
//!
//! Purely presentational. It receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("stub".to_string(), "Ready".to_string());
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Auth backend name (e.g. "stub", "http")
    pub backend_name: String,
    /// Status text, empty for none
    pub status_message: String,
}

impl TitleBar {
    pub fn new(backend_name: String, status_message: String) -> Self {
        Self {
            backend_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Sign In (auth: {})", self.backend_name)
        } else {
            format!(
                "Sign In (auth: {}) | {}",
                self.backend_name, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
