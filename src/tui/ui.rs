use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::State;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::email_field::FIELD_HEIGHT;
use crate::tui::components::login_panel::PANEL_HEIGHT;
use crate::tui::components::{KeyboardPanel, LoginPanel, TitleBar};

/// Widest the form gets on large terminals.
const FORM_MAX_WIDTH: u16 = 56;

/// Short status for the title bar, derived from the core state.
pub fn status_message(screen: &State) -> String {
    if !screen.view_loaded {
        "Loading...".to_string()
    } else if screen.logged_in {
        "Signed in".to_string()
    } else if screen.login_error.is_some() {
        "Login failed".to_string()
    } else {
        String::new()
    }
}

pub fn draw_ui(frame: &mut Frame, screen: &State, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(screen.keyboard_height)]);
    let [title_area, form_area, keyboard_area] = layout.areas(frame.area());

    TitleBar::new(tui.backend_name.clone(), status_message(screen)).render(frame, title_area);

    if screen.view_loaded {
        draw_form(frame, form_area, screen, tui);
    } else {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, form_area);
    }

    if screen.keyboard_visible() {
        KeyboardPanel.render(frame, keyboard_area);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, screen: &State, tui: &mut TuiState) {
    let width = area.width.min(FORM_MAX_WIDTH);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    // Keyboard may leave less room than the form needs; field wins
    let [field_area, _, panel_area] = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(PANEL_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    tui.email_field.validation = screen.validation_result;
    tui.email_field.render(frame, field_area);

    LoginPanel {
        email: &screen.email,
        logged_in: screen.logged_in,
        login_error: screen.login_error.as_ref(),
    }
    .render(frame, panel_area);
}
