//! Dashboard footer component
//!
//! Renders the key bindings for the active view

use super::super::state::{DashboardState, View};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view_keys = match state.active_view() {
        View::Statistics => "[Q] Quit",
        View::Subscribers => "[R] Refresh | [Q] Quit",
        View::AddSubscriber => "[Up/Down] Field | [Enter] Add | [Esc] Quit",
    };
    let footer_text = format!("[Tab/F1-F3] Switch view | {}", view_keys);

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
