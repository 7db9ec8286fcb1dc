//! Dashboard main renderer

use super::components::{add_subscriber, footer, header, logs, notice, statistics, subscribers};
use super::state::{DashboardState, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.active_view() {
        View::Statistics => statistics::render_statistics(f, main_chunks[1], state),
        View::Subscribers => subscribers::render_subscribers(f, main_chunks[1], state),
        View::AddSubscriber => add_subscriber::render_add_subscriber(f, main_chunks[1], state),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);

    if let Some(active_notice) = state.notice() {
        notice::render_notice(f, f.area(), active_notice);
    }
}
