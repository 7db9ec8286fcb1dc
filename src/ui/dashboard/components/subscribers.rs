//! Subscribers view
//!
//! Renders the active subscriber table with its refresh control

use super::super::state::DashboardState;
use super::super::utils::{format_money, format_timestamp};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn render_subscribers(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("👥 ACTIVE SUBSCRIBERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    // The refresh control is disabled while any request is in flight.
    let (label, style) = if state.is_loading() {
        ("Refreshing...", Style::default().fg(Color::DarkGray))
    } else {
        (
            "[R] Refresh",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(
        Paragraph::new(label).alignment(Alignment::Right).style(style),
        chunks[0],
    );

    if state.is_loading() {
        let spinner = ["|", "/", "-", "\\"][state.tick % 4];
        let loading = Paragraph::new(format!("{} Loading subscribers...", spinner))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(loading, chunks[1]);
        return;
    }

    if state.subscribers.is_empty() {
        let empty = Paragraph::new("No active subscribers found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new([
        "TELEGRAM USERNAME",
        "EMAIL",
        "SUBSCRIPTION END",
        "AMOUNT",
        "JOINED",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = state.subscribers.iter().map(|subscriber| {
        Row::new([
            Cell::from(subscriber.display_username()),
            Cell::from(subscriber.display_email().to_string()),
            Cell::from(format_timestamp(&subscriber.current_period_end)),
            Cell::from(format_money(subscriber.amount, &subscriber.currency)),
            Cell::from(format_timestamp(&subscriber.created_at))
                .style(Style::default().fg(Color::DarkGray)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(26),
            Constraint::Percentage(19),
            Constraint::Percentage(14),
            Constraint::Percentage(19),
        ],
    )
    .header(header);
    f.render_widget(table, chunks[1]);
}
