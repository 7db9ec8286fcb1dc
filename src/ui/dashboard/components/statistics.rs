//! Statistics view
//!
//! Renders the overview tiles and the recent transactions table

use super::super::state::DashboardState;
use super::super::utils::{format_amount, format_money, format_timestamp};
use crate::consts::cli_consts::REVENUE_CURRENCY;
use crate::models::StatisticsSnapshot;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

/// One summary tile: the value as displayed, its label and its accent color.
pub struct Tile {
    pub value: String,
    pub label: &'static str,
    pub color: Color,
}

/// The four overview tiles. Missing fields were already defaulted to 0 on decode.
pub fn summary_tiles(stats: &StatisticsSnapshot) -> [Tile; 4] {
    [
        Tile {
            value: stats.total_users.to_string(),
            label: "Total Users",
            color: Color::LightBlue,
        },
        Tile {
            value: stats.active_subscriptions.to_string(),
            label: "Active Subscriptions",
            color: Color::LightGreen,
        },
        Tile {
            value: stats.expired_subscriptions.to_string(),
            label: "Expired Subscriptions",
            color: Color::LightYellow,
        },
        Tile {
            value: format!("{} {}", format_amount(stats.total_revenue), REVENUE_CURRENCY),
            label: "Total Revenue",
            color: Color::LightMagenta,
        },
    ]
}

pub fn render_statistics(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Fill(1)])
        .split(area);

    render_overview(f, chunks[0], state);
    render_transactions(f, chunks[1], &state.stats);
}

fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("📈 OVERVIEW STATISTICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.is_loading() {
        let spinner = ["|", "/", "-", "\\"][state.tick % 4];
        let loading = Paragraph::new(format!("{} Loading statistics...", spinner))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(loading, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)])
        .split(inner);
    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(rows[0]);

    for (tile, tile_area) in summary_tiles(&state.stats).iter().zip(tile_areas.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                tile.value.clone(),
                Style::default().fg(tile.color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(tile.label, Style::default().fg(Color::Gray))),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(tile.color)),
        );
        f.render_widget(widget, *tile_area);
    }

    let canceled = Paragraph::new(format!(
        "Canceled subscriptions: {}",
        state.stats.canceled_subscriptions
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(canceled, rows[1]);
}

fn render_transactions(f: &mut Frame, area: Rect, stats: &StatisticsSnapshot) {
    let block = Block::default()
        .title("💰 RECENT TRANSACTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if stats.recent_transactions.is_empty() {
        let empty = Paragraph::new("No recent transactions")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["USER ID", "AMOUNT", "STATUS", "DATE"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = stats.recent_transactions.iter().map(|transaction| {
        Row::new([
            Cell::from(transaction.telegram_user_id.clone()),
            Cell::from(format_money(transaction.amount, &transaction.currency)),
            Cell::from(transaction.status.clone()).style(Style::default().fg(Color::Green)),
            Cell::from(format_timestamp(&transaction.created_at))
                .style(Style::default().fg(Color::DarkGray)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}
