//! Add-subscriber view
//!
//! Renders the provisioning form and the bot-contact reminder

use super::super::state::{DashboardState, FormField};
use crate::consts::cli_consts::notices::BOT_CONTACT_REQUIRED;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_add_subscriber(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("➕ ADD NEW SUBSCRIBER")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(inner);

    let form = &state.form;
    let placeholder_or = |value: &str, placeholder: &'static str| -> Span<'static> {
        if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        }
    };

    render_field(
        f,
        chunks[0],
        "Telegram Username (without @)",
        placeholder_or(&form.telegram_username, "username"),
        state.focused_field == FormField::Username,
    );
    render_field(
        f,
        chunks[1],
        "Email Address",
        placeholder_or(&form.email, "user@example.com"),
        state.focused_field == FormField::Email,
    );
    render_field(
        f,
        chunks[2],
        "Duration (Days)",
        Span::raw(form.duration_days.to_string()),
        state.focused_field == FormField::Duration,
    );

    let submit = if state.is_loading() {
        Paragraph::new("Adding Subscriber...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new("[Enter] Add Subscriber").style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(submit.alignment(Alignment::Center), chunks[3]);

    let note = Paragraph::new(Line::from(vec![
        Span::styled("Note: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(BOT_CONTACT_REQUIRED),
    ]))
    .style(Style::default().fg(Color::Yellow))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(note, chunks[4]);
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: Span<'static>, focused: bool) {
    let border_color = if focused { Color::LightBlue } else { Color::DarkGray };
    let mut spans = vec![value];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::LightBlue)));
    }
    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(label.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(field, area);
}
