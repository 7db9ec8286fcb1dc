//! Blocking notice popup

use super::super::state::{Notice, NoticeKind};
use super::super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Draw the notice over whatever view is underneath.
pub fn render_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let (title, color) = match notice.kind {
        NoticeKind::Validation => ("NOTICE", Color::Yellow),
        NoticeKind::Success => ("SUCCESS", Color::Green),
        NoticeKind::Error => ("ERROR", Color::Red),
    };

    let popup = centered_rect(area, 60, 7);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(notice.text.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(widget, popup);
}
