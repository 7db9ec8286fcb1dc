//! Splash screen shown while the dashboard starts.

use crate::ui::dashboard::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub const LOGO_NAME: &str = r#"
  ██████╗    ██████╗   ████████╗     █████╗   ██████╗   ███╗   ███╗  ██╗  ███╗   ██╗
  ██╔══██╗  ██╔═══██╗  ╚══██╔══╝    ██╔══██╗  ██╔══██╗  ████╗ ████║  ██║  ████╗  ██║
  ██████╔╝  ██║   ██║     ██║       ███████║  ██║  ██║  ██╔████╔██║  ██║  ██╔██╗ ██║
  ██╔══██╗  ██║   ██║     ██║       ██╔══██║  ██║  ██║  ██║╚██╔╝██║  ██║  ██║╚██╗██║
  ██████╔╝  ╚██████╔╝     ██║       ██║  ██║  ██████╔╝  ██║ ╚═╝ ██║  ██║  ██║ ╚████║
  ╚═════╝    ╚═════╝      ╚═╝       ╚═╝  ╚═╝  ╚═════╝   ╚═╝     ╚═╝  ╚═╝  ╚═╝  ╚═══╝
"#;

const TAGLINE: &str = "Subscription Management Dashboard";
const HINT: &str = "press any key to continue";

pub fn render_splash(f: &mut Frame) {
    let logo_lines: Vec<&str> = LOGO_NAME.trim_matches('\n').lines().collect();
    let logo_width = logo_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    // Logo, a gap and four text lines, plus two rows each of border and padding.
    let card_height = logo_lines.len() as u16 + 5 + 4;
    let card = centered_rect(f.area(), logo_width + 6, card_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::uniform(1));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let [logo_area, _, text_area] = Layout::vertical([
        Constraint::Length(logo_lines.len() as u16),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let logo = Paragraph::new(
        logo_lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, logo_style)))
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center);
    f.render_widget(logo, logo_area);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(text, text_area);
}
