//! Dashboard utility functions
//!
//! Contains formatting helpers shared by the dashboard components and the
//! one-shot commands.

use crate::consts::cli_consts::DATE_FORMAT;
use crate::ui::dashboard::View;
use chrono::{DateTime, Local, NaiveDateTime};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for the view an activity entry came from
pub fn get_view_color(view: View) -> Color {
    match view {
        View::Statistics => Color::Cyan,
        View::Subscribers => Color::LightBlue,
        View::AddSubscriber => Color::Green,
    }
}

/// Format a backend timestamp as `DD.MM.YYYY HH:MM`.
///
/// Timestamps with an offset are shown in local time; naive ones are shown as-is.
/// Anything unparseable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string();
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return naive.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

/// Format an amount the way the backend's web dashboard did: no trailing `.0`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

/// `"{amount} {currency}"`
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", format_amount(amount), currency)
}

/// Extract (MM-DD HH:MM) from a "YYYY-MM-DD HH:MM:SS" activity timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    match (timestamp.get(5..10), timestamp.get(11..16)) {
        (Some(month_day), Some(hour_min)) => format!("{} {}", month_day, hour_min),
        _ => timestamp.to_string(),
    }
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") {
        if let Some((prefix, _)) = msg.split_once(": Reqwest error") {
            return format!("{}: backend unreachable", prefix);
        }
        return "Backend unreachable".to_string();
    }
    msg.to_string()
}

/// A rectangle of the given size centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
