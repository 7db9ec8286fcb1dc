//! Event System
//!
//! Request completions flowing back to the UI loop, and the activity log
//! entries they produce.

use crate::api::error::ApiError;
use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{AddSubscriberResponse, StatisticsSnapshot, SubscriberRecord};
use crate::ui::dashboard::View;
use chrono::Local;
use std::fmt::Display;

/// Outcome of one request task. Completions are applied in the order they
/// arrive, not the order the requests were issued.
#[derive(Debug)]
pub enum Completion {
    Statistics(Result<StatisticsSnapshot, ApiError>),
    Subscribers(Result<Vec<SubscriberRecord>, ApiError>),
    AddSubscriber(Result<AddSubscriberResponse, ApiError>),
}

impl Completion {
    /// The view whose request produced this completion.
    pub fn source(&self) -> View {
        match self {
            Completion::Statistics(_) => View::Statistics,
            Completion::Subscribers(_) => View::Subscribers,
            Completion::AddSubscriber(_) => View::AddSubscriber,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: View,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: View, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(source: View, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Refresh, LogLevel::Debug)
    }

    pub fn success(source: View, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn error(source: View, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(source, msg.into(), EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
