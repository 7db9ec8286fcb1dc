//! Dashboard state management
//!
//! Contains the dashboard state struct and the enums describing which view,
//! field and notice are active.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::models::{NewSubscriberForm, StatisticsSnapshot, SubscriberRecord};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// The three mutually exclusive screens of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum View {
    Statistics,
    Subscribers,
    #[strum(to_string = "Add Subscriber")]
    AddSubscriber,
}

impl View {
    pub const ALL: [View; 3] = [View::Statistics, View::Subscribers, View::AddSubscriber];

    pub fn index(self) -> usize {
        match self {
            View::Statistics => 0,
            View::Subscribers => 1,
            View::AddSubscriber => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab label, with the icon shown in the navigation bar.
    pub fn tab_title(self) -> &'static str {
        match self {
            View::Statistics => "📊 Statistics",
            View::Subscribers => "👥 Subscribers",
            View::AddSubscriber => "➕ Add Subscriber",
        }
    }
}

/// Which input of the add-subscriber form receives typed characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Username,
    Email,
    Duration,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Username => FormField::Email,
            FormField::Email => FormField::Duration,
            FormField::Duration => FormField::Username,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Username => FormField::Duration,
            FormField::Email => FormField::Username,
            FormField::Duration => FormField::Email,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// Input rejected before anything was sent.
    Validation,
    Success,
    Error,
}

/// A blocking message that must be dismissed before the dashboard takes input again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn validation(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the dashboard renders from.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend the dashboard talks to.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Last statistics snapshot that loaded successfully.
    pub stats: StatisticsSnapshot,
    /// Last subscriber list that loaded successfully.
    pub subscribers: Vec<SubscriberRecord>,
    /// Add-subscriber form contents.
    pub form: NewSubscriberForm,
    pub focused_field: FormField,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    active_view: View,
    /// True while the most recently started request is outstanding.
    is_loading: bool,
    notice: Option<Notice>,
}

impl DashboardState {
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            with_background_color: ui_config.with_background_color,
            stats: StatisticsSnapshot::default(),
            subscribers: Vec::new(),
            form: NewSubscriberForm::default(),
            focused_field: FormField::default(),
            activity_logs: VecDeque::new(),
            tick: 0,
            active_view: View::Statistics,
            is_loading: false,
            notice: None,
        }
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // Setters are crate-visible so that only the controller drives transitions.
    pub(crate) fn set_active_view(&mut self, view: View) {
        self.active_view = view;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub(crate) fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub(crate) fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Mutable access to the text of the focused field. The duration field is numeric.
    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            FormField::Username => Some(&mut self.form.telegram_username),
            FormField::Email => Some(&mut self.form.email),
            FormField::Duration => None,
        }
    }
}
