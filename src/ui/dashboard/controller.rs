//! Dashboard controller
//!
//! Owns the dashboard state and is the only thing that changes it. Requests
//! run as spawned tasks; their results come back as [`Completion`]s through a
//! channel drained by the UI loop and are applied with [`DashboardController::apply`].

use super::state::{DashboardState, FormField, Notice, View};
use crate::api::AdminApi;
use crate::consts::cli_consts::{COMPLETION_QUEUE_SIZE, notices};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Completion, Event};
use crate::logging::LogLevel;
use crate::models::NewSubscriberForm;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DashboardController {
    state: DashboardState,
    api: Arc<dyn AdminApi>,
    completion_sender: mpsc::Sender<Completion>,
    error_classifier: ErrorClassifier,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Creates the controller and the receiving end for its request completions.
    pub fn new(
        api: Arc<dyn AdminApi>,
        state: DashboardState,
    ) -> (Self, mpsc::Receiver<Completion>) {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);
        let controller = Self {
            state,
            api,
            completion_sender,
            error_classifier: ErrorClassifier::new(),
        };
        (controller, completion_receiver)
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Advances the animation tick once per frame.
    pub fn tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);
    }

    /// Loads the data for whichever view is active when the dashboard first appears.
    pub fn start(&mut self) {
        match self.state.active_view() {
            View::Statistics => self.refresh_statistics(),
            View::Subscribers => self.refresh_subscribers(),
            View::AddSubscriber => {}
        }
    }

    /// Switches the active view and fetches its data. Re-selecting the active view does nothing.
    pub fn select_view(&mut self, view: View) {
        if self.state.active_view() == view {
            return;
        }
        self.state.set_active_view(view);
        match view {
            View::Statistics => self.refresh_statistics(),
            View::Subscribers => self.refresh_subscribers(),
            View::AddSubscriber => {}
        }
    }

    pub fn refresh_statistics(&mut self) {
        self.state.set_loading(true);
        let api = Arc::clone(&self.api);
        self.dispatch(async move { Completion::Statistics(api.get_statistics().await) });
    }

    pub fn refresh_subscribers(&mut self) {
        self.state.set_loading(true);
        let api = Arc::clone(&self.api);
        self.dispatch(async move { Completion::Subscribers(api.list_subscribers().await) });
    }

    /// Sends the form to the backend, or shows a validation notice if a required field is empty.
    pub fn submit_new_subscriber(&mut self) {
        if !self.state.form.is_complete() {
            self.state
                .show_notice(Notice::validation(notices::MISSING_FIELDS));
            return;
        }

        self.state.set_loading(true);
        let api = Arc::clone(&self.api);
        let form = self.state.form.clone();
        self.dispatch(async move { Completion::AddSubscriber(api.add_subscriber(form).await) });
    }

    /// Applies a finished request to the state. Always leaves the dashboard not loading.
    pub fn apply(&mut self, completion: Completion) {
        let source = completion.source();
        match completion {
            Completion::Statistics(Ok(snapshot)) => {
                self.state.add_to_activity_log(Event::refresh(
                    source,
                    format!("Statistics updated ({} users)", snapshot.total_users),
                ));
                self.state.stats = snapshot;
            }
            Completion::Subscribers(Ok(subscribers)) => {
                self.state.add_to_activity_log(Event::refresh(
                    source,
                    format!("Loaded {} subscribers", subscribers.len()),
                ));
                self.state.subscribers = subscribers;
            }
            Completion::Statistics(Err(e)) => {
                log::error!("Error fetching stats: {}", e);
                let level = self.error_classifier.classify_api_error(&e);
                self.state.add_to_activity_log(Event::error(
                    source,
                    format!("Error fetching stats: {}", e),
                    level,
                ));
            }
            Completion::Subscribers(Err(e)) => {
                log::error!("Error fetching subscribers: {}", e);
                let level = self.error_classifier.classify_api_error(&e);
                self.state.add_to_activity_log(Event::error(
                    source,
                    format!("Error fetching subscribers: {}", e),
                    level,
                ));
            }
            Completion::AddSubscriber(Ok(response)) if response.success => {
                let summary = format!(
                    "Added @{} for {} days",
                    self.state.form.telegram_username, self.state.form.duration_days
                );
                self.state
                    .add_to_activity_log(Event::success(source, summary));
                self.state
                    .show_notice(Notice::success(notices::SUBSCRIBER_ADDED));
                self.state.form = NewSubscriberForm::default();
                self.state.focused_field = FormField::default();
                if self.state.active_view() == View::Subscribers {
                    self.refresh_subscribers();
                }
            }
            Completion::AddSubscriber(Ok(response)) => {
                let message = response
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| notices::ADD_FAILED.to_string());
                self.state.add_to_activity_log(Event::error(
                    source,
                    message.clone(),
                    LogLevel::Warn,
                ));
                self.state.show_notice(Notice::error(message));
            }
            Completion::AddSubscriber(Err(e)) => {
                log::error!("Error adding subscriber: {}", e);
                let level = self.error_classifier.classify_api_error(&e);
                self.state.add_to_activity_log(Event::error(
                    source,
                    format!("Error adding subscriber: {}", e),
                    level,
                ));
                self.state
                    .show_notice(Notice::error(notices::ADD_TRANSPORT_FAILED));
            }
        }
        self.state.set_loading(false);
    }

    /// Handles one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // An open notice swallows everything until dismissed.
        if self.state.notice().is_some() {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
            ) {
                self.state.dismiss_notice();
            }
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.select_view(self.state.active_view().next()),
            KeyCode::BackTab => self.select_view(self.state.active_view().previous()),
            KeyCode::F(1) => self.select_view(View::Statistics),
            KeyCode::F(2) => self.select_view(View::Subscribers),
            KeyCode::F(3) => self.select_view(View::AddSubscriber),
            _ => match self.state.active_view() {
                View::AddSubscriber => self.handle_form_key(key),
                View::Subscribers => match key.code {
                    KeyCode::Char('q') => return true,
                    KeyCode::Char('r') if !self.state.is_loading() => self.refresh_subscribers(),
                    _ => {}
                },
                View::Statistics => {
                    if key.code == KeyCode::Char('q') {
                        return true;
                    }
                }
            },
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.focused_field = self.state.focused_field.previous(),
            KeyCode::Down => self.state.focused_field = self.state.focused_field.next(),
            KeyCode::Enter => {
                if !self.state.is_loading() {
                    self.submit_new_subscriber();
                }
            }
            KeyCode::Backspace => match self.state.focused_text_mut() {
                Some(text) => {
                    text.pop();
                }
                None => self.state.form.duration_days /= 10,
            },
            // Ctrl/Alt chords are shortcuts, not text.
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => match self.state.focused_text_mut() {
                Some(text) => text.push(c),
                None => {
                    if let Some(digit) = c.to_digit(10) {
                        let days = &mut self.state.form.duration_days;
                        if let Some(updated) =
                            days.checked_mul(10).and_then(|d| d.checked_add(digit))
                        {
                            *days = updated;
                        }
                    }
                }
            },
            _ => {}
        }
    }

    /// Runs a request in the background and forwards its completion to the UI loop.
    fn dispatch<F>(&self, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let sender = self.completion_sender.clone();
        tokio::spawn(async move {
            // The receiver is gone only when the dashboard has shut down.
            let _ = sender.send(request.await).await;
        });
    }
}
