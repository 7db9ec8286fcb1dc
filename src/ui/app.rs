//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::AdminApi;
use crate::environment::Environment;
use crate::events::Completion;
use crate::ui::dashboard::{DashboardController, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the statistics, subscribers and add-subscriber views.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Drives the dashboard state.
    controller: DashboardController,

    /// Receives request completions from spawned API calls.
    completion_receiver: mpsc::Receiver<Completion>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn AdminApi>, environment: Environment, ui_config: UIConfig) -> Self {
        let state = DashboardState::new(environment, ui_config);
        let (controller, completion_receiver) = DashboardController::new(api, state);
        Self {
            current_screen: Screen::Splash,
            controller,
            completion_receiver,
        }
    }

    /// Leaves the splash screen and issues the first fetch.
    fn enter_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.controller.start();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        // Apply every completion that arrived since the last frame, in arrival order
        while let Ok(completion) = app.completion_receiver.try_recv() {
            app.controller.apply(completion);
        }

        if app.current_screen == Screen::Dashboard {
            app.controller.tick();
        }
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.enter_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard => {
                        if app.controller.handle_key(key) {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, app.controller.state()),
    }
}
