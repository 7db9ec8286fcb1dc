mod api;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod ui;

use crate::api::AdminClient;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::BACKEND_URL_ENV;
use crate::environment::Environment;
use crate::models::NewSubscriberForm;
use crate::session::messages::SessionMessage;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Subscription admin dashboard for the bot backend
struct Args {
    /// Backend origin (e.g. https://bot.example.com) or `local`. Overrides BACKEND_URL and the saved config.
    #[arg(long, global = true, value_name = "URL")]
    backend_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Fill the dashboard background with a dark color
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print aggregate statistics and recent transactions
    Stats,
    /// Print the active subscribers
    Subscribers,
    /// Provision a subscriber for a user who has already started the bot
    AddSubscriber {
        /// Telegram username, without the leading @
        #[arg(long)]
        username: String,

        /// Email address of the subscriber
        #[arg(long)]
        email: String,

        /// Subscription length in days
        #[arg(long, default_value_t = consts::cli_consts::DEFAULT_DURATION_DAYS)]
        days: u32,
    },
    /// Save the backend origin used when no --backend-url or BACKEND_URL is given
    SetBackend {
        /// Backend origin, or `local` for http://localhost:8001
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Remove the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            SessionMessage::error(e.to_string()).print();
            ExitCode::FAILURE
        }
    }
}

/// Executes one command. Failures that were already reported come back as
/// `ExitCode::FAILURE`; anything else is printed once by `main`.
async fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let config_path = get_config_path()?;

    // The TUI owns the terminal, so diagnostics only go to stderr for one-shot commands.
    if !matches!(args.command, Command::Start { .. }) {
        logging::init_stderr_logger();
    }

    match args.command {
        Command::SetBackend { url } => {
            let environment = url.parse::<Environment>()?;
            Config::new(url.trim().to_string())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            SessionMessage::success(format!("Backend set to {}", environment)).print();
            Ok(ExitCode::SUCCESS)
        }
        Command::Reset => {
            SessionMessage::info("Clearing saved configuration...").print();
            Config::clear(&config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Start { with_background } => {
            let environment = resolve_environment(args.backend_url, &config_path)?;
            let client = AdminClient::new(environment)?;
            session::run_tui_mode(client, with_background).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Stats => {
            let environment = resolve_environment(args.backend_url, &config_path)?;
            let client = AdminClient::new(environment)?;
            Ok(exit_code(session::print_statistics(&client).await.is_ok()))
        }
        Command::Subscribers => {
            let environment = resolve_environment(args.backend_url, &config_path)?;
            let client = AdminClient::new(environment)?;
            Ok(exit_code(session::print_subscribers(&client).await.is_ok()))
        }
        Command::AddSubscriber {
            username,
            email,
            days,
        } => {
            let form = NewSubscriberForm::new(username, email, days);
            // Validate before touching config or network
            if !form.is_complete() {
                return Err(session::CommandError::Validation.into());
            }
            let environment = resolve_environment(args.backend_url, &config_path)?;
            let client = AdminClient::new(environment)?;
            let confirmation = session::add_subscriber(&client, form).await?;
            SessionMessage::success(confirmation).print();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Resolves the backend: `--backend-url`, then `BACKEND_URL`, then the saved config.
fn resolve_environment(flag: Option<String>, config_path: &Path) -> Result<Environment, Box<dyn Error>> {
    let from_env = std::env::var(BACKEND_URL_ENV).ok();
    let from_config = if config_path.exists() {
        Some(
            Config::load_from_file(config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?
                .backend_url,
        )
    } else {
        None
    };

    let url = pick_backend_url(flag, from_env, from_config).ok_or(
        "No backend configured. Pass --backend-url, set BACKEND_URL, or run `bot-admin set-backend --url <URL>`.",
    )?;
    Ok(url.parse::<Environment>()?)
}

/// First non-empty candidate wins.
fn pick_backend_url(
    flag: Option<String>,
    from_env: Option<String>,
    from_config: Option<String>,
) -> Option<String> {
    [flag, from_env, from_config]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
}
