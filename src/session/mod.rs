pub mod headless_mode;
pub mod messages;
pub mod tui_mode;

pub use headless_mode::{CommandError, add_subscriber, print_statistics, print_subscribers};
pub use tui_mode::run_tui_mode;
