//! Modular dashboard implementation
//!
//! Split into state, the controller that drives it, and rendering components

pub mod components;
pub mod controller;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use controller::DashboardController;
pub use renderer::render_dashboard;
pub use state::{DashboardState, View};
