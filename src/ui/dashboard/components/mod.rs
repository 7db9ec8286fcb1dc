//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod add_subscriber;
pub mod footer;
pub mod header;
pub mod logs;
pub mod notice;
pub mod statistics;
pub mod subscribers;
