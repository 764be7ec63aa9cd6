//! cadvisor-tui - Terminal UI for the Career Advisor client
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! lifecycle, event polling, the main event loop, and the widgets that
//! render each view of the application state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
