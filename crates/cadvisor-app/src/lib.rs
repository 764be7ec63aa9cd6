//! cadvisor-app - Application state and orchestration for the Career Advisor client
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the `AppState` model, the `Message` vocabulary, the
//! `update()` transition function, background task dispatch, and
//! configuration loading. It is terminal-agnostic; rendering and event
//! polling live in cadvisor-tui.

pub mod actions;
pub mod config;
pub mod conversation;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, View};

// Re-export client types for the TUI and binary
pub use cadvisor_client::AdvisorClient;
