//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `advice`: Advice submission lifecycle handlers
//! - `chat`: Chat turn lifecycle handlers

pub(crate) mod advice;
pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use cadvisor_core::{ConversationTurn, Profile};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background work performed against the advisory service.
///
/// Tasks carry everything the request needs by value so the spawned
/// future borrows nothing from `AppState`. The epochs tie each eventual
/// completion message back to the submission or session it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// One-shot advice request for a submitted profile
    RequestAdvice { epoch: u64, profile: Box<Profile> },

    /// One chat turn with the full accumulated history
    SendChat {
        epoch: u64,
        history: Vec<ConversationTurn>,
        new_message: String,
    },

    /// Startup health probe
    CheckHealth,
}

/// Result of an update: optional follow-up message and/or action
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}
