//! Chat turn lifecycle handlers

use cadvisor_core::prelude::*;

use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Handle a chat send attempt.
///
/// The session decides whether a turn actually starts: empty input and
/// sends while a request is in flight are no-ops, so two rapid submits
/// can never put two requests in flight.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(session) = state.session.as_mut() else {
        return UpdateResult::none();
    };

    let Some(message) = session.begin_turn() else {
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::SpawnTask(Task::SendChat {
        epoch: session.epoch(),
        history: session.turns().to_vec(),
        new_message: message,
    }))
}

/// Handle the settled chat request.
///
/// The input lock is released first, on every path; only then is the
/// outcome recorded. A reply addressed to a discarded session (the user
/// already submitted a new profile) is dropped.
pub fn handle_reply_arrived(
    state: &mut AppState,
    epoch: u64,
    result: Result<Option<String>>,
) -> UpdateResult {
    let Some(session) = state.session.as_mut() else {
        debug!("dropping chat reply: no active session");
        return UpdateResult::none();
    };
    if session.epoch() != epoch {
        debug!(
            "dropping chat reply for discarded session (epoch {epoch}, current {})",
            session.epoch()
        );
        return UpdateResult::none();
    }

    session.unlock();

    match result {
        Ok(reply) => session.record_reply(reply),
        Err(err) => {
            warn!("chat turn failed: {err}");
            session.record_failure();
        }
    }

    UpdateResult::none()
}
