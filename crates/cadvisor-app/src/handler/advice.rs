//! Advice submission lifecycle handlers

use cadvisor_core::prelude::*;
use cadvisor_core::{AdvicePayload, Profile};

use crate::form::SELECT_LEVEL_PROMPT;
use crate::state::{AppState, View};

use super::{Task, UpdateAction, UpdateResult};

/// Handle a profile form submission.
///
/// Validation runs before extraction: a missing experience level sets the
/// blocking prompt and changes nothing else -- no extraction, no network
/// call, no view transition.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.view != View::Form {
        return UpdateResult::none();
    }

    if state.form.level.is_none() {
        state.form.banner = Some(SELECT_LEVEL_PROMPT.to_string());
        return UpdateResult::none();
    }

    let Some(profile) = state.form.extract() else {
        return UpdateResult::none();
    };

    state.form.banner = None;
    let epoch = state.begin_submission();
    info!("submitting profile (epoch {epoch})");

    UpdateResult::action(UpdateAction::SpawnTask(Task::RequestAdvice {
        epoch,
        profile: Box::new(profile),
    }))
}

/// Handle the settled advice request.
///
/// A stale epoch means the user abandoned that submission (or started a
/// newer one); the result is dropped without touching current state. On
/// failure the submission is abandoned wholesale: back to the form with a
/// banner, no partial results, no conversation session.
pub fn handle_advice_arrived(
    state: &mut AppState,
    epoch: u64,
    profile: &Profile,
    result: Result<AdvicePayload>,
) -> UpdateResult {
    if epoch != state.advice_epoch() {
        debug!(
            "dropping stale advice response (epoch {epoch}, current {})",
            state.advice_epoch()
        );
        return UpdateResult::none();
    }

    match result {
        Ok(payload) => {
            info!(
                "advice received: {} paths, {} skills, {} resources",
                payload.career_paths.len(),
                payload.next_skills.len(),
                payload.resources.len()
            );
            state.install_result(payload, profile);
        }
        Err(err) => {
            warn!("advice request failed: {err}");
            state.loading = None;
            state.form.banner = Some(format!("An error occurred: {}", err.banner_text()));
            state.show_view(View::Form);
        }
    }

    UpdateResult::none()
}
