//! Integration tests for the update() state machine

use cadvisor_core::{AdvicePayload, Error, ExperienceLevel, Role};

use crate::config::Settings;
use crate::conversation::{ChatPhase, CONNECT_FALLBACK};
use crate::handler::{update, Task, UpdateAction};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

fn state() -> AppState {
    AppState::new(Settings::default())
}

/// Drive the state to the form view with a valid minimal profile entered.
fn state_with_valid_form() -> AppState {
    let mut state = state();
    state.show_view(View::Form);
    state.form.level = Some(ExperienceLevel::Intermediate);
    state.form.skills = "SQL".to_string();
    state
}

/// Submit the form and return the epoch of the spawned request.
fn submit(state: &mut AppState) -> u64 {
    let result = update(state, Message::SubmitProfile);
    match result.action {
        Some(UpdateAction::SpawnTask(Task::RequestAdvice { epoch, .. })) => epoch,
        other => panic!("expected RequestAdvice task, got {other:?}"),
    }
}

/// Drive the state all the way to an installed results view.
fn state_with_results() -> AppState {
    let mut state = state_with_valid_form();
    let epoch = submit(&mut state);
    let profile = state.form.extract().unwrap();
    update(
        &mut state,
        Message::AdviceArrived {
            epoch,
            profile: Box::new(profile),
            result: Ok(AdvicePayload::default()),
        },
    );
    assert_eq!(state.view, View::Results);
    state
}

// ─────────────────────────────────────────────────────────────────
// Advice Submission
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_submit_without_level_never_reaches_network() {
    let mut state = state();
    state.show_view(View::Form);
    state.form.skills = "SQL".to_string();

    let result = update(&mut state, Message::SubmitProfile);

    assert!(result.action.is_none(), "no task may be spawned");
    assert_eq!(state.view, View::Form);
    assert!(state.form.banner.as_deref().unwrap().contains("experience level"));
}

#[test]
fn test_submit_moves_to_loading_and_spawns_task() {
    let mut state = state_with_valid_form();
    let result = update(&mut state, Message::SubmitProfile);

    assert_eq!(state.view, View::Loading);
    assert!(state.loading.is_some());
    match result.action {
        Some(UpdateAction::SpawnTask(Task::RequestAdvice { epoch, profile })) => {
            assert_eq!(epoch, state.advice_epoch());
            assert_eq!(profile.skills, vec!["SQL"]);
        }
        other => panic!("expected RequestAdvice, got {other:?}"),
    }
}

#[test]
fn test_advice_success_installs_results_and_session() {
    let state = state_with_results();

    assert!(state.advice.is_some());
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.turns().len(), 2);
    assert_eq!(session.phase, ChatPhase::Idle);
}

#[test]
fn test_advice_failure_reverts_to_form_with_banner() {
    let mut state = state_with_valid_form();
    let epoch = submit(&mut state);
    let profile = state.form.extract().unwrap();

    update(
        &mut state,
        Message::AdviceArrived {
            epoch,
            profile: Box::new(profile),
            result: Err(Error::advisor("could not generate advice")),
        },
    );

    assert_eq!(state.view, View::Form);
    assert!(state.loading.is_none());
    // No partial state: neither results nor a conversation session exist.
    assert!(state.advice.is_none());
    assert!(state.session.is_none());
    assert!(state
        .form
        .banner
        .as_deref()
        .unwrap()
        .contains("could not generate advice"));
}

#[test]
fn test_stale_advice_response_is_dropped() {
    let mut state = state_with_valid_form();
    let first_epoch = submit(&mut state);
    let profile = state.form.extract().unwrap();

    // User backs out of the loading view before the response lands.
    update(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.view, View::Form);

    update(
        &mut state,
        Message::AdviceArrived {
            epoch: first_epoch,
            profile: Box::new(profile),
            result: Ok(AdvicePayload::default()),
        },
    );

    // The late response must not fabricate a results view.
    assert_eq!(state.view, View::Form);
    assert!(state.advice.is_none());
    assert!(state.session.is_none());
}

#[test]
fn test_resubmission_outpaces_slow_first_response() {
    let mut state = state_with_valid_form();
    let first_epoch = submit(&mut state);
    let profile = state.form.extract().unwrap();

    // Abandon, then submit again: the second request is now current.
    update(&mut state, Message::Key(InputKey::Esc));
    let second_epoch = submit(&mut state);
    assert_ne!(first_epoch, second_epoch);

    // First (slow) response arrives after the second submission: dropped.
    update(
        &mut state,
        Message::AdviceArrived {
            epoch: first_epoch,
            profile: Box::new(profile.clone()),
            result: Ok(AdvicePayload::default()),
        },
    );
    assert_eq!(state.view, View::Loading);
    assert!(state.advice.is_none());

    // Second response is current and installs normally.
    update(
        &mut state,
        Message::AdviceArrived {
            epoch: second_epoch,
            profile: Box::new(profile),
            result: Ok(AdvicePayload::default()),
        },
    );
    assert_eq!(state.view, View::Results);
}

// ─────────────────────────────────────────────────────────────────
// Chat Flow
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_chat_round_trip_through_update() {
    let mut state = state_with_results();

    // Type and send a message.
    for c in "What next?".chars() {
        update(&mut state, Message::Key(InputKey::Char(c)));
    }
    let result = update(&mut state, Message::SubmitChat);

    let epoch = match result.action {
        Some(UpdateAction::SpawnTask(Task::SendChat {
            epoch,
            history,
            new_message,
        })) => {
            assert_eq!(new_message, "What next?");
            // Priming pair + the just-appended user turn.
            assert_eq!(history.len(), 3);
            epoch
        }
        other => panic!("expected SendChat, got {other:?}"),
    };
    assert!(state.session.as_ref().unwrap().is_locked());

    update(
        &mut state,
        Message::ChatReplyArrived {
            epoch,
            result: Ok(Some("Learn Kubernetes.".to_string())),
        },
    );

    let session = state.session.as_ref().unwrap();
    assert!(!session.is_locked());
    let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);
}

#[test]
fn test_chat_failure_unlocks_without_history_growth() {
    let mut state = state_with_results();
    state.session.as_mut().unwrap().input = "hello".to_string();
    let result = update(&mut state, Message::SubmitChat);
    let epoch = match result.action {
        Some(UpdateAction::SpawnTask(Task::SendChat { epoch, .. })) => epoch,
        other => panic!("expected SendChat, got {other:?}"),
    };

    update(
        &mut state,
        Message::ChatReplyArrived {
            epoch,
            result: Err(Error::connection("http://127.0.0.1:8000/chat", "refused")),
        },
    );

    let session = state.session.as_ref().unwrap();
    assert!(!session.is_locked(), "input must be re-enabled on failure");
    assert_eq!(session.turns().len(), 3);
    assert_eq!(session.transcript().last().unwrap().text, CONNECT_FALLBACK);
}

#[test]
fn test_rapid_double_submit_spawns_one_request() {
    let mut state = state_with_results();
    state.session.as_mut().unwrap().input = "first".to_string();

    let first = update(&mut state, Message::SubmitChat);
    assert!(first.action.is_some());

    // Input is locked; typing is swallowed and the second submit is a no-op.
    for c in "second".chars() {
        update(&mut state, Message::Key(InputKey::Char(c)));
    }
    let second = update(&mut state, Message::SubmitChat);
    assert!(second.action.is_none());
    assert!(state.session.as_ref().unwrap().input.is_empty());
}

#[test]
fn test_reply_for_discarded_session_is_dropped() {
    let mut state = state_with_results();
    state.session.as_mut().unwrap().input = "hello".to_string();
    let result = update(&mut state, Message::SubmitChat);
    let old_epoch = match result.action {
        Some(UpdateAction::SpawnTask(Task::SendChat { epoch, .. })) => epoch,
        other => panic!("expected SendChat, got {other:?}"),
    };

    // A new submission replaces the session while the reply is in flight.
    update(&mut state, Message::Key(InputKey::Esc)); // results -> form
    let epoch = submit(&mut state);
    let profile = state.form.extract().unwrap();
    update(
        &mut state,
        Message::AdviceArrived {
            epoch,
            profile: Box::new(profile),
            result: Ok(AdvicePayload::default()),
        },
    );

    let turns_before = state.session.as_ref().unwrap().turns().len();
    update(
        &mut state,
        Message::ChatReplyArrived {
            epoch: old_epoch,
            result: Ok(Some("late reply".to_string())),
        },
    );

    let session = state.session.as_ref().unwrap();
    assert_eq!(session.turns().len(), turns_before);
    assert!(!session
        .transcript()
        .iter()
        .any(|b| b.text.contains("late reply")));
}

// ─────────────────────────────────────────────────────────────────
// Misc
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_health_probe_updates_indicator() {
    let mut state = state();
    update(
        &mut state,
        Message::HealthChecked {
            ok: true,
            model: Some("gemini-1.5-flash".to_string()),
        },
    );
    let health = state.health.as_ref().unwrap();
    assert!(health.ok);
    assert_eq!(health.model.as_deref(), Some("gemini-1.5-flash"));
}

#[test]
fn test_quit_message_sets_flag() {
    let mut state = state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_tick_advances_loading_animation() {
    let mut state = state_with_valid_form();
    submit(&mut state);
    let frame = state.loading.as_ref().unwrap().animation_frame;
    update(&mut state, Message::Tick);
    assert_eq!(state.loading.as_ref().unwrap().animation_frame, frame + 1);
}
