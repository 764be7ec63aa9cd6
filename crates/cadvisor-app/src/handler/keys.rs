//! Key event handlers for each view

use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Lines scrolled by PageUp/PageDown on the results view.
const PAGE_SCROLL: u16 = 10;

/// Translate a key event into a follow-up message, mutating view-local
/// state (focus, text buffers, scroll) directly.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere, even mid-request.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.view {
        View::Home => handle_home_key(state, key),
        View::Form => handle_form_key(state, key),
        View::Loading => handle_loading_key(state, key),
        View::Results => handle_results_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Enter | InputKey::Char('s') => {
            state.show_view(View::Form);
            None
        }
        _ => None,
    }
}

fn handle_form_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            state.show_view(View::Home);
            None
        }

        InputKey::Tab | InputKey::Down => {
            state.form.focus_next();
            None
        }
        InputKey::BackTab | InputKey::Up => {
            state.form.focus_prev();
            None
        }

        InputKey::Enter | InputKey::CharCtrl('s') => Some(Message::SubmitProfile),

        InputKey::CharCtrl('e') => {
            state.form.fill_sample();
            None
        }
        InputKey::CharCtrl('r') => {
            state.form.clear();
            None
        }

        InputKey::Left if state.form.focus == FormField::Level => {
            state.form.cycle_level_back();
            None
        }
        InputKey::Right if state.form.focus == FormField::Level => {
            state.form.cycle_level_forward();
            None
        }

        InputKey::Backspace => {
            state.form.backspace();
            None
        }
        InputKey::Char(c) => {
            state.form.insert_char(c);
            None
        }

        _ => None,
    }
}

fn handle_loading_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        // Going back does not abort the request; the epoch bump makes the
        // eventual response stale instead.
        InputKey::Esc => {
            state.abandon_submission();
            None
        }
        _ => None,
    }
}

fn handle_results_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            state.show_view(View::Form);
            None
        }

        // Results column scrolling
        InputKey::Up => {
            state.results_scroll = state.results_scroll.saturating_sub(1);
            None
        }
        InputKey::Down => {
            state.results_scroll = state.results_scroll.saturating_add(1);
            None
        }
        InputKey::Home => {
            state.results_scroll = 0;
            None
        }

        // Chat transcript scrolling (lines back from the bottom)
        InputKey::PageUp => {
            if let Some(session) = state.session.as_mut() {
                session.scroll = session.scroll.saturating_add(PAGE_SCROLL);
            }
            None
        }
        InputKey::PageDown => {
            if let Some(session) = state.session.as_mut() {
                session.scroll = session.scroll.saturating_sub(PAGE_SCROLL);
            }
            None
        }

        InputKey::Enter => Some(Message::SubmitChat),

        // Chat input editing; a locked input swallows keystrokes, which is
        // what keeps a second send from forming while one is in flight.
        InputKey::Backspace => {
            if let Some(session) = state.session.as_mut() {
                if !session.is_locked() {
                    session.input.pop();
                }
            }
            None
        }
        InputKey::Char(c) => {
            if let Some(session) = state.session.as_mut() {
                if !session.is_locked() && !c.is_control() {
                    session.input.push(c);
                }
            }
            None
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state_at(view: View) -> AppState {
        let mut state = AppState::new(Settings::default());
        state.show_view(view);
        state
    }

    #[test]
    fn test_ctrl_c_quits_from_every_view() {
        for view in [View::Home, View::Form, View::Loading, View::Results] {
            let mut state = state_at(view);
            let msg = handle_key(&mut state, InputKey::CharCtrl('c'));
            assert!(matches!(msg, Some(Message::Quit)), "view {view:?}");
        }
    }

    #[test]
    fn test_home_enter_starts_form() {
        let mut state = state_at(View::Home);
        assert!(handle_key(&mut state, InputKey::Enter).is_none());
        assert_eq!(state.view, View::Form);
    }

    #[test]
    fn test_form_esc_returns_home() {
        let mut state = state_at(View::Form);
        assert!(handle_key(&mut state, InputKey::Esc).is_none());
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn test_form_typing_goes_to_focused_field() {
        let mut state = state_at(View::Form);
        handle_key(&mut state, InputKey::Char('A'));
        handle_key(&mut state, InputKey::Char('l'));
        assert_eq!(state.form.name, "Al");

        handle_key(&mut state, InputKey::Backspace);
        assert_eq!(state.form.name, "A");
    }

    #[test]
    fn test_form_enter_submits() {
        let mut state = state_at(View::Form);
        let msg = handle_key(&mut state, InputKey::Enter);
        assert!(matches!(msg, Some(Message::SubmitProfile)));
    }

    #[test]
    fn test_loading_esc_abandons() {
        let mut state = state_at(View::Loading);
        let before = state.advice_epoch();
        handle_key(&mut state, InputKey::Esc);
        assert_eq!(state.view, View::Form);
        assert_ne!(state.advice_epoch(), before);
    }

    #[test]
    fn test_loading_ignores_typing() {
        let mut state = state_at(View::Loading);
        assert!(handle_key(&mut state, InputKey::Char('x')).is_none());
        assert_eq!(state.view, View::Loading);
    }

    #[test]
    fn test_results_esc_returns_to_form() {
        let mut state = state_at(View::Results);
        handle_key(&mut state, InputKey::Esc);
        assert_eq!(state.view, View::Form);
    }
}
