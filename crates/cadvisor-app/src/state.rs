//! Application state (Model in TEA pattern)

use rand::Rng;

use cadvisor_core::{AdvicePayload, Profile};

use crate::config::Settings;
use crate::conversation::ConversationSession;
use crate::form::FormState;

/// Current view/screen. Exactly one view is current at any time because
/// this field is the single source of truth for visibility; a dangling
/// "all views hidden" state is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with the start prompt and service status
    #[default]
    Home,

    /// Profile form
    Form,

    /// Advice request in flight
    Loading,

    /// Rendered advice plus the chat panel
    Results,
}

/// Messages cycled on the loading screen while the advice request runs.
const LOADING_MESSAGES: &[&str] = &[
    "Analyzing your profile...",
    "Matching career paths...",
    "Scanning industry trends...",
    "Weighing salary and growth data...",
    "Collecting learning resources...",
    "Drafting your 30/60/90-day plan...",
];

/// Loading screen animation state.
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick animation frame and cycle the message every ~15 ticks
    /// (1.5 sec at the 100ms render cadence).
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Last known advisory service status, from the startup probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealth {
    pub ok: bool,
    pub model: Option<String>,
}

/// One rendered advice result with the name it greets.
#[derive(Debug, Clone)]
pub struct AdviceResult {
    pub payload: AdvicePayload,
    pub display_name: Option<String>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current view
    pub view: View,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Profile form state (field values survive view changes)
    pub form: FormState,

    /// Loading screen state, present while an advice request is in flight
    pub loading: Option<LoadingState>,

    /// The advice shown on the results view
    pub advice: Option<AdviceResult>,

    /// The chat session bound to the current advice result
    pub session: Option<ConversationSession>,

    /// Results view scroll offset, in lines from the top
    pub results_scroll: u16,

    /// Advisory service status for the home view indicator
    pub health: Option<ServiceHealth>,

    /// Identity of the current advice submission. Bumped on every submit
    /// and on abandoning the loading view, so a late response can be
    /// recognized as stale and dropped.
    advice_epoch: u64,

    /// Monotonic source of conversation session epochs
    session_counter: u64,

    should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::default(),
            settings,
            form: FormState::default(),
            loading: None,
            advice: None,
            session: None,
            results_scroll: 0,
            health: None,
            advice_epoch: 0,
            session_counter: 0,
            should_quit: false,
        }
    }

    /// Switch the current view and reset scroll positions to the top.
    pub fn show_view(&mut self, view: View) {
        self.view = view;
        self.results_scroll = 0;
        if let Some(session) = self.session.as_mut() {
            session.scroll = 0;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn advice_epoch(&self) -> u64 {
        self.advice_epoch
    }

    /// Begin a new advice submission: discard any previous result and
    /// conversation, switch to the loading view, and return the epoch the
    /// in-flight request must answer to.
    pub fn begin_submission(&mut self) -> u64 {
        self.advice_epoch += 1;
        self.advice = None;
        self.session = None;
        self.loading = Some(LoadingState::new());
        self.show_view(View::Loading);
        self.advice_epoch
    }

    /// Abandon the loading view without waiting for the response. The
    /// epoch bump makes the eventual response stale on arrival.
    pub fn abandon_submission(&mut self) {
        self.advice_epoch += 1;
        self.loading = None;
        self.show_view(View::Form);
    }

    /// Install a successful advice result: render target plus a fresh
    /// conversation session primed with the submitted profile.
    pub fn install_result(&mut self, payload: AdvicePayload, profile: &Profile) {
        self.session_counter += 1;
        self.session = Some(ConversationSession::new(
            profile,
            self.session_counter,
            self.settings.chat.transcript_limit,
        ));
        self.advice = Some(AdviceResult {
            payload,
            display_name: profile.name.clone(),
        });
        self.loading = None;
        self.form.banner = None;
        self.show_view(View::Results);
    }
}
