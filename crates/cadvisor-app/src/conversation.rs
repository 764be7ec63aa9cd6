//! Conversation session state machine
//!
//! Owns the ordered turn history for the lifetime of one results view.
//! The turn history is what the service sees; the transcript is what the
//! user sees. They deliberately diverge: the priming pair is history-only,
//! the greeting and failure bubbles are transcript-only.

use chrono::{DateTime, Local};

use cadvisor_core::{priming_turns, ConversationTurn, Profile};

/// Greeting bubble shown when a session starts. Cosmetic only; never part
/// of the context sent to the service.
pub const GREETING: &str = "Hi! I'm your AI career advisor. I have your profile details and can \
     answer questions about your career plan, suggest learning paths, or provide guidance on \
     specific skills. What would you like to know?";

/// Shown (and kept as context) when the service answered without a reply.
pub const REPLY_FALLBACK: &str = "Sorry, I encountered an error.";

/// Shown when the chat request itself failed. Never kept as context.
pub const CONNECT_FALLBACK: &str = "Sorry, I couldn't connect to the advisor.";

/// Chat input lifecycle. `AwaitingReply` is the input-locked state: one
/// request is in flight and further sends are suppressed until it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    AwaitingReply,
}

/// Visible speaker of one transcript bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One visible transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatBubble {
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Local>,
}

impl ChatBubble {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            at: Local::now(),
        }
    }
}

/// State of the follow-up conversational assistant for one advice result.
///
/// Created by a successful advice submission and discarded when the next
/// submission begins; the uninitialized state is the absence of a session.
/// Within a session the turn history only grows and is never reordered.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    epoch: u64,
    turns: Vec<ConversationTurn>,
    transcript: Vec<ChatBubble>,
    transcript_cap: usize,

    pub phase: ChatPhase,
    pub input: String,
    /// Transcript scroll offset, in lines back from the bottom.
    pub scroll: u16,
}

impl ConversationSession {
    /// Start a fresh session primed with the given profile.
    ///
    /// Seeds the two priming turns and the visible greeting bubble. The
    /// `epoch` tags in-flight requests so a reply addressed to a discarded
    /// session can be recognized and ignored.
    pub fn new(profile: &Profile, epoch: u64, transcript_cap: usize) -> Self {
        let mut session = Self {
            epoch,
            turns: priming_turns(profile).into(),
            transcript: Vec::new(),
            transcript_cap,
            phase: ChatPhase::default(),
            input: String::new(),
            scroll: 0,
        };
        session.push_bubble(ChatBubble::new(Sender::Bot, GREETING));
        session
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Full accumulated context, priming pair included.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn transcript(&self) -> &[ChatBubble] {
        &self.transcript
    }

    /// Whether the input is locked by an in-flight request.
    pub fn is_locked(&self) -> bool {
        self.phase == ChatPhase::AwaitingReply
    }

    /// Begin a chat turn from the current input buffer.
    ///
    /// Whitespace-only input and sends while locked are no-ops returning
    /// `None`. Otherwise the trimmed message is appended as a user bubble
    /// and a user turn, the input clears, the session locks, and the
    /// message is returned for the caller to dispatch.
    pub fn begin_turn(&mut self) -> Option<String> {
        if self.is_locked() {
            return None;
        }
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }

        self.push_bubble(ChatBubble::new(Sender::User, message.clone()));
        self.turns.push(ConversationTurn::user(message.clone()));
        self.input.clear();
        self.scroll = 0;
        self.phase = ChatPhase::AwaitingReply;
        Some(message)
    }

    /// Release the input lock. Runs on every settle path, success or not,
    /// before the outcome is inspected.
    pub fn unlock(&mut self) {
        self.phase = ChatPhase::Idle;
    }

    /// Record a successful reply: visible bot bubble plus a model turn so
    /// later requests retain it as context. An absent reply text becomes
    /// the fixed fallback, which is also kept as context.
    pub fn record_reply(&mut self, reply: Option<String>) {
        let text = reply.unwrap_or_else(|| REPLY_FALLBACK.to_string());
        self.push_bubble(ChatBubble::new(Sender::Bot, text.clone()));
        self.turns.push(ConversationTurn::model(text));
        self.scroll = 0;
    }

    /// Record a failed turn: visible failure bubble only. The turn history
    /// is left untouched so the failure does not pollute the context sent
    /// on the next attempt.
    pub fn record_failure(&mut self) {
        self.push_bubble(ChatBubble::new(Sender::Bot, CONNECT_FALLBACK));
        self.scroll = 0;
    }

    fn push_bubble(&mut self, bubble: ChatBubble) {
        self.transcript.push(bubble);
        // Cosmetic cap on visible bubbles; turns are never truncated.
        if self.transcript_cap > 0 && self.transcript.len() > self.transcript_cap {
            let excess = self.transcript.len() - self.transcript_cap;
            self.transcript.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadvisor_core::{ExperienceLevel, Role};

    fn sample_profile() -> Profile {
        Profile {
            name: Some("Alex Chen".to_string()),
            experience_level: ExperienceLevel::Intermediate,
            time_per_week_hours: Some(10),
            background: None,
            skills: vec!["SQL".to_string()],
            interests: vec![],
            goals: vec![],
        }
    }

    fn session() -> ConversationSession {
        ConversationSession::new(&sample_profile(), 1, 500)
    }

    #[test]
    fn test_new_session_seeds_priming_pair_and_greeting() {
        let session = session();

        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[0].role, Role::User);
        assert_eq!(session.turns()[1].role, Role::Model);

        // The priming pair is not visible; the greeting is, and is not a turn.
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].text, GREETING);
        assert!(!session.is_locked());
    }

    #[test]
    fn test_successful_round_trip_grows_history_to_four() {
        let mut session = session();
        session.input = "What should I learn first?".to_string();

        let message = session.begin_turn().unwrap();
        assert_eq!(message, "What should I learn first?");
        assert!(session.is_locked());
        assert!(session.input.is_empty());

        session.unlock();
        session.record_reply(Some("Start with SQL window functions.".to_string()));

        let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);
        assert_eq!(
            session.turns()[3].text(),
            "Start with SQL window functions."
        );
        assert!(!session.is_locked());
    }

    #[test]
    fn test_failed_reply_leaves_history_at_three() {
        let mut session = session();
        session.input = "hello?".to_string();
        session.begin_turn().unwrap();

        session.unlock();
        session.record_failure();

        assert_eq!(session.turns().len(), 3);
        assert!(!session.is_locked());
        // The failure is still visible to the user.
        let last = session.transcript().last().unwrap();
        assert_eq!(last.text, CONNECT_FALLBACK);
        assert_eq!(last.sender, Sender::Bot);
    }

    #[test]
    fn test_whitespace_only_send_is_noop() {
        let mut session = session();
        session.input = "   \t".to_string();
        assert!(session.begin_turn().is_none());
        assert_eq!(session.turns().len(), 2);
        assert!(!session.is_locked());
    }

    #[test]
    fn test_send_while_locked_is_suppressed() {
        let mut session = session();
        session.input = "first".to_string();
        assert!(session.begin_turn().is_some());

        session.input = "second".to_string();
        assert!(session.begin_turn().is_none());
        // The suppressed attempt must not have touched the history.
        assert_eq!(session.turns().len(), 3);
        assert_eq!(session.input, "second");
    }

    #[test]
    fn test_absent_reply_falls_back_and_stays_context() {
        let mut session = session();
        session.input = "hm".to_string();
        session.begin_turn().unwrap();
        session.unlock();
        session.record_reply(None);

        assert_eq!(session.turns().len(), 4);
        assert_eq!(session.turns()[3].text(), REPLY_FALLBACK);
    }

    #[test]
    fn test_transcript_cap_never_touches_turns() {
        let mut session = ConversationSession::new(&sample_profile(), 1, 3);
        for i in 0..5 {
            session.input = format!("message {i}");
            session.begin_turn().unwrap();
            session.unlock();
            session.record_reply(Some(format!("reply {i}")));
        }

        assert_eq!(session.transcript().len(), 3);
        // 2 priming + 5 user/reply pairs
        assert_eq!(session.turns().len(), 12);
    }
}
