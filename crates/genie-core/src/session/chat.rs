//! Welcome/chat state machine.
//!
//! The session owns the input field, the transcript and a queue of
//! delayed messages. The front-end calls [`ChatSession::submit`] when the
//! user presses Enter or Send, and [`ChatSession::tick`] every frame to
//! release messages whose time has come.

use std::time::{Duration, Instant};

use uuid::Uuid;

use super::input::InputField;
use super::message::{ChatMessage, Speaker};
use super::script::ConversationScript;
use super::transcript::Transcript;
use crate::responder::Responder;

/// Which screen the widget body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Heading and description, before anything was sent.
    Welcome,
    /// Scrollable transcript of bubbles.
    Chat,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing worth sending was in the input field.
    Ignored,
    /// The first message switched the widget to the chat screen.
    Started,
    /// A follow-up message was added to an ongoing chat.
    Sent,
}

/// A message waiting to be appended to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledMessage {
    due: Instant,
    seq: u64,
    speaker: Speaker,
    content: String,
}

/// One popup's conversation.
pub struct ChatSession<R: Responder> {
    id: Uuid,
    responder: R,
    script: ConversationScript,
    screen: Screen,
    transcript: Transcript,
    input: InputField,
    pending: Vec<ScheduledMessage>,
    next_seq: u64,
}

impl<R: Responder> ChatSession<R> {
    pub fn new(responder: R, script: ConversationScript, input: InputField) -> Self {
        Self {
            id: Uuid::new_v4(),
            responder,
            script,
            screen: Screen::Welcome,
            transcript: Transcript::new(),
            input,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    /// Number of messages still waiting for their due time.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Sends whatever is in the input field.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let Some(message) = self.input.take_submission() else {
            return SubmitOutcome::Ignored;
        };

        let reply = self.responder.respond(&message);

        match self.screen {
            Screen::Welcome => {
                self.screen = Screen::Chat;
                tracing::info!(session_id = %self.id, "Chat started");

                let greeting = self.script.greeting.clone();
                let follow_up = self.script.follow_up.clone();
                self.schedule(now + self.script.greeting_delay, Speaker::Bot, greeting);
                self.schedule(now + self.script.follow_up_delay, Speaker::Bot, follow_up);
                self.schedule(now + self.script.first_message_delay, Speaker::User, message);
                self.schedule(now + self.script.first_reply_delay, Speaker::Bot, reply);
                SubmitOutcome::Started
            }
            Screen::Chat => {
                tracing::debug!(session_id = %self.id, "User message sent");
                self.transcript.push(ChatMessage::now(Speaker::User, message));
                self.schedule(now + self.script.reply_delay, Speaker::Bot, reply);
                SubmitOutcome::Sent
            }
        }
    }

    /// Appends every scheduled message due at `now` and returns them.
    pub fn tick(&mut self, now: Instant) -> Vec<ChatMessage> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|scheduled| scheduled.due <= now);
        self.pending = waiting;

        let mut released = Vec::with_capacity(due.len());
        for scheduled in due {
            let message = ChatMessage::now(scheduled.speaker, scheduled.content);
            self.transcript.push(message.clone());
            released.push(message);
        }
        released
    }

    /// Time until the next scheduled message, zero if one is overdue.
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .first()
            .map(|scheduled| scheduled.due.saturating_duration_since(now))
    }

    fn schedule(&mut self, due: Instant, speaker: Speaker, content: String) {
        let scheduled = ScheduledMessage {
            due,
            seq: self.next_seq,
            speaker,
            content,
        };
        self.next_seq += 1;

        // Keep the queue ordered by due time; ties keep scheduling order.
        let index = self
            .pending
            .partition_point(|queued| (queued.due, queued.seq) <= (scheduled.due, scheduled.seq));
        self.pending.insert(index, scheduled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::ResponseTable;

    fn session() -> ChatSession<ResponseTable> {
        ChatSession::new(
            ResponseTable::builtin(),
            ConversationScript::default(),
            InputField::default(),
        )
    }

    fn contents(messages: &[ChatMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_new_session_starts_on_welcome_screen() {
        let session = session();
        assert_eq!(session.screen(), Screen::Welcome);
        assert!(session.transcript().is_empty());
        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut session = session();
        assert_eq!(session.submit(Instant::now()), SubmitOutcome::Ignored);
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[test]
    fn test_first_message_schedules_opening_sequence() {
        let mut session = session();
        let start = Instant::now();
        session.input_mut().text = "hey".to_string();

        assert_eq!(session.submit(start), SubmitOutcome::Started);
        assert_eq!(session.screen(), Screen::Chat);
        assert!(session.input().text.is_empty());
        assert_eq!(session.pending(), 4);

        let first = session.tick(start);
        assert_eq!(contents(&first), vec!["Hello! I'm Greene Genie 👋"]);

        assert!(session.tick(start + Duration::from_millis(599)).is_empty());
        let second = session.tick(start + Duration::from_millis(600));
        assert_eq!(contents(&second), vec!["How can I help you today?"]);

        let third = session.tick(start + Duration::from_millis(1200));
        assert_eq!(third.len(), 1);
        assert_eq!(third[0].speaker, Speaker::User);
        assert_eq!(third[0].content, "hey");

        let fourth = session.tick(start + Duration::from_millis(2000));
        assert_eq!(contents(&fourth), vec!["Hello! How can I assist you today? 😊"]);
        assert_eq!(session.pending(), 0);
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn test_late_tick_releases_everything_in_order() {
        let mut session = session();
        let start = Instant::now();
        session.input_mut().text = "menu".to_string();
        session.submit(start);

        let released = session.tick(start + Duration::from_secs(10));
        let speakers: Vec<Speaker> = released.iter().map(|m| m.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::Bot, Speaker::Bot, Speaker::User, Speaker::Bot]
        );
    }

    #[test]
    fn test_follow_up_message_is_immediate_and_reply_delayed() {
        let mut session = session();
        let start = Instant::now();
        session.input_mut().text = "hi".to_string();
        session.submit(start);
        session.tick(start + Duration::from_secs(3));

        let later = start + Duration::from_secs(5);
        session.input_mut().text = "Can I book a table?".to_string();
        assert_eq!(session.submit(later), SubmitOutcome::Sent);

        let last = session.transcript().last().unwrap();
        assert!(last.is_from_user());
        assert_eq!(last.content, "Can I book a table?");

        assert!(session.tick(later + Duration::from_millis(999)).is_empty());
        let reply = session.tick(later + Duration::from_millis(1000));
        assert!(reply[0].content.starts_with("I'd be happy to help with a reservation!"));
    }

    #[test]
    fn test_reply_is_computed_from_submitted_message() {
        let mut session = session();
        let start = Instant::now();
        session.input_mut().text = "bye".to_string();
        session.submit(start);

        // Typing something else before the reply is due must not change it.
        session.input_mut().text = "menu".to_string();
        let released = session.tick(start + Duration::from_secs(3));
        assert_eq!(
            released.last().unwrap().content,
            "Goodbye! Have a wonderful day! Come back anytime! 👋"
        );
    }

    #[test]
    fn test_next_due_reports_nearest_message() {
        let mut session = session();
        let start = Instant::now();
        assert_eq!(session.next_due(start), None);

        session.input_mut().text = "hello".to_string();
        session.submit(start);
        session.tick(start);
        assert_eq!(
            session.next_due(start + Duration::from_millis(100)),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            session.next_due(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_replies_to_quick_messages_keep_order() {
        let mut session = session();
        let start = Instant::now();
        session.input_mut().text = "hi".to_string();
        session.submit(start);
        session.tick(start + Duration::from_secs(3));

        let t = start + Duration::from_secs(4);
        session.input_mut().text = "menu".to_string();
        session.submit(t);
        session.input_mut().text = "thanks".to_string();
        session.submit(t);

        let released = session.tick(t + Duration::from_secs(1));
        assert_eq!(released.len(), 2);
        assert!(released[0].content.starts_with("We have an excellent selection!"));
        assert!(released[1].content.starts_with("You're welcome!"));
    }
}
