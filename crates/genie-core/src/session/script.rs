//! Opening lines and pacing of a conversation.

use std::time::Duration;

/// Fixed lines the bot opens with and the delays that pace the transcript.
///
/// All delays of the opening sequence are measured from the moment the
/// first message is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationScript {
    pub greeting: String,
    pub follow_up: String,
    pub greeting_delay: Duration,
    pub follow_up_delay: Duration,
    /// When the first user message is echoed into the transcript.
    pub first_message_delay: Duration,
    /// When the reply to the first message appears.
    pub first_reply_delay: Duration,
    /// Delay of every later reply, measured from its message.
    pub reply_delay: Duration,
}

impl Default for ConversationScript {
    fn default() -> Self {
        Self {
            greeting: "Hello! I'm Greene Genie 👋".to_string(),
            follow_up: "How can I help you today?".to_string(),
            greeting_delay: Duration::ZERO,
            follow_up_delay: Duration::from_millis(600),
            first_message_delay: Duration::from_millis(1200),
            first_reply_delay: Duration::from_millis(2000),
            reply_delay: Duration::from_millis(1000),
        }
    }
}
