//! Transcript entry types.

use serde::{Deserialize, Serialize};

/// `strftime` format of the time shown under each bubble.
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

/// Who a message turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    /// The assistant.
    Bot,
    /// The person typing into the widget.
    User,
}

/// A single bubble in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: String,
    /// Local wall-clock time the message was shown (`HH:MM`).
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(speaker: Speaker, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Creates a message stamped with the current local time.
    pub fn now(speaker: Speaker, content: impl Into<String>) -> Self {
        Self::new(speaker, content, current_timestamp())
    }

    pub fn is_from_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
