//! Chat session domain module.
//!
//! # Module Structure
//!
//! - `message`: transcript entries (`Speaker`, `ChatMessage`)
//! - `transcript`: ordered message history (`Transcript`)
//! - `input`: the text field with placeholder semantics (`InputField`)
//! - `script`: fixed opening lines and delays (`ConversationScript`)
//! - `chat`: the welcome/chat state machine (`ChatSession`)
//!
//! # Usage
//!
//! ```ignore
//! use genie_core::session::{ChatSession, ConversationScript, Screen};
//! use genie_core::responder::ResponseTable;
//! ```

mod chat;
mod input;
mod message;
mod script;
mod transcript;

// Re-export public API
pub use chat::{ChatSession, Screen, SubmitOutcome};
pub use input::{InputField, DEFAULT_PLACEHOLDER};
pub use message::{ChatMessage, Speaker, TIMESTAMP_FORMAT};
pub use script::ConversationScript;
pub use transcript::Transcript;
