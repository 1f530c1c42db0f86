//! Canned reply selection.
//!
//! # Module Structure
//!
//! - `table`: ordered keyword rules (`KeywordRule`, `ResponseTable`)
//! - `builtin`: the default rules shipped with the widget
//!
//! The chat session only depends on the [`Responder`] trait, so a different
//! reply source can be plugged in without touching the session logic.

mod builtin;
mod table;

pub use builtin::{builtin_rules, BUILTIN_FALLBACK};
pub use table::{KeywordRule, ResponseTable};

/// Produces the bot's reply to a user message.
pub trait Responder: Send + Sync {
    /// Returns the reply text for `message`.
    fn respond(&self, message: &str) -> String;
}

impl<R: Responder + ?Sized> Responder for std::sync::Arc<R> {
    fn respond(&self, message: &str) -> String {
        (**self).respond(message)
    }
}
