//! Builtin keyword rules shipped with the widget.
//!
//! These are used whenever the configuration file does not override the
//! response table. They are built once and cached for the lifetime of the
//! process.

use std::sync::OnceLock;

use super::table::KeywordRule;

/// Reply used when no rule matches.
pub const BUILTIN_FALLBACK: &str =
    "That's a great question! Let me help you with that. Could you provide more details? 🤔";

/// Static storage for the builtin rules (initialized once).
static BUILTIN_RULES: OnceLock<Vec<KeywordRule>> = OnceLock::new();

/// Returns the builtin rules in match order.
pub fn builtin_rules() -> &'static [KeywordRule] {
    BUILTIN_RULES.get_or_init(|| {
        vec![
            KeywordRule::new(
                ["hello", "hi", "hey"],
                "Hello! How can I assist you today? 😊",
            ),
            KeywordRule::new(
                ["help", "assist"],
                "I'm here to help! I can assist with:\n\
                 • Restaurant bookings\n\
                 • Menu information\n\
                 • Special events\n\
                 • General inquiries",
            ),
            KeywordRule::new(
                ["menu", "food", "drink"],
                "We have an excellent selection! Would you like information about our food menu or drinks? 🍽️🍺",
            ),
            KeywordRule::new(
                ["booking", "reserve", "table"],
                "I'd be happy to help with a reservation! What date and time work best for you? 📅",
            ),
            KeywordRule::new(
                ["thanks", "thank you"],
                "You're welcome! Is there anything else I can help you with? 😊",
            ),
            KeywordRule::new(
                ["bye", "goodbye"],
                "Goodbye! Have a wonderful day! Come back anytime! 👋",
            ),
        ]
    })
}
