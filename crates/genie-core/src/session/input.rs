//! Message input field with placeholder semantics.

/// Placeholder shown in an empty, unfocused input field.
pub const DEFAULT_PLACEHOLDER: &str = "Type your message here...";

/// The single-line message field at the bottom of the widget.
///
/// The placeholder is never part of the typed text: it is only displayed
/// while the field is empty and unfocused, and text equal to the
/// placeholder is never submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    /// Text the user has typed.
    pub text: String,
    placeholder: String,
    focused: bool,
}

impl InputField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
            focused: false,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// True while the placeholder should be displayed instead of the text.
    pub fn shows_placeholder(&self) -> bool {
        !self.focused && self.text.is_empty()
    }

    /// What the field currently displays.
    pub fn display_text(&self) -> &str {
        if self.shows_placeholder() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
    }

    pub fn focus_out(&mut self) {
        self.focused = false;
    }

    /// Takes the typed text if it is worth sending, clearing the field.
    ///
    /// Blank text and text identical to the placeholder are rejected and
    /// leave the field untouched.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() || trimmed == self.placeholder {
            return None;
        }
        let message = trimmed.to_string();
        self.text.clear();
        Some(message)
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}
