//! Ordered keyword rules.

use serde::{Deserialize, Serialize};

use super::builtin::{builtin_rules, BUILTIN_FALLBACK};
use super::Responder;
use crate::error::{GenieError, Result};

/// One trigger-word set and the canned reply it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Words (or short phrases) searched for as substrings of the message.
    pub keywords: Vec<String>,
    /// Reply sent when any keyword matches.
    pub reply: String,
}

impl KeywordRule {
    pub fn new<I, S>(keywords: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            reply: reply.into(),
        }
    }

    /// Returns true if any keyword occurs in the already lower-cased message.
    fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.to_lowercase().as_str()))
    }
}

/// Ordered list of keyword rules plus a fallback reply.
///
/// Rules are tried in order and the first one with a keyword contained in
/// the lower-cased message wins. Matching is plain substring search, so
/// `"hi"` also matches `"this"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTable {
    #[serde(default)]
    pub rules: Vec<KeywordRule>,
    pub fallback: String,
}

impl ResponseTable {
    pub fn new(rules: Vec<KeywordRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The table shipped with the widget.
    pub fn builtin() -> Self {
        Self::new(builtin_rules().to_vec(), BUILTIN_FALLBACK)
    }

    /// Appends a rule at the lowest priority.
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the first rule matching `message`, if any.
    pub fn matching_rule(&self, message: &str) -> Option<&KeywordRule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| rule.matches_lowered(&lowered))
    }

    /// Rejects tables that could never produce a sensible reply.
    pub fn validate(&self) -> Result<()> {
        if self.fallback.trim().is_empty() {
            return Err(GenieError::config("response fallback must not be empty"));
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(GenieError::config(format!(
                    "response rule #{} has no keywords",
                    index + 1
                )));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                // An empty keyword is a substring of every message.
                return Err(GenieError::config(format!(
                    "response rule #{} contains an empty keyword",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Responder for ResponseTable {
    fn respond(&self, message: &str) -> String {
        match self.matching_rule(message) {
            Some(rule) => {
                tracing::debug!(keywords = ?rule.keywords, "Keyword rule matched");
                rule.reply.clone()
            }
            None => {
                tracing::debug!("No keyword rule matched, using fallback");
                self.fallback.clone()
            }
        }
    }
}
