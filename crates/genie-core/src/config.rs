//! Configuration model for the widget.
//!
//! Every field has a default so an empty or partial `config.toml` is valid.
//! Loading and saving live in the infrastructure crate; this module only
//! describes the shape and the conversions into domain types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::SlideIn;
use crate::error::{GenieError, Result};
use crate::placement::{ScreenMargins, ScreenSize, WindowSize};
use crate::responder::ResponseTable;
use crate::session::{ConversationScript, DEFAULT_PLACEHOLDER};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WidgetConfig {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub sound: SoundConfig,
    pub branding: BrandingConfig,
    pub conversation: ConversationConfig,
    /// Overrides the builtin keyword table when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<ResponseTable>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub margin_right: i32,
    pub margin_bottom: i32,
    pub always_on_top: bool,
    /// Used for placement until the real monitor size is known.
    pub fallback_screen: ScreenSize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let size = WindowSize::default();
        let margins = ScreenMargins::default();
        Self {
            width: size.width,
            height: size.height,
            margin_right: margins.right,
            margin_bottom: margins.bottom,
            always_on_top: true,
            fallback_screen: ScreenSize::default(),
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> WindowSize {
        WindowSize::new(self.width, self.height)
    }

    pub fn margins(&self) -> ScreenMargins {
        ScreenMargins {
            right: self.margin_right,
            bottom: self.margin_bottom,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub steps: u32,
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: crate::animation::DEFAULT_STEPS,
            frame_interval_ms: crate::animation::DEFAULT_FRAME_INTERVAL.as_millis() as u64,
        }
    }
}

impl AnimationConfig {
    /// Applies the configured pacing to a slide.
    pub fn apply(&self, slide: SlideIn) -> SlideIn {
        slide
            .with_steps(self.steps)
            .with_frame_interval(Duration::from_millis(self.frame_interval_ms))
    }
}

/// A single sine tone of the notification chime.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ToneConfig {
    pub frequency_hz: f32,
    pub duration_ms: u64,
}

impl ToneConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub volume: f32,
    pub tones: Vec<ToneConfig>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.2,
            tones: vec![
                ToneConfig {
                    frequency_hz: 800.0,
                    duration_ms: 100,
                },
                ToneConfig {
                    frequency_hz: 1000.0,
                    duration_ms: 150,
                },
            ],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BrandingConfig {
    pub title: String,
    pub heading: String,
    pub description: String,
    pub placeholder: String,
    /// Image shown at the left of the header; skipped if it cannot be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<std::path::PathBuf>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "Greene Genie Chat".to_string(),
            heading: "Ask Greene Genie a question...".to_string(),
            description: "Greene Genie is an AI-powered assistant, here to help you\n\
                          quickly find the information you need and connect you with\n\
                          the right department."
                .to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            logo_path: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConversationConfig {
    pub greeting: String,
    pub follow_up: String,
    pub follow_up_delay_ms: u64,
    pub first_message_delay_ms: u64,
    pub first_reply_delay_ms: u64,
    pub reply_delay_ms: u64,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        let script = ConversationScript::default();
        Self {
            greeting: script.greeting,
            follow_up: script.follow_up,
            follow_up_delay_ms: script.follow_up_delay.as_millis() as u64,
            first_message_delay_ms: script.first_message_delay.as_millis() as u64,
            first_reply_delay_ms: script.first_reply_delay.as_millis() as u64,
            reply_delay_ms: script.reply_delay.as_millis() as u64,
        }
    }
}

impl ConversationConfig {
    pub fn script(&self) -> ConversationScript {
        ConversationScript {
            greeting: self.greeting.clone(),
            follow_up: self.follow_up.clone(),
            greeting_delay: Duration::ZERO,
            follow_up_delay: Duration::from_millis(self.follow_up_delay_ms),
            first_message_delay: Duration::from_millis(self.first_message_delay_ms),
            first_reply_delay: Duration::from_millis(self.first_reply_delay_ms),
            reply_delay: Duration::from_millis(self.reply_delay_ms),
        }
    }
}

impl WidgetConfig {
    /// The keyword table in effect: the configured one or the builtin one.
    pub fn response_table(&self) -> ResponseTable {
        self.responses.clone().unwrap_or_else(ResponseTable::builtin)
    }

    /// Checks values that would make the widget unusable.
    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(GenieError::config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.animation.steps == 0 {
            return Err(GenieError::config("animation.steps must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.sound.volume) {
            return Err(GenieError::config(format!(
                "sound.volume must be between 0.0 and 1.0, got {}",
                self.sound.volume
            )));
        }
        if let Some(tone) = self.sound.tones.iter().find(|t| t.frequency_hz <= 0.0) {
            return Err(GenieError::config(format!(
                "tone frequency must be positive, got {}",
                tone.frequency_hz
            )));
        }
        if let Some(table) = &self.responses {
            table.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: WidgetConfig = toml::from_str("").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: WidgetConfig = toml::from_str(
            r#"
[window]
width = 400

[sound]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 470);
        assert!(!config.sound.enabled);
        assert_eq!(config.sound.tones.len(), 2);
    }

    #[test]
    fn test_response_override() {
        let config: WidgetConfig = toml::from_str(
            r#"
[responses]
fallback = "Sorry, no idea."

[[responses.rules]]
keywords = ["parking"]
reply = "Parking is free."
"#,
        )
        .unwrap();
        let table = config.response_table();
        assert_eq!(table.rules.len(), 1);
        assert_eq!(table.fallback, "Sorry, no idea.");
    }

    #[test]
    fn test_builtin_table_when_not_configured() {
        let config = WidgetConfig::default();
        assert_eq!(config.response_table(), ResponseTable::builtin());
    }

    #[test]
    fn test_script_from_conversation_config() {
        let script = ConversationConfig::default().script();
        assert_eq!(script, ConversationScript::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = WidgetConfig::default();
        config.animation.steps = 0;
        assert!(config.validate().unwrap_err().is_config());

        let mut config = WidgetConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());

        let mut config = WidgetConfig::default();
        config.sound.volume = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = WidgetConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: WidgetConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
