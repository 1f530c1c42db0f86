//! Notification chime played when the widget opens.
//!
//! Playback is fire-and-forget: it runs on its own detached thread and any
//! failure (no output device, busy device, ...) is logged and dropped.

use std::sync::Arc;
use std::thread;

use genie_core::config::{SoundConfig, ToneConfig};
use genie_core::{GenieError, Result};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

/// Something that can play the notification chime, blocking until done.
pub trait NotificationSound: Send + Sync {
    fn play(&self) -> Result<()>;
}

/// Sequence of sine tones played on the default output device.
#[derive(Debug, Clone)]
pub struct RodioChime {
    tones: Vec<ToneConfig>,
    volume: f32,
}

impl RodioChime {
    pub fn new(tones: Vec<ToneConfig>, volume: f32) -> Self {
        Self { tones, volume }
    }

    pub fn tones(&self) -> &[ToneConfig] {
        &self.tones
    }
}

impl NotificationSound for RodioChime {
    fn play(&self) -> Result<()> {
        if self.tones.is_empty() {
            return Ok(());
        }

        // The stream must stay alive until the sink has drained.
        let (_stream, handle) = OutputStream::try_default()
            .map_err(|e| GenieError::audio(format!("No audio output device: {}", e)))?;
        let sink = Sink::try_new(&handle)
            .map_err(|e| GenieError::audio(format!("Failed to open audio sink: {}", e)))?;
        sink.set_volume(self.volume);

        for tone in &self.tones {
            sink.append(SineWave::new(tone.frequency_hz).take_duration(tone.duration()));
        }
        sink.sleep_until_end();
        Ok(())
    }
}

/// Chime used when sound is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl NotificationSound for SilentChime {
    fn play(&self) -> Result<()> {
        Ok(())
    }
}

/// Builds the chime described by the sound configuration.
pub fn chime_from_config(config: &SoundConfig) -> Arc<dyn NotificationSound> {
    if config.enabled {
        Arc::new(RodioChime::new(config.tones.clone(), config.volume))
    } else {
        Arc::new(SilentChime)
    }
}

/// Plays `sound` on a detached thread and returns immediately.
pub fn play_detached(sound: Arc<dyn NotificationSound>) {
    let spawned = thread::Builder::new()
        .name("genie-chime".to_string())
        .spawn(move || {
            if let Err(e) = sound.play() {
                tracing::warn!("Notification sound failed: {}", e);
            }
        });

    if let Err(e) = spawned {
        tracing::warn!("Failed to spawn notification sound thread: {}", e);
    }
}
