use std::sync::Arc;

use anyhow::{Context, Result};
use genie_core::config::WidgetConfig;
use genie_core::responder::ResponseTable;
use genie_core::session::{ChatSession, InputField};
use genie_infrastructure::logo::LOGO_SIZE;
use genie_infrastructure::{ConfigService, LogoImage, NotificationSound, chime_from_config, load_logo};

use crate::cli::Cli;

/// Everything the widget window needs, wired together.
pub struct AppBootstrap {
    pub config: WidgetConfig,
    pub session: ChatSession<ResponseTable>,
    pub chime: Arc<dyn NotificationSound>,
    pub logo: Option<LogoImage>,
}

/// Loads the configuration for this run.
///
/// An explicit `--config` file must load cleanly. The default file is
/// best effort: if it is broken the widget still opens with defaults.
fn load_config(cli: &Cli) -> Result<WidgetConfig> {
    if let Some(path) = &cli.config {
        return ConfigService::with_path(path)
            .get_config()
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let loaded = ConfigService::new().and_then(|service| {
        tracing::info!("[Bootstrap] Using config file: {:?}", service.path());
        service.get_config()
    });
    match loaded {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("[Bootstrap] Falling back to default config: {}", e);
            Ok(WidgetConfig::default())
        }
    }
}

/// Command line flags win over the file.
fn apply_overrides(config: &mut WidgetConfig, cli: &Cli) {
    if cli.no_sound {
        config.sound.enabled = false;
    }
    if cli.no_animation {
        config.animation.enabled = false;
    }
}

pub fn bootstrap(cli: &Cli) -> Result<AppBootstrap> {
    let mut config = load_config(cli)?;
    apply_overrides(&mut config, cli);

    let responses = config.response_table();
    tracing::info!(
        "[Bootstrap] Response table ready with {} rule(s)",
        responses.rules.len()
    );

    let session = ChatSession::new(
        responses,
        config.conversation.script(),
        InputField::new(config.branding.placeholder.clone()),
    );

    let chime = chime_from_config(&config.sound);

    let logo = config
        .branding
        .logo_path
        .as_deref()
        .and_then(|path| match load_logo(path, LOGO_SIZE) {
            Ok(logo) => Some(logo),
            Err(e) => {
                tracing::warn!("[Bootstrap] Header logo skipped: {}", e);
                None
            }
        });

    Ok(AppBootstrap {
        config,
        session,
        chime,
        logo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[branding]\nlogo_path = \"/does/not/exist.png\"\n").unwrap();

        let cli = Cli::parse_from([
            "greene-genie",
            "--config",
            path.to_str().unwrap(),
            "--no-sound",
            "--no-animation",
        ]);
        let boot = bootstrap(&cli).unwrap();

        assert!(!boot.config.sound.enabled);
        assert!(!boot.config.animation.enabled);
        // A missing logo is not fatal.
        assert!(boot.logo.is_none());
        assert!(boot.chime.play().is_ok());
    }

    #[test]
    fn test_broken_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "window = [").unwrap();

        let cli = Cli::parse_from(["greene-genie", "--config", path.to_str().unwrap()]);
        assert!(bootstrap(&cli).is_err());
    }
}
