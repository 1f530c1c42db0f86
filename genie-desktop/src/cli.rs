use std::path::PathBuf;

use clap::Parser;

/// Greene Genie - a popup chat assistant for the desktop.
#[derive(Parser, Debug, Clone)]
#[command(name = "greene-genie", version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not play the notification chime on startup
    #[arg(long)]
    pub no_sound: bool,

    /// Show the window at its resting position without sliding in
    #[arg(long)]
    pub no_animation: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "genie_core=trace")
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["greene-genie"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_sound);
        assert!(!cli.no_animation);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "greene-genie",
            "--config",
            "/tmp/genie.toml",
            "--no-sound",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/genie.toml")));
        assert!(cli.no_sound);
        assert_eq!(cli.log_level, "debug");
    }
}
