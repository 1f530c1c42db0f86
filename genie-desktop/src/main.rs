// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod logging;
mod ui;

use anyhow::{Result, anyhow};
use clap::Parser;
use genie_infrastructure::GeniePaths;

use crate::app::GenieApp;
use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logs_dir = GeniePaths::logs_dir().ok();
    let _log_guard = logging::init(&cli.log_level, logs_dir.as_deref());

    let boot = app::bootstrap(&cli)?;
    let title = boot.config.branding.title.clone();
    let options = app::native_options(&boot.config);

    tracing::info!("Starting {}", title);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(GenieApp::new(cc, boot))),
    )
    .map_err(|e| anyhow!("Failed to run widget window: {}", e))?;

    tracing::info!("Widget closed");
    Ok(())
}
