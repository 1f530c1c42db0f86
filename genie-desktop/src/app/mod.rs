//! The widget window.

pub mod bootstrap;
pub mod window;

use std::time::Instant;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions, ViewportCommand};
use genie_core::config::WidgetConfig;
use genie_core::placement::ScreenSize;
use genie_core::responder::ResponseTable;
use genie_core::session::{ChatSession, Screen, SubmitOutcome};
use genie_infrastructure::play_detached;

pub use bootstrap::{AppBootstrap, bootstrap};
use window::WindowDriver;

use crate::ui::{self, HeaderAction, Theme};

/// Window options for a borderless, fixed-size popup.
pub fn native_options(config: &WidgetConfig) -> eframe::NativeOptions {
    let driver = WindowDriver::new(&config.window, &config.animation);
    let (x, y) = driver.initial_position();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(config.branding.title.clone())
        .with_inner_size([config.window.width as f32, config.window.height as f32])
        .with_position([x as f32, y as f32])
        .with_decorations(false)
        .with_resizable(false);
    if config.window.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

pub struct GenieApp {
    config: WidgetConfig,
    session: ChatSession<ResponseTable>,
    window: WindowDriver,
    theme: Theme,
    logo: Option<TextureHandle>,
}

impl GenieApp {
    pub fn new(cc: &eframe::CreationContext<'_>, boot: AppBootstrap) -> Self {
        let AppBootstrap {
            config,
            session,
            chime,
            logo,
        } = boot;

        let logo = logo.map(|image| {
            let pixels = ColorImage::from_rgba_unmultiplied(
                [image.width as usize, image.height as usize],
                &image.rgba,
            );
            cc.egui_ctx
                .load_texture("genie-logo", pixels, TextureOptions::LINEAR)
        });

        let mut style = (*cc.egui_ctx.style()).clone();
        style.visuals = egui::Visuals::light();
        cc.egui_ctx.set_style(style);

        tracing::info!(session_id = %session.id(), "Widget opened");
        play_detached(chime);

        Self {
            window: WindowDriver::new(&config.window, &config.animation),
            config,
            session,
            theme: Theme::default(),
            logo,
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.submit(now) {
            SubmitOutcome::Started => {
                tracing::info!(session_id = %self.session.id(), "Switched to chat screen");
            }
            SubmitOutcome::Sent => {}
            SubmitOutcome::Ignored => {
                tracing::debug!("Ignored empty submission");
            }
        }
    }
}

impl eframe::App for GenieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let monitor = ctx
            .input(|i| i.viewport().monitor_size)
            .map(|size| ScreenSize::new(size.x as i32, size.y as i32));
        let step = self.window.step(now, monitor);
        if let Some((x, y)) = step.position {
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(egui::pos2(
                x as f32, y as f32,
            )));
        }

        for message in self.session.tick(now) {
            tracing::debug!(speaker = ?message.speaker, "Message shown");
        }

        match ui::header::show(ctx, &self.theme, &self.config.branding.title, self.logo.as_ref()) {
            HeaderAction::Close => {
                tracing::info!("Close button pressed");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            HeaderAction::StartDrag => {
                self.window.release();
                ctx.send_viewport_cmd(ViewportCommand::StartDrag);
            }
            HeaderAction::None => {}
        }

        if ui::input_bar::show(ctx, &self.theme, self.session.input_mut()) {
            self.submit(now);
        }

        match self.session.screen() {
            Screen::Welcome => ui::welcome::show(
                ctx,
                &self.theme,
                &self.config.branding.heading,
                &self.config.branding.description,
            ),
            Screen::Chat => ui::chat_view::show(ctx, &self.theme, self.session.transcript()),
        }

        let wait = [step.next_frame, self.session.next_due(now)]
            .into_iter()
            .flatten()
            .min();
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}
