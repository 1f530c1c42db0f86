//! Welcome screen shown until the first message is sent.

use eframe::egui::{self, RichText};

use super::theme::Theme;

pub fn show(ctx: &egui::Context, theme: &Theme, heading: &str, description: &str) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme.body_bg))
        .show(ctx, |ui| {
            // Roughly centred, slightly above the middle.
            let top = (ui.available_height() * 0.48 - 55.0).max(0.0);
            ui.add_space(top);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(heading)
                        .font(theme.heading_font.clone())
                        .color(theme.heading_color)
                        .strong(),
                );
                ui.add_space(15.0);
                ui.label(
                    RichText::new(description)
                        .font(theme.description_font.clone())
                        .color(theme.description_color),
                );
            });
        });
}
