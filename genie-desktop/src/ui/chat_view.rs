//! Scrollable transcript of chat bubbles.

use eframe::egui::{self, Align, Layout, RichText, Stroke};
use genie_core::session::{ChatMessage, Transcript};

use super::theme::Theme;

pub fn show(ctx: &egui::Context, theme: &Theme, transcript: &Transcript) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::none()
                .fill(theme.chat_bg)
                .inner_margin(theme.chat_padding),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let bubble_width = (ui.available_width() - theme.bubble_side_margin).max(80.0);
                    for message in transcript {
                        bubble(ui, theme, message, bubble_width);
                        ui.add_space(theme.message_spacing);
                    }
                });
        });
}

fn bubble(ui: &mut egui::Ui, theme: &Theme, message: &ChatMessage, max_width: f32) {
    let (fill, text_color, stroke, align) = if message.is_from_user() {
        (
            theme.user_bubble_bg,
            theme.user_bubble_text,
            Stroke::NONE,
            Align::Max,
        )
    } else {
        (
            theme.bot_bubble_bg,
            theme.bot_bubble_text,
            Stroke::new(1.0, theme.bot_bubble_border),
            Align::Min,
        )
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(theme.bubble_rounding)
            .inner_margin(theme.bubble_padding)
            .show(ui, |ui| {
                let text_width = max_width - theme.bubble_padding.sum().x;
                ui.set_max_width(text_width);
                ui.label(
                    RichText::new(&message.content)
                        .font(theme.message_font.clone())
                        .color(text_color),
                );
            });
        ui.label(
            RichText::new(&message.timestamp)
                .font(theme.timestamp_font.clone())
                .color(theme.timestamp_color),
        );
    });
}
