//! Rounded message field and the Send button.

use eframe::egui::{self, Align, Layout, RichText, Stroke};
use genie_core::session::InputField;

use super::theme::Theme;

/// Draws the input bar; returns true when the user asked to send.
pub fn show(ctx: &egui::Context, theme: &Theme, input: &mut InputField) -> bool {
    let mut submit = false;

    egui::TopBottomPanel::bottom("genie_input_bar")
        .exact_height(theme.input_bar_height)
        .show_separator_line(false)
        .frame(
            egui::Frame::none()
                .fill(theme.body_bg)
                .inner_margin(theme.input_bar_margin),
        )
        .show(ctx, |ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.scope(|ui| {
                    let widgets = &mut ui.visuals_mut().widgets;
                    widgets.inactive.weak_bg_fill = theme.send_bg;
                    widgets.hovered.weak_bg_fill = theme.send_hover_bg;
                    widgets.active.weak_bg_fill = theme.send_hover_bg;
                    widgets.hovered.bg_stroke = Stroke::NONE;
                    widgets.active.bg_stroke = Stroke::NONE;

                    let send = egui::Button::new(
                        RichText::new("Send")
                            .font(theme.send_font.clone())
                            .color(theme.send_text)
                            .strong(),
                    )
                    .rounding(theme.send_size.y / 2.0)
                    .min_size(theme.send_size);

                    if ui
                        .add(send)
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        submit = true;
                    }
                });

                ui.add_space(10.0);

                let field_width = ui.available_width();
                egui::Frame::none()
                    .fill(theme.body_bg)
                    .stroke(Stroke::new(1.0, theme.input_border))
                    .rounding(theme.input_rounding)
                    .inner_margin(egui::Margin::symmetric(15.0, 0.0))
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(field_width - 30.0, theme.input_height));
                        ui.centered_and_justified(|ui| {
                            let hint = if input.is_focused() {
                                ""
                            } else {
                                input.placeholder()
                            }
                            .to_string();

                            let response = ui.add(
                                egui::TextEdit::singleline(&mut input.text)
                                    .hint_text(hint)
                                    .font(theme.input_font.clone())
                                    .text_color(theme.input_text)
                                    .frame(false),
                            );

                            if response.gained_focus() {
                                input.focus_in();
                            }
                            if response.lost_focus() {
                                input.focus_out();
                                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                    submit = true;
                                    // Keep typing without clicking back in.
                                    response.request_focus();
                                    input.focus_in();
                                }
                            }
                        });
                    });
            });
        });

    submit
}
