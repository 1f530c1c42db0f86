//! Dark green header: logo, title and close button.

use eframe::egui::{self, Align, Layout, RichText, Sense, Stroke, TextureHandle};

use super::theme::Theme;

/// What the user did with the header this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Close,
    StartDrag,
}

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    title: &str,
    logo: Option<&TextureHandle>,
) -> HeaderAction {
    let mut action = HeaderAction::None;

    egui::TopBottomPanel::top("genie_header")
        .exact_height(theme.header_height)
        .show_separator_line(false)
        .frame(
            egui::Frame::none()
                .fill(theme.dark_green)
                .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
        )
        .show(ctx, |ui| {
            // The header doubles as the window's drag handle.
            let drag = ui.interact(
                ui.max_rect(),
                egui::Id::new("genie_header_drag"),
                Sense::drag(),
            );
            if drag.drag_started() {
                action = HeaderAction::StartDrag;
            }

            ui.horizontal_centered(|ui| {
                if let Some(texture) = logo {
                    let size = egui::vec2(theme.logo_size, theme.logo_size);
                    ui.add(egui::Image::new((texture.id(), size)));
                    ui.add_space(5.0);
                }

                ui.label(
                    RichText::new(title)
                        .font(theme.title_font.clone())
                        .color(theme.header_text)
                        .strong(),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let widgets = &mut ui.visuals_mut().widgets;
                    widgets.inactive.weak_bg_fill = theme.dark_green;
                    widgets.hovered.weak_bg_fill = theme.light_green;
                    widgets.active.weak_bg_fill = theme.light_green;
                    widgets.hovered.bg_stroke = Stroke::NONE;
                    widgets.active.bg_stroke = Stroke::NONE;

                    let close = egui::Button::new(
                        RichText::new("×")
                            .font(theme.close_font.clone())
                            .color(theme.header_text),
                    )
                    .min_size(egui::vec2(36.0, 36.0));

                    if ui
                        .add(close)
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        action = HeaderAction::Close;
                    }
                });
            });
        });

    action
}
