//! Visual theme for the widget: all "what it looks like" in one place.

use eframe::egui::{Color32, FontId, Margin, Vec2, vec2};

pub struct Theme {
    // Brand colors
    pub dark_green: Color32,
    pub light_green: Color32,
    // Header
    pub header_height: f32,
    pub header_text: Color32,
    pub title_font: FontId,
    pub close_font: FontId,
    pub logo_size: f32,
    // Welcome screen
    pub body_bg: Color32,
    pub heading_color: Color32,
    pub heading_font: FontId,
    pub description_color: Color32,
    pub description_font: FontId,
    // Transcript
    pub chat_bg: Color32,
    pub chat_padding: Margin,
    pub message_font: FontId,
    pub bot_bubble_bg: Color32,
    pub bot_bubble_text: Color32,
    pub bot_bubble_border: Color32,
    pub user_bubble_bg: Color32,
    pub user_bubble_text: Color32,
    pub bubble_padding: Margin,
    pub bubble_rounding: f32,
    /// Space kept free on the side opposite to the speaker.
    pub bubble_side_margin: f32,
    pub timestamp_color: Color32,
    pub timestamp_font: FontId,
    pub message_spacing: f32,
    // Input area
    pub input_bar_height: f32,
    pub input_bar_margin: Margin,
    pub input_border: Color32,
    pub input_text: Color32,
    pub input_font: FontId,
    pub input_rounding: f32,
    pub input_height: f32,
    // Send button
    pub send_bg: Color32,
    pub send_hover_bg: Color32,
    pub send_text: Color32,
    pub send_font: FontId,
    pub send_size: Vec2,
}

impl Default for Theme {
    fn default() -> Self {
        let dark_green = Color32::from_rgb(0x00, 0x56, 0x40);
        Self {
            dark_green,
            light_green: Color32::from_rgb(0x00, 0x68, 0x4d),
            header_height: 65.0,
            header_text: Color32::WHITE,
            title_font: FontId::proportional(16.0),
            close_font: FontId::proportional(24.0),
            logo_size: 45.0,
            body_bg: Color32::WHITE,
            heading_color: Color32::from_rgb(0x2C, 0x3E, 0x50),
            heading_font: FontId::proportional(22.0),
            description_color: Color32::from_rgb(0x5A, 0x6C, 0x7D),
            description_font: FontId::proportional(12.0),
            chat_bg: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            chat_padding: Margin::same(10.0),
            message_font: FontId::proportional(12.5),
            bot_bubble_bg: Color32::WHITE,
            bot_bubble_text: Color32::from_rgb(0x33, 0x33, 0x33),
            bot_bubble_border: Color32::from_rgb(0xD0, 0xD0, 0xD0),
            user_bubble_bg: dark_green,
            user_bubble_text: Color32::WHITE,
            bubble_padding: Margin::symmetric(10.0, 8.0),
            bubble_rounding: 10.0,
            bubble_side_margin: 60.0,
            timestamp_color: Color32::from_rgb(0x99, 0x99, 0x99),
            timestamp_font: FontId::proportional(9.5),
            message_spacing: 8.0,
            input_bar_height: 75.0,
            input_bar_margin: Margin::same(15.0),
            input_border: Color32::from_rgb(0xD0, 0xD0, 0xD0),
            input_text: Color32::from_rgb(0x33, 0x33, 0x33),
            input_font: FontId::proportional(14.5),
            input_rounding: 22.0,
            input_height: 46.0,
            send_bg: Color32::BLACK,
            send_hover_bg: Color32::from_rgb(0x33, 0x33, 0x33),
            send_text: Color32::WHITE,
            send_font: FontId::proportional(13.5),
            send_size: vec2(78.0, 46.0),
        }
    }
}
