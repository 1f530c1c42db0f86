//! Widget rendering, one module per region of the window.

pub mod chat_view;
pub mod header;
pub mod input_bar;
pub mod theme;
pub mod welcome;

pub use header::HeaderAction;
pub use theme::Theme;
