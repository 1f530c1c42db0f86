//! Window placement in the bottom-right corner of the screen.

use serde::{Deserialize, Serialize};

use crate::animation::SlideIn;

/// Size of the monitor the widget pops up on, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Fixed outer size of the widget window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(357, 470)
    }
}

/// Gap kept between the window and the right/bottom screen edges.
///
/// The bottom gap is larger so the widget clears a typical taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenMargins {
    pub right: i32,
    pub bottom: i32,
}

impl Default for ScreenMargins {
    fn default() -> Self {
        Self {
            right: 15,
            bottom: 60,
        }
    }
}

/// Top-left corner of the window once it has finished sliding in.
pub fn resting_position(screen: ScreenSize, window: WindowSize, margins: ScreenMargins) -> (i32, i32) {
    (
        screen.width - window.width - margins.right,
        screen.height - window.height - margins.bottom,
    )
}

/// X coordinate where the slide starts: just past the right screen edge.
pub fn offscreen_x(screen: ScreenSize) -> i32 {
    screen.width
}

/// Builds the slide from off-screen to the resting position.
pub fn slide_in(screen: ScreenSize, window: WindowSize, margins: ScreenMargins) -> SlideIn {
    let (end_x, y) = resting_position(screen, window, margins);
    SlideIn::new(offscreen_x(screen), end_x, y)
}
