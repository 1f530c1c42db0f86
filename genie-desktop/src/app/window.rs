//! Window position over time: slide-in, then rest.
//!
//! Kept free of egui types so the placement decisions can be tested
//! without a window.

use std::time::{Duration, Instant};

use genie_core::config::{AnimationConfig, WindowConfig};
use genie_core::placement::{self, ScreenMargins, ScreenSize, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No frame has been drawn yet.
    Pending,
    Sliding { started: Instant },
    Settled,
    /// The user moved the window; stop positioning it.
    Released,
}

/// Result of one [`WindowDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStep {
    /// New outer position of the window, if it must move.
    pub position: Option<(i32, i32)>,
    /// When the next position change is due.
    pub next_frame: Option<Duration>,
}

pub struct WindowDriver {
    window: WindowSize,
    margins: ScreenMargins,
    animation: AnimationConfig,
    screen: ScreenSize,
    phase: Phase,
    last_position: Option<(i32, i32)>,
}

impl WindowDriver {
    pub fn new(window: &WindowConfig, animation: &AnimationConfig) -> Self {
        Self {
            window: window.size(),
            margins: window.margins(),
            animation: animation.clone(),
            screen: window.fallback_screen,
            phase: Phase::Pending,
            last_position: None,
        }
    }

    /// Where the window is first created, before any frame runs.
    pub fn initial_position(&self) -> (i32, i32) {
        let (rest_x, y) = self.resting_position();
        if self.animation.enabled {
            (placement::offscreen_x(self.screen), y)
        } else {
            (rest_x, y)
        }
    }

    pub fn resting_position(&self) -> (i32, i32) {
        placement::resting_position(self.screen, self.window, self.margins)
    }

    /// Stops all further positioning (the user is dragging the window).
    pub fn release(&mut self) {
        if self.phase != Phase::Released {
            tracing::debug!("Window released to the user");
        }
        self.phase = Phase::Released;
    }

    /// Advances the animation to `now`.
    ///
    /// `monitor` is the real screen size once the windowing system reports
    /// it; until then the configured fallback is used.
    pub fn step(&mut self, now: Instant, monitor: Option<ScreenSize>) -> WindowStep {
        if let Some(screen) = monitor
            && screen != self.screen
            && self.phase != Phase::Released
        {
            tracing::debug!(
                width = screen.width,
                height = screen.height,
                "Monitor size detected"
            );
            self.screen = screen;
            // Re-place on the real monitor at the next move.
            self.last_position = None;
        }

        match self.phase {
            Phase::Released => WindowStep::default(),
            Phase::Pending if !self.animation.enabled => {
                self.phase = Phase::Settled;
                self.settle()
            }
            Phase::Pending => {
                self.phase = Phase::Sliding { started: now };
                self.slide(now, now)
            }
            Phase::Sliding { started } => self.slide(started, now),
            Phase::Settled => self.settle(),
        }
    }

    fn slide(&mut self, started: Instant, now: Instant) -> WindowStep {
        let slide = self
            .animation
            .apply(placement::slide_in(self.screen, self.window, self.margins));
        let elapsed = now.saturating_duration_since(started);
        let frame = slide.frame_at(elapsed);
        if frame.is_settled() {
            self.phase = Phase::Settled;
            return self.settle();
        }
        WindowStep {
            position: self.move_to((frame.x(), slide.y)),
            next_frame: slide.until_next_frame(elapsed),
        }
    }

    fn settle(&mut self) -> WindowStep {
        let rest = self.resting_position();
        WindowStep {
            position: self.move_to(rest),
            next_frame: None,
        }
    }

    fn move_to(&mut self, position: (i32, i32)) -> Option<(i32, i32)> {
        if self.last_position == Some(position) {
            return None;
        }
        self.last_position = Some(position);
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(animated: bool) -> WindowDriver {
        let animation = AnimationConfig {
            enabled: animated,
            ..AnimationConfig::default()
        };
        WindowDriver::new(&WindowConfig::default(), &animation)
    }

    #[test]
    fn test_initial_position_is_offscreen_when_animated() {
        assert_eq!(driver(true).initial_position(), (1920, 550));
        assert_eq!(driver(false).initial_position(), (1548, 550));
    }

    #[test]
    fn test_slide_moves_then_settles() {
        let mut driver = driver(true);
        let start = Instant::now();

        let first = driver.step(start, None);
        assert_eq!(first.position, Some((1920, 550)));
        assert_eq!(first.next_frame, Some(Duration::from_millis(15)));

        let mid = driver.step(start + Duration::from_millis(150), None);
        assert_eq!(mid.position, Some((1594, 550)));

        let done = driver.step(start + Duration::from_millis(400), None);
        assert_eq!(done.position, Some((1548, 550)));
        assert_eq!(done.next_frame, None);

        // Nothing left to do once resting.
        assert_eq!(
            driver.step(start + Duration::from_secs(1), None),
            WindowStep::default()
        );
    }

    #[test]
    fn test_disabled_animation_goes_straight_to_rest() {
        let mut driver = driver(false);
        let step = driver.step(Instant::now(), None);
        assert_eq!(step.position, Some((1548, 550)));
        assert_eq!(step.next_frame, None);
    }

    #[test]
    fn test_real_monitor_replaces_fallback() {
        let mut driver = driver(true);
        let start = Instant::now();
        driver.step(start, None);
        driver.step(start + Duration::from_secs(1), None);

        let step = driver.step(
            start + Duration::from_secs(2),
            Some(ScreenSize::new(1366, 768)),
        );
        assert_eq!(step.position, Some((1366 - 357 - 15, 768 - 470 - 60)));
    }

    #[test]
    fn test_released_window_is_left_alone() {
        let mut driver = driver(true);
        let start = Instant::now();
        driver.step(start, None);
        driver.release();
        assert_eq!(
            driver.step(start + Duration::from_millis(30), Some(ScreenSize::new(800, 600))),
            WindowStep::default()
        );
    }
}
