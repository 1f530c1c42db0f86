//! Slide-in animation for the popup window.
//!
//! The window travels horizontally from `start_x` to `end_x` over a fixed
//! number of frames, following a cubic ease-out curve: fast at first and
//! settling gently at its resting position.

use std::time::Duration;

/// Default number of frames in the slide-in.
pub const DEFAULT_STEPS: u32 = 20;
/// Default delay between two frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(15);

/// Cubic ease-out: `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Where the animation currently wants the window to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrame {
    /// Still moving; the window's left edge belongs at this x.
    Moving(i32),
    /// Finished; the window rests at this x.
    Settled(i32),
}

impl SlideFrame {
    pub fn x(self) -> i32 {
        match self {
            SlideFrame::Moving(x) | SlideFrame::Settled(x) => x,
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, SlideFrame::Settled(_))
    }
}

/// A horizontal slide from `start_x` to `end_x` at a fixed `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIn {
    pub start_x: i32,
    pub end_x: i32,
    pub y: i32,
    pub steps: u32,
    pub frame_interval: Duration,
}

impl SlideIn {
    pub fn new(start_x: i32, end_x: i32, y: i32) -> Self {
        Self {
            start_x,
            end_x,
            y,
            steps: DEFAULT_STEPS,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps.max(1);
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// X position of frame `step` (`0..steps`), truncated toward zero.
    pub fn frame_x(&self, step: u32) -> i32 {
        if step >= self.steps {
            return self.end_x;
        }
        let progress = f64::from(step) / f64::from(self.steps);
        let eased = ease_out_cubic(progress);
        let start = f64::from(self.start_x);
        let distance = start - f64::from(self.end_x);
        (start - distance * eased) as i32
    }

    /// Every frame position in order, ending exactly on `end_x`.
    pub fn frames(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.steps)
            .map(|step| self.frame_x(step))
            .chain(std::iter::once(self.end_x))
    }

    /// Time from the first frame to the settled frame.
    pub fn total_duration(&self) -> Duration {
        self.frame_interval * self.steps
    }

    /// Frame to show `elapsed` after the animation started.
    pub fn frame_at(&self, elapsed: Duration) -> SlideFrame {
        let interval = self.frame_interval.as_nanos().max(1);
        let step = elapsed.as_nanos() / interval;
        if step >= u128::from(self.steps) {
            SlideFrame::Settled(self.end_x)
        } else {
            // step < steps <= u32::MAX
            SlideFrame::Moving(self.frame_x(step as u32))
        }
    }

    /// Time remaining until the next frame change, or `None` once settled.
    pub fn until_next_frame(&self, elapsed: Duration) -> Option<Duration> {
        if elapsed >= self.total_duration() {
            return None;
        }
        let interval = self.frame_interval.as_nanos().max(1);
        let into_frame = elapsed.as_nanos() % interval;
        let remaining = interval - into_frame;
        Some(Duration::from_nanos(remaining as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_cubic_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_cubic(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_first_frame_is_start() {
        let slide = SlideIn::new(1920, 1548, 550);
        assert_eq!(slide.frame_x(0), 1920);
    }

    #[test]
    fn test_halfway_frame() {
        // 1920 - 372 * 0.875 = 1594.5 -> 1594
        let slide = SlideIn::new(1920, 1548, 550);
        assert_eq!(slide.frame_x(10), 1594);
    }

    #[test]
    fn test_frames_end_exactly_at_rest() {
        let slide = SlideIn::new(1920, 1548, 550);
        let frames: Vec<i32> = slide.frames().collect();
        assert_eq!(frames.len(), 21);
        assert_eq!(frames.first(), Some(&1920));
        assert_eq!(frames.last(), Some(&1548));
        assert!(frames.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_frame_at_uses_interval() {
        let slide = SlideIn::new(1920, 1548, 550);
        assert_eq!(slide.frame_at(Duration::ZERO), SlideFrame::Moving(1920));
        assert_eq!(
            slide.frame_at(Duration::from_millis(150)),
            SlideFrame::Moving(slide.frame_x(10))
        );
        assert_eq!(
            slide.frame_at(Duration::from_millis(299)),
            SlideFrame::Moving(slide.frame_x(19))
        );
        assert_eq!(
            slide.frame_at(Duration::from_millis(300)),
            SlideFrame::Settled(1548)
        );
    }

    #[test]
    fn test_total_duration_and_next_frame() {
        let slide = SlideIn::new(100, 0, 0);
        assert_eq!(slide.total_duration(), Duration::from_millis(300));
        assert_eq!(
            slide.until_next_frame(Duration::from_millis(20)),
            Some(Duration::from_millis(10))
        );
        assert_eq!(slide.until_next_frame(Duration::from_millis(300)), None);
    }

    #[test]
    fn test_zero_steps_is_clamped() {
        let slide = SlideIn::new(100, 0, 0).with_steps(0);
        assert_eq!(slide.steps, 1);
        assert_eq!(slide.frames().collect::<Vec<_>>(), vec![100, 0]);
    }
}
