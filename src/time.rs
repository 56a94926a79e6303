//! Frame clock feeding `(elapsed, delta)` to the animator.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! // once per frame:
//! let (elapsed, delta) = clock.advance();
//! scene.tick(elapsed, delta);
//! ```

use std::time::{Duration, Instant};

/// Wall-clock frame timer with pause, time scaling and an optional fixed step.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    elapsed: f32,
    delta: f32,
    frame: u64,
    paused: bool,
    time_scale: f32,
    fixed_delta: Option<f32>,
    fps: f32,
    fps_window_start: Instant,
    fps_window_frames: u64,
}

const FPS_WINDOW: Duration = Duration::from_millis(500);

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            elapsed: 0.0,
            delta: 0.0,
            frame: 0,
            paused: false,
            time_scale: 1.0,
            fixed_delta: None,
            fps: 0.0,
            fps_window_start: now,
            fps_window_frames: 0,
        }
    }

    /// Step to the next frame and return `(elapsed, delta)` in seconds.
    ///
    /// Scene time only accumulates scaled deltas, so pausing or slowing the
    /// clock never makes `elapsed` jump.
    pub fn advance(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.delta = if self.paused {
            0.0
        } else {
            self.fixed_delta.unwrap_or(raw) * self.time_scale
        };
        self.elapsed += self.delta;
        self.frame += 1;

        self.fps_window_frames += 1;
        let window = now.duration_since(self.fps_window_start);
        if window >= FPS_WINDOW {
            self.fps = self.fps_window_frames as f32 / window.as_secs_f32();
            self.fps_window_frames = 0;
            self.fps_window_start = now;
        }

        (self.elapsed, self.delta)
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames per second, measured over half-second windows.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Negative scales clamp to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Use a constant step instead of measured frame time.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_clock() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fixed_delta_accumulates() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(0.25));
        for _ in 0..4 {
            clock.advance();
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
        assert_eq!(clock.frame(), 4);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(0.1));
        clock.advance();
        clock.set_paused(true);
        thread::sleep(Duration::from_millis(5));
        let (elapsed, delta) = clock.advance();
        assert_eq!(delta, 0.0);
        assert!((elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(0.1));
        clock.set_time_scale(2.0);
        let (_, delta) = clock.advance();
        assert!((delta - 0.2).abs() < 1e-6);

        clock.set_time_scale(-3.0);
        assert_eq!(clock.time_scale(), 0.0);
    }
}
