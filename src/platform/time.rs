//! Frame pacing
//!
//! The game runs on wall-clock delta time; this clock only caps how often a
//! frame is requested and measures the gap between frames.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    target: Duration,
    nominal_dt: f32,
    last_frame: Option<Instant>,
    next_frame: Instant,
    fps_window_start: Instant,
    fps_frames: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let fps = target_fps.max(1);
        Self {
            target: Duration::from_secs_f64(1.0 / fps as f64),
            nominal_dt: 1.0 / fps as f32,
            last_frame: None,
            next_frame: now,
            fps_window_start: now,
            fps_frames: 0,
        }
    }

    /// Mark a frame at `now` and return seconds since the previous one
    ///
    /// The first frame has no predecessor and reports one nominal frame.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => self.nominal_dt,
        };
        self.last_frame = Some(now);
        // Never schedule in the past after a stall
        self.next_frame = (self.next_frame + self.target).max(now);
        self.fps_frames += 1;
        dt
    }

    pub fn next_frame_at(&self) -> Instant {
        self.next_frame
    }

    pub fn is_frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Measured frame rate, reported at most once per second
    pub fn take_fps(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.fps_window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.fps_frames as f32 / elapsed.as_secs_f32();
        self.fps_window_start = now;
        self.fps_frames = 0;
        Some(fps)
    }
}
