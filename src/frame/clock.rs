use web_time::Instant;

/// Elapsed and per-frame delta time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

impl FrameTime {
    /// A frame time with explicit values, for driving the loop
    /// deterministically.
    #[must_use]
    pub fn at(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// Monotonic frame clock with a smoothed FPS readout.
pub struct Clock {
    /// When the loop started
    start: Instant,
    /// Timestamp of the previous tick
    previous: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Start a clock now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            previous: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to now and report elapsed/delta.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start).as_secs_f32();
        let delta = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime { elapsed, delta }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_monotonic() {
        let mut clock = Clock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first.elapsed >= 0.0);
        assert!(second.elapsed >= first.elapsed);
        assert!(second.delta >= 0.0);
        assert!(second.delta <= second.elapsed);
    }
}
