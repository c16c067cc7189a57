//! Frame pacing.

use std::time::{Duration, Instant};

/// Rate-limited clock: `tick()` sleeps off the remainder of the frame
/// budget and returns the elapsed milliseconds since the previous call.
pub struct FrameLimiter {
    target: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(framerate: u32) -> Self {
        Self {
            target: Duration::from_secs_f64(1.0 / framerate.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32() * 1000.0
    }
}
