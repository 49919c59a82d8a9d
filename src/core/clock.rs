use std::time::Instant;

use crate::traits::FrameClock;

/// Wall clock for the frame loop
///
/// `now()` counts seconds since creation; `tick()` returns the delta since
/// the previous tick.
#[derive(Debug)]
pub struct Clock {
    origin: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last_tick: now,
        }
    }

    /// Seconds since the previous tick (or creation/reset)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Restart delta measurement without moving the origin
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
