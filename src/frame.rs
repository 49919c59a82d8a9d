use crate::core::Clock;
use crate::traits::FrameClock;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the iterator was created
    pub time: f32,
    /// Seconds since the previous frame, never negative
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator<C: FrameClock = Clock> {
    clock: C,
    frame_number: u64,
    start_time: f64,
    last_frame_time: f64,
}

impl<C: FrameClock> FrameIterator<C> {
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        (self.clock.now() - self.start_time) as f32
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl FrameIterator<Clock> {
    pub fn new() -> Self {
        Self::with_clock(Clock::new())
    }
}

impl Default for FrameIterator<Clock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FrameClock> Iterator for FrameIterator<C> {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = self.clock.now().max(self.last_frame_time);
        let delta = (now - self.last_frame_time) as f32;
        let time = (now - self.start_time) as f32;

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}
