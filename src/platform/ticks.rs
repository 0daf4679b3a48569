//! Frame scheduling
//!
//! In the browser, `requestAnimationFrame` calls back into the loop. Headless
//! runs pull frame timestamps from a `TickSource` instead.

use super::clock::{Clock, ManualClock};

/// Source of frame timestamps (ms). `None` means no more frames.
pub trait TickSource {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Fixed-interval frames that also drive a `ManualClock`
#[derive(Debug, Clone)]
pub struct HeadlessTicks {
    clock: ManualClock,
    frame_ms: f64,
    remaining: u32,
}

impl HeadlessTicks {
    /// ~60 Hz display refresh
    pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn new(clock: ManualClock, frames: u32) -> Self {
        Self::with_interval(clock, frames, Self::DEFAULT_FRAME_MS)
    }

    pub fn with_interval(clock: ManualClock, frames: u32, frame_ms: f64) -> Self {
        Self {
            clock,
            frame_ms,
            remaining: frames,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl TickSource for HeadlessTicks {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.clock.advance(self.frame_ms);
        Some(self.clock.now_ms())
    }
}
