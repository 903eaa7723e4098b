//! Frame pacing
//!
//! A [`TickSource`] decides when the next frame happens. Browsers pace with
//! `requestAnimationFrame` directly (see `main.rs`); everything else pulls
//! ticks from one of these.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

/// Supplies frame ticks to [`super::FrameDriver::run`]
pub trait TickSource {
    /// Wait until the next frame is due. `false` means no more frames.
    fn next_tick(&mut self) -> bool;
}

/// A fixed number of back-to-back ticks (tests, headless runs)
#[derive(Debug, Clone)]
pub struct StepTicks {
    remaining: u64,
}

impl StepTicks {
    pub fn new(count: u64) -> Self {
        Self { remaining: count }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl TickSource for StepTicks {
    fn next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Wall-clock pacing at a target frame rate, optionally capped
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FixedRate {
    frame: Duration,
    next_due: Option<Instant>,
    remaining: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next_due: None,
            remaining: None,
        }
    }

    /// Stop after `frames` ticks
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TickSource for FixedRate {
    fn next_tick(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let due = self.next_due.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        // Fell behind: resync instead of bursting to catch up
        self.next_due = Some(due.max(now) + self.frame);
        true
    }
}
