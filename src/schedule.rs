//! Frame scheduling and clocks.
//!
//! Rendering is cooperative: one pass runs to completion, then re-arms the
//! scheduler for the next display refresh. Hosts with a real display loop
//! implement [`FrameScheduler`] on top of it; tests and offline rendering use
//! [`FixedRateScheduler`] to drive frames with synthetic timestamps.

use std::cell::Cell;
use std::time::Instant;

/// Yields animation timestamps, one per armed frame.
pub trait FrameScheduler {
    /// Request one more frame.
    fn schedule_next(&mut self);

    /// Wait for the armed frame and return its timestamp in milliseconds.
    ///
    /// Returns `None` when no frame is armed or the host has stopped.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Emits evenly spaced timestamps for a fixed number of frames.
#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    start_ms: f64,
    interval_ms: f64,
    remaining: u64,
    index: u64,
    armed: bool,
}

impl FixedRateScheduler {
    pub fn new(start_ms: f64, fps: f64, frames: u64) -> Self {
        let interval_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
        Self {
            start_ms,
            interval_ms,
            remaining: frames,
            index: 0,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn frames_emitted(&self) -> u64 {
        self.index
    }

    /// Stop emitting frames (host teardown).
    pub fn stop(&mut self) {
        self.remaining = 0;
        self.armed = false;
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn schedule_next(&mut self) {
        self.armed = self.remaining > 0;
    }

    fn next_frame(&mut self) -> Option<f64> {
        if !self.armed || self.remaining == 0 {
            return None;
        }
        self.armed = false;
        self.remaining -= 1;
        let timestamp = self.start_ms + self.index as f64 * self.interval_ms;
        self.index += 1;
        Some(timestamp)
    }
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_scheduler_yields_nothing() {
        let mut scheduler = FixedRateScheduler::new(0.0, 60.0, 10);
        assert_eq!(scheduler.next_frame(), None);
    }

    #[test]
    fn test_one_frame_per_arm() {
        let mut scheduler = FixedRateScheduler::new(100.0, 50.0, 3);
        scheduler.schedule_next();
        assert_eq!(scheduler.next_frame(), Some(100.0));
        assert_eq!(scheduler.next_frame(), None);

        scheduler.schedule_next();
        scheduler.schedule_next();
        assert_eq!(scheduler.next_frame(), Some(120.0));
        scheduler.schedule_next();
        assert_eq!(scheduler.next_frame(), Some(140.0));

        scheduler.schedule_next();
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.next_frame(), None);
        assert_eq!(scheduler.frames_emitted(), 3);
    }

    #[test]
    fn test_stop_disarms() {
        let mut scheduler = FixedRateScheduler::new(0.0, 30.0, 100);
        scheduler.schedule_next();
        scheduler.stop();
        assert_eq!(scheduler.next_frame(), None);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(5.0);
        clock.advance(10.0);
        assert_eq!(clock.now_ms(), 15.0);
        clock.set(2.0);
        assert_eq!((&clock).now_ms(), 2.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
