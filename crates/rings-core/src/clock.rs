//! Frame clock: running time and per-frame deltas, paused while stopped.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Running time since the first tick, excluding stopped intervals.
    pub elapsed: f32,
    pub dt: f32,
}

/// Elapsed-time source for the frame loop with explicit start/stop.
#[derive(Clone, Debug)]
pub struct FrameClock {
    running: bool,
    last: Option<Instant>,
    elapsed: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            running: true,
            last: None,
            elapsed: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns `None` while stopped. The first tick after (re)starting has `dt == 0`.
    pub fn tick(&mut self, now: Instant) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        }
        .as_secs_f32();
        self.last = Some(now);
        self.elapsed += dt;
        Some(FrameTick {
            elapsed: self.elapsed,
            dt,
        })
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    pub fn start(&mut self) {
        self.running = true;
    }
}
