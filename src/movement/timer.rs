//! Movement domain: frame-counted one-shot timer.

use std::time::Duration;

/// A countdown measured in logic ticks rather than seconds.
///
/// After [`FrameTimer::start`] the timer reports running for exactly
/// `duration` calls to [`FrameTimer::tick`], unless stopped first.
/// The owner must tick it once per logic frame, after reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTimer {
    duration: u32,
    remaining: u32,
}

impl FrameTimer {
    pub fn new(duration_frames: u32) -> Self {
        Self {
            duration: duration_frames,
            remaining: 0,
        }
    }

    /// Build a timer from a wall-clock window at an explicit tick rate.
    /// Partial frames round up so a non-zero window never collapses to zero.
    pub fn from_duration(window: Duration, tick_rate_hz: f32) -> Self {
        Self::new(frames_for(window, tick_rate_hz))
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// (Re)arm the timer. A running timer restarts from the full duration.
    pub fn start(&mut self) {
        self.remaining = self.duration;
    }

    pub fn stop(&mut self) {
        self.remaining = 0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Advance one logic frame.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Length of the window in seconds at the given tick rate.
    pub fn window_secs(&self, tick_rate_hz: f32) -> f32 {
        if tick_rate_hz <= 0.0 {
            return 0.0;
        }
        self.duration as f32 / tick_rate_hz
    }
}

/// Number of whole frames needed to cover `window` at `tick_rate_hz`.
pub fn frames_for(window: Duration, tick_rate_hz: f32) -> u32 {
    if tick_rate_hz <= 0.0 || window.is_zero() {
        return 0;
    }
    // Guard against 0.1 * 60 landing a hair above 6.0
    let frames = window.as_secs_f32() * tick_rate_hz;
    (frames - 1e-4).ceil().max(1.0) as u32
}
