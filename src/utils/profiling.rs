use std::time::{Duration, Instant};

use log::{log_enabled, trace, warn, Level};

use super::math::round_to;

/// Frame-rate estimate sampled every `interval` frames.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: u32,
    frames: u32,
    last_sample: Option<Instant>,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_sample: None,
            fps: 0.0,
        }
    }

    /// Counts one frame presented at `now`. Returns the new estimate when a
    /// sample was taken this frame.
    pub fn record_frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        if self.frames < self.interval {
            return None;
        }
        self.frames = 0;

        let previous = self.last_sample.replace(now)?;
        let elapsed_ms = now.saturating_duration_since(previous).as_secs_f32() * 1000.0;
        if elapsed_ms <= 0.0 {
            return None;
        }
        self.fps = round_to(self.interval as f32 * 1000.0 / elapsed_ms, 2);
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

/// Wall-clock time spent in each tick phase, summed over every tick since the
/// last [`TickProfile::reset`]. `ticks` counts the ticks included.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickProfile {
    pub integrate_time: Duration,
    pub camera_time: Duration,
    pub total_time: Duration,
    pub ticks: u64,
}

impl TickProfile {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Adds the lifetime of the guard to `output` and traces the named phase.
pub struct ScopedTimer<'a> {
    phase: &'static str,
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(phase: &'static str, output: &'a mut Duration) -> Self {
        Self {
            phase,
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        *self.output += elapsed;
        if log_enabled!(Level::Trace) {
            trace!("{} took {} µs", self.phase, elapsed.as_micros());
        }
    }
}

/// Warns when one tick ran past `budget_ms`. Returns whether it did.
pub fn check_tick_budget(elapsed: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    let over = elapsed_ms > budget_ms;
    if over {
        warn!("tick took {elapsed_ms:.2} ms, budget is {budget_ms:.2} ms");
    }
    over
}
