use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval};

/// Source of animation-frame timestamps in milliseconds.
///
/// Timestamps never decrease. `None` means the clock has been torn down.
pub trait FrameClock {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>>;
}

/// Wall-clock frames at a fixed refresh rate
pub struct IntervalClock {
    ticker: Interval,
    origin: Instant,
}

impl IntervalClock {
    pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

    pub fn new(frame: Duration) -> Self {
        let origin = Instant::now();
        let mut ticker = interval(frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { ticker, origin }
    }
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRAME)
    }
}

impl FrameClock for IntervalClock {
    async fn next_frame(&mut self) -> Option<f64> {
        let at = self.ticker.tick().await;
        Some(at.duration_since(self.origin).as_secs_f64() * 1000.0)
    }
}

/// Frames spaced by a fixed step without waiting on real time, ending after
/// a fixed number of frames
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: f64,
    step: f64,
    remaining: u64,
}

impl SimulatedClock {
    pub fn new(step_ms: f64, frames: u64) -> Self {
        Self {
            now: 0.0,
            step: step_ms,
            remaining: frames,
        }
    }
}

impl FrameClock for SimulatedClock {
    async fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let frame = self.now;
        self.now += self.step;
        // Let other branches of the loop run between frames.
        tokio::task::yield_now().await;
        Some(frame)
    }
}
