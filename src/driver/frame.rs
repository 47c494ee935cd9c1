use anyhow::Result;

use crate::game::TickOutcome;
use crate::render::DisplaySurface;

use super::context::GameContext;
use super::score::ScoreSink;

/// What happened on one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// First frame; only recorded the time
    Baseline,
    /// Too early for a tick, or the game is over
    Skipped,
    /// One tick was applied and the frame repainted
    Ticked(TickOutcome),
}

/// Gates ticks on elapsed frame time.
///
/// At most one tick per frame, and only once a full step period has passed
/// since the previous tick. Missed periods are not caught up.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    last_tick: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the last applied tick, or of the baseline frame
    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Forget the baseline; the next frame establishes a new one
    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    pub fn on_frame<S: DisplaySurface, K: ScoreSink>(
        &mut self,
        timestamp: f64,
        ctx: &mut GameContext<S, K>,
    ) -> Result<FrameOutcome> {
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(timestamp);
            return Ok(FrameOutcome::Baseline);
        };

        let elapsed = timestamp - last_tick;
        if ctx.state().is_game_over() || elapsed < f64::from(ctx.state().step_period_ms()) {
            return Ok(FrameOutcome::Skipped);
        }

        self.last_tick = Some(timestamp);
        let outcome = ctx.tick();
        ctx.repaint()?;
        Ok(FrameOutcome::Ticked(outcome))
    }
}
