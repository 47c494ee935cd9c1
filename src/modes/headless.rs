//! Input-less simulation on a virtual clock
//!
//! Useful for smoke-testing pacing and collision rules without a terminal:
//! the snake runs straight ahead until it hits something or the frame budget
//! runs out, and a JSON summary is produced.

use anyhow::Result;
use serde::Serialize;

use crate::driver::{
    self, CtrlCListener, GameContext, RunOptions, RunSummary, ScoreBoard, SimulatedClock,
};
use crate::error::SetupError;
use crate::game::{GameConfig, GameEngine, Phase, Position};
use crate::input::NoInput;
use crate::metrics::SessionMetrics;
use crate::render::RasterSurface;

/// Final state of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub length: usize,
    pub ticks: u32,
    pub step_period_ms: u32,
    pub phase: Phase,
    pub head: Position,
    pub apple: Position,
    pub run: RunSummary,
    pub session: SessionMetrics,
}

pub struct HeadlessMode {
    config: GameConfig,
    max_frames: u64,
    frame_ms: f64,
}

impl HeadlessMode {
    pub const FRAME_MS: f64 = 16.0;

    pub fn new(config: GameConfig, max_frames: u64) -> Self {
        Self {
            config,
            max_frames,
            frame_ms: Self::FRAME_MS,
        }
    }

    pub async fn run(&mut self) -> Result<GameSummary> {
        self.config.validate().map_err(SetupError::from)?;

        let surface = RasterSurface::new(
            self.config.grid_width,
            self.config.grid_height,
            self.config.cell_size,
        );
        let engine = GameEngine::new(self.config.clone());
        let mut ctx = GameContext::new(engine, surface, ScoreBoard::new());

        let (ctrl_c, mut shutdown_rx) = CtrlCListener::spawn();

        let mut clock = SimulatedClock::new(self.frame_ms, self.max_frames);
        let options = RunOptions {
            stop_on_game_over: true,
        };
        let run = driver::run(&mut ctx, &mut clock, &mut NoInput, &mut shutdown_rx, options).await;
        drop(ctrl_c);
        let run = run?;

        let state = ctx.state();
        let summary = GameSummary {
            score: state.score(),
            length: state.snake().len(),
            ticks: state.ticks(),
            step_period_ms: state.step_period_ms(),
            phase: state.phase(),
            head: state.snake().head(),
            apple: state.apple(),
            run,
            session: ctx.metrics().clone(),
        };
        tracing::info!(
            score = summary.score,
            ticks = summary.ticks,
            phase = ?summary.phase,
            "headless run finished"
        );
        Ok(summary)
    }
}
