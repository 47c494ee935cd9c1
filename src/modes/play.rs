use anyhow::Result;

use crate::driver::{
    self, CtrlCListener, GameContext, IntervalClock, RunOptions, RunSummary, ScoreBoard,
};
use crate::error::SetupError;
use crate::game::{GameConfig, GameEngine};
use crate::input::TerminalInput;
use crate::render::{RasterSurface, TerminalSurface};

/// Interactive game in the terminal
pub struct PlayMode {
    config: GameConfig,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Set up the terminal and play until the player quits.
    ///
    /// Setup failures are fatal and come back as [`SetupError`]. The terminal
    /// is restored whether or not the loop succeeds.
    pub async fn run(&mut self) -> Result<RunSummary> {
        self.config.validate().map_err(SetupError::from)?;

        let score = ScoreBoard::new();
        let raster = RasterSurface::new(
            self.config.grid_width,
            self.config.grid_height,
            self.config.cell_size,
        );
        let surface = TerminalSurface::open(raster, score.clone())?;
        tracing::info!(
            width = self.config.grid_width,
            height = self.config.grid_height,
            seed = ?self.config.seed,
            "terminal ready"
        );

        let engine = GameEngine::new(self.config.clone());
        let mut ctx = GameContext::new(engine, surface, score);

        // Run game loop with cleanup
        let result = Self::run_game_loop(&mut ctx).await;

        // Cleanup terminal
        let mut surface = ctx.into_surface();
        surface.close()?;

        result
    }

    async fn run_game_loop(ctx: &mut GameContext<TerminalSurface, ScoreBoard>) -> Result<RunSummary> {
        let (ctrl_c, mut shutdown_rx) = CtrlCListener::spawn();

        let mut clock = IntervalClock::default();
        let mut input = TerminalInput::new();
        let summary = driver::run(
            ctx,
            &mut clock,
            &mut input,
            &mut shutdown_rx,
            RunOptions::default(),
        )
        .await;
        drop(ctrl_c);
        let summary = summary?;

        tracing::info!(
            high_score = ctx.metrics().high_score,
            games_played = ctx.metrics().games_played,
            stop_reason = ?summary.stop_reason,
            "session finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_config_fails_before_terminal_setup() {
        let mut mode = PlayMode::new(GameConfig::new(0, 0));
        let err = mode.run().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::InvalidConfig(_))
        ));
    }
}
