use anyhow::Result;

use crate::game::{GameEngine, GameState, TickOutcome};
use crate::input::KeyAction;
use crate::metrics::SessionMetrics;
use crate::render::{DisplaySurface, Painter};

use super::score::ScoreSink;

/// Everything one running game needs, built once at startup and passed to
/// the loop by reference
pub struct GameContext<S, K> {
    engine: GameEngine,
    state: GameState,
    painter: Painter,
    surface: S,
    score_sink: K,
    metrics: SessionMetrics,
}

impl<S: DisplaySurface, K: ScoreSink> GameContext<S, K> {
    pub fn new(mut engine: GameEngine, surface: S, mut score_sink: K) -> Self {
        let state = engine.reset();
        let painter = Painter::new(engine.config().cell_size);
        score_sink.set_score(state.score());

        Self {
            engine,
            state,
            painter,
            surface,
            score_sink,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Apply one tick and report score changes and game over
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick(&mut self.state);
        tracing::trace!(
            head = ?self.state.snake().head(),
            length = self.state.snake().len(),
            "tick"
        );

        if outcome.ate_apple {
            self.score_sink.set_score(self.state.score());
            self.metrics.on_apple();
            tracing::debug!(
                score = self.state.score(),
                step_period_ms = self.state.step_period_ms(),
                apple = ?self.state.apple(),
                "apple eaten"
            );
        }

        if let Some(collision) = outcome.collision {
            self.metrics.on_game_over(self.state.score());
            tracing::info!(
                ?collision,
                score = self.state.score(),
                length = self.state.snake().len(),
                ticks = self.state.ticks(),
                "game over"
            );
        }

        outcome
    }

    /// Paint the current state and show it
    pub fn repaint(&mut self) -> Result<()> {
        self.metrics.update();
        self.painter.paint(&mut self.surface, &self.state);
        self.surface.present(&self.metrics)
    }

    /// React to a key press. Returns true if the key started a new game.
    ///
    /// Any key pressed after game over starts a new game first; a steering
    /// key then also turns the fresh snake. Quitting is up to the caller.
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::Quit {
            return false;
        }

        let restarted = self.state.is_game_over();
        if restarted {
            self.restart();
        }

        if let KeyAction::Turn(direction) = action {
            self.state.change_direction(direction);
        }
        restarted
    }

    /// Replace the state with a fresh game
    pub fn restart(&mut self) {
        self.state = self.engine.reset();
        self.score_sink.set_score(self.state.score());
        self.metrics.on_game_start();
        tracing::info!(games_played = self.metrics.games_played, "game restarted");
    }

    /// Tear the context apart, handing back the surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ScoreBoard;
    use crate::game::{Direction, GameConfig, Phase, Position};
    use crate::render::RasterSurface;
    use crate::render::painter::{GAME_OVER_MESSAGE, SNAKE_COLOR};

    fn context() -> (GameContext<RasterSurface, ScoreBoard>, ScoreBoard) {
        let config = GameConfig::small().with_seed(11);
        let surface = RasterSurface::new(config.grid_width, config.grid_height, config.cell_size);
        let score = ScoreBoard::new();
        let ctx = GameContext::new(GameEngine::new(config), surface, score.clone());
        (ctx, score)
    }

    #[test]
    fn test_apple_updates_score_sink() {
        let (mut ctx, score) = context();
        ctx.state_mut().set_apple(Position::new(4, 0));

        let outcome = ctx.tick();

        assert!(outcome.ate_apple);
        assert_eq!(score.get(), 10);
        assert_eq!(ctx.metrics().apples_eaten, 1);
        assert_eq!(ctx.state().step_period_ms(), 275);
    }

    #[test]
    fn test_game_over_is_recorded() {
        let (mut ctx, _score) = context();
        ctx.state_mut().set_apple(Position::new(9, 9));
        ctx.handle_key(KeyAction::Turn(Direction::Up));

        let outcome = ctx.tick();

        assert!(outcome.ended_game());
        assert_eq!(ctx.state().phase(), Phase::GameOver);
        assert_eq!(ctx.metrics().games_played, 1);
    }

    #[test]
    fn test_any_key_restarts_after_game_over() {
        let (mut ctx, score) = context();
        ctx.state_mut().set_apple(Position::new(4, 0));
        ctx.tick();
        assert_eq!(score.get(), 10);
        ctx.state_mut().set_phase(Phase::GameOver);

        assert!(ctx.handle_key(KeyAction::Other));

        assert_eq!(ctx.state().phase(), Phase::Playing);
        assert_eq!(ctx.state().snake().len(), 4);
        assert_eq!(ctx.state().score(), 0);
        assert_eq!(score.get(), 0);
    }

    #[test]
    fn test_turn_key_restarts_and_steers() {
        let (mut ctx, _score) = context();
        ctx.state_mut().set_phase(Phase::GameOver);

        ctx.handle_key(KeyAction::Turn(Direction::Down));

        assert_eq!(ctx.state().phase(), Phase::Playing);
        assert_eq!(ctx.state().snake().heading(), Direction::Down);
    }

    #[test]
    fn test_keys_while_playing_do_not_restart() {
        let (mut ctx, _score) = context();
        ctx.state_mut().set_apple(Position::new(9, 9));
        ctx.tick();

        assert!(!ctx.handle_key(KeyAction::Other));
        assert!(!ctx.handle_key(KeyAction::Quit));

        assert_eq!(ctx.state().ticks(), 1);
        assert_eq!(ctx.state().snake().head(), Position::new(4, 0));
    }

    #[test]
    fn test_quit_does_not_restart() {
        let (mut ctx, _score) = context();
        ctx.state_mut().set_phase(Phase::GameOver);

        ctx.handle_key(KeyAction::Quit);

        assert_eq!(ctx.state().phase(), Phase::GameOver);
    }

    #[test]
    fn test_repaint_shows_state() {
        let (mut ctx, _score) = context();
        ctx.state_mut().set_apple(Position::new(9, 9));
        ctx.repaint().unwrap();
        assert_eq!(ctx.surface().cell(0, 0), Some(SNAKE_COLOR));

        ctx.state_mut().set_phase(Phase::GameOver);
        ctx.repaint().unwrap();
        assert_eq!(ctx.surface().message(), Some(GAME_OVER_MESSAGE));
    }
}
