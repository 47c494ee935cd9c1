use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    state::{Collision, GameState},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Collision that ended the game this tick
    pub collision: Option<Collision>,
}

impl TickOutcome {
    pub fn ended_game(&self) -> bool {
        self.collision.is_some()
    }
}

/// Applies ticks and builds fresh games
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// A configured seed makes every game, apple placement included,
    /// reproducible.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a game in its initial configuration
    pub fn reset(&mut self) -> GameState {
        let game_seed: u64 = self.rng.r#gen();
        GameState::new(&self.config, StdRng::seed_from_u64(game_seed))
    }

    /// Execute one tick of the game
    ///
    /// Eating grows the snake, moves the apple, speeds the game up and pays
    /// the reward, in that order. The collision check runs after the move.
    /// A finished game is left untouched.
    pub fn tick(&self, state: &mut GameState) -> TickOutcome {
        if state.is_game_over() {
            return TickOutcome::default();
        }

        let ate_apple = state.will_eat_apple();
        if ate_apple {
            state.grow();
            state.teleport_apple();
            state.speed_up_game();
            state.update_score();
        } else {
            state.move_ahead();
        }
        state.record_tick();

        let collision = Self::check_collision(state);
        if collision.is_some() {
            state.end_game();
        }

        TickOutcome {
            ate_apple,
            collision,
        }
    }

    fn check_collision(state: &GameState) -> Option<Collision> {
        if state.is_out_of_bounds() {
            return Some(Collision::Wall);
        }

        if state.eats_itself() {
            return Some(Collision::SelfCollision);
        }

        None
    }
}
