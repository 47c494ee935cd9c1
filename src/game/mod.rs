//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The snake body lives in a fixed-capacity ring of directions (see [`ring`]).

pub mod config;
pub mod direction;
pub mod engine;
pub mod ring;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, PacingConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use ring::DirectionRing;
pub use state::{BodyCells, Collision, GameState, Phase, Position, Snake};
