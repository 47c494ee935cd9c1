use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Reasons a [`GameConfig`] cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid sides must be at most {max}, got {width}x{height}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("cell_size must be at least 1")]
    ZeroCellSize,

    #[error("a {width}x{height} grid at cell_size {cell_size} does not fit the display coordinates")]
    SurfaceTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },

    #[error("initial_snake_length must be in 1..={max}, got {length}")]
    SnakeLength { length: usize, max: usize },

    #[error("min_step_period_ms must be positive")]
    ZeroStepFloor,

    #[error("initial_step_period_ms ({initial}) is below min_step_period_ms ({floor})")]
    StepPeriodBelowFloor { initial: u32, floor: u32 },
}

/// Speed and reward progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Milliseconds between ticks at game start
    pub initial_step_period_ms: u32,
    /// Amount the step period shrinks per apple
    pub step_period_decrement_ms: u32,
    /// The step period never drops below this
    pub min_step_period_ms: u32,
    /// Reward for the first apple
    pub initial_reward: u32,
    /// Added to the reward after every apple
    pub reward_increment: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            initial_step_period_ms: 300,
            step_period_decrement_ms: 25,
            min_step_period_ms: 50,
            initial_reward: 10,
            reward_increment: 10,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Display units per cell side
    pub cell_size: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    pub pacing: PacingConfig,
    /// Seed for apple placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 40,
            cell_size: 10,
            initial_snake_length: 4,
            pacing: PacingConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Largest grid side; the bordered board must fit a terminal dimension
    pub const MAX_GRID_SIDE: usize = u16::MAX as usize - 2;

    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Number of cells on the board, which is also the direction ring capacity
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Size of the display surface in display units
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.grid_width as u32 * self.cell_size,
            self.grid_height as u32 * self.cell_size,
        )
    }

    /// Validate configuration parameters
    ///
    /// The initial snake is laid out along the top row, so it must fit the
    /// grid width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        let too_large = ConfigError::GridTooLarge {
            width: self.grid_width,
            height: self.grid_height,
            max: Self::MAX_GRID_SIDE,
        };
        if self.grid_width > Self::MAX_GRID_SIDE || self.grid_height > Self::MAX_GRID_SIDE {
            return Err(too_large);
        }
        if self.grid_width.checked_mul(self.grid_height).is_none() {
            return Err(too_large);
        }

        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        // Every cell corner, in display units, must be an i32.
        let limit = i32::MAX as u64;
        let cell_size = u64::from(self.cell_size);
        if self.grid_width as u64 * cell_size > limit || self.grid_height as u64 * cell_size > limit {
            return Err(ConfigError::SurfaceTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                cell_size: self.cell_size,
            });
        }

        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_width {
            return Err(ConfigError::SnakeLength {
                length: self.initial_snake_length,
                max: self.grid_width,
            });
        }

        if self.pacing.min_step_period_ms == 0 {
            return Err(ConfigError::ZeroStepFloor);
        }

        if self.pacing.initial_step_period_ms < self.pacing.min_step_period_ms {
            return Err(ConfigError::StepPeriodBelowFloor {
                initial: self.pacing.initial_step_period_ms,
                floor: self.pacing.min_step_period_ms,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.pacing.initial_step_period_ms, 300);
        assert_eq!(config.pacing.min_step_period_ms, 50);
        assert_eq!(config.surface_size(), (400, 400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.cell_count(), 180);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 10
            })
        );

        let mut config = GameConfig::new(3, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeLength { length: 4, max: 3 })
        ));
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.pacing.min_step_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepFloor));

        let mut config = GameConfig::default();
        config.pacing.initial_step_period_ms = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StepPeriodBelowFloor { .. })
        ));

        let mut config = GameConfig::default();
        config.cell_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn test_validate_rejects_oversized_values() {
        let max = GameConfig::MAX_GRID_SIDE;
        assert!(GameConfig::new(max, 1).validate().is_ok());
        assert!(matches!(
            GameConfig::new(max + 1, 1).validate(),
            Err(ConfigError::GridTooLarge { width, .. }) if width == max + 1
        ));
        assert!(matches!(
            GameConfig::new(65535, 1).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
        assert!(matches!(
            GameConfig::new(10, 70_000).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));

        let mut config = GameConfig::default();
        config.cell_size = 1_000_000_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::SurfaceTooLarge {
                width: 40,
                height: 40,
                cell_size: 1_000_000_000
            })
        );

        // 40 * 53_687_091 is just under i32::MAX.
        config.cell_size = 53_687_091;
        assert!(config.validate().is_ok());
        config.cell_size = 53_687_092;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_width": 20, "pacing": { "min_step_period_ms": 80 } }"#)
                .unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.pacing.min_step_period_ms, 80);
        assert_eq!(config.pacing.initial_step_period_ms, 300);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "ring_snake_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "grid_height": 25, "seed": 7 }"#).unwrap();

        let config = GameConfig::from_json_file(&path).unwrap();
        assert_eq!(config.grid_height, 25);
        assert_eq!(config.seed, Some(7));

        std::fs::remove_file(&path).unwrap();
        assert!(GameConfig::from_json_file(&path).is_err());
    }
}
