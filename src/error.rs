use std::io;
use thiserror::Error;

use crate::game::ConfigError;

/// Failures while preparing the environment, before the first frame.
///
/// All of them are fatal; the program reports once and exits.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("terminal unavailable: {0}")]
    Terminal(#[from] io::Error),

    #[error(
        "terminal is {cols}x{rows} but the board needs {needed_cols}x{needed_rows}; \
         enlarge the window or pass a smaller --width/--height"
    )]
    SurfaceTooSmall {
        needed_cols: u16,
        needed_rows: u16,
        cols: u16,
        rows: u16,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
