//! Ring Snake - a grid snake game with a ring-buffer body
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - The fixed-timestep frame driver and application context (driver module)
//! - Painting and terminal presentation (render module)
//! - Keyboard mapping and input sources (input module)
//! - Session statistics (metrics module)
//! - Interactive and headless execution modes (modes module)

pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
