//! Painting the game and presenting it in the terminal

pub mod painter;
pub mod renderer;
pub mod surface;
pub mod terminal;

pub use painter::Painter;
pub use renderer::Renderer;
pub use surface::{DisplaySurface, RasterSurface, Rgb};
pub use terminal::TerminalSurface;
