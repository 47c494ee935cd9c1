//! Keyboard input: key mapping and event sources

pub mod handler;
pub mod source;

pub use handler::{InputHandler, KeyAction};
pub use source::{InputSource, NoInput, TerminalInput};
