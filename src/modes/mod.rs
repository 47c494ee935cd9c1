pub mod headless;
pub mod play;

pub use headless::{GameSummary, HeadlessMode};
pub use play::PlayMode;
